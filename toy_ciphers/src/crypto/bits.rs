use crate::crypto::error::{CipherError, Result};
use bitvec::prelude::*;

/// Parses a textual bit string such as `"0110"`. Index 0 is the first character.
pub fn parse_bits(input: &str) -> Result<BitVec> {
    let mut bits = BitVec::with_capacity(input.len());
    for (pos, ch) in input.chars().enumerate() {
        match ch {
            '0' => bits.push(false),
            '1' => bits.push(true),
            other => {
                return Err(CipherError::InvalidInput(format!(
                    "bit string may only contain '0' and '1', found {other:?} at position {pos}"
                )));
            }
        }
    }
    Ok(bits)
}

pub fn format_bits(bits: &BitSlice) -> String {
    bits.iter().by_vals().map(|b| if b { '1' } else { '0' }).collect()
}

pub fn xor_bits(a: &BitSlice, b: &BitSlice) -> Result<BitVec> {
    if a.len() != b.len() {
        return Err(CipherError::InvalidInput(format!(
            "xor operands differ in length: {} vs {}",
            a.len(),
            b.len()
        )));
    }
    Ok(a.iter()
        .by_vals()
        .zip(b.iter().by_vals())
        .map(|(x, y)| x ^ y)
        .collect())
}

/// Reads `bits` as an unsigned integer, first bit most significant.
pub fn bits_to_value(bits: &BitSlice) -> usize {
    bits.iter()
        .by_vals()
        .fold(0, |acc, bit| (acc << 1) | bit as usize)
}

/// Pushes the low `width` bits of `value`, most significant first.
pub fn push_value(bits: &mut BitVec, value: usize, width: usize) {
    for i in (0..width).rev() {
        bits.push((value >> i) & 1 != 0);
    }
}

pub fn bytes_to_bits(input: &[u8]) -> BitVec {
    let mut bits = BitVec::with_capacity(input.len() * 8);
    for &byte in input {
        push_value(&mut bits, byte as usize, 8);
    }
    bits
}

pub fn bits_to_bytes(bits: &BitSlice) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(bits.len().div_ceil(8));

    for chunk in bits.chunks(8) {
        let mut byte = 0;
        for (i, bit) in chunk.iter().by_vals().enumerate() {
            if bit {
                byte |= 1 << (7 - i);
            }
        }
        bytes.push(byte);
    }
    bytes
}

pub fn ensure_width(bits: &BitSlice, width: usize, what: &str) -> Result<()> {
    if bits.len() != width {
        return Err(CipherError::InvalidInput(format!(
            "{what} must be {width} bits, got {}",
            bits.len()
        )));
    }
    Ok(())
}
