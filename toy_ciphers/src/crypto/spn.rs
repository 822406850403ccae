//! Two-round substitution-permutation network over 8-bit blocks.
//!
//! Each round XORs the block with an 8-bit round key, pushes every 2-bit
//! group through [`SBOX`] and then shuffles the bits of each 4-bit half with
//! [`PERMUTATION`]. The two round keys come from the nibbles of a one-byte
//! key, see [`SpnKeyExpansion`].

use crate::crypto::bits::{
    bits_to_bytes, bits_to_value, bytes_to_bits, ensure_width, format_bits, parse_bits,
    push_value, xor_bits,
};
use crate::crypto::cipher_traits::{BlockCipher, CipherAlgorithm, SymmetricCipher};
use crate::crypto::error::{CipherError, Result};
use crate::crypto::key_expansion::KeyExpansion;
use crate::crypto::spn_key_expansion::{SpnKeyExpansion, nibble_round_keys};
use bitvec::prelude::*;

pub const BLOCK_BITS: usize = 8;
const GROUP_BITS: usize = 2;
const HALF_BITS: usize = 4;

/// Direct S-box indexed by the 2-bit group: 00→10, 01→00, 10→11, 11→01.
pub const SBOX: [u8; 4] = [0b10, 0b00, 0b11, 0b01];
pub const INV_SBOX: [u8; 4] = invert_sbox(&SBOX);

/// Output bit `i` of each half takes input bit `PERMUTATION[i]`.
pub const PERMUTATION: [usize; HALF_BITS] = [2, 0, 1, 3];
pub const INV_PERMUTATION: [usize; HALF_BITS] = [1, 2, 0, 3];

const fn invert_sbox(table: &[u8; 4]) -> [u8; 4] {
    let mut inverse = [0u8; 4];
    let mut i = 0;
    while i < table.len() {
        inverse[table[i] as usize] = i as u8;
        i += 1;
    }
    inverse
}

fn apply_sbox(bits: &BitSlice, table: &[u8; 4]) -> Result<BitVec> {
    if bits.len() % GROUP_BITS != 0 {
        return Err(CipherError::InvalidInput(format!(
            "S-box input must have an even number of bits, got {}",
            bits.len()
        )));
    }

    let mut out = BitVec::with_capacity(bits.len());
    for group in bits.chunks(GROUP_BITS) {
        push_value(&mut out, table[bits_to_value(group)] as usize, GROUP_BITS);
    }
    Ok(out)
}

fn apply_permutation(bits: &BitSlice, mapping: &[usize; HALF_BITS]) -> Result<BitVec> {
    ensure_width(bits, BLOCK_BITS, "permutation input")?;

    let mut out = BitVec::with_capacity(BLOCK_BITS);
    for half in bits.chunks(HALF_BITS) {
        out.extend(mapping.iter().map(|&i| half[i]));
    }
    Ok(out)
}

pub fn substitute(bits: &BitSlice) -> Result<BitVec> {
    apply_sbox(bits, &SBOX)
}

pub fn inv_substitute(bits: &BitSlice) -> Result<BitVec> {
    apply_sbox(bits, &INV_SBOX)
}

pub fn permute(bits: &BitSlice) -> Result<BitVec> {
    apply_permutation(bits, &PERMUTATION)
}

pub fn inv_permute(bits: &BitSlice) -> Result<BitVec> {
    apply_permutation(bits, &INV_PERMUTATION)
}

/// `permute(substitute(block ^ round_key))`
pub fn round_encrypt(block: &BitSlice, round_key: &BitSlice) -> Result<BitVec> {
    ensure_width(block, BLOCK_BITS, "SPN block")?;
    let mixed = xor_bits(block, round_key)?;
    permute(&substitute(&mixed)?)
}

/// `inv_substitute(inv_permute(block)) ^ round_key`
pub fn round_decrypt(block: &BitSlice, round_key: &BitSlice) -> Result<BitVec> {
    let unmixed = inv_substitute(&inv_permute(block)?)?;
    xor_bits(&unmixed, round_key)
}

/// Returns `(k1, k2)` for an 8-bit key.
pub fn derive_round_keys(key: &BitSlice) -> Result<(BitVec, BitVec)> {
    ensure_width(key, BLOCK_BITS, "SPN key")?;
    let round_keys = SpnKeyExpansion.generate_round_keys(&bits_to_bytes(key))?;
    Ok((
        bytes_to_bits(&round_keys[..1]),
        bytes_to_bits(&round_keys[1..]),
    ))
}

pub fn encrypt_block(block: &BitSlice, key: &BitSlice) -> Result<BitVec> {
    let (k1, k2) = derive_round_keys(key)?;
    round_encrypt(&round_encrypt(block, &k1)?, &k2)
}

pub fn decrypt_block(block: &BitSlice, key: &BitSlice) -> Result<BitVec> {
    let (k1, k2) = derive_round_keys(key)?;
    round_decrypt(&round_decrypt(block, &k2)?, &k1)
}

/// Encrypts an 8-character bit string under an 8-character bit-string key.
pub fn encrypt(plaintext: &str, key: &str) -> Result<String> {
    let block = parse_bits(plaintext)?;
    let key = parse_bits(key)?;
    log::debug!("SPN encrypt {plaintext} under key {}", format_bits(&key));
    Ok(format_bits(&encrypt_block(&block, &key)?))
}

pub fn decrypt(ciphertext: &str, key: &str) -> Result<String> {
    let block = parse_bits(ciphertext)?;
    let key = parse_bits(key)?;
    log::debug!("SPN decrypt {ciphertext} under key {}", format_bits(&key));
    Ok(format_bits(&decrypt_block(&block, &key)?))
}

/// Byte-oriented SPN: every byte is one block.
#[derive(Debug, Clone)]
pub struct Spn {
    round_keys: [BitVec; 2],
}

impl Spn {
    pub fn new(key: u8) -> Self {
        Spn {
            round_keys: nibble_round_keys(key).map(|k| bytes_to_bits(&[k])),
        }
    }

    fn process(
        &self,
        data: &[u8],
        round: fn(&BitSlice, &BitSlice) -> Result<BitVec>,
        keys: [&BitSlice; 2],
    ) -> Result<Vec<u8>> {
        let mut out = Vec::with_capacity(data.len());
        for &byte in data {
            let mut block = bytes_to_bits(&[byte]);
            for key in keys {
                block = round(&block, key)?;
            }
            out.extend(bits_to_bytes(&block));
        }
        Ok(out)
    }
}

impl CipherAlgorithm for Spn {
    fn encrypt(&self, data: &[u8]) -> Result<Vec<u8>> {
        log::debug!("SPN encrypt {} byte(s)", data.len());
        let [k1, k2] = &self.round_keys;
        self.process(data, round_encrypt, [k1, k2])
    }

    fn decrypt(&self, data: &[u8]) -> Result<Vec<u8>> {
        log::debug!("SPN decrypt {} byte(s)", data.len());
        let [k1, k2] = &self.round_keys;
        self.process(data, round_decrypt, [k2, k1])
    }
}

impl SymmetricCipher for Spn {
    fn set_key(&mut self, key: &[u8]) -> Result<()> {
        let round_keys = SpnKeyExpansion.generate_round_keys(key)?;
        self.round_keys = [bytes_to_bits(&round_keys[..1]), bytes_to_bits(&round_keys[1..])];
        Ok(())
    }
}

impl BlockCipher for Spn {
    fn block_size(&self) -> usize {
        1
    }
}
