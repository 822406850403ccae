//! Linear-feedback shift register stream cipher.
//!
//! On every step the feedback bit is the XOR of the state bits at the tap
//! positions (0 for no taps). Shifting right emits the last bit and feeds
//! back at the front; shifting left emits the first bit and feeds back at
//! the end. Encryption XORs the plaintext with the emitted bits, so
//! decryption is the same operation.

use crate::crypto::bits::{bits_to_bytes, bytes_to_bits, format_bits, parse_bits};
use crate::crypto::cipher_traits::{CipherAlgorithm, SymmetricCipher};
use crate::crypto::error::{CipherError, Result};
use bitvec::prelude::*;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    Left,
    #[default]
    Right,
}

impl FromStr for Direction {
    type Err = CipherError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "left" => Ok(Direction::Left),
            "right" => Ok(Direction::Right),
            other => Err(CipherError::InvalidArgument(format!(
                "direction must be 'left' or 'right', got {other:?}"
            ))),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Left => write!(f, "left"),
            Direction::Right => write!(f, "right"),
        }
    }
}

fn validate(state: &BitSlice, taps: &[usize]) -> Result<()> {
    if state.is_empty() {
        return Err(CipherError::InvalidInput(
            "LFSR state must hold at least one bit".into(),
        ));
    }
    if let Some(&index) = taps.iter().find(|&&t| t >= state.len()) {
        return Err(CipherError::IndexOutOfRange {
            index,
            len: state.len(),
        });
    }
    Ok(())
}

/// XOR of the state bits at `taps`. Taps must already be in range.
fn feedback(state: &BitSlice, taps: &[usize]) -> bool {
    taps.iter().fold(false, |acc, &t| acc ^ state[t])
}

/// Shifts `state` in place and returns the emitted bit.
fn advance(state: &mut BitVec, taps: &[usize], direction: Direction) -> bool {
    let fb = feedback(state, taps);
    match direction {
        Direction::Right => {
            let out = state.pop().unwrap_or_default();
            state.insert(0, fb);
            out
        }
        Direction::Left => {
            let out = state.remove(0);
            state.push(fb);
            out
        }
    }
}

/// Pure single step: returns the output bit and the successor state.
pub fn step(state: &BitSlice, taps: &[usize], direction: Direction) -> Result<(bool, BitVec)> {
    validate(state, taps)?;
    let mut next = state.to_bitvec();
    let out = advance(&mut next, taps, direction);
    Ok((out, next))
}

/// A validated register configuration. Stepping never mutates `self`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lfsr {
    state: BitVec,
    taps: Vec<usize>,
    direction: Direction,
}

impl Lfsr {
    pub fn new(state: BitVec, taps: Vec<usize>, direction: Direction) -> Result<Self> {
        validate(&state, &taps)?;
        Ok(Lfsr {
            state,
            taps,
            direction,
        })
    }

    /// Builds a register from the textual form, e.g. `("1011", &[0, 3], "right")`.
    pub fn from_bit_string(state: &str, taps: &[usize], direction: &str) -> Result<Self> {
        let state = parse_bits(state)?;
        let direction = direction.parse()?;
        Lfsr::new(state, taps.to_vec(), direction)
    }

    pub fn state(&self) -> &BitSlice {
        &self.state
    }

    pub fn taps(&self) -> &[usize] {
        &self.taps
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn step(&self) -> (bool, Lfsr) {
        let mut next = self.clone();
        let out = advance(&mut next.state, &self.taps, self.direction);
        (out, next)
    }

    /// Endless keystream starting from the current state.
    pub fn keystream(&self) -> Keystream {
        Keystream {
            register: self.clone(),
        }
    }

    /// XORs `bits` with the keystream.
    pub fn apply(&self, bits: &BitSlice) -> BitVec {
        bits.iter()
            .by_vals()
            .zip(self.keystream())
            .map(|(bit, key)| bit ^ key)
            .collect()
    }
}

/// Lazy keystream over a private copy of the register.
#[derive(Debug, Clone)]
pub struct Keystream {
    register: Lfsr,
}

impl Iterator for Keystream {
    type Item = bool;

    fn next(&mut self) -> Option<bool> {
        let Lfsr {
            state,
            taps,
            direction,
        } = &mut self.register;
        let out = advance(state, taps, *direction);
        log::trace!("lfsr emitted {} -> state {}", out as u8, format_bits(state));
        Some(out)
    }
}

pub fn generate_keystream(
    initial_state: &BitSlice,
    taps: &[usize],
    length: usize,
    direction: Direction,
) -> Result<BitVec> {
    let lfsr = Lfsr::new(initial_state.to_bitvec(), taps.to_vec(), direction)?;
    Ok(lfsr.keystream().take(length).collect())
}

pub fn encrypt(
    plaintext: &str,
    initial_state: &str,
    taps: &[usize],
    direction: &str,
) -> Result<String> {
    let plaintext = parse_bits(plaintext)?;
    let lfsr = Lfsr::from_bit_string(initial_state, taps, direction)?;
    log::debug!(
        "LFSR {} over {} bit(s), state {} taps {:?}",
        lfsr.direction(),
        plaintext.len(),
        format_bits(lfsr.state()),
        lfsr.taps()
    );
    Ok(format_bits(&lfsr.apply(&plaintext)))
}

/// Same operation as [`encrypt`].
pub fn decrypt(
    ciphertext: &str,
    initial_state: &str,
    taps: &[usize],
    direction: &str,
) -> Result<String> {
    encrypt(ciphertext, initial_state, taps, direction)
}

/// Byte-oriented LFSR stream cipher; every byte consumes eight keystream bits.
#[derive(Debug, Clone)]
pub struct LfsrCipher {
    lfsr: Lfsr,
}

impl LfsrCipher {
    pub fn new(lfsr: Lfsr) -> Self {
        LfsrCipher { lfsr }
    }

    pub fn lfsr(&self) -> &Lfsr {
        &self.lfsr
    }
}

impl CipherAlgorithm for LfsrCipher {
    fn encrypt(&self, data: &[u8]) -> Result<Vec<u8>> {
        log::debug!("LFSR encrypt {} byte(s)", data.len());
        Ok(bits_to_bytes(&self.lfsr.apply(&bytes_to_bits(data))))
    }

    fn decrypt(&self, data: &[u8]) -> Result<Vec<u8>> {
        self.encrypt(data)
    }
}

impl SymmetricCipher for LfsrCipher {
    /// Replaces the initial state with the key bits, keeping taps and direction.
    fn set_key(&mut self, key: &[u8]) -> Result<()> {
        self.lfsr = Lfsr::new(
            bytes_to_bits(key),
            self.lfsr.taps.clone(),
            self.lfsr.direction,
        )?;
        Ok(())
    }
}
