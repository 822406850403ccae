//! 16-bit Feistel cipher with the XOR-and-rotate round function.
//!
//! The free functions use every supplied round key, in order, as one round.
//! The `_rounds` variants cap the round count explicitly. Decryption replays
//! the keys backwards through the inverse round, so
//! `feistel_decrypt(feistel_encrypt(b, ks), ks) == b` for any key list.

use crate::crypto::cipher_traits::{BlockCipher, CipherAlgorithm, SymmetricCipher};
use crate::crypto::error::{CipherError, Result};
use crate::crypto::feistel_network::{FeistelNetwork, join_block, split_block};
use crate::crypto::feistel_transformation::{XorRotateTransformation, round_function};
use crate::crypto::key_expansion::KeyExpansion;
use std::sync::Arc;

pub const BLOCK_BYTES: usize = 2;

/// One forward round: `left' = right`, `right' = left ^ F(right, key)`.
pub fn feistel_round(left: u8, right: u8, round_key: u8) -> (u8, u8) {
    (right, left ^ round_function(right, round_key))
}

/// Undoes [`feistel_round`] for the same key.
pub fn inverse_feistel_round(left: u8, right: u8, round_key: u8) -> (u8, u8) {
    (right ^ round_function(left, round_key), left)
}

pub fn feistel_encrypt(block: u16, round_keys: &[u8]) -> u16 {
    let (left, right) = round_keys
        .iter()
        .fold(split_block(block), |(l, r), &k| feistel_round(l, r, k));
    join_block(left, right)
}

pub fn feistel_decrypt(block: u16, round_keys: &[u8]) -> u16 {
    let (left, right) = round_keys
        .iter()
        .rev()
        .fold(split_block(block), |(l, r), &k| inverse_feistel_round(l, r, k));
    join_block(left, right)
}

/// Encrypts with the first `rounds` keys only.
pub fn feistel_encrypt_rounds(block: u16, round_keys: &[u8], rounds: usize) -> Result<u16> {
    FeistelNetwork::new(Arc::new(XorRotateTransformation))
        .with_rounds(rounds)
        .encrypt_with_round_keys(block, round_keys)
}

pub fn feistel_decrypt_rounds(block: u16, round_keys: &[u8], rounds: usize) -> Result<u16> {
    FeistelNetwork::new(Arc::new(XorRotateTransformation))
        .with_rounds(rounds)
        .decrypt_with_round_keys(block, round_keys)
}

/// One round key per key byte, in order.
#[derive(Debug, Clone, Copy, Default)]
pub struct FeistelKeyExpansion;

impl KeyExpansion for FeistelKeyExpansion {
    fn generate_round_keys(&self, key: &[u8]) -> Result<Vec<u8>> {
        if key.is_empty() {
            return Err(CipherError::InvalidArgument(
                "Feistel key must supply at least one round key".into(),
            ));
        }
        Ok(key.to_vec())
    }
}

/// Byte-oriented Feistel cipher over big-endian 2-byte blocks.
#[derive(Clone)]
pub struct FeistelCipher {
    feistel_network: FeistelNetwork,
    round_keys: Vec<u8>,
}

impl FeistelCipher {
    pub fn new(round_keys: &[u8]) -> Result<Self> {
        let mut cipher = FeistelCipher {
            feistel_network: FeistelNetwork::new(Arc::new(XorRotateTransformation)),
            round_keys: Vec::new(),
        };
        cipher.set_key(round_keys)?;
        Ok(cipher)
    }

    /// Runs only the first `rounds` round keys.
    pub fn with_rounds(mut self, rounds: usize) -> Result<Self> {
        if rounds > self.round_keys.len() {
            return Err(CipherError::InvalidArgument(format!(
                "{rounds} rounds requested but only {} round keys supplied",
                self.round_keys.len()
            )));
        }
        self.feistel_network = self.feistel_network.with_rounds(rounds);
        Ok(self)
    }

    fn process(&self, data: &[u8], f: impl Fn(u16) -> Result<u16>) -> Result<Vec<u8>> {
        if data.len() % BLOCK_BYTES != 0 {
            return Err(CipherError::InvalidInput(format!(
                "Feistel input must be a multiple of {BLOCK_BYTES} bytes, got {}",
                data.len()
            )));
        }

        let mut out = Vec::with_capacity(data.len());
        for chunk in data.chunks_exact(BLOCK_BYTES) {
            let block = u16::from_be_bytes([chunk[0], chunk[1]]);
            out.extend_from_slice(&f(block)?.to_be_bytes());
        }
        Ok(out)
    }
}

impl CipherAlgorithm for FeistelCipher {
    fn encrypt(&self, data: &[u8]) -> Result<Vec<u8>> {
        log::debug!(
            "Feistel encrypt {} byte(s) with {} round key(s)",
            data.len(),
            self.round_keys.len()
        );
        self.process(data, |block| {
            self.feistel_network
                .encrypt_with_round_keys(block, &self.round_keys)
        })
    }

    fn decrypt(&self, data: &[u8]) -> Result<Vec<u8>> {
        log::debug!(
            "Feistel decrypt {} byte(s) with {} round key(s)",
            data.len(),
            self.round_keys.len()
        );
        self.process(data, |block| {
            self.feistel_network
                .decrypt_with_round_keys(block, &self.round_keys)
        })
    }
}

impl SymmetricCipher for FeistelCipher {
    fn set_key(&mut self, key: &[u8]) -> Result<()> {
        self.round_keys = FeistelKeyExpansion.generate_round_keys(key)?;
        Ok(())
    }
}

impl BlockCipher for FeistelCipher {
    fn block_size(&self) -> usize {
        BLOCK_BYTES
    }
}
