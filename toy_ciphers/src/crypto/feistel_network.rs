use crate::crypto::encryption_transformation::EncryptionTransformation;
use crate::crypto::error::{CipherError, Result};
use std::sync::Arc;

/// Feistel network over 16-bit blocks split into two 8-bit halves.
#[derive(Clone)]
pub struct FeistelNetwork {
    num_round: Option<usize>,
    transformation: Arc<dyn EncryptionTransformation + Send + Sync>,
}

pub fn split_block(block: u16) -> (u8, u8) {
    let [left, right] = block.to_be_bytes();
    (left, right)
}

pub fn join_block(left: u8, right: u8) -> u16 {
    u16::from_be_bytes([left, right])
}

impl FeistelNetwork {
    /// Runs one round per supplied round key unless [`with_rounds`](Self::with_rounds) is set.
    pub fn new(transformation: Arc<dyn EncryptionTransformation + Send + Sync>) -> Self {
        Self {
            num_round: None,
            transformation,
        }
    }

    pub fn with_rounds(mut self, num_round: usize) -> Self {
        self.num_round = Some(num_round);
        self
    }

    fn rounds(&self, round_keys: &[u8]) -> Result<usize> {
        match self.num_round {
            None => Ok(round_keys.len()),
            Some(n) if n <= round_keys.len() => Ok(n),
            Some(n) => Err(CipherError::InvalidArgument(format!(
                "{n} rounds requested but only {} round keys supplied",
                round_keys.len()
            ))),
        }
    }

    /// `(left, right) -> (right, left ^ F(right, key))`
    pub fn round(&self, left: u8, right: u8, round_key: u8) -> (u8, u8) {
        (right, left ^ self.transformation.transform(right, round_key))
    }

    /// Undoes [`round`](Self::round) for the same key.
    pub fn inverse_round(&self, left: u8, right: u8, round_key: u8) -> (u8, u8) {
        (right ^ self.transformation.transform(left, round_key), left)
    }

    pub fn encrypt_with_round_keys(&self, block: u16, round_keys: &[u8]) -> Result<u16> {
        let rounds = self.rounds(round_keys)?;
        let (mut left, mut right) = split_block(block);

        for (index, &key) in round_keys[..rounds].iter().enumerate() {
            (left, right) = self.round(left, right, key);
            log::trace!("feistel round {index}: L={left:02X} R={right:02X}");
        }
        Ok(join_block(left, right))
    }

    pub fn decrypt_with_round_keys(&self, block: u16, round_keys: &[u8]) -> Result<u16> {
        let rounds = self.rounds(round_keys)?;
        let (mut left, mut right) = split_block(block);

        for (index, &key) in round_keys[..rounds].iter().enumerate().rev() {
            (left, right) = self.inverse_round(left, right, key);
            log::trace!("feistel inverse round {index}: L={left:02X} R={right:02X}");
        }
        Ok(join_block(left, right))
    }
}
