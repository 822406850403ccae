use crate::crypto::error::{CipherError, Result};
use crate::crypto::key_expansion::KeyExpansion;

/// Derives the two SPN round keys from a one-byte key: the high nibble
/// repeated twice, then the low nibble repeated twice.
#[derive(Debug, Clone, Copy, Default)]
pub struct SpnKeyExpansion;

impl KeyExpansion for SpnKeyExpansion {
    fn generate_round_keys(&self, key: &[u8]) -> Result<Vec<u8>> {
        let &[key] = key else {
            return Err(CipherError::InvalidArgument(format!(
                "SPN key must be 1 byte, got {}",
                key.len()
            )));
        };

        Ok(nibble_round_keys(key).to_vec())
    }
}

pub fn nibble_round_keys(key: u8) -> [u8; 2] {
    let high = key >> 4;
    let low = key & 0x0F;
    [(high << 4) | high, (low << 4) | low]
}
