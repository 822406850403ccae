use crate::crypto::error::Result;

pub trait KeyExpansion {
    /// Splits `key` into the ordered round keys, one byte per round.
    fn generate_round_keys(&self, key: &[u8]) -> Result<Vec<u8>>;
}
