use crate::crypto::error::Result;

pub trait CipherAlgorithm {
    fn encrypt(&self, data: &[u8]) -> Result<Vec<u8>>;
    fn decrypt(&self, data: &[u8]) -> Result<Vec<u8>>;
}

pub trait SymmetricCipher: CipherAlgorithm {
    fn set_key(&mut self, key: &[u8]) -> Result<()>;
}

pub trait BlockCipher: SymmetricCipher {
    /// Block width in bytes.
    fn block_size(&self) -> usize;
}
