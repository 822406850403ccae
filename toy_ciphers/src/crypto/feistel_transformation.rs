use crate::crypto::encryption_transformation::EncryptionTransformation;

/// `F(half, key) = rotl8(half ^ key, 1)`
pub fn round_function(half: u8, round_key: u8) -> u8 {
    (half ^ round_key).rotate_left(1)
}

#[derive(Debug, Clone, Copy, Default)]
pub struct XorRotateTransformation;

impl EncryptionTransformation for XorRotateTransformation {
    fn transform(&self, half: u8, round_key: u8) -> u8 {
        round_function(half, round_key)
    }
}
