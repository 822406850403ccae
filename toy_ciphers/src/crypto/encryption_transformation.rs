/// Round function `F` of a Feistel network over 8-bit halves.
pub trait EncryptionTransformation {
    fn transform(&self, half: u8, round_key: u8) -> u8;
}
