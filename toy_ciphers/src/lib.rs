pub mod crypto;
pub use crypto::cipher_traits::*;
pub use crypto::error::{CipherError, Result};
pub use crypto::feistel::FeistelCipher;
pub use crypto::lfsr::{Direction, Lfsr, LfsrCipher};
pub use crypto::spn::Spn;
