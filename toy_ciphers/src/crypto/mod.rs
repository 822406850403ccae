pub mod bits;
pub mod cipher_traits;
pub mod encryption_transformation;
pub mod error;
pub mod feistel;
pub mod feistel_network;
pub mod feistel_transformation;
pub mod key_expansion;
pub mod lfsr;
pub mod spn;
pub mod spn_key_expansion;
