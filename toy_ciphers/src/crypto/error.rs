//! Error taxonomy shared by the SPN, Feistel and LFSR engines.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CipherError {
    /// Non-binary character, bad width or mismatched operand lengths.
    #[error("invalid input: {0}")]
    InvalidInput(String),
    /// Unknown shift direction, too many rounds or a bad key length.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    /// Tap position outside the register.
    #[error("index {index} is out of range for a register of length {len}")]
    IndexOutOfRange { index: usize, len: usize },
}

pub type Result<T> = std::result::Result<T, CipherError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_invalid_input() {
        let err = CipherError::InvalidInput("bit string may only contain '0' and '1'".into());
        assert_eq!(
            err.to_string(),
            "invalid input: bit string may only contain '0' and '1'"
        );
    }

    #[test]
    fn test_display_invalid_argument() {
        let err = CipherError::InvalidArgument("direction must be 'left' or 'right'".into());
        assert_eq!(
            err.to_string(),
            "invalid argument: direction must be 'left' or 'right'"
        );
    }

    #[test]
    fn test_display_index_out_of_range() {
        let err = CipherError::IndexOutOfRange { index: 4, len: 4 };
        assert_eq!(
            err.to_string(),
            "index 4 is out of range for a register of length 4"
        );
    }
}
