use bitvec::prelude::*;
use toy_ciphers::crypto::bits::{format_bits, parse_bits};
use toy_ciphers::crypto::error::CipherError;
use toy_ciphers::crypto::spn::*;

fn bits(s: &str) -> BitVec {
    parse_bits(s).unwrap()
}

#[test]
fn test_substitute_table() {
    assert_eq!(format_bits(&substitute(&bits("00")).unwrap()), "10");
    assert_eq!(format_bits(&substitute(&bits("01")).unwrap()), "00");
    assert_eq!(format_bits(&substitute(&bits("10")).unwrap()), "11");
    assert_eq!(format_bits(&substitute(&bits("11")).unwrap()), "01");
    assert_eq!(format_bits(&substitute(&bits("00011011")).unwrap()), "10001101");
}

#[test]
fn test_inv_substitute_undoes_every_group() {
    for group in ["00", "01", "10", "11"] {
        let substituted = substitute(&bits(group)).unwrap();
        assert_eq!(format_bits(&inv_substitute(&substituted).unwrap()), group);
    }
}

#[test]
fn test_substitute_rejects_odd_length() {
    assert!(matches!(
        substitute(&bits("101")),
        Err(CipherError::InvalidInput(_))
    ));
    assert!(inv_substitute(&bits("1")).is_err());
}

#[test]
fn test_substitute_empty_is_empty() {
    assert!(substitute(BitSlice::empty()).unwrap().is_empty());
}

#[test]
fn test_permute_moves_bits_within_each_half() {
    assert_eq!(format_bits(&permute(&bits("10000000")).unwrap()), "01000000");
    assert_eq!(format_bits(&permute(&bits("00001000")).unwrap()), "00000100");
    assert_eq!(format_bits(&permute(&bits("11010010")).unwrap()), "01111000");
    assert_eq!(format_bits(&inv_permute(&bits("01100001")).unwrap()), "11000001");
}

#[test]
fn test_permute_requires_eight_bits() {
    assert!(matches!(
        permute(&bits("1010")),
        Err(CipherError::InvalidInput(_))
    ));
    assert!(inv_permute(&bits("101010101")).is_err());
}

#[test]
fn test_derive_round_keys() {
    let (k1, k2) = derive_round_keys(&bits("10101100")).unwrap();
    assert_eq!(format_bits(&k1), "10101010");
    assert_eq!(format_bits(&k2), "11001100");
}

#[test]
fn test_reference_vector() {
    let (k1, k2) = derive_round_keys(&bits("10101100")).unwrap();
    let after_first = round_encrypt(&bits("01101101"), &k1).unwrap();
    assert_eq!(format_bits(&after_first), "10100001");

    let ciphertext = encrypt("01101101", "10101100").unwrap();
    assert_eq!(ciphertext, "10010010");

    let back = round_decrypt(&round_decrypt(&bits(&ciphertext), &k2).unwrap(), &k1).unwrap();
    assert_eq!(format_bits(&back), "01101101");
    assert_eq!(decrypt(&ciphertext, "10101100").unwrap(), "01101101");
}

#[test]
fn test_round_decrypt_inverts_round_encrypt() {
    let key = bits("01011010");
    for value in 0u8..=255 {
        let block = bits(&format!("{value:08b}"));
        let encrypted = round_encrypt(&block, &key).unwrap();
        assert_eq!(round_decrypt(&encrypted, &key).unwrap(), block);
    }
}

#[test]
fn test_rejects_non_binary_characters() {
    assert!(matches!(
        encrypt("0110a101", "10101100"),
        Err(CipherError::InvalidInput(_))
    ));
    assert!(matches!(
        decrypt("01101101", "1010 100"),
        Err(CipherError::InvalidInput(_))
    ));
}

#[test]
fn test_rejects_wrong_widths() {
    assert!(encrypt("0110110", "10101100").is_err());
    assert!(encrypt("01101101", "1010110").is_err());
    assert!(decrypt("011011011", "10101100").is_err());
}

use quickcheck::quickcheck;

quickcheck! {
    fn prop_decrypt_inverts_encrypt(pt: u8, key: u8) -> bool {
        let pt = format!("{pt:08b}");
        let key = format!("{key:08b}");
        let ct = encrypt(&pt, &key).unwrap();
        decrypt(&ct, &key).unwrap() == pt
    }

    fn prop_inv_permute_inverts_permute(block: u8) -> bool {
        let block = bits(&format!("{block:08b}"));
        inv_permute(&permute(&block).unwrap()).unwrap() == block
    }
}
