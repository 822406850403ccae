use toy_ciphers::crypto::bits::{format_bits, parse_bits};
use toy_ciphers::crypto::spn::{derive_round_keys, round_decrypt, round_encrypt};
use toy_ciphers::Result;

fn main() -> Result<()> {
    env_logger::init();

    let pt = "01101101";
    let key = "10101100";
    let (k1, k2) = derive_round_keys(&parse_bits(key)?)?;

    println!("Plaintext:  {pt}");
    println!("Key:        {key} (k1 = {}, k2 = {})", format_bits(&k1), format_bits(&k2));

    let r1 = round_encrypt(&parse_bits(pt)?, &k1)?;
    let ciphertext = round_encrypt(&r1, &k2)?;
    println!("Ciphertext: {}", format_bits(&ciphertext));

    let d1 = round_decrypt(&ciphertext, &k2)?;
    let decrypted = round_decrypt(&d1, &k1)?;
    println!("Decrypted:  {}", format_bits(&decrypted));

    assert_eq!(format_bits(&decrypted), pt);
    Ok(())
}
