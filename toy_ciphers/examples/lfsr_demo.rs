use toy_ciphers::Result;
use toy_ciphers::crypto::lfsr::{decrypt, encrypt};

fn main() -> Result<()> {
    env_logger::init();

    let plaintext = "0110";
    let initial_state = "1011";
    let taps = [0, 3];

    for direction in ["right", "left"] {
        let ciphertext = encrypt(plaintext, initial_state, &taps, direction)?;
        let decrypted = decrypt(&ciphertext, initial_state, &taps, direction)?;
        println!("{direction:>5}: {plaintext} -> {ciphertext} -> {decrypted}");
        assert_eq!(decrypted, plaintext);
    }
    Ok(())
}
