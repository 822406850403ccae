use toy_ciphers::crypto::feistel::{feistel_decrypt, feistel_encrypt};

fn main() {
    env_logger::init();

    let keys = [0x0F, 0x36, 0xA7, 0x55];
    let plaintext: u16 = 0x1234;

    let encrypted = feistel_encrypt(plaintext, &keys);
    let decrypted = feistel_decrypt(encrypted, &keys);

    println!("Plaintext:  {plaintext:#018b}");
    println!("Encrypted:  {encrypted:#018b}");
    println!("Decrypted:  {decrypted:#018b}");

    assert_eq!(decrypted, plaintext);
}
