//! Demonstrates a CTR round trip with a deterministic key and IV.

use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;

use opossum::OpossumCtr;

fn main() {
    // Deterministic seed for reproducibility in the demo.
    let mut rng = ChaCha20Rng::from_seed([1u8; 32]);
    let mut key = [0u8; 256];
    let mut iv = [0u8; 32];
    rng.fill_bytes(&mut key);
    rng.fill_bytes(&mut iv);

    let plaintext = b"the quick brown opossum jumps over the lazy dog";
    let ctr = OpossumCtr::new();

    let ciphertext = ctr.encrypt(plaintext, &key, &iv).expect("valid sizes");
    let decrypted = ctr.decrypt(&ciphertext, &key, &iv).expect("valid sizes");

    println!("iv:         {}", hex::encode(iv));
    println!("plaintext:  {}", hex::encode(plaintext));
    println!("ciphertext: {}", hex::encode(&ciphertext));
    println!("decrypted:  {}", hex::encode(&decrypted));
    assert_eq!(decrypted.as_slice(), plaintext);

    println!("demo succeeded; round trip matches");
}
