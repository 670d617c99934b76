//! Integration tests for the PassVault crypto module.

use passvault::crypto::encryption::{decrypt, encrypt, generate_nonce};
use passvault::crypto::kdf::{
    derive_key, derive_key_with_params, generate_salt, Argon2Params,
};

// ---------------------------------------------------------------------------
// Encryption round-trip
// ---------------------------------------------------------------------------

#[test]
fn encrypt_decrypt_roundtrip() {
    let key = [0xABu8; 32];
    let nonce = generate_nonce();
    let plaintext = b"{\"entries\":[{\"name\":\"github\"}]}";

    let ciphertext = encrypt(&key, &nonce, plaintext).expect("encrypt should succeed");

    // Ciphertext must be longer than plaintext (16-byte auth tag).
    assert!(ciphertext.len() > plaintext.len());

    let recovered = decrypt(&key, &nonce, &ciphertext).expect("decrypt should succeed");
    assert_eq!(recovered, plaintext);
}

#[test]
fn different_nonces_produce_different_ciphertext() {
    let key = [0xCDu8; 32];
    let plaintext = b"same plaintext";

    let nonce1 = generate_nonce();
    let nonce2 = generate_nonce();
    assert_ne!(nonce1, nonce2, "two generated nonces must differ");

    let ct1 = encrypt(&key, &nonce1, plaintext).expect("encrypt 1");
    let ct2 = encrypt(&key, &nonce2, plaintext).expect("encrypt 2");

    assert_ne!(
        ct1, ct2,
        "same plaintext under different nonces must differ"
    );
}

#[test]
fn decrypt_with_wrong_key_fails() {
    let key = [0x11u8; 32];
    let wrong_key = [0x22u8; 32];
    let nonce = generate_nonce();

    let ciphertext = encrypt(&key, &nonce, b"top secret").expect("encrypt");
    let result = decrypt(&wrong_key, &nonce, &ciphertext);

    assert!(result.is_err(), "decryption with the wrong key must fail");
}

#[test]
fn decrypt_with_wrong_nonce_fails() {
    let key = [0x33u8; 32];
    let nonce = [0x01u8; 12];
    let wrong_nonce = [0x02u8; 12];

    let ciphertext = encrypt(&key, &nonce, b"top secret").expect("encrypt");
    let result = decrypt(&key, &wrong_nonce, &ciphertext);

    assert!(result.is_err(), "decryption with the wrong nonce must fail");
}

#[test]
fn decrypt_with_truncated_data_fails() {
    // Anything shorter than 16 bytes (tag length) should fail.
    let key = [0xAAu8; 32];
    let nonce = generate_nonce();
    let result = decrypt(&key, &nonce, &[0u8; 5]);
    assert!(result.is_err(), "truncated ciphertext must fail");
}

#[test]
fn decrypt_with_corrupted_ciphertext_fails() {
    let key = [0xBBu8; 32];
    let nonce = generate_nonce();

    let mut ciphertext = encrypt(&key, &nonce, b"value").expect("encrypt");

    // Flip a single bit in the ciphertext body.
    ciphertext[0] ^= 0x01;

    let result = decrypt(&key, &nonce, &ciphertext);
    assert!(result.is_err(), "corrupted ciphertext must fail auth check");
}

#[test]
fn decrypt_with_corrupted_tag_fails() {
    let key = [0xEEu8; 32];
    let nonce = generate_nonce();

    let mut ciphertext = encrypt(&key, &nonce, b"value").expect("encrypt");

    // Flip a single bit in the trailing auth tag.
    let last = ciphertext.len() - 1;
    ciphertext[last] ^= 0x01;

    let result = decrypt(&key, &nonce, &ciphertext);
    assert!(result.is_err(), "corrupted tag must fail auth check");
}

// ---------------------------------------------------------------------------
// Key derivation (Argon2id)
// ---------------------------------------------------------------------------

#[test]
fn derive_key_same_inputs_same_output() {
    let password = b"my-secure-passphrase";
    let salt = generate_salt().expect("salt");

    let key1 = derive_key(password, &salt).expect("derive 1");
    let key2 = derive_key(password, &salt).expect("derive 2");

    assert_eq!(key1, key2, "same password + salt must produce the same key");
}

#[test]
fn derive_key_different_salts_different_keys() {
    let password = b"same-password";
    let salt1 = generate_salt().expect("salt 1");
    let salt2 = generate_salt().expect("salt 2");
    assert_ne!(salt1, salt2, "two generated salts must differ");

    let key1 = derive_key(password, &salt1).expect("derive 1");
    let key2 = derive_key(password, &salt2).expect("derive 2");

    assert_ne!(key1, key2, "different salts must produce different keys");
}

#[test]
fn derive_key_different_passwords_different_keys() {
    let salt = generate_salt().expect("salt");

    let key1 = derive_key(b"password-one", &salt).expect("derive 1");
    let key2 = derive_key(b"password-two", &salt).expect("derive 2");

    assert_ne!(
        key1, key2,
        "different passwords must produce different keys"
    );
}

#[test]
fn derive_key_rejects_lowered_memory_cost() {
    let salt = [0u8; 16];
    let weak = Argon2Params {
        memory_kib: 8_192,
        ..Argon2Params::default()
    };

    let result = derive_key_with_params(b"pw", &salt, &weak);
    assert!(result.is_err(), "memory below the floor must be rejected");
}

#[test]
fn derive_key_rejects_lowered_iterations() {
    let salt = [0u8; 16];
    let weak = Argon2Params {
        iterations: 1,
        ..Argon2Params::default()
    };

    let result = derive_key_with_params(b"pw", &salt, &weak);
    assert!(result.is_err(), "iterations below the floor must be rejected");
}

#[test]
fn derive_key_accepts_raised_iterations() {
    let salt = [0u8; 16];
    let stronger = Argon2Params {
        iterations: 3,
        ..Argon2Params::default()
    };

    let key = derive_key_with_params(b"pw", &salt, &stronger).expect("derive");
    let default_key = derive_key(b"pw", &salt).expect("derive default");

    // Raised cost is a different KDF instance, so the key changes too.
    assert_ne!(key, default_key);
}

// ---------------------------------------------------------------------------
// End-to-end: password -> key -> encrypt/decrypt
// ---------------------------------------------------------------------------

#[test]
fn full_crypto_pipeline() {
    let password = b"hunter2-hunter2";
    let salt = generate_salt().expect("salt");
    let nonce = generate_nonce();

    let key = derive_key(password, &salt).expect("derive key");

    let plaintext = b"{\"entries\":[]}";
    let ciphertext = encrypt(&key, &nonce, plaintext).expect("encrypt");

    // Re-derive from the same password + salt, as open() does.
    let rederived = derive_key(password, &salt).expect("re-derive key");
    let recovered = decrypt(&rederived, &nonce, &ciphertext).expect("decrypt");

    assert_eq!(recovered, plaintext.to_vec());
}
