//! `RsaCryptoSystem` 提供了基于教科书 RSA 与 PKCS#1 v1.5 填充的非对称加解密功能。
//!
//! Everything here is built from elementary number theory: primes come from
//! [`crate::asymmetric::primes`], padding from [`crate::asymmetric::padding`].
//! There is no OAEP and no constant-time arithmetic.

pub mod keys;

pub use keys::{
    PUBLIC_EXPONENT, PrivateKey, PublicKey, load_private_key, load_public_key,
    serialize_private_key, serialize_public_key,
};

use crate::asymmetric::padding::{left_pad, pad_pkcs1_v15, unpad_pkcs1_v15};
use crate::asymmetric::primes::{generate_prime, mod_inverse};
use crate::asymmetric::traits::AsymmetricCryptographicSystem;
use crate::common::config::CryptoConfig;
use crate::common::errors::{Error, Result};
use crate::common::utils::{from_base64, to_base64};
use num_bigint::BigUint;
use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};
use zeroize::Zeroizing;

/// Generates a key pair whose modulus is exactly `key_size` bits.
///
/// `key_size` must be 512, 1024 or 2048 and `rounds` at least 1. Candidate
/// pairs with `p == q`, a modulus of the wrong length or an exponent not
/// coprime to `phi` are silently regenerated.
pub fn generate_keypair<R>(
    key_size: usize,
    rounds: usize,
    rng: &mut R,
) -> Result<(PrivateKey, PublicKey)>
where
    R: RngCore + CryptoRng + ?Sized,
{
    CryptoConfig {
        rsa_key_bits: key_size,
        miller_rabin_rounds: rounds,
    }
    .validate()?;

    let e = BigUint::from(PUBLIC_EXPONENT);
    let p_bits = key_size / 2;
    let q_bits = key_size - p_bits;

    let mut attempt = 0u32;
    loop {
        attempt += 1;
        let p = generate_prime(p_bits as u64, rounds, rng)?;
        let q = generate_prime(q_bits as u64, rounds, rng)?;
        if p == q {
            tracing::debug!(attempt, "p == q, regenerating");
            continue;
        }

        let n = &p * &q;
        if n.bits() != key_size as u64 {
            tracing::debug!(attempt, bits = n.bits(), "modulus has wrong length, regenerating");
            continue;
        }

        let phi = (&p - 1u32) * (&q - 1u32);
        let Some(d) = mod_inverse(&e, &phi) else {
            tracing::debug!(attempt, "exponent not coprime to phi, regenerating");
            continue;
        };

        tracing::info!(bits = key_size, attempts = attempt, "generated RSA key pair");
        return Ok((PrivateKey::new(n.clone(), d), PublicKey::new(n, e)));
    }
}

/// Encrypts UTF-8 `message` and returns the base64 ciphertext.
///
/// The message may be at most `k - 11` bytes, `k` being the modulus length in
/// bytes. Random padding makes every call produce a different ciphertext.
pub fn encrypt<R>(message: &str, public_key: &PublicKey, rng: &mut R) -> Result<String>
where
    R: RngCore + CryptoRng + ?Sized,
{
    let k = public_key.size();
    let block = pad_pkcs1_v15(message.as_bytes(), k, rng)?;

    // leading 0x00 keeps m below n
    let m = BigUint::from_bytes_be(&block);
    debug_assert!(m < *public_key.n());

    let c = m.modpow(public_key.e(), public_key.n());
    Ok(to_base64(&left_pad(c.to_bytes_be(), k)))
}

/// Decrypts a base64 ciphertext produced by [`encrypt`].
///
/// Every failure (bad base64, out-of-range value, bad padding, non-UTF-8
/// plaintext, wrong key) is reported as [`Error::DecryptionFailed`].
pub fn decrypt(ciphertext: &str, private_key: &PrivateKey) -> Result<String> {
    try_decrypt(ciphertext, private_key).ok_or_else(|| {
        tracing::debug!("RSA decryption failed");
        Error::DecryptionFailed
    })
}

fn try_decrypt(ciphertext: &str, private_key: &PrivateKey) -> Option<String> {
    let bytes = from_base64(ciphertext.trim()).ok()?;
    let c = BigUint::from_bytes_be(&bytes);
    if c >= *private_key.n() {
        return None;
    }

    let m = c.modpow(private_key.d(), private_key.n());
    // to_bytes_be drops the leading 0x00 of the block
    let block = Zeroizing::new(left_pad(m.to_bytes_be(), private_key.size()));
    let message = unpad_pkcs1_v15(&block)?;
    String::from_utf8(message.to_vec()).ok()
}

/// RSA加密系统实现
///
/// Uses the operating-system RNG for key generation and padding.
pub struct RsaCryptoSystem;

impl AsymmetricCryptographicSystem for RsaCryptoSystem {
    type PublicKey = PublicKey;
    type PrivateKey = PrivateKey;
    type Error = Error;

    fn generate_keypair(config: &CryptoConfig) -> Result<(Self::PrivateKey, Self::PublicKey)> {
        generate_keypair(config.rsa_key_bits, config.miller_rabin_rounds, &mut OsRng)
    }

    fn encrypt(public_key: &Self::PublicKey, plaintext: &str) -> Result<String> {
        encrypt(plaintext, public_key, &mut OsRng)
    }

    fn decrypt(private_key: &Self::PrivateKey, ciphertext: &str) -> Result<String> {
        decrypt(ciphertext, private_key)
    }

    fn export_public_key(public_key: &Self::PublicKey) -> Result<String> {
        Ok(serialize_public_key(public_key))
    }

    fn export_private_key(private_key: &Self::PrivateKey) -> Result<String> {
        Ok(serialize_private_key(private_key))
    }

    fn import_public_key(key_data: &str) -> Result<Self::PublicKey> {
        load_public_key(key_data)
    }

    fn import_private_key(key_data: &str) -> Result<Self::PrivateKey> {
        load_private_key(key_data)
    }
}
