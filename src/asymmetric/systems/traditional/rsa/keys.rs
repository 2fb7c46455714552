//! RSA key values and their text transport format.
//!
//! ```text
//! -----BEGIN PUBLIC KEY-----
//! base64("<n>|<e>")
//! -----END PUBLIC KEY-----
//! ```
//!
//! Private keys use the `PRIVATE` label and carry `<n>|<d>`. The format is
//! specific to this crate; it is not PEM/PKCS#8.

use crate::common::errors::{Error, Result};
use crate::common::utils::{from_base64, to_base64};
use num_bigint::BigUint;
use num_traits::Zero;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Public exponent used by the generator and assumed when loading private keys.
pub const PUBLIC_EXPONENT: u32 = 65537;

const FIELD_SEPARATOR: char = '|';

/// RSA公钥
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PublicKey {
    n: BigUint,
    e: BigUint,
}

impl PublicKey {
    pub fn new(n: BigUint, e: BigUint) -> Self {
        Self { n, e }
    }

    pub fn n(&self) -> &BigUint {
        &self.n
    }

    pub fn e(&self) -> &BigUint {
        &self.e
    }

    /// Bit length of the modulus.
    pub fn bits(&self) -> u64 {
        self.n.bits()
    }

    /// Byte length `k` of the modulus.
    pub fn size(&self) -> usize {
        self.n.bits().div_ceil(8) as usize
    }
}

/// RSA私钥
///
/// Only `n` and `d` are stored; the matching public key is derived on demand.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrivateKey {
    n: BigUint,
    d: BigUint,
}

impl PrivateKey {
    pub fn new(n: BigUint, d: BigUint) -> Self {
        Self { n, d }
    }

    pub fn n(&self) -> &BigUint {
        &self.n
    }

    pub fn d(&self) -> &BigUint {
        &self.d
    }

    pub fn size(&self) -> usize {
        self.n.bits().div_ceil(8) as usize
    }

    /// Public half, assuming the fixed exponent [`PUBLIC_EXPONENT`].
    pub fn public_key(&self) -> PublicKey {
        PublicKey::new(self.n.clone(), BigUint::from(PUBLIC_EXPONENT))
    }
}

impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrivateKey")
            .field("bits", &self.n.bits())
            .field("d", &"<redacted>")
            .finish()
    }
}

#[derive(Clone, Copy)]
enum KeyKind {
    Public,
    Private,
}

impl KeyKind {
    fn label(self) -> &'static str {
        match self {
            KeyKind::Public => "PUBLIC",
            KeyKind::Private => "PRIVATE",
        }
    }

    fn begin_marker(self) -> String {
        format!("-----BEGIN {} KEY-----", self.label())
    }

    fn end_marker(self) -> String {
        format!("-----END {} KEY-----", self.label())
    }
}

pub fn serialize_public_key(key: &PublicKey) -> String {
    armor(KeyKind::Public, &key.n, &key.e)
}

pub fn serialize_private_key(key: &PrivateKey) -> String {
    armor(KeyKind::Private, &key.n, &key.d)
}

pub fn load_public_key(text: &str) -> Result<PublicKey> {
    let (n, e) = dearmor(KeyKind::Public, text)?;
    Ok(PublicKey::new(n, e))
}

/// Loads a private key. The record carries no exponent, so
/// [`PrivateKey::public_key`] assumes 65537.
pub fn load_private_key(text: &str) -> Result<PrivateKey> {
    let (n, d) = dearmor(KeyKind::Private, text)?;
    Ok(PrivateKey::new(n, d))
}

fn armor(kind: KeyKind, modulus: &BigUint, exponent: &BigUint) -> String {
    let record = format!("{}{}{}", modulus, FIELD_SEPARATOR, exponent);
    format!(
        "{}\n{}\n{}",
        kind.begin_marker(),
        to_base64(record.as_bytes()),
        kind.end_marker()
    )
}

fn dearmor(kind: KeyKind, text: &str) -> Result<(BigUint, BigUint)> {
    let body = text
        .trim()
        .strip_prefix(kind.begin_marker().as_str())
        .and_then(|rest| rest.strip_suffix(kind.end_marker().as_str()))
        .ok_or_else(|| {
            Error::InvalidKeyFormat(format!("missing {} KEY markers", kind.label()))
        })?;

    let encoded: String = body.chars().filter(|c| !c.is_whitespace()).collect();
    let decoded = from_base64(&encoded)
        .map_err(|e| Error::InvalidKeyFormat(format!("base64 decoding failed: {}", e)))?;
    let record = String::from_utf8(decoded)
        .map_err(|_| Error::InvalidKeyFormat("key record is not valid UTF-8".to_string()))?;

    let (modulus, exponent) = record.split_once(FIELD_SEPARATOR).ok_or_else(|| {
        Error::InvalidKeyFormat(format!("missing '{}' separator", FIELD_SEPARATOR))
    })?;
    Ok((
        parse_field(modulus, "modulus")?,
        parse_field(exponent, "exponent")?,
    ))
}

fn parse_field(field: &str, name: &str) -> Result<BigUint> {
    if field.is_empty() || !field.bytes().all(|b| b.is_ascii_digit()) {
        return Err(Error::InvalidKeyFormat(format!(
            "{} is not a decimal integer",
            name
        )));
    }
    let value: BigUint = field
        .parse()
        .map_err(|e| Error::InvalidKeyFormat(format!("{}: {}", name, e)))?;
    if value.is_zero() {
        return Err(Error::InvalidKeyFormat(format!("{} must not be zero", name)));
    }
    Ok(value)
}
