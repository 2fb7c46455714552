//! PKCS#1 v1.5 encryption padding (block type 2).
//!
//! ```text
//! 0x00 || 0x02 || PS (k - len - 3 non-zero random bytes) || 0x00 || message
//! ```

use crate::common::errors::{Error, Result};
use rand::{CryptoRng, RngCore};
use zeroize::Zeroizing;

/// Bytes of a `k`-byte block not available to the message.
pub const PKCS1_V15_OVERHEAD: usize = 11;

/// Largest message that fits a `k`-byte modulus.
pub fn max_message_len(k: usize) -> usize {
    k.saturating_sub(PKCS1_V15_OVERHEAD)
}

/// Builds the `k`-byte padded block for `message`.
pub fn pad_pkcs1_v15<R>(message: &[u8], k: usize, rng: &mut R) -> Result<Zeroizing<Vec<u8>>>
where
    R: RngCore + CryptoRng + ?Sized,
{
    let max = max_message_len(k);
    if k < PKCS1_V15_OVERHEAD || message.len() > max {
        return Err(Error::MessageTooLong {
            len: message.len(),
            max,
        });
    }

    let mut block = Zeroizing::new(Vec::with_capacity(k));
    block.extend_from_slice(&[0x00, 0x02]);
    for _ in 0..k - message.len() - 3 {
        block.push(non_zero_byte(rng));
    }
    block.push(0x00);
    block.extend_from_slice(message);
    Ok(block)
}

/// Returns the message carried by a padded block, or `None` if the block
/// does not start with `00 02` or has no `00` separator.
pub fn unpad_pkcs1_v15(block: &[u8]) -> Option<&[u8]> {
    let [0x00, 0x02, body @ ..] = block else {
        return None;
    };
    let separator = body.iter().position(|&b| b == 0x00)?;
    Some(&body[separator + 1..])
}

/// Left-pads a big-endian integer encoding with zero bytes up to `len`.
pub fn left_pad(bytes: Vec<u8>, len: usize) -> Vec<u8> {
    if bytes.len() >= len {
        return bytes;
    }
    let mut padded = vec![0u8; len - bytes.len()];
    padded.extend_from_slice(&bytes);
    padded
}

fn non_zero_byte<R>(rng: &mut R) -> u8
where
    R: RngCore + CryptoRng + ?Sized,
{
    let mut byte = [0u8; 1];
    loop {
        rng.fill_bytes(&mut byte);
        if byte[0] != 0 {
            return byte[0];
        }
    }
}
