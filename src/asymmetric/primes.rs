//! Number theory behind the RSA engine: Miller-Rabin, prime generation and
//! modular inversion.

use crate::common::errors::{Error, Result};
use num_bigint::{BigInt, BigUint, RandBigInt};
use num_traits::{One, Zero};
use rand::{CryptoRng, RngCore};

pub const DEFAULT_MILLER_RABIN_ROUNDS: usize = 5;

// odd primes below 256, used to reject most candidates before Miller-Rabin
const SMALL_PRIMES: [u32; 53] = [
    3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47, 53, 59, 61, 67, 71, 73, 79, 83, 89, 97,
    101, 103, 107, 109, 113, 127, 131, 137, 139, 149, 151, 157, 163, 167, 173, 179, 181, 191, 193,
    197, 199, 211, 223, 227, 229, 233, 239, 241, 251,
];

/// Probabilistic primality test (Miller-Rabin).
///
/// Returns `false` for `n <= 1` and even `n > 2`, `true` for 2 and 3. For
/// larger odd `n` each of the `rounds` random witnesses in `[2, n-2]` can
/// prove compositeness; a composite survives all rounds with probability at
/// most `4^-rounds`. With `rounds == 0` only trial division runs.
pub fn is_probable_prime<R>(n: &BigUint, rounds: usize, rng: &mut R) -> bool
where
    R: RngCore + CryptoRng + ?Sized,
{
    let two = BigUint::from(2u32);
    if *n <= BigUint::one() {
        return false;
    }
    if *n == two || *n == BigUint::from(3u32) {
        return true;
    }
    if (n % 2u32).is_zero() {
        return false;
    }
    for &p in SMALL_PRIMES.iter() {
        if *n == BigUint::from(p) {
            return true;
        }
        if (n % p).is_zero() {
            return false;
        }
    }

    // n - 1 = 2^r * d, d odd
    let n_minus_one = n - 1u32;
    let r = n_minus_one.trailing_zeros().unwrap_or(0);
    let d = &n_minus_one >> r;

    'witness: for _ in 0..rounds {
        let a = rng.gen_biguint_range(&two, &n_minus_one);
        let mut x = a.modpow(&d, n);
        if x.is_one() || x == n_minus_one {
            continue;
        }
        for _ in 1..r {
            x = (&x * &x) % n;
            if x == n_minus_one {
                continue 'witness;
            }
        }
        return false;
    }
    true
}

/// Draws random odd `bits`-bit integers (top bit forced) until one passes
/// [`is_probable_prime`]. `rounds` must be at least 1.
pub fn generate_prime<R>(bits: u64, rounds: usize, rng: &mut R) -> Result<BigUint>
where
    R: RngCore + CryptoRng + ?Sized,
{
    if bits < 2 {
        return Err(Error::InvalidParameter(format!(
            "cannot generate a {}-bit prime",
            bits
        )));
    }
    if rounds == 0 {
        return Err(Error::InvalidParameter(
            "Miller-Rabin rounds must be at least 1".to_string(),
        ));
    }

    let top_bit = BigUint::one() << (bits - 1);
    loop {
        let candidate = rng.gen_biguint(bits) | &top_bit | BigUint::one();
        if is_probable_prime(&candidate, rounds, rng) {
            return Ok(candidate);
        }
    }
}

/// Inverse of `e` modulo `phi` via the extended Euclidean algorithm.
///
/// Returns `d` with `0 < d < phi` and `e*d ≡ 1 (mod phi)`, or `None` when
/// `e` and `phi` are not coprime or `phi <= 1`.
pub fn mod_inverse(e: &BigUint, phi: &BigUint) -> Option<BigUint> {
    if *phi <= BigUint::one() {
        return None;
    }

    let (mut old_r, mut r) = (BigInt::from(e.clone()), BigInt::from(phi.clone()));
    let (mut old_s, mut s) = (BigInt::one(), BigInt::zero());
    while !r.is_zero() {
        let q = &old_r / &r;
        let next_r = &old_r - &q * &r;
        old_r = std::mem::replace(&mut r, next_r);
        let next_s = &old_s - &q * &s;
        old_s = std::mem::replace(&mut s, next_s);
    }
    if !old_r.is_one() {
        return None;
    }

    // Bézout coefficient may be negative
    let phi = BigInt::from(phi.clone());
    (((old_s % &phi) + &phi) % &phi).to_biguint()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(0x5eed)
    }

    #[test]
    fn test_small_values() {
        let mut rng = rng();
        let primes: Vec<u32> = (0..200u32)
            .filter(|&n| is_probable_prime(&BigUint::from(n), 5, &mut rng))
            .collect();
        let expected: Vec<u32> = (0..200u32)
            .filter(|&n| n >= 2 && (2..n).take_while(|d| d * d <= n).all(|d| n % d != 0))
            .collect();
        assert_eq!(primes, expected);
    }

    #[test]
    fn test_known_primes_and_composites() {
        let mut rng = rng();
        let mersenne_61 = (BigUint::one() << 61u32) - 1u32;
        let mersenne_127 = (BigUint::one() << 127u32) - 1u32;
        assert!(is_probable_prime(&mersenne_61, 5, &mut rng));
        assert!(is_probable_prime(&mersenne_127, 5, &mut rng));
        assert!(is_probable_prime(&BigUint::from(7919u32), 5, &mut rng));

        // Carmichael numbers and a product of two large primes
        for n in [561u64, 1105, 1729, 2465, 62745, 1_000_000_016_000_000_063] {
            assert!(!is_probable_prime(&BigUint::from(n), 5, &mut rng), "{}", n);
        }
        let semiprime = &mersenne_61 * &mersenne_127;
        assert!(!is_probable_prime(&semiprime, 5, &mut rng));
    }

    #[test]
    fn test_generate_prime_has_exact_bit_length() {
        let mut rng = rng();
        for bits in [2u64, 8, 17, 64, 256] {
            let p = generate_prime(bits, DEFAULT_MILLER_RABIN_ROUNDS, &mut rng).unwrap();
            assert_eq!(p.bits(), bits);
            assert!(is_probable_prime(&p, 10, &mut rng));
        }
    }

    #[test]
    fn test_generate_prime_rejects_tiny_sizes() {
        let mut rng = rng();
        assert!(matches!(
            generate_prime(1, 5, &mut rng),
            Err(Error::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_generate_prime_requires_witness_rounds() {
        let mut rng = rng();
        assert!(matches!(
            generate_prime(64, 0, &mut rng),
            Err(Error::InvalidParameter(_))
        ));
        // 257 * 263 passes trial division
        let semiprime = BigUint::from(257u32 * 263);
        assert!(!is_probable_prime(&semiprime, 20, &mut rng));
    }

    #[test]
    fn test_mod_inverse() {
        let inv = |e: u32, m: u32| mod_inverse(&BigUint::from(e), &BigUint::from(m));
        assert_eq!(inv(3, 11), Some(BigUint::from(4u32)));
        assert_eq!(inv(17, 3120), Some(BigUint::from(2753u32)));
        assert_eq!(inv(10, 7), Some(BigUint::from(5u32)));
        assert_eq!(inv(2, 4), None);
        assert_eq!(inv(65537, 65537 * 4), None);
        assert_eq!(inv(5, 1), None);
    }

    #[test]
    fn test_mod_inverse_of_public_exponent() {
        let mut rng = rng();
        let e = BigUint::from(65537u32);
        let (phi, d) = loop {
            let p = generate_prime(128, 5, &mut rng).unwrap();
            let q = generate_prime(128, 5, &mut rng).unwrap();
            let phi = (&p - 1u32) * (&q - 1u32);
            if let Some(d) = mod_inverse(&e, &phi) {
                break (phi, d);
            }
        };
        assert!(d < phi && !d.is_zero());
        assert!(((&e * &d) % &phi).is_one());
    }
}
