//! # Classic-Kit: Playfair and Textbook RSA
//!
//! `classic-kit` bundles two independent teaching ciphers behind plain
//! function calls:
//!
//! - **Playfair** (`classical::playfair`): a key-derived 5x5 or 6x6 square,
//!   digraph segmentation with configurable fillers, the row/column/rectangle
//!   substitution rules, and reconstruction of the output onto the original
//!   text's case and punctuation.
//! - **RSA** (`asymmetric`): Miller-Rabin prime generation, key pairs of
//!   512/1024/2048 bits, a self-describing text key format, and PKCS#1 v1.5
//!   padded encryption with base64 ciphertext.
//!
//! Neither engine performs I/O or keeps state between calls. Randomised RSA
//! operations take an explicit `rng` so results can be reproduced in tests.
//! This is an educational implementation: it offers no side-channel
//! resistance and must not protect real secrets.
//!
//! ## Quick Start
//!
//! ```rust
//! use classic_kit::classical::playfair::{MatrixSize, PlayfairCipher};
//!
//! let cipher = PlayfairCipher::new("MONARCHY", MatrixSize::Five);
//! let out = cipher.encrypt("hs ar mu");
//! assert_eq!(out.stream_text(), "BP RM CM");
//! assert_eq!(out.text, "bp rm cm");
//! ```
//!
//! ```rust
//! use classic_kit::asymmetric::systems::traditional::rsa;
//! use rand::SeedableRng;
//!
//! let mut rng = rand::rngs::StdRng::seed_from_u64(7);
//! let (private_key, public_key) = rsa::generate_keypair(512, 5, &mut rng)?;
//! let ciphertext = rsa::encrypt("Hello, RSA!", &public_key, &mut rng)?;
//! assert_eq!(rsa::decrypt(&ciphertext, &private_key)?, "Hello, RSA!");
//! # Ok::<(), classic_kit::Error>(())
//! ```

pub mod common;

#[cfg(feature = "asymmetric")]
pub mod asymmetric;
#[cfg(feature = "classical")]
pub mod classical;

pub use common::errors::{Error, Result};
pub use common::{ConfigFile, CryptoConfig};

#[cfg(feature = "asymmetric")]
pub use asymmetric::{AsymmetricCryptographicSystem, RsaCryptoSystem};
#[cfg(feature = "classical")]
pub use classical::PlayfairCipher;

/// The version of the `classic-kit` crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
