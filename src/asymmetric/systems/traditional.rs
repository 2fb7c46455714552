//! # Traditional Cryptographic Algorithm Module
//!
//! This module contains the hand-rolled RSA implementation. It provides an
//! interface that conforms to the `AsymmetricCryptographicSystem` trait.
//!
//! ---
//!
//! # 传统加密算法模块
//!
//! 本模块包含从零实现的RSA算法，
//! 它提供符合 `AsymmetricCryptographicSystem` 特征的接口。

pub mod rsa;

// Re-export the RSA system so callers can use `traditional::RsaCryptoSystem`
// without knowing the internal file structure.
pub use rsa::RsaCryptoSystem;
