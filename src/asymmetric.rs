//! 非对称加密模块：从零实现的 RSA 引擎

pub mod padding;
pub mod primes;
pub mod systems;
pub mod traits;

pub use systems::traditional::RsaCryptoSystem;
pub use traits::AsymmetricCryptographicSystem;
