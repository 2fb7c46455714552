//! 定义了非对称加密系统的核心 Trait。
use crate::common::config::CryptoConfig;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// `AsymmetricCryptographicSystem` 定义了非对称加密算法必须实现的核心功能。
///
/// Plaintext goes in as a UTF-8 string and ciphertext comes out as text, so a
/// caller can move both through clipboards and text files unchanged.
pub trait AsymmetricCryptographicSystem: Sized {
    /// 公钥类型
    type PublicKey: Clone + Serialize + for<'de> Deserialize<'de> + Debug;

    /// 私钥类型
    type PrivateKey: Clone + Serialize + for<'de> Deserialize<'de> + Debug;

    /// 错误类型
    type Error: std::error::Error + Send + Sync + 'static;

    /// 生成密钥对，返回 (私钥, 公钥)
    fn generate_keypair(
        config: &CryptoConfig,
    ) -> Result<(Self::PrivateKey, Self::PublicKey), Self::Error>;

    /// 使用公钥加密文本
    fn encrypt(public_key: &Self::PublicKey, plaintext: &str) -> Result<String, Self::Error>;

    /// 使用私钥解密文本
    fn decrypt(private_key: &Self::PrivateKey, ciphertext: &str) -> Result<String, Self::Error>;

    /// 将公钥导出为文本格式
    fn export_public_key(public_key: &Self::PublicKey) -> Result<String, Self::Error>;

    /// 将私钥导出为文本格式
    fn export_private_key(private_key: &Self::PrivateKey) -> Result<String, Self::Error>;

    /// 从文本格式导入公钥
    fn import_public_key(key_data: &str) -> Result<Self::PublicKey, Self::Error>;

    /// 从文本格式导入私钥
    fn import_private_key(key_data: &str) -> Result<Self::PrivateKey, Self::Error>;
}
