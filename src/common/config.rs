//!
//! # 通用配置模块
//!
//! 包含 RSA 引擎与 Playfair 引擎所使用的配置结构。
//! 调用方可以直接构造，也可以从 JSON 文件加载。
//!
use crate::common::errors::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[cfg(feature = "classical")]
use crate::classical::playfair::MatrixSize;

/// RSA key sizes accepted by the key generator.
pub const SUPPORTED_RSA_KEY_BITS: [usize; 3] = [512, 1024, 2048];

/// 加密系统配置
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CryptoConfig {
    /// RSA密钥位数 (512/1024/2048)
    pub rsa_key_bits: usize,
    /// Miller-Rabin 测试轮数
    pub miller_rabin_rounds: usize,
}

impl Default for CryptoConfig {
    fn default() -> Self {
        Self {
            rsa_key_bits: 2048,
            miller_rabin_rounds: 5,
        }
    }
}

impl CryptoConfig {
    /// Rejects key sizes the generator does not support and zero-round primality tests.
    pub fn validate(&self) -> Result<()> {
        if !SUPPORTED_RSA_KEY_BITS.contains(&self.rsa_key_bits) {
            return Err(Error::InvalidParameter(format!(
                "unsupported RSA key size {} (expected 512, 1024 or 2048)",
                self.rsa_key_bits
            )));
        }
        if self.miller_rabin_rounds == 0 {
            return Err(Error::InvalidParameter(
                "Miller-Rabin rounds must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Playfair 配置
#[cfg(feature = "classical")]
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PlayfairConfig {
    /// 矩阵大小 (5x5 或 6x6)
    pub matrix_size: MatrixSize,
    /// 拆分重复字母或补齐奇数长度时插入的字符
    pub filler: char,
    /// 当重复字母本身就是 `filler` 时使用的备用字符
    pub alt_filler: char,
}

#[cfg(feature = "classical")]
impl Default for PlayfairConfig {
    fn default() -> Self {
        Self {
            matrix_size: MatrixSize::Five,
            filler: 'X',
            alt_filler: 'Y',
        }
    }
}

/// 完整配置文件
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
pub struct ConfigFile {
    /// 加密配置
    #[serde(default)]
    pub crypto: CryptoConfig,
    /// Playfair 配置
    #[cfg(feature = "classical")]
    #[serde(default)]
    pub playfair: PlayfairConfig,
}

impl ConfigFile {
    /// Parses a JSON document; missing sections fall back to their defaults.
    pub fn from_json(contents: &str) -> Result<Self> {
        let config: ConfigFile = serde_json::from_str(contents)?;
        config.crypto.validate()?;
        Ok(config)
    }

    /// 从文件加载配置
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
