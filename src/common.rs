//! 通用模块，包含错误处理、配置和共享的工具函数

pub mod config;
pub mod errors;
pub mod utils;

pub use self::config::{ConfigFile, CryptoConfig};
#[cfg(feature = "classical")]
pub use self::config::PlayfairConfig;
pub use self::errors::{Error, Result};
pub use self::utils::{from_base64, to_base64};
