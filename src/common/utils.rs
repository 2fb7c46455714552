//! 基础工具函数：Base64 编解码

use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};

/// 将字节数组转换为Base64字符串
pub fn to_base64(data: &[u8]) -> String {
    BASE64.encode(data)
}

/// 从Base64字符串解码为字节数组
pub fn from_base64(encoded: &str) -> Result<Vec<u8>, base64::DecodeError> {
    BASE64.decode(encoded)
}
