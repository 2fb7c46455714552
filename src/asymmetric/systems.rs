//! 算法系统集合
//!
//! 目前只包含传统（RSA）加密算法实现
pub mod traditional;
