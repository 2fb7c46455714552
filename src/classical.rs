//! # Classical Cipher Module
//!
//! Pen-and-paper ciphers that operate on filtered letters rather than bytes.
//! Only the Playfair digraph cipher lives here for now.
//!
//! ---
//!
//! # 古典密码模块
//!
//! 以字母而非字节为单位工作的手工密码，目前只包含 Playfair 双字母替换密码。

pub mod playfair;

pub use playfair::PlayfairCipher;
