use thiserror::Error;

/// Errors returned by the Playfair and RSA engines.
#[derive(Error, Debug)]
pub enum Error {
    /// Unsupported key size, matrix size or filler symbols.
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Message too long: {len} bytes, key capacity is {max} bytes")]
    MessageTooLong { len: usize, max: usize },

    #[error("Invalid key format: {0}")]
    InvalidKeyFormat(String),

    /// Padding, encoding and range failures on the decryption path all collapse
    /// into this variant so callers cannot tell them apart.
    #[error("Decryption failed")]
    DecryptionFailed,

    #[error("I/O error")]
    Io(#[from] std::io::Error),

    #[error("Configuration error (JSON)")]
    Configuration(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = Error::MessageTooLong { len: 60, max: 53 };
        assert_eq!(
            err.to_string(),
            "Message too long: 60 bytes, key capacity is 53 bytes"
        );
        assert_eq!(Error::DecryptionFailed.to_string(), "Decryption failed");
        assert_eq!(
            Error::InvalidParameter("key size 4096".to_string()).to_string(),
            "Invalid parameter: key size 4096"
        );
    }

    #[test]
    fn test_json_error_converts() {
        let json_err = serde_json::from_str::<u32>("not json").unwrap_err();
        let err: Error = json_err.into();
        assert!(matches!(err, Error::Configuration(_)));
    }
}
