//! Textual secret values
//!
//! Secrets sourced from text may carry binary material:
//! - `base64:<data>` - standard or URL-safe base64
//! - `hex:<data>` - hexadecimal
//! - anything else - the UTF-8 bytes as written

use base64::{engine::general_purpose, Engine as _};

use crate::domain::{DomainError, SecretKey};

const BASE64_PREFIX: &str = "base64:";
const HEX_PREFIX: &str = "hex:";

/// Decode a textual secret into key material
pub fn decode_secret_value(raw: &str) -> Result<SecretKey, DomainError> {
    let bytes = if let Some(data) = raw.strip_prefix(BASE64_PREFIX) {
        let data = data.trim();
        general_purpose::STANDARD
            .decode(data)
            .or_else(|_| general_purpose::URL_SAFE_NO_PAD.decode(data))
            .map_err(|e| DomainError::configuration(format!("Invalid base64 secret: {}", e)))?
    } else if let Some(data) = raw.strip_prefix(HEX_PREFIX) {
        hex::decode(data.trim())
            .map_err(|e| DomainError::configuration(format!("Invalid hex secret: {}", e)))?
    } else {
        raw.as_bytes().to_vec()
    };

    Ok(SecretKey::new(bytes)?)
}

/// Render key material in the `base64:` form accepted by [`decode_secret_value`]
pub fn encode_secret_value(secret: &SecretKey) -> String {
    format!("{}{}", BASE64_PREFIX, general_purpose::STANDARD.encode(secret.as_bytes()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_value() {
        let secret = decode_secret_value("secret").unwrap();
        assert_eq!(secret.as_bytes(), b"secret");
    }

    #[test]
    fn test_base64_value() {
        let secret = decode_secret_value("base64:AAEC/w==").unwrap();
        assert_eq!(secret.as_bytes(), &[0x00, 0x01, 0x02, 0xff]);
    }

    #[test]
    fn test_base64_url_safe_value() {
        let secret = decode_secret_value("base64:AAEC_w").unwrap();
        assert_eq!(secret.as_bytes(), &[0x00, 0x01, 0x02, 0xff]);
    }

    #[test]
    fn test_hex_value() {
        let secret = decode_secret_value("hex:deadbeef").unwrap();
        assert_eq!(secret.as_bytes(), &[0xde, 0xad, 0xbe, 0xef]);
    }

    #[test]
    fn test_invalid_hex() {
        let err = decode_secret_value("hex:xyz").unwrap_err();
        assert!(err.is_configuration());
    }

    #[test]
    fn test_empty_value_is_configuration_error() {
        assert!(decode_secret_value("").unwrap_err().is_configuration());
        assert!(decode_secret_value("hex:").unwrap_err().is_configuration());
        assert!(decode_secret_value("base64:").unwrap_err().is_configuration());
    }

    #[test]
    fn test_encode_is_accepted_by_decode() {
        let secret = SecretKey::new(vec![7u8, 0, 255, 42]).unwrap();
        let text = encode_secret_value(&secret);

        assert!(text.starts_with("base64:"));
        assert_eq!(decode_secret_value(&text).unwrap(), secret);
    }
}
