//! Bearer credential extraction from transport headers

use std::collections::{BTreeMap, HashMap};

use axum::http::HeaderMap;
use thiserror::Error;
use tracing::debug;

const AUTHORIZATION: &str = "Authorization";
const BEARER_SCHEME: &str = "bearer";

/// Any lookup of header values by name
pub trait HeaderSource {
    fn header(&self, name: &str) -> Option<&str>;
}

impl HeaderSource for HashMap<String, String> {
    fn header(&self, name: &str) -> Option<&str> {
        self.get(name).map(String::as_str)
    }
}

impl HeaderSource for BTreeMap<String, String> {
    fn header(&self, name: &str) -> Option<&str> {
        self.get(name).map(String::as_str)
    }
}

impl HeaderSource for HeaderMap {
    fn header(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(|value| value.to_str().ok())
    }
}

/// The Authorization header was missing or not of the form `Bearer <token>`
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("Authorization header must be of the form 'Bearer <token>'")]
pub struct InvalidAuthorizationHeader;

/// Read the raw token out of an `Authorization: Bearer <token>` header.
///
/// The value is split on whitespace and must yield exactly two parts, the
/// first of which is `bearer` in any case.
pub fn bearer_token<H>(headers: &H) -> Result<&str, InvalidAuthorizationHeader>
where
    H: HeaderSource + ?Sized,
{
    let value = headers
        .header(AUTHORIZATION)
        .filter(|value| !value.is_empty())
        .ok_or_else(|| {
            debug!("Authorization header missing");
            InvalidAuthorizationHeader
        })?;

    let mut parts = value.split_whitespace();

    match (parts.next(), parts.next(), parts.next()) {
        (Some(scheme), Some(token), None) if scheme.eq_ignore_ascii_case(BEARER_SCHEME) => {
            Ok(token)
        }
        (Some(scheme), _, _) if !scheme.eq_ignore_ascii_case(BEARER_SCHEME) => {
            debug!(scheme, "Unsupported authorization scheme");
            Err(InvalidAuthorizationHeader)
        }
        _ => {
            debug!("Authorization header must have exactly two parts");
            Err(InvalidAuthorizationHeader)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::header;

    fn headers(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_extract_bearer_token() {
        let headers = headers(&[("Authorization", "Bearer abc.def.ghi")]);
        assert_eq!(bearer_token(&headers), Ok("abc.def.ghi"));
    }

    #[test]
    fn test_scheme_is_case_insensitive() {
        let headers = headers(&[("Authorization", "bEaReR abc.def.ghi")]);
        assert_eq!(bearer_token(&headers), Ok("abc.def.ghi"));
    }

    #[test]
    fn test_surrounding_whitespace_is_ignored() {
        let headers = headers(&[("Authorization", "  Bearer \t abc.def.ghi  ")]);
        assert_eq!(bearer_token(&headers), Ok("abc.def.ghi"));
    }

    #[test]
    fn test_basic_scheme_rejected() {
        let headers = headers(&[("Authorization", "Basic xyz")]);
        assert_eq!(bearer_token(&headers), Err(InvalidAuthorizationHeader));
    }

    #[test]
    fn test_scheme_without_token_rejected() {
        let headers = headers(&[("Authorization", "Bearer")]);
        assert_eq!(bearer_token(&headers), Err(InvalidAuthorizationHeader));
    }

    #[test]
    fn test_missing_header_rejected() {
        let headers = headers(&[]);
        assert_eq!(bearer_token(&headers), Err(InvalidAuthorizationHeader));
    }

    #[test]
    fn test_too_many_parts_rejected() {
        let headers = headers(&[("Authorization", "Bearer a b")]);
        assert_eq!(bearer_token(&headers), Err(InvalidAuthorizationHeader));
    }

    #[test]
    fn test_empty_and_blank_values_rejected() {
        assert!(bearer_token(&headers(&[("Authorization", "")])).is_err());
        assert!(bearer_token(&headers(&[("Authorization", "   ")])).is_err());
    }

    #[test]
    fn test_btree_map_source() {
        let mut headers = BTreeMap::new();
        headers.insert("Authorization".to_string(), "Bearer tok".to_string());
        assert_eq!(bearer_token(&headers), Ok("tok"));
    }

    #[test]
    fn test_http_header_map_source() {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, "Bearer sk-test".parse().unwrap());
        assert_eq!(bearer_token(&headers), Ok("sk-test"));
    }
}
