//! Credentials for the AirWatch REST API.
//!
//! AirWatch authenticates every request with two headers: the tenant API key
//! (`aw-tenant-code`, handled by [`ClientConfig`](crate::config::ClientConfig))
//! and an `Authorization` value. The latter is either HTTP Basic built from
//! an admin account's email and password, or a pre-formed value supplied by
//! the caller (e.g. a Basic string stored in a secret manager, or a
//! certificate-based header). There is no token lifecycle: the value is
//! computed once and reused for every request.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

/// The two ways a caller can authenticate against AirWatch.
#[derive(Clone, PartialEq, Eq)]
pub enum Credentials {
    /// Admin account credentials, sent as HTTP Basic.
    Basic {
        /// Account email (the AirWatch console username).
        email: String,
        /// Account password.
        password: String,
    },
    /// A pre-built `Authorization` header value, used verbatim.
    Authorization(String),
}

impl Credentials {
    /// Renders the value of the `Authorization` header.
    pub fn authorization_header(&self) -> String {
        match self {
            Credentials::Basic { email, password } => basic_authorization(email, password),
            Credentials::Authorization(value) => value.clone(),
        }
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Credentials::Basic { email, .. } => f
                .debug_struct("Basic")
                .field("email", email)
                .field("password", &"<redacted>")
                .finish(),
            Credentials::Authorization(_) => {
                f.debug_tuple("Authorization").field(&"<redacted>").finish()
            }
        }
    }
}

/// `Basic ` followed by the padded standard base64 of `email:password`.
pub fn basic_authorization(email: &str, password: &str) -> String {
    format!("Basic {}", STANDARD.encode(format!("{email}:{password}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_authorization_matches_rfc7617_example() {
        // RFC 7617 section 2 uses Aladdin / open sesame.
        assert_eq!(
            basic_authorization("Aladdin", "open sesame"),
            "Basic QWxhZGRpbjpvcGVuIHNlc2FtZQ=="
        );
    }

    #[test]
    fn basic_authorization_round_trips_email_and_password() {
        let header = basic_authorization("admin@example.com", "p@ss:word");
        let encoded = header.strip_prefix("Basic ").unwrap();
        let decoded = STANDARD.decode(encoded).unwrap();
        assert_eq!(decoded, b"admin@example.com:p@ss:word");
    }

    #[test]
    fn credentials_render_authorization_verbatim() {
        let creds = Credentials::Authorization("Basic abc123".to_string());
        assert_eq!(creds.authorization_header(), "Basic abc123");
    }

    #[test]
    fn debug_output_redacts_secrets() {
        let creds = Credentials::Basic {
            email: "admin@example.com".to_string(),
            password: "hunter2".to_string(),
        };
        let debug = format!("{creds:?}");
        assert!(debug.contains("admin@example.com"));
        assert!(!debug.contains("hunter2"));

        let raw = Credentials::Authorization("Basic c2VjcmV0".to_string());
        assert!(!format!("{raw:?}").contains("c2VjcmV0"));
    }
}
