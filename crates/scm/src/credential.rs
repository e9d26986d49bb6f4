//! Bearer token credentials for git hosting APIs.

use std::fmt;

/// An opaque bearer token. The principal is empty; the token alone
/// carries authority.
///
/// The token is caller-supplied and never persisted by this crate. The
/// `Debug` output is redacted so credentials cannot leak into logs.
#[derive(Clone)]
pub struct Credential(String);

impl Credential {
    /// Wrap a raw token.
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// The raw token, for injection into a request.
    #[must_use]
    pub fn token(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(***)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_output_is_redacted() {
        let cred = Credential::new("very-secret-token");
        let rendered = format!("{cred:?}");
        assert!(!rendered.contains("very-secret-token"));
        assert_eq!(rendered, "Credential(***)");
    }
}
