//! The token inspector
//!
//! Displays a canned JSON Web Token next to its decoded claims, and lets the
//! user tamper with the payload to see why the signature matters: the
//! tampered payload claims a higher role while reusing the original
//! signature, so the encoded blob still *looks* plausible but a real
//! verifier would reject it.
//!
//! Both token variants are pre-computed constants. No base64 decoding and no
//! HMAC computation happen here; the valid/invalid verdict is part of the
//! lesson, not the result of a verification.

use crate::types::TokenVerdict;

/// Encoded header, common to both variants ({"alg":"HS256","typ":"JWT"})
pub const HEADER: &str = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9";

/// Encoded payload of the signed original (role: admin)
pub const PAYLOAD_ORIGINAL: &str =
    "eyJzdWIiOiIxMjM0NSIsIm5hbWUiOiJBbGljZSIsInJvbGUiOiJhZG1pbiJ9";

/// Encoded payload after tampering (role: super-admin)
pub const PAYLOAD_TAMPERED: &str =
    "eyJzdWIiOiIxMjM0NSIsIm5hbWUiOiJBbGljZSIsInJvbGUiOiJzdXBlci1hZG1pbiJ9";

/// Signature computed over the original payload; the tampered token reuses
/// it unchanged, which is exactly what makes it invalid
pub const SIGNATURE: &str = "SflKxwRJSMeKKF2QT4fwpMeJf36POk6yJV_adQssw5c";

/// Subject claim shown in the decoded view
pub const CLAIM_SUBJECT: &str = "12345";

/// Name claim shown in the decoded view
pub const CLAIM_NAME: &str = "Alice";

/// The three dot-separated segments of the displayed token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenParts {
    /// Base64url header segment
    pub header: &'static str,
    /// Base64url payload segment
    pub payload: &'static str,
    /// Base64url signature segment
    pub signature: &'static str,
}

impl TokenParts {
    /// Join the segments into the compact `header.payload.signature` form
    pub fn compact(&self) -> String {
        format!("{}.{}.{}", self.header, self.payload, self.signature)
    }
}

/// State machine for the token inspector
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenInspector {
    tampered: bool,
}

impl TokenInspector {
    /// Create a fresh inspector showing the untampered token
    pub fn new() -> Self {
        Self { tampered: false }
    }

    /// Whether the payload is currently tampered
    pub fn tampered(&self) -> bool {
        self.tampered
    }

    /// Flip between the original and the tampered payload
    pub fn toggle_tamper(&mut self) {
        self.tampered = !self.tampered;
    }

    /// The currently displayed token segments
    pub fn parts(&self) -> TokenParts {
        TokenParts {
            header: HEADER,
            payload: if self.tampered { PAYLOAD_TAMPERED } else { PAYLOAD_ORIGINAL },
            signature: SIGNATURE,
        }
    }

    /// The role claim shown in the decoded view
    pub fn role_claim(&self) -> &'static str {
        if self.tampered {
            "super-admin"
        } else {
            "admin"
        }
    }

    /// The pre-chosen verdict for the displayed token
    pub fn verdict(&self) -> TokenVerdict {
        if self.tampered {
            TokenVerdict::InvalidSignature
        } else {
            TokenVerdict::Valid
        }
    }
}

impl Default for TokenInspector {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state_is_valid() {
        let inspector = TokenInspector::new();
        assert!(!inspector.tampered());
        assert_eq!(inspector.verdict(), TokenVerdict::Valid);
        assert_eq!(inspector.role_claim(), "admin");
        assert_eq!(inspector.parts().payload, PAYLOAD_ORIGINAL);
    }

    #[test]
    fn test_toggle_tamper() {
        let mut inspector = TokenInspector::new();

        inspector.toggle_tamper();
        assert!(inspector.tampered());
        assert_eq!(inspector.verdict(), TokenVerdict::InvalidSignature);
        assert_eq!(inspector.role_claim(), "super-admin");
        assert_eq!(inspector.parts().payload, PAYLOAD_TAMPERED);

        inspector.toggle_tamper();
        assert!(!inspector.tampered());
        assert_eq!(inspector.verdict(), TokenVerdict::Valid);
    }

    #[test]
    fn test_tampered_token_reuses_original_signature() {
        let mut inspector = TokenInspector::new();
        let original = inspector.parts();

        inspector.toggle_tamper();
        let tampered = inspector.parts();

        // Header and signature are identical; only the payload changed
        assert_eq!(tampered.header, original.header);
        assert_eq!(tampered.signature, original.signature);
        assert_ne!(tampered.payload, original.payload);
    }

    #[test]
    fn test_compact_form() {
        let inspector = TokenInspector::new();
        let compact = inspector.parts().compact();

        assert_eq!(compact, format!("{}.{}.{}", HEADER, PAYLOAD_ORIGINAL, SIGNATURE));
        assert_eq!(compact.matches('.').count(), 2);
    }
}
