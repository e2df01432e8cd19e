//! Domain-level constants.
//!
//! User-facing messages are kept verbatim so callers can match on them.

// =============================================================================
// Messages
// =============================================================================

/// Raised when an email fails the syntax check
pub const INVALID_EMAIL_MESSAGE: &str = "Email invalide.";

/// Raised when no user row carries the requested id
pub const USER_NOT_FOUND_MESSAGE: &str = "Utilisateur introuvable.";
