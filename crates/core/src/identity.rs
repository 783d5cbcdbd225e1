//! The authenticated caller, as asserted by the external identity provider.

/// Identity attributes the catalog relies on. Read-only input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    /// The provider's subject identifier.
    pub subject: String,
    /// Email the caller signed in with; current-user lookups key on it.
    pub email: String,
}
