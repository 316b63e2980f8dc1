//! Acting-user identity.
//!
//! The identity provider is an external collaborator; this module only models
//! what it yields: an optional (id, display name, email) triple and an
//! `is_admin` capability flag. Authorship stamping never fails for a missing
//! identity - it falls back to the anonymous sentinel.

/// The current user as reported by the external identity provider.
/// Any of the descriptive fields may be absent.
#[derive(Debug, Clone, Default)]
pub struct Identity {
    /// Opaque user id, if signed in
    pub uid: Option<String>,
    /// Display name, if the provider has one
    pub display_name: Option<String>,
    /// Email address, if the provider has one
    pub email: Option<String>,
    /// Admin capability flag, used only to gate edit/delete
    pub is_admin: bool,
}

/// The (uid, name, email) triple stamped onto created and edited records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Authorship {
    /// Stamped as `created_by` / `updated_by`
    pub uid: String,
    /// Stamped as `created_by_name` / `updated_by_name`
    pub name: String,
    /// Stamped as `created_by_email`
    pub email: String,
}

impl Identity {
    /// A signed-out session. Still allowed to create ledger records; the
    /// anonymous sentinel is stamped instead.
    #[must_use]
    pub const fn anonymous() -> Self {
        Self {
            uid: None,
            display_name: None,
            email: None,
            is_admin: false,
        }
    }

    /// Resolves the authorship triple, substituting sentinels for any field
    /// the provider could not supply. The display name falls back to the
    /// email before the sentinel, matching how records are labelled on site.
    #[must_use]
    pub fn authorship(&self) -> Authorship {
        let uid = self.uid.clone().unwrap_or_else(|| "anonymous".to_string());
        let name = self
            .display_name
            .clone()
            .or_else(|| self.email.clone())
            .unwrap_or_else(|| "Anonymous User".to_string());
        let email = self
            .email
            .clone()
            .unwrap_or_else(|| "no-email@example.com".to_string());
        Authorship { uid, name, email }
    }

    /// Whether this user may edit or delete a record created by `created_by`.
    /// Admins may touch anything; everyone else only their own records.
    #[must_use]
    pub fn can_modify(&self, created_by: &str) -> bool {
        self.is_admin || self.uid.as_deref() == Some(created_by)
    }
}
