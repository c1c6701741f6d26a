use crate::AuthUser;

/// Outcome of evaluating a signed-in user against the access gate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessDecision {
    /// Not on the allow-list; the user may only sign out
    Denied,
    Allowed {
        admin: bool,
    },
}

impl AccessDecision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, Self::Allowed { .. })
    }

    pub fn is_admin(&self) -> bool {
        matches!(self, Self::Allowed { admin: true })
    }
}

/// Email-based access gate.
///
/// An empty allow-list admits every authenticated user. The admin email
/// grants elevated tools, but only to a user the allow-list already admits.
/// Emails compare case-insensitively.
#[derive(Debug, Clone, Default)]
pub struct AccessGate {
    allowed_emails: Vec<String>,
    admin_email: Option<String>,
}

impl AccessGate {
    pub fn new<I, S>(allowed_emails: I, admin_email: Option<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let allowed_emails = allowed_emails
            .into_iter()
            .map(|email| email.as_ref().trim().to_lowercase())
            .filter(|email| !email.is_empty())
            .collect();
        let admin_email = admin_email
            .map(|email| email.trim().to_lowercase())
            .filter(|email| !email.is_empty());

        Self {
            allowed_emails,
            admin_email,
        }
    }

    /// Gate that admits everyone and elevates no one
    pub fn unrestricted() -> Self {
        Self::default()
    }

    pub fn is_unrestricted(&self) -> bool {
        self.allowed_emails.is_empty()
    }

    pub fn evaluate(&self, user: &AuthUser) -> AccessDecision {
        let email = user.email.trim().to_lowercase();

        let allowed = self.allowed_emails.is_empty() || self.allowed_emails.contains(&email);
        if !allowed {
            log::warn!("Access denied for {}", user.email);
            return AccessDecision::Denied;
        }

        let admin = self.admin_email.as_deref() == Some(email.as_str());
        AccessDecision::Allowed { admin }
    }
}
