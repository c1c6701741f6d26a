use serde::Deserialize;

/// Who may use the board, and who gets the admin tools.
/// An empty allow-list admits every authenticated user.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct AccessConfig {
    pub allowed_emails: Vec<String>,
    pub admin_email: Option<String>,
}

impl AccessConfig {
    /// Warn about configurations that technically load but will surprise:
    /// an admin email the allow-list itself locks out.
    pub fn validate(&self) {
        if let Some(admin) = &self.admin_email {
            let admin_normalized = admin.trim().to_lowercase();
            let listed = self
                .allowed_emails
                .iter()
                .any(|email| email.trim().to_lowercase() == admin_normalized);
            if !self.allowed_emails.is_empty() && !listed {
                log::warn!(
                    "access.admin_email is not on access.allowed_emails; the admin cannot sign in"
                );
            }
        }
    }
}
