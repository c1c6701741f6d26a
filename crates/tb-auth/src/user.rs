use serde::{Deserialize, Serialize};

/// Identity of the signed-in user as reported by the external provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthUser {
    /// Stable provider-assigned user id
    pub id: String,
    pub display_name: String,
    pub email: String,
    /// Profile photo, when the provider has one
    pub avatar_url: Option<String>,
}

impl AuthUser {
    pub fn new(
        id: impl Into<String>,
        display_name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
            email: email.into(),
            avatar_url: None,
        }
    }

    pub fn with_avatar(mut self, url: impl Into<String>) -> Self {
        self.avatar_url = Some(url.into());
        self
    }

    /// Avatar to stamp on cards: the provider photo when present,
    /// otherwise a generated placeholder built from the display name.
    pub fn avatar_or_default(&self) -> String {
        match &self.avatar_url {
            Some(url) => url.clone(),
            None => default_avatar_url(&self.display_name),
        }
    }
}

fn default_avatar_url(display_name: &str) -> String {
    let name = if display_name.is_empty() {
        "User"
    } else {
        display_name
    };
    format!(
        "https://ui-avatars.com/api/?name={}&background=random",
        encode_uri_component(name)
    )
}

/// Percent-encode for a URL query value, leaving the characters
/// `encodeURIComponent` leaves bare.
fn encode_uri_component(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for byte in input.bytes() {
        match byte {
            b'A'..=b'Z'
            | b'a'..=b'z'
            | b'0'..=b'9'
            | b'-'
            | b'_'
            | b'.'
            | b'!'
            | b'~'
            | b'*'
            | b'\''
            | b'('
            | b')' => out.push(byte as char),
            _ => out.push_str(&format!("%{byte:02X}")),
        }
    }
    out
}
