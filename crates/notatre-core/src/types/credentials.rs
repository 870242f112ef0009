//! Credentials passed in by the host

/// Credentials supplied by the host with an authorization request
///
/// The environment provider performs no authentication, so these never
/// influence the resolved configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    pub username: Option<String>,
    pub password: Option<String>,
    /// Address the request originated from, if the host knows it
    pub remote_address: Option<String>,
}

impl Credentials {
    /// Credentials with nothing filled in
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn with_username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    pub fn with_password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(password.into());
        self
    }

    pub fn with_remote_address(mut self, address: impl Into<String>) -> Self {
        self.remote_address = Some(address.into());
        self
    }
}
