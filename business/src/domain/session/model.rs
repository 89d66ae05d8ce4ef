/// Store key holding the logged-in marker.
pub const LOGGED_IN_KEY: &str = "isLoggedIn";
/// Store key holding the display name.
pub const CURRENT_USER_KEY: &str = "currentUser";
/// The only value of `LOGGED_IN_KEY` that counts as logged in.
pub const LOGGED_IN_MARKER: &str = "true";

/// Logged-in flag plus display name. There are no credentials.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Session {
    user: Option<String>,
}

impl Session {
    pub fn logged_out() -> Self {
        Self { user: None }
    }

    pub fn logged_in(user: impl Into<String>) -> Self {
        Self {
            user: Some(user.into()),
        }
    }

    /// Rebuilds a session from the two stored values.
    ///
    /// Only a literal `"true"` marker together with a non-empty user restores
    /// the session; anything else starts logged out.
    pub fn restore(marker: Option<&str>, user: Option<&str>) -> Self {
        match (marker, user) {
            (Some(LOGGED_IN_MARKER), Some(user)) if !user.is_empty() => Self::logged_in(user),
            _ => Self::logged_out(),
        }
    }

    pub fn is_logged_in(&self) -> bool {
        self.user.is_some()
    }

    pub fn user(&self) -> Option<&str> {
        self.user.as_deref()
    }
}
