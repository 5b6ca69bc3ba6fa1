//! The profile session: a mock login that verifies nothing.

/// Session auth state owned by the profile window.
///
/// `log_in` accepts any non-empty email and password pair; there is no
/// credential store and nothing survives the session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthSession {
    pub logged_in: bool,
    pub username: String,
    pub email: String,
    pub password: String,
}

impl AuthSession {
    /// Attempt the logged-out → logged-in transition. Succeeds iff email and
    /// password are both non-empty at the moment of the call; the username is
    /// optional. Returns whether the transition happened.
    pub fn log_in(&mut self) -> bool {
        if self.email.is_empty() || self.password.is_empty() {
            return false;
        }
        self.logged_in = true;
        true
    }

    /// Return to logged-out and clear every field.
    pub fn log_out(&mut self) {
        *self = Self::default();
    }

    /// Name shown in the welcome banner; falls back to a placeholder when no
    /// username was entered.
    pub fn display_name(&self) -> &str {
        if self.username.is_empty() {
            "Traveler"
        } else {
            &self.username
        }
    }
}
