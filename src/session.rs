//! Minimal session capability.
//!
//! The original product authenticated against a hosted identity provider;
//! that is out of scope here. The estimator only needs to greet the current
//! user and let them sign out, so the capability is reduced to exactly that
//! and injected into the TUI host.

/// What the pipeline host needs to know about the signed-in user.
pub trait Session {
    /// The signed-in user, if any. `None` means guest.
    fn current_user(&self) -> Option<&str>;

    /// Drop the signed-in user for the rest of this process.
    fn sign_out(&mut self);
}

/// Environment-backed session: reads `AQUA_USER` (with `.env` support).
#[derive(Debug, Default)]
pub struct EnvSession {
    user: Option<String>,
}

impl EnvSession {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        let user = std::env::var("AQUA_USER")
            .ok()
            .map(|u| u.trim().to_string())
            .filter(|u| !u.is_empty());
        Self { user }
    }
}

impl Session for EnvSession {
    fn current_user(&self) -> Option<&str> {
        self.user.as_deref()
    }

    fn sign_out(&mut self) {
        self.user = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sign_out_clears_the_user() {
        let mut session = EnvSession {
            user: Some("maria".to_string()),
        };
        assert_eq!(session.current_user(), Some("maria"));
        session.sign_out();
        assert_eq!(session.current_user(), None);
    }

    #[test]
    fn default_session_is_guest() {
        let session = EnvSession::default();
        assert_eq!(session.current_user(), None);
    }
}
