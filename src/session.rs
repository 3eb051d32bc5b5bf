use crate::apis::AuthBackend;
use crate::domain::User;
use crate::error::Result;
use crate::images::ImageResolver;
use tracing::{debug, error};

/// Authenticated-user state. Owned by the application, mutated only here.
#[derive(Default)]
pub struct Session {
    user: Option<User>,
    authenticated: bool,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    /// Replaces the current user. No network call: the caller already
    /// validated the credentials.
    pub fn login(&mut self, user: User) {
        debug!(username = %user.username, "session user replaced");
        self.user = Some(user);
    }

    /// Asks the backend whether the session cookie is still valid. On a
    /// positive answer the user is stored with a resolved avatar URL;
    /// anything else leaves the session exactly as it was.
    pub async fn check(
        &mut self,
        auth: &dyn AuthBackend,
        resolver: &ImageResolver,
    ) -> Result<bool> {
        let Some(mut user) = auth.verify().await? else {
            return Ok(false);
        };
        user.avatar = resolver.user_avatar(&user.avatar);
        self.authenticated = true;
        self.user = Some(user);
        Ok(true)
    }

    /// Best-effort server logout. Local state is cleared no matter what
    /// the server said; a failed request only costs a log line.
    pub async fn logout(&mut self, auth: &dyn AuthBackend) {
        if let Err(e) = auth.logout().await {
            error!("Logout request failed: {}", e);
        }
        self.user = None;
        self.authenticated = false;
    }
}
