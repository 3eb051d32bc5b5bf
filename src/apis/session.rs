use super::{ApiClient, AuthBackend};
use crate::domain::User;
use crate::error::Result;
use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, instrument};

#[derive(Debug, Deserialize)]
struct VerifyEnvelope {
    #[serde(default)]
    user: Option<User>,
}

impl ApiClient {
    /// POST /api/usuario/verify. The session cookie rides along via the
    /// client's cookie store; a non-200 answer just means "no session".
    #[instrument(skip(self))]
    pub async fn verify_session(&self) -> Result<Option<User>> {
        let response = self
            .http()
            .post(self.api_url("usuario/verify"))
            .send()
            .await?;

        if !response.status().is_success() {
            debug!(status = %response.status(), "session verify rejected");
            return Ok(None);
        }

        let envelope: VerifyEnvelope = response.json().await?;
        Ok(envelope.user)
    }

    /// POST /api/usuario/logout. The response body is ignored; the caller
    /// decides what a failure means.
    #[instrument(skip(self))]
    pub async fn logout_session(&self) -> Result<()> {
        self.http()
            .post(self.api_url("usuario/logout"))
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }
}

#[async_trait]
impl AuthBackend for ApiClient {
    async fn verify(&self) -> Result<Option<User>> {
        self.verify_session().await
    }

    async fn logout(&self) -> Result<()> {
        self.logout_session().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verify_envelope_parses_wire_names() {
        let body = serde_json::json!({
            "user": {
                "email": "ana@example.com",
                "id": 12,
                "username": "ana",
                "nombre": "Ana",
                "apellido": "Pérez",
                "rol": "cliente",
                "img": "ana.png"
            }
        });
        let envelope: VerifyEnvelope = serde_json::from_value(body).unwrap();
        let user = envelope.user.unwrap();
        assert_eq!(user.first_name, "Ana");
        assert_eq!(user.last_name, "Pérez");
        assert_eq!(user.role, "cliente");
        assert!(!user.is_admin());
    }

    #[test]
    fn test_verify_envelope_without_user() {
        let envelope: VerifyEnvelope = serde_json::from_value(serde_json::json!({})).unwrap();
        assert!(envelope.user.is_none());
    }
}
