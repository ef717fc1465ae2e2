//! `/auth/*` endpoints and the session-revalidation helper.
//!
//! The backend sets and clears the session cookie itself; these methods only
//! move JSON. Endpoints that establish or refresh an identity return the
//! user from the envelope's `data.user`.

use serde::{Deserialize, Serialize};
use store::{SessionStore, User};

use crate::client::ApiClient;
use crate::error::ApiError;

#[derive(Debug, Serialize)]
struct RegisterPayload<'a> {
    name: &'a str,
    email: &'a str,
    password: &'a str,
}

#[derive(Debug, Serialize)]
struct LoginPayload<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Debug, Serialize)]
struct ForgotPasswordPayload<'a> {
    email: &'a str,
}

#[derive(Debug, Serialize)]
struct ResetPasswordPayload<'a> {
    token: &'a str,
    password: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct UpdatePasswordPayload<'a> {
    current_password: &'a str,
    new_password: &'a str,
}

/// Body of `PUT /auth/profile`: both fields optional, unset ones omitted.
#[derive(Clone, Debug, Default, Serialize)]
pub struct ProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

#[derive(Debug, Deserialize)]
struct UserPayload {
    user: User,
}

impl ApiClient {
    /// `POST /auth/register`: create an account; the backend signs the new
    /// user in (cookie) and returns them.
    pub async fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<User, ApiError> {
        self.post::<UserPayload, _>(
            "/auth/register",
            &RegisterPayload {
                name,
                email,
                password,
            },
        )
        .await?
        .into_data()
        .map(|d| d.user)
    }

    /// `POST /auth/login`
    pub async fn login(&self, email: &str, password: &str) -> Result<User, ApiError> {
        self.post::<UserPayload, _>("/auth/login", &LoginPayload { email, password })
            .await?
            .into_data()
            .map(|d| d.user)
    }

    /// `POST /auth/logout`: clears the server-side session and cookie.
    pub async fn logout(&self) -> Result<(), ApiError> {
        self.post_empty::<serde_json::Value>("/auth/logout").await?;
        Ok(())
    }

    /// `GET /auth/me`: who does the current credential belong to?
    pub async fn me(&self) -> Result<User, ApiError> {
        self.get::<UserPayload>("/auth/me", &[])
            .await?
            .into_data()
            .map(|d| d.user)
    }

    /// `POST /auth/forgot-password`: returns the server's confirmation
    /// message.
    pub async fn forgot_password(&self, email: &str) -> Result<String, ApiError> {
        let response = self
            .post::<serde_json::Value, _>("/auth/forgot-password", &ForgotPasswordPayload { email })
            .await?;
        Ok(response
            .message
            .unwrap_or_else(|| "Check your email for a reset link.".to_string()))
    }

    /// `PUT /auth/reset-password`: on success the backend signs the user in
    /// and usually returns them; older deployments return no user, in which
    /// case the caller sends them to the login page.
    pub async fn reset_password(
        &self,
        token: &str,
        password: &str,
    ) -> Result<Option<User>, ApiError> {
        let response = self
            .put::<UserPayload, _>("/auth/reset-password", &ResetPasswordPayload { token, password })
            .await?;
        Ok(response.data.map(|d| d.user))
    }

    /// `PUT /auth/update-password`
    pub async fn update_password(
        &self,
        current_password: &str,
        new_password: &str,
    ) -> Result<(), ApiError> {
        self.put::<serde_json::Value, _>(
            "/auth/update-password",
            &UpdatePasswordPayload {
                current_password,
                new_password,
            },
        )
        .await?;
        Ok(())
    }

    /// `PUT /auth/profile`: returns the updated user.
    pub async fn update_profile(&self, update: &ProfileUpdate) -> Result<User, ApiError> {
        self.put::<UserPayload, _>("/auth/profile", update)
            .await?
            .into_data()
            .map(|d| d.user)
    }
}

/// Apply the result of a `GET /auth/me` revalidation to the session.
///
/// Only authentication-class failures demote the session; a network blip
/// must not sign anyone out. Loading ends on every path.
pub fn apply_me_outcome(session: &mut SessionStore, outcome: Result<User, ApiError>) {
    match outcome {
        Ok(user) => session.set_user(Some(user)),
        Err(err) if err.is_auth_error() => {
            tracing::warn!("session rejected by the server: {err}");
            session.set_user(None);
        }
        Err(err) => {
            tracing::warn!("revalidation failed, keeping the current session: {err}");
            session.set_loading(false);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use store::{MemoryStorage, SessionStorage};

    fn user(id: &str) -> User {
        User {
            id: id.to_string(),
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            is_email_verified: false,
            created_at: "2024-01-01T00:00:00.000Z".to_string(),
        }
    }

    fn revalidating_store() -> SessionStore {
        let storage = MemoryStorage::new();
        storage.save("{\"isAuthenticated\":true,\"user\":null}");
        let mut store = SessionStore::new(storage);
        store.set_loading(true);
        store
    }

    fn http(status: u16) -> ApiError {
        ApiError::Http {
            status,
            message: "denied".to_string(),
            errors: Vec::new(),
        }
    }

    #[test]
    fn success_stores_the_user_and_ends_loading() {
        let mut store = revalidating_store();
        apply_me_outcome(&mut store, Ok(user("u1")));

        assert!(store.is_authenticated());
        assert_eq!(store.user().map(|u| u.id.as_str()), Some("u1"));
        assert!(!store.is_loading());
    }

    #[test]
    fn forbidden_demotes_the_session() {
        let mut store = revalidating_store();
        apply_me_outcome(&mut store, Err(http(403)));

        assert!(!store.is_authenticated());
        assert!(store.user().is_none());
        assert!(!store.is_loading());
    }

    #[test]
    fn unauthorized_demotes_the_session() {
        let mut store = revalidating_store();
        apply_me_outcome(&mut store, Err(http(401)));

        assert!(!store.is_authenticated());
        assert!(store.user().is_none());
    }

    #[test]
    fn transient_failure_leaves_the_session_untouched() {
        let mut store = revalidating_store();
        let before = store.session().clone();

        apply_me_outcome(&mut store, Err(ApiError::Network("offline".to_string())));
        assert_eq!(store.session().is_authenticated, before.is_authenticated);
        assert_eq!(store.session().user, before.user);
        assert!(!store.is_loading());

        store.set_loading(true);
        apply_me_outcome(&mut store, Err(http(500)));
        assert_eq!(store.session().is_authenticated, before.is_authenticated);
        assert!(!store.is_loading());
    }

    #[test]
    fn profile_update_body_is_partial() {
        let body = serde_json::to_value(ProfileUpdate {
            name: Some("Grace".to_string()),
            email: None,
        })
        .unwrap();
        assert_eq!(body.as_object().unwrap().len(), 1);
        assert_eq!(body["name"], "Grace");
    }
}
