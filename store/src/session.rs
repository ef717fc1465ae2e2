//! # Session state and its transitions
//!
//! [`Session`] is the client's belief about who is signed in. It lives in a
//! single process-wide [`SessionStore`], and changes only through the
//! enumerated transition methods; there is no ambient mutation.
//!
//! ## Persistence
//!
//! A subset of the session (`is_authenticated` + `user`) survives reloads.
//! The boundary is explicit: [`Session::to_persisted`] projects the durable
//! subset, [`Session::rehydrate`] rebuilds a session from a raw record and
//! tolerates missing or malformed input by falling back to the signed-out
//! default. Every identity-changing transition writes through to the
//! backing [`SessionStorage`] synchronously; [`SessionStore::logout`]
//! removes the record outright rather than overwriting it.
//!
//! ## Guarding
//!
//! [`SessionStore::guard_decision`] is the first half of the protected-view
//! guard: it consumes the one-shot `skip_revalidation` flag set by a fresh
//! login, and classifies the session as trusted, in need of server
//! revalidation, or anonymous. The second half, applying the server's
//! answer, lives with the API client, which knows how to tell an
//! authentication failure from a transient one.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::models::User;
use crate::storage::SessionStorage;

/// The client's view of the current authentication state.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Session {
    pub is_authenticated: bool,
    pub user: Option<User>,
    pub is_loading: bool,
    /// One-shot flag set by a successful login; the next guard evaluation
    /// consumes it and trusts the session without a server round-trip.
    pub skip_revalidation: bool,
}

/// The subset of [`Session`] written to durable storage.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistedSession {
    pub is_authenticated: bool,
    pub user: Option<User>,
}

impl Session {
    /// Project the durable subset out of the full session.
    pub fn to_persisted(&self) -> PersistedSession {
        PersistedSession {
            is_authenticated: self.is_authenticated,
            user: self.user.clone(),
        }
    }

    /// Rebuild a session from a raw persisted record.
    ///
    /// Missing, empty, or malformed records yield the default (signed-out)
    /// session. The record's fields are restored as-is: a record carrying
    /// the authenticated flag without a user lands in the guard's
    /// revalidation branch instead of being patched up locally.
    pub fn rehydrate(raw: Option<&str>) -> Session {
        let Some(raw) = raw else {
            return Session::default();
        };
        match serde_json::from_str::<PersistedSession>(raw) {
            Ok(persisted) => Session {
                is_authenticated: persisted.is_authenticated,
                user: persisted.user,
                ..Session::default()
            },
            Err(_) => Session::default(),
        }
    }
}

/// Guard verdict for a protected-view activation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// The in-memory session is trusted as-is.
    Trust,
    /// A persisted session indicator exists but no user is loaded; ask the
    /// server who the credential belongs to.
    Revalidate,
    /// No session at all.
    Anonymous,
}

/// Process-wide session store: the in-memory [`Session`] plus its durable
/// record.
#[derive(Clone)]
pub struct SessionStore {
    session: Session,
    storage: Arc<dyn SessionStorage>,
}

impl fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionStore")
            .field("session", &self.session)
            .finish_non_exhaustive()
    }
}

impl SessionStore {
    /// Build a store over `storage`, rehydrating from any persisted record.
    pub fn new(storage: impl SessionStorage + 'static) -> Self {
        let storage: Arc<dyn SessionStorage> = Arc::new(storage);
        let session = Session::rehydrate(storage.load().as_deref());
        Self { session, storage }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn user(&self) -> Option<&User> {
        self.session.user.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated
    }

    pub fn is_loading(&self) -> bool {
        self.session.is_loading
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.session.is_loading = loading;
    }

    /// A login just succeeded: adopt the user, arm the one-shot skip flag,
    /// and persist.
    pub fn login_success(&mut self, user: User) {
        self.session.is_authenticated = true;
        self.session.user = Some(user);
        self.session.is_loading = false;
        self.session.skip_revalidation = true;
        self.persist();
    }

    /// Replace the current user; `None` records an explicit signed-out
    /// state (the persisted record stays, unlike [`SessionStore::logout`]).
    pub fn set_user(&mut self, user: Option<User>) {
        self.session.is_authenticated = user.is_some();
        self.session.user = user;
        self.session.is_loading = false;
        self.persist();
    }

    /// Clear the session and erase the persisted record.
    pub fn logout(&mut self) {
        self.session = Session::default();
        self.storage.remove();
    }

    pub fn clear_skip_revalidation(&mut self) {
        self.session.skip_revalidation = false;
    }

    /// Classify the session for a protected-view activation, consuming the
    /// one-shot skip flag if it is set.
    pub fn guard_decision(&mut self) -> GuardDecision {
        if self.session.skip_revalidation {
            self.session.skip_revalidation = false;
            return GuardDecision::Trust;
        }
        if self.session.user.is_some() {
            return GuardDecision::Trust;
        }
        if self.session.is_authenticated {
            return GuardDecision::Revalidate;
        }
        GuardDecision::Anonymous
    }

    fn persist(&self) {
        if let Ok(raw) = serde_json::to_string(&self.session.to_persisted()) {
            self.storage.save(&raw);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    fn user(id: &str) -> User {
        User {
            id: id.to_string(),
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            is_email_verified: true,
            created_at: "2024-01-01T00:00:00.000Z".to_string(),
        }
    }

    fn invariant_holds(store: &SessionStore) -> bool {
        store.session().is_authenticated == store.session().user.is_some()
    }

    #[test]
    fn starts_signed_out_without_a_record() {
        let store = SessionStore::new(MemoryStorage::new());
        assert_eq!(store.session(), &Session::default());
        assert!(invariant_holds(&store));
    }

    #[test]
    fn rehydrates_from_a_persisted_record() {
        let storage = MemoryStorage::new();
        let mut store = SessionStore::new(storage.clone());
        store.login_success(user("u1"));

        let reopened = SessionStore::new(storage);
        assert!(reopened.is_authenticated());
        assert_eq!(reopened.user().map(|u| u.id.as_str()), Some("u1"));
        // The skip flag and loading state are in-memory only
        assert!(!reopened.session().skip_revalidation);
        assert!(!reopened.is_loading());
    }

    #[test]
    fn rehydrate_tolerates_garbage() {
        assert_eq!(Session::rehydrate(None), Session::default());
        assert_eq!(Session::rehydrate(Some("")), Session::default());
        assert_eq!(Session::rehydrate(Some("not json")), Session::default());
        assert_eq!(Session::rehydrate(Some("{\"user\":42}")), Session::default());
    }

    #[test]
    fn rehydrate_keeps_an_indicator_without_a_user() {
        let session = Session::rehydrate(Some("{\"isAuthenticated\":true,\"user\":null}"));
        assert!(session.is_authenticated);
        assert!(session.user.is_none());
    }

    #[test]
    fn transitions_uphold_the_auth_invariant() {
        let mut store = SessionStore::new(MemoryStorage::new());

        store.login_success(user("u1"));
        assert!(invariant_holds(&store));

        store.set_user(None);
        assert!(invariant_holds(&store));

        store.set_user(Some(user("u2")));
        assert!(invariant_holds(&store));

        store.logout();
        assert!(invariant_holds(&store));
    }

    #[test]
    fn login_success_persists_and_arms_the_skip_flag() {
        let storage = MemoryStorage::new();
        let mut store = SessionStore::new(storage.clone());

        store.login_success(user("u1"));
        assert!(store.session().skip_revalidation);
        assert!(!store.is_loading());

        let raw = storage.load().expect("record persisted");
        let persisted: PersistedSession = serde_json::from_str(&raw).unwrap();
        assert!(persisted.is_authenticated);
        assert_eq!(persisted.user.unwrap().id, "u1");
    }

    #[test]
    fn logout_removes_the_record_but_set_user_none_keeps_it() {
        let storage = MemoryStorage::new();
        let mut store = SessionStore::new(storage.clone());
        store.login_success(user("u1"));

        store.set_user(None);
        let raw = storage.load().expect("explicit signed-out record");
        let persisted: PersistedSession = serde_json::from_str(&raw).unwrap();
        assert!(!persisted.is_authenticated);
        assert!(persisted.user.is_none());

        store.login_success(user("u1"));
        store.logout();
        assert!(storage.load().is_none());
        assert_eq!(store.session(), &Session::default());
    }

    #[test]
    fn skip_flag_is_consumed_exactly_once() {
        let mut store = SessionStore::new(MemoryStorage::new());
        store.login_success(user("u1"));

        // First guard run after login trusts the session without a fetch
        assert_eq!(store.guard_decision(), GuardDecision::Trust);
        assert!(!store.session().skip_revalidation);

        // Later runs still trust it, but only because the user is loaded
        assert_eq!(store.guard_decision(), GuardDecision::Trust);
    }

    #[test]
    fn skip_flag_can_be_cleared_explicitly() {
        let mut store = SessionStore::new(MemoryStorage::new());
        store.login_success(user("u1"));
        store.clear_skip_revalidation();
        assert!(!store.session().skip_revalidation);
    }

    #[test]
    fn guard_revalidates_an_indicator_without_a_user() {
        let storage = MemoryStorage::new();
        storage.save("{\"isAuthenticated\":true,\"user\":null}");
        let mut store = SessionStore::new(storage);

        assert_eq!(store.guard_decision(), GuardDecision::Revalidate);
    }

    #[test]
    fn guard_treats_an_empty_session_as_anonymous() {
        let mut store = SessionStore::new(MemoryStorage::new());
        assert_eq!(store.guard_decision(), GuardDecision::Anonymous);
    }
}
