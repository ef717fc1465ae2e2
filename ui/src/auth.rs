//! Session context, the protected-view guard, and auth controls.

use api::{apply_me_outcome, ApiClient, ApiConfig};
use dioxus::prelude::*;
use store::{GuardDecision, SessionStore};

/// Delay before a guard-triggered revalidation, giving a just-completed
/// login time to finish writing the persisted session record.
const REVALIDATE_DELAY_MS: u64 = 100;

fn platform_session_store() -> SessionStore {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        SessionStore::new(store::LocalStorage::new())
    }
    #[cfg(not(all(target_arch = "wasm32", feature = "web")))]
    {
        SessionStore::new(store::MemoryStorage::new())
    }
}

/// Get the session store signal.
pub fn use_session() -> Signal<SessionStore> {
    use_context()
}

/// Get the shared API client.
pub fn use_api() -> ApiClient {
    use_context()
}

/// Provider component owning the session store and API client.
/// Wrap the app with this to enable [`use_session`] and [`use_api`].
#[component]
pub fn SessionProvider(children: Element) -> Element {
    let session = use_signal(platform_session_store);
    use_context_provider(|| session);
    use_context_provider(|| ApiClient::new(ApiConfig::default()));

    rsx! {
        {children}
    }
}

/// Revalidate the session against the server when a guarded view activates.
///
/// A fresh login is trusted unconditionally (the one-shot skip flag is
/// consumed here). Otherwise, if a persisted session indicator exists
/// without a loaded user, `/auth/me` decides: an auth-class failure signs
/// the session out, anything else leaves it alone. The pre-call delay rides
/// on the resource future, so tearing the view down first cancels it.
pub fn use_session_guard() {
    let mut session = use_session();
    let client = use_api();

    let _ = use_resource(move || {
        let client = client.clone();
        async move {
            let decision = session.write().guard_decision();
            if decision != GuardDecision::Revalidate {
                return;
            }

            session.write().set_loading(true);
            sleep_ms(REVALIDATE_DELAY_MS).await;
            let outcome = client.me().await;
            apply_me_outcome(&mut session.write(), outcome);
        }
    });
}

async fn sleep_ms(ms: u64) {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::sleep(std::time::Duration::from_millis(ms)).await;
    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(std::time::Duration::from_millis(ms)).await;
}

/// Button that signs the current user out.
///
/// The server call is best-effort: the local session is cleared and the
/// navigation callback fires regardless of its outcome.
#[component]
pub fn LogoutButton(
    on_logged_out: EventHandler<()>,
    #[props(default = "".to_string())] class: String,
    #[props(default = "Log out".to_string())] label: String,
) -> Element {
    let mut session = use_session();
    let client = use_api();

    let onclick = move |_| {
        let client = client.clone();
        async move {
            if let Err(e) = client.logout().await {
                tracing::warn!("logout request failed: {e}");
            }
            session.write().logout();
            on_logged_out.call(());
        }
    };

    rsx! {
        button {
            class: "{class}",
            onclick: onclick,
            "{label}"
        }
    }
}
