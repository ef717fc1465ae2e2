use dioxus::prelude::*;
use ui::{use_api, use_session};

use crate::Route;

/// Set a new password from an emailed reset link. The token arrives in the
/// query string; a successful reset signs the user in when the backend
/// returns them.
#[component]
pub fn ResetPassword(token: String) -> Element {
    let mut session = use_session();
    let client = use_api();
    let nav = use_navigator();
    let token_signal = use_signal(|| token.clone());
    let mut password = use_signal(String::new);
    let mut confirm = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let client = client.clone();
        spawn(async move {
            error.set(None);

            let p = password();
            if p.len() < 6 {
                error.set(Some(
                    "Password must be at least 6 characters long".to_string(),
                ));
                return;
            }
            if p != confirm() {
                error.set(Some("Passwords do not match".to_string()));
                return;
            }

            loading.set(true);
            match client.reset_password(&token_signal(), &p).await {
                Ok(Some(user)) => {
                    session.write().login_success(user);
                    nav.replace(Route::Todos {});
                }
                Ok(None) => {
                    nav.replace(Route::Login {});
                }
                Err(err) => {
                    loading.set(false);
                    error.set(Some(ui::error_message(&err)));
                }
            }
        });
    };

    rsx! {
        div { class: "auth-page",
            div { class: "auth-card",
                h1 { class: "auth-title", "Reset password" }
                p { class: "auth-subtitle", "Enter your new password" }

                form { class: "auth-form", onsubmit: handle_submit,
                    if let Some(err) = error() {
                        div { class: "form-error", "{err}" }
                    }

                    input {
                        class: "form-input",
                        r#type: "password",
                        placeholder: "New password",
                        value: password(),
                        oninput: move |evt: FormEvent| password.set(evt.value()),
                    }

                    input {
                        class: "form-input",
                        r#type: "password",
                        placeholder: "Confirm new password",
                        value: confirm(),
                        oninput: move |evt: FormEvent| confirm.set(evt.value()),
                    }

                    button {
                        class: "btn btn-primary",
                        r#type: "submit",
                        disabled: loading(),
                        if loading() { "Resetting..." } else { "Reset password" }
                    }
                }

                p { class: "auth-links",
                    Link { class: "auth-link", to: Route::Login {}, "Back to sign in" }
                }
            }
        }
    }
}
