use dioxus::prelude::*;
use ui::use_api;

use crate::Route;

/// Request a password-reset email.
#[component]
pub fn ForgotPassword() -> Element {
    let client = use_api();
    let mut email = use_signal(String::new);
    let mut message = use_signal(|| Option::<String>::None);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let client = client.clone();
        spawn(async move {
            error.set(None);
            message.set(None);

            let e = email().trim().to_string();
            if e.is_empty() {
                error.set(Some("Please enter your email".to_string()));
                return;
            }

            loading.set(true);
            match client.forgot_password(&e).await {
                Ok(confirmation) => {
                    loading.set(false);
                    message.set(Some(confirmation));
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
                h1 { class: "auth-title", "Forgot password" }
                p { class: "auth-subtitle",
                    "Enter your email and we'll send you a reset link"
                }

                form { class: "auth-form", onsubmit: handle_submit,
                    if let Some(err) = error() {
                        div { class: "form-error", "{err}" }
                    }
                    if let Some(msg) = message() {
                        div { class: "form-success", "{msg}" }
                    }

                    input {
                        class: "form-input",
                        r#type: "email",
                        placeholder: "Email",
                        value: email(),
                        oninput: move |evt: FormEvent| email.set(evt.value()),
                    }

                    button {
                        class: "btn btn-primary",
                        r#type: "submit",
                        disabled: loading(),
                        if loading() { "Sending..." } else { "Send reset link" }
                    }
                }

                p { class: "auth-links",
                    Link { class: "auth-link", to: Route::Login {}, "Back to sign in" }
                }
            }
        }
    }
}
