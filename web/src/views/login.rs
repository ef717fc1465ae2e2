use dioxus::prelude::*;
use ui::{use_api, use_session};

use crate::Route;

/// Login page with an email/password form.
#[component]
pub fn Login() -> Element {
    let mut session = use_session();
    let client = use_api();
    let nav = use_navigator();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    // Already signed in: straight to the app
    if session.read().is_authenticated() {
        nav.replace(Route::Todos {});
    }

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        let client = client.clone();
        spawn(async move {
            error.set(None);

            let e = email().trim().to_string();
            let p = password();

            if e.is_empty() {
                error.set(Some("Please enter your email".to_string()));
                return;
            }
            if p.is_empty() {
                error.set(Some("Please enter your password".to_string()));
                return;
            }

            loading.set(true);
            match client.login(&e, &p).await {
                Ok(user) => {
                    session.write().login_success(user);
                    nav.replace(Route::Todos {});
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
                h1 { class: "auth-title", "ToDoPro" }
                p { class: "auth-subtitle", "Sign in to your account" }

                form { class: "auth-form", onsubmit: handle_login,
                    if let Some(err) = error() {
                        div { class: "form-error", "{err}" }
                    }

                    input {
                        class: "form-input",
                        r#type: "email",
                        placeholder: "Email",
                        value: email(),
                        oninput: move |evt: FormEvent| email.set(evt.value()),
                    }

                    input {
                        class: "form-input",
                        r#type: "password",
                        placeholder: "Password",
                        value: password(),
                        oninput: move |evt: FormEvent| password.set(evt.value()),
                    }

                    button {
                        class: "btn btn-primary",
                        r#type: "submit",
                        disabled: loading(),
                        if loading() { "Signing in..." } else { "Sign in" }
                    }
                }

                p { class: "auth-links",
                    Link { class: "auth-link", to: Route::ForgotPassword {}, "Forgot password?" }
                }
                p { class: "auth-links",
                    "Don't have an account? "
                    Link { class: "auth-link", to: Route::Register {}, "Sign up" }
                }
            }
        }
    }
}
