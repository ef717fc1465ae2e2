use dioxus::prelude::*;
use ui::{use_api, use_session};

use crate::Route;

/// Account creation page. A successful registration signs the user straight
/// in, so it ends the same way a login does.
#[component]
pub fn Register() -> Element {
    let mut session = use_session();
    let client = use_api();
    let nav = use_navigator();
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut confirm = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    if session.read().is_authenticated() {
        nav.replace(Route::Todos {});
    }

    let handle_register = move |evt: FormEvent| {
        evt.prevent_default();
        let client = client.clone();
        spawn(async move {
            error.set(None);

            let n = name().trim().to_string();
            let e = email().trim().to_string();
            let p = password();

            if n.is_empty() {
                error.set(Some("Please enter your name".to_string()));
                return;
            }
            if e.is_empty() {
                error.set(Some("Please enter your email".to_string()));
                return;
            }
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
            match client.register(&n, &e, &p).await {
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
                h1 { class: "auth-title", "Create your account" }
                p { class: "auth-subtitle", "Start organizing your tasks" }

                form { class: "auth-form", onsubmit: handle_register,
                    if let Some(err) = error() {
                        div { class: "form-error", "{err}" }
                    }

                    input {
                        class: "form-input",
                        r#type: "text",
                        placeholder: "Name",
                        value: name(),
                        oninput: move |evt: FormEvent| name.set(evt.value()),
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

                    input {
                        class: "form-input",
                        r#type: "password",
                        placeholder: "Confirm password",
                        value: confirm(),
                        oninput: move |evt: FormEvent| confirm.set(evt.value()),
                    }

                    button {
                        class: "btn btn-primary",
                        r#type: "submit",
                        disabled: loading(),
                        if loading() { "Creating account..." } else { "Sign up" }
                    }
                }

                p { class: "auth-links",
                    "Already have an account? "
                    Link { class: "auth-link", to: Route::Login {}, "Sign in" }
                }
            }
        }
    }
}
