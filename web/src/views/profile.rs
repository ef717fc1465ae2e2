use api::ProfileUpdate;
use dioxus::prelude::*;
use ui::{use_api, use_session};

/// Account settings: profile fields and a change-password form.
#[component]
pub fn Profile() -> Element {
    let mut session = use_session();
    let client = use_api();

    let initial_name = session
        .peek()
        .user()
        .map(|u| u.name.clone())
        .unwrap_or_default();
    let initial_email = session
        .peek()
        .user()
        .map(|u| u.email.clone())
        .unwrap_or_default();

    let mut name = use_signal(move || initial_name);
    let mut email = use_signal(move || initial_email);
    let mut profile_message = use_signal(|| Option::<String>::None);
    let mut profile_error = use_signal(|| Option::<String>::None);
    let mut profile_loading = use_signal(|| false);

    let mut current_password = use_signal(String::new);
    let mut new_password = use_signal(String::new);
    let mut confirm_password = use_signal(String::new);
    let mut password_message = use_signal(|| Option::<String>::None);
    let mut password_error = use_signal(|| Option::<String>::None);
    let mut password_loading = use_signal(|| false);

    let profile_client = client.clone();
    let handle_profile_update = move |evt: FormEvent| {
        evt.prevent_default();
        let client = profile_client.clone();
        spawn(async move {
            profile_error.set(None);
            profile_message.set(None);
            profile_loading.set(true);

            let update = ProfileUpdate {
                name: Some(name().trim().to_string()),
                email: Some(email().trim().to_string()),
            };
            match client.update_profile(&update).await {
                Ok(user) => {
                    session.write().set_user(Some(user));
                    profile_loading.set(false);
                    profile_message.set(Some("Profile updated successfully!".to_string()));
                }
                Err(err) => {
                    profile_loading.set(false);
                    profile_error.set(Some(ui::error_message(&err)));
                }
            }
        });
    };

    let password_client = client.clone();
    let handle_password_update = move |evt: FormEvent| {
        evt.prevent_default();
        let client = password_client.clone();
        spawn(async move {
            password_error.set(None);
            password_message.set(None);

            if new_password() != confirm_password() {
                password_error.set(Some("New passwords do not match".to_string()));
                return;
            }
            if new_password().len() < 6 {
                password_error.set(Some(
                    "Password must be at least 6 characters long".to_string(),
                ));
                return;
            }

            password_loading.set(true);
            match client
                .update_password(&current_password(), &new_password())
                .await
            {
                Ok(()) => {
                    password_loading.set(false);
                    password_message.set(Some("Password updated successfully!".to_string()));
                    current_password.set(String::new());
                    new_password.set(String::new());
                    confirm_password.set(String::new());
                }
                Err(err) => {
                    password_loading.set(false);
                    password_error.set(Some(ui::error_message(&err)));
                }
            }
        });
    };

    let (member_since, verified) = {
        let store = session.read();
        match store.user() {
            Some(user) => (
                ui::short_date(&user.created_at).to_string(),
                user.is_email_verified,
            ),
            None => (String::new(), false),
        }
    };

    rsx! {
        div { class: "page page-narrow",
            div { class: "page-header",
                div {
                    h1 { class: "page-title", "Profile Settings" }
                    p { class: "page-subtitle", "Manage your account settings and preferences" }
                }
            }

            div { class: "detail-card",
                h2 { class: "card-title", "Profile Information" }

                if !member_since.is_empty() {
                    p { class: "profile-hint",
                        "Member since {member_since}"
                        if verified {
                            span { class: "verified-badge", "email verified" }
                        } else {
                            span { class: "unverified-badge", "email not verified" }
                        }
                    }
                }

                form { onsubmit: handle_profile_update,
                    if let Some(err) = profile_error() {
                        div { class: "form-error", "{err}" }
                    }
                    if let Some(msg) = profile_message() {
                        div { class: "form-success", "{msg}" }
                    }

                    div { class: "form-field",
                        label { r#for: "profile-name", "Name" }
                        input {
                            id: "profile-name",
                            class: "form-input",
                            r#type: "text",
                            value: name(),
                            oninput: move |evt: FormEvent| name.set(evt.value()),
                        }
                    }

                    div { class: "form-field",
                        label { r#for: "profile-email", "Email" }
                        input {
                            id: "profile-email",
                            class: "form-input",
                            r#type: "email",
                            value: email(),
                            oninput: move |evt: FormEvent| email.set(evt.value()),
                        }
                    }

                    button {
                        class: "btn btn-primary",
                        r#type: "submit",
                        disabled: profile_loading(),
                        if profile_loading() { "Saving..." } else { "Save changes" }
                    }
                }
            }

            div { class: "detail-card",
                h2 { class: "card-title", "Change Password" }

                form { onsubmit: handle_password_update,
                    if let Some(err) = password_error() {
                        div { class: "form-error", "{err}" }
                    }
                    if let Some(msg) = password_message() {
                        div { class: "form-success", "{msg}" }
                    }

                    div { class: "form-field",
                        label { r#for: "current-password", "Current password" }
                        input {
                            id: "current-password",
                            class: "form-input",
                            r#type: "password",
                            value: current_password(),
                            oninput: move |evt: FormEvent| current_password.set(evt.value()),
                        }
                    }

                    div { class: "form-field",
                        label { r#for: "new-password", "New password" }
                        input {
                            id: "new-password",
                            class: "form-input",
                            r#type: "password",
                            value: new_password(),
                            oninput: move |evt: FormEvent| new_password.set(evt.value()),
                        }
                    }

                    div { class: "form-field",
                        label { r#for: "confirm-password", "Confirm new password" }
                        input {
                            id: "confirm-password",
                            class: "form-input",
                            r#type: "password",
                            value: confirm_password(),
                            oninput: move |evt: FormEvent| confirm_password.set(evt.value()),
                        }
                    }

                    button {
                        class: "btn btn-primary",
                        r#type: "submit",
                        disabled: password_loading(),
                        if password_loading() { "Updating..." } else { "Update password" }
                    }
                }
            }
        }
    }
}
