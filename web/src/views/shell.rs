use dioxus::prelude::*;
use ui::{use_session, use_session_guard, LogoutButton, TodoData};

use crate::Route;

/// Guarded application layout: header navigation around the routed content.
///
/// Runs the session guard on activation, shows a loading screen while a
/// revalidation is in flight, and bounces to the login page once the session
/// resolves as signed out. Also owns the todo cache, so list, detail, and
/// analytics views share one set of query results.
#[component]
pub fn AppShell() -> Element {
    let session = use_session();
    let nav = use_navigator();
    let route = use_route::<Route>();
    use_context_provider(|| Signal::new(TodoData::default()));
    use_session_guard();

    let current = session.read().session().clone();

    if current.is_loading {
        return rsx! {
            div { class: "page-loading",
                div { class: "spinner" }
            }
        };
    }

    if !current.is_authenticated {
        nav.replace(Route::Login {});
        return rsx! {};
    }

    let user_name = current
        .user
        .as_ref()
        .map(|u| u.name.clone())
        .unwrap_or_default();
    let on_todos = matches!(route, Route::Todos {} | Route::TodoDetail { .. });
    let on_analytics = matches!(route, Route::Analytics {});
    let on_profile = matches!(route, Route::Profile {});

    rsx! {
        div { class: "app-shell",
            header { class: "app-header",
                Link { class: "brand", to: Route::Todos {},
                    span { class: "brand-mark", "\u{2713}" }
                    span { class: "brand-name", "ToDoPro" }
                }

                nav { class: "app-nav",
                    Link {
                        class: if on_todos { "nav-link active" } else { "nav-link" },
                        to: Route::Todos {},
                        "Todos"
                    }
                    Link {
                        class: if on_analytics { "nav-link active" } else { "nav-link" },
                        to: Route::Analytics {},
                        "Analytics"
                    }
                    Link {
                        class: if on_profile { "nav-link active" } else { "nav-link" },
                        to: Route::Profile {},
                        "Profile"
                    }
                }

                div { class: "app-user",
                    span { class: "app-user-name", "{user_name}" }
                    LogoutButton {
                        class: "nav-logout",
                        on_logged_out: move |_| {
                            nav.replace(Route::Login {});
                        },
                    }
                }
            }

            main { class: "app-main",
                Outlet::<Route> {}
            }
        }
    }
}
