use dioxus::prelude::*;

use ui::SessionProvider;
use views::{
    Analytics, AppShell, ForgotPassword, Login, Profile, Register, ResetPassword, TodoDetail,
    Todos,
};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Root {},
    #[route("/login")]
    Login {},
    #[route("/register")]
    Register {},
    #[route("/forgot-password")]
    ForgotPassword {},
    #[route("/reset-password?:token")]
    ResetPassword { token: String },
    #[layout(AppShell)]
        #[route("/app/todos")]
        Todos {},
        #[route("/app/todos/:id")]
        TodoDetail { id: String },
        #[route("/app/analytics")]
        Analytics {},
        #[route("/app/profile")]
        Profile {},
    #[end_layout]
    // Old paths from before the /app prefix
    #[redirect("/dashboard", || Route::Todos {})]
    #[redirect("/todos", || Route::Todos {})]
    #[redirect("/todos/:id", |id: String| Route::TodoDetail { id })]
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        SessionProvider {
            Router::<Route> {}
        }
    }
}

/// Redirect `/` based on the session.
#[component]
fn Root() -> Element {
    let session = ui::use_session();
    let nav = use_navigator();

    if session.read().is_authenticated() {
        nav.replace(Route::Todos {});
    } else {
        nav.replace(Route::Login {});
    }

    rsx! {}
}

/// Unknown paths land back on the root redirect.
#[component]
fn NotFound(segments: Vec<String>) -> Element {
    let nav = use_navigator();

    tracing::debug!("unknown route: /{}", segments.join("/"));
    nav.replace(Route::Root {});

    rsx! {}
}
