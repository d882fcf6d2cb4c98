use dioxus::prelude::*;

use api::Api;
use store::{PressboardConfig, TokenVault};
use ui::views::LoginView;
use ui::{AdminLayout, NavState, Notices, SessionProvider};

const MAIN_CSS: Asset = asset!("/assets/main.css");

/// Configuration baked into the binary at build time.
const CONFIG_TOML: &str = include_str!("../pressboard.toml");

fn main() {
    dioxus::launch(App);
}

fn load_config() -> PressboardConfig {
    PressboardConfig::from_toml(CONFIG_TOML).unwrap_or_else(|e| {
        tracing::warn!(
            "invalid {}: {e}, falling back to defaults",
            PressboardConfig::filename()
        );
        PressboardConfig::default()
    })
}

#[component]
fn App() -> Element {
    // One Api handle and one nav/notice store for the whole tree
    use_context_provider(|| {
        let config = load_config();
        let vault = TokenVault::for_platform(&config.storage.token_key);
        Api::new(&config, vault)
    });
    use_context_provider(|| Signal::new(NavState::default()));
    use_context_provider(|| Signal::new(Notices::default()));

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        SessionProvider {
            Root {}
        }
    }
}

/// Switch between the loading screen, the login page and the authenticated
/// shell, driven entirely by the session state.
#[component]
fn Root() -> Element {
    let session = ui::use_session();
    let state = session();

    if state.loading {
        return rsx! {
            div { class: "boot-screen", "Loading..." }
        };
    }
    if !state.authenticated {
        return rsx! {
            LoginView {}
        };
    }
    rsx! {
        AdminLayout {}
    }
}
