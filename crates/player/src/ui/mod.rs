use dioxus::prelude::*;

use crate::application::FormController;

pub mod presentation;

/// Hook to access the form controller from Dioxus context.
///
/// Provided by the composition root (see `crates/player/src/main.rs`).
pub fn use_form_controller() -> FormController {
    use_context::<FormController>()
}

pub fn app() -> Element {
    rsx! {
        AppRoot {}
    }
}

#[component]
fn AppRoot() -> Element {
    rsx! {
        div {
            class: "app-shell",
            presentation::components::CurpForm {}
        }
    }
}
