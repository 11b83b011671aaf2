//! Result Panel - shows the generated code or the last failure

use dioxus::prelude::*;

use curpgen_domain::ResultState;

/// Renders nothing until a submission has been applied. The code is read-only.
#[component]
pub fn ResultPanel(result: ResultState) -> Element {
    match result {
        ResultState::Empty => rsx! {},
        ResultState::Code(code) => rsx! {
            div {
                class: "curp-result",
                label { class: "curp-result__label", "CURP" }
                textarea {
                    class: "curp-result__code",
                    readonly: true,
                    value: "{code}",
                }
            }
        },
        ResultState::Error(message) => rsx! {
            div {
                class: "curp-error",
                "{message}"
            }
        },
    }
}
