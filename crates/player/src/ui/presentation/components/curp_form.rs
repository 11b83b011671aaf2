//! CURP Form - the identity form and its submit action
//!
//! Inputs are controlled: every value shown comes from the controller's
//! snapshot, and every edit goes through `FormController::update_field` before
//! the snapshot signal is refreshed.

use dioxus::prelude::*;

use curpgen_domain::{is_known_state, FieldName, Gender, MEXICAN_STATES};

use super::result_panel::ResultPanel;
use crate::ui::use_form_controller;

const BIRTH_STATE_LIST_ID: &str = "birth-state-options";

#[component]
pub fn CurpForm() -> Element {
    let controller = use_form_controller();

    let mut snapshot = use_signal({
        let controller = controller.clone();
        move || controller.snapshot()
    });

    let edit = use_callback({
        let controller = controller.clone();
        move |(field, value): (FieldName, String)| {
            controller.update_field(field, value);
            snapshot.set(controller.snapshot());
        }
    });

    let submit = use_callback({
        let controller = controller.clone();
        move |_: ()| match controller.begin_submit() {
            Ok(pending) => {
                snapshot.set(controller.snapshot());
                let controller = controller.clone();
                spawn(async move {
                    pending.resolve().await;
                    snapshot.set(controller.snapshot());
                });
            }
            Err(e) => {
                tracing::debug!("Submit refused: {}", e);
                snapshot.set(controller.snapshot());
            }
        }
    });

    let reset = use_callback(move |_: ()| {
        controller.reset();
        snapshot.set(controller.snapshot());
    });

    let state = snapshot.read().clone();
    let fields = state.fields;
    let gender_placeholder = FieldName::Gender.label();
    let unknown_state =
        !fields.birth_state.trim().is_empty() && !is_known_state(&fields.birth_state);

    rsx! {
        div {
            class: "curp-form",

            h1 { class: "curp-form__title", "Generador de CURP" }

            form {
                class: "curp-form__fields",
                onsubmit: move |e: FormEvent| {
                    e.prevent_default();
                    submit.call(());
                },

                TextField { field: FieldName::FirstName, value: fields.first_name.clone(), on_edit: edit }
                TextField { field: FieldName::FatherSurname, value: fields.father_surname.clone(), on_edit: edit }
                TextField { field: FieldName::MotherSurname, value: fields.mother_surname.clone(), on_edit: edit }

                input {
                    class: "curp-form__input",
                    r#type: "date",
                    name: FieldName::BirthDate.as_str(),
                    value: "{fields.birth_date}",
                    required: true,
                    oninput: move |e| edit.call((FieldName::BirthDate, e.value())),
                }

                select {
                    class: "curp-form__input",
                    name: FieldName::Gender.as_str(),
                    value: "{fields.gender}",
                    required: true,
                    onchange: move |e| edit.call((FieldName::Gender, e.value())),

                    option { value: "", "{gender_placeholder}" }
                    for gender in Gender::ALL {
                        option {
                            key: "{gender}",
                            value: gender.as_code(),
                            {gender.label()}
                        }
                    }
                }

                input {
                    class: "curp-form__input",
                    r#type: "text",
                    name: FieldName::BirthState.as_str(),
                    list: BIRTH_STATE_LIST_ID,
                    placeholder: FieldName::BirthState.label(),
                    value: "{fields.birth_state}",
                    required: true,
                    oninput: move |e| edit.call((FieldName::BirthState, e.value())),
                }
                datalist {
                    id: BIRTH_STATE_LIST_ID,
                    for name in MEXICAN_STATES.iter() {
                        option { key: "{name}", value: "{name}" }
                    }
                }
                if unknown_state {
                    p {
                        class: "curp-form__hint",
                        "Entidad no reconocida; se enviará tal como está escrita."
                    }
                }

                div {
                    class: "curp-form__actions",
                    button {
                        class: "curp-form__submit",
                        r#type: "submit",
                        disabled: !state.can_submit,
                        if state.submitting { "Generando…" } else { "Generar CURP" }
                    }
                    button {
                        class: "curp-form__reset",
                        r#type: "button",
                        onclick: move |_| reset.call(()),
                        "Limpiar"
                    }
                }
            }

            ResultPanel { result: state.result }
        }
    }
}

/// Required free-text input bound to one form field.
#[component]
fn TextField(field: FieldName, value: String, on_edit: Callback<(FieldName, String)>) -> Element {
    rsx! {
        input {
            class: "curp-form__input",
            r#type: "text",
            name: field.as_str(),
            placeholder: field.label(),
            value: "{value}",
            required: true,
            oninput: move |e| on_edit.call((field, e.value())),
        }
    }
}
