//! Labelled form input with helper text and error styling.

use leptos::prelude::*;

/// Text input bound to a string signal. The error signal drives the helper
/// text and the error styling; editing the field clears it, matching the
/// validation flow of the login form.
#[component]
pub fn Input(
    label: &'static str,
    name: &'static str,
    #[prop(default = "text")] input_type: &'static str,
    #[prop(optional)] placeholder: &'static str,
    #[prop(optional)] required: bool,
    value: RwSignal<String>,
    error: RwSignal<Option<String>>,
) -> impl IntoView {
    let input_class = move || {
        if error.get().is_some() {
            "form-field__input form-field__input--error"
        } else {
            "form-field__input"
        }
    };

    view! {
        <label class="form-field">
            <span class="form-field__label">
                {label}
                {required.then(|| view! { <span class="form-field__required">"*"</span> })}
            </span>
            <input
                class=input_class
                type=input_type
                name=name
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| {
                    value.set(event_target_value(&ev));
                    error.set(None);
                }
            />
            {move || error.get().map(|message| view! { <span class="form-field__helper">{message}</span> })}
        </label>
    }
}
