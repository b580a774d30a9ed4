use contracts::shared::validation::FieldErrors;
use leptos::prelude::*;
use thaw::*;

/// Message of a single field, rendered below the input
#[component]
pub fn FieldError(errors: RwSignal<FieldErrors>, field: &'static str) -> impl IntoView {
    move || {
        errors
            .with(|e| e.get(field).map(str::to_string))
            .map(|message| view! { <span class="form__error">{message}</span> })
    }
}

/// Label + input + field error
#[component]
pub fn FormField(
    #[prop(into)] label: String,
    field: &'static str,
    errors: RwSignal<FieldErrors>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class="form__group"
            class:form__group--invalid=move || errors.with(|e| e.get(field).is_some())
        >
            <Label>{label}</Label>
            {children()}
            <FieldError errors=errors field=field />
        </div>
    }
}

/// Select over `(code, label)` pairs
#[component]
pub fn CodeSelect(value: RwSignal<String>, options: Vec<(&'static str, &'static str)>) -> impl IntoView {
    view! {
        <Select value=value>
            {options
                .into_iter()
                .map(|(code, label)| view! { <option value=code>{label}</option> })
                .collect_view()}
        </Select>
    }
}

/// Native date picker, value in `yyyy-mm-dd`
#[component]
pub fn DateInput(
    value: RwSignal<String>,
    #[prop(optional, into)] disabled: Signal<bool>,
) -> impl IntoView {
    view! {
        <input
            type="date"
            class="form__date"
            prop:value=move || value.get()
            on:input=move |ev| value.set(event_target_value(&ev))
            disabled=move || disabled.get()
        />
    }
}
