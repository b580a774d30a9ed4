use leptos::prelude::*;
use thaw::*;

#[component]
pub fn Loading(#[prop(optional, into)] label: Option<String>) -> impl IntoView {
    let label = label.unwrap_or_else(|| "Wird geladen...".to_string());
    view! {
        <div class="loading">
            <Spinner />
            <span class="loading__label">{label}</span>
        </div>
    }
}

/// Inline error banner used by list pages
#[component]
pub fn ErrorBanner(#[prop(into)] message: Signal<Option<String>>) -> impl IntoView {
    move || {
        message
            .get()
            .map(|e| view! { <div class="alert alert--error">{e}</div> })
    }
}
