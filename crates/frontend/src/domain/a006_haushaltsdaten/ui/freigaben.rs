use contracts::domain::a006_haushaltsdaten::DatenFreigabe;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a006_haushaltsdaten::api;
use crate::shared::components::loading::ErrorBanner;
use crate::shared::format::format_iso_date;
use crate::shared::modal::FailureModal;
use crate::shared::submit::{handle_auth_error, SubmitHandle};
use crate::system::auth::context::use_auth;

/// Pending data release requests of the household
#[component]
pub fn FreigabenPanel(haushalt_id: i64) -> impl IntoView {
    let auth = use_auth();
    let freigaben: RwSignal<Vec<DatenFreigabe>> = RwSignal::new(Vec::new());
    let error = RwSignal::new(None::<String>);

    let client = auth.client();
    spawn_local(async move {
        match api::fetch_freigaben(&client, haushalt_id).await {
            Ok(list) => freigaben.set(list),
            Err(e) => {
                if let Some(e) = handle_auth_error(auth, e) {
                    error.set(Some(format!("Freigaben konnten nicht geladen werden: {}", e)));
                }
            }
        }
    });

    view! {
        <Show when=move || error.with(Option::is_some) || freigaben.with(|f| !f.is_empty())>
            <section class="card freigaben">
                <h3 class="card__title">"Offene Datenfreigaben"</h3>
                <ErrorBanner message=error />
                <ul class="freigaben__list">
                    <For
                        each=move || freigaben.get()
                        key=|f| f.freigabe_id
                        children=move |freigabe| view! { <FreigabeRow freigabe=freigabe /> }
                    />
                </ul>
            </section>
        </Show>
    }
}

#[component]
fn FreigabeRow(freigabe: DatenFreigabe) -> impl IntoView {
    let handle = SubmitHandle::new();
    let freigabe_id = freigabe.freigabe_id;

    let erteilen = move |_| {
        handle.run(None, move |client| async move {
            api::freigabe_erteilen(&client, freigabe_id).await
        });
    };

    let angefragt_am = freigabe
        .angefragt_am
        .as_deref()
        .map(format_iso_date)
        .unwrap_or_default();

    view! {
        <li class="freigaben__item">
            <div>
                <strong>{freigabe.angefragt_von.clone()}</strong>
                " (" {freigabe.rolle.display_name()} ") "
                <span class="freigaben__date">{angefragt_am}</span>
            </div>
            <Show
                when=move || !handle.succeeded()
                fallback=|| view! { <span class="badge badge--success">"Freigegeben"</span> }
            >
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=erteilen
                    disabled=Signal::derive(move || handle.is_submitting())
                >
                    "Freigeben"
                </Button>
            </Show>
            <FailureModal failure=handle.failure() />
        </li>
    }
}
