use contracts::domain::a002_angebot::Angebot;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a002_angebot::api;
use crate::shared::components::loading::{ErrorBanner, Loading};
use crate::shared::format::{format_datetime, format_eur, format_number};
use crate::shared::modal::FailureModal;
use crate::shared::submit::{handle_auth_error, SubmitHandle};
use crate::system::auth::context::use_auth;

/// Offers of one application. With `can_accept` the household may accept
/// an offer that is still open.
#[component]
pub fn AngebotListe(
    anlage_id: i64,
    #[prop(optional)] can_accept: bool,
    #[prop(optional)] on_changed: Option<Callback<()>>,
) -> impl IntoView {
    let auth = use_auth();
    let angebote: RwSignal<Vec<Angebot>> = RwSignal::new(Vec::new());
    let error = RwSignal::new(None::<String>);
    let (loading, set_loading) = signal(true);

    let client = auth.client();
    spawn_local(async move {
        match api::fetch_angebote(&client, anlage_id).await {
            Ok(list) => angebote.set(list),
            Err(e) => {
                if let Some(e) = handle_auth_error(auth, e) {
                    error.set(Some(format!("Angebote konnten nicht geladen werden: {}", e)));
                }
            }
        }
        set_loading.set(false);
    });

    let any_accepted = Memo::new(move |_| angebote.with(|list| list.iter().any(|a| a.angenommen)));

    view! {
        <section class="card">
            <h3 class="card__title">"Angebote"</h3>
            <ErrorBanner message=error />
            <Show when=move || !loading.get() fallback=|| view! { <Loading /> }>
                <Show
                    when=move || angebote.with(|a| !a.is_empty())
                    fallback=|| view! { <p class="text-muted">"Noch keine Angebote vorhanden."</p> }
                >
                    <Table>
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell>"Modultyp"</TableHeaderCell>
                                <TableHeaderCell>"Kapazität"</TableHeaderCell>
                                <TableHeaderCell>"Fläche"</TableHeaderCell>
                                <TableHeaderCell>"Ausrichtung"</TableHeaderCell>
                                <TableHeaderCell>"Kosten"</TableHeaderCell>
                                <TableHeaderCell>"€/kWp"</TableHeaderCell>
                                <TableHeaderCell>"Erstellt"</TableHeaderCell>
                                <TableHeaderCell>""</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || angebote.get()
                                key=|a| (a.angebot_id, a.angenommen)
                                children=move |angebot| view! {
                                    <AngebotRow
                                        angebot=angebot
                                        can_accept=Signal::derive(move || can_accept && !any_accepted.get())
                                        on_accepted=Callback::new(move |id: i64| {
                                            angebote.update(|list| {
                                                for a in list.iter_mut() {
                                                    a.angenommen = a.angebot_id == id;
                                                }
                                            });
                                            if let Some(cb) = on_changed {
                                                cb.run(());
                                            }
                                        })
                                    />
                                }
                            />
                        </TableBody>
                    </Table>
                </Show>
            </Show>
        </section>
    }
}

#[component]
fn AngebotRow(
    angebot: Angebot,
    can_accept: Signal<bool>,
    on_accepted: Callback<i64>,
) -> impl IntoView {
    let handle = SubmitHandle::new();
    let angebot_id = angebot.angebot_id;

    Effect::new(move |_| {
        if handle.succeeded() {
            on_accepted.run(angebot_id);
        }
    });

    let annehmen = move |_| {
        handle.run(None, move |client| async move {
            api::angebot_annehmen(&client, angebot_id).await
        });
    };

    let pro_kwp = angebot
        .kosten_pro_kwp()
        .map(format_eur)
        .unwrap_or_else(|| "-".to_string());
    let angenommen = angebot.angenommen;

    view! {
        <TableRow>
            <TableCell>{angebot.modultyp.clone()}</TableCell>
            <TableCell>{format!("{} kWp", format_number(angebot.kapazitaet_kwp, 2))}</TableCell>
            <TableCell>{format!("{} m²", format_number(angebot.installationsflaeche_m2, 1))}</TableCell>
            <TableCell>{angebot.ausrichtung.label()}</TableCell>
            <TableCell>{format_eur(angebot.kosten_eur)}</TableCell>
            <TableCell>{pro_kwp}</TableCell>
            <TableCell>{format_datetime(&angebot.erstellt_am)}</TableCell>
            <TableCell>
                {move || {
                    if angenommen {
                        view! { <span class="badge badge--success">"Angenommen"</span> }.into_any()
                    } else if can_accept.get() {
                        view! {
                            <Button
                                appearance=ButtonAppearance::Primary
                                on_click=annehmen
                                disabled=Signal::derive(move || handle.is_submitting())
                            >
                                "Annehmen"
                            </Button>
                        }
                        .into_any()
                    } else {
                        ().into_any()
                    }
                }}
                <FailureModal failure=handle.failure() />
            </TableCell>
        </TableRow>
    }
}
