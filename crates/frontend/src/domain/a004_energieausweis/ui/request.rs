//! Household page: own certificate requests and a new request.

use contracts::domain::a004_energieausweis::{AusweisAnfrage, CreateAusweisAnfrageDto};
use contracts::enums::ProzessStatus;
use contracts::shared::validation::optional_text;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a004_energieausweis::api;
use crate::domain::a006_haushaltsdaten::ui::freigaben::FreigabenPanel;
use crate::shared::components::loading::{ErrorBanner, Loading};
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::status_badge::StatusBadge;
use crate::shared::format::format_iso_date;
use crate::shared::modal::FailureModal;
use crate::shared::submit::{handle_auth_error, SubmitHandle};
use crate::system::auth::context::use_auth;

#[component]
pub fn HaushaltEnergieausweisPage() -> impl IntoView {
    let auth = use_auth();
    let Some(haushalt_id) = auth.user().and_then(|u| u.haushalt_id) else {
        return view! {
            <div class="page">
                <PageHeader title="Energieausweis">{()}</PageHeader>
                <div class="alert alert--error">"Ihrem Konto ist kein Haushalt zugeordnet."</div>
            </div>
        }
        .into_any();
    };

    let anfragen: RwSignal<Vec<AusweisAnfrage>> = RwSignal::new(Vec::new());
    let error = RwSignal::new(None::<String>);
    let (loading, set_loading) = signal(false);
    let bemerkung = RwSignal::new(String::new());
    let handle = SubmitHandle::new();

    let load = move || {
        set_loading.set(true);
        let client = auth.client();
        spawn_local(async move {
            match api::fetch_anfragen(&client).await {
                Ok(list) => anfragen.set(list),
                Err(e) => {
                    if let Some(e) = handle_auth_error(auth, e) {
                        error.set(Some(format!("Anfragen konnten nicht geladen werden: {}", e)));
                    }
                }
            }
            set_loading.set(false);
        });
    };
    load();

    Effect::new(move |_| {
        if handle.succeeded() {
            bemerkung.set(String::new());
            handle.reset();
            load();
        }
    });

    let on_request = move |_| {
        let dto = CreateAusweisAnfrageDto {
            bemerkung: optional_text(&bemerkung.get_untracked()),
        };
        handle.run(None, move |client| async move {
            api::anfrage_stellen(&client, haushalt_id, &dto).await
        });
    };

    let has_open = Memo::new(move |_| {
        anfragen.with(|list| {
            list.iter()
                .any(|a| a.status() != Some(ProzessStatus::AusweisErstellt))
        })
    });

    view! {
        <div class="page">
            <PageHeader title="Energieausweis" subtitle="Beauftragen Sie einen Energieberater">
                {()}
            </PageHeader>
            <div class="page__content">
                <ErrorBanner message=error />

                <section class="card">
                    <h3 class="card__title">"Neue Anfrage"</h3>
                    <Show when=move || has_open.get()>
                        <div class="alert alert--info">
                            "Es gibt bereits eine laufende Anfrage. Eine weitere ist trotzdem möglich."
                        </div>
                    </Show>
                    <div class="form__group">
                        <Label>"Bemerkung für den Energieberater"</Label>
                        <Textarea value=bemerkung />
                    </div>
                    <div class="form__actions">
                        <Button
                            appearance=ButtonAppearance::Primary
                            on_click=on_request
                            disabled=Signal::derive(move || handle.is_submitting())
                        >
                            "Energieausweis anfordern"
                        </Button>
                    </div>
                </section>

                <FreigabenPanel haushalt_id=haushalt_id />

                <section class="card">
                    <h3 class="card__title">"Meine Anfragen"</h3>
                    <Show when=move || !loading.get() fallback=|| view! { <Loading /> }>
                        <Show
                            when=move || anfragen.with(|a| !a.is_empty())
                            fallback=|| view! { <p class="text-muted">"Noch keine Anfragen."</p> }
                        >
                            <Table>
                                <TableHeader>
                                    <TableRow>
                                        <TableHeaderCell>"Anfrage"</TableHeaderCell>
                                        <TableHeaderCell>"Status"</TableHeaderCell>
                                        <TableHeaderCell>"Bemerkung"</TableHeaderCell>
                                        <TableHeaderCell>"Erstellt"</TableHeaderCell>
                                    </TableRow>
                                </TableHeader>
                                <TableBody>
                                    <For
                                        each=move || anfragen.get()
                                        key=|a| (a.anfrage_id, a.prozess_status.clone())
                                        children=move |a| view! {
                                            <TableRow>
                                                <TableCell>{format!("#{}", a.anfrage_id)}</TableCell>
                                                <TableCell><StatusBadge status=a.prozess_status.clone() /></TableCell>
                                                <TableCell>{a.bemerkung.clone().unwrap_or_default()}</TableCell>
                                                <TableCell>
                                                    {a.erstellt_am.as_deref().map(format_iso_date).unwrap_or_default()}
                                                </TableCell>
                                            </TableRow>
                                        }
                                    />
                                </TableBody>
                            </Table>
                        </Show>
                    </Show>
                </section>
            </div>
            <FailureModal failure=handle.failure() />
        </div>
    }
    .into_any()
}
