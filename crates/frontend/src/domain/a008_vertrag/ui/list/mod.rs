use contracts::domain::a008_vertrag::{Vertrag, VertragStatus};
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::cmp::Ordering;
use thaw::*;

use crate::domain::a008_vertrag::api;
use crate::shared::components::loading::{ErrorBanner, Loading};
use crate::shared::components::page_header::PageHeader;
use crate::shared::export::export_csv;
use crate::shared::format::{format_date, format_eur};
use crate::shared::icons::icon;
use crate::shared::list_utils::{contains_ci, filter_list, Searchable, SortHeader, SortState, Sortable};
use crate::shared::submit::handle_auth_error;
use crate::system::auth::context::use_auth;

impl Sortable for Vertrag {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "vertragsart" => self.vertragsart.cmp(&other.vertragsart),
            "vertragspartner" => self.vertragspartner.cmp(&other.vertragspartner),
            "status" => self.status.label().cmp(other.status.label()),
            "beginn" => self.beginn.cmp(&other.beginn),
            _ => self.vertragsnummer.cmp(&other.vertragsnummer),
        }
    }
}

impl Searchable for Vertrag {
    fn matches_filter(&self, filter: &str) -> bool {
        contains_ci(&self.vertragsnummer, filter)
            || contains_ci(&self.vertragsart, filter)
            || contains_ci(&self.vertragspartner, filter)
    }
}

fn status_class(status: VertragStatus) -> &'static str {
    match status {
        VertragStatus::Aktiv => "badge badge--success",
        VertragStatus::Gekuendigt => "badge badge--warning",
        VertragStatus::Entwurf => "badge badge--neutral",
        VertragStatus::Beendet => "badge badge--neutral",
    }
}

#[component]
pub fn VertraegePage() -> impl IntoView {
    let auth = use_auth();
    let vertraege: RwSignal<Vec<Vertrag>> = RwSignal::new(Vec::new());
    let error = RwSignal::new(None::<String>);
    let (loading, set_loading) = signal(false);
    let search = RwSignal::new(String::new());
    let sort = SortState::new("beginn");
    let selected: RwSignal<Option<Vertrag>> = RwSignal::new(None);
    let details_open = RwSignal::new(false);

    let client = auth.client();
    set_loading.set(true);
    spawn_local(async move {
        match api::fetch_vertraege(&client).await {
            Ok(list) => vertraege.set(list),
            Err(e) => {
                if let Some(e) = handle_auth_error(auth, e) {
                    error.set(Some(format!("Verträge konnten nicht geladen werden: {}", e)));
                }
            }
        }
        set_loading.set(false);
    });

    let visible = Memo::new(move |_| {
        let mut rows = vertraege.with(|list| filter_list(list, &search.get()));
        sort.apply(&mut rows);
        rows
    });

    let open_details = move |vertrag_id: i64| {
        selected.set(None);
        details_open.set(true);
        let client = auth.client();
        spawn_local(async move {
            match api::fetch_vertrag(&client, vertrag_id).await {
                Ok(v) => selected.set(Some(v)),
                Err(e) => {
                    details_open.set(false);
                    if let Some(e) = handle_auth_error(auth, e) {
                        error.set(Some(format!("Vertrag konnte nicht geladen werden: {}", e)));
                    }
                }
            }
        });
    };

    let on_export = move |_| {
        if let Err(e) = export_csv(&visible.get_untracked(), "vertraege") {
            error.set(Some(e));
        }
    };

    view! {
        <div class="page">
            <PageHeader title="Verträge">
                <Badge>{move || visible.with(|v| v.len()).to_string()}</Badge>
                <Button appearance=ButtonAppearance::Secondary on_click=on_export>
                    {icon("download")}
                    " CSV"
                </Button>
            </PageHeader>
            <div class="page__content">
                <ErrorBanner message=error />
                <div class="filter-panel">
                    <Input value=search placeholder="Nummer, Art oder Partner..." />
                </div>
                <Show when=move || !loading.get() fallback=|| view! { <Loading /> }>
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell>
                                    <SortHeader sort=sort field="vertragsnummer" label="Nummer" />
                                </TableHeaderCell>
                                <TableHeaderCell>
                                    <SortHeader sort=sort field="vertragsart" label="Art" />
                                </TableHeaderCell>
                                <TableHeaderCell>
                                    <SortHeader sort=sort field="vertragspartner" label="Partner" />
                                </TableHeaderCell>
                                <TableHeaderCell>
                                    <SortHeader sort=sort field="beginn" label="Laufzeit" />
                                </TableHeaderCell>
                                <TableHeaderCell>"Abschlag"</TableHeaderCell>
                                <TableHeaderCell>
                                    <SortHeader sort=sort field="status" label="Status" />
                                </TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || visible.get()
                                key=|v| v.vertrag_id
                                children=move |vertrag| {
                                    let id = vertrag.vertrag_id;
                                    let vertragsnummer = vertrag.vertragsnummer.clone();
                                    let vertragsart = vertrag.vertragsart.clone();
                                    let vertragspartner = vertrag.vertragspartner.clone();
                                    let laufzeit = vertrag.laufzeit_label();
                                    let abschlag = vertrag.monatlicher_abschlag_eur.map(format_eur).unwrap_or_default();
                                    let status = vertrag.status;
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <a href="#" on:click=move |ev| {
                                                    ev.prevent_default();
                                                    open_details(id);
                                                }>
                                                    {vertragsnummer}
                                                </a>
                                            </TableCell>
                                            <TableCell>{vertragsart}</TableCell>
                                            <TableCell>{vertragspartner}</TableCell>
                                            <TableCell>{laufzeit}</TableCell>
                                            <TableCell>
                                                {abschlag}
                                            </TableCell>
                                            <TableCell>
                                                <span class=status_class(status)>{status.label()}</span>
                                            </TableCell>
                                        </TableRow>
                                    }
                                }
                            />
                        </TableBody>
                    </Table>
                </Show>
            </div>

            <Dialog open=details_open>
                <DialogSurface>
                    <DialogBody>
                        <DialogTitle>"Vertragsdetails"</DialogTitle>
                        <DialogContent>
                            {move || match selected.get() {
                                None => view! { <Loading /> }.into_any(),
                                Some(v) => view! { <VertragDetails vertrag=v /> }.into_any(),
                            }}
                        </DialogContent>
                        <DialogActions>
                            <Button appearance=ButtonAppearance::Secondary on_click=move |_| details_open.set(false)>
                                "Schließen"
                            </Button>
                        </DialogActions>
                    </DialogBody>
                </DialogSurface>
            </Dialog>
        </div>
    }
}

#[component]
fn VertragDetails(vertrag: Vertrag) -> impl IntoView {
    let heute = chrono::Local::now().date_naive();
    let laeuft = vertrag.is_running_on(heute);

    view! {
        <dl class="summary__grid">
            <dt>"Nummer"</dt>
            <dd>{vertrag.vertragsnummer.clone()}</dd>
            <dt>"Art"</dt>
            <dd>{vertrag.vertragsart.clone()}</dd>
            <dt>"Partner"</dt>
            <dd>{vertrag.vertragspartner.clone()}</dd>
            <dt>"Beginn"</dt>
            <dd>{format_date(&vertrag.beginn)}</dd>
            <dt>"Ende"</dt>
            <dd>{vertrag.ende.as_ref().map(format_date).unwrap_or_else(|| "unbefristet".to_string())}</dd>
            <dt>"Monatlicher Abschlag"</dt>
            <dd>{vertrag.monatlicher_abschlag_eur.map(format_eur).unwrap_or_else(|| "-".to_string())}</dd>
            <dt>"Status"</dt>
            <dd>
                <span class=status_class(vertrag.status)>{vertrag.status.label()}</span>
                {laeuft.then_some(" (läuft aktuell)")}
            </dd>
        </dl>
    }
}
