use contracts::domain::a004_energieausweis::AusweisAnfrage;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use std::cmp::Ordering;
use thaw::*;

use crate::domain::a004_energieausweis::api;
use crate::routes::AppRoute;
use crate::shared::components::loading::{ErrorBanner, Loading};
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::status_badge::{status_text, StatusBadge};
use crate::shared::export::export_csv;
use crate::shared::format::format_iso_date;
use crate::shared::icons::icon;
use crate::shared::list_utils::{contains_ci, filter_list, Searchable, SortHeader, SortState, Sortable};
use crate::shared::submit::handle_auth_error;
use crate::system::auth::context::use_auth;

impl Sortable for AusweisAnfrage {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "haushalt_id" => self.haushalt_id.cmp(&other.haushalt_id),
            "status" => self.prozess_status.cmp(&other.prozess_status),
            "erstellt_am" => self.erstellt_am.cmp(&other.erstellt_am),
            _ => self.anfrage_id.cmp(&other.anfrage_id),
        }
    }
}

impl Searchable for AusweisAnfrage {
    fn matches_filter(&self, filter: &str) -> bool {
        self.anfrage_id.to_string().contains(filter)
            || self.haushalt_id.to_string().contains(filter)
            || contains_ci(&status_text(&self.prozess_status), filter)
            || contains_ci(self.bemerkung.as_deref().unwrap_or(""), filter)
    }
}

/// Certificate requests assigned to the consultant
#[component]
pub fn AnfragenListPage() -> impl IntoView {
    let auth = use_auth();
    let all: RwSignal<Vec<AusweisAnfrage>> = RwSignal::new(Vec::new());
    let error = RwSignal::new(None::<String>);
    let (loading, set_loading) = signal(false);
    let search = RwSignal::new(String::new());
    let sort = SortState::new("anfrage_id");

    let load = move || {
        set_loading.set(true);
        error.set(None);
        let client = auth.client();
        spawn_local(async move {
            match api::fetch_anfragen(&client).await {
                Ok(list) => all.set(list),
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

    let visible = Memo::new(move |_| {
        let mut rows = all.with(|list| filter_list(list, &search.get()));
        sort.apply(&mut rows);
        rows
    });

    let on_export = move |_| {
        if let Err(e) = export_csv(&visible.get_untracked(), "ausweis_anfragen") {
            error.set(Some(e));
        }
    };

    view! {
        <div class="page">
            <PageHeader title="Anfragen Energieausweis">
                <Badge>{move || visible.with(|v| v.len()).to_string()}</Badge>
                <Button appearance=ButtonAppearance::Secondary on_click=on_export>
                    {icon("download")}
                    " CSV"
                </Button>
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| load()
                    disabled=Signal::derive(move || loading.get())
                >
                    {icon("refresh")}
                    " Aktualisieren"
                </Button>
            </PageHeader>
            <div class="page__content">
                <ErrorBanner message=error />
                <div class="filter-panel">
                    <Input value=search placeholder="Anfrage, Haushalt oder Status..." />
                </div>
                <Show when=move || !loading.get() fallback=|| view! { <Loading /> }>
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell>
                                    <SortHeader sort=sort field="anfrage_id" label="Anfrage" />
                                </TableHeaderCell>
                                <TableHeaderCell>
                                    <SortHeader sort=sort field="haushalt_id" label="Haushalt" />
                                </TableHeaderCell>
                                <TableHeaderCell>
                                    <SortHeader sort=sort field="status" label="Status" />
                                </TableHeaderCell>
                                <TableHeaderCell>"Bemerkung"</TableHeaderCell>
                                <TableHeaderCell>
                                    <SortHeader sort=sort field="erstellt_am" label="Erstellt" />
                                </TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || visible.get()
                                key=|a| (a.anfrage_id, a.prozess_status.clone())
                                children=move |anfrage| view! {
                                    <TableRow>
                                        <TableCell>
                                            <A href=AppRoute::EnergieberaterAnfrage(anfrage.anfrage_id).path()>
                                                {format!("#{}", anfrage.anfrage_id)}
                                            </A>
                                        </TableCell>
                                        <TableCell>{anfrage.haushalt_id}</TableCell>
                                        <TableCell>
                                            <StatusBadge status=anfrage.prozess_status.clone() />
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout truncate=true>
                                                {anfrage.bemerkung.clone().unwrap_or_default()}
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            {anfrage.erstellt_am.as_deref().map(format_iso_date).unwrap_or_default()}
                                        </TableCell>
                                    </TableRow>
                                }
                            />
                        </TableBody>
                    </Table>
                </Show>
            </div>
        </div>
    }
}
