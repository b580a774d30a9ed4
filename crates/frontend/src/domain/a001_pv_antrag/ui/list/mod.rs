//! Application tables of all roles. One table component, one page per role.

use contracts::domain::a001_pv_antrag::PvAntrag;
use contracts::enums::{ProzessStatus, UserRole};
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use std::cmp::Ordering;
use thaw::*;

use crate::domain::a001_pv_antrag::api;
use crate::routes::AppRoute;
use crate::shared::components::field_error::CodeSelect;
use crate::shared::components::loading::{ErrorBanner, Loading};
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::status_badge::StatusBadge;
use crate::shared::export::export_csv;
use crate::shared::format::format_iso_date;
use crate::shared::icons::icon;
use crate::shared::list_utils::{contains_ci, filter_list, Searchable, SortHeader, SortState, Sortable};
use crate::shared::submit::handle_auth_error;
use crate::system::auth::context::use_auth;

impl Sortable for PvAntrag {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "haushalt_id" => self.haushalt_id.cmp(&other.haushalt_id),
            "adresse" => self.adresse.cmp(&other.adresse),
            "status" => status_rank(self).cmp(&status_rank(other)),
            "erstellt_am" => self.erstellt_am.cmp(&other.erstellt_am),
            _ => self.anlage_id.cmp(&other.anlage_id),
        }
    }
}

/// Unknown states sort last
fn status_rank(antrag: &PvAntrag) -> usize {
    antrag
        .status()
        .and_then(|s| ProzessStatus::all().iter().position(|x| *x == s))
        .unwrap_or(usize::MAX)
}

impl Searchable for PvAntrag {
    fn matches_filter(&self, filter: &str) -> bool {
        self.anlage_id.to_string().contains(filter)
            || contains_ci(self.adresse.as_deref().unwrap_or(""), filter)
            || contains_ci(&self.status_label(), filter)
    }
}

/// Search, status filter, sort; applied in that order
fn visible_antraege(all: &[PvAntrag], search: &str, status: &str, sort: &SortState) -> Vec<PvAntrag> {
    let mut rows: Vec<PvAntrag> = filter_list(all, search)
        .into_iter()
        .filter(|a| status.is_empty() || a.prozess_status == status)
        .collect();
    sort.apply(&mut rows);
    rows
}

fn status_options() -> Vec<(&'static str, &'static str)> {
    let mut options = vec![("", "Alle Status")];
    options.extend(ProzessStatus::pv_steps().iter().map(|s| (s.as_str(), s.label())));
    options
}

#[component]
fn AntragTable(
    role: UserRole,
    #[prop(into)] title: String,
    #[prop(optional)] allow_create: bool,
) -> impl IntoView {
    let auth = use_auth();
    let all: RwSignal<Vec<PvAntrag>> = RwSignal::new(Vec::new());
    let error = RwSignal::new(None::<String>);
    let (loading, set_loading) = signal(false);
    let search = RwSignal::new(String::new());
    let status_filter = RwSignal::new(String::new());
    let sort = SortState::new("anlage_id");

    let load = move || {
        set_loading.set(true);
        error.set(None);
        let client = auth.client();
        spawn_local(async move {
            match api::fetch_antraege(&client).await {
                Ok(list) => {
                    log::debug!("{} applications loaded", list.len());
                    all.set(list);
                }
                Err(e) => {
                    if let Some(e) = handle_auth_error(auth, e) {
                        error.set(Some(format!("Anträge konnten nicht geladen werden: {}", e)));
                    }
                }
            }
            set_loading.set(false);
        });
    };
    load();

    let visible = Memo::new(move |_| {
        all.with(|list| visible_antraege(list, &search.get(), &status_filter.get(), &sort))
    });

    let on_export = move |_| {
        if let Err(e) = export_csv(&visible.get_untracked(), "antraege") {
            error.set(Some(e));
        }
    };

    view! {
        <div class="page">
            <PageHeader title=title>
                <Badge>{move || visible.with(|v| v.len()).to_string()}</Badge>
                {allow_create.then(|| view! {
                    <A href=AppRoute::HaushaltAntragNeu.path()>
                        <Button appearance=ButtonAppearance::Primary>
                            {icon("plus")}
                            " Neuer Antrag"
                        </Button>
                    </A>
                })}
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
                    <Input value=search placeholder="Anlage, Adresse oder Status..." />
                    <CodeSelect value=status_filter options=status_options() />
                </div>

                <Show when=move || !loading.get() fallback=|| view! { <Loading /> }>
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell>
                                    <SortHeader sort=sort field="anlage_id" label="Anlage" />
                                </TableHeaderCell>
                                <TableHeaderCell>
                                    <SortHeader sort=sort field="haushalt_id" label="Haushalt" />
                                </TableHeaderCell>
                                <TableHeaderCell>
                                    <SortHeader sort=sort field="adresse" label="Adresse" />
                                </TableHeaderCell>
                                <TableHeaderCell>
                                    <SortHeader sort=sort field="status" label="Status" />
                                </TableHeaderCell>
                                <TableHeaderCell>"NVP"</TableHeaderCell>
                                <TableHeaderCell>
                                    <SortHeader sort=sort field="erstellt_am" label="Erstellt" />
                                </TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || visible.get()
                                key=|a| (a.anlage_id, a.prozess_status.clone())
                                children=move |antrag| {
                                    let anlage = format!("#{}", antrag.anlage_id);
                                    let link = match AppRoute::antrag_for(role, antrag.anlage_id) {
                                        Some(route) => view! { <A href=route.path()>{anlage}</A> }.into_any(),
                                        None => view! { <span>{anlage}</span> }.into_any(),
                                    };
                                    view! {
                                        <TableRow>
                                            <TableCell>{link}</TableCell>
                                            <TableCell>{antrag.haushalt_id}</TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {antrag.adresse.clone().unwrap_or_default()}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <StatusBadge status=antrag.prozess_status.clone() />
                                            </TableCell>
                                            <TableCell>{if antrag.nvp_pruefung { "✓" } else { "" }}</TableCell>
                                            <TableCell>
                                                {antrag.erstellt_am.as_deref().map(format_iso_date).unwrap_or_default()}
                                            </TableCell>
                                        </TableRow>
                                    }
                                }
                            />
                        </TableBody>
                    </Table>
                </Show>
            </div>
        </div>
    }
}

#[component]
pub fn HaushaltAntraegePage() -> impl IntoView {
    view! { <AntragTable role=UserRole::Haushalt title="Meine PV-Anträge" allow_create=true /> }
}

#[component]
pub fn SolarteurAntraegePage() -> impl IntoView {
    view! { <AntragTable role=UserRole::Solarteur title="Anfragen" /> }
}

#[component]
pub fn NetzbetreiberAntraegePage() -> impl IntoView {
    view! { <AntragTable role=UserRole::Netzbetreiber title="Netzanschlussanträge" /> }
}

#[component]
pub fn AdminAntraegePage() -> impl IntoView {
    view! { <AntragTable role=UserRole::Admin title="Alle Anträge" /> }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn antrag(id: i64, status: &str, adresse: &str) -> PvAntrag {
        PvAntrag {
            anlage_id: id,
            haushalt_id: 1,
            solarteur_id: None,
            prozess_status: status.to_string(),
            nvp_pruefung: false,
            adresse: Some(adresse.to_string()),
            erstellt_am: None,
        }
    }

    #[test]
    fn test_search_matches_address_and_status() {
        let a = antrag(7, "Genehmigt", "Lindenweg 4, Hamburg");
        assert!(a.matches_filter("hamburg"));
        assert!(a.matches_filter("genehmigt"));
        assert!(a.matches_filter("7"));
        assert!(!a.matches_filter("berlin"));
    }

    #[test]
    fn test_status_sorts_by_process_order() {
        let early = antrag(1, "DatenAngefordert", "a");
        let late = antrag(2, "Genehmigt", "b");
        let unknown = antrag(3, "Irgendwas", "c");
        assert_eq!(early.compare_by_field(&late, "status"), Ordering::Less);
        assert_eq!(late.compare_by_field(&unknown, "status"), Ordering::Less);
    }

    #[test]
    fn test_status_options() {
        let options = status_options();
        assert_eq!(options.len(), 10);
        assert_eq!(options[1], ("AnfrageGestellt", "Anfrage gestellt"));
    }
}
