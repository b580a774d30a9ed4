use contracts::domain::a007_rechnung::{offener_betrag, Rechnung, RechnungFilter, RechnungStatus};
use contracts::shared::validation::parse_date;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::cmp::Ordering;
use thaw::*;

use crate::domain::a007_rechnung::api;
use crate::shared::components::field_error::{CodeSelect, DateInput};
use crate::shared::components::loading::{ErrorBanner, Loading};
use crate::shared::components::page_header::PageHeader;
use crate::shared::export::export_csv;
use crate::shared::format::{format_date, format_eur};
use crate::shared::icons::icon;
use crate::shared::list_utils::{SortHeader, SortState, Sortable};
use crate::shared::modal::FailureModal;
use crate::shared::submit::{handle_auth_error, SubmitHandle};
use crate::system::auth::context::use_auth;

const STATUS_OPTIONS: [(&str, &str); 4] = [
    ("", "Alle"),
    ("Offen", "Offen"),
    ("Bezahlt", "Bezahlt"),
    ("Storniert", "Storniert"),
];

impl Sortable for Rechnung {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "rechnungsnummer" => self.rechnungsnummer.cmp(&other.rechnungsnummer),
            "betrag" => self
                .betrag_eur
                .partial_cmp(&other.betrag_eur)
                .unwrap_or(Ordering::Equal),
            "faellig_am" => self.faellig_am.cmp(&other.faellig_am),
            "status" => self.status.label().cmp(other.status.label()),
            _ => self.rechnungsdatum.cmp(&other.rechnungsdatum),
        }
    }
}

/// Query of the list; blank or unparsable inputs are left out
fn filter_from_inputs(status: &str, von: &str, bis: &str) -> RechnungFilter {
    let status = match status {
        "Offen" => Some(RechnungStatus::Offen),
        "Bezahlt" => Some(RechnungStatus::Bezahlt),
        "Storniert" => Some(RechnungStatus::Storniert),
        _ => None,
    };
    RechnungFilter {
        status,
        von: parse_date(von),
        bis: parse_date(bis),
    }
}

#[component]
pub fn RechnungenPage() -> impl IntoView {
    let auth = use_auth();
    let rechnungen: RwSignal<Vec<Rechnung>> = RwSignal::new(Vec::new());
    let error = RwSignal::new(None::<String>);
    let (loading, set_loading) = signal(false);
    let status = RwSignal::new(String::new());
    let von = RwSignal::new(String::new());
    let bis = RwSignal::new(String::new());
    let sort = SortState::new("rechnungsdatum");

    let load = move || {
        let filter = filter_from_inputs(
            &status.get_untracked(),
            &von.get_untracked(),
            &bis.get_untracked(),
        );
        set_loading.set(true);
        error.set(None);
        let client = auth.client();
        spawn_local(async move {
            match api::fetch_rechnungen(&client, &filter).await {
                Ok(list) => rechnungen.set(list),
                Err(e) => {
                    if let Some(e) = handle_auth_error(auth, e) {
                        error.set(Some(format!("Rechnungen konnten nicht geladen werden: {}", e)));
                    }
                }
            }
            set_loading.set(false);
        });
    };
    load();

    let visible = Memo::new(move |_| {
        let mut rows = rechnungen.get();
        sort.apply(&mut rows);
        rows
    });
    let offen = Memo::new(move |_| visible.with(|rows| offener_betrag(rows)));

    let on_export = move |_| {
        if let Err(e) = export_csv(&visible.get_untracked(), "rechnungen") {
            error.set(Some(e));
        }
    };

    let mark_paid = Callback::new(move |rechnung_id: i64| {
        rechnungen.update(|list| {
            if let Some(r) = list.iter_mut().find(|r| r.rechnung_id == rechnung_id) {
                r.status = RechnungStatus::Bezahlt;
            }
        });
    });

    view! {
        <div class="page">
            <PageHeader title="Rechnungen">
                <Button appearance=ButtonAppearance::Secondary on_click=on_export>
                    {icon("download")}
                    " CSV"
                </Button>
            </PageHeader>
            <div class="page__content">
                <ErrorBanner message=error />
                <div class="filter-panel">
                    <CodeSelect value=status options=STATUS_OPTIONS.to_vec() />
                    <Label>"von"</Label>
                    <DateInput value=von />
                    <Label>"bis"</Label>
                    <DateInput value=bis />
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| load()
                        disabled=Signal::derive(move || loading.get())
                    >
                        {icon("refresh")}
                        " Filtern"
                    </Button>
                </div>
                <div class="summary-bar">
                    "Offener Betrag: "
                    <strong>{move || format_eur(offen.get())}</strong>
                </div>
                <Show when=move || !loading.get() fallback=|| view! { <Loading /> }>
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell>
                                    <SortHeader sort=sort field="rechnungsnummer" label="Nummer" />
                                </TableHeaderCell>
                                <TableHeaderCell>"Beschreibung"</TableHeaderCell>
                                <TableHeaderCell>
                                    <SortHeader sort=sort field="rechnungsdatum" label="Datum" />
                                </TableHeaderCell>
                                <TableHeaderCell>
                                    <SortHeader sort=sort field="faellig_am" label="Fällig am" />
                                </TableHeaderCell>
                                <TableHeaderCell>
                                    <SortHeader sort=sort field="betrag" label="Betrag" />
                                </TableHeaderCell>
                                <TableHeaderCell>
                                    <SortHeader sort=sort field="status" label="Status" />
                                </TableHeaderCell>
                                <TableHeaderCell>""</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || visible.get()
                                key=|r| (r.rechnung_id, r.status)
                                children=move |rechnung| view! { <RechnungRow rechnung=rechnung on_paid=mark_paid /> }
                            />
                        </TableBody>
                    </Table>
                </Show>
            </div>
        </div>
    }
}

#[component]
fn RechnungRow(rechnung: Rechnung, on_paid: Callback<i64>) -> impl IntoView {
    let handle = SubmitHandle::new();
    let rechnung_id = rechnung.rechnung_id;
    let overdue = rechnung.is_overdue(chrono::Local::now().date_naive());

    Effect::new(move |_| {
        if handle.succeeded() {
            log::info!("invoice {} paid", rechnung_id);
            on_paid.run(rechnung_id);
        }
    });

    let pay = move |_| {
        handle.run(None, move |client| async move { api::bezahlen(&client, rechnung_id).await });
    };

    let badge = match rechnung.status {
        RechnungStatus::Offen if overdue => "badge badge--error",
        RechnungStatus::Offen => "badge badge--warning",
        RechnungStatus::Bezahlt => "badge badge--success",
        RechnungStatus::Storniert => "badge badge--neutral",
    };
    let status_label = if overdue { "Überfällig" } else { rechnung.status.label() };
    let beschreibung = rechnung.beschreibung.clone();
    let rechnungsnummer = rechnung.rechnungsnummer.clone();
    let rechnungsdatum = format_date(&rechnung.rechnungsdatum);
    let faellig_am = format_date(&rechnung.faellig_am);
    let betrag = format_eur(rechnung.betrag_eur);
    let is_payable = rechnung.is_payable();

    view! {
        <TableRow>
            <TableCell>{rechnungsnummer}</TableCell>
            <TableCell>
                <TableCellLayout truncate=true>{beschreibung}</TableCellLayout>
            </TableCell>
            <TableCell>{rechnungsdatum}</TableCell>
            <TableCell>{faellig_am}</TableCell>
            <TableCell>{betrag}</TableCell>
            <TableCell><span class=badge>{status_label}</span></TableCell>
            <TableCell>
                {is_payable.then(|| view! {
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=pay
                        disabled=Signal::derive(move || handle.is_submitting())
                    >
                        "Bezahlen"
                    </Button>
                })}
                <FailureModal failure=handle.failure() />
            </TableCell>
        </TableRow>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_filter_from_inputs() {
        let filter = filter_from_inputs("Offen", "2026-01-01", "");
        assert_eq!(filter.status, Some(RechnungStatus::Offen));
        assert_eq!(filter.von, NaiveDate::from_ymd_opt(2026, 1, 1));
        assert_eq!(filter.bis, None);
        assert_eq!(filter_from_inputs("", "", ""), RechnungFilter::default());
    }

    #[test]
    fn test_status_options_match_enum_labels() {
        for status in [RechnungStatus::Offen, RechnungStatus::Bezahlt, RechnungStatus::Storniert] {
            assert!(STATUS_OPTIONS.iter().any(|(code, _)| *code == status.label()));
        }
    }
}
