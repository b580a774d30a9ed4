//! Renovation plan of the consultant: a variable number of measures,
//! validated and sent together.

use contracts::domain::a005_effizienzmassnahme::{EffizienzmassnahmeForm, MassnahmenplanForm};
use contracts::shared::validation::FieldErrors;
use leptos::prelude::*;
use thaw::*;

use crate::domain::a005_effizienzmassnahme::api;
use crate::routes::AppRoute;
use crate::shared::components::field_error::{CodeSelect, FieldError};
use crate::shared::icons::icon;
use crate::shared::modal::FailureModal;
use crate::shared::submit::SubmitHandle;

const PRIORITAETEN: [(&str, &str); 3] = [("1", "1 - hoch"), ("2", "2 - mittel"), ("3", "3 - niedrig")];

#[derive(Clone, Copy)]
struct MassnahmeRow {
    key: usize,
    titel: RwSignal<String>,
    beschreibung: RwSignal<String>,
    kosten: RwSignal<String>,
    einsparung: RwSignal<String>,
    prioritaet: RwSignal<String>,
}

impl MassnahmeRow {
    fn new(key: usize) -> Self {
        let defaults = EffizienzmassnahmeForm::default();
        Self {
            key,
            titel: RwSignal::new(defaults.titel),
            beschreibung: RwSignal::new(defaults.beschreibung),
            kosten: RwSignal::new(defaults.kosten),
            einsparung: RwSignal::new(defaults.einsparung),
            prioritaet: RwSignal::new(defaults.prioritaet),
        }
    }

    fn to_form(&self) -> EffizienzmassnahmeForm {
        EffizienzmassnahmeForm {
            titel: self.titel.get_untracked(),
            beschreibung: self.beschreibung.get_untracked(),
            kosten: self.kosten.get_untracked(),
            einsparung: self.einsparung.get_untracked(),
            prioritaet: self.prioritaet.get_untracked(),
        }
    }
}

/// Error key of a row field, as produced by `MassnahmenplanForm::validate`
fn row_key(index: usize, field: &str) -> String {
    format!("massnahmen[{}].{}", index, field)
}

#[component]
fn RowError(errors: RwSignal<FieldErrors>, key: Signal<String>) -> impl IntoView {
    move || {
        let key = key.get();
        errors
            .with(|e| e.get(&key).map(str::to_string))
            .map(|message| view! { <span class="form__error">{message}</span> })
    }
}

#[component]
pub fn MassnahmenFormView(anfrage_id: i64) -> impl IntoView {
    let next_key = StoredValue::new(1usize);
    let rows: RwSignal<Vec<MassnahmeRow>> = RwSignal::new(vec![MassnahmeRow::new(0)]);

    let handle = SubmitHandle::new();
    let errors = handle.errors();

    let add_row = move |_| {
        let key = next_key.get_value();
        next_key.set_value(key + 1);
        rows.update(|r| r.push(MassnahmeRow::new(key)));
    };

    let on_submit = move |_| {
        let form = MassnahmenplanForm {
            massnahmen: rows.with_untracked(|r| r.iter().map(MassnahmeRow::to_form).collect()),
        };
        handle.submit(
            &form,
            Some(AppRoute::EnergieberaterAnfragen),
            move |client, dtos| async move { api::create_massnahmen(&client, anfrage_id, &dtos).await },
        );
    };

    let busy = Signal::derive(move || handle.is_submitting() || handle.succeeded());

    view! {
        <section class="card workflow-form">
            <h3 class="card__title">"Sanierungsfahrplan: Effizienzmaßnahmen"</h3>
            <FieldError errors=errors field="massnahmen" />
            <For
                each=move || rows.get()
                key=|row| row.key
                children=move |row| {
                    let key = row.key;
                    let index = Signal::derive(move || {
                        rows.with(|r| r.iter().position(|x| x.key == key).unwrap_or(0))
                    });
                    let err = move |field: &'static str| Signal::derive(move || row_key(index.get(), field));
                    view! {
                        <div class="massnahme">
                            <div class="massnahme__header">
                                <strong>{move || format!("Maßnahme {}", index.get() + 1)}</strong>
                                <Button
                                    appearance=ButtonAppearance::Subtle
                                    on_click=move |_| rows.update(|r| r.retain(|x| x.key != key))
                                    disabled=Signal::derive(move || busy.get() || rows.with(|r| r.len() <= 1))
                                >
                                    {icon("x")}
                                </Button>
                            </div>
                            <div class="form form--grid">
                                <div class="form__group">
                                    <Label>"Titel *"</Label>
                                    <Input value=row.titel disabled=busy />
                                    <RowError errors=errors key=err("titel") />
                                </div>
                                <div class="form__group">
                                    <Label>"Kosten (€) *"</Label>
                                    <Input value=row.kosten disabled=busy />
                                    <RowError errors=errors key=err("kosten") />
                                </div>
                                <div class="form__group">
                                    <Label>"Einsparung (kWh/Jahr) *"</Label>
                                    <Input value=row.einsparung disabled=busy />
                                    <RowError errors=errors key=err("einsparung") />
                                </div>
                                <div class="form__group">
                                    <Label>"Priorität *"</Label>
                                    <CodeSelect value=row.prioritaet options=PRIORITAETEN.to_vec() />
                                    <RowError errors=errors key=err("prioritaet") />
                                </div>
                                <div class="form__group form__group--wide">
                                    <Label>"Beschreibung"</Label>
                                    <Textarea value=row.beschreibung disabled=busy />
                                </div>
                            </div>
                        </div>
                    }
                }
            />
            <Show when=move || handle.succeeded()>
                <div class="alert alert--success">"Maßnahmen wurden gespeichert."</div>
            </Show>
            <div class="form__actions">
                <Button appearance=ButtonAppearance::Secondary on_click=add_row disabled=busy>
                    {icon("plus")}
                    " Maßnahme hinzufügen"
                </Button>
                <Button appearance=ButtonAppearance::Primary on_click=on_submit disabled=busy>
                    {move || if handle.is_submitting() { "Wird gespeichert..." } else { "Maßnahmen speichern" }}
                </Button>
            </div>
            <FailureModal failure=handle.failure() />
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::validation::FormValidate;

    #[test]
    fn test_row_key_matches_validation_keys() {
        let form = MassnahmenplanForm {
            massnahmen: vec![EffizienzmassnahmeForm::default()],
        };
        let errors = form.validate().unwrap_err();
        assert!(errors.get(&row_key(0, "titel")).is_some());
        assert!(errors.get(&row_key(0, "kosten")).is_some());
    }

    #[test]
    fn test_priority_options_cover_validation_range() {
        let codes: Vec<&str> = PRIORITAETEN.iter().map(|(code, _)| *code).collect();
        assert_eq!(codes, vec!["1", "2", "3"]);
        assert_eq!(EffizienzmassnahmeForm::default().prioritaet, "2");
    }
}
