use contracts::domain::a004_energieausweis::EnergieausweisForm;
use contracts::enums::Effizienzklasse;
use contracts::shared::validation::parse_decimal;
use leptos::prelude::*;
use thaw::*;

use crate::domain::a004_energieausweis::api;
use crate::routes::AppRoute;
use crate::shared::components::field_error::{CodeSelect, DateInput, FormField};
use crate::shared::modal::FailureModal;
use crate::shared::submit::SubmitHandle;

fn klasse_options() -> Vec<(&'static str, &'static str)> {
    let mut options = vec![("", "Automatisch aus Endenergiebedarf")];
    options.extend(Effizienzklasse::all().into_iter().map(|k| (k.code(), k.code())));
    options
}

/// Class shown next to the demand input while no class is chosen
fn derived_klasse(endenergiebedarf: &str) -> Option<Effizienzklasse> {
    parse_decimal(endenergiebedarf)
        .filter(|v| *v >= 0.0)
        .map(Effizienzklasse::from_endenergie)
}

#[component]
pub fn EnergieausweisFormView(anfrage_id: i64) -> impl IntoView {
    let endenergiebedarf = RwSignal::new(String::new());
    let primaerenergiebedarf = RwSignal::new(String::new());
    let co2_emissionen = RwSignal::new(String::new());
    let effizienzklasse = RwSignal::new(String::new());
    let gueltig_bis = RwSignal::new(String::new());
    let bemerkung = RwSignal::new(String::new());

    let handle = SubmitHandle::new();
    let errors = handle.errors();

    let on_submit = move |_| {
        let form = EnergieausweisForm {
            endenergiebedarf: endenergiebedarf.get_untracked(),
            primaerenergiebedarf: primaerenergiebedarf.get_untracked(),
            co2_emissionen: co2_emissionen.get_untracked(),
            effizienzklasse: effizienzklasse.get_untracked(),
            gueltig_bis: gueltig_bis.get_untracked(),
            bemerkung: bemerkung.get_untracked(),
        };
        handle.submit(
            &form,
            Some(AppRoute::EnergieberaterAnfragen),
            move |client, dto| async move {
                api::create_energieausweis(&client, anfrage_id, &dto).await
            },
        );
    };

    let busy = Signal::derive(move || handle.is_submitting() || handle.succeeded());
    let hint = move || {
        if !effizienzklasse.get().is_empty() {
            return None;
        }
        derived_klasse(&endenergiebedarf.get())
            .map(|k| view! { <span class="form__hint">{format!("Ergibt Klasse {}", k.code())}</span> })
    };

    view! {
        <section class="card workflow-form">
            <h3 class="card__title">"Energieausweis erstellen"</h3>
            <div class="form form--grid">
                <FormField label="Endenergiebedarf (kWh/m²a) *" field="endenergiebedarf" errors=errors>
                    <Input value=endenergiebedarf disabled=busy />
                    {hint}
                </FormField>
                <FormField label="Primärenergiebedarf (kWh/m²a) *" field="primaerenergiebedarf" errors=errors>
                    <Input value=primaerenergiebedarf disabled=busy />
                </FormField>
                <FormField label="CO₂-Emissionen (kg/m²a) *" field="co2_emissionen" errors=errors>
                    <Input value=co2_emissionen disabled=busy />
                </FormField>
                <FormField label="Effizienzklasse" field="effizienzklasse" errors=errors>
                    <CodeSelect value=effizienzklasse options=klasse_options() />
                </FormField>
                <FormField label="Gültig bis *" field="gueltig_bis" errors=errors>
                    <DateInput value=gueltig_bis disabled=busy />
                </FormField>
                <FormField label="Bemerkung" field="bemerkung" errors=errors>
                    <Textarea value=bemerkung disabled=busy />
                </FormField>
            </div>
            <Show when=move || handle.succeeded()>
                <div class="alert alert--success">"Energieausweis wurde erstellt."</div>
            </Show>
            <div class="form__actions">
                <Button appearance=ButtonAppearance::Primary on_click=on_submit disabled=busy>
                    {move || if handle.is_submitting() { "Wird gesendet..." } else { "Energieausweis erstellen" }}
                </Button>
            </div>
            <FailureModal failure=handle.failure() />
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derived_klasse() {
        assert_eq!(derived_klasse("112,4"), Some(Effizienzklasse::D));
        assert_eq!(derived_klasse("25"), Some(Effizienzklasse::APlus));
        assert_eq!(derived_klasse(""), None);
        assert_eq!(derived_klasse("-5"), None);
    }

    #[test]
    fn test_klasse_options_start_with_automatic() {
        let options = klasse_options();
        assert_eq!(options[0].0, "");
        assert!(options.contains(&("H", "H")));
    }
}
