//! Household data form. The same page creates the record (GET answers 404)
//! and edits it afterwards.

use contracts::domain::a006_haushaltsdaten::HaushaltsdatenForm;
use contracts::enums::{Ausrichtung, Daemmqualitaet, Effizienzklasse, Heizungsart};
use contracts::shared::api_error::Precondition;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use super::freigaben::FreigabenPanel;
use crate::domain::a006_haushaltsdaten::api;
use crate::shared::components::field_error::{CodeSelect, FormField};
use crate::shared::components::loading::{ErrorBanner, Loading};
use crate::shared::components::page_header::PageHeader;
use crate::shared::modal::FailureModal;
use crate::shared::submit::{handle_auth_error, SubmitHandle, SUCCESS_NAVIGATION_DELAY_MS};
use crate::system::auth::context::use_auth;

/// One signal per input of [`HaushaltsdatenForm`]
#[derive(Clone, Copy)]
struct Fields {
    bewohner: RwSignal<String>,
    heizungsart: RwSignal<String>,
    baujahr: RwSignal<String>,
    wohnflaeche: RwSignal<String>,
    daemmqualitaet: RwSignal<String>,
    dachausrichtung: RwSignal<String>,
    dachflaeche: RwSignal<String>,
    effizienzklasse: RwSignal<String>,
}

impl Fields {
    fn new(form: HaushaltsdatenForm) -> Self {
        Self {
            bewohner: RwSignal::new(form.bewohner),
            heizungsart: RwSignal::new(form.heizungsart),
            baujahr: RwSignal::new(form.baujahr),
            wohnflaeche: RwSignal::new(form.wohnflaeche),
            daemmqualitaet: RwSignal::new(form.daemmqualitaet),
            dachausrichtung: RwSignal::new(form.dachausrichtung),
            dachflaeche: RwSignal::new(form.dachflaeche),
            effizienzklasse: RwSignal::new(form.effizienzklasse),
        }
    }

    fn fill(&self, form: HaushaltsdatenForm) {
        self.bewohner.set(form.bewohner);
        self.heizungsart.set(form.heizungsart);
        self.baujahr.set(form.baujahr);
        self.wohnflaeche.set(form.wohnflaeche);
        self.daemmqualitaet.set(form.daemmqualitaet);
        self.dachausrichtung.set(form.dachausrichtung);
        self.dachflaeche.set(form.dachflaeche);
        self.effizienzklasse.set(form.effizienzklasse);
    }

    fn to_form(&self) -> HaushaltsdatenForm {
        HaushaltsdatenForm {
            bewohner: self.bewohner.get_untracked(),
            heizungsart: self.heizungsart.get_untracked(),
            baujahr: self.baujahr.get_untracked(),
            wohnflaeche: self.wohnflaeche.get_untracked(),
            daemmqualitaet: self.daemmqualitaet.get_untracked(),
            dachausrichtung: self.dachausrichtung.get_untracked(),
            dachflaeche: self.dachflaeche.get_untracked(),
            effizienzklasse: self.effizienzklasse.get_untracked(),
        }
    }
}

fn effizienzklasse_options() -> Vec<(&'static str, &'static str)> {
    let mut options = vec![("", "Unbekannt")];
    options.extend(Effizienzklasse::all().into_iter().map(|k| (k.code(), k.code())));
    options
}

#[component]
pub fn HaushaltsdatenPage() -> impl IntoView {
    let auth = use_auth();
    let Some(haushalt_id) = auth.user().and_then(|u| u.haushalt_id) else {
        return view! {
            <div class="page">
                <PageHeader title="Haushaltsdaten">{()}</PageHeader>
                <div class="alert alert--error">"Ihrem Konto ist kein Haushalt zugeordnet."</div>
            </div>
        }
        .into_any();
    };

    let fields = Fields::new(HaushaltsdatenForm::default());
    let (loading, set_loading) = signal(true);
    let is_new = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);
    let saved = RwSignal::new(false);

    let handle = SubmitHandle::new();
    let errors = handle.errors();

    let client = auth.client();
    spawn_local(async move {
        match api::fetch_haushaltsdaten(&client, haushalt_id).await {
            Ok(daten) => fields.fill(HaushaltsdatenForm::from(&daten)),
            Err(e) if e.precondition() == Some(Precondition::MissingData) => is_new.set(true),
            Err(e) => {
                if let Some(e) = handle_auth_error(auth, e) {
                    error.set(Some(format!("Haushaltsdaten konnten nicht geladen werden: {}", e)));
                }
            }
        }
        set_loading.set(false);
    });

    // The page stays open after saving; re-arm the handle for the next edit
    Effect::new(move |_| {
        if handle.succeeded() {
            saved.set(true);
            is_new.set(false);
            spawn_local(async move {
                TimeoutFuture::new(SUCCESS_NAVIGATION_DELAY_MS * 3).await;
                saved.set(false);
                handle.reset();
            });
        }
    });

    let on_save = move |_| {
        handle.submit(&fields.to_form(), None, move |client, dto| async move {
            api::save_haushaltsdaten(&client, haushalt_id, &dto).await
        });
    };

    let busy = Signal::derive(move || handle.is_submitting());

    view! {
        <div class="page">
            <PageHeader title="Haushaltsdaten" subtitle="Grundlage für Angebote und Energieausweise">
                <Button appearance=ButtonAppearance::Primary on_click=on_save disabled=busy>
                    {move || if busy.get() { "Speichern..." } else { "Speichern" }}
                </Button>
            </PageHeader>

            <div class="page__content">
                <ErrorBanner message=error />
                <Show when=move || is_new.get()>
                    <div class="alert alert--info">
                        "Sie haben noch keine Haushaltsdaten hinterlegt."
                    </div>
                </Show>
                <Show when=move || saved.get()>
                    <div class="alert alert--success">"Haushaltsdaten gespeichert."</div>
                </Show>

                <Show when=move || !loading.get() fallback=|| view! { <Loading /> }>
                    <div class="form form--grid">
                        <FormField label="Anzahl Bewohner *" field="bewohner" errors=errors>
                            <Input value=fields.bewohner disabled=busy />
                        </FormField>
                        <FormField label="Heizungsart *" field="heizungsart" errors=errors>
                            <CodeSelect
                                value=fields.heizungsart
                                options=Heizungsart::all().into_iter().map(|h| (h.code(), h.label())).collect()
                            />
                        </FormField>
                        <FormField label="Baujahr *" field="baujahr" errors=errors>
                            <Input value=fields.baujahr disabled=busy />
                        </FormField>
                        <FormField label="Wohnfläche (m²) *" field="wohnflaeche" errors=errors>
                            <Input value=fields.wohnflaeche disabled=busy />
                        </FormField>
                        <FormField label="Dämmqualität *" field="daemmqualitaet" errors=errors>
                            <CodeSelect
                                value=fields.daemmqualitaet
                                options=Daemmqualitaet::all().into_iter().map(|d| (d.code(), d.label())).collect()
                            />
                        </FormField>
                        <FormField label="Dachausrichtung *" field="dachausrichtung" errors=errors>
                            <CodeSelect
                                value=fields.dachausrichtung
                                options=Ausrichtung::all().into_iter().map(|a| (a.code(), a.label())).collect()
                            />
                        </FormField>
                        <FormField label="Dachfläche (m²) *" field="dachflaeche" errors=errors>
                            <Input value=fields.dachflaeche disabled=busy />
                        </FormField>
                        <FormField label="Effizienzklasse" field="effizienzklasse" errors=errors>
                            <CodeSelect value=fields.effizienzklasse options=effizienzklasse_options() />
                        </FormField>
                    </div>
                </Show>

                <FreigabenPanel haushalt_id=haushalt_id />
            </div>
            <FailureModal failure=handle.failure() />
        </div>
    }
    .into_any()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_effizienzklasse_options_start_with_unknown() {
        let options = effizienzklasse_options();
        assert_eq!(options[0], ("", "Unbekannt"));
        assert_eq!(options.len(), Effizienzklasse::all().len() + 1);
        assert_eq!(options[1], ("A+", "A+"));
    }
}
