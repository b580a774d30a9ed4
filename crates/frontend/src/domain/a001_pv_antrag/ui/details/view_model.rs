use contracts::domain::a001_pv_antrag::PvAntrag;
use contracts::domain::a006_haushaltsdaten::Haushaltsdaten;
use contracts::shared::workflow::HouseholdDataState;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::a001_pv_antrag::api;
use crate::domain::a006_haushaltsdaten::api as haushalt_api;
use crate::shared::submit::handle_auth_error;
use crate::system::auth::context::{use_auth, AuthContext};

/// Everything the detail pages need, fetched before the gate renders
#[derive(Clone, Copy)]
pub struct AntragDetailsViewModel {
    pub antrag: RwSignal<Option<PvAntrag>>,
    pub household: RwSignal<Option<HouseholdDataState>>,
    pub haushaltsdaten: RwSignal<Option<Haushaltsdaten>>,
    pub error: RwSignal<Option<String>>,
    /// Household data request failed for a reason outside the workflow
    pub failure: RwSignal<Option<String>>,
    pub loading: RwSignal<bool>,
    anlage_id: RwSignal<Option<i64>>,
    auth: AuthContext,
}

impl AntragDetailsViewModel {
    pub fn new() -> Self {
        Self {
            antrag: RwSignal::new(None),
            household: RwSignal::new(None),
            haushaltsdaten: RwSignal::new(None),
            error: RwSignal::new(None),
            failure: RwSignal::new(None),
            loading: RwSignal::new(false),
            anlage_id: RwSignal::new(None),
            auth: use_auth(),
        }
    }

    pub fn load(&self, anlage_id: i64) {
        self.anlage_id.set(Some(anlage_id));
        self.loading.set(true);
        self.error.set(None);

        let vm = *self;
        let client = self.auth.client();
        spawn_local(async move {
            let antrag = match api::fetch_antrag(&client, anlage_id).await {
                Ok(a) => a,
                Err(e) => {
                    if let Some(e) = handle_auth_error(vm.auth, e) {
                        vm.error.set(Some(format!("Antrag konnte nicht geladen werden: {}", e)));
                    }
                    vm.loading.set(false);
                    return;
                }
            };

            let result = match haushalt_api::fetch_haushaltsdaten(&client, antrag.haushalt_id).await {
                Err(e) if e.is_authentication() => {
                    handle_auth_error(vm.auth, e);
                    vm.loading.set(false);
                    return;
                }
                other => other,
            };

            let state = HouseholdDataState::from_result(&result);
            match result {
                Ok(daten) => vm.haushaltsdaten.set(Some(daten)),
                Err(e) => {
                    vm.haushaltsdaten.set(None);
                    if state == HouseholdDataState::Failed {
                        log::warn!("household data of {} failed: {}", antrag.haushalt_id, e);
                        vm.failure.set(Some(e.to_string()));
                    }
                }
            }

            vm.antrag.set(Some(antrag));
            vm.household.set(Some(state));
            vm.loading.set(false);
        });
    }

    /// Refetch after an in-place action changed the record
    pub fn reload(&self) {
        if let Some(id) = self.anlage_id.get_untracked() {
            self.load(id);
        }
    }
}
