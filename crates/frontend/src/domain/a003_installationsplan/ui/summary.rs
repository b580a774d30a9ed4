use contracts::domain::a003_installationsplan::InstallationsPlan;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::a003_installationsplan::api;
use crate::shared::format::format_date;
use crate::shared::submit::handle_auth_error;
use crate::system::auth::context::use_auth;

/// Read-only plan block; shows nothing until the plan exists
#[component]
pub fn InstallationsPlanSummary(anlage_id: i64) -> impl IntoView {
    let auth = use_auth();
    let plan: RwSignal<Option<InstallationsPlan>> = RwSignal::new(None);

    let client = auth.client();
    spawn_local(async move {
        match api::fetch_plan(&client, anlage_id).await {
            Ok(p) => plan.set(Some(p)),
            Err(e) if e.precondition().is_some() => {}
            Err(e) => {
                if let Some(e) = handle_auth_error(auth, e) {
                    log::warn!("installation plan of {} not loaded: {}", anlage_id, e);
                }
            }
        }
    });

    move || {
        plan.get().map(|p| {
            view! {
                <div class="summary">
                    <h3 class="summary__title">"Installationsplan"</h3>
                    <dl class="summary__grid">
                        <dt>"Installationsdatum"</dt>
                        <dd>{format_date(&p.installationsdatum)}</dd>
                        <dt>"Montagesystem"</dt>
                        <dd>{p.montagesystem.label()}</dd>
                        <dt>"Verschattung"</dt>
                        <dd>{p.verschattung.label()}</dd>
                        <dt>"Wechselrichter"</dt>
                        <dd>{p.wechselrichter_position.clone()}</dd>
                        <dt>"Kabelführung"</dt>
                        <dd>{p.kabelfuehrung.clone()}</dd>
                    </dl>
                </div>
            }
        })
    }
}
