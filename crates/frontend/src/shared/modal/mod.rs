use contracts::enums::UserRole;
use leptos::prelude::*;
use thaw::*;

use crate::system::auth::context::use_auth;

/// Generic failure dialog with the static text of the signed in role.
/// Opens whenever `failure` holds a message; closing clears it.
#[component]
pub fn FailureModal(failure: RwSignal<Option<String>>) -> impl IntoView {
    let auth = use_auth();
    let open = RwSignal::new(false);

    Effect::new(move |_| {
        open.set(failure.with(|f| f.is_some()));
    });
    Effect::new(move |_| {
        if !open.get() {
            failure.set(None);
        }
    });

    let text = move || {
        auth.role()
            .unwrap_or(UserRole::Haushalt)
            .failure_text()
    };

    view! {
        <Dialog open=open>
            <DialogSurface>
                <DialogBody>
                    <DialogTitle>"Vorgang fehlgeschlagen"</DialogTitle>
                    <DialogContent>
                        <p>{text}</p>
                        {move || failure.get().map(|detail| view! {
                            <p class="modal__detail">{detail}</p>
                        })}
                    </DialogContent>
                    <DialogActions>
                        <Button
                            appearance=ButtonAppearance::Primary
                            on_click=move |_| open.set(false)
                        >
                            "Schließen"
                        </Button>
                    </DialogActions>
                </DialogBody>
            </DialogSurface>
        </Dialog>
    }
}
