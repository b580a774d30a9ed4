use contracts::enums::UserRole;
use contracts::shared::api_error::ApiError;
use contracts::system::users::{CreateUserForm, User};
use leptos::prelude::*;
use thaw::*;

use crate::shared::components::field_error::{CodeSelect, FormField};
use crate::shared::modal::FailureModal;
use crate::shared::submit::SubmitHandle;
use crate::system::users::api;

fn role_options() -> Vec<(&'static str, &'static str)> {
    UserRole::all()
        .into_iter()
        .map(|r| (r.code(), r.display_name()))
        .collect()
}

/// "Benutzer anlegen" dialog of the admin user list
#[component]
pub fn CreateUserDialog(open: RwSignal<bool>, on_created: Callback<User>) -> impl IntoView {
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let full_name = RwSignal::new(String::new());
    let role = RwSignal::new(UserRole::Haushalt.code().to_string());
    let created: RwSignal<Option<User>> = RwSignal::new(None);

    let handle = SubmitHandle::new();
    let errors = handle.errors();

    // Fresh form every time the dialog opens
    Effect::new(move |_| {
        if open.get() {
            handle.reset();
            created.set(None);
            for field in [username, password, email, full_name] {
                field.set(String::new());
            }
        }
    });

    Effect::new(move |_| {
        if let Some(user) = created.get() {
            on_created.run(user);
        }
    });

    let on_save = move |_| {
        let form = CreateUserForm {
            username: username.get_untracked(),
            password: password.get_untracked(),
            email: email.get_untracked(),
            full_name: full_name.get_untracked(),
            role: role.get_untracked(),
        };
        handle.submit(&form, None, move |client, dto| async move {
            let user = api::create_user(&client, &dto).await?;
            created.set(Some(user.clone()));
            Ok::<_, ApiError>(user)
        });
    };

    let busy = Signal::derive(move || handle.is_submitting());

    view! {
        <Dialog open=open>
            <DialogSurface>
                <DialogBody>
                    <DialogTitle>"Benutzer anlegen"</DialogTitle>
                    <DialogContent>
                        <FormField label="Benutzername *" field="username" errors=errors>
                            <Input value=username disabled=busy />
                        </FormField>
                        <FormField label="Passwort *" field="password" errors=errors>
                            <Input value=password input_type=InputType::Password disabled=busy />
                        </FormField>
                        <FormField label="E-Mail" field="email" errors=errors>
                            <Input value=email input_type=InputType::Email disabled=busy />
                        </FormField>
                        <FormField label="Name" field="full_name" errors=errors>
                            <Input value=full_name disabled=busy />
                        </FormField>
                        <FormField label="Rolle *" field="role" errors=errors>
                            <CodeSelect value=role options=role_options() />
                        </FormField>
                    </DialogContent>
                    <DialogActions>
                        <Button
                            appearance=ButtonAppearance::Secondary
                            on_click=move |_| open.set(false)
                            disabled=busy
                        >
                            "Abbrechen"
                        </Button>
                        <Button appearance=ButtonAppearance::Primary on_click=on_save disabled=busy>
                            {move || if busy.get() { "Speichern..." } else { "Anlegen" }}
                        </Button>
                    </DialogActions>
                </DialogBody>
            </DialogSurface>
        </Dialog>
        <FailureModal failure=handle.failure() />
    }
}
