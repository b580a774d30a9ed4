use contracts::system::users::User;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::cmp::Ordering;
use thaw::*;

use super::details::CreateUserDialog;
use crate::shared::components::loading::{ErrorBanner, Loading};
use crate::shared::components::page_header::PageHeader;
use crate::shared::format::format_iso_date;
use crate::shared::icons::icon;
use crate::shared::list_utils::{contains_ci, filter_list, Searchable, SortHeader, SortState, Sortable};
use crate::shared::submit::handle_auth_error;
use crate::system::auth::context::use_auth;
use crate::system::users::api;

impl Sortable for User {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "full_name" => self
                .full_name
                .as_deref()
                .unwrap_or("")
                .to_lowercase()
                .cmp(&other.full_name.as_deref().unwrap_or("").to_lowercase()),
            "role" => self.role.display_name().cmp(other.role.display_name()),
            "is_active" => self.is_active.cmp(&other.is_active),
            "created_at" => self.created_at.cmp(&other.created_at),
            _ => self
                .username
                .to_lowercase()
                .cmp(&other.username.to_lowercase()),
        }
    }
}

impl Searchable for User {
    fn matches_filter(&self, filter: &str) -> bool {
        contains_ci(&self.username, filter)
            || contains_ci(self.full_name.as_deref().unwrap_or(""), filter)
            || contains_ci(self.email.as_deref().unwrap_or(""), filter)
    }
}

#[component]
pub fn UsersListPage() -> impl IntoView {
    let auth = use_auth();
    let all_users: RwSignal<Vec<User>> = RwSignal::new(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (loading, set_loading) = signal(false);
    let show_create = RwSignal::new(false);
    let search = RwSignal::new(String::new());
    let sort = SortState::new("username");

    let load_data = move || {
        set_loading.set(true);
        set_error.set(None);
        let client = auth.client();
        spawn_local(async move {
            match api::fetch_users(&client).await {
                Ok(data) => all_users.set(data),
                Err(e) => {
                    if let Some(e) = handle_auth_error(auth, e) {
                        set_error.set(Some(format!("Benutzer konnten nicht geladen werden: {}", e)));
                    }
                }
            }
            set_loading.set(false);
        });
    };

    load_data();

    let visible = Memo::new(move |_| {
        let mut data = all_users.with(|users| filter_list(users, &search.get()));
        sort.apply(&mut data);
        data
    });

    view! {
        <div class="page">
            <PageHeader title="Benutzer">
                <Badge>{move || visible.with(|v| v.len()).to_string()}</Badge>
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| show_create.set(true)
                >
                    {icon("plus")}
                    " Neu"
                </Button>
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| load_data()
                    disabled=Signal::derive(move || loading.get())
                >
                    {icon("refresh")}
                    {move || if loading.get() { " Lädt..." } else { " Aktualisieren" }}
                </Button>
            </PageHeader>

            <div class="page__content">
                <ErrorBanner message=error />

                <div class="filter-panel">
                    <Input value=search placeholder="Benutzername, Name oder E-Mail..." />
                </div>

                <Show when=move || !loading.get() fallback=|| view! { <Loading /> }>
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell>
                                    <SortHeader sort=sort field="username" label="Benutzername" />
                                </TableHeaderCell>
                                <TableHeaderCell>
                                    <SortHeader sort=sort field="full_name" label="Name" />
                                </TableHeaderCell>
                                <TableHeaderCell>"E-Mail"</TableHeaderCell>
                                <TableHeaderCell>
                                    <SortHeader sort=sort field="role" label="Rolle" />
                                </TableHeaderCell>
                                <TableHeaderCell>
                                    <SortHeader sort=sort field="is_active" label="Status" />
                                </TableHeaderCell>
                                <TableHeaderCell>
                                    <SortHeader sort=sort field="created_at" label="Angelegt" />
                                </TableHeaderCell>
                                <TableHeaderCell>"Letzte Anmeldung"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || visible.get()
                                key=|u| u.id.clone()
                                children=move |user| {
                                    let last_login = user
                                        .last_login_at
                                        .as_deref()
                                        .map(format_iso_date)
                                        .unwrap_or_else(|| "-".to_string());
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    <span style="font-weight: 500;">{user.username.clone()}</span>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {user.full_name.clone().unwrap_or_default()}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {user.email.clone().unwrap_or_default()}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <span class="badge badge--neutral">{user.role.display_name()}</span>
                                            </TableCell>
                                            <TableCell>
                                                {if user.is_active {
                                                    view! { <span class="badge badge--success">"Aktiv"</span> }.into_any()
                                                } else {
                                                    view! { <span class="badge badge--error">"Gesperrt"</span> }.into_any()
                                                }}
                                            </TableCell>
                                            <TableCell>{format_iso_date(&user.created_at)}</TableCell>
                                            <TableCell>{last_login}</TableCell>
                                        </TableRow>
                                    }
                                }
                            />
                        </TableBody>
                    </Table>
                </Show>
            </div>

            <CreateUserDialog
                open=show_create
                on_created=Callback::new(move |_| {
                    show_create.set(false);
                    load_data();
                })
            />
        </div>
    }
}
