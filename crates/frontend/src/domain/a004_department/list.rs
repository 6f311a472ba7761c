use super::details::DepartmentDetails;
use crate::shared::api_utils::{fetch_json, send_delete};
use crate::shared::date_utils::format_datetime;
use crate::shared::icons::icon;
use crate::shared::listing::{Column, DeleteAction, DeleteFuture, FilterConfig, ResourceTable};
use crate::shared::modal_stack::ModalStackService;
use contracts::domain::a004_department::Department;
use contracts::domain::common::AggregateId;
use leptos::prelude::*;
use std::sync::Arc;
use wasm_bindgen_futures::spawn_local;

#[derive(Clone, Debug)]
pub struct DepartmentRow {
    pub id: String,
    pub code: String,
    pub description: String,
    pub sort_order: i32,
    pub is_active: bool,
    pub comment: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl From<Department> for DepartmentRow {
    fn from(d: Department) -> Self {
        Self {
            id: d.base.id.as_string(),
            code: d.base.code,
            description: d.base.description,
            sort_order: d.sort_order,
            is_active: d.is_active,
            comment: d.base.comment,
            created_at: d.base.metadata.created_at,
        }
    }
}

fn columns() -> Vec<Column<DepartmentRow>> {
    vec![
        Column::text("code", "Code", |r: &DepartmentRow| r.code.clone()),
        Column::text("description", "Name", |r: &DepartmentRow| {
            r.description.clone()
        }),
        Column::text("sort_order", "Sort order", |r: &DepartmentRow| {
            r.sort_order.to_string()
        }),
        Column::text("is_active", "Active", |r: &DepartmentRow| {
            if r.is_active { "Yes" } else { "No" }.to_string()
        })
        .with_cell(|r| {
            if r.is_active {
                view! { <span class="badge badge--success">"Active"</span> }.into_any()
            } else {
                view! { <span class="badge badge--muted">"Inactive"</span> }.into_any()
            }
        }),
        Column::text("created_at", "Created", |r: &DepartmentRow| {
            format_datetime(&r.created_at.to_rfc3339())
        }),
    ]
}

#[component]
pub fn DepartmentListPage() -> impl IntoView {
    let modal_stack =
        use_context::<ModalStackService>().expect("ModalStackService not found in context");
    let (items, set_items) = signal::<Vec<DepartmentRow>>(Vec::new());
    let (is_loading, set_is_loading) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);

    let fetch = move || {
        set_is_loading.set(true);
        spawn_local(async move {
            match fetch_json::<Vec<Department>>("/api/department").await {
                Ok(v) => {
                    set_items.set(v.into_iter().map(Into::into).collect());
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(e)),
            }
            set_is_loading.set(false);
        });
    };

    let open_details = move |row: Option<DepartmentRow>| {
        modal_stack.push_with_frame(
            Some("max-width: min(640px, 95vw); width: min(640px, 95vw);".to_string()),
            None,
            move |handle| {
                let on_saved = Callback::new({
                    let handle = handle.clone();
                    move |_| {
                        handle.close();
                        fetch();
                    }
                });
                let on_cancel = Callback::new({
                    let handle = handle.clone();
                    move |_| handle.close()
                });
                view! {
                    <DepartmentDetails row=row.clone() on_saved=on_saved on_cancel=on_cancel />
                }
                .into_any()
            },
        );
    };

    // The backend refuses to delete a department that is still active; the
    // warning tells the operator up front instead of letting the request fail.
    let delete = DeleteAction::new(
        |r: &DepartmentRow| r.description.clone(),
        |r: DepartmentRow| -> DeleteFuture {
            Box::pin(async move { send_delete(&format!("/api/department/{}", r.id)).await })
        },
    )
    .with_warning(|r: &DepartmentRow| {
        r.is_active.then(|| {
            "This department is still active. Deactivate it first, otherwise the backend will \
             reject the deletion."
                .to_string()
        })
    });

    let row_actions: Arc<dyn Fn(&DepartmentRow) -> AnyView + Send + Sync> = Arc::new(move |row| {
        let row = row.clone();
        view! {
            <button
                class="button button--icon"
                title="View"
                on:click=move |_| open_details(Some(row.clone()))
            >
                {icon("eye")}
            </button>
        }
        .into_any()
    });

    fetch();

    view! {
        <ResourceTable
            title="Departments"
            resource_label="Departments"
            rows=items
            columns=columns()
            key_of=Arc::new(|r: &DepartmentRow| r.id.clone())
            is_loading=is_loading
            error=error
            on_retry=Callback::new(move |_| fetch())
            filter=FilterConfig::search(vec!["code", "description"])
            on_add=Callback::new(move |_| open_details(None))
            on_refresh=Callback::new(move |_| fetch())
            render_row_actions=row_actions
            delete=delete
        />
    }
}
