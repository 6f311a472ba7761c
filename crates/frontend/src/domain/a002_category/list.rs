use super::details::CategoryDetails;
use crate::shared::api_utils::{fetch_json, send_delete};
use crate::shared::date_utils::format_datetime;
use crate::shared::icons::icon;
use crate::shared::listing::{Column, DeleteAction, DeleteFuture, FilterConfig, ResourceTable};
use crate::shared::modal_stack::ModalStackService;
use contracts::domain::a002_category::Category;
use contracts::domain::common::AggregateId;
use leptos::prelude::*;
use std::sync::Arc;
use wasm_bindgen_futures::spawn_local;

#[derive(Clone, Debug)]
pub struct CategoryRow {
    pub id: String,
    pub code: String,
    pub description: String,
    pub sort_order: i32,
    pub is_active: bool,
    pub comment: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl From<Category> for CategoryRow {
    fn from(c: Category) -> Self {
        Self {
            id: c.base.id.as_string(),
            code: c.base.code,
            description: c.base.description,
            sort_order: c.sort_order,
            is_active: c.is_active,
            comment: c.base.comment,
            created_at: c.base.metadata.created_at,
        }
    }
}

fn columns() -> Vec<Column<CategoryRow>> {
    vec![
        Column::text("code", "Code", |r: &CategoryRow| r.code.clone()),
        Column::text("description", "Name", |r: &CategoryRow| {
            r.description.clone()
        }),
        Column::text("sort_order", "Sort order", |r: &CategoryRow| {
            r.sort_order.to_string()
        }),
        Column::text("is_active", "Active", |r: &CategoryRow| {
            if r.is_active { "Yes" } else { "No" }.to_string()
        })
        .with_cell(|r| {
            if r.is_active {
                view! { <span class="badge badge--success">"Active"</span> }.into_any()
            } else {
                view! { <span class="badge badge--muted">"Inactive"</span> }.into_any()
            }
        }),
        Column::text("created_at", "Created", |r: &CategoryRow| {
            format_datetime(&r.created_at.to_rfc3339())
        }),
    ]
}

#[component]
pub fn CategoryListPage() -> impl IntoView {
    let modal_stack =
        use_context::<ModalStackService>().expect("ModalStackService not found in context");
    let (items, set_items) = signal::<Vec<CategoryRow>>(Vec::new());
    let (is_loading, set_is_loading) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);

    let fetch = move || {
        set_is_loading.set(true);
        spawn_local(async move {
            match fetch_json::<Vec<Category>>("/api/category").await {
                Ok(v) => {
                    set_items.set(v.into_iter().map(Into::into).collect());
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(e)),
            }
            set_is_loading.set(false);
        });
    };

    let open_details = move |row: Option<CategoryRow>| {
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
                    <CategoryDetails row=row.clone() on_saved=on_saved on_cancel=on_cancel />
                }
                .into_any()
            },
        );
    };

    let delete = DeleteAction::new(
        |r: &CategoryRow| r.description.clone(),
        |r: CategoryRow| -> DeleteFuture {
            Box::pin(async move { send_delete(&format!("/api/category/{}", r.id)).await })
        },
    );

    let row_actions: Arc<dyn Fn(&CategoryRow) -> AnyView + Send + Sync> = Arc::new(move |row| {
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
            title="Categories"
            resource_label="Categories"
            rows=items
            columns=columns()
            key_of=Arc::new(|r: &CategoryRow| r.id.clone())
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
