use super::details::BrandDetails;
use crate::shared::api_utils::{fetch_json, send_delete};
use crate::shared::date_utils::format_datetime;
use crate::shared::icons::icon;
use crate::shared::listing::{Column, DeleteAction, DeleteFuture, FilterConfig, ResourceTable};
use crate::shared::modal_stack::ModalStackService;
use contracts::domain::a003_brand::Brand;
use contracts::domain::common::AggregateId;
use leptos::prelude::*;
use std::sync::Arc;
use wasm_bindgen_futures::spawn_local;

#[derive(Clone, Debug)]
pub struct BrandRow {
    pub id: String,
    pub code: String,
    pub description: String,
    pub website_url: Option<String>,
    pub is_active: bool,
    pub comment: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl From<Brand> for BrandRow {
    fn from(b: Brand) -> Self {
        Self {
            id: b.base.id.as_string(),
            code: b.base.code,
            description: b.base.description,
            website_url: b.website_url,
            is_active: b.is_active,
            comment: b.base.comment,
            created_at: b.base.metadata.created_at,
        }
    }
}

fn columns() -> Vec<Column<BrandRow>> {
    vec![
        Column::text("code", "Code", |r: &BrandRow| r.code.clone()),
        Column::text("description", "Name", |r: &BrandRow| r.description.clone()),
        Column::new("website", "Website", |r: &BrandRow| r.website_url.clone())
            .with_empty_label("No website")
            .with_cell(|r| match &r.website_url {
                Some(url) => {
                    let url = url.clone();
                    view! {
                        <a href=url.clone() target="_blank" rel="noopener">{url.clone()}</a>
                    }
                    .into_any()
                }
                None => view! { <span class="muted">"No website"</span> }.into_any(),
            }),
        Column::text("is_active", "Active", |r: &BrandRow| {
            if r.is_active { "Yes" } else { "No" }.to_string()
        })
        .with_cell(|r| {
            if r.is_active {
                view! { <span class="badge badge--success">"Active"</span> }.into_any()
            } else {
                view! { <span class="badge badge--muted">"Inactive"</span> }.into_any()
            }
        }),
        Column::text("created_at", "Created", |r: &BrandRow| {
            format_datetime(&r.created_at.to_rfc3339())
        }),
    ]
}

#[component]
pub fn BrandListPage() -> impl IntoView {
    let modal_stack =
        use_context::<ModalStackService>().expect("ModalStackService not found in context");
    let (items, set_items) = signal::<Vec<BrandRow>>(Vec::new());
    let (is_loading, set_is_loading) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);

    let fetch = move || {
        set_is_loading.set(true);
        spawn_local(async move {
            match fetch_json::<Vec<Brand>>("/api/brand").await {
                Ok(v) => {
                    set_items.set(v.into_iter().map(Into::into).collect());
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(e)),
            }
            set_is_loading.set(false);
        });
    };

    let open_details = move |row: Option<BrandRow>| {
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
                    <BrandDetails row=row.clone() on_saved=on_saved on_cancel=on_cancel />
                }
                .into_any()
            },
        );
    };

    let delete = DeleteAction::new(
        |r: &BrandRow| r.description.clone(),
        |r: BrandRow| -> DeleteFuture {
            Box::pin(async move { send_delete(&format!("/api/brand/{}", r.id)).await })
        },
    );

    let row_actions: Arc<dyn Fn(&BrandRow) -> AnyView + Send + Sync> = Arc::new(move |row| {
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
            title="Brands"
            resource_label="Brands"
            rows=items
            columns=columns()
            key_of=Arc::new(|r: &BrandRow| r.id.clone())
            is_loading=is_loading
            error=error
            on_retry=Callback::new(move |_| fetch())
            filter=FilterConfig::search(vec!["code", "description", "website"])
            on_add=Callback::new(move |_| open_details(None))
            on_refresh=Callback::new(move |_| fetch())
            render_row_actions=row_actions
            delete=delete
        />
    }
}
