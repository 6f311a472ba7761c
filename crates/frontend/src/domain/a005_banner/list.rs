use super::details::BannerDetails;
use crate::shared::api_utils::{fetch_json, send_delete};
use crate::shared::date_utils::{format_date, format_datetime};
use crate::shared::icons::icon;
use crate::shared::listing::{Column, DeleteAction, DeleteFuture, FilterConfig, ResourceTable};
use crate::shared::modal_stack::ModalStackService;
use contracts::domain::a005_banner::Banner;
use contracts::domain::common::AggregateId;
use leptos::prelude::*;
use std::sync::Arc;
use wasm_bindgen_futures::spawn_local;

#[derive(Clone, Debug)]
pub struct BannerRow {
    pub id: String,
    pub code: String,
    pub description: String,
    pub image_url: String,
    pub target_url: Option<String>,
    pub starts_at: Option<chrono::DateTime<chrono::Utc>>,
    pub ends_at: Option<chrono::DateTime<chrono::Utc>>,
    pub is_active: bool,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl From<Banner> for BannerRow {
    fn from(b: Banner) -> Self {
        Self {
            id: b.base.id.as_string(),
            code: b.base.code,
            description: b.base.description,
            image_url: b.image_url,
            target_url: b.target_url,
            starts_at: b.starts_at,
            ends_at: b.ends_at,
            is_active: b.is_active,
            created_at: b.base.metadata.created_at,
        }
    }
}

fn schedule_text(row: &BannerRow) -> Option<String> {
    match (row.starts_at, row.ends_at) {
        (None, None) => None,
        (starts, ends) => {
            let from = starts
                .map(|d| format_date(&d.to_rfc3339()))
                .unwrap_or_else(|| "...".to_string());
            let to = ends
                .map(|d| format_date(&d.to_rfc3339()))
                .unwrap_or_else(|| "...".to_string());
            Some(format!("{} - {}", from, to))
        }
    }
}

fn columns() -> Vec<Column<BannerRow>> {
    vec![
        Column::text("code", "Code", |r: &BannerRow| r.code.clone()),
        Column::text("description", "Name", |r: &BannerRow| {
            r.description.clone()
        }),
        Column::text("image", "Image", |r: &BannerRow| r.image_url.clone()).with_cell(|r| {
            let src = r.image_url.clone();
            view! { <img class="table__thumb" src=src alt="" /> }.into_any()
        }),
        Column::new("schedule", "Schedule", schedule_text).with_empty_label("Not scheduled"),
        Column::text("is_active", "Active", |r: &BannerRow| {
            if r.is_active { "Yes" } else { "No" }.to_string()
        })
        .with_cell(|r| {
            if r.is_active {
                view! { <span class="badge badge--success">"Active"</span> }.into_any()
            } else {
                view! { <span class="badge badge--muted">"Inactive"</span> }.into_any()
            }
        }),
        Column::text("created_at", "Created", |r: &BannerRow| {
            format_datetime(&r.created_at.to_rfc3339())
        }),
    ]
}

#[component]
pub fn BannerListPage() -> impl IntoView {
    let modal_stack =
        use_context::<ModalStackService>().expect("ModalStackService not found in context");
    let (items, set_items) = signal::<Vec<BannerRow>>(Vec::new());
    let (is_loading, set_is_loading) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);

    let fetch = move || {
        set_is_loading.set(true);
        spawn_local(async move {
            match fetch_json::<Vec<Banner>>("/api/banner").await {
                Ok(v) => {
                    set_items.set(v.into_iter().map(Into::into).collect());
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(e)),
            }
            set_is_loading.set(false);
        });
    };

    let open_details = move |row: Option<BannerRow>| {
        modal_stack.push_with_frame(
            Some("max-width: min(720px, 95vw); width: min(720px, 95vw);".to_string()),
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
                    <BannerDetails row=row.clone() on_saved=on_saved on_cancel=on_cancel />
                }
                .into_any()
            },
        );
    };

    let delete = DeleteAction::new(
        |r: &BannerRow| r.description.clone(),
        |r: BannerRow| -> DeleteFuture {
            Box::pin(async move { send_delete(&format!("/api/banner/{}", r.id)).await })
        },
    )
    .with_warning(|r: &BannerRow| {
        r.is_active
            .then(|| "This banner is currently live on the storefront.".to_string())
    });

    let row_actions: Arc<dyn Fn(&BannerRow) -> AnyView + Send + Sync> = Arc::new(move |row| {
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
            title="Banners"
            resource_label="Banners"
            rows=items
            columns=columns()
            key_of=Arc::new(|r: &BannerRow| r.id.clone())
            is_loading=is_loading
            error=error
            on_retry=Callback::new(move |_| fetch())
            filter=FilterConfig::search(vec!["code", "description"])
                .with_date(|r: &BannerRow| r.starts_at.map(|d| d.date_naive()))
            on_add=Callback::new(move |_| open_details(None))
            on_refresh=Callback::new(move |_| fetch())
            render_row_actions=row_actions
            delete=delete
        />
    }
}
