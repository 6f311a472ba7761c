use super::details::ProductDetails;
use crate::shared::api_utils::{fetch_json, send_delete};
use crate::shared::date_utils::format_datetime;
use crate::shared::icons::icon;
use crate::shared::listing::{Column, DeleteAction, DeleteFuture, FilterConfig, ResourceTable};
use crate::shared::modal_stack::ModalStackService;
use contracts::domain::a001_product::Product;
use contracts::domain::common::AggregateId;
use leptos::prelude::*;
use std::sync::Arc;
use wasm_bindgen_futures::spawn_local;

#[derive(Clone, Debug)]
pub struct ProductRow {
    pub id: String,
    pub code: String,
    pub description: String,
    pub sku: String,
    pub price: f64,
    pub stock: i64,
    pub is_active: bool,
    pub comment: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl From<Product> for ProductRow {
    fn from(p: Product) -> Self {
        Self {
            id: p.base.id.as_string(),
            code: p.base.code,
            description: p.base.description,
            sku: p.sku,
            price: p.price,
            stock: p.stock,
            is_active: p.is_active,
            comment: p.base.comment,
            created_at: p.base.metadata.created_at,
        }
    }
}

fn columns() -> Vec<Column<ProductRow>> {
    vec![
        Column::text("code", "Code", |r: &ProductRow| r.code.clone()),
        Column::text("description", "Name", |r: &ProductRow| {
            r.description.clone()
        }),
        Column::text("sku", "SKU", |r: &ProductRow| r.sku.clone()),
        Column::text("price", "Price", |r: &ProductRow| format!("{:.2}", r.price))
            .with_cell(|r| {
                view! { <span class="table__cell--number">{format!("{:.2}", r.price)}</span> }
                    .into_any()
            }),
        Column::text("stock", "Stock", |r: &ProductRow| r.stock.to_string()),
        Column::text("is_active", "Active", |r: &ProductRow| {
            if r.is_active { "Yes" } else { "No" }.to_string()
        })
        .with_cell(|r| {
            if r.is_active {
                view! { <span class="badge badge--success">"Active"</span> }.into_any()
            } else {
                view! { <span class="badge badge--muted">"Inactive"</span> }.into_any()
            }
        }),
        Column::text("created_at", "Created", |r: &ProductRow| {
            format_datetime(&r.created_at.to_rfc3339())
        }),
    ]
}

#[component]
pub fn ProductListPage() -> impl IntoView {
    let modal_stack =
        use_context::<ModalStackService>().expect("ModalStackService not found in context");
    let (items, set_items) = signal::<Vec<ProductRow>>(Vec::new());
    let (is_loading, set_is_loading) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);

    let fetch = move || {
        set_is_loading.set(true);
        spawn_local(async move {
            match fetch_json::<Vec<Product>>("/api/product").await {
                Ok(v) => {
                    set_items.set(v.into_iter().map(Into::into).collect());
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(e)),
            }
            set_is_loading.set(false);
        });
    };

    let open_details = move |row: Option<ProductRow>| {
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
                    <ProductDetails row=row.clone() on_saved=on_saved on_cancel=on_cancel />
                }
                .into_any()
            },
        );
    };

    let delete = DeleteAction::new(
        |r: &ProductRow| r.description.clone(),
        |r: ProductRow| -> DeleteFuture {
            Box::pin(async move { send_delete(&format!("/api/product/{}", r.id)).await })
        },
    );

    let row_actions: Arc<dyn Fn(&ProductRow) -> AnyView + Send + Sync> = Arc::new(move |row| {
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
            title="Products"
            resource_label="Products"
            rows=items
            columns=columns()
            key_of=Arc::new(|r: &ProductRow| r.id.clone())
            is_loading=is_loading
            error=error
            on_retry=Callback::new(move |_| fetch())
            filter=FilterConfig::search(vec!["code", "description", "sku"])
                .with_date(|r: &ProductRow| Some(r.created_at.date_naive()))
            on_add=Callback::new(move |_| open_details(None))
            on_refresh=Callback::new(move |_| fetch())
            render_row_actions=row_actions
            delete=delete
        />
    }
}
