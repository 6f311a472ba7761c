use super::details::CustomerDetails;
use crate::shared::api_utils::{fetch_json, send_delete};
use crate::shared::date_utils::format_datetime;
use crate::shared::icons::icon;
use crate::shared::listing::{Column, DeleteAction, DeleteFuture, FilterConfig, ResourceTable};
use crate::shared::modal_stack::ModalStackService;
use contracts::domain::a006_customer::Customer;
use contracts::domain::common::AggregateId;
use leptos::prelude::*;
use std::sync::Arc;
use wasm_bindgen_futures::spawn_local;

#[derive(Clone, Debug)]
pub struct CustomerRow {
    pub id: String,
    pub code: String,
    pub description: String,
    pub email: String,
    pub phone: Option<String>,
    pub last_login_at: Option<chrono::DateTime<chrono::Utc>>,
    pub orders_count: i64,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl From<Customer> for CustomerRow {
    fn from(c: Customer) -> Self {
        Self {
            id: c.base.id.as_string(),
            code: c.base.code,
            description: c.base.description,
            email: c.email,
            phone: c.phone,
            last_login_at: c.last_login_at,
            orders_count: c.orders_count,
            created_at: c.base.metadata.created_at,
        }
    }
}

fn columns() -> Vec<Column<CustomerRow>> {
    vec![
        Column::text("code", "Code", |r: &CustomerRow| r.code.clone()),
        Column::text("description", "Name", |r: &CustomerRow| {
            r.description.clone()
        }),
        Column::text("email", "Email", |r: &CustomerRow| r.email.clone()),
        Column::new("phone", "Phone", |r: &CustomerRow| r.phone.clone()),
        Column::new("last_login", "Last login", |r: &CustomerRow| {
            r.last_login_at.map(|d| format_datetime(&d.to_rfc3339()))
        })
        .with_empty_label("Never"),
        Column::text("orders_count", "Orders", |r: &CustomerRow| {
            r.orders_count.to_string()
        }),
        Column::text("created_at", "Registered", |r: &CustomerRow| {
            format_datetime(&r.created_at.to_rfc3339())
        }),
    ]
}

#[component]
pub fn CustomerListPage() -> impl IntoView {
    let modal_stack =
        use_context::<ModalStackService>().expect("ModalStackService not found in context");
    let (items, set_items) = signal::<Vec<CustomerRow>>(Vec::new());
    let (is_loading, set_is_loading) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);

    let fetch = move || {
        set_is_loading.set(true);
        spawn_local(async move {
            match fetch_json::<Vec<Customer>>("/api/customer").await {
                Ok(v) => {
                    set_items.set(v.into_iter().map(Into::into).collect());
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(e)),
            }
            set_is_loading.set(false);
        });
    };

    let open_details = move |row: CustomerRow| {
        modal_stack.push_with_frame(
            Some("max-width: min(640px, 95vw); width: min(640px, 95vw);".to_string()),
            None,
            move |handle| {
                let on_close = Callback::new({
                    let handle = handle.clone();
                    move |_| handle.close()
                });
                view! { <CustomerDetails row=row.clone() on_close=on_close /> }.into_any()
            },
        );
    };

    let delete = DeleteAction::new(
        |r: &CustomerRow| r.email.clone(),
        |r: CustomerRow| -> DeleteFuture {
            Box::pin(async move { send_delete(&format!("/api/customer/{}", r.id)).await })
        },
    )
    .with_warning(|r: &CustomerRow| {
        (r.orders_count > 0).then(|| {
            format!(
                "This customer has {} completed orders. Their order history will be orphaned.",
                r.orders_count
            )
        })
    });

    let row_actions: Arc<dyn Fn(&CustomerRow) -> AnyView + Send + Sync> = Arc::new(move |row| {
        let row = row.clone();
        view! {
            <button
                class="button button--icon"
                title="View"
                on:click=move |_| open_details(row.clone())
            >
                {icon("eye")}
            </button>
        }
        .into_any()
    });

    fetch();

    // Customers register through the storefront, so the page has no Add button.
    view! {
        <ResourceTable
            title="Customers"
            resource_label="Customers"
            rows=items
            columns=columns()
            key_of=Arc::new(|r: &CustomerRow| r.id.clone())
            is_loading=is_loading
            error=error
            on_retry=Callback::new(move |_| fetch())
            filter=FilterConfig::search(vec!["code", "description", "email"])
                .with_date(|r: &CustomerRow| Some(r.created_at.date_naive()))
            on_refresh=Callback::new(move |_| fetch())
            render_row_actions=row_actions
            delete=delete
        />
    }
}
