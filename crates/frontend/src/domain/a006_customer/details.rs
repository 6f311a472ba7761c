use super::list::CustomerRow;
use crate::shared::date_utils::format_datetime;
use leptos::prelude::*;

/// Read-only customer card. Customer accounts are owned by the storefront;
/// the admin surface only inspects them.
#[component]
pub fn CustomerDetails(row: CustomerRow, on_close: Callback<()>) -> impl IntoView {
    let field = |label: &'static str, value: String| {
        view! {
            <div class="details-field">
                <span class="details-field__label">{label}</span>
                <span class="details-field__value">{value}</span>
            </div>
        }
    };

    view! {
        <div class="details-container">
            <div class="details-header">
                <h3>{row.description.clone()}</h3>
            </div>
            <div class="details-body">
                {field("Code", row.code.clone())}
                {field("Email", row.email.clone())}
                {field("Phone", row.phone.clone().unwrap_or_else(|| "-".to_string()))}
                {field(
                    "Last login",
                    row.last_login_at
                        .map(|d| format_datetime(&d.to_rfc3339()))
                        .unwrap_or_else(|| "Never".to_string()),
                )}
                {field("Orders", row.orders_count.to_string())}
                {field("Registered", format_datetime(&row.created_at.to_rfc3339()))}
            </div>
            <div class="details-footer">
                <button class="button button--secondary" on:click=move |_| on_close.run(())>
                    "Close"
                </button>
            </div>
        </div>
    }
}
