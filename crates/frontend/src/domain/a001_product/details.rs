use super::list::ProductRow;
use crate::shared::api_utils::post_json;
use crate::shared::date_utils::format_datetime;
use contracts::domain::a001_product::Product;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// Product details modal: read-only view for an existing row, create form
/// otherwise.
#[component]
pub fn ProductDetails(
    row: Option<ProductRow>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    match row {
        Some(row) => view! { <ProductView row=row on_close=on_cancel /> }.into_any(),
        None => view! { <ProductCreateForm on_saved=on_saved on_cancel=on_cancel /> }.into_any(),
    }
}

#[component]
fn ProductView(row: ProductRow, on_close: Callback<()>) -> impl IntoView {
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
                {field("SKU", row.sku.clone())}
                {field("Price", format!("{:.2}", row.price))}
                {field("Stock", row.stock.to_string())}
                {field("Active", if row.is_active { "Yes" } else { "No" }.to_string())}
                {field("Comment", row.comment.clone().unwrap_or_else(|| "-".to_string()))}
                {field("Created", format_datetime(&row.created_at.to_rfc3339()))}
            </div>
            <div class="details-footer">
                <button class="button button--secondary" on:click=move |_| on_close.run(())>
                    "Close"
                </button>
            </div>
        </div>
    }
}

#[component]
fn ProductCreateForm(on_saved: Callback<()>, on_cancel: Callback<()>) -> impl IntoView {
    let code = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let sku = RwSignal::new(String::new());
    let price = RwSignal::new(String::new());
    let stock = RwSignal::new(String::new());
    let comment = RwSignal::new(String::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (saving, set_saving) = signal(false);

    let handle_save = move |_| {
        let price_value = match price.get().trim().parse::<f64>() {
            Ok(v) if v >= 0.0 => v,
            _ => {
                set_error.set(Some("Price must be a non-negative number".to_string()));
                return;
            }
        };
        let stock_value = match stock.get().trim().parse::<i64>() {
            Ok(v) if v >= 0 => v,
            _ => {
                set_error.set(Some("Stock must be a non-negative integer".to_string()));
                return;
            }
        };
        if description.get().trim().is_empty() {
            set_error.set(Some("Name is required".to_string()));
            return;
        }

        let comment_value = {
            let c = comment.get().trim().to_string();
            (!c.is_empty()).then_some(c)
        };
        let product = Product::new_for_insert(
            code.get().trim().to_string(),
            description.get().trim().to_string(),
            sku.get().trim().to_string(),
            price_value,
            stock_value,
            comment_value,
        );

        set_saving.set(true);
        spawn_local(async move {
            match post_json("/api/product", &product).await {
                Ok(()) => on_saved.run(()),
                Err(e) => set_error.set(Some(e)),
            }
            set_saving.set(false);
        });
    };

    view! {
        <div class="details-container">
            <div class="details-header">
                <h3>"New product"</h3>
            </div>

            {move || error.get().map(|e| view! { <div class="error">{e}</div> })}

            <div class="details-form">
                <div class="form-group">
                    <label for="code">"Code"</label>
                    <input
                        type="text"
                        id="code"
                        prop:value=move || code.get()
                        on:input=move |ev| code.set(event_target_value(&ev))
                    />
                </div>
                <div class="form-group">
                    <label for="description">"Name"</label>
                    <input
                        type="text"
                        id="description"
                        prop:value=move || description.get()
                        on:input=move |ev| description.set(event_target_value(&ev))
                    />
                </div>
                <div class="form-group">
                    <label for="sku">"SKU"</label>
                    <input
                        type="text"
                        id="sku"
                        prop:value=move || sku.get()
                        on:input=move |ev| sku.set(event_target_value(&ev))
                    />
                </div>
                <div class="form-group">
                    <label for="price">"Price"</label>
                    <input
                        type="number"
                        id="price"
                        step="0.01"
                        prop:value=move || price.get()
                        on:input=move |ev| price.set(event_target_value(&ev))
                    />
                </div>
                <div class="form-group">
                    <label for="stock">"Stock"</label>
                    <input
                        type="number"
                        id="stock"
                        prop:value=move || stock.get()
                        on:input=move |ev| stock.set(event_target_value(&ev))
                    />
                </div>
                <div class="form-group">
                    <label for="comment">"Comment"</label>
                    <input
                        type="text"
                        id="comment"
                        prop:value=move || comment.get()
                        on:input=move |ev| comment.set(event_target_value(&ev))
                    />
                </div>
            </div>

            <div class="details-footer">
                <button
                    class="button button--primary"
                    disabled=move || saving.get()
                    on:click=handle_save
                >
                    "Save"
                </button>
                <button class="button button--secondary" on:click=move |_| on_cancel.run(())>
                    "Cancel"
                </button>
            </div>
        </div>
    }
}
