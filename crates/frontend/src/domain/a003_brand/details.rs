use super::list::BrandRow;
use crate::shared::api_utils::post_json;
use crate::shared::date_utils::format_datetime;
use contracts::domain::a003_brand::Brand;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

#[component]
pub fn BrandDetails(
    row: Option<BrandRow>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    match row {
        Some(row) => view! { <BrandView row=row on_close=on_cancel /> }.into_any(),
        None => view! { <BrandCreateForm on_saved=on_saved on_cancel=on_cancel /> }.into_any(),
    }
}

#[component]
fn BrandView(row: BrandRow, on_close: Callback<()>) -> impl IntoView {
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
                {field(
                    "Website",
                    row.website_url.clone().unwrap_or_else(|| "No website".to_string()),
                )}
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
fn BrandCreateForm(on_saved: Callback<()>, on_cancel: Callback<()>) -> impl IntoView {
    let code = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let website_url = RwSignal::new(String::new());
    let comment = RwSignal::new(String::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (saving, set_saving) = signal(false);

    let handle_save = move |_| {
        if description.get().trim().is_empty() {
            set_error.set(Some("Name is required".to_string()));
            return;
        }

        let comment_value = {
            let c = comment.get().trim().to_string();
            (!c.is_empty()).then_some(c)
        };
        let mut brand = Brand::new_for_insert(
            code.get().trim().to_string(),
            description.get().trim().to_string(),
            comment_value,
        );
        brand.website_url = {
            let url = website_url.get().trim().to_string();
            (!url.is_empty()).then_some(url)
        };

        set_saving.set(true);
        spawn_local(async move {
            match post_json("/api/brand", &brand).await {
                Ok(()) => on_saved.run(()),
                Err(e) => set_error.set(Some(e)),
            }
            set_saving.set(false);
        });
    };

    view! {
        <div class="details-container">
            <div class="details-header">
                <h3>"New brand"</h3>
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
                    <label for="website_url">"Website"</label>
                    <input
                        type="url"
                        id="website_url"
                        prop:value=move || website_url.get()
                        on:input=move |ev| website_url.set(event_target_value(&ev))
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
