use super::list::BannerRow;
use crate::shared::api_utils::post_json;
use crate::shared::date_utils::{format_date, format_datetime};
use contracts::domain::a005_banner::Banner;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

#[component]
pub fn BannerDetails(
    row: Option<BannerRow>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    match row {
        Some(row) => view! { <BannerView row=row on_close=on_cancel /> }.into_any(),
        None => view! { <BannerCreateForm on_saved=on_saved on_cancel=on_cancel /> }.into_any(),
    }
}

#[component]
fn BannerView(row: BannerRow, on_close: Callback<()>) -> impl IntoView {
    let field = |label: &'static str, value: String| {
        view! {
            <div class="details-field">
                <span class="details-field__label">{label}</span>
                <span class="details-field__value">{value}</span>
            </div>
        }
    };

    let image_src = row.image_url.clone();

    view! {
        <div class="details-container">
            <div class="details-header">
                <h3>{row.description.clone()}</h3>
            </div>
            <div class="details-body">
                <img class="details-preview" src=image_src alt="" />
                {field("Code", row.code.clone())}
                {field(
                    "Target",
                    row.target_url.clone().unwrap_or_else(|| "-".to_string()),
                )}
                {field(
                    "Starts",
                    row.starts_at
                        .map(|d| format_date(&d.to_rfc3339()))
                        .unwrap_or_else(|| "Not scheduled".to_string()),
                )}
                {field(
                    "Ends",
                    row.ends_at
                        .map(|d| format_date(&d.to_rfc3339()))
                        .unwrap_or_else(|| "Not scheduled".to_string()),
                )}
                {field("Active", if row.is_active { "Yes" } else { "No" }.to_string())}
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
fn BannerCreateForm(on_saved: Callback<()>, on_cancel: Callback<()>) -> impl IntoView {
    let code = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let image_url = RwSignal::new(String::new());
    let target_url = RwSignal::new(String::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (saving, set_saving) = signal(false);

    let handle_save = move |_| {
        if description.get().trim().is_empty() {
            set_error.set(Some("Name is required".to_string()));
            return;
        }
        if image_url.get().trim().is_empty() {
            set_error.set(Some("Image URL is required".to_string()));
            return;
        }

        let mut banner = Banner::new_for_insert(
            code.get().trim().to_string(),
            description.get().trim().to_string(),
            image_url.get().trim().to_string(),
            None,
        );
        banner.target_url = {
            let url = target_url.get().trim().to_string();
            (!url.is_empty()).then_some(url)
        };

        set_saving.set(true);
        spawn_local(async move {
            match post_json("/api/banner", &banner).await {
                Ok(()) => on_saved.run(()),
                Err(e) => set_error.set(Some(e)),
            }
            set_saving.set(false);
        });
    };

    view! {
        <div class="details-container">
            <div class="details-header">
                <h3>"New banner"</h3>
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
                    <label for="image_url">"Image URL"</label>
                    <input
                        type="url"
                        id="image_url"
                        prop:value=move || image_url.get()
                        on:input=move |ev| image_url.set(event_target_value(&ev))
                    />
                </div>
                <div class="form-group">
                    <label for="target_url">"Target URL"</label>
                    <input
                        type="url"
                        id="target_url"
                        prop:value=move || target_url.get()
                        on:input=move |ev| target_url.set(event_target_value(&ev))
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
