use super::list::DepartmentRow;
use crate::shared::api_utils::post_json;
use crate::shared::date_utils::format_datetime;
use contracts::domain::a004_department::Department;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

#[component]
pub fn DepartmentDetails(
    row: Option<DepartmentRow>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    match row {
        Some(row) => view! { <DepartmentView row=row on_close=on_cancel /> }.into_any(),
        None => {
            view! { <DepartmentCreateForm on_saved=on_saved on_cancel=on_cancel /> }.into_any()
        }
    }
}

#[component]
fn DepartmentView(row: DepartmentRow, on_close: Callback<()>) -> impl IntoView {
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
                {field("Sort order", row.sort_order.to_string())}
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
fn DepartmentCreateForm(on_saved: Callback<()>, on_cancel: Callback<()>) -> impl IntoView {
    let code = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let sort_order = RwSignal::new("0".to_string());
    let comment = RwSignal::new(String::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (saving, set_saving) = signal(false);

    let handle_save = move |_| {
        let sort_value = match sort_order.get().trim().parse::<i32>() {
            Ok(v) => v,
            Err(_) => {
                set_error.set(Some("Sort order must be an integer".to_string()));
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
        let mut department = Department::new_for_insert(
            code.get().trim().to_string(),
            description.get().trim().to_string(),
            comment_value,
        );
        department.sort_order = sort_value;

        set_saving.set(true);
        spawn_local(async move {
            match post_json("/api/department", &department).await {
                Ok(()) => on_saved.run(()),
                Err(e) => set_error.set(Some(e)),
            }
            set_saving.set(false);
        });
    };

    view! {
        <div class="details-container">
            <div class="details-header">
                <h3>"New department"</h3>
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
                    <label for="sort_order">"Sort order"</label>
                    <input
                        type="number"
                        id="sort_order"
                        prop:value=move || sort_order.get()
                        on:input=move |ev| sort_order.set(event_target_value(&ev))
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
