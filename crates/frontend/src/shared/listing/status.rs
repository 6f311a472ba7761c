use leptos::prelude::*;

/// Placeholder shown while the caller's fetch is in flight.
#[component]
pub fn LoadingPlaceholder() -> impl IntoView {
    view! {
        <div class="table-status table-status--loading">
            <span class="text-muted">"Loading…"</span>
        </div>
    }
}

/// Fetch-state error with a retry affordance. The engine does not re-fetch
/// itself; retry is entirely the caller's function.
#[component]
pub fn ErrorPlaceholder(
    #[prop(into)] message: Signal<String>,
    /// Forwarded verbatim from the table shell, which may not have one.
    on_retry: Option<Callback<()>>,
) -> impl IntoView {
    view! {
        <div class="table-status table-status--error">
            <div class="warning-box warning-box--error">
                <span class="warning-box__icon">"⚠"</span>
                <span class="warning-box__text">{move || message.get()}</span>
            </div>
            {on_retry.map(|retry| view! {
                <button class="button button--secondary" on:click=move |_| retry.run(())>
                    "Retry"
                </button>
            })}
        </div>
    }
}

/// Body placeholder for an empty filtered set.
#[component]
pub fn EmptyPlaceholder(#[prop(into)] colspan: usize) -> impl IntoView {
    view! {
        <tr class="table__row">
            <td class="table__cell table__cell--empty" colspan=colspan>
                <span class="text-muted">"No data"</span>
            </td>
        </tr>
    }
}
