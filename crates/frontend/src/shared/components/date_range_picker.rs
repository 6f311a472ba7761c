use chrono::{Datelike, Duration, NaiveDate, Utc};
use leptos::prelude::*;

/// Inclusive date-range control: two native date inputs plus month shortcuts.
///
/// Either side may be left empty (unbounded). Values travel as `yyyy-mm-dd`
/// strings, the format native date inputs speak.
#[component]
pub fn DateRangePicker(
    /// "from" value in yyyy-mm-dd format, empty when unbounded
    #[prop(into)]
    date_from: Signal<String>,

    /// "to" value in yyyy-mm-dd format, empty when unbounded
    #[prop(into)]
    date_to: Signal<String>,

    /// Callback on any change: (from, to)
    on_change: Callback<(String, String)>,

    /// Optional label
    #[prop(optional)]
    label: Option<String>,
) -> impl IntoView {
    let on_from_change = move |new_from: String| {
        let current_to = date_to.get_untracked();
        on_change.run((new_from, current_to));
    };

    let on_to_change = move |new_to: String| {
        let current_from = date_from.get_untracked();
        on_change.run((current_from, new_to));
    };

    // Full current month.
    let on_current_month = move |_| {
        let now = Utc::now().date_naive();
        let (start, end) = month_bounds(now.year(), now.month());
        on_change.run((
            start.format("%Y-%m-%d").to_string(),
            end.format("%Y-%m-%d").to_string(),
        ));
    };

    // Month before the one currently shown in "from" (or before today).
    let on_previous_month = move |_| {
        let anchor = NaiveDate::parse_from_str(&date_from.get_untracked(), "%Y-%m-%d")
            .unwrap_or_else(|_| Utc::now().date_naive());
        let (year, month) = if anchor.month() == 1 {
            (anchor.year() - 1, 12)
        } else {
            (anchor.year(), anchor.month() - 1)
        };
        let (start, end) = month_bounds(year, month);
        on_change.run((
            start.format("%Y-%m-%d").to_string(),
            end.format("%Y-%m-%d").to_string(),
        ));
    };

    let on_clear = move |_| {
        on_change.run((String::new(), String::new()));
    };

    view! {
        <div class="date-range-picker">
            {label.map(|l| view! { <label class="date-range-picker__label">{l}</label> })}
            <input
                type="date"
                class="date-range-picker__input"
                prop:value=date_from
                on:input=move |ev| {
                    on_from_change(event_target_value(&ev));
                }
            />
            <span class="date-range-picker__sep">"—"</span>
            <input
                type="date"
                class="date-range-picker__input"
                prop:value=date_to
                on:input=move |ev| {
                    on_to_change(event_target_value(&ev));
                }
            />
            <div class="date-range-picker__shortcuts">
                <button class="button button--small" on:click=on_previous_month title="Previous month">
                    "-1M"
                </button>
                <button class="button button--small" on:click=on_current_month title="Current month">
                    "0M"
                </button>
                <button class="button button--small" on:click=on_clear title="Clear range">
                    "×"
                </button>
            </div>
        </div>
    }
}

fn month_bounds(year: i32, month: u32) -> (NaiveDate, NaiveDate) {
    // from_ymd_opt only fails on an out-of-range month here, and the callers
    // pass month numbers they computed from a valid date.
    let start = NaiveDate::from_ymd_opt(year, month, 1)
        .unwrap_or_else(|| Utc::now().date_naive().with_day(1).unwrap_or_default());
    let end = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    }
    .map(|d| d - Duration::days(1))
    .unwrap_or(start);
    (start, end)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn month_bounds_cover_the_whole_month() {
        let (start, end) = month_bounds(2024, 2);
        assert_eq!(start, NaiveDate::from_ymd_opt(2024, 2, 1).unwrap());
        assert_eq!(end, NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
    }

    #[test]
    fn december_rolls_into_the_next_year() {
        let (start, end) = month_bounds(2023, 12);
        assert_eq!(start, NaiveDate::from_ymd_opt(2023, 12, 1).unwrap());
        assert_eq!(end, NaiveDate::from_ymd_opt(2023, 12, 31).unwrap());
    }
}
