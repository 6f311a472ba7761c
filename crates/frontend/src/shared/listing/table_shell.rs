use super::column::Column;
use super::confirm::{ConfirmDeleteDialog, DeleteAction, DeleteFlow, Settled};
use super::export::download_csv;
use super::filter::{apply_filters, DateRange, FilterConfig, FilterState};
use super::pagination::{page_items, paginate, PaginationState, PAGE_SIZE_OPTIONS};
use super::status::{EmptyPlaceholder, ErrorPlaceholder, LoadingPlaceholder};
use crate::shared::components::date_range_picker::DateRangePicker;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::search_input::SearchInput;
use crate::shared::date_utils::parse_iso_date;
use crate::shared::icons::icon;
use crate::shared::toast::ToastService;
use leptos::prelude::*;
use std::sync::Arc;

/// Generic resource listing: one instance per admin page.
///
/// The page hands over an already-fetched dataset, a column schema, a row key
/// extractor and its callbacks; the shell owns search, date filtering,
/// pagination, export, tri-state presentation and the delete confirmation
/// workflow. The dataset is treated as read-only — every derived collection
/// is a fresh `Vec`.
#[component]
pub fn ResourceTable<T>(
    /// Page title; rendered with a live `({count})` suffix over the full
    /// (unfiltered) dataset.
    #[prop(into)]
    title: String,
    #[prop(optional, into)] subtitle: Option<String>,
    /// Resource label used for the export file name (`{label}_{date}.csv`).
    #[prop(into)]
    resource_label: String,
    #[prop(into)] rows: Signal<Vec<T>>,
    columns: Vec<Column<T>>,
    /// Stable unique key per row; used for render identity, never the array
    /// position.
    key_of: Arc<dyn Fn(&T) -> String + Send + Sync>,
    #[prop(into)] is_loading: Signal<bool>,
    #[prop(into)] error: Signal<Option<String>>,
    #[prop(optional)] on_retry: Option<Callback<()>>,
    filter: FilterConfig<T>,
    #[prop(optional)] on_add: Option<Callback<()>>,
    #[prop(optional)] on_refresh: Option<Callback<()>>,
    /// Overrides the built-in CSV export; receives the currently filtered
    /// subset (not the full dataset, not the visible page).
    #[prop(optional)]
    on_export: Option<Callback<Vec<T>>>,
    /// Caller-rendered per-row controls (edit/view/...); always handed the
    /// original row object.
    #[prop(optional)]
    render_row_actions: Option<Arc<dyn Fn(&T) -> AnyView + Send + Sync>>,
    #[prop(optional)] delete: Option<DeleteAction<T>>,
) -> impl IntoView
where
    T: Clone + Send + Sync + 'static,
{
    let toasts = use_context::<ToastService>().expect("ToastService not provided in context");

    let search = RwSignal::new(String::new());
    let date_from = RwSignal::new(String::new());
    let date_to = RwSignal::new(String::new());
    let pagination = RwSignal::new(PaginationState::new());
    let flow = RwSignal::new(DeleteFlow::<T>::new());

    let date_filter_enabled = filter.date_filter_enabled();

    let filter_state = move || FilterState {
        search_term: search.get(),
        date_range: if date_filter_enabled {
            Some(DateRange {
                from: parse_iso_date(&date_from.get()),
                to: parse_iso_date(&date_to.get()),
            })
        } else {
            None
        },
    };

    let filter_cfg = filter.clone();
    let filter_columns = columns.clone();
    let filtered = Signal::derive(move || {
        apply_filters(&rows.get(), &filter_columns, &filter_cfg, &filter_state())
    });

    // Pagination is re-clamped against the filtered length on every render,
    // so narrowing the dataset never strands the view on a stale page.
    let slice = Signal::derive(move || paginate(filtered.get().len(), pagination.get()));
    let page_rows = Signal::derive(move || page_items(&filtered.get(), pagination.get()));

    let go_to_page = Callback::new(move |page: usize| {
        pagination.update(|s| s.page = page);
    });
    let change_page_size = Callback::new(move |size: usize| {
        pagination.update(|s| *s = s.with_page_size(size));
    });

    let export_columns = columns.clone();
    let export_label = resource_label.clone();
    let handle_export = move |_| {
        let current = filtered.get_untracked();
        if let Some(cb) = on_export {
            cb.run(current);
            return;
        }
        match download_csv(&current, &export_columns, &export_label) {
            Ok(()) => toasts.success(format!("Exported {} rows", current.len())),
            Err(e) => toasts.error(format!("Export failed: {}", e)),
        }
    };

    let on_settled = Callback::new(move |outcome: Settled| match outcome {
        Settled::Done => {
            toasts.success("Deleted");
            if let Some(refresh) = on_refresh {
                refresh.run(());
            }
        }
        Settled::Failed(e) => toasts.error(format!("Delete failed: {}", e)),
    });

    let has_actions = render_row_actions.is_some() || delete.is_some();
    let colspan = columns.len() + usize::from(has_actions);

    let header_columns = columns.clone();
    let body_columns = columns;
    let delete_for_rows = delete.clone();
    let title_text = title.clone();

    let body = move || {
        if is_loading.get() {
            return view! { <LoadingPlaceholder /> }.into_any();
        }
        if let Some(message) = error.get() {
            return view! {
                <ErrorPlaceholder
                    message=Signal::derive(move || message.clone())
                    on_retry=on_retry
                />
            }
            .into_any();
        }

        let body_columns = body_columns.clone();
        let row_actions = render_row_actions.clone();
        let delete_action = delete_for_rows.clone();
        let key_of = key_of.clone();

        view! {
            <div class="table">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            {header_columns.iter().map(|col| view! {
                                <th class="table__header-cell">{col.header}</th>
                            }).collect_view()}
                            {has_actions.then(|| view! {
                                <th class="table__header-cell table__header-cell--actions"></th>
                            })}
                        </tr>
                    </thead>
                    <tbody>
                        <Show
                            when=move || !page_rows.get().is_empty()
                            fallback=move || view! { <EmptyPlaceholder colspan=colspan /> }
                        >
                            <For
                                each=move || page_rows.get()
                                key={
                                    let key_of = key_of.clone();
                                    move |row| key_of(row)
                                }
                                children={
                                    let body_columns = body_columns.clone();
                                    let row_actions = row_actions.clone();
                                    let delete_action = delete_action.clone();
                                    move |row: T| {
                                        let cells = body_columns.iter().map(|col| view! {
                                            <td class="table__cell">{col.render(&row)}</td>
                                        }).collect_view();

                                        let actions = has_actions.then(|| {
                                            let custom = row_actions.as_ref().map(|f| f(&row));
                                            let delete_btn = delete_action.as_ref().map(|_| {
                                                let row = row.clone();
                                                view! {
                                                    <button
                                                        class="button button--icon button--danger"
                                                        title="Delete"
                                                        on:click=move |_| {
                                                            let row = row.clone();
                                                            flow.update(|f| f.request(row));
                                                        }
                                                    >
                                                        {icon("delete")}
                                                    </button>
                                                }
                                            });
                                            view! {
                                                <td class="table__cell table__cell--actions">
                                                    {custom}
                                                    {delete_btn}
                                                </td>
                                            }
                                        });

                                        view! {
                                            <tr class="table__row">
                                                {cells}
                                                {actions}
                                            </tr>
                                        }
                                    }
                                }
                            />
                        </Show>
                    </tbody>
                </table>
            </div>
        }
        .into_any()
    };

    view! {
        <div class="page page--wide">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">
                        {move || format!("{}({})", title_text, rows.get().len())}
                    </h1>
                    {subtitle.map(|s| view! { <span class="page__subtitle">{s}</span> })}
                </div>
                <div class="page__header-right">
                    {on_add.map(|add| view! {
                        <button class="button button--primary" on:click=move |_| add.run(())>
                            {icon("plus")}
                            " Add"
                        </button>
                    })}
                    {on_refresh.map(|refresh| view! {
                        <button
                            class="button button--secondary"
                            on:click=move |_| refresh.run(())
                            disabled=move || is_loading.get()
                        >
                            {icon("refresh")}
                            " Refresh"
                        </button>
                    })}
                    <button class="button button--secondary" on:click=handle_export>
                        {icon("download")}
                        " Export"
                    </button>
                </div>
            </div>

            <div class="filter-panel">
                <div class="filter-panel-header">
                    <div class="filter-panel-header__left">
                        {icon("filter")}
                        <span class="filter-panel__title">"Filters"</span>
                        <SearchInput
                            value=search.read_only()
                            on_change=Callback::new(move |term| search.set(term))
                        />
                    </div>
                    <div class="filter-panel-header__center">
                        <PaginationControls
                            current_page=Signal::derive(move || slice.get().page)
                            total_pages=Signal::derive(move || slice.get().total_pages)
                            total_count=Signal::derive(move || filtered.get().len())
                            page_size=Signal::derive(move || pagination.get().page_size)
                            on_page_change=go_to_page
                            on_page_size_change=change_page_size
                            page_size_options=PAGE_SIZE_OPTIONS.to_vec()
                        />
                    </div>
                    <div class="filter-panel-header__right">
                        {date_filter_enabled.then(|| view! {
                            <DateRangePicker
                                date_from=date_from.read_only()
                                date_to=date_to.read_only()
                                on_change=Callback::new(move |(from, to): (String, String)| {
                                    date_from.set(from);
                                    date_to.set(to);
                                })
                            />
                        })}
                    </div>
                </div>
            </div>

            {body}

            {delete.map(|action| view! {
                <ConfirmDeleteDialog flow=flow action=action on_settled=on_settled />
            })}
        </div>
    }
}
