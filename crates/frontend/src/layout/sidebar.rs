//! Sidebar navigation for the admin resource pages.

use crate::routes::routes::{NavState, Section};
use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
pub fn Sidebar() -> impl IntoView {
    let nav = use_context::<NavState>().expect("NavState not found in context");

    view! {
        <div class="app-sidebar__content">
            <div class="app-sidebar__title">"Admin"</div>
            {Section::ALL
                .into_iter()
                .map(|section| {
                    view! {
                        <div
                            class="app-sidebar__item"
                            class:app-sidebar__item--active=move || nav.active.get() == section
                            on:click=move |_| nav.active.set(section)
                        >
                            <span class="app-sidebar__icon">{icon(section.icon_name())}</span>
                            <span class="app-sidebar__label">{section.label()}</span>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}
