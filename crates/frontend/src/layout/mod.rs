pub mod sidebar;

use leptos::prelude::*;
use sidebar::Sidebar;

/// Main application shell.
///
/// Layout structure:
/// ```text
/// +------------------------------------------+
/// |  Sidebar  |           Content            |
/// |  (Left)   |          (Center)            |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <div class="app-layout">
            <div class="app-body">
                <aside class="app-sidebar">
                    <Sidebar />
                </aside>

                <div class="app-main">
                    {children()}
                </div>
            </div>
        </div>
    }
}
