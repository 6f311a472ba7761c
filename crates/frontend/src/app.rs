use crate::routes::routes::AppRoutes;
use crate::shared::modal_stack::{ModalHost, ModalStackService};
use crate::shared::toast::{ToastHost, ToastService};
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Provide ModalStackService for centralized modal management
    provide_context(ModalStackService::new());

    // Provide ToastService for transient notifications
    provide_context(ToastService::new());

    view! {
        <AppRoutes />
        <ModalHost />
        <ToastHost />
    }
}
