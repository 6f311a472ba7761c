use leptos::prelude::*;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use wasm_bindgen_futures::spawn_local;

/// Destructive-action confirmation workflow.
///
/// `Idle -> Pending(row) -> Confirming(row) -> Idle`, with at most one row
/// pending per table instance. Requesting deletion of another row while one
/// is pending replaces it; while the caller's mutation is in flight the
/// machine refuses both replacement and a second confirm.
#[derive(Clone, Debug, PartialEq)]
pub enum DeleteFlow<T> {
    Idle,
    Pending(T),
    Confirming(T),
}

impl<T: Clone> DeleteFlow<T> {
    pub fn new() -> Self {
        Self::Idle
    }

    /// A delete row-action was activated. No mutation happens yet.
    pub fn request(&mut self, row: T) {
        match self {
            Self::Confirming(_) => {} // mutation in flight, cannot be retargeted
            _ => *self = Self::Pending(row),
        }
    }

    /// User confirmed. Returns the row to delete, or `None` when there is
    /// nothing pending / a confirm is already running (double click).
    pub fn begin(&mut self) -> Option<T> {
        match self {
            Self::Pending(row) => {
                let row = row.clone();
                *self = Self::Confirming(row.clone());
                Some(row)
            }
            _ => None,
        }
    }

    /// User dismissed without confirming. A running mutation is not
    /// cancellable and keeps the machine busy.
    pub fn cancel(&mut self) {
        if let Self::Pending(_) = self {
            *self = Self::Idle;
        }
    }

    /// The caller's mutation settled (either way); drop the row reference.
    pub fn settle(&mut self) {
        *self = Self::Idle;
    }

    pub fn pending_row(&self) -> Option<&T> {
        match self {
            Self::Idle => None,
            Self::Pending(row) | Self::Confirming(row) => Some(row),
        }
    }

    pub fn is_open(&self) -> bool {
        !matches!(self, Self::Idle)
    }

    pub fn is_confirming(&self) -> bool {
        matches!(self, Self::Confirming(_))
    }
}

impl<T: Clone> Default for DeleteFlow<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Outcome of one confirmed deletion, reported back to the table shell.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Settled {
    Done,
    Failed(String),
}

pub type DeleteFuture = Pin<Box<dyn Future<Output = Result<(), String>>>>;

/// Caller-supplied delete behaviour for one resource page.
pub struct DeleteAction<T> {
    /// Display name of the row shown inside the confirmation surface.
    pub display_of: Arc<dyn Fn(&T) -> String + Send + Sync>,
    /// Advisory warning (e.g. "department is still active"). Purely
    /// informational: confirming still runs the mutation, enforcement is the
    /// backend's call.
    pub warn_of: Option<Arc<dyn Fn(&T) -> Option<String> + Send + Sync>>,
    /// The actual mutation. Owned and awaited by the caller's future; the
    /// engine only observes the settled result.
    pub execute: Arc<dyn Fn(T) -> DeleteFuture + Send + Sync>,
}

impl<T> Clone for DeleteAction<T> {
    fn clone(&self) -> Self {
        Self {
            display_of: self.display_of.clone(),
            warn_of: self.warn_of.clone(),
            execute: self.execute.clone(),
        }
    }
}

impl<T> DeleteAction<T> {
    pub fn new(
        display_of: impl Fn(&T) -> String + Send + Sync + 'static,
        execute: impl Fn(T) -> DeleteFuture + Send + Sync + 'static,
    ) -> Self {
        Self {
            display_of: Arc::new(display_of),
            warn_of: None,
            execute: Arc::new(execute),
        }
    }

    pub fn with_warning(
        mut self,
        warn_of: impl Fn(&T) -> Option<String> + Send + Sync + 'static,
    ) -> Self {
        self.warn_of = Some(Arc::new(warn_of));
        self
    }
}

/// Modal confirmation surface in front of row deletion.
///
/// Renders from the [`DeleteFlow`] signal owned by the table shell; while the
/// mutation is in flight both buttons are disabled so a second confirm cannot
/// double-submit.
#[component]
pub fn ConfirmDeleteDialog<T>(
    flow: RwSignal<DeleteFlow<T>>,
    action: DeleteAction<T>,
    /// Invoked once per confirmed deletion after the mutation settles.
    on_settled: Callback<Settled>,
) -> impl IntoView
where
    T: Clone + Send + Sync + 'static,
{
    let display_of = action.display_of.clone();
    let warn_of = action.warn_of.clone();
    let execute = action.execute.clone();

    let row_name = move || {
        flow.with(|f| f.pending_row().map(|row| display_of(row)))
            .unwrap_or_default()
    };

    let warning = move || {
        flow.with(|f| {
            f.pending_row()
                .and_then(|row| warn_of.as_ref().and_then(|w| w(row)))
        })
    };

    let busy = move || flow.with(|f| f.is_confirming());

    let handle_cancel = move |_| {
        flow.update(|f| f.cancel());
    };

    let handle_confirm = move |_| {
        let Some(row) = flow.try_update(|f| f.begin()).flatten() else {
            return;
        };
        let fut = execute(row);
        spawn_local(async move {
            let outcome = match fut.await {
                Ok(()) => Settled::Done,
                Err(e) => Settled::Failed(e),
            };
            flow.update(|f| f.settle());
            on_settled.run(outcome);
        });
    };

    view! {
        <Show when=move || flow.with(|f| f.is_open())>
            <div class="modal-overlay" style="z-index: 1100;">
                <div class="modal confirm-delete" style="position: relative; max-width: 420px;">
                    <h3 class="confirm-delete__title">"Confirm deletion"</h3>
                    <p class="confirm-delete__text">
                        "Delete \"" {row_name.clone()} "\"? This cannot be undone."
                    </p>
                    {
                        let warning = warning.clone();
                        move || warning().map(|text| view! {
                        <div class="warning-box">
                            <span class="warning-box__icon">"⚠"</span>
                            <span class="warning-box__text">{text}</span>
                        </div>
                    })
                    }
                    <div class="confirm-delete__actions">
                        <button
                            class="button button--secondary"
                            on:click=handle_cancel
                            disabled=busy
                        >
                            "Cancel"
                        </button>
                        <button
                            class="button button--danger"
                            on:click=handle_confirm.clone()
                            disabled=busy
                        >
                            {move || if busy() { "Deleting…" } else { "Delete" }}
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_replaces_pending_row() {
        let mut flow = DeleteFlow::new();
        flow.request("a");
        flow.request("b");
        assert_eq!(flow.pending_row(), Some(&"b"));
    }

    #[test]
    fn begin_moves_to_confirming_and_yields_the_row_once() {
        let mut flow = DeleteFlow::new();
        flow.request("a");
        assert_eq!(flow.begin(), Some("a"));
        assert!(flow.is_confirming());
        // A second confirm while in flight is suppressed.
        assert_eq!(flow.begin(), None);
    }

    #[test]
    fn request_is_ignored_while_confirming() {
        let mut flow = DeleteFlow::new();
        flow.request("a");
        flow.begin();
        flow.request("b");
        assert_eq!(flow.pending_row(), Some(&"a"));
    }

    #[test]
    fn cancel_discards_pending_but_not_in_flight() {
        let mut flow = DeleteFlow::new();
        flow.request("a");
        flow.cancel();
        assert_eq!(flow, DeleteFlow::Idle);

        flow.request("a");
        flow.begin();
        flow.cancel();
        assert!(flow.is_confirming());
    }

    #[test]
    fn settle_returns_to_idle() {
        let mut flow = DeleteFlow::new();
        flow.request("a");
        flow.begin();
        flow.settle();
        assert_eq!(flow, DeleteFlow::Idle);
        assert_eq!(flow.pending_row(), None);
    }

    #[test]
    fn begin_without_pending_row_is_a_no_op() {
        let mut flow: DeleteFlow<&str> = DeleteFlow::new();
        assert_eq!(flow.begin(), None);
        assert_eq!(flow, DeleteFlow::Idle);
    }
}
