use dioxus::prelude::*;

use sepet_common::view::ViewFilter;

/// Filter criteria shared by the filter panel and the product table.
pub fn use_view_filter() -> Signal<ViewFilter> {
    use_context::<Signal<ViewFilter>>()
}

/// Wait `ms` milliseconds on the UI event loop.
pub async fn sleep_ms(ms: u32) {
    #[cfg(target_family = "wasm")]
    gloo_timers::future::TimeoutFuture::new(ms).await;
    #[cfg(not(target_family = "wasm"))]
    tokio::time::sleep(std::time::Duration::from_millis(ms as u64)).await;
}

/// Something that can stop a scheduled callback.
pub trait CancelHandle {
    fn cancel(self);
}

impl CancelHandle for Task {
    fn cancel(self) {
        Task::cancel(self);
    }
}

/// At most one in-flight name-query timer.
///
/// Arming a new timer cancels the previous one. The owner calls
/// [`PendingTimer::cancel`] when it goes away.
#[derive(Debug)]
pub struct PendingTimer<H = Task> {
    handle: Option<H>,
}

impl<H: CancelHandle> PendingTimer<H> {
    pub fn new() -> Self {
        Self { handle: None }
    }

    pub fn is_armed(&self) -> bool {
        self.handle.is_some()
    }

    /// Track `handle`, cancelling whatever was armed. Returns whether a
    /// previous timer was cancelled.
    pub fn arm(&mut self, handle: H) -> bool {
        let cancelled = self.cancel();
        self.handle = Some(handle);
        cancelled
    }

    /// Forget the armed timer after it has fired.
    pub fn finish(&mut self) {
        self.handle = None;
    }

    pub fn cancel(&mut self) -> bool {
        match self.handle.take() {
            Some(handle) => {
                handle.cancel();
                true
            }
            None => false,
        }
    }
}

impl<H: CancelHandle> Default for PendingTimer<H> {
    fn default() -> Self {
        Self::new()
    }
}
