//! Toast notification system.
//!
//! [`ToastQueue`] holds the pure queue state; [`Toaster`] is the `Copy`
//! handle provided through context; [`ToastHost`] renders whatever the
//! queue currently holds.

use std::collections::HashMap;

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use serde::{Deserialize, Serialize};

/// Only the newest toast is kept, single-slot queue semantics.
pub const TOAST_LIMIT: usize = 1;

/// How long a toast stays up before it is dismissed automatically.
pub const TOAST_DISMISS_MS: u32 = 4_000;

/// Visual category of a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastKind {
    Info,
    Success,
    Error,
}

impl ToastKind {
    fn class(self) -> &'static str {
        match self {
            ToastKind::Info => "info",
            ToastKind::Success => "success",
            ToastKind::Error => "error",
        }
    }
}

/// A single toast notification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Toast {
    /// Queue-assigned identifier, unique for the lifetime of the queue.
    pub id: u64,

    /// Short headline.
    pub title: String,

    /// Optional longer text.
    #[serde(default)]
    pub description: Option<String>,

    /// Visual category.
    pub kind: ToastKind,
}

/// Pure toast queue state: newest first, capped at [`TOAST_LIMIT`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ToastQueue {
    toasts: Vec<Toast>,
    next_id: u64,
}

impl ToastQueue {
    /// Enqueue a toast and return its id. Older toasts beyond the cap are
    /// evicted.
    pub fn push(
        &mut self,
        kind: ToastKind,
        title: impl Into<String>,
        description: Option<String>,
    ) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.toasts.insert(
            0,
            Toast {
                id,
                title: title.into(),
                description,
                kind,
            },
        );
        self.toasts.truncate(TOAST_LIMIT);
        id
    }

    /// Remove the toast with the given id. Returns whether it was present,
    /// so a late auto-dismiss timer firing after a manual dismiss is a
    /// no-op rather than an error.
    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|toast| toast.id != id);
        self.toasts.len() != before
    }

    /// Remove every toast.
    pub fn dismiss_all(&mut self) {
        self.toasts.clear();
    }

    /// Currently visible toasts, newest first.
    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    /// Whether the queue is empty.
    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}

/// Handle for showing and dismissing toasts.
#[derive(Clone, Copy)]
pub struct Toaster {
    queue: RwSignal<ToastQueue>,
    // Pending auto-dismiss timers, keyed by toast id. Dropping a handle
    // cancels its timer, so dismissal also releases the timer closure.
    timers: StoredValue<HashMap<u64, Timeout>, LocalStorage>,
}

impl Toaster {
    fn new() -> Self {
        Self {
            queue: RwSignal::new(ToastQueue::default()),
            timers: StoredValue::new_local(HashMap::new()),
        }
    }

    /// Show a toast and schedule its auto-dismiss.
    pub fn show(
        &self,
        kind: ToastKind,
        title: impl Into<String>,
        description: Option<String>,
    ) -> u64 {
        let id = self.queue.write().push(kind, title, description);
        let visible: Vec<u64> = self
            .queue
            .with_untracked(|queue| queue.toasts().iter().map(|toast| toast.id).collect());
        let toaster = *self;
        let timer = Timeout::new(TOAST_DISMISS_MS, move || {
            toaster.dismiss(id);
        });
        self.timers.update_value(|timers| {
            // Toasts evicted by the cap lose their timers here.
            timers.retain(|timer_id, _| visible.contains(timer_id));
            timers.insert(id, timer);
        });
        id
    }

    /// Show an info toast.
    pub fn info(&self, title: impl Into<String>, description: Option<String>) -> u64 {
        self.show(ToastKind::Info, title, description)
    }

    /// Show a success toast.
    pub fn success(&self, title: impl Into<String>, description: Option<String>) -> u64 {
        self.show(ToastKind::Success, title, description)
    }

    /// Show an error toast.
    pub fn error(&self, title: impl Into<String>, description: Option<String>) -> u64 {
        self.show(ToastKind::Error, title, description)
    }

    /// Dismiss a toast by id and drop its pending timer.
    pub fn dismiss(&self, id: u64) {
        self.queue.write().dismiss(id);
        self.timers.update_value(|timers| {
            timers.remove(&id);
        });
    }

    /// Dismiss everything.
    pub fn dismiss_all(&self) {
        self.queue.write().dismiss_all();
        self.timers.update_value(HashMap::clear);
    }

    /// Reactive view of the visible toasts, newest first.
    pub fn toasts(&self) -> Signal<Vec<Toast>> {
        let queue = self.queue;
        Signal::derive(move || queue.with(|queue| queue.toasts().to_vec()))
    }
}

/// Provide a [`Toaster`] to the component tree, creating one if the
/// current context has none yet.
pub fn provide_toaster() -> Toaster {
    if let Some(toaster) = use_context::<Toaster>() {
        return toaster;
    }
    let toaster = Toaster::new();
    provide_context(toaster);
    toaster
}

/// The [`Toaster`] provided by an ancestor. Panics if none was provided.
pub fn use_toaster() -> Toaster {
    expect_context::<Toaster>()
}

/// Renders the toast queue.
#[component]
pub fn ToastHost() -> impl IntoView {
    let toaster = use_toaster();
    let toasts = toaster.toasts();

    view! {
      <div class="glint-toast-host" aria-live="polite" aria-atomic="true">
        <For
          each=move || toasts.get()
          key=|toast| toast.id
          children=move |toast| {
            view! { <ToastItem toast=toast /> }
          }
        />

      </div>
    }
}

/// A single rendered toast with its dismiss button.
#[component]
fn ToastItem(
    /// The toast to display.
    toast: Toast,
) -> impl IntoView {
    let toaster = use_toaster();
    let id = toast.id;
    let description = toast.description.clone();
    let has_description = description.is_some();
    let class = format!("glint-toast {}", toast.kind.class());

    view! {
      <div class=class role="status">
        <span class="glint-toast-title">{toast.title.clone()}</span>
        <Show when=move || has_description>
          <span class="glint-toast-description">{description.clone().unwrap_or_default()}</span>
        </Show>
        <button
          class="glint-toast-close"
          aria-label="Dismiss"
          on:click=move |_| toaster.dismiss(id)
        >
          "\u{00d7}"
        </button>
      </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_assigns_monotonic_ids() {
        let mut queue = ToastQueue::default();
        let first = queue.push(ToastKind::Info, "one", None);
        let second = queue.push(ToastKind::Info, "two", None);
        assert!(second > first);
    }

    #[test]
    fn test_queue_caps_at_limit() {
        let mut queue = ToastQueue::default();
        queue.push(ToastKind::Info, "one", None);
        queue.push(ToastKind::Success, "two", None);
        assert_eq!(queue.toasts().len(), TOAST_LIMIT);
        assert_eq!(queue.toasts()[0].title, "two");
    }

    #[test]
    fn test_dismiss_removes_once() {
        let mut queue = ToastQueue::default();
        let id = queue.push(ToastKind::Error, "oops", Some("details".to_string()));
        assert!(queue.dismiss(id));
        assert!(queue.is_empty());
        // Late timer firing after a manual dismiss is a no-op.
        assert!(!queue.dismiss(id));
    }

    #[test]
    fn test_dismiss_all() {
        let mut queue = ToastQueue::default();
        queue.push(ToastKind::Info, "one", None);
        queue.dismiss_all();
        assert!(queue.is_empty());
    }

    #[test]
    fn test_push_reports_visible_ids() {
        let mut queue = ToastQueue::default();
        let evicted = queue.push(ToastKind::Info, "one", None);
        let kept = queue.push(ToastKind::Info, "two", None);
        let visible: Vec<u64> = queue.toasts().iter().map(|toast| toast.id).collect();
        assert!(visible.contains(&kept));
        assert!(!visible.contains(&evicted));
    }

    #[test]
    fn test_toast_serialization() {
        let toast = Toast {
            id: 7,
            title: "Saved".to_string(),
            description: None,
            kind: ToastKind::Success,
        };
        let json = serde_json::to_string(&toast).unwrap();
        assert!(json.contains("\"title\":\"Saved\""));
        assert!(json.contains("\"kind\":\"success\""));
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use gloo_timers::future::TimeoutFuture;
    use wasm_bindgen_test::*;

    use super::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_show_retains_timer_until_dismiss() {
        let toaster = Toaster::new();
        let id = toaster.show(ToastKind::Info, "hello", None);
        assert!(toaster.timers.with_value(|timers| timers.contains_key(&id)));

        toaster.dismiss(id);
        assert!(toaster.queue.with_untracked(ToastQueue::is_empty));
        assert!(toaster.timers.with_value(HashMap::is_empty));
    }

    #[wasm_bindgen_test]
    fn test_evicted_toast_timer_is_dropped() {
        let toaster = Toaster::new();
        let evicted = toaster.show(ToastKind::Info, "one", None);
        let kept = toaster.show(ToastKind::Info, "two", None);
        toaster.timers.with_value(|timers| {
            assert!(timers.contains_key(&kept));
            assert!(!timers.contains_key(&evicted));
        });
    }

    #[wasm_bindgen_test]
    async fn test_auto_dismiss_releases_timer() {
        let toaster = Toaster::new();
        toaster.show(ToastKind::Success, "done", None);

        TimeoutFuture::new(TOAST_DISMISS_MS + 100).await;

        assert!(toaster.queue.with_untracked(ToastQueue::is_empty));
        assert!(toaster.timers.with_value(HashMap::is_empty));
    }
}
