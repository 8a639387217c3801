//! Reactive viewport breakpoint observer.
//!
//! Wires a [`ViewportTracker`] to the browser's `matchMedia` change events
//! and exposes the narrow/wide state as a Leptos signal. The initial width
//! is read synchronously during setup, so the signal is defined before any
//! event fires; the listener is removed in `on_cleanup` when the owning
//! reactive scope is disposed.

use glint_core::{Breakpoint, ViewportTracker};
use leptos::prelude::*;
use wasm_bindgen::{JsCast, prelude::*};

/// Context marker so repeated [`use_is_mobile`] calls share one observer.
#[derive(Clone, Copy)]
struct MobileContext(Signal<bool>);

/// Reactive signal that is `true` while the viewport is narrower than the
/// default mobile breakpoint.
///
/// The first call under an owner registers the media-query listener and
/// stores the signal in context; later calls return the same live signal
/// without registering a duplicate listener.
pub fn use_is_mobile() -> Signal<bool> {
    if let Some(MobileContext(signal)) = use_context::<MobileContext>() {
        return signal;
    }
    let signal = watch_breakpoint(Breakpoint::default());
    provide_context(MobileContext(signal));
    signal
}

/// Observe an arbitrary [`Breakpoint`].
///
/// Each call owns its own listener; callers wanting the shared default
/// should prefer [`use_is_mobile`].
pub fn watch_breakpoint(breakpoint: Breakpoint) -> Signal<bool> {
    // Eager synchronous read: the signal holds a defined value before the
    // listener is registered or any change event can fire.
    let initial = viewport_width().unwrap_or(breakpoint.threshold());
    let tracker = ViewportTracker::new(breakpoint, initial);
    let state = RwSignal::new(tracker.is_narrow());

    Effect::new(move |_| {
        let Some(window) = web_sys::window() else {
            log::warn!("viewport observer: no window, breakpoint state is frozen");
            return;
        };

        let query = breakpoint.media_query();
        let mql = match window.match_media(&query) {
            Ok(Some(mql)) => mql,
            _ => {
                log::warn!("viewport observer: matchMedia failed for {query}");
                return;
            }
        };

        // Recompute from the live viewport width, not the event's matches
        // flag, so the signal honors the tracker's single source of truth.
        let mut tracker = tracker;
        let on_change = Closure::<dyn FnMut(web_sys::MediaQueryListEvent)>::new(
            move |_event: web_sys::MediaQueryListEvent| {
                if let Some(width) = viewport_width() {
                    state.set(tracker.observe(width));
                }
            },
        );

        if let Err(err) =
            mql.add_event_listener_with_callback("change", on_change.as_ref().unchecked_ref())
        {
            log::warn!("viewport observer: failed to subscribe to {query}: {err:?}");
            return;
        }

        // The closure stays alive inside the cleanup and is dropped right
        // after the listener is removed, on every exit path. `SendWrapper`
        // satisfies `on_cleanup`'s `Send + Sync` bound for these
        // wasm-only, single-threaded handles.
        let handles = send_wrapper::SendWrapper::new((mql, on_change));
        on_cleanup(move || {
            let (mql, on_change) = handles.take();
            let _ = mql
                .remove_event_listener_with_callback("change", on_change.as_ref().unchecked_ref());
        });
    });

    state.into()
}

/// Current `window.innerWidth` in CSS pixels, if a window exists.
fn viewport_width() -> Option<u32> {
    let window = web_sys::window()?;
    let width = window.inner_width().ok()?.as_f64()?;
    Some(width as u32)
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use leptos::task::Executor;
    use wasm_bindgen_test::*;

    use super::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_initial_state_is_seeded_synchronously() {
        let _ = Executor::init_wasm_bindgen();
        let owner = Owner::new();
        owner.set();

        // Any real test viewport sits between these two thresholds, so the
        // value is decided by the eager read, before any change event.
        let always_narrow = watch_breakpoint(Breakpoint::new(100_000).unwrap());
        assert!(always_narrow.get_untracked());
        let never_narrow = watch_breakpoint(Breakpoint::new(1).unwrap());
        assert!(!never_narrow.get_untracked());

        drop(owner);
    }

    #[wasm_bindgen_test]
    fn test_first_activation_caches_the_signal() {
        let _ = Executor::init_wasm_bindgen();
        let owner = Owner::new();
        owner.set();

        assert!(use_context::<MobileContext>().is_none());
        let first = use_is_mobile();
        let cached = use_context::<MobileContext>()
            .expect("activation stores the signal in context")
            .0;
        let second = use_is_mobile();
        assert_eq!(first.get_untracked(), cached.get_untracked());
        assert_eq!(second.get_untracked(), cached.get_untracked());

        drop(owner);
    }

    #[wasm_bindgen_test]
    fn test_repeated_activation_returns_the_live_cached_signal() {
        let owner = Owner::new();
        owner.set();

        // With a context already present, activation must hand back that
        // signal instead of building a second observer.
        let canned = RwSignal::new(true);
        provide_context(MobileContext(canned.into()));
        let signal = use_is_mobile();
        assert!(signal.get_untracked());
        canned.set(false);
        assert!(!signal.get_untracked());

        drop(owner);
    }

    #[wasm_bindgen_test]
    fn test_teardown_stops_publishing() {
        let _ = Executor::init_wasm_bindgen();
        let owner = Owner::new();
        owner.set();
        let signal = watch_breakpoint(Breakpoint::default());
        assert!(signal.try_get_untracked().is_some());

        drop(owner);

        // The scope is disposed: the listener is gone and the signal
        // publishes nothing further.
        assert!(signal.try_get_untracked().is_none());
    }
}
