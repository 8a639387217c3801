//! Disclosure panel components.
//!
//! `Collapsible` owns the open state and shares it through context with
//! its trigger and content children.

use leptos::prelude::*;

#[derive(Clone, Copy)]
struct CollapsibleContext {
    open: RwSignal<bool>,
}

/// Collapsible container.
///
/// Pass `open` for controlled usage; otherwise the panel starts closed and
/// manages its own state.
#[component]
pub fn Collapsible(
    /// Externally controlled open state.
    #[prop(optional)]
    open: Option<RwSignal<bool>>,
    /// Trigger and content children.
    children: Children,
) -> impl IntoView {
    let open = open.unwrap_or_else(|| RwSignal::new(false));
    provide_context(CollapsibleContext { open });

    view! {
      <div class="glint-collapsible" data-state=move || state_attr(open.get())>
        {children()}
      </div>
    }
}

/// Button toggling the enclosing [`Collapsible`].
#[component]
pub fn CollapsibleTrigger(
    /// Button label content.
    children: Children,
) -> impl IntoView {
    let CollapsibleContext { open } = expect_context();

    view! {
      <button
        class="glint-collapsible-trigger"
        aria-expanded=move || open.get().to_string()
        on:click=move |_| open.update(|open| *open = !*open)
      >
        {children()}
      </button>
    }
}

/// Content rendered only while the enclosing [`Collapsible`] is open.
#[component]
pub fn CollapsibleContent(
    /// Panel body content.
    children: ChildrenFn,
) -> impl IntoView {
    let CollapsibleContext { open } = expect_context();

    view! {
      <Show when=move || open.get()>
        <div class="glint-collapsible-content" data-state=move || state_attr(open.get())>
          {children()}
        </div>
      </Show>
    }
}

fn state_attr(open: bool) -> &'static str {
    if open { "open" } else { "closed" }
}
