use glint_core::is_valid_url;
use glint_ui::{
    Collapsible, CollapsibleContent, CollapsibleTrigger, Shell, ToastHost, provide_toaster,
    use_is_mobile, use_toaster,
};
use leptos::prelude::*;
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

#[component]
pub fn App() -> impl IntoView {
    // One toaster for the whole tree; pages reach it through context.
    provide_toaster();

    view! {
      <Shell>
        <Router>
          <main>
            <Routes fallback=|| "Page not found.".into_view()>
              <Route path=StaticSegment("") view=HomePage />
            </Routes>
          </main>
        </Router>
        <ToastHost />
      </Shell>
    }
}

/// Renders the home page.
#[component]
fn HomePage() -> impl IntoView {
    let is_mobile = use_is_mobile();
    let toaster = use_toaster();
    let link = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let text = link.get();
        if is_valid_url(&text) {
            toaster.success("Link saved", Some(text));
            link.set(String::new());
        } else {
            toaster.error("Not a valid link", None);
        }
    };

    view! {
      <section class="glint-home" class=("glint-narrow", move || is_mobile.get())>
        <h1>"Glint"</h1>

        <form class="glint-link-form" on:submit=on_submit>
          <input
            type="text"
            class="glint-link-input"
            placeholder="Paste a link"
            prop:value=move || link.get()
            on:input=move |ev| link.set(event_target_value(&ev))
          />
          <button type="submit">"Add link"</button>
        </form>

        <Collapsible>
          <CollapsibleTrigger>"About"</CollapsibleTrigger>
          <CollapsibleContent>
            <p>"Glint keeps track of the links you share."</p>
          </CollapsibleContent>
        </Collapsible>
      </section>
    }
}
