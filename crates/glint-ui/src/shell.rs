//! Root layout shell.

use leptos::prelude::*;
use leptos_meta::{Html, Stylesheet, Title, provide_meta_context};

/// Document-level wrapper for every page.
///
/// Provides the meta context that manages the document title and language,
/// links the global stylesheet, and wraps children in the shell container.
#[component]
pub fn Shell(
    /// Document title.
    #[prop(default = "Glint".to_string())]
    title: String,
    /// Page content.
    children: Children,
) -> impl IntoView {
    provide_meta_context();

    view! {
      <Html attr:lang="en" />
      <Title text=title />
      <Stylesheet id="glint" href="/styles/globals.css" />
      <div class="glint-shell">{children()}</div>
    }
}
