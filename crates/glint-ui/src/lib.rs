//! Glint UI Components
//!
//! Leptos components and hooks for the Glint frontend.
//!
//! # Hooks
//! - [`use_is_mobile`] - Reactive narrow-viewport signal at the 768px boundary
//! - [`watch_breakpoint`] - Same observer for an injected [`Breakpoint`]
//!
//! # Components
//! - [`Shell`] - Root layout shell (meta context, title, stylesheet)
//! - [`Collapsible`] / [`CollapsibleTrigger`] / [`CollapsibleContent`] - Disclosure panel
//! - [`ToastHost`] - Renders the toast queue
//!
//! # Toasts
//! - [`provide_toaster`] / [`use_toaster`] - Context-provided [`Toaster`] handle
//!
//! # Example
//!
//! ```ignore
//! use glint_ui::{ToastHost, provide_toaster, use_is_mobile};
//! use leptos::prelude::*;
//!
//! #[component]
//! fn App() -> impl IntoView {
//!     provide_toaster();
//!     let is_mobile = use_is_mobile();
//!
//!     view! {
//!         <main class:narrow=move || is_mobile.get()></main>
//!         <ToastHost />
//!     }
//! }
//! ```
//!
//! [`Breakpoint`]: glint_core::Breakpoint

pub mod collapsible;
pub mod identity;
pub mod shell;
pub mod toast;
pub mod viewport;

pub use collapsible::{Collapsible, CollapsibleContent, CollapsibleTrigger};
pub use identity::CredentialResponse;
pub use shell::Shell;
pub use toast::{Toast, ToastHost, ToastKind, ToastQueue, Toaster, provide_toaster, use_toaster};
pub use viewport::{use_is_mobile, watch_breakpoint};
