//! Glint Core Library
//!
//! Host-independent presentation logic for the Glint frontend: the
//! responsive breakpoint model and the URL validator. Everything here is
//! pure and runs on any target; the browser wiring lives in `glint-ui`.

pub mod breakpoint;
pub mod error;
pub mod url;

pub use breakpoint::{Breakpoint, MOBILE_BREAKPOINT, ViewportTracker};
pub use error::{CoreError, Result};
pub use url::is_valid_url;
