//! Responsive breakpoint model.
//!
//! A [`Breakpoint`] is the immutable pixel boundary between "narrow" and
//! "wide" viewports; a [`ViewportTracker`] holds the current narrow/wide
//! state for a sequence of observed widths. The reactive browser wiring
//! (`matchMedia`, change events) lives in `glint-ui`.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};

/// Viewport widths below this many CSS pixels are treated as mobile.
pub const MOBILE_BREAKPOINT: u32 = 768;

/// An immutable narrow/wide width boundary.
///
/// The threshold is injected at construction so alternate boundaries can be
/// exercised without touching process-wide state. Deserialization goes
/// through [`Breakpoint::new`], so a zero threshold is rejected there too.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawBreakpoint")]
pub struct Breakpoint {
    threshold: u32,
}

/// Unvalidated wire form of [`Breakpoint`].
#[derive(Deserialize)]
struct RawBreakpoint {
    threshold: u32,
}

impl TryFrom<RawBreakpoint> for Breakpoint {
    type Error = CoreError;

    fn try_from(raw: RawBreakpoint) -> Result<Self> {
        Breakpoint::new(raw.threshold)
    }
}

impl Breakpoint {
    /// Create a breakpoint at the given pixel threshold.
    ///
    /// A zero threshold is rejected: no width is below it, so it cannot
    /// separate narrow from wide.
    pub fn new(threshold: u32) -> Result<Self> {
        if threshold == 0 {
            return Err(CoreError::invalid_threshold(threshold));
        }
        Ok(Self { threshold })
    }

    /// The pixel boundary.
    pub fn threshold(&self) -> u32 {
        self.threshold
    }

    /// Whether a viewport of the given width is on the narrow side.
    pub fn is_narrow(&self, width: u32) -> bool {
        width < self.threshold
    }

    /// The media query expression that flips exactly when [`is_narrow`]
    /// would, suitable for `window.matchMedia`.
    ///
    /// [`is_narrow`]: Breakpoint::is_narrow
    pub fn media_query(&self) -> String {
        format!("(max-width: {}px)", self.threshold - 1)
    }
}

impl Default for Breakpoint {
    fn default() -> Self {
        Self {
            threshold: MOBILE_BREAKPOINT,
        }
    }
}

/// Current narrow/wide state for a stream of viewport widths.
///
/// Construction performs the initial synchronous read, so the state is
/// defined from the first instant; each [`observe`] recomputes it against
/// the breakpoint.
///
/// [`observe`]: ViewportTracker::observe
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewportTracker {
    breakpoint: Breakpoint,
    narrow: bool,
}

impl ViewportTracker {
    /// Initialize the tracker from the width read at setup time.
    pub fn new(breakpoint: Breakpoint, initial_width: u32) -> Self {
        Self {
            breakpoint,
            narrow: breakpoint.is_narrow(initial_width),
        }
    }

    /// Record a new viewport width and return the recomputed narrow state.
    pub fn observe(&mut self, width: u32) -> bool {
        self.narrow = self.breakpoint.is_narrow(width);
        self.narrow
    }

    /// The narrow state as of the last observed width.
    pub fn is_narrow(&self) -> bool {
        self.narrow
    }

    /// The breakpoint this tracker was built with.
    pub fn breakpoint(&self) -> Breakpoint {
        self.breakpoint
    }
}
