//! The UI collaborator boundary.
//!
//! The simulation pushes currency values and prompt visibility through this
//! trait; it never reads anything back. Hosts plug in whatever display they
//! have (console, overlay, window title).

/// Receiver for simulation-driven UI updates.
pub trait UiDisplay {
    /// The uncollected earnings changed.
    fn set_uncollected(&mut self, amount: f64);
    /// The banked total changed.
    fn set_collected(&mut self, amount: u64);
    /// The interaction prompt became visible.
    fn show_prompt(&mut self);
    /// The interaction prompt was hidden.
    fn hide_prompt(&mut self);
}

/// A display that ignores everything. Useful for tests and headless runs.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullDisplay;

impl UiDisplay for NullDisplay {
    fn set_uncollected(&mut self, _amount: f64) {}
    fn set_collected(&mut self, _amount: u64) {}
    fn show_prompt(&mut self) {}
    fn hide_prompt(&mut self) {}
}
