//! Timed tooltip visibility.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

/// A tooltip that shows for a fixed time and then hides itself.
///
/// Showing it again while visible restarts the timer. The pending timer is
/// cancelled when the owning component is torn down.
#[derive(Clone, Copy)]
pub struct Flash {
    /// Whether the tooltip is currently shown.
    pub visible: RwSignal<bool>,
    timer: StoredValue<Option<Timeout>, LocalStorage>,
}

impl Flash {
    pub fn new() -> Self {
        let flash = Self {
            visible: RwSignal::new(false),
            timer: StoredValue::new_local(None),
        };
        on_cleanup(move || flash.timer.dispose());
        flash
    }

    /// Show for `duration_ms`, replacing (and thereby cancelling) any pending timer.
    pub fn show(&self, duration_ms: u32) {
        let visible = self.visible;
        visible.set(true);
        let timeout = Timeout::new(duration_ms, move || {
            let _ = visible.try_set(false);
        });
        self.timer.set_value(Some(timeout));
    }
}

impl Default for Flash {
    fn default() -> Self {
        Self::new()
    }
}
