//! Page State
//!
//! Reactive state for the roster page using Leptos signals.

use leptos::*;

use crate::actions::RosterSink;
use crate::state::catalog::RosterView;
use crate::state::status::{StatusMessage, StatusSlot};

/// Page state provided to all components
#[derive(Clone, Copy)]
pub struct RosterState {
    /// What the `#activities-list` region shows
    pub roster: RwSignal<RosterView>,
    /// Activity names for the selector, filled once at startup
    pub activity_names: RwSignal<Vec<String>>,
    /// The single status message
    pub status: RwSignal<StatusSlot>,
    /// Sign-up form fields
    pub email: RwSignal<String>,
    pub selected_activity: RwSignal<String>,
    status_timeout_ms: u32,
}

/// Provide page state to the component tree
pub fn provide_roster_state(status_timeout_ms: u32) -> RosterState {
    let state = RosterState {
        roster: create_rw_signal(RosterView::Loading),
        activity_names: create_rw_signal(Vec::new()),
        status: create_rw_signal(StatusSlot::default()),
        email: create_rw_signal(String::new()),
        selected_activity: create_rw_signal(String::new()),
        status_timeout_ms,
    };

    provide_context(state);
    state
}

impl RosterSink for RosterState {
    fn render_roster(&self, view: RosterView) {
        self.roster.set(view);
    }

    fn set_activity_options(&self, names: Vec<String>) {
        self.activity_names.set(names);
    }

    /// Show a status message (auto-hides after the configured timeout)
    fn show_status(&self, message: StatusMessage) {
        let mut generation = 0;
        self.status.update(|slot| generation = slot.show(message));

        let status_signal = self.status;
        gloo_timers::callback::Timeout::new(self.status_timeout_ms, move || {
            status_signal.update(|slot| slot.expire(generation));
        })
        .forget();
    }

    fn reset_form(&self) {
        self.email.set(String::new());
        self.selected_activity.set(String::new());
    }
}
