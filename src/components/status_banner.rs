//! Status Banner Component
//!
//! Shows the success or error message left by the last action.

use leptos::*;

use crate::state::global::RosterState;
use crate::state::status::StatusSlot;

/// The `#message` element. Clicking a visible message dismisses it.
#[component]
pub fn StatusBanner() -> impl IntoView {
    let state = use_context::<RosterState>().expect("RosterState not found");

    let on_click = move |_| {
        if state.status.with(StatusSlot::is_visible) {
            state.status.update(StatusSlot::clear);
        }
    };

    view! {
        <div
            id="message"
            class=move || state.status.with(StatusSlot::class_name)
            on:click=on_click
        >
            {move || state.status.with(|slot| slot.text().to_string())}
        </div>
    }
}
