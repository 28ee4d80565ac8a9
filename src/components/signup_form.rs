//! Sign-Up Form Component
//!
//! Email + activity selector; submitting registers the student.

use leptos::*;

use crate::actions;
use crate::api::HttpRosterApi;
use crate::state::catalog::selector_options;
use crate::state::global::RosterState;

/// The `#signup-form` element
#[component]
pub fn SignupForm() -> impl IntoView {
    let state = use_context::<RosterState>().expect("RosterState not found");
    let api = use_context::<HttpRosterApi>().expect("HttpRosterApi not found");

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();

        let email = state.email.get_untracked();
        let activity = state.selected_activity.get_untracked();
        let api = api.clone();

        spawn_local(async move {
            actions::submit_signup(&api, &state, &email, &activity).await;
        });
    };

    view! {
        <form id="signup-form" on:submit=on_submit>
            <div class="form-group">
                <label for="email">"Student Email:"</label>
                <input
                    type="email"
                    id="email"
                    required=true
                    placeholder="your-email@mergington.edu"
                    prop:value=move || state.email.get()
                    on:input=move |ev| state.email.set(event_target_value(&ev))
                />
            </div>
            <div class="form-group">
                <label for="activity">"Select Activity:"</label>
                <select
                    id="activity"
                    required=true
                    on:change=move |ev| state.selected_activity.set(event_target_value(&ev))
                    prop:value=move || state.selected_activity.get()
                >
                    {move || {
                        state.activity_names
                            .with(|names| selector_options(names))
                            .into_iter()
                            .map(|option| view! {
                                <option value=option.value>{option.label}</option>
                            })
                            .collect_view()
                    }}
                </select>
            </div>
            <button type="submit">"Sign Up"</button>
        </form>
    }
}
