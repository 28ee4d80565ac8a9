//! Activity List Component
//!
//! Renders the roster: one card per activity with its participants.

use leptos::*;

use crate::actions::{self, LOAD_FAILED_TEXT};
use crate::api::HttpRosterApi;
use crate::state::catalog::{Activity, RosterView};
use crate::state::global::RosterState;

pub const NO_PARTICIPANTS_TEXT: &str = "No participants yet - be the first to sign up!";

/// The `#activities-list` region. Rebuilt in full on every roster change.
#[component]
pub fn ActivityList() -> impl IntoView {
    let state = use_context::<RosterState>().expect("RosterState not found");

    view! {
        <div id="activities-list">
            {move || match state.roster.get() {
                RosterView::Loading => view! { <p>"Loading activities..."</p> }.into_view(),
                RosterView::Failed => view! { <p>{LOAD_FAILED_TEXT}</p> }.into_view(),
                RosterView::Loaded(catalog) => catalog
                    .entries()
                    .iter()
                    .cloned()
                    .map(|(name, activity)| view! { <ActivityCard name=name activity=activity /> })
                    .collect_view(),
            }}
        </div>
    }
}

#[component]
fn ActivityCard(name: String, activity: Activity) -> impl IntoView {
    let spots_left = activity.spots_left();

    view! {
        <div class="activity-card">
            <h4>{name.clone()}</h4>
            <p>{activity.description}</p>
            <p>
                <strong>"Schedule:"</strong>
                {format!(" {}", activity.schedule)}
            </p>
            <p>
                <strong>"Availability:"</strong>
                {format!(" {} spots left", spots_left)}
            </p>
            <ParticipantsSection activity_name=name participants=activity.participants />
        </div>
    }
}

#[component]
fn ParticipantsSection(activity_name: String, participants: Vec<String>) -> impl IntoView {
    let body = if participants.is_empty() {
        view! { <div class="no-participants">{NO_PARTICIPANTS_TEXT}</div> }.into_view()
    } else {
        view! {
            <ul class="participants-list">
                {participants
                    .into_iter()
                    .map(|email| view! {
                        <ParticipantRow activity_name=activity_name.clone() email=email />
                    })
                    .collect_view()}
            </ul>
        }
        .into_view()
    };

    view! {
        <div class="participants-section">
            <h5>"Current Participants:"</h5>
            {body}
        </div>
    }
}

/// One participant with its removal button. The button's handler carries
/// the activity name and email it was rendered for.
#[component]
fn ParticipantRow(activity_name: String, email: String) -> impl IntoView {
    let state = use_context::<RosterState>().expect("RosterState not found");
    let api = use_context::<HttpRosterApi>().expect("HttpRosterApi not found");
    let label = email.clone();

    let on_remove = move |_| {
        let api = api.clone();
        let activity = activity_name.clone();
        let email = email.clone();
        spawn_local(async move {
            actions::unregister_participant(&api, &state, browser_confirm, &activity, &email)
                .await;
        });
    };

    view! {
        <li>
            <span class="participant-info">{label}</span>
            <button
                class="delete-participant-btn"
                title="Remove participant"
                on:click=on_remove
            >
                "🗑️"
            </button>
        </li>
    }
}

fn browser_confirm(prompt: &str) -> bool {
    window().confirm_with_message(prompt).unwrap_or(false)
}
