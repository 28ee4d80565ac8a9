//! App Root Component
//!
//! Provides page state and the API client, and kicks off the startup loads.

use leptos::*;

use crate::actions;
use crate::api::HttpRosterApi;
use crate::components::{ActivityList, SignupForm, StatusBanner};
use crate::config::ClientConfig;
use crate::state::global::provide_roster_state;

/// Root application component
#[component]
pub fn App(config: ClientConfig) -> impl IntoView {
    let state = provide_roster_state(config.status_timeout_ms);
    let api = HttpRosterApi::new(config.api_base);
    provide_context(api.clone());

    // The selector is filled once per session; later mutations only
    // refresh the roster.
    let selector_api = api.clone();
    spawn_local(async move {
        actions::populate_activity_selector(&selector_api, &state).await;
    });
    spawn_local(async move {
        actions::fetch_and_render_activities(&api, &state).await;
    });

    view! {
        <header>
            <h1>"Extracurricular Activities"</h1>
        </header>

        <main>
            <section id="activities-container">
                <h3>"Available Activities"</h3>
                <ActivityList />
            </section>

            <section id="signup-container">
                <h3>"Sign Up for an Activity"</h3>
                <SignupForm />
                <StatusBanner />
            </section>
        </main>
    }
}
