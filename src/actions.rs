//! Roster Actions
//!
//! The page's four operations: load the roster, fill the activity selector,
//! sign up, and unregister. Each one catches its own failures and reports
//! them through the [`RosterSink`], so a failed action never interrupts the
//! caller and can always be retried.

use crate::api::{ApiError, RosterApi};
use crate::state::catalog::RosterView;
use crate::state::status::StatusMessage;

/// Shown in the roster region when the catalog cannot be loaded
pub const LOAD_FAILED_TEXT: &str = "Failed to load activities. Please try again later.";
pub const SIGNUP_FAILED_TEXT: &str = "Failed to sign up. Please try again.";
pub const UNREGISTER_FAILED_TEXT: &str = "Failed to unregister. Please try again.";
/// Used when the server rejects a request without a usable `detail`
pub const GENERIC_ERROR_TEXT: &str = "An error occurred";

/// Where action results go. Implemented by the page state; tests record
/// the calls instead.
pub trait RosterSink {
    fn render_roster(&self, view: RosterView);
    fn set_activity_options(&self, names: Vec<String>);
    fn show_status(&self, message: StatusMessage);
    fn reset_form(&self);
}

pub fn unregister_prompt(email: &str, activity: &str) -> String {
    format!("Are you sure you want to unregister {} from {}?", email, activity)
}

/// Fetch the catalog and replace the roster display with it
pub async fn fetch_and_render_activities<A, S>(api: &A, sink: &S)
where
    A: RosterApi + ?Sized,
    S: RosterSink + ?Sized,
{
    match api.fetch_activities().await {
        Ok(catalog) => {
            log::debug!("Loaded {} activities", catalog.len());
            sink.render_roster(RosterView::Loaded(catalog));
        }
        Err(e) => {
            log::error!("Error fetching activities: {}", e);
            sink.render_roster(RosterView::Failed);
        }
    }
}

/// Fetch the catalog once more and fill the activity selector from its names
pub async fn populate_activity_selector<A, S>(api: &A, sink: &S)
where
    A: RosterApi + ?Sized,
    S: RosterSink + ?Sized,
{
    match api.fetch_activities().await {
        Ok(catalog) => sink.set_activity_options(catalog.names()),
        Err(e) => log::error!("Error populating activity selector: {}", e),
    }
}

/// Sign `email` up for `activity`; refreshes the roster on success
pub async fn submit_signup<A, S>(api: &A, sink: &S, email: &str, activity: &str)
where
    A: RosterApi + ?Sized,
    S: RosterSink + ?Sized,
{
    match api.signup(activity, email).await {
        Ok(message) => {
            sink.show_status(StatusMessage::success(message));
            sink.reset_form();
            fetch_and_render_activities(api, sink).await;
        }
        Err(e) => {
            if e.is_transport() {
                log::error!("Error signing up {} for {}: {}", email, activity, e);
            }
            sink.show_status(failure_status(&e, SIGNUP_FAILED_TEXT));
        }
    }
}

/// Remove `email` from `activity` after `confirm` approves the prompt.
/// Declining sends nothing and shows nothing.
pub async fn unregister_participant<A, S, C>(
    api: &A,
    sink: &S,
    confirm: C,
    activity: &str,
    email: &str,
) where
    A: RosterApi + ?Sized,
    S: RosterSink + ?Sized,
    C: FnOnce(&str) -> bool,
{
    if !confirm(&unregister_prompt(email, activity)) {
        return;
    }

    match api.unregister(activity, email).await {
        Ok(message) => {
            sink.show_status(StatusMessage::success(message));
            fetch_and_render_activities(api, sink).await;
        }
        Err(e) => {
            if e.is_transport() {
                log::error!("Error unregistering {} from {}: {}", email, activity, e);
            }
            sink.show_status(failure_status(&e, UNREGISTER_FAILED_TEXT));
        }
    }
}

fn failure_status(err: &ApiError, transport_text: &str) -> StatusMessage {
    match err {
        ApiError::Rejected { detail, .. } => {
            StatusMessage::error(detail.as_deref().unwrap_or(GENERIC_ERROR_TEXT))
        }
        ApiError::Network(_) | ApiError::Parse(_) => StatusMessage::error(transport_text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::catalog::{Activity, Catalog};
    use crate::state::status::StatusKind;
    use async_trait::async_trait;
    use futures::executor::block_on;
    use std::cell::{Cell, RefCell};

    /// In-memory stand-in for the activities server
    struct FakeServer {
        catalog: RefCell<Catalog>,
        down: Cell<bool>,
        gets: Cell<usize>,
        posts: Cell<usize>,
        deletes: Cell<usize>,
    }

    impl FakeServer {
        fn new() -> Self {
            let activity = |max, participants: &[&str]| Activity {
                description: "desc".to_string(),
                schedule: "Fridays".to_string(),
                max_participants: max,
                participants: participants.iter().map(|p| p.to_string()).collect(),
            };
            let catalog = Catalog::new(vec![
                (
                    "Chess Club".to_string(),
                    activity(12, &["michael@mergington.edu", "daniel@mergington.edu"]),
                ),
                ("Gym Class".to_string(), activity(30, &[])),
            ]);
            Self {
                catalog: RefCell::new(catalog),
                down: Cell::new(false),
                gets: Cell::new(0),
                posts: Cell::new(0),
                deletes: Cell::new(0),
            }
        }

        fn offline(self) -> Self {
            self.down.set(true);
            self
        }

        fn reject(status: u16, detail: &str) -> ApiError {
            ApiError::Rejected { status, detail: Some(detail.to_string()) }
        }

        fn edit(
            &self,
            activity: &str,
            f: impl FnOnce(&mut Vec<String>) -> Result<String, ApiError>,
        ) -> Result<String, ApiError> {
            let mut catalog = self.catalog.borrow_mut();
            let mut entries = catalog.entries().to_vec();
            let result = match entries.iter_mut().find(|(name, _)| name == activity) {
                Some((_, found)) => f(&mut found.participants),
                None => Err(Self::reject(404, "Activity not found")),
            };
            *catalog = Catalog::new(entries);
            result
        }
    }

    #[async_trait(?Send)]
    impl RosterApi for FakeServer {
        async fn fetch_activities(&self) -> Result<Catalog, ApiError> {
            self.gets.set(self.gets.get() + 1);
            if self.down.get() {
                return Err(ApiError::Network("connection refused".to_string()));
            }
            Ok(self.catalog.borrow().clone())
        }

        async fn signup(&self, activity: &str, email: &str) -> Result<String, ApiError> {
            self.posts.set(self.posts.get() + 1);
            if self.down.get() {
                return Err(ApiError::Network("connection refused".to_string()));
            }
            self.edit(activity, |participants| {
                if participants.iter().any(|p| p == email) {
                    return Err(Self::reject(400, "Student is already signed up for an activity"));
                }
                participants.push(email.to_string());
                Ok(format!("Signed up {} for {}", email, activity))
            })
        }

        async fn unregister(&self, activity: &str, email: &str) -> Result<String, ApiError> {
            self.deletes.set(self.deletes.get() + 1);
            if self.down.get() {
                return Err(ApiError::Network("connection refused".to_string()));
            }
            self.edit(activity, |participants| {
                let before = participants.len();
                participants.retain(|p| p != email);
                if participants.len() == before {
                    return Err(Self::reject(400, "Student is not registered for this activity"));
                }
                Ok(format!("Unregistered {} from {}", email, activity))
            })
        }
    }

    #[derive(Debug, Clone, PartialEq)]
    enum Event {
        Roster(RosterView),
        Options(Vec<String>),
        Status(StatusMessage),
        ResetForm,
    }

    #[derive(Default)]
    struct Recorder {
        events: RefCell<Vec<Event>>,
    }

    impl Recorder {
        fn events(&self) -> Vec<Event> {
            self.events.borrow().clone()
        }

        fn statuses(&self) -> Vec<StatusMessage> {
            self.events()
                .into_iter()
                .filter_map(|e| match e {
                    Event::Status(s) => Some(s),
                    _ => None,
                })
                .collect()
        }

        fn last_roster(&self) -> Option<RosterView> {
            self.events().into_iter().rev().find_map(|e| match e {
                Event::Roster(v) => Some(v),
                _ => None,
            })
        }
    }

    impl RosterSink for Recorder {
        fn render_roster(&self, view: RosterView) {
            self.events.borrow_mut().push(Event::Roster(view));
        }

        fn set_activity_options(&self, names: Vec<String>) {
            self.events.borrow_mut().push(Event::Options(names));
        }

        fn show_status(&self, message: StatusMessage) {
            self.events.borrow_mut().push(Event::Status(message));
        }

        fn reset_form(&self) {
            self.events.borrow_mut().push(Event::ResetForm);
        }
    }

    #[test]
    fn test_fetch_renders_catalog() {
        let server = FakeServer::new();
        let sink = Recorder::default();

        block_on(fetch_and_render_activities(&server, &sink));

        assert_eq!(server.gets.get(), 1);
        match sink.last_roster() {
            Some(RosterView::Loaded(catalog)) => {
                assert_eq!(catalog.names(), vec!["Chess Club", "Gym Class"]);
                assert_eq!(catalog.get("Chess Club").unwrap().spots_left(), 10);
            }
            other => panic!("expected loaded roster, got {:?}", other),
        }
    }

    #[test]
    fn test_fetch_failure_renders_fallback_and_keeps_options() {
        let server = FakeServer::new();
        let sink = Recorder::default();

        block_on(populate_activity_selector(&server, &sink));
        server.down.set(true);
        block_on(fetch_and_render_activities(&server, &sink));

        assert_eq!(
            sink.events(),
            vec![
                Event::Options(vec!["Chess Club".to_string(), "Gym Class".to_string()]),
                Event::Roster(RosterView::Failed),
            ]
        );
    }

    #[test]
    fn test_selector_failure_sets_nothing() {
        let server = FakeServer::new().offline();
        let sink = Recorder::default();

        block_on(populate_activity_selector(&server, &sink));

        assert!(sink.events().is_empty());
    }

    #[test]
    fn test_signup_success_shows_message_resets_and_refreshes() {
        let server = FakeServer::new();
        let sink = Recorder::default();

        block_on(submit_signup(&server, &sink, "new@mergington.edu", "Gym Class"));

        let events = sink.events();
        assert_eq!(
            events[0],
            Event::Status(StatusMessage::success("Signed up new@mergington.edu for Gym Class"))
        );
        assert_eq!(events[1], Event::ResetForm);
        assert_eq!(server.gets.get(), 1);
        match &events[2] {
            Event::Roster(RosterView::Loaded(catalog)) => {
                let gym = catalog.get("Gym Class").unwrap();
                assert_eq!(gym.participants, vec!["new@mergington.edu"]);
                assert_eq!(gym.spots_left(), 29);
            }
            other => panic!("expected refreshed roster, got {:?}", other),
        }
        assert!(!events.iter().any(|e| matches!(e, Event::Options(_))));
    }

    #[test]
    fn test_signup_rejection_shows_detail_without_refresh() {
        let server = FakeServer::new();
        let sink = Recorder::default();

        block_on(submit_signup(&server, &sink, "michael@mergington.edu", "Chess Club"));

        assert_eq!(server.posts.get(), 1);
        assert_eq!(server.gets.get(), 0);
        assert_eq!(
            sink.events(),
            vec![Event::Status(StatusMessage::error(
                "Student is already signed up for an activity"
            ))]
        );
    }

    #[test]
    fn test_signup_unknown_activity_surfaces_not_found() {
        let server = FakeServer::new();
        let sink = Recorder::default();

        block_on(submit_signup(&server, &sink, "a@mergington.edu", "Nonexistent Activity"));

        let statuses = sink.statuses();
        assert_eq!(statuses, vec![StatusMessage::error("Activity not found")]);
        assert_eq!(statuses[0].kind, StatusKind::Error);
    }

    #[test]
    fn test_signup_transport_failure_uses_fallback() {
        let server = FakeServer::new().offline();
        let sink = Recorder::default();

        block_on(submit_signup(&server, &sink, "a@mergington.edu", "Chess Club"));

        assert_eq!(server.gets.get(), 0);
        assert_eq!(sink.events(), vec![Event::Status(StatusMessage::error(SIGNUP_FAILED_TEXT))]);
    }

    #[test]
    fn test_rejection_without_detail_uses_generic_text() {
        let err = ApiError::Rejected { status: 500, detail: None };
        assert_eq!(
            failure_status(&err, SIGNUP_FAILED_TEXT),
            StatusMessage::error(GENERIC_ERROR_TEXT)
        );

        let err = ApiError::Parse("expected value".to_string());
        assert_eq!(
            failure_status(&err, UNREGISTER_FAILED_TEXT),
            StatusMessage::error(UNREGISTER_FAILED_TEXT)
        );
    }

    #[test]
    fn test_unregister_declined_sends_nothing() {
        let server = FakeServer::new();
        let sink = Recorder::default();
        let asked = RefCell::new(None);

        block_on(unregister_participant(
            &server,
            &sink,
            |prompt: &str| {
                *asked.borrow_mut() = Some(prompt.to_string());
                false
            },
            "Chess Club",
            "michael@mergington.edu",
        ));

        assert_eq!(
            asked.borrow().as_deref(),
            Some("Are you sure you want to unregister michael@mergington.edu from Chess Club?")
        );
        assert_eq!(server.deletes.get(), 0);
        assert_eq!(server.gets.get(), 0);
        assert!(sink.events().is_empty());
    }

    #[test]
    fn test_unregister_success_refreshes_once_without_participant() {
        let server = FakeServer::new();
        let sink = Recorder::default();

        block_on(unregister_participant(
            &server,
            &sink,
            |_: &str| true,
            "Chess Club",
            "michael@mergington.edu",
        ));

        assert_eq!(server.deletes.get(), 1);
        assert_eq!(server.gets.get(), 1);
        assert_eq!(
            sink.statuses(),
            vec![StatusMessage::success("Unregistered michael@mergington.edu from Chess Club")]
        );
        match sink.last_roster() {
            Some(RosterView::Loaded(catalog)) => {
                let chess = catalog.get("Chess Club").unwrap();
                assert!(!chess.participants.iter().any(|p| p == "michael@mergington.edu"));
                assert_eq!(chess.participants, vec!["daniel@mergington.edu"]);
            }
            other => panic!("expected refreshed roster, got {:?}", other),
        }
        assert!(!sink.events().contains(&Event::ResetForm));
    }

    #[test]
    fn test_unregister_not_registered_shows_detail() {
        let server = FakeServer::new();
        let sink = Recorder::default();

        block_on(unregister_participant(
            &server,
            &sink,
            |_: &str| true,
            "Gym Class",
            "ghost@mergington.edu",
        ));

        assert_eq!(server.gets.get(), 0);
        assert_eq!(
            sink.statuses(),
            vec![StatusMessage::error("Student is not registered for this activity")]
        );
    }

    #[test]
    fn test_unregister_transport_failure_uses_fallback() {
        let server = FakeServer::new().offline();
        let sink = Recorder::default();

        block_on(unregister_participant(
            &server,
            &sink,
            |_: &str| true,
            "Chess Club",
            "michael@mergington.edu",
        ));

        assert_eq!(sink.statuses(), vec![StatusMessage::error(UNREGISTER_FAILED_TEXT)]);
    }

    #[test]
    fn test_failed_action_can_be_retried() {
        let server = FakeServer::new().offline();
        let sink = Recorder::default();

        block_on(submit_signup(&server, &sink, "retry@mergington.edu", "Gym Class"));
        server.down.set(false);
        block_on(submit_signup(&server, &sink, "retry@mergington.edu", "Gym Class"));

        assert_eq!(server.posts.get(), 2);
        assert_eq!(
            sink.statuses(),
            vec![
                StatusMessage::error(SIGNUP_FAILED_TEXT),
                StatusMessage::success("Signed up retry@mergington.edu for Gym Class"),
            ]
        );
    }
}
