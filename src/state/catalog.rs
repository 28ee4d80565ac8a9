//! Activity Catalog
//!
//! Wire model for `GET /activities` and the derived values the roster renders.

use serde::Deserialize;
use serde_json::{Map, Value};

/// Label of the empty option every activity selector starts with
pub const SELECT_PLACEHOLDER: &str = "Select an activity";

/// A single activity as returned by the API
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Activity {
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    #[serde(default)]
    pub participants: Vec<String>,
}

impl Activity {
    /// Remaining capacity. Negative when the server reports an overbooked
    /// activity.
    pub fn spots_left(&self) -> i64 {
        i64::from(self.max_participants) - self.participants.len() as i64
    }
}

/// All activities keyed by name, in the order the server sent them
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(try_from = "Map<String, Value>")]
pub struct Catalog {
    entries: Vec<(String, Activity)>,
}

impl TryFrom<Map<String, Value>> for Catalog {
    type Error = serde_json::Error;

    fn try_from(map: Map<String, Value>) -> Result<Self, Self::Error> {
        let entries = map
            .into_iter()
            .map(|(name, value)| Ok((name, serde_json::from_value(value)?)))
            .collect::<Result<Vec<_>, serde_json::Error>>()?;
        Ok(Self { entries })
    }
}

impl Catalog {
    pub fn entries(&self) -> &[(String, Activity)] {
        &self.entries
    }

    pub fn names(&self) -> Vec<String> {
        self.entries.iter().map(|(name, _)| name.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

/// An `<option>` of the activity selector
#[derive(Clone, Debug, PartialEq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

/// Selector contents: the empty placeholder followed by one option per
/// activity name.
pub fn selector_options(names: &[String]) -> Vec<SelectOption> {
    std::iter::once(SelectOption {
        value: String::new(),
        label: SELECT_PLACEHOLDER.to_string(),
    })
    .chain(names.iter().map(|name| SelectOption {
        value: name.clone(),
        label: name.clone(),
    }))
    .collect()
}

/// What the roster region currently shows
#[derive(Clone, Debug, Default, PartialEq)]
pub enum RosterView {
    /// Initial fetch still in flight
    #[default]
    Loading,
    Loaded(Catalog),
    /// Last fetch failed; the fallback text is shown instead of the list
    Failed,
}

#[cfg(test)]
impl Catalog {
    pub fn new(entries: Vec<(String, Activity)>) -> Self {
        Self { entries }
    }

    pub fn get(&self, name: &str) -> Option<&Activity> {
        self.entries
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, activity)| activity)
    }
}
