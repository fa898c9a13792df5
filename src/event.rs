use serde::Deserialize;
use std::fmt;

/// Training event, as returned by the service under test
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainingEvent {
    /// Event id
    pub id: i64,

    /// Event title
    pub title: String,

    /// Facility the event is restricted to, absent or `null` when it has none
    #[serde(default)]
    pub facility_id: Option<i64>,
}

impl TrainingEvent {
    /// Decodes a JSON array of events
    pub fn list_from_slice(body: &[u8]) -> crate::Result<Vec<Self>> {
        Ok(serde_json::from_slice(body)?)
    }
}

/// Prints `- ID: 1, Title: A, Facility: None`
impl fmt::Display for TrainingEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "- ID: {}, Title: {}, Facility: ", self.id, self.title)?;

        match self.facility_id {
            Some(facility_id) => write!(f, "{}", facility_id),
            None => f.write_str("None"),
        }
    }
}
