//! Event model for upcoming and past branch events.

use serde::{Deserialize, Serialize};

/// A branch event. Upcoming and past events share this shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub date: String,
    #[serde(default)]
    pub time: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub registration_required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub registration_link: Option<String>,
    #[serde(default)]
    pub featured: bool,
}

/// Both event lists, as returned by `GET /api/events`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventsOverview {
    pub upcoming: Vec<Event>,
    pub past: Vec<Event>,
}

/// Request body for creating or updating an event.
///
/// Every field is optional so missing required fields can be reported
/// together instead of failing deserialization on the first one.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventRequest {
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub time: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub registration_required: Option<bool>,
    #[serde(default)]
    pub registration_link: Option<String>,
    #[serde(default)]
    pub featured: Option<bool>,
}

impl EventRequest {
    /// Build a new event with the given id.
    pub fn into_event(self, id: u64) -> Event {
        Event {
            id,
            title: self.title.unwrap_or_default(),
            description: self.description.unwrap_or_default(),
            date: self.date.unwrap_or_default(),
            time: self.time.unwrap_or_default(),
            location: self.location.unwrap_or_default(),
            category: self.category.unwrap_or_default(),
            image: self.image.unwrap_or_default(),
            registration_required: self.registration_required.unwrap_or(false),
            registration_link: self.registration_link,
            featured: self.featured.unwrap_or(false),
        }
    }

    /// Overlay the provided fields onto an existing event.
    pub fn merge_into(self, existing: &Event) -> Event {
        Event {
            id: existing.id,
            title: self.title.unwrap_or_else(|| existing.title.clone()),
            description: self
                .description
                .unwrap_or_else(|| existing.description.clone()),
            date: self.date.unwrap_or_else(|| existing.date.clone()),
            time: self.time.unwrap_or_else(|| existing.time.clone()),
            location: self.location.unwrap_or_else(|| existing.location.clone()),
            category: self.category.unwrap_or_else(|| existing.category.clone()),
            image: self.image.unwrap_or_else(|| existing.image.clone()),
            registration_required: self
                .registration_required
                .unwrap_or(existing.registration_required),
            registration_link: self
                .registration_link
                .or_else(|| existing.registration_link.clone()),
            featured: self.featured.unwrap_or(existing.featured),
        }
    }
}

impl Event {
    /// Names of required fields that are blank.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.title.trim().is_empty() {
            missing.push("title");
        }
        if self.date.trim().is_empty() {
            missing.push("date");
        }
        if self.description.trim().is_empty() {
            missing.push("description");
        }
        missing
    }
}
