//! Technical chapter model.
//!
//! Chapters embed their own copies of project, event and team data; nothing
//! here references another collection by id.

use serde::{Deserialize, Serialize};

/// A project showcased on a chapter page.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChapterProject {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

/// An event listed on a chapter page.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChapterEvent {
    pub title: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub description: String,
}

/// A chapter office bearer.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChapterTeamMember {
    pub name: String,
    #[serde(default)]
    pub position: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// A technical society chapter, keyed by its slug.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Chapter {
    pub id: String,
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub projects: Vec<ChapterProject>,
    #[serde(default)]
    pub events: Vec<ChapterEvent>,
    #[serde(default)]
    pub team: Vec<ChapterTeamMember>,
}

/// Request body for creating or updating a chapter.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChapterRequest {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub projects: Option<Vec<ChapterProject>>,
    #[serde(default)]
    pub events: Option<Vec<ChapterEvent>>,
    #[serde(default)]
    pub team: Option<Vec<ChapterTeamMember>>,
}

impl ChapterRequest {
    pub fn into_chapter(self) -> Chapter {
        Chapter {
            id: self.id.map(|id| id.trim().to_string()).unwrap_or_default(),
            name: self.name.unwrap_or_default(),
            description: self.description.unwrap_or_default(),
            image: self.image.unwrap_or_default(),
            projects: self.projects.unwrap_or_default(),
            events: self.events.unwrap_or_default(),
            team: self.team.unwrap_or_default(),
        }
    }

    pub fn merge_into(self, existing: &Chapter) -> Chapter {
        Chapter {
            id: existing.id.clone(),
            name: self.name.unwrap_or_else(|| existing.name.clone()),
            description: self
                .description
                .unwrap_or_else(|| existing.description.clone()),
            image: self.image.unwrap_or_else(|| existing.image.clone()),
            projects: self.projects.unwrap_or_else(|| existing.projects.clone()),
            events: self.events.unwrap_or_else(|| existing.events.clone()),
            team: self.team.unwrap_or_else(|| existing.team.clone()),
        }
    }
}

impl Chapter {
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.id.trim().is_empty() {
            missing.push("id");
        }
        if self.name.trim().is_empty() {
            missing.push("name");
        }
        if self.description.trim().is_empty() {
            missing.push("description");
        }
        missing
    }
}
