//! Student team and faculty advisor models.

use serde::{Deserialize, Serialize};

/// A student office bearer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamMember {
    pub id: String,
    pub name: String,
    pub position: String,
    #[serde(default)]
    pub department: String,
    #[serde(default)]
    pub image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
}

/// A faculty advisor or counsellor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Faculty {
    pub id: String,
    pub name: String,
    pub position: String,
    #[serde(default)]
    pub department: String,
    #[serde(default)]
    pub image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// Contents of `team.json`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TeamData {
    #[serde(default)]
    pub members: Vec<TeamMember>,
    #[serde(default)]
    pub faculty: Vec<Faculty>,
}

impl TeamData {
    pub fn is_empty(&self) -> bool {
        self.members.is_empty() && self.faculty.is_empty()
    }
}

/// Response of `POST /api/team/init`.
#[derive(Debug, Clone, Serialize)]
pub struct TeamInitResult {
    pub initialized: bool,
    pub team: TeamData,
}

/// Request body shared by member and faculty writes.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonRequest {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub position: Option<String>,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub linkedin: Option<String>,
    #[serde(default)]
    pub github: Option<String>,
}

impl PersonRequest {
    pub fn into_member(self, id: String) -> TeamMember {
        TeamMember {
            id,
            name: self.name.unwrap_or_default(),
            position: self.position.unwrap_or_default(),
            department: self.department.unwrap_or_default(),
            image: self.image.unwrap_or_default(),
            email: self.email,
            linkedin: self.linkedin,
            github: self.github,
        }
    }

    pub fn merge_into_member(self, existing: &TeamMember) -> TeamMember {
        TeamMember {
            id: existing.id.clone(),
            name: self.name.unwrap_or_else(|| existing.name.clone()),
            position: self.position.unwrap_or_else(|| existing.position.clone()),
            department: self
                .department
                .unwrap_or_else(|| existing.department.clone()),
            image: self.image.unwrap_or_else(|| existing.image.clone()),
            email: self.email.or_else(|| existing.email.clone()),
            linkedin: self.linkedin.or_else(|| existing.linkedin.clone()),
            github: self.github.or_else(|| existing.github.clone()),
        }
    }

    pub fn into_faculty(self, id: String) -> Faculty {
        Faculty {
            id,
            name: self.name.unwrap_or_default(),
            position: self.position.unwrap_or_default(),
            department: self.department.unwrap_or_default(),
            image: self.image.unwrap_or_default(),
            email: self.email,
        }
    }

    pub fn merge_into_faculty(self, existing: &Faculty) -> Faculty {
        Faculty {
            id: existing.id.clone(),
            name: self.name.unwrap_or_else(|| existing.name.clone()),
            position: self.position.unwrap_or_else(|| existing.position.clone()),
            department: self
                .department
                .unwrap_or_else(|| existing.department.clone()),
            image: self.image.unwrap_or_else(|| existing.image.clone()),
            email: self.email.or_else(|| existing.email.clone()),
        }
    }
}

/// Required fields for any person record.
pub fn missing_person_fields(name: &str, position: &str) -> Vec<&'static str> {
    let mut missing = Vec::new();
    if name.trim().is_empty() {
        missing.push("name");
    }
    if position.trim().is_empty() {
        missing.push("position");
    }
    missing
}
