//! Link library entry model.

use serde::{Deserialize, Serialize};

/// An entry in the resources link library.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkResource {
    pub id: String,
    pub title: String,
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub category: String,
    pub link: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub featured: bool,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkResourceRequest {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
    #[serde(default)]
    pub featured: Option<bool>,
}

impl LinkResourceRequest {
    pub fn into_resource(self, id: String) -> LinkResource {
        LinkResource {
            id,
            title: self.title.unwrap_or_default(),
            kind: self.kind.unwrap_or_default(),
            category: self.category.unwrap_or_default(),
            link: self.link.unwrap_or_default(),
            description: self.description.unwrap_or_default(),
            tags: self.tags.unwrap_or_default(),
            featured: self.featured.unwrap_or(false),
        }
    }

    pub fn merge_into(self, existing: &LinkResource) -> LinkResource {
        LinkResource {
            id: existing.id.clone(),
            title: self.title.unwrap_or_else(|| existing.title.clone()),
            kind: self.kind.unwrap_or_else(|| existing.kind.clone()),
            category: self.category.unwrap_or_else(|| existing.category.clone()),
            link: self.link.unwrap_or_else(|| existing.link.clone()),
            description: self
                .description
                .unwrap_or_else(|| existing.description.clone()),
            tags: self.tags.unwrap_or_else(|| existing.tags.clone()),
            featured: self.featured.unwrap_or(existing.featured),
        }
    }
}

impl LinkResource {
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.title.trim().is_empty() {
            missing.push("title");
        }
        if self.link.trim().is_empty() {
            missing.push("link");
        }
        missing
    }
}
