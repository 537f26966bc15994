//! Gallery item model.

use serde::{Deserialize, Serialize};

/// A photo album shown in the gallery.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GalleryItem {
    pub id: String,
    pub title: String,
    pub category: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub thumbnail: String,
}

/// Request body for creating or updating a gallery item.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GalleryItemRequest {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub images: Option<Vec<String>>,
    #[serde(default)]
    pub thumbnail: Option<String>,
}

/// Pick the thumbnail: explicit value, then the first image, then the fallback.
fn resolve_thumbnail(explicit: Option<String>, images: &[String], fallback: &str) -> String {
    explicit
        .filter(|t| !t.trim().is_empty())
        .or_else(|| images.first().cloned())
        .unwrap_or_else(|| fallback.to_string())
}

impl GalleryItemRequest {
    pub fn into_item(self, id: String) -> GalleryItem {
        let images = self.images.unwrap_or_default();
        let thumbnail = resolve_thumbnail(self.thumbnail, &images, "");
        GalleryItem {
            id,
            title: self.title.unwrap_or_default(),
            category: self.category.unwrap_or_default(),
            date: self.date.unwrap_or_default(),
            location: self.location.unwrap_or_default(),
            description: self.description.unwrap_or_default(),
            images,
            thumbnail,
        }
    }

    /// Overlay onto an existing item. A body without `images` clears the
    /// image list, and the thumbnail falls back to the existing one.
    pub fn merge_into(self, existing: &GalleryItem) -> GalleryItem {
        let images = self.images.unwrap_or_default();
        let thumbnail = resolve_thumbnail(self.thumbnail, &images, &existing.thumbnail);
        GalleryItem {
            id: existing.id.clone(),
            title: self.title.unwrap_or_else(|| existing.title.clone()),
            category: self.category.unwrap_or_else(|| existing.category.clone()),
            date: self.date.unwrap_or_else(|| existing.date.clone()),
            location: self.location.unwrap_or_else(|| existing.location.clone()),
            description: self
                .description
                .unwrap_or_else(|| existing.description.clone()),
            images,
            thumbnail,
        }
    }
}

impl GalleryItem {
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.title.trim().is_empty() {
            missing.push("title");
        }
        if self.category.trim().is_empty() {
            missing.push("category");
        }
        missing
    }
}
