//! Blog post model.

use serde::{Deserialize, Serialize};

/// A blog post. `content` holds HTML rendered as-is by the site.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub excerpt: String,
    pub content: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub featured: bool,
    #[serde(default = "default_published")]
    pub published: bool,
}

fn default_published() -> bool {
    true
}

/// Request body for creating or updating a blog post.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPostRequest {
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub excerpt: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub featured: Option<bool>,
    #[serde(default)]
    pub published: Option<bool>,
}

impl BlogPostRequest {
    pub fn into_post(self, id: u64, today: String) -> BlogPost {
        BlogPost {
            id,
            title: self.title.unwrap_or_default(),
            excerpt: self.excerpt.unwrap_or_default(),
            content: self.content.unwrap_or_default(),
            author: self.author.unwrap_or_default(),
            date: self.date.filter(|d| !d.trim().is_empty()).unwrap_or(today),
            category: self.category.unwrap_or_default(),
            image: self.image.unwrap_or_default(),
            featured: self.featured.unwrap_or(false),
            published: self.published.unwrap_or(true),
        }
    }

    pub fn merge_into(self, existing: &BlogPost) -> BlogPost {
        BlogPost {
            id: existing.id,
            title: self.title.unwrap_or_else(|| existing.title.clone()),
            excerpt: self.excerpt.unwrap_or_else(|| existing.excerpt.clone()),
            content: self.content.unwrap_or_else(|| existing.content.clone()),
            author: self.author.unwrap_or_else(|| existing.author.clone()),
            date: self.date.unwrap_or_else(|| existing.date.clone()),
            category: self.category.unwrap_or_else(|| existing.category.clone()),
            image: self.image.unwrap_or_else(|| existing.image.clone()),
            featured: self.featured.unwrap_or(existing.featured),
            published: self.published.unwrap_or(existing.published),
        }
    }
}

impl BlogPost {
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.title.trim().is_empty() {
            missing.push("title");
        }
        if self.content.trim().is_empty() {
            missing.push("content");
        }
        missing
    }
}
