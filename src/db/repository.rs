//! Content repository for CRUD operations.
//!
//! One JSON file per content type under the data directory. Files are seeded
//! lazily on first read.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use chrono::Utc;

use super::{next_numeric_id, seed, timestamp_id, Collection, JsonFile, Record};
use crate::errors::{ensure_present, AppError};
use crate::models::{
    missing_person_fields, BlogPost, BlogPostRequest, Chapter, ChapterRequest, ContactInfo, Event,
    EventRequest, EventsOverview, Faculty, GalleryItem, GalleryItemRequest, LinkResource,
    LinkResourceRequest, PersonRequest, SiteSettings, TeamData, TeamInitResult, TeamMember,
};

pub const UPCOMING_EVENTS_FILE: &str = "events.json";
pub const PAST_EVENTS_FILE: &str = "past-events.json";
pub const CHAPTERS_FILE: &str = "chapters.json";
pub const BLOGS_FILE: &str = "blogs.json";
pub const GALLERY_FILE: &str = "gallery.json";
pub const TEAM_FILE: &str = "team.json";
pub const RESOURCES_FILE: &str = "resources.json";
pub const SETTINGS_FILE: &str = "settings.json";
pub const CONTACT_FILE: &str = "contact.json";

impl Record for Event {
    type Id = u64;

    fn id(&self) -> &u64 {
        &self.id
    }
}

impl Record for BlogPost {
    type Id = u64;

    fn id(&self) -> &u64 {
        &self.id
    }
}

impl Record for GalleryItem {
    type Id = str;

    fn id(&self) -> &str {
        &self.id
    }
}

impl Record for LinkResource {
    type Id = str;

    fn id(&self) -> &str {
        &self.id
    }
}

/// Content repository for all data operations.
pub struct Repository {
    data_dir: PathBuf,
    upcoming_events: Collection<Event>,
    past_events: Collection<Event>,
    chapters: JsonFile<BTreeMap<String, Chapter>>,
    blogs: Collection<BlogPost>,
    gallery: Collection<GalleryItem>,
    team: JsonFile<TeamData>,
    resources: Collection<LinkResource>,
    settings: JsonFile<SiteSettings>,
    contact: JsonFile<ContactInfo>,
}

impl Repository {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        let data_dir = data_dir.into();
        let path = |name: &str| data_dir.join(name);

        Self {
            upcoming_events: Collection::new(
                path(UPCOMING_EVENTS_FILE),
                seed::upcoming_events,
                "Event",
            ),
            past_events: Collection::new(path(PAST_EVENTS_FILE), seed::past_events, "Event"),
            chapters: JsonFile::new(path(CHAPTERS_FILE), seed::chapters),
            blogs: Collection::new(path(BLOGS_FILE), seed::blog_posts, "Blog post"),
            gallery: Collection::new(path(GALLERY_FILE), seed::gallery, "Gallery item"),
            team: JsonFile::new(path(TEAM_FILE), seed::team),
            resources: Collection::new(path(RESOURCES_FILE), seed::resources, "Resource"),
            settings: JsonFile::new(path(SETTINGS_FILE), seed::settings),
            contact: JsonFile::new(path(CONTACT_FILE), seed::contact),
            data_dir,
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    // ==================== EVENT OPERATIONS ====================

    /// List upcoming and past events.
    pub async fn list_events(&self) -> Result<EventsOverview, AppError> {
        Ok(EventsOverview {
            upcoming: self.upcoming_events.list().await?,
            past: self.past_events.list().await?,
        })
    }

    /// Find an event in either list, upcoming first.
    pub async fn get_event(&self, id: u64) -> Result<Option<Event>, AppError> {
        if let Some(event) = self.upcoming_events.get(&id).await? {
            return Ok(Some(event));
        }
        self.past_events.get(&id).await
    }

    /// Create an upcoming event. The id is one more than the largest id in
    /// either list, so moving events to past never collides.
    pub async fn create_event(&self, mut event: Event) -> Result<Event, AppError> {
        ensure_present(&event.missing_fields())?;

        let upcoming = self.upcoming_events.file().lock().await;
        let past = self.past_events.file().lock().await;

        let mut items = upcoming.load().await?;
        let past_items = past.load().await?;

        event.id = next_numeric_id(items.iter().chain(past_items.iter()).map(|e| e.id))?;
        items.push(event.clone());
        upcoming.store(&items).await?;

        tracing::info!("Created event {} ({})", event.id, event.title);
        Ok(event)
    }

    /// Merge changes into an event wherever it lives.
    pub async fn update_event(&self, id: u64, request: EventRequest) -> Result<Event, AppError> {
        let apply = |existing: &Event| -> Result<Event, AppError> {
            let updated = request.clone().merge_into(existing);
            ensure_present(&updated.missing_fields())?;
            Ok(updated)
        };

        match self.upcoming_events.modify(&id, apply).await {
            Err(AppError::NotFound(_)) => self.past_events.modify(&id, apply).await,
            other => other,
        }
    }

    /// Delete an event from whichever list holds it.
    pub async fn delete_event(&self, id: u64) -> Result<bool, AppError> {
        if self.upcoming_events.remove(&id).await? {
            return Ok(true);
        }
        self.past_events.remove(&id).await
    }

    /// Move an upcoming event into the past list. Locks upcoming before
    /// past, the same order as [`Repository::create_event`].
    pub async fn move_event_to_past(&self, id: u64) -> Result<Event, AppError> {
        let upcoming = self.upcoming_events.file().lock().await;

        let mut upcoming_items = upcoming.load().await?;
        let index = upcoming_items
            .iter()
            .position(|e| e.id == id)
            .ok_or_else(|| AppError::NotFound(format!("Upcoming event {} not found", id)))?;
        let event = upcoming_items.remove(index);

        // Write past first: a failure in between leaves a duplicate, not a loss.
        self.past_events.upsert(event.clone()).await?;
        upcoming.store(&upcoming_items).await?;

        tracing::info!("Moved event {} to past", id);
        Ok(event)
    }

    // ==================== CHAPTER OPERATIONS ====================

    /// All chapters keyed by id.
    pub async fn list_chapters(&self) -> Result<BTreeMap<String, Chapter>, AppError> {
        self.chapters.read().await
    }

    pub async fn get_chapter(&self, id: &str) -> Result<Option<Chapter>, AppError> {
        Ok(self.chapters.read().await?.remove(id))
    }

    pub async fn create_chapter(&self, chapter: Chapter) -> Result<Chapter, AppError> {
        ensure_present(&chapter.missing_fields())?;

        self.chapters
            .update(|chapters| {
                if chapters.contains_key(&chapter.id) {
                    return Err(AppError::Conflict(format!(
                        "Chapter {} already exists",
                        chapter.id
                    )));
                }
                chapters.insert(chapter.id.clone(), chapter.clone());
                Ok(chapter)
            })
            .await
    }

    pub async fn update_chapter(
        &self,
        id: &str,
        request: ChapterRequest,
    ) -> Result<Chapter, AppError> {
        self.chapters
            .update(|chapters| {
                let slot = chapters
                    .get_mut(id)
                    .ok_or_else(|| AppError::NotFound(format!("Chapter {} not found", id)))?;
                let updated = request.merge_into(slot);
                ensure_present(&updated.missing_fields())?;
                *slot = updated.clone();
                Ok(updated)
            })
            .await
    }

    pub async fn delete_chapter(&self, id: &str) -> Result<bool, AppError> {
        let guard = self.chapters.lock().await;
        let mut chapters = guard.load().await?;
        if chapters.remove(id).is_none() {
            return Ok(false);
        }
        guard.store(&chapters).await?;
        Ok(true)
    }

    // ==================== BLOG OPERATIONS ====================

    pub async fn list_blog_posts(&self) -> Result<Vec<BlogPost>, AppError> {
        self.blogs.list().await
    }

    pub async fn get_blog_post(&self, id: u64) -> Result<Option<BlogPost>, AppError> {
        self.blogs.get(&id).await
    }

    pub async fn create_blog_post(&self, request: BlogPostRequest) -> Result<BlogPost, AppError> {
        let today = Utc::now().format("%Y-%m-%d").to_string();
        let draft = request.into_post(0, today);
        ensure_present(&draft.missing_fields())?;

        self.blogs
            .create(|items| {
                Ok(BlogPost {
                    id: next_numeric_id(items.iter().map(|p| p.id))?,
                    ..draft
                })
            })
            .await
    }

    pub async fn update_blog_post(
        &self,
        id: u64,
        request: BlogPostRequest,
    ) -> Result<BlogPost, AppError> {
        self.blogs
            .modify(&id, |existing| {
                let updated = request.merge_into(existing);
                ensure_present(&updated.missing_fields())?;
                Ok(updated)
            })
            .await
    }

    pub async fn delete_blog_post(&self, id: u64) -> Result<bool, AppError> {
        self.blogs.remove(&id).await
    }

    // ==================== GALLERY OPERATIONS ====================

    pub async fn list_gallery(&self) -> Result<Vec<GalleryItem>, AppError> {
        self.gallery.list().await
    }

    pub async fn get_gallery_item(&self, id: &str) -> Result<Option<GalleryItem>, AppError> {
        self.gallery.get(id).await
    }

    pub async fn create_gallery_item(
        &self,
        request: GalleryItemRequest,
    ) -> Result<GalleryItem, AppError> {
        let draft = request.into_item(String::new());
        ensure_present(&draft.missing_fields())?;
        let now = Utc::now().timestamp_millis();

        self.gallery
            .create(|items| {
                let id = timestamp_id("gallery", now, |candidate| {
                    items.iter().any(|item| item.id == candidate)
                });
                Ok(GalleryItem { id, ..draft })
            })
            .await
    }

    pub async fn update_gallery_item(
        &self,
        id: &str,
        request: GalleryItemRequest,
    ) -> Result<GalleryItem, AppError> {
        self.gallery
            .modify(id, |existing| {
                let updated = request.merge_into(existing);
                ensure_present(&updated.missing_fields())?;
                Ok(updated)
            })
            .await
    }

    pub async fn delete_gallery_item(&self, id: &str) -> Result<bool, AppError> {
        self.gallery.remove(id).await
    }

    // ==================== TEAM OPERATIONS ====================

    pub async fn get_team(&self) -> Result<TeamData, AppError> {
        self.team.read().await
    }

    /// Write the default team when the stored one has no people in it.
    pub async fn init_team(&self) -> Result<TeamInitResult, AppError> {
        let guard = self.team.lock().await;
        let current = guard.load().await?;
        if !current.is_empty() {
            return Ok(TeamInitResult {
                initialized: false,
                team: current,
            });
        }

        let team = seed::team();
        guard.store(&team).await?;
        tracing::info!("Initialized team data with defaults");
        Ok(TeamInitResult {
            initialized: true,
            team,
        })
    }

    pub async fn create_member(&self, request: PersonRequest) -> Result<TeamMember, AppError> {
        let draft = request.into_member(String::new());
        ensure_present(&missing_person_fields(&draft.name, &draft.position))?;
        let now = Utc::now().timestamp_millis();

        self.team
            .update(|team| {
                let id = timestamp_id("member", now, |candidate| {
                    team.members.iter().any(|m| m.id == candidate)
                });
                let member = TeamMember { id, ..draft };
                team.members.push(member.clone());
                Ok(member)
            })
            .await
    }

    pub async fn update_member(
        &self,
        id: &str,
        request: PersonRequest,
    ) -> Result<TeamMember, AppError> {
        self.team
            .update(|team| {
                let slot = team
                    .members
                    .iter_mut()
                    .find(|m| m.id == id)
                    .ok_or_else(|| AppError::NotFound(format!("Team member {} not found", id)))?;
                let updated = request.merge_into_member(slot);
                ensure_present(&missing_person_fields(&updated.name, &updated.position))?;
                *slot = updated.clone();
                Ok(updated)
            })
            .await
    }

    pub async fn delete_member(&self, id: &str) -> Result<bool, AppError> {
        let guard = self.team.lock().await;
        let mut team = guard.load().await?;
        let before = team.members.len();
        team.members.retain(|m| m.id != id);
        if team.members.len() == before {
            return Ok(false);
        }
        guard.store(&team).await?;
        Ok(true)
    }

    pub async fn create_faculty(&self, request: PersonRequest) -> Result<Faculty, AppError> {
        let draft = request.into_faculty(String::new());
        ensure_present(&missing_person_fields(&draft.name, &draft.position))?;
        let now = Utc::now().timestamp_millis();

        self.team
            .update(|team| {
                let id = timestamp_id("faculty", now, |candidate| {
                    team.faculty.iter().any(|f| f.id == candidate)
                });
                let faculty = Faculty { id, ..draft };
                team.faculty.push(faculty.clone());
                Ok(faculty)
            })
            .await
    }

    pub async fn update_faculty(
        &self,
        id: &str,
        request: PersonRequest,
    ) -> Result<Faculty, AppError> {
        self.team
            .update(|team| {
                let slot = team
                    .faculty
                    .iter_mut()
                    .find(|f| f.id == id)
                    .ok_or_else(|| AppError::NotFound(format!("Faculty {} not found", id)))?;
                let updated = request.merge_into_faculty(slot);
                ensure_present(&missing_person_fields(&updated.name, &updated.position))?;
                *slot = updated.clone();
                Ok(updated)
            })
            .await
    }

    pub async fn delete_faculty(&self, id: &str) -> Result<bool, AppError> {
        let guard = self.team.lock().await;
        let mut team = guard.load().await?;
        let before = team.faculty.len();
        team.faculty.retain(|f| f.id != id);
        if team.faculty.len() == before {
            return Ok(false);
        }
        guard.store(&team).await?;
        Ok(true)
    }

    // ==================== RESOURCE OPERATIONS ====================

    pub async fn list_resources(&self) -> Result<Vec<LinkResource>, AppError> {
        self.resources.list().await
    }

    pub async fn get_resource(&self, id: &str) -> Result<Option<LinkResource>, AppError> {
        self.resources.get(id).await
    }

    pub async fn create_resource(
        &self,
        request: LinkResourceRequest,
    ) -> Result<LinkResource, AppError> {
        let resource = request.into_resource(uuid::Uuid::new_v4().to_string());
        ensure_present(&resource.missing_fields())?;
        self.resources.create(|_| Ok(resource)).await
    }

    pub async fn update_resource(
        &self,
        id: &str,
        request: LinkResourceRequest,
    ) -> Result<LinkResource, AppError> {
        self.resources
            .modify(id, |existing| {
                let updated = request.merge_into(existing);
                ensure_present(&updated.missing_fields())?;
                Ok(updated)
            })
            .await
    }

    pub async fn delete_resource(&self, id: &str) -> Result<bool, AppError> {
        self.resources.remove(id).await
    }

    // ==================== SETTINGS & CONTACT ====================

    pub async fn get_settings(&self) -> Result<SiteSettings, AppError> {
        self.settings.read().await
    }

    pub async fn save_settings(&self, settings: SiteSettings) -> Result<SiteSettings, AppError> {
        ensure_present(&settings.missing_fields())?;
        self.settings.replace(&settings).await?;
        Ok(settings)
    }

    pub async fn get_contact(&self) -> Result<ContactInfo, AppError> {
        self.contact.read().await
    }

    pub async fn save_contact(&self, contact: ContactInfo) -> Result<ContactInfo, AppError> {
        ensure_present(&contact.missing_fields())?;
        self.contact.replace(&contact).await?;
        Ok(contact)
    }
}
