//! Image upload endpoints.
//!
//! Files land under `<public_dir>/images/<area>/<folder>/` with a
//! timestamp-prefixed name and are served back by the static file fallback.

use std::io;
use std::path::Path;

use axum::extract::{Multipart, State};
use chrono::Utc;
use serde::Serialize;
use tokio::fs::OpenOptions;
use tokio::io::AsyncWriteExt;

use super::{created, ApiResult};
use crate::errors::AppError;
use crate::AppState;

/// Where an upload endpoint stores its files.
struct UploadTarget {
    area: &'static str,
    /// Multipart field naming the subfolder
    folder_field: &'static str,
    default_folder: &'static str,
    /// Restricts the subfolder when set
    allowed_folders: Option<&'static [&'static str]>,
}

const GALLERY_TARGET: UploadTarget = UploadTarget {
    area: "gallery",
    folder_field: "category",
    default_folder: "general",
    allowed_folders: None,
};

const TEAM_TARGET: UploadTarget = UploadTarget {
    area: "team",
    folder_field: "type",
    default_folder: "members",
    allowed_folders: Some(&["members", "faculty"]),
};

/// Response for a stored upload.
#[derive(Debug, Serialize)]
pub struct UploadedFile {
    /// Public URL path of the stored file
    pub path: String,
    pub filename: String,
    pub size: usize,
}

/// POST /api/upload/gallery - Store a gallery image under its category.
pub async fn upload_gallery_image(
    State(state): State<AppState>,
    multipart: Multipart,
) -> ApiResult<UploadedFile> {
    let stored = store_upload(&state.config.public_dir, &GALLERY_TARGET, multipart).await?;
    created(stored)
}

/// POST /api/upload/team - Store a member or faculty photo.
pub async fn upload_team_image(
    State(state): State<AppState>,
    multipart: Multipart,
) -> ApiResult<UploadedFile> {
    let stored = store_upload(&state.config.public_dir, &TEAM_TARGET, multipart).await?;
    created(stored)
}

async fn store_upload(
    public_dir: &Path,
    target: &UploadTarget,
    mut multipart: Multipart,
) -> Result<UploadedFile, AppError> {
    let mut folder: Option<String> = None;
    let mut file: Option<(String, Vec<u8>)> = None;

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some("file") => {
                if let Some(content_type) = field.content_type() {
                    if !content_type.starts_with("image/") {
                        return Err(AppError::Validation(format!(
                            "Only image uploads are accepted, got {}",
                            content_type
                        )));
                    }
                }
                let original = field.file_name().unwrap_or("upload").to_string();
                let data = field.bytes().await?;
                file = Some((original, data.to_vec()));
            }
            Some(name) if name == target.folder_field => {
                folder = Some(field.text().await?);
            }
            _ => {}
        }
    }

    let Some((original, data)) = file else {
        return Err(AppError::missing_fields(&["file"]));
    };
    if data.is_empty() {
        return Err(AppError::Validation("Uploaded file is empty".to_string()));
    }

    let folder = match folder.as_deref().map(sanitize_segment) {
        Some(f) if !f.is_empty() => f,
        _ => target.default_folder.to_string(),
    };
    if let Some(allowed) = target.allowed_folders {
        if !allowed.contains(&folder.as_str()) {
            return Err(AppError::Validation(format!(
                "{} must be one of: {}",
                target.folder_field,
                allowed.join(", ")
            )));
        }
    }

    let dir = public_dir.join("images").join(target.area).join(&folder);
    tokio::fs::create_dir_all(&dir).await?;
    let filename = write_new_file(
        &dir,
        Utc::now().timestamp_millis(),
        &sanitize_filename(&original),
        &data,
    )
    .await?;

    let path = format!("/images/{}/{}/{}", target.area, folder, filename);
    tracing::info!("Stored upload {} ({} bytes)", path, data.len());

    Ok(UploadedFile {
        path,
        filename,
        size: data.len(),
    })
}

/// Write `data` to `<dir>/<stamp>-<name>`, moving the stamp forward until
/// the name is free. Returns the file name used.
async fn write_new_file(
    dir: &Path,
    mut stamp: i64,
    name: &str,
    data: &[u8],
) -> Result<String, AppError> {
    loop {
        let filename = format!("{}-{}", stamp, name);
        let opened = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(dir.join(&filename))
            .await;
        match opened {
            Ok(mut file) => {
                file.write_all(data).await?;
                file.flush().await?;
                return Ok(filename);
            }
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => stamp += 1,
            Err(e) => return Err(e.into()),
        }
    }
}

/// Lowercase folder name limited to `[a-z0-9_-]`; spaces become dashes.
fn sanitize_segment(raw: &str) -> String {
    raw.trim()
        .to_ascii_lowercase()
        .chars()
        .filter_map(|c| match c {
            'a'..='z' | '0'..='9' | '-' | '_' => Some(c),
            ' ' => Some('-'),
            _ => None,
        })
        .collect()
}

/// Base name only, limited to `[A-Za-z0-9._-]`, without leading dots.
fn sanitize_filename(raw: &str) -> String {
    let base = raw.rsplit(['/', '\\']).next().unwrap_or_default();
    let cleaned: String = base
        .chars()
        .map(|c| match c {
            'A'..='Z' | 'a'..='z' | '0'..='9' | '.' | '-' | '_' => c,
            _ => '_',
        })
        .collect();
    let cleaned = cleaned.trim_start_matches('.');

    if cleaned.is_empty() {
        "upload".to_string()
    } else {
        cleaned.to_string()
    }
}
