//! Admin Commands for Photos
//!
//! Plain CRUD for the photos admin screen. Upload/storage of the image
//! bytes belongs to the hosting platform; only the stored URL passes
//! through here.

use crate::domain::Photo;
use crate::repository::Repository;
use crate::AppState;

/// Create a new photo entry
pub async fn create_photo(
    state: &AppState,
    image_url: String,
    title: Option<String>,
    caption: Option<String>,
) -> Result<Photo, String> {
    let mut photo = Photo::new(0, image_url);
    photo.title = title;
    photo.caption = caption;

    state.photos.create(&photo).await.map_err(|e| e.to_string())
}

/// List photos, newest first
pub async fn list_photos(state: &AppState) -> Result<Vec<Photo>, String> {
    state.photos.list().await.map_err(|e| e.to_string())
}

/// Get photo by ID
pub async fn get_photo(state: &AppState, id: u32) -> Result<Option<Photo>, String> {
    state.photos.find_by_id(id).await.map_err(|e| e.to_string())
}

/// Update photo fields; unspecified fields keep their value
pub async fn update_photo(
    state: &AppState,
    id: u32,
    image_url: Option<String>,
    title: Option<String>,
    caption: Option<String>,
) -> Result<Photo, String> {
    let existing = state
        .photos
        .find_by_id(id)
        .await
        .map_err(|e| e.to_string())?
        .ok_or_else(|| format!("Photo {} not found", id))?;

    let updated = Photo {
        id: existing.id,
        image_url: image_url.unwrap_or(existing.image_url),
        title: title.or(existing.title),
        caption: caption.or(existing.caption),
        created_at: existing.created_at,
    };

    state.photos.update(&updated).await.map_err(|e| e.to_string())
}

/// Delete photo
pub async fn delete_photo(state: &AppState, id: u32) -> Result<(), String> {
    state.photos.delete(id).await.map_err(|e| e.to_string())
}
