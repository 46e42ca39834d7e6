//! Admin Commands for Social Links
//!
//! CRUD plus move-up/move-down for the social links admin screen.

use crate::domain::SocialLink;
use crate::reorder;
use crate::repository::Repository;
use crate::AppState;

/// Create a new social link (appends at the end of the order)
pub async fn create_social_link(
    state: &AppState,
    platform: String,
    url: String,
    label: Option<String>,
) -> Result<SocialLink, String> {
    let mut link = SocialLink::new(0, platform, url);
    link.label = label;

    state.social_links.create(&link).await.map_err(|e| e.to_string())
}

/// List social links in display order
pub async fn list_social_links(state: &AppState) -> Result<Vec<SocialLink>, String> {
    state.social_links.list().await.map_err(|e| e.to_string())
}

/// Get social link by ID
pub async fn get_social_link(state: &AppState, id: u32) -> Result<Option<SocialLink>, String> {
    state.social_links.find_by_id(id).await.map_err(|e| e.to_string())
}

/// Update social link fields; unspecified fields keep their value
pub async fn update_social_link(
    state: &AppState,
    id: u32,
    platform: Option<String>,
    url: Option<String>,
    label: Option<String>,
) -> Result<SocialLink, String> {
    let existing = state
        .social_links
        .find_by_id(id)
        .await
        .map_err(|e| e.to_string())?
        .ok_or_else(|| format!("Social link {} not found", id))?;

    let updated = SocialLink {
        id: existing.id,
        platform: platform.unwrap_or(existing.platform),
        url: url.unwrap_or(existing.url),
        label: label.or(existing.label),
        order_index: existing.order_index,
    };

    state.social_links.update(&updated).await.map_err(|e| e.to_string())
}

/// Delete social link
pub async fn delete_social_link(state: &AppState, id: u32) -> Result<(), String> {
    state.social_links.delete(id).await.map_err(|e| e.to_string())
}

/// Move the link at `index` up one step and return the new list
pub async fn move_social_link_up(state: &AppState, index: usize) -> Result<Vec<SocialLink>, String> {
    let items = state.social_links.list().await.map_err(|e| e.to_string())?;
    reorder::move_up(&state.social_links, &items, index)
        .await
        .map_err(|e| e.to_string())?;
    state.social_links.list().await.map_err(|e| e.to_string())
}

/// Move the link at `index` down one step and return the new list
pub async fn move_social_link_down(
    state: &AppState,
    index: usize,
) -> Result<Vec<SocialLink>, String> {
    let items = state.social_links.list().await.map_err(|e| e.to_string())?;
    reorder::move_down(&state.social_links, &items, index)
        .await
        .map_err(|e| e.to_string())?;
    state.social_links.list().await.map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    async fn setup() -> AppState {
        AppState::init(&PathBuf::from(":memory:"))
            .await
            .expect("Failed to init test state")
    }

    #[tokio::test]
    async fn test_get_social_link_by_id() {
        let state = setup().await;

        let created = create_social_link(
            &state,
            "github".to_string(),
            "https://github.com/me".to_string(),
            None,
        )
        .await
        .unwrap();

        let found = get_social_link(&state, created.id).await.unwrap();
        assert_eq!(found.unwrap().url, "https://github.com/me");

        let missing = get_social_link(&state, 9999).await.unwrap();
        assert!(missing.is_none());
    }
}
