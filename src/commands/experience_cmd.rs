//! Admin Commands for Experience
//!
//! CRUD plus move-up/move-down for the experience admin screen.

use crate::domain::Experience;
use crate::reorder;
use crate::repository::Repository;
use crate::AppState;

/// Create a new experience entry (appends at the end of the order)
pub async fn create_experience(
    state: &AppState,
    company: String,
    role: String,
    period: String,
    description: Option<String>,
) -> Result<Experience, String> {
    let mut entry = Experience::new(0, company, role, period);
    entry.description = description;

    state.experience.create(&entry).await.map_err(|e| e.to_string())
}

/// List experience entries in display order
pub async fn list_experience(state: &AppState) -> Result<Vec<Experience>, String> {
    state.experience.list().await.map_err(|e| e.to_string())
}

/// Get experience entry by ID
pub async fn get_experience(state: &AppState, id: u32) -> Result<Option<Experience>, String> {
    state.experience.find_by_id(id).await.map_err(|e| e.to_string())
}

/// Update experience fields; unspecified fields keep their value
pub async fn update_experience(
    state: &AppState,
    id: u32,
    company: Option<String>,
    role: Option<String>,
    period: Option<String>,
    description: Option<String>,
) -> Result<Experience, String> {
    let existing = state
        .experience
        .find_by_id(id)
        .await
        .map_err(|e| e.to_string())?
        .ok_or_else(|| format!("Experience entry {} not found", id))?;

    let updated = Experience {
        id: existing.id,
        company: company.unwrap_or(existing.company),
        role: role.unwrap_or(existing.role),
        period: period.unwrap_or(existing.period),
        description: description.or(existing.description),
        order_index: existing.order_index,
    };

    state.experience.update(&updated).await.map_err(|e| e.to_string())
}

/// Delete experience entry
pub async fn delete_experience(state: &AppState, id: u32) -> Result<(), String> {
    state.experience.delete(id).await.map_err(|e| e.to_string())
}

/// Move the entry at `index` up one step and return the new list
pub async fn move_experience_up(state: &AppState, index: usize) -> Result<Vec<Experience>, String> {
    let items = state.experience.list().await.map_err(|e| e.to_string())?;
    reorder::move_up(&state.experience, &items, index)
        .await
        .map_err(|e| e.to_string())?;
    state.experience.list().await.map_err(|e| e.to_string())
}

/// Move the entry at `index` down one step and return the new list
pub async fn move_experience_down(
    state: &AppState,
    index: usize,
) -> Result<Vec<Experience>, String> {
    let items = state.experience.list().await.map_err(|e| e.to_string())?;
    reorder::move_down(&state.experience, &items, index)
        .await
        .map_err(|e| e.to_string())?;
    state.experience.list().await.map_err(|e| e.to_string())
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
    async fn test_get_experience_by_id() {
        let state = setup().await;

        let created = create_experience(
            &state,
            "Acme".to_string(),
            "Dev".to_string(),
            "2022".to_string(),
            None,
        )
        .await
        .unwrap();

        let found = get_experience(&state, created.id).await.unwrap();
        assert_eq!(found.unwrap().company, "Acme");

        let missing = get_experience(&state, 9999).await.unwrap();
        assert!(missing.is_none());
    }
}
