//! Admin Commands for Education
//!
//! CRUD plus the move-up/move-down reorder handlers backing the education
//! admin screen. Move handlers return the freshly-read list so the screen
//! always renders what the store actually holds.

use crate::domain::Education;
use crate::reorder;
use crate::repository::Repository;
use crate::AppState;

/// Create a new education entry (appends at the end of the order)
pub async fn create_education(
    state: &AppState,
    institution: String,
    degree: String,
    field: Option<String>,
    year: String,
    description: Option<String>,
) -> Result<Education, String> {
    let mut entry = Education::new(0, institution, degree, year);
    entry.field = field;
    entry.description = description;

    state.education.create(&entry).await.map_err(|e| e.to_string())
}

/// List education entries in display order
pub async fn list_education(state: &AppState) -> Result<Vec<Education>, String> {
    state.education.list().await.map_err(|e| e.to_string())
}

/// Get education entry by ID
pub async fn get_education(state: &AppState, id: u32) -> Result<Option<Education>, String> {
    state.education.find_by_id(id).await.map_err(|e| e.to_string())
}

/// Update education fields; unspecified fields keep their value
pub async fn update_education(
    state: &AppState,
    id: u32,
    institution: Option<String>,
    degree: Option<String>,
    field: Option<String>,
    year: Option<String>,
    description: Option<String>,
) -> Result<Education, String> {
    let existing = state
        .education
        .find_by_id(id)
        .await
        .map_err(|e| e.to_string())?
        .ok_or_else(|| format!("Education entry {} not found", id))?;

    let updated = Education {
        id: existing.id,
        institution: institution.unwrap_or(existing.institution),
        degree: degree.unwrap_or(existing.degree),
        field: field.or(existing.field),
        year: year.unwrap_or(existing.year),
        description: description.or(existing.description),
        order_index: existing.order_index,
    };

    state.education.update(&updated).await.map_err(|e| e.to_string())
}

/// Delete education entry (remaining order values keep their gap)
pub async fn delete_education(state: &AppState, id: u32) -> Result<(), String> {
    state.education.delete(id).await.map_err(|e| e.to_string())
}

/// Move the entry at `index` up one step and return the new list
pub async fn move_education_up(state: &AppState, index: usize) -> Result<Vec<Education>, String> {
    let items = state.education.list().await.map_err(|e| e.to_string())?;
    reorder::move_up(&state.education, &items, index)
        .await
        .map_err(|e| e.to_string())?;
    state.education.list().await.map_err(|e| e.to_string())
}

/// Move the entry at `index` down one step and return the new list
pub async fn move_education_down(state: &AppState, index: usize) -> Result<Vec<Education>, String> {
    let items = state.education.list().await.map_err(|e| e.to_string())?;
    reorder::move_down(&state.education, &items, index)
        .await
        .map_err(|e| e.to_string())?;
    state.education.list().await.map_err(|e| e.to_string())
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

    async fn seed(state: &AppState) -> Vec<Education> {
        for (institution, year) in [("A", "2019"), ("B", "2021"), ("C", "2023")] {
            create_education(
                state,
                institution.to_string(),
                "BSc".to_string(),
                None,
                year.to_string(),
                None,
            )
            .await
            .unwrap();
        }
        list_education(state).await.unwrap()
    }

    #[tokio::test]
    async fn test_move_down_swaps_and_rewrites_order() {
        let state = setup().await;
        let before = seed(&state).await;
        assert_eq!(
            before.iter().map(|e| e.institution.as_str()).collect::<Vec<_>>(),
            vec!["A", "B", "C"]
        );

        let after = move_education_down(&state, 0).await.unwrap();
        assert_eq!(
            after.iter().map(|e| e.institution.as_str()).collect::<Vec<_>>(),
            vec!["B", "A", "C"]
        );

        // Order values stay contiguous after the rewrite
        let orders: Vec<u32> = after.iter().map(|e| e.order_index.unwrap()).collect();
        assert_eq!(orders, vec![0, 1, 2]);
    }

    #[tokio::test]
    async fn test_boundary_moves_leave_list_unchanged() {
        let state = setup().await;
        let before = seed(&state).await;

        let after = move_education_up(&state, 0).await.unwrap();
        let ids = |list: &[Education]| list.iter().map(|e| e.id).collect::<Vec<_>>();
        assert_eq!(ids(&after), ids(&before));

        let after = move_education_down(&state, 2).await.unwrap();
        assert_eq!(ids(&after), ids(&before));
    }

    #[tokio::test]
    async fn test_get_education_by_id() {
        let state = setup().await;
        let entries = seed(&state).await;

        let found = get_education(&state, entries[1].id).await.unwrap();
        assert_eq!(found.unwrap().institution, "B");

        let missing = get_education(&state, 9999).await.unwrap();
        assert!(missing.is_none());
    }

    #[tokio::test]
    async fn test_update_preserves_order_index() {
        let state = setup().await;
        let entries = seed(&state).await;

        let updated = update_education(
            &state,
            entries[1].id,
            Some("B2".to_string()),
            None,
            None,
            None,
            None,
        )
        .await
        .unwrap();
        assert_eq!(updated.order_index, entries[1].order_index);
        assert_eq!(updated.degree, "BSc");
    }
}
