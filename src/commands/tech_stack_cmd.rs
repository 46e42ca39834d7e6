//! Admin Commands for Tech Stack
//!
//! CRUD plus move-up/move-down for the tech stack admin screen.

use crate::domain::TechStack;
use crate::reorder;
use crate::repository::Repository;
use crate::AppState;

/// Create a new tech stack entry (appends at the end of the order)
pub async fn create_tech_stack(
    state: &AppState,
    name: String,
    category: Option<String>,
) -> Result<TechStack, String> {
    let mut entry = TechStack::new(0, name);
    entry.category = category;

    state.tech_stack.create(&entry).await.map_err(|e| e.to_string())
}

/// List tech stack entries in display order
pub async fn list_tech_stack(state: &AppState) -> Result<Vec<TechStack>, String> {
    state.tech_stack.list().await.map_err(|e| e.to_string())
}

/// Get tech stack entry by ID
pub async fn get_tech_stack(state: &AppState, id: u32) -> Result<Option<TechStack>, String> {
    state.tech_stack.find_by_id(id).await.map_err(|e| e.to_string())
}

/// Update tech stack fields; unspecified fields keep their value
pub async fn update_tech_stack(
    state: &AppState,
    id: u32,
    name: Option<String>,
    category: Option<String>,
) -> Result<TechStack, String> {
    let existing = state
        .tech_stack
        .find_by_id(id)
        .await
        .map_err(|e| e.to_string())?
        .ok_or_else(|| format!("Tech stack entry {} not found", id))?;

    let updated = TechStack {
        id: existing.id,
        name: name.unwrap_or(existing.name),
        category: category.or(existing.category),
        order_index: existing.order_index,
    };

    state.tech_stack.update(&updated).await.map_err(|e| e.to_string())
}

/// Delete tech stack entry
pub async fn delete_tech_stack(state: &AppState, id: u32) -> Result<(), String> {
    state.tech_stack.delete(id).await.map_err(|e| e.to_string())
}

/// Move the entry at `index` up one step and return the new list
pub async fn move_tech_stack_up(state: &AppState, index: usize) -> Result<Vec<TechStack>, String> {
    let items = state.tech_stack.list().await.map_err(|e| e.to_string())?;
    reorder::move_up(&state.tech_stack, &items, index)
        .await
        .map_err(|e| e.to_string())?;
    state.tech_stack.list().await.map_err(|e| e.to_string())
}

/// Move the entry at `index` down one step and return the new list
pub async fn move_tech_stack_down(
    state: &AppState,
    index: usize,
) -> Result<Vec<TechStack>, String> {
    let items = state.tech_stack.list().await.map_err(|e| e.to_string())?;
    reorder::move_down(&state.tech_stack, &items, index)
        .await
        .map_err(|e| e.to_string())?;
    state.tech_stack.list().await.map_err(|e| e.to_string())
}
