//! Reorder Engine
//!
//! Translates a "move item one step up/down" intent from the admin screens
//! into a single full-order rewrite. The same engine backs the education,
//! experience, tech stack and social link screens.
//!
//! Out-of-range moves are silent no-ops: the UI disables the arrow at the
//! boundary, and the engine guards independently so no persistence call is
//! ever issued for one. On a store failure nothing is rolled back locally;
//! the caller re-reads the collection and shows the store's actual state.
//! Two admins reordering concurrently is last-write-wins over the whole
//! collection (no version stamp).

use crate::domain::{DomainResult, Orderable};
use crate::repository::ReorderableRepository;

/// Move the item at `index` one step toward the front.
///
/// Returns whether a persistence call was made. `index == 0` and
/// out-of-range indices are no-ops.
pub async fn move_up<T, R>(repo: &R, items: &[T], index: usize) -> DomainResult<bool>
where
    T: Orderable,
    R: ReorderableRepository<T> + ?Sized,
{
    if index == 0 || index >= items.len() {
        return Ok(false);
    }

    let ids = swapped_ids(items, index - 1, index);
    repo.reorder(&ids).await?;
    Ok(true)
}

/// Move the item at `index` one step toward the back.
///
/// Returns whether a persistence call was made. The last index and
/// out-of-range indices are no-ops.
pub async fn move_down<T, R>(repo: &R, items: &[T], index: usize) -> DomainResult<bool>
where
    T: Orderable,
    R: ReorderableRepository<T> + ?Sized,
{
    if items.len() < 2 || index >= items.len() - 1 {
        return Ok(false);
    }

    let ids = swapped_ids(items, index, index + 1);
    repo.reorder(&ids).await?;
    Ok(true)
}

/// The displayed sequence's ids with positions `a` and `b` exchanged
fn swapped_ids<T: Orderable>(items: &[T], a: usize, b: usize) -> Vec<T::Id> {
    let mut ids: Vec<T::Id> = items.iter().map(|item| item.id()).collect();
    ids.swap(a, b);
    ids
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{DomainResult, Education, Entity};
    use crate::repository::{ReorderableRepository, Repository};
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Records every reorder submission instead of persisting it
    struct RecordingStore {
        calls: Mutex<Vec<Vec<u32>>>,
    }

    impl RecordingStore {
        fn new() -> Self {
            Self {
                calls: Mutex::new(Vec::new()),
            }
        }

        fn calls(&self) -> Vec<Vec<u32>> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl Repository<Education> for RecordingStore {
        async fn create(&self, _entity: &Education) -> DomainResult<Education> {
            unreachable!("reorder engine never creates")
        }
        async fn find_by_id(&self, _id: u32) -> DomainResult<Option<Education>> {
            unreachable!("reorder engine never reads")
        }
        async fn list(&self) -> DomainResult<Vec<Education>> {
            unreachable!("reorder engine never lists")
        }
        async fn update(&self, _entity: &Education) -> DomainResult<Education> {
            unreachable!("reorder engine never updates rows directly")
        }
        async fn delete(&self, _id: u32) -> DomainResult<()> {
            unreachable!("reorder engine never deletes")
        }
    }

    #[async_trait]
    impl ReorderableRepository<Education> for RecordingStore {
        async fn reorder(&self, ids: &[u32]) -> DomainResult<()> {
            self.calls.lock().unwrap().push(ids.to_vec());
            Ok(())
        }
    }

    fn entries(ids: &[u32]) -> Vec<Education> {
        ids.iter()
            .map(|&id| {
                let mut e = Education::new(
                    id,
                    format!("School {}", id),
                    "BSc".to_string(),
                    "2020".to_string(),
                );
                e.order_index = Some(id);
                e
            })
            .collect()
    }

    #[tokio::test]
    async fn test_move_up_swaps_with_previous() {
        let store = RecordingStore::new();
        let items = entries(&[10, 20, 30, 40]);

        // Moving the third entry up swaps positions 1 and 2
        let moved = move_up(&store, &items, 2).await.unwrap();
        assert!(moved);
        assert_eq!(store.calls(), vec![vec![10, 30, 20, 40]]);
    }

    #[tokio::test]
    async fn test_move_down_swaps_with_next() {
        let store = RecordingStore::new();
        let items = entries(&[1, 2, 3]);

        let moved = move_down(&store, &items, 0).await.unwrap();
        assert!(moved);
        assert_eq!(store.calls(), vec![vec![2, 1, 3]]);
    }

    #[tokio::test]
    async fn test_boundary_moves_are_noops() {
        let store = RecordingStore::new();
        let items = entries(&[1, 2, 3]);

        assert!(!move_up(&store, &items, 0).await.unwrap());
        assert!(!move_down(&store, &items, 2).await.unwrap());
        assert!(!move_up(&store, &items, 99).await.unwrap());
        assert!(!move_down(&store, &items, 99).await.unwrap());
        assert!(store.calls().is_empty());
    }

    #[tokio::test]
    async fn test_single_item_never_persists() {
        let store = RecordingStore::new();
        let items = entries(&[7]);

        assert!(!move_up(&store, &items, 0).await.unwrap());
        assert!(!move_down(&store, &items, 0).await.unwrap());
        assert!(store.calls().is_empty());
    }

    #[tokio::test]
    async fn test_empty_collection_is_noop() {
        let store = RecordingStore::new();
        let items: Vec<Education> = Vec::new();

        assert!(!move_up(&store, &items, 0).await.unwrap());
        assert!(!move_down(&store, &items, 0).await.unwrap());
        assert!(store.calls().is_empty());
    }

    #[test]
    fn test_swapped_ids_preserves_everything_else() {
        let items = entries(&[1, 2, 3, 4, 5]);
        assert_eq!(swapped_ids(&items, 1, 2), vec![1, 3, 2, 4, 5]);
        assert_eq!(items.iter().map(|e| e.id()).collect::<Vec<_>>(), vec![1, 2, 3, 4, 5]);
    }
}
