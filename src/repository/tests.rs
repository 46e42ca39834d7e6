//! Repository Integration Tests
//!
//! Exercises the SQLite repositories against an in-memory database.

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use crate::domain::{
        ContactInfo, Education, Experience, Photo, Project, ProjectCategory, SocialLink, TechStack,
    };
    use crate::repository::{
        init_db, ContactRepository, DbState, EducationRepository, ExperienceRepository,
        PhotoRepository, ProjectRepository, ReorderableRepository, Repository,
        SocialLinkRepository, TechStackRepository,
    };

    async fn setup_test_db() -> DbState {
        let db_path = PathBuf::from(":memory:");
        init_db(&db_path).await.expect("Failed to init test DB")
    }

    async fn seed_education(repo: &EducationRepository, names: &[(&str, &str)]) -> Vec<Education> {
        for (institution, year) in names {
            let entry = Education::new(
                0,
                institution.to_string(),
                "BSc".to_string(),
                year.to_string(),
            );
            repo.create(&entry).await.expect("Failed to create");
        }
        repo.list().await.expect("List failed")
    }

    #[tokio::test]
    async fn test_create_assigns_id_and_appends() {
        let db = setup_test_db().await;
        let repo = EducationRepository::new(db.conn.clone());

        let entries = seed_education(&repo, &[("A", "2019"), ("B", "2021")]).await;
        assert_eq!(entries.len(), 2);
        assert!(entries[0].id > 0);
        assert_eq!(entries[0].order_index, Some(0));
        assert_eq!(entries[1].order_index, Some(1));
    }

    #[tokio::test]
    async fn test_reorder_rewrites_contiguously() {
        let db = setup_test_db().await;
        let repo = EducationRepository::new(db.conn.clone());

        let entries = seed_education(&repo, &[("A", "2019"), ("B", "2021"), ("C", "2023")]).await;

        // Persist C, A, B
        let ids = vec![entries[2].id, entries[0].id, entries[1].id];
        repo.reorder(&ids).await.expect("Reorder failed");

        let after = repo.list().await.unwrap();
        let names: Vec<&str> = after.iter().map(|e| e.institution.as_str()).collect();
        assert_eq!(names, vec!["C", "A", "B"]);

        let mut orders: Vec<u32> = after.iter().map(|e| e.order_index.unwrap()).collect();
        orders.sort_unstable();
        assert_eq!(orders, vec![0, 1, 2]);
    }

    #[tokio::test]
    async fn test_delete_leaves_order_gap() {
        let db = setup_test_db().await;
        let repo = EducationRepository::new(db.conn.clone());

        let entries = seed_education(&repo, &[("A", "2019"), ("B", "2021"), ("C", "2023")]).await;
        repo.delete(entries[1].id).await.expect("Delete failed");

        let after = repo.list().await.unwrap();
        let names: Vec<&str> = after.iter().map(|e| e.institution.as_str()).collect();
        assert_eq!(names, vec!["A", "C"]);

        // The gap at index 1 is not compacted
        let orders: Vec<u32> = after.iter().map(|e| e.order_index.unwrap()).collect();
        assert_eq!(orders, vec![0, 2]);

        // Appending after the gap continues past the old maximum
        let entry = Education::new(0, "D".to_string(), "BSc".to_string(), "2025".to_string());
        let created = repo.create(&entry).await.unwrap();
        assert_eq!(created.order_index, Some(3));
    }

    #[tokio::test]
    async fn test_unordered_rows_fall_back_by_year() {
        let db = setup_test_db().await;
        let repo = EducationRepository::new(db.conn.clone());

        let entries = seed_education(&repo, &[("Old", "2015"), ("New", "2024")]).await;

        // Clear both order values; display falls back to newest year first
        for entry in &entries {
            let mut cleared = entry.clone();
            cleared.order_index = None;
            repo.update(&cleared).await.unwrap();
        }

        let after = repo.list().await.unwrap();
        let names: Vec<&str> = after.iter().map(|e| e.institution.as_str()).collect();
        assert_eq!(names, vec!["New", "Old"]);
    }

    #[tokio::test]
    async fn test_ordered_rows_sort_before_unordered() {
        let db = setup_test_db().await;
        let repo = TechStackRepository::new(db.conn.clone());

        let rust = repo.create(&TechStack::new(0, "Rust".to_string())).await.unwrap();
        let axum = repo.create(&TechStack::new(0, "Axum".to_string())).await.unwrap();

        let mut cleared = rust.clone();
        cleared.order_index = None;
        repo.update(&cleared).await.unwrap();

        let after = repo.list().await.unwrap();
        assert_eq!(after[0].id, axum.id);
        assert_eq!(after[1].id, rust.id);
    }

    #[tokio::test]
    async fn test_project_round_trip_with_tags() {
        let db = setup_test_db().await;
        let repo = ProjectRepository::new(db.conn.clone());

        let mut project = Project::new(
            0,
            "Portfolio".to_string(),
            "This site".to_string(),
            ProjectCategory::Web,
        );
        project.tags = vec!["rust".to_string(), "sqlite".to_string()];
        project.github_url = Some("https://example.com/repo".to_string());

        let created = repo.create(&project).await.expect("Failed to create");
        assert!(created.id > 0);
        assert!(created.created_at.is_some());

        let found = repo.find_by_id(created.id).await.unwrap().unwrap();
        assert_eq!(found.tags, vec!["rust", "sqlite"]);
        assert_eq!(found.category, "Web");
        assert_eq!(found.github_url.as_deref(), Some("https://example.com/repo"));
    }

    #[tokio::test]
    async fn test_featured_projects() {
        let db = setup_test_db().await;
        let repo = ProjectRepository::new(db.conn.clone());

        let mut a = Project::new(0, "A".to_string(), String::new(), ProjectCategory::Web);
        a.featured = true;
        let b = Project::new(0, "B".to_string(), String::new(), ProjectCategory::Mobile);
        repo.create(&a).await.unwrap();
        repo.create(&b).await.unwrap();

        let featured = repo.list_featured().await.unwrap();
        assert_eq!(featured.len(), 1);
        assert_eq!(featured[0].title, "A");
    }

    #[tokio::test]
    async fn test_project_update_and_delete() {
        let db = setup_test_db().await;
        let repo = ProjectRepository::new(db.conn.clone());

        let project = Project::new(0, "Old".to_string(), String::new(), ProjectCategory::Web);
        let mut created = repo.create(&project).await.unwrap();

        created.title = "New".to_string();
        created.featured = true;
        repo.update(&created).await.unwrap();

        let found = repo.find_by_id(created.id).await.unwrap().unwrap();
        assert_eq!(found.title, "New");
        assert!(found.featured);

        repo.delete(created.id).await.unwrap();
        assert!(repo.find_by_id(created.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_photos_list_newest_first() {
        let db = setup_test_db().await;
        let repo = PhotoRepository::new(db.conn.clone());

        let mut old = Photo::new(0, "old.jpg".to_string());
        old.created_at = Some(1_000);
        let mut new = Photo::new(0, "new.jpg".to_string());
        new.created_at = Some(2_000);
        repo.create(&old).await.unwrap();
        repo.create(&new).await.unwrap();

        let photos = repo.list().await.unwrap();
        assert_eq!(photos[0].image_url, "new.jpg");
        assert_eq!(photos[1].image_url, "old.jpg");
    }

    #[tokio::test]
    async fn test_experience_reorder() {
        let db = setup_test_db().await;
        let repo = ExperienceRepository::new(db.conn.clone());

        let a = repo
            .create(&Experience::new(0, "Acme".to_string(), "Dev".to_string(), "2020".to_string()))
            .await
            .unwrap();
        let b = repo
            .create(&Experience::new(0, "Globex".to_string(), "Lead".to_string(), "2022".to_string()))
            .await
            .unwrap();

        repo.reorder(&[b.id, a.id]).await.unwrap();

        let after = repo.list().await.unwrap();
        assert_eq!(after[0].company, "Globex");
        assert_eq!(after[1].company, "Acme");
    }

    #[tokio::test]
    async fn test_social_links_fallback_alphabetical() {
        let db = setup_test_db().await;
        let repo = SocialLinkRepository::new(db.conn.clone());

        for platform in ["twitter", "github", "linkedin"] {
            let link = SocialLink::new(0, platform.to_string(), "https://x".to_string());
            let mut created = repo.create(&link).await.unwrap();
            created.order_index = None;
            repo.update(&created).await.unwrap();
        }

        let links = repo.list().await.unwrap();
        let platforms: Vec<&str> = links.iter().map(|l| l.platform.as_str()).collect();
        assert_eq!(platforms, vec!["github", "linkedin", "twitter"]);
    }

    #[tokio::test]
    async fn test_contact_save_is_upsert() {
        let db = setup_test_db().await;
        let repo = ContactRepository::new(db.conn.clone());

        assert!(repo.load().await.unwrap().is_none());

        repo.save(&ContactInfo::new(1, "me@example.com".to_string()))
            .await
            .unwrap();
        let mut second = ContactInfo::new(1, "new@example.com".to_string());
        second.location = Some("Berlin".to_string());
        repo.save(&second).await.unwrap();

        let loaded = repo.load().await.unwrap().unwrap();
        assert_eq!(loaded.email, "new@example.com");
        assert_eq!(loaded.location.as_deref(), Some("Berlin"));
    }

    #[tokio::test]
    async fn test_order_survives_reopen() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let db_path = dir.path().join("folio.db");

        let ids = {
            let db = init_db(&db_path).await.expect("Failed to init DB");
            let repo = EducationRepository::new(db.conn.clone());
            let entries =
                seed_education(&repo, &[("A", "2019"), ("B", "2021"), ("C", "2023")]).await;
            let ids = vec![entries[2].id, entries[0].id, entries[1].id];
            repo.reorder(&ids).await.expect("Reorder failed");
            // Drop the connection before reopening
            db.conn.lock().await.take();
            ids
        };

        let db = init_db(&db_path).await.expect("Failed to reopen DB");
        let repo = EducationRepository::new(db.conn.clone());
        let after = repo.list().await.unwrap();
        assert_eq!(after.iter().map(|e| e.id).collect::<Vec<_>>(), ids);
    }
}
