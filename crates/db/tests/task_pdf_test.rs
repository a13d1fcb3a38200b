//! Integration tests for the task PDF repository.

mod common;

use chrono::{TimeZone, Utc};
use lingua_core::attachment::{AttachmentRepository as _, NewAttachment, ParentRef, ResourceKind};
use lingua_db::AttachmentRepository;
use sea_orm::ConnectionTrait;

use common::setup_db;

fn pdf(name: &str) -> NewAttachment {
    NewAttachment {
        file_path: format!("https://cdn.example.com/{name}"),
        file_name: name.to_string(),
        file_size: None,
        upload_date: Utc::now(),
    }
}

#[tokio::test]
async fn test_create_many_and_list_newest_first() {
    let db = setup_db().await;
    let repo = AttachmentRepository::new(db.clone());
    let parent = ParentRef::new(ResourceKind::Video, 1);

    let created = repo
        .create_many(parent, vec![pdf("a.pdf"), pdf("b.pdf")])
        .await
        .expect("Failed to create attachments");

    assert_eq!(created.len(), 2);
    assert_eq!(created[0].file_name, "a.pdf");
    assert_eq!(created[1].file_name, "b.pdf");
    assert!(created.iter().all(|a| a.parent() == parent));
    assert!(created[1].id > created[0].id);

    let listed = repo.list_for_parent(parent).await.expect("Query should succeed");
    let names: Vec<_> = listed.iter().map(|a| a.file_name.as_str()).collect();
    assert_eq!(names, ["b.pdf", "a.pdf"]);
}

#[tokio::test]
async fn test_fields_persisted() {
    let db = setup_db().await;
    let repo = AttachmentRepository::new(db.clone());
    let parent = ParentRef::new(ResourceKind::EslAudio, 4);
    let upload_date = Utc.with_ymd_and_hms(2023, 9, 14, 6, 30, 0).unwrap();

    let item = NewAttachment {
        file_path: "https://cdn.example.com/worksheet.pdf".to_string(),
        file_name: "worksheet.pdf".to_string(),
        file_size: Some(48_213),
        upload_date,
    };
    repo.create_many(parent, vec![item]).await.unwrap();

    let listed = repo.list_for_parent(parent).await.unwrap();
    assert_eq!(listed.len(), 1);
    let row = &listed[0];
    assert_eq!(row.resource_type, ResourceKind::EslAudio);
    assert_eq!(row.resource_id, 4);
    assert_eq!(row.file_path, "https://cdn.example.com/worksheet.pdf");
    assert_eq!(row.file_size, Some(48_213));
    assert_eq!(row.upload_date, upload_date);
}

#[tokio::test]
async fn test_list_is_scoped_to_parent() {
    let db = setup_db().await;
    let repo = AttachmentRepository::new(db.clone());

    repo.create_many(ParentRef::new(ResourceKind::Video, 1), vec![pdf("v.pdf")])
        .await
        .unwrap();
    repo.create_many(ParentRef::new(ResourceKind::Audio, 1), vec![pdf("a.pdf")])
        .await
        .unwrap();
    repo.create_many(ParentRef::new(ResourceKind::Video, 2), vec![pdf("v2.pdf")])
        .await
        .unwrap();

    let listed = repo
        .list_for_parent(ParentRef::new(ResourceKind::Video, 1))
        .await
        .unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].file_name, "v.pdf");

    let empty = repo
        .list_for_parent(ParentRef::new(ResourceKind::Blog, 1))
        .await
        .unwrap();
    assert!(empty.is_empty());
}

#[tokio::test]
async fn test_delete_scoped_requires_all_three_keys() {
    let db = setup_db().await;
    let repo = AttachmentRepository::new(db.clone());
    let parent = ParentRef::new(ResourceKind::Video, 1);

    let created = repo.create_many(parent, vec![pdf("a.pdf")]).await.unwrap();
    let id = created[0].id;

    let wrong_type = repo
        .delete_scoped(ParentRef::new(ResourceKind::Audio, 1), id)
        .await
        .unwrap();
    let wrong_parent = repo
        .delete_scoped(ParentRef::new(ResourceKind::Video, 2), id)
        .await
        .unwrap();
    let wrong_id = repo.delete_scoped(parent, id + 100).await.unwrap();

    assert!(!wrong_type);
    assert!(!wrong_parent);
    assert!(!wrong_id);
    assert_eq!(repo.list_for_parent(parent).await.unwrap().len(), 1);

    assert!(repo.delete_scoped(parent, id).await.unwrap());
    assert!(!repo.delete_scoped(parent, id).await.unwrap());
    assert!(repo.list_for_parent(parent).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_delete_for_parent() {
    let db = setup_db().await;
    let repo = AttachmentRepository::new(db.clone());
    let parent = ParentRef::new(ResourceKind::Reading, 3);
    let other = ParentRef::new(ResourceKind::Reading, 4);

    repo.create_many(parent, vec![pdf("a.pdf"), pdf("b.pdf"), pdf("c.pdf")])
        .await
        .unwrap();
    repo.create_many(other, vec![pdf("d.pdf")]).await.unwrap();

    assert_eq!(repo.delete_for_parent(parent).await.unwrap(), 3);
    assert_eq!(repo.delete_for_parent(parent).await.unwrap(), 0);
    assert_eq!(repo.list_for_parent(other).await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_failed_batch_inserts_nothing() {
    let db = setup_db().await;
    db.execute_unprepared(
        "CREATE TRIGGER reject_poison BEFORE INSERT ON task_pdfs \
         WHEN NEW.file_name = 'poison.pdf' \
         BEGIN SELECT RAISE(ABORT, 'poisoned'); END;",
    )
    .await
    .expect("Failed to create trigger");

    let repo = AttachmentRepository::new(db.clone());
    let parent = ParentRef::new(ResourceKind::Story, 1);

    let result = repo
        .create_many(parent, vec![pdf("a.pdf"), pdf("poison.pdf"), pdf("c.pdf")])
        .await;

    assert!(result.is_err());
    assert!(repo.list_for_parent(parent).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_concurrent_batches_for_same_parent() {
    let db = setup_db().await;
    let parent = ParentRef::new(ResourceKind::Writing, 1);

    let mut handles = Vec::new();
    for batch in 0..5 {
        let repo = AttachmentRepository::new(db.clone());
        handles.push(tokio::spawn(async move {
            repo.create_many(
                parent,
                vec![pdf(&format!("{batch}-a.pdf")), pdf(&format!("{batch}-b.pdf"))],
            )
            .await
        }));
    }
    for handle in handles {
        handle.await.expect("task panicked").expect("batch failed");
    }

    let listed = AttachmentRepository::new(db.clone())
        .list_for_parent(parent)
        .await
        .unwrap();
    assert_eq!(listed.len(), 10);
    assert!(listed.windows(2).all(|w| w[0].id > w[1].id));
}
