//! Database seeder for Lingua development and testing.
//!
//! Creates one demo resource per attachable kind and hangs a sample PDF off
//! the demo video, so the task PDF routes have something to work with.
//! Running it twice changes nothing.
//!
//! Usage: cargo run --bin seeder

use anyhow::Context;
use chrono::Utc;
use sea_orm::DatabaseConnection;

use lingua_core::attachment::{
    AttachmentRepository as _, NewAttachment, ParentRef, ResourceKind,
};
use lingua_db::{AttachmentRepository, ParentResourceRepository};

/// Title shared by every demo resource.
const DEMO_TITLE: &str = "Demo lesson";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let database_url = std::env::var("DATABASE_URL")
        .or_else(|_| std::env::var("LINGUA__DATABASE__URL"))
        .context("DATABASE_URL must be set in environment")?;

    println!("Connecting to database...");
    let db = lingua_db::connect(&database_url)
        .await
        .context("Failed to connect to database")?;

    println!("Seeding demo resources...");
    let video_id = seed_resources(&db).await?;

    println!("Seeding demo task PDF...");
    seed_task_pdf(&db, video_id).await?;

    println!("Seeding complete!");
    Ok(())
}

/// Seeds one resource per kind and returns the demo video's id.
async fn seed_resources(db: &DatabaseConnection) -> anyhow::Result<i32> {
    let repo = ParentResourceRepository::new(db.clone());
    let mut video_id = None;

    for kind in ResourceKind::ALL {
        let id = if let Some(id) = repo.find_by_title(kind, DEMO_TITLE).await? {
            println!("  {kind} #{id} already exists, skipping...");
            id
        } else {
            let id = repo.create(kind, DEMO_TITLE).await?;
            println!("  Created {kind} #{id}");
            id
        };

        if kind == ResourceKind::Video {
            video_id = Some(id);
        }
    }

    video_id.context("demo video was not seeded")
}

/// Attaches a sample worksheet to the demo video unless it already has PDFs.
async fn seed_task_pdf(db: &DatabaseConnection, video_id: i32) -> anyhow::Result<()> {
    let repo = AttachmentRepository::new(db.clone());
    let parent = ParentRef::new(ResourceKind::Video, video_id);

    if !repo.list_for_parent(parent).await?.is_empty() {
        println!("  {parent} already has task PDFs, skipping...");
        return Ok(());
    }

    let sample = NewAttachment {
        file_path: "https://cdn.lingua.dev/task-pdfs/demo-worksheet.pdf".to_string(),
        file_name: "demo-worksheet.pdf".to_string(),
        file_size: Some(52_431),
        upload_date: Utc::now(),
    };
    let created = repo.create_many(parent, vec![sample]).await?;
    println!("  Created {} task PDF(s) for {parent}", created.len());

    Ok(())
}
