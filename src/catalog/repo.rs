use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use time::OffsetDateTime;
use uuid::Uuid;

/// Catalog entry; `image` is a URL or data reference, stored as-is.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Vegetable {
    pub id: Uuid,
    pub name: String,
    pub image: String,
    pub created_at: OffsetDateTime,
}

pub async fn list_all(db: &PgPool) -> anyhow::Result<Vec<Vegetable>> {
    let rows = sqlx::query_as::<_, Vegetable>(
        r#"
        SELECT id, name, image, created_at
        FROM vegetables
        ORDER BY created_at DESC
        "#,
    )
    .fetch_all(db)
    .await?;
    Ok(rows)
}

pub async fn insert(db: &PgPool, name: &str, image: &str) -> anyhow::Result<Vegetable> {
    let row = sqlx::query_as::<_, Vegetable>(
        r#"
        INSERT INTO vegetables (name, image)
        VALUES ($1, $2)
        RETURNING id, name, image, created_at
        "#,
    )
    .bind(name)
    .bind(image)
    .fetch_one(db)
    .await?;
    Ok(row)
}
