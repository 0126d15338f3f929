use anyhow::Context;
use axum::async_trait;
use sqlx::PgPool;
use time::OffsetDateTime;
use uuid::Uuid;

use crate::students::repo_types::{NewStudent, Student};

/// Persistence for student records. Every method runs a single statement.
#[async_trait]
pub trait StudentStore: Send + Sync {
    /// All rows, archived ones included.
    async fn list(&self) -> anyhow::Result<Vec<Student>>;
    async fn insert(&self, student: &NewStudent) -> anyhow::Result<()>;
    /// Stamps the approval time. Returns the number of rows touched.
    async fn approve(&self, id: Uuid, at: OffsetDateTime) -> anyhow::Result<u64>;
    /// Stamps the archive time. Returns the number of rows touched.
    async fn archive(&self, id: Uuid, at: OffsetDateTime) -> anyhow::Result<u64>;
}

#[derive(Clone)]
pub struct PgStudentStore {
    db: PgPool,
}

impl PgStudentStore {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl StudentStore for PgStudentStore {
    async fn list(&self) -> anyhow::Result<Vec<Student>> {
        let rows = sqlx::query_as::<_, Student>(
            r#"
            SELECT id, name, email, created_at,
                   approved_for_exam_at AS approved_at,
                   archived_at
              FROM student
             ORDER BY created_at, id
            "#,
        )
        .fetch_all(&self.db)
        .await
        .context("list students")?;
        Ok(rows)
    }

    async fn insert(&self, student: &NewStudent) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            INSERT INTO student (id, name, email, created_at)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(student.id)
        .bind(&student.name)
        .bind(&student.email)
        .bind(student.created_at)
        .execute(&self.db)
        .await
        .context("insert student")?;
        Ok(())
    }

    async fn approve(&self, id: Uuid, at: OffsetDateTime) -> anyhow::Result<u64> {
        let res = sqlx::query(r#"UPDATE student SET approved_for_exam_at = $1 WHERE id = $2"#)
            .bind(at)
            .bind(id)
            .execute(&self.db)
            .await
            .context("approve student")?;
        Ok(res.rows_affected())
    }

    async fn archive(&self, id: Uuid, at: OffsetDateTime) -> anyhow::Result<u64> {
        let res = sqlx::query(r#"UPDATE student SET archived_at = $1 WHERE id = $2"#)
            .bind(at)
            .bind(id)
            .execute(&self.db)
            .await
            .context("archive student")?;
        Ok(res.rows_affected())
    }
}
