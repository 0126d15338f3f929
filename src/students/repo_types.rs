use sqlx::FromRow;
use time::OffsetDateTime;
use uuid::Uuid;

/// Row of the `student` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Student {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub created_at: OffsetDateTime,
    pub approved_at: Option<OffsetDateTime>, // column approved_for_exam_at
    pub archived_at: Option<OffsetDateTime>,
}

/// Values written by an insert. Approval and archive stamps always start out NULL.
#[derive(Debug, Clone)]
pub struct NewStudent {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub created_at: OffsetDateTime,
}
