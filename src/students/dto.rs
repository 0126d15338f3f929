use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::students::repo_types::Student;

/// Request body for creating a student. Unknown fields (an `id`, timestamps) are ignored;
/// a missing or `null` name/email is stored as an empty string.
#[derive(Debug, Deserialize)]
pub struct CreateStudentRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

/// Optional body of approve/archive. The path id is authoritative; a body id must agree with it.
#[derive(Debug, Default, Deserialize)]
pub struct TargetStudentRequest {
    #[serde(default)]
    pub id: Option<Uuid>,
}

/// Student as returned by the list endpoint.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentResponse {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339::option")]
    pub approved_at: Option<OffsetDateTime>,
    #[serde(with = "time::serde::rfc3339::option")]
    pub archived_at: Option<OffsetDateTime>,
}

impl From<Student> for StudentResponse {
    fn from(s: Student) -> Self {
        Self {
            id: s.id,
            name: s.name,
            email: s.email,
            created_at: s.created_at,
            approved_at: s.approved_at,
            archived_at: s.archived_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use time::macros::datetime;

    #[test]
    fn student_serializes_with_camel_case_and_nulls() {
        let id = Uuid::new_v4();
        let response = StudentResponse::from(Student {
            id,
            name: "Ada".into(),
            email: "ada@x.com".into(),
            created_at: datetime!(2024-03-01 09:30:00 UTC),
            approved_at: None,
            archived_at: Some(datetime!(2024-03-02 10:00:00 UTC)),
        });

        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(
            value,
            json!({
                "id": id.to_string(),
                "name": "Ada",
                "email": "ada@x.com",
                "createdAt": "2024-03-01T09:30:00Z",
                "approvedAt": null,
                "archivedAt": "2024-03-02T10:00:00Z",
            })
        );
    }

    #[test]
    fn create_request_ignores_server_owned_fields() {
        let req: CreateStudentRequest = serde_json::from_str(
            r#"{"id":"not-even-a-uuid","name":"Ada","email":"ada@x.com","createdAt":"x"}"#,
        )
        .unwrap();
        assert_eq!(req.name.as_deref(), Some("Ada"));
        assert_eq!(req.email.as_deref(), Some("ada@x.com"));
    }

    #[test]
    fn create_request_tolerates_missing_or_null_fields() {
        let req: CreateStudentRequest = serde_json::from_str(r#"{"name":"Ada"}"#).unwrap();
        assert_eq!(req.name.as_deref(), Some("Ada"));
        assert!(req.email.is_none());

        let req: CreateStudentRequest =
            serde_json::from_str(r#"{"name":null,"email":"a"}"#).unwrap();
        assert!(req.name.is_none());
        assert_eq!(req.email.as_deref(), Some("a"));
    }

    #[test]
    fn create_request_rejects_ill_typed_fields() {
        assert!(serde_json::from_str::<CreateStudentRequest>(r#"{"name":5,"email":"a"}"#).is_err());
    }

    #[test]
    fn target_request_id_is_optional() {
        let req: TargetStudentRequest = serde_json::from_str("{}").unwrap();
        assert!(req.id.is_none());
    }
}
