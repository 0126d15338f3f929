use std::sync::Arc;

use crate::config::AppConfig;
use crate::db;
use crate::students::repo::{PgStudentStore, StudentStore};

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn StudentStore>,
}

impl AppState {
    pub async fn init(config: &AppConfig) -> anyhow::Result<Self> {
        let pool = db::connect(&config.database).await?;
        let store = Arc::new(PgStudentStore::new(pool)) as Arc<dyn StudentStore>;
        Ok(Self::from_store(store))
    }

    pub fn from_store(store: Arc<dyn StudentStore>) -> Self {
        Self { store }
    }
}

#[cfg(test)]
pub mod fakes {
    use std::sync::Mutex;

    use anyhow::bail;
    use axum::async_trait;
    use time::OffsetDateTime;
    use uuid::Uuid;

    use crate::students::repo::StudentStore;
    use crate::students::repo_types::{NewStudent, Student};

    #[derive(Default)]
    pub struct InMemoryStudentStore {
        rows: Mutex<Vec<Student>>,
    }

    impl InMemoryStudentStore {
        pub fn snapshot(&self) -> Vec<Student> {
            self.rows.lock().unwrap().clone()
        }

        fn stamp<F>(&self, id: Uuid, apply: F) -> u64
        where
            F: Fn(&mut Student),
        {
            let mut rows = self.rows.lock().unwrap();
            let mut affected = 0;
            for row in rows.iter_mut().filter(|r| r.id == id) {
                apply(row);
                affected += 1;
            }
            affected
        }
    }

    #[async_trait]
    impl StudentStore for InMemoryStudentStore {
        async fn list(&self) -> anyhow::Result<Vec<Student>> {
            Ok(self.snapshot())
        }

        async fn insert(&self, s: &NewStudent) -> anyhow::Result<()> {
            let mut rows = self.rows.lock().unwrap();
            if rows.iter().any(|r| r.id == s.id) {
                bail!("duplicate key value violates unique constraint \"student_pkey\"");
            }
            rows.push(Student {
                id: s.id,
                name: s.name.clone(),
                email: s.email.clone(),
                created_at: s.created_at,
                approved_at: None,
                archived_at: None,
            });
            Ok(())
        }

        async fn approve(&self, id: Uuid, at: OffsetDateTime) -> anyhow::Result<u64> {
            Ok(self.stamp(id, |r| r.approved_at = Some(at)))
        }

        async fn archive(&self, id: Uuid, at: OffsetDateTime) -> anyhow::Result<u64> {
            Ok(self.stamp(id, |r| r.archived_at = Some(at)))
        }
    }

    /// Fails every call the way a dropped connection would.
    pub struct FailingStudentStore;

    #[async_trait]
    impl StudentStore for FailingStudentStore {
        async fn list(&self) -> anyhow::Result<Vec<Student>> {
            bail!("connection refused")
        }
        async fn insert(&self, _s: &NewStudent) -> anyhow::Result<()> {
            bail!("connection refused")
        }
        async fn approve(&self, _id: Uuid, _at: OffsetDateTime) -> anyhow::Result<u64> {
            bail!("connection refused")
        }
        async fn archive(&self, _id: Uuid, _at: OffsetDateTime) -> anyhow::Result<u64> {
            bail!("connection refused")
        }
    }
}
