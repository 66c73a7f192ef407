//! User repository
//!
//! The store owns every persisted row; handlers re-query on each request
//! and hold no copies between them.

use sqlx::PgPool;

use crate::models::{NewUser, User};

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("{0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("duplicate {field}")]
    Conflict { field: &'static str },

    #[error("not found: {resource} {id}")]
    NotFound { resource: &'static str, id: i32 },
}

/// User repository
pub struct UserRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> UserRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List all users, most recently created first.
    pub async fn list(&self) -> Result<Vec<User>, DbError> {
        let users = sqlx::query_as::<_, User>(
            "SELECT id, name, email, created_at, updated_at FROM users ORDER BY created_at DESC",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(users)
    }

    /// Insert a user, returning the full new row.
    ///
    /// Email uniqueness is enforced by the store; a unique violation comes
    /// back as `DbError::Conflict`, never as a duplicate row.
    pub async fn create(&self, user: &NewUser) -> Result<User, DbError> {
        sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (name, email) VALUES ($1, $2)
            RETURNING id, name, email, created_at, updated_at
            "#,
        )
        .bind(user.name())
        .bind(user.email())
        .fetch_one(self.pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(db) = &e {
                if db.is_unique_violation() {
                    return DbError::Conflict { field: "email" };
                }
            }
            DbError::Sqlx(e)
        })
    }

    /// Look up a single user by id.
    pub async fn get(&self, id: i32) -> Result<User, DbError> {
        sqlx::query_as::<_, User>(
            "SELECT id, name, email, created_at, updated_at FROM users WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(DbError::NotFound {
            resource: "user",
            id,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::bootstrap;
    use sqlx::postgres::PgPoolOptions;

    // Integration tests - run with DATABASE_URL set
    // cargo test -p tierlab-server -- --ignored

    async fn test_pool() -> PgPool {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let pool = PgPoolOptions::new()
            .max_connections(2)
            .connect(&url)
            .await
            .expect("pool creation failed");
        bootstrap::run(&pool).await.expect("bootstrap failed");
        pool
    }

    fn unique_email(tag: &str) -> String {
        format!(
            "{tag}-{}@example.com",
            chrono::Utc::now().timestamp_nanos_opt().unwrap_or_default()
        )
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn create_then_get_round_trip() {
        let pool = test_pool().await;
        let repo = UserRepo::new(&pool);

        let email = unique_email("round-trip");
        let input = NewUser::parse(Some("Round Trip".into()), Some(email.clone())).unwrap();
        let created = repo.create(&input).await.expect("create failed");

        assert_eq!(created.email, email);
        assert!(created.updated_at >= created.created_at);

        let fetched = repo.get(created.id).await.expect("get failed");
        assert_eq!(fetched.name, "Round Trip");
        assert_eq!(fetched.email, email);
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn duplicate_email_is_conflict() {
        let pool = test_pool().await;
        let repo = UserRepo::new(&pool);

        let email = unique_email("conflict");
        let input = NewUser::parse(Some("First".into()), Some(email.clone())).unwrap();
        repo.create(&input).await.expect("first create failed");

        let before = repo.list().await.expect("list failed").len();

        let dup = NewUser::parse(Some("Second".into()), Some(email)).unwrap();
        let err = repo.create(&dup).await.unwrap_err();
        assert!(matches!(err, DbError::Conflict { field: "email" }));

        let after = repo.list().await.expect("list failed").len();
        assert_eq!(before, after);
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn list_is_newest_first() {
        let pool = test_pool().await;
        let repo = UserRepo::new(&pool);

        let input = NewUser::parse(Some("Newest".into()), Some(unique_email("newest"))).unwrap();
        let created = repo.create(&input).await.expect("create failed");

        let users = repo.list().await.expect("list failed");
        assert_eq!(users.first().map(|u| u.id), Some(created.id));
        for pair in users.windows(2) {
            assert!(pair[0].created_at >= pair[1].created_at);
        }
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn missing_id_is_not_found() {
        let pool = test_pool().await;
        let err = UserRepo::new(&pool).get(999_999).await.unwrap_err();
        assert!(matches!(
            err,
            DbError::NotFound {
                resource: "user",
                id: 999_999
            }
        ));
    }
}
