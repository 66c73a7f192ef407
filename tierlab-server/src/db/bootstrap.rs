//! Idempotent schema bootstrap
//!
//! Runs once before the router starts accepting traffic: creates the
//! `users` table, installs the `updated_at` trigger, and seeds example
//! rows. Safe to re-run; any failure is fatal to startup (the caller must
//! not begin serving).

use sqlx::PgPool;

/// Seed rows inserted on every bootstrap; conflicts on email are skipped.
const SEED_USERS: &[(&str, &str)] = &[
    ("John Doe", "john.doe@example.com"),
    ("Jane Smith", "jane.smith@example.com"),
    ("Alice Johnson", "alice.johnson@example.com"),
    ("Bob Wilson", "bob.wilson@example.com"),
];

/// Run the schema bootstrap
pub async fn run(pool: &PgPool) -> Result<(), sqlx::Error> {
    tracing::info!("Running schema bootstrap...");

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS users (
            id SERIAL PRIMARY KEY,
            name VARCHAR(255) NOT NULL,
            email VARCHAR(255) UNIQUE NOT NULL,
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
            updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
        "#,
    )
    .execute(pool)
    .await?;

    // Trigger keeps updated_at fresh on every row update
    sqlx::query(
        r#"
        CREATE OR REPLACE FUNCTION set_updated_at()
        RETURNS TRIGGER AS $$
        BEGIN
            NEW.updated_at = NOW();
            RETURN NEW;
        END;
        $$ LANGUAGE plpgsql
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query("DROP TRIGGER IF EXISTS users_set_updated_at ON users")
        .execute(pool)
        .await?;

    sqlx::query(
        r#"
        CREATE TRIGGER users_set_updated_at
            BEFORE UPDATE ON users
            FOR EACH ROW
            EXECUTE FUNCTION set_updated_at()
        "#,
    )
    .execute(pool)
    .await?;

    for (name, email) in SEED_USERS {
        sqlx::query("INSERT INTO users (name, email) VALUES ($1, $2) ON CONFLICT (email) DO NOTHING")
            .bind(name)
            .bind(email)
            .execute(pool)
            .await?;
    }

    tracing::info!("Schema bootstrap complete");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::postgres::PgPoolOptions;
    use sqlx::Row;

    // Integration tests - run with DATABASE_URL set
    // cargo test -p tierlab-server -- --ignored

    #[tokio::test]
    #[ignore = "requires database"]
    async fn bootstrap_is_idempotent() {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let pool = PgPoolOptions::new()
            .max_connections(2)
            .connect(&url)
            .await
            .expect("pool creation failed");

        run(&pool).await.expect("first bootstrap failed");
        run(&pool).await.expect("second bootstrap failed");

        // Seeds are keyed on email, so two runs leave no duplicates
        let row = sqlx::query("SELECT COUNT(*) AS n FROM users WHERE email = $1")
            .bind("john.doe@example.com")
            .fetch_one(&pool)
            .await
            .expect("count failed");

        assert_eq!(row.get::<i64, _>("n"), 1);
    }
}
