//! PostgreSQL Repository Implementation

use sqlx::PgPool;
use sqlx::prelude::FromRow;

use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{Email, UserId, UserPassword};
use crate::error::{AuthError, AuthResult};

/// PostgreSQL implementation of the user repository
#[derive(Clone)]
pub struct PgAuthRepository {
    pool: PgPool,
}

impl PgAuthRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Database row for users table
#[derive(FromRow)]
struct UserRow {
    user_id: uuid::Uuid,
    name: String,
    email: String,
    password_hash: String,
    created_at: chrono::DateTime<chrono::Utc>,
    updated_at: chrono::DateTime<chrono::Utc>,
}

impl UserRow {
    fn into_user(self) -> AuthResult<User> {
        Ok(User {
            user_id: UserId::from_uuid(self.user_id),
            name: self.name,
            email: Email::from_db(self.email),
            password_hash: UserPassword::from_db(self.password_hash)?,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

/// Postgres unique-violation SQLSTATE
const UNIQUE_VIOLATION: &str = "23505";

impl UserRepository for PgAuthRepository {
    async fn create(&self, user: &User) -> AuthResult<()> {
        // The unique index on email is the uniqueness mechanism; a
        // duplicate surfaces here as a 23505 rather than via a pre-check.
        sqlx::query(
            r#"
            INSERT INTO users (user_id, name, email, password_hash, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(user.user_id.as_uuid())
        .bind(&user.name)
        .bind(user.email.as_str())
        .bind(user.password_hash.as_str())
        .bind(user.created_at)
        .bind(user.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| match e.as_database_error().and_then(|db| db.code()) {
            Some(code) if code == UNIQUE_VIOLATION => AuthError::EmailTaken,
            _ => AuthError::Database(e),
        })?;

        Ok(())
    }

    async fn find_by_id(&self, user_id: &UserId) -> AuthResult<Option<User>> {
        let row: Option<UserRow> = sqlx::query_as(
            r#"
            SELECT user_id, name, email, password_hash, created_at, updated_at
            FROM users
            WHERE user_id = $1
            "#,
        )
        .bind(user_id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        row.map(UserRow::into_user).transpose()
    }

    async fn find_by_email(&self, email: &Email) -> AuthResult<Option<User>> {
        let row: Option<UserRow> = sqlx::query_as(
            r#"
            SELECT user_id, name, email, password_hash, created_at, updated_at
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email.as_str())
        .fetch_optional(&self.pool)
        .await?;

        row.map(UserRow::into_user).transpose()
    }

    async fn update(&self, user: &User) -> AuthResult<()> {
        sqlx::query(
            r#"
            UPDATE users
            SET name = $2, email = $3, password_hash = $4, updated_at = $5
            WHERE user_id = $1
            "#,
        )
        .bind(user.user_id.as_uuid())
        .bind(&user.name)
        .bind(user.email.as_str())
        .bind(user.password_hash.as_str())
        .bind(user.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| match e.as_database_error().and_then(|db| db.code()) {
            Some(code) if code == UNIQUE_VIOLATION => AuthError::EmailTaken,
            _ => AuthError::Database(e),
        })?;

        Ok(())
    }

    async fn email_taken(&self, email: &Email, exclude: &UserId) -> AuthResult<bool> {
        let (taken,): (bool,) = sqlx::query_as(
            r#"
            SELECT EXISTS(
                SELECT 1 FROM users
                WHERE email = $1 AND user_id <> $2
            )
            "#,
        )
        .bind(email.as_str())
        .bind(exclude.as_uuid())
        .fetch_one(&self.pool)
        .await?;

        Ok(taken)
    }
}
