use crate::dto::user_dto::CreateUserPayload;
use crate::error::{Error, Result};
use crate::models::user::User;
use sqlx::PgPool;

pub const CREATE_USER_ERROR: &str = "Error creating user";

#[derive(Clone)]
pub struct UserService {
    pool: PgPool,
}

impl UserService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> Result<Vec<User>> {
        sqlx::query_as::<_, User>(
            "SELECT id, name, email, role_id, position FROM users ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| Error::operation("Error fetching users", e))
    }

    pub async fn create(&self, payload: CreateUserPayload) -> Result<User> {
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (name, email, role_id, position)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, email, role_id, position
            "#,
        )
        .bind(payload.name)
        .bind(payload.email)
        .bind(payload.role_id)
        .bind(payload.position)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| Error::operation(CREATE_USER_ERROR, e))?;

        tracing::info!(user_id = user.id, "User created");
        Ok(user)
    }
}
