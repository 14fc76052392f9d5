//! Identity persistence behind a swappable store trait.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

/// Persisted identity row. Owned exclusively by this service; the profile
/// service references it by id only.
#[derive(Debug, Clone)]
pub struct IdentityRecord {
    pub id: Uuid,
    pub user_name: String,
    pub email: String,
    pub password: String,
}

/// Fields for a new identity, before an id is assigned.
#[derive(Debug, Clone)]
pub struct NewIdentity {
    pub user_name: String,
    pub email: String,
    pub password: String,
}

#[async_trait]
pub trait IdentityStore: Send + Sync {
    /// Persist a new identity and return it with its generated id.
    async fn save(&self, identity: NewIdentity) -> Result<IdentityRecord, sqlx::Error>;

    /// Fetch an identity by id. `None` when absent.
    async fn find_by_id(&self, id: Uuid) -> Result<Option<IdentityRecord>, sqlx::Error>;

    /// Credential existence check backing the login operation.
    async fn exists_by_username_and_password(&self, user_name: &str, password: &str) -> Result<bool, sqlx::Error>;
}

pub struct PgIdentityStore {
    pool: PgPool,
}

impl PgIdentityStore {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl IdentityStore for PgIdentityStore {
    async fn save(&self, identity: NewIdentity) -> Result<IdentityRecord, sqlx::Error> {
        let id = Uuid::new_v4();
        sqlx::query("INSERT INTO identities (id, user_name, email, password) VALUES ($1, $2, $3, $4)")
            .bind(id)
            .bind(&identity.user_name)
            .bind(&identity.email)
            .bind(&identity.password)
            .execute(&self.pool)
            .await?;

        Ok(IdentityRecord {
            id,
            user_name: identity.user_name,
            email: identity.email,
            password: identity.password,
        })
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<IdentityRecord>, sqlx::Error> {
        let row = sqlx::query_as::<_, (Uuid, String, String, String)>(
            "SELECT id, user_name, email, password FROM identities WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|(id, user_name, email, password)| IdentityRecord { id, user_name, email, password }))
    }

    async fn exists_by_username_and_password(&self, user_name: &str, password: &str) -> Result<bool, sqlx::Error> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM identities WHERE user_name = $1 AND password = $2)")
                .bind(user_name)
                .bind(password)
                .fetch_one(&self.pool)
                .await?;
        Ok(exists)
    }
}
