//! Profile persistence behind a swappable store trait.

use async_trait::async_trait;
use sqlx::PgPool;

/// Persisted profile row. Ids live in their own namespace, independent from
/// identity ids; `auth_id` is the back-reference.
#[derive(Debug, Clone)]
pub struct ProfileRecord {
    pub id: String,
    pub auth_id: String,
    pub username: String,
    pub email: String,
}

#[async_trait]
pub trait ProfileStore: Send + Sync {
    /// Persist a new profile. The id is assigned by the caller.
    async fn save(&self, profile: ProfileRecord) -> Result<ProfileRecord, sqlx::Error>;

    /// Fetch a profile by id. `None` when absent.
    async fn find_by_id(&self, id: &str) -> Result<Option<ProfileRecord>, sqlx::Error>;

    /// All profiles in creation order.
    async fn find_all(&self) -> Result<Vec<ProfileRecord>, sqlx::Error>;

    /// Rewrite username and email. `None` when the profile is absent.
    async fn update(&self, id: &str, username: &str, email: &str) -> Result<Option<ProfileRecord>, sqlx::Error>;

    async fn delete_by_id(&self, id: &str) -> Result<(), sqlx::Error>;

    async fn exists_by_id(&self, id: &str) -> Result<bool, sqlx::Error>;
}

pub struct PgProfileStore {
    pool: PgPool,
}

impl PgProfileStore {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

type ProfileTuple = (String, String, String, String);

fn from_tuple((id, auth_id, username, email): ProfileTuple) -> ProfileRecord {
    ProfileRecord { id, auth_id, username, email }
}

#[async_trait]
impl ProfileStore for PgProfileStore {
    async fn save(&self, profile: ProfileRecord) -> Result<ProfileRecord, sqlx::Error> {
        sqlx::query("INSERT INTO profiles (id, auth_id, username, email) VALUES ($1, $2, $3, $4)")
            .bind(&profile.id)
            .bind(&profile.auth_id)
            .bind(&profile.username)
            .bind(&profile.email)
            .execute(&self.pool)
            .await?;

        Ok(profile)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<ProfileRecord>, sqlx::Error> {
        let row = sqlx::query_as::<_, ProfileTuple>(
            "SELECT id, auth_id, username, email FROM profiles WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(from_tuple))
    }

    async fn find_all(&self) -> Result<Vec<ProfileRecord>, sqlx::Error> {
        let rows = sqlx::query_as::<_, ProfileTuple>(
            "SELECT id, auth_id, username, email FROM profiles ORDER BY created_at ASC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(from_tuple).collect())
    }

    async fn update(&self, id: &str, username: &str, email: &str) -> Result<Option<ProfileRecord>, sqlx::Error> {
        let row = sqlx::query_as::<_, ProfileTuple>(
            "UPDATE profiles SET username = $2, email = $3 WHERE id = $1
             RETURNING id, auth_id, username, email",
        )
        .bind(id)
        .bind(username)
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(from_tuple))
    }

    async fn delete_by_id(&self, id: &str) -> Result<(), sqlx::Error> {
        sqlx::query("DELETE FROM profiles WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn exists_by_id(&self, id: &str) -> Result<bool, sqlx::Error> {
        let exists: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM profiles WHERE id = $1)")
            .bind(id)
            .fetch_one(&self.pool)
            .await?;
        Ok(exists)
    }
}
