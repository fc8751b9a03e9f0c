use async_trait::async_trait;
use person_core::Person;
use sqlx::{postgres::PgPoolOptions, Pool, Postgres};

use crate::{models::PersonRecord, Error, Result};

/// CRUD access to stored persons
#[async_trait]
pub trait PersonRepository: Send + Sync {
    async fn find_all(&self) -> Result<Vec<Person>>;

    async fn find_by_id(&self, id: i64) -> Result<Option<Person>>;

    async fn find_by_color(&self, color: &str) -> Result<Vec<Person>>;

    /// Update the row with `person.id`; insert with a generated id when there is none
    async fn save(&self, person: &Person) -> Result<Person>;
}

#[derive(Clone)]
pub struct Database {
    pool: Pool<Postgres>,
}

impl Database {
    /// Create new database connection
    pub async fn new(database_url: &str, max_connections: u32) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(database_url)
            .await
            .map_err(|e| Error::Connection(e.to_string()))?;

        Ok(Self { pool })
    }

    /// Initialize database schema
    pub async fn init_schema(&self) -> Result<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS persons (
                id BIGSERIAL PRIMARY KEY,
                firstname TEXT NOT NULL,
                lastname TEXT NOT NULL,
                zipcode VARCHAR(32) NOT NULL,
                city TEXT NOT NULL,
                color VARCHAR(64) NOT NULL
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        sqlx::query("CREATE INDEX IF NOT EXISTS idx_persons_color ON persons(color)")
            .execute(&self.pool)
            .await?;

        tracing::debug!("Person schema initialized");

        Ok(())
    }
}

#[async_trait]
impl PersonRepository for Database {
    async fn find_all(&self) -> Result<Vec<Person>> {
        let records = sqlx::query_as::<_, PersonRecord>("SELECT * FROM persons ORDER BY id")
            .fetch_all(&self.pool)
            .await?;

        Ok(records.into_iter().map(Person::from).collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Person>> {
        let record = sqlx::query_as::<_, PersonRecord>("SELECT * FROM persons WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(record.map(Person::from))
    }

    async fn find_by_color(&self, color: &str) -> Result<Vec<Person>> {
        let records = sqlx::query_as::<_, PersonRecord>(
            "SELECT * FROM persons WHERE color = $1 ORDER BY id",
        )
        .bind(color)
        .fetch_all(&self.pool)
        .await?;

        Ok(records.into_iter().map(Person::from).collect())
    }

    async fn save(&self, person: &Person) -> Result<Person> {
        if let Some(id) = person.id {
            let updated = sqlx::query_as::<_, PersonRecord>(
                r#"
                UPDATE persons SET
                    firstname = $2,
                    lastname = $3,
                    zipcode = $4,
                    city = $5,
                    color = $6
                WHERE id = $1
                RETURNING *
                "#,
            )
            .bind(id)
            .bind(&person.firstname)
            .bind(&person.lastname)
            .bind(&person.zipcode)
            .bind(&person.city)
            .bind(&person.color)
            .fetch_optional(&self.pool)
            .await?;

            if let Some(record) = updated {
                return Ok(record.into());
            }

            // Unknown ids are replaced by a generated one
            tracing::debug!("Person {} not stored yet, inserting with a new id", id);
        }

        let record = sqlx::query_as::<_, PersonRecord>(
            r#"
            INSERT INTO persons (firstname, lastname, zipcode, city, color)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(&person.firstname)
        .bind(&person.lastname)
        .bind(&person.zipcode)
        .bind(&person.city)
        .bind(&person.color)
        .fetch_one(&self.pool)
        .await?;

        Ok(record.into())
    }
}
