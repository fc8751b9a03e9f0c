use person_core::Person;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct PersonRecord {
    pub id: i64,
    pub firstname: String,
    pub lastname: String,
    pub zipcode: String,
    pub city: String,
    pub color: String,
}

impl From<PersonRecord> for Person {
    fn from(record: PersonRecord) -> Self {
        Person::new(
            record.firstname,
            record.lastname,
            record.zipcode,
            record.city,
            record.color,
        )
        .with_id(record.id)
    }
}
