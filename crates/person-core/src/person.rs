use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    #[serde(default)]
    pub id: Option<i64>,
    pub firstname: String,
    pub lastname: String,
    pub zipcode: String,
    pub city: String,
    pub color: String,
}

impl Person {
    pub fn new(
        firstname: impl Into<String>,
        lastname: impl Into<String>,
        zipcode: impl Into<String>,
        city: impl Into<String>,
        color: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            firstname: firstname.into(),
            lastname: lastname.into(),
            zipcode: zipcode.into(),
            city: city.into(),
            color: color.into(),
        }
    }

    pub fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }
}
