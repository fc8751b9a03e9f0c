//! Person provider backed by the delimited text resource.
//!
//! A logical record is `lastname, firstname, zipcode city, color-code` and may
//! be wrapped over several physical lines. Lines are trimmed and joined until
//! the buffer ends in a comma followed by the numeric color code.

use async_trait::async_trait;
use once_cell::sync::Lazy;
use regex::Regex;
use std::path::Path;
use tokio::sync::RwLock;

use crate::{Error, Person, PersonDataProvider, ProviderType, Result};

const BUNDLED_DATA: &str = include_str!("../data/sample-input.csv");

const UNKNOWN_COLOR: &str = "unknown";

static RECORD_END: Lazy<Regex> =
    Lazy::new(|| Regex::new(r",\s*[0-9]+\s*$").expect("record terminator pattern is valid"));

/// Map a numeric color code to its label
pub fn color_label(code: i64) -> &'static str {
    match code {
        1 => "blau",
        2 => "grün",
        3 => "violett",
        4 => "rot",
        5 => "gelb",
        6 => "türkis",
        7 => "weiß",
        _ => UNKNOWN_COLOR,
    }
}

/// Parse the delimited text into persons with sequential ids starting at 1
pub fn parse_records(input: &str) -> Vec<Person> {
    let mut persons = Vec::new();
    let mut next_id: i64 = 1;
    let mut buffer = String::new();

    for line in input.trim_start_matches('\u{feff}').lines() {
        buffer.push_str(line.trim());

        if !RECORD_END.is_match(&buffer) {
            continue;
        }

        let fields: Vec<&str> = buffer.split(',').collect();
        if fields.len() >= 4 {
            match parse_fields(&fields) {
                Some(person) => {
                    persons.push(person.with_id(next_id));
                    next_id += 1;
                }
                None => {
                    tracing::warn!("Skipping record with invalid color code: {}", buffer);
                }
            }
        } else {
            tracing::debug!("Skipping record with {} fields: {}", fields.len(), buffer);
        }

        buffer.clear();
    }

    if !buffer.is_empty() {
        tracing::debug!("Discarding incomplete trailing record: {}", buffer);
    }

    persons
}

fn parse_fields(fields: &[&str]) -> Option<Person> {
    let lastname = fields[0].trim();
    let firstname = fields[1].trim();
    let (zipcode, city) = split_address(fields[2].trim());
    let code = fields[3].trim().parse::<i64>().ok()?;

    Some(Person::new(firstname, lastname, zipcode, city, color_label(code)))
}

fn split_address(address: &str) -> (&str, &str) {
    match address.split_once(char::is_whitespace) {
        Some((zipcode, city)) => (zipcode, city.trim_start()),
        None => (address, ""),
    }
}

pub struct CsvPersonDataProvider {
    persons: RwLock<Vec<Person>>,
}

impl CsvPersonDataProvider {
    /// Build from delimited text already in memory
    pub fn from_csv(input: &str) -> Self {
        let persons = parse_records(input);
        tracing::debug!("Parsed {} persons", persons.len());

        Self {
            persons: RwLock::new(persons),
        }
    }

    /// Build from the resource compiled into the crate
    pub fn bundled() -> Self {
        let provider = Self::from_csv(BUNDLED_DATA);
        tracing::info!("Loaded bundled person data");
        provider
    }

    /// Build from a file on disk
    pub async fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = tokio::fs::read_to_string(path).await?;
        let provider = Self::from_csv(&content);

        tracing::info!("Loaded person data from {}", path.display());

        Ok(provider)
    }
}

#[async_trait]
impl PersonDataProvider for CsvPersonDataProvider {
    fn provider_type(&self) -> ProviderType {
        ProviderType::Csv
    }

    async fn all(&self) -> Result<Vec<Person>> {
        let persons = self.persons.read().await;
        Ok(persons.clone())
    }

    async fn save(&self, mut person: Person) -> Result<Person> {
        let mut persons = self.persons.write().await;

        if let Some(id) = person.id {
            if let Some(existing) = persons.iter_mut().find(|p| p.id == Some(id)) {
                *existing = person.clone();
                tracing::info!("Updated person {}", id);
                return Ok(person);
            }
        }

        // Records without a known id are appended after the highest id
        let next_id = persons.iter().filter_map(|p| p.id).max().unwrap_or(0) + 1;
        person.id = Some(next_id);
        persons.push(person.clone());

        tracing::info!("Added person {}", next_id);

        Ok(person)
    }

    async fn find_by_id(&self, id: i64) -> Result<Person> {
        let persons = self.persons.read().await;
        persons
            .iter()
            .find(|p| p.id == Some(id))
            .cloned()
            .ok_or(Error::PersonNotFound(id))
    }

    async fn find_by_color(&self, color: &str) -> Result<Vec<Person>> {
        let persons = self.persons.read().await;
        Ok(persons.iter().filter(|p| p.color == color).cloned().collect())
    }
}
