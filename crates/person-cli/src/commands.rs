use anyhow::{Context, Result};
use person_api::Settings;
use person_core::Person;
use person_db::Database;

use crate::cli::Commands;

pub async fn execute(command: Commands, mut settings: Settings, json: bool) -> Result<()> {
    match command {
        Commands::Serve { port } => {
            if let Some(port) = port {
                settings.port = port;
            }
            person_api::serve(settings).await?;
        }

        Commands::List => {
            let service = person_api::build_service(&settings).await?;
            let persons = service.all().await?;
            tracing::debug!(
                "Listed {} persons from {} provider",
                persons.len(),
                service.provider_type()
            );
            print_persons(&persons, json)?;
        }

        Commands::Get { id } => {
            let service = person_api::build_service(&settings).await?;
            let person = service.find_by_id(id).await?;
            if json {
                println!("{}", serde_json::to_string_pretty(&person)?);
            } else {
                print_person(&person);
            }
        }

        Commands::Color { color } => {
            let service = person_api::build_service(&settings).await?;
            let persons = service.find_by_color(&color).await?;
            tracing::debug!("Found {} persons with color {}", persons.len(), color);
            print_persons(&persons, json)?;
        }

        Commands::InitDb => {
            let db_url = settings
                .database_url
                .as_deref()
                .context("DATABASE_URL must be set to initialize the database")?;

            println!("Initializing database...");
            tracing::info!("Initializing person schema");
            let database = Database::new(db_url, settings.max_connections).await?;
            database.init_schema().await?;
            println!("✓ Database schema initialized");
        }
    }

    Ok(())
}

fn print_persons(persons: &[Person], json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(persons)?);
        return Ok(());
    }

    if persons.is_empty() {
        println!("No persons found");
        return Ok(());
    }

    for person in persons {
        print_person(person);
    }
    println!("\n{} person(s)", persons.len());

    Ok(())
}

fn print_person(person: &Person) {
    println!("{}", format_person(person));
}

fn format_person(person: &Person) -> String {
    let id = person
        .id
        .map(|id| id.to_string())
        .unwrap_or_else(|| "-".to_string());

    format!(
        "{:>4}  {}, {}  {} {}  [{}]",
        id, person.lastname, person.firstname, person.zipcode, person.city, person.color
    )
}
