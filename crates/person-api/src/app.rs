use anyhow::Result;
use person_core::{
    CsvPersonDataProvider, PersonDataProvider, PersonDataProviderFactory, PersonService,
};
use person_db::{Database, DbPersonDataProvider};
use std::sync::Arc;

use crate::{config::Settings, routes, state::ApiState};

/// Register every available provider and select the configured one
pub async fn build_service(settings: &Settings) -> Result<PersonService> {
    let mut providers: Vec<Arc<dyn PersonDataProvider>> = Vec::new();

    let csv = match settings.data_file {
        Some(ref path) => CsvPersonDataProvider::from_path(path).await?,
        None => CsvPersonDataProvider::bundled(),
    };
    providers.push(Arc::new(csv));

    if let Some(ref db_url) = settings.database_url {
        let database = Database::new(db_url, settings.max_connections).await?;
        database.init_schema().await?;
        providers.push(Arc::new(DbPersonDataProvider::new(Arc::new(database))));
    } else {
        tracing::warn!("No DATABASE_URL provided, db provider unavailable");
    }

    let factory = PersonDataProviderFactory::new(providers)?;
    Ok(PersonService::new(&factory, settings.provider)?)
}

/// Build the service and serve the API until the process exits
pub async fn serve(settings: Settings) -> Result<()> {
    let service = build_service(&settings).await?;
    let app = routes::create_router(ApiState::new(service));

    let addr = settings.bind_address();
    tracing::info!("Person API server running on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
