use migration::{Migrator, MigratorTrait};
use sea_orm::DatabaseConnection;
use serde_json::json;

use crate::{seeders::all::seed_all, utils::api_response::ApiResponse};

/// Brings the schema up to date and seeds lookup data before the server
/// starts accepting requests.
pub async fn migrate_and_seed(db: &DatabaseConnection) -> Result<(), ApiResponse> {
    Migrator::up(db, None).await.map_err(|err| {
        log::error!("Failed to migrate database: {}", err);
        ApiResponse::new(500, json!({ "message": err.to_string() }))
    })?;

    seed_all(db).await?;

    Ok(())
}
