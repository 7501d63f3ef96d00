use sea_orm::{DatabaseConnection, EntityTrait, PaginatorTrait, Set};
use serde_json::json;

use crate::{db::entities::convenio, utils::api_response::ApiResponse};

const DEFAULT_CONVENIOS: [&str; 5] = [
    "Amil",
    "Bradesco Saúde",
    "Hapvida",
    "SulAmérica",
    "Unimed",
];

/// Seeds the Convenio lookup table on first boot; later boots are a no-op.
pub async fn seed_convenios(db: &DatabaseConnection) -> Result<ApiResponse, ApiResponse> {
    let existing = convenio::Entity::find().count(db).await.map_err(|err| {
        log::error!("Failed to count convenios: {}", err);
        ApiResponse::new(500, json!({ "message": err.to_string() }))
    })?;

    if existing == 0 {
        let convenios = DEFAULT_CONVENIOS.iter().map(|nome| convenio::ActiveModel {
            nome: Set((*nome).to_owned()),
            ..Default::default()
        });

        convenio::Entity::insert_many(convenios)
            .exec(db)
            .await
            .map_err(|err| {
                log::error!("Failed to seed convenios: {}", err);
                ApiResponse::new(500, json!({ "message": err.to_string() }))
            })?;
    }

    Ok(ApiResponse::new(
        200,
        json!({ "message": "Convenios seeded successfully" }),
    ))
}
