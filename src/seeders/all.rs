use serde_json::json;
use std::{future::Future, pin::Pin};

use sea_orm::DatabaseConnection;

use crate::{seeders::convenios::seed_convenios, utils::api_response::ApiResponse};

pub async fn seed_all(db: &DatabaseConnection) -> Result<ApiResponse, ApiResponse> {
    // Define a type alias for clarity with lifetime
    type SeederFn<'a> =
        fn(
            &'a DatabaseConnection,
        ) -> Pin<Box<dyn Future<Output = Result<ApiResponse, ApiResponse>> + Send + 'a>>;

    let seeders: Vec<SeederFn<'_>> = vec![|db| Box::pin(seed_convenios(db))];

    for seeder in seeders {
        let res = seeder(db).await?;
        if res.status_code != 200 {
            return Err(res);
        }
    }

    Ok(ApiResponse::new(
        200,
        json!({ "message": "All seeders ran successfully".to_string() }),
    ))
}
