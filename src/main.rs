use std::{error::Error, fmt::Display};

use actix_cors::Cors;
use actix_web::{App, HttpServer, middleware, web};
use sea_orm::{Database, DatabaseConnection};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    docs::ApiDoc,
    utils::{app_state::AppState, migrate::migrate_and_seed},
};

mod db;
mod docs;
mod handlers;
mod routes;
mod seeders;
mod utils;

#[derive(Debug)]
struct MainError {
    message: String,
}

impl Display for MainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error: {}", self.message)
    }
}

impl Error for MainError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        None
    }

    fn description(&self) -> &str {
        &self.message
    }

    fn cause(&self) -> Option<&dyn Error> {
        self.source()
    }
}

#[actix_web::main]
async fn main() -> Result<(), MainError> {
    if std::env::var_os("RUST_LOG").is_none() {
        unsafe { std::env::set_var("RUST_LOG", "actix_web=info") }
    }

    dotenv::dotenv().ok();
    env_logger::init();

    let address = (utils::constants::ADDRESS).clone();
    let port = *utils::constants::PORT;
    let database_url = (utils::constants::DATABASE_URL).clone();
    let allowed_origins = (utils::constants::ALLOWED_ORIGINS).clone();

    let db: DatabaseConnection = Database::connect(database_url)
        .await
        .map_err(|err| MainError {
            message: err.to_string(),
        })?;

    migrate_and_seed(&db).await.map_err(|err| MainError {
        message: err.to_string(),
    })?;

    log::info!("Server is running on port {}", port);
    log::info!("Health check: http://{}:{}/health", address, port);
    log::info!("API documentation: http://{}:{}/api-docs/", address, port);

    let app_state = web::Data::new(AppState { db });

    HttpServer::new(move || {
        let mut cors = Cors::default()
            .allow_any_method()
            .allow_any_header()
            .supports_credentials()
            .max_age(3600);

        for origin in &allowed_origins {
            cors = cors.allowed_origin(origin);
        }

        App::new()
            .app_data(app_state.clone())
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(
                middleware::DefaultHeaders::new()
                    .add(("X-Content-Type-Options", "nosniff"))
                    .add(("X-Frame-Options", "DENY"))
                    .add(("X-XSS-Protection", "0"))
                    .add(("Referrer-Policy", "no-referrer")),
            )
            .service(handlers::health::health)
            .service(
                SwaggerUi::new("/api-docs/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()),
            )
            .configure(routes::api::config)
            .default_service(web::route().to(handlers::fallback::not_found))
    })
    .bind((address, port))
    .map_err(|err| MainError {
        message: err.to_string(),
    })?
    .run()
    .await
    .map_err(|err| MainError {
        message: err.to_string(),
    })
}
