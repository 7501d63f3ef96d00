use actix_web::web::{self, ServiceConfig};

use crate::routes;

pub fn config(config: &mut ServiceConfig) {
    config.service(web::scope("/api").configure(routes::pacientes::config));
}

#[cfg(test)]
mod tests {
    use actix_web::{App, test, web};
    use sea_orm::{DatabaseBackend, MockDatabase, Value};
    use std::collections::BTreeMap;

    use crate::{
        handlers::{fallback::not_found, health::health},
        utils::app_state::AppState,
    };

    #[actix_web::test]
    async fn health_endpoint_reports_ok() {
        let app = test::init_service(App::new().service(health)).await;

        let req = test::TestRequest::get().uri("/health").to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), 200);
        let body: serde_json::Value = test::read_body_json(res).await;
        assert_eq!(body["status"], "OK");
        assert_eq!(body["message"], "API is running");
    }

    #[actix_web::test]
    async fn unmatched_route_returns_404_body() {
        let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(AppState { db }))
                .configure(super::config)
                .default_service(web::route().to(not_found)),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/unknown").to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), 404);
        let body: serde_json::Value = test::read_body_json(res).await;
        assert_eq!(body["message"], "Route not found");
    }

    #[actix_web::test]
    async fn list_endpoint_is_reachable_through_the_api_scope() {
        let row = BTreeMap::from([
            ("id_pessoa", Value::Int(Some(1))),
            ("nome", Value::from("Ana Souza")),
            ("cpf", Value::from("111.111.111-11")),
            ("telefone", Value::String(None)),
            ("email", Value::String(None)),
            ("endereco", Value::String(None)),
            (
                "data_nascimento",
                Value::from(
                    chrono::NaiveDate::from_ymd_opt(1990, 1, 15).expect("valid date"),
                ),
            ),
            ("id_convenio", Value::Int(None)),
            ("convenio_nome", Value::String(None)),
        ]);
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![row]])
            .into_connection();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(AppState { db }))
                .configure(super::config),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/pacientes").to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), 200);
        let body: serde_json::Value = test::read_body_json(res).await;
        assert_eq!(body[0]["nome"], "Ana Souza");
    }
}
