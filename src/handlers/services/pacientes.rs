use std::collections::HashMap;

use chrono::NaiveDate;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, FromQueryResult,
    JoinType, QueryFilter, QueryOrder, QuerySelect, RelationTrait, Select, Set, SqlErr,
    TransactionTrait,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use utoipa::ToSchema;

use crate::{
    db::entities::{convenio, paciente, pessoa},
    utils::{api_response::ApiResponse, app_state::AppState, validator_error::ValidationError},
};

/// Composed Pessoa + Paciente record with the optional Convenio name,
/// exactly as it goes over the wire.
#[derive(Debug, Serialize, Deserialize, FromQueryResult, ToSchema)]
pub struct PacienteResponse {
    pub id_pessoa: i32,
    pub nome: String,
    pub cpf: String,
    pub telefone: Option<String>,
    pub email: Option<String>,
    pub endereco: Option<String>,
    pub data_nascimento: NaiveDate,
    pub id_convenio: Option<i32>,
    pub convenio_nome: Option<String>,
}

#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct PacienteData {
    pub nome: String,
    pub cpf: String,
    pub telefone: Option<String>,
    pub email: Option<String>,
    pub endereco: Option<String>,
    pub data_nascimento: Option<NaiveDate>,
    pub id_convenio: Option<i32>,
}

impl PacienteData {
    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut errors = HashMap::new();

        if self.nome.trim().is_empty() {
            errors.insert("nome".into(), "Nome is required.".into());
        }

        if self.cpf.trim().is_empty() {
            errors.insert("cpf".into(), "CPF is required.".into());
        }

        if self.data_nascimento.is_none() {
            errors.insert(
                "data_nascimento".into(),
                "Data de nascimento is required.".into(),
            );
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ValidationError { errors })
        }
    }
}

/// Pessoa INNER JOIN Paciente LEFT JOIN Convenio, projected into
/// [`PacienteResponse`] columns.
fn paciente_query() -> Select<pessoa::Entity> {
    pessoa::Entity::find()
        .join(JoinType::InnerJoin, pessoa::Relation::Paciente.def())
        .join(JoinType::LeftJoin, paciente::Relation::Convenio.def())
        .select_only()
        .columns([
            pessoa::Column::IdPessoa,
            pessoa::Column::Nome,
            pessoa::Column::Cpf,
            pessoa::Column::Telefone,
            pessoa::Column::Email,
            pessoa::Column::Endereco,
        ])
        .column(paciente::Column::DataNascimento)
        .column(paciente::Column::IdConvenio)
        .column_as(convenio::Column::Nome, "convenio_nome")
}

async fn get_paciente_by_id_internal(
    db: &DatabaseConnection,
    paciente_id: i32,
) -> Result<Option<PacienteResponse>, DbErr> {
    paciente_query()
        .filter(pessoa::Column::IdPessoa.eq(paciente_id))
        .into_model::<PacienteResponse>()
        .one(db)
        .await
}

fn write_error(err: DbErr, action: &'static str) -> ApiResponse {
    translate_write_error(err.sql_err(), &err.to_string(), action)
}

fn translate_write_error(
    sql_err: Option<SqlErr>,
    detail: &str,
    action: &'static str,
) -> ApiResponse {
    match sql_err {
        Some(SqlErr::UniqueConstraintViolation(_)) => {
            log::warn!("Unique constraint violation: {}", detail);
            ApiResponse::new(400, json!({ "message": "CPF already exists" }))
        }
        _ => {
            log::error!("{}: {}", action, detail);
            ApiResponse::new(500, json!({ "message": action }))
        }
    }
}

fn delete_error(err: DbErr) -> ApiResponse {
    translate_delete_error(err.sql_err(), &err.to_string())
}

fn translate_delete_error(sql_err: Option<SqlErr>, detail: &str) -> ApiResponse {
    match sql_err {
        Some(SqlErr::ForeignKeyConstraintViolation(_)) => {
            log::warn!("Foreign key constraint violation: {}", detail);
            ApiResponse::new(
                400,
                json!({ "message": "Cannot delete paciente with existing consultas" }),
            )
        }
        _ => {
            log::error!("Failed to delete paciente: {}", detail);
            ApiResponse::new(500, json!({ "message": "Failed to delete paciente" }))
        }
    }
}

pub async fn get_all_pacientes(app_state: &AppState) -> Result<ApiResponse, ApiResponse> {
    let pacientes = paciente_query()
        .order_by_asc(pessoa::Column::Nome)
        .into_model::<PacienteResponse>()
        .all(&app_state.db)
        .await
        .map_err(|err| {
            log::error!("Failed to fetch pacientes: {}", err);
            ApiResponse::new(500, json!({ "message": "Failed to fetch pacientes" }))
        })?;

    Ok(ApiResponse::new(200, json!(pacientes)))
}

pub async fn get_paciente_by_id(
    app_state: &AppState,
    paciente_id: i32,
) -> Result<ApiResponse, ApiResponse> {
    let paciente = get_paciente_by_id_internal(&app_state.db, paciente_id)
        .await
        .map_err(|err| {
            log::error!("Failed to find paciente: {}", err);
            ApiResponse::new(500, json!({ "message": "Failed to find paciente" }))
        })?
        .ok_or(ApiResponse::new(
            404,
            json!({ "message": "Paciente not found" }),
        ))?;

    Ok(ApiResponse::new(200, json!(paciente)))
}

pub async fn create_paciente(
    app_state: &AppState,
    data: &PacienteData,
) -> Result<ApiResponse, ApiResponse> {
    data.validate().map_err(ApiResponse::from)?;

    let data_nascimento = data.data_nascimento.ok_or_else(|| {
        ApiResponse::new(400, json!({ "message": "Data de nascimento is required" }))
    })?;

    let txn = app_state.db.begin().await.map_err(|err| {
        log::error!("Failed to start transaction: {}", err);
        ApiResponse::new(500, json!({ "message": "Failed to create paciente" }))
    })?;

    // Returning early drops the transaction, which rolls it back.
    let created = pessoa::ActiveModel {
        nome: Set(data.nome.trim().to_owned()),
        cpf: Set(data.cpf.trim().to_owned()),
        telefone: Set(data.telefone.clone()),
        email: Set(data.email.clone()),
        endereco: Set(data.endereco.clone()),
        ..Default::default()
    }
    .insert(&txn)
    .await
    .map_err(|err| write_error(err, "Failed to create paciente"))?;

    paciente::ActiveModel {
        id_paciente: Set(created.id_pessoa),
        data_nascimento: Set(data_nascimento),
        id_convenio: Set(data.id_convenio),
    }
    .insert(&txn)
    .await
    .map_err(|err| write_error(err, "Failed to create paciente"))?;

    txn.commit().await.map_err(|err| {
        log::error!("Failed to commit transaction: {}", err);
        ApiResponse::new(500, json!({ "message": "Failed to create paciente" }))
    })?;

    let paciente = get_paciente_by_id_internal(&app_state.db, created.id_pessoa)
        .await
        .map_err(|err| {
            log::error!("Failed to fetch created paciente: {}", err);
            ApiResponse::new(500, json!({ "message": "Failed to fetch created paciente" }))
        })?
        .ok_or(ApiResponse::new(
            500,
            json!({ "message": "Failed to fetch created paciente" }),
        ))?;

    Ok(ApiResponse::new(201, json!(paciente)))
}

pub async fn edit_paciente(
    app_state: &AppState,
    paciente_id: i32,
    data: &PacienteData,
) -> Result<ApiResponse, ApiResponse> {
    let pessoa_model = pessoa::Entity::find_by_id(paciente_id)
        .one(&app_state.db)
        .await
        .map_err(|err| {
            log::error!("Failed to find paciente: {}", err);
            ApiResponse::new(500, json!({ "message": "Failed to find paciente" }))
        })?
        .ok_or(ApiResponse::new(
            404,
            json!({ "message": "Paciente not found" }),
        ))?;

    let paciente_model = paciente::Entity::find_by_id(paciente_id)
        .one(&app_state.db)
        .await
        .map_err(|err| {
            log::error!("Failed to find paciente: {}", err);
            ApiResponse::new(500, json!({ "message": "Failed to find paciente" }))
        })?
        .ok_or(ApiResponse::new(
            404,
            json!({ "message": "Paciente not found" }),
        ))?;

    data.validate().map_err(ApiResponse::from)?;

    let data_nascimento = data.data_nascimento.ok_or_else(|| {
        ApiResponse::new(400, json!({ "message": "Data de nascimento is required" }))
    })?;

    let txn = app_state.db.begin().await.map_err(|err| {
        log::error!("Failed to start transaction: {}", err);
        ApiResponse::new(500, json!({ "message": "Failed to update paciente" }))
    })?;

    let mut pessoa_update: pessoa::ActiveModel = pessoa_model.into();
    pessoa_update.nome = Set(data.nome.trim().to_owned());
    pessoa_update.cpf = Set(data.cpf.trim().to_owned());
    pessoa_update.telefone = Set(data.telefone.clone());
    pessoa_update.email = Set(data.email.clone());
    pessoa_update.endereco = Set(data.endereco.clone());
    pessoa_update
        .update(&txn)
        .await
        .map_err(|err| write_error(err, "Failed to update paciente"))?;

    let mut paciente_update: paciente::ActiveModel = paciente_model.into();
    paciente_update.data_nascimento = Set(data_nascimento);
    paciente_update.id_convenio = Set(data.id_convenio);
    paciente_update
        .update(&txn)
        .await
        .map_err(|err| write_error(err, "Failed to update paciente"))?;

    txn.commit().await.map_err(|err| {
        log::error!("Failed to commit transaction: {}", err);
        ApiResponse::new(500, json!({ "message": "Failed to update paciente" }))
    })?;

    let paciente = get_paciente_by_id_internal(&app_state.db, paciente_id)
        .await
        .map_err(|err| {
            log::error!("Failed to fetch updated paciente: {}", err);
            ApiResponse::new(500, json!({ "message": "Failed to fetch updated paciente" }))
        })?
        .ok_or(ApiResponse::new(
            500,
            json!({ "message": "Failed to fetch updated paciente" }),
        ))?;

    Ok(ApiResponse::new(200, json!(paciente)))
}

pub async fn destroy_paciente(
    app_state: &AppState,
    paciente_id: i32,
) -> Result<ApiResponse, ApiResponse> {
    get_paciente_by_id_internal(&app_state.db, paciente_id)
        .await
        .map_err(|err| {
            log::error!("Failed to find paciente: {}", err);
            ApiResponse::new(500, json!({ "message": "Failed to find paciente" }))
        })?
        .ok_or(ApiResponse::new(
            404,
            json!({ "message": "Paciente not found" }),
        ))?;

    let txn = app_state.db.begin().await.map_err(|err| {
        log::error!("Failed to start transaction: {}", err);
        ApiResponse::new(500, json!({ "message": "Failed to delete paciente" }))
    })?;

    // Paciente goes first, its primary key references Pessoa.
    paciente::Entity::delete_by_id(paciente_id)
        .exec(&txn)
        .await
        .map_err(delete_error)?;

    pessoa::Entity::delete_by_id(paciente_id)
        .exec(&txn)
        .await
        .map_err(delete_error)?;

    txn.commit().await.map_err(|err| {
        log::error!("Failed to commit transaction: {}", err);
        ApiResponse::new(500, json!({ "message": "Failed to delete paciente" }))
    })?;

    Ok(ApiResponse::new(204, serde_json::Value::Null))
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult, Value};

    use super::*;

    fn birth_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(1990, 1, 15).expect("valid date")
    }

    fn valid_input(nome: &str, cpf: &str) -> PacienteData {
        PacienteData {
            nome: nome.to_owned(),
            cpf: cpf.to_owned(),
            data_nascimento: Some(birth_date()),
            ..Default::default()
        }
    }

    fn paciente_row(id: i32, nome: &str, cpf: &str) -> BTreeMap<&'static str, Value> {
        BTreeMap::from([
            ("id_pessoa", Value::Int(Some(id))),
            ("nome", Value::from(nome)),
            ("cpf", Value::from(cpf)),
            ("telefone", Value::String(None)),
            ("email", Value::String(None)),
            ("endereco", Value::String(None)),
            ("data_nascimento", Value::from(birth_date())),
            ("id_convenio", Value::Int(None)),
            ("convenio_nome", Value::String(None)),
        ])
    }

    fn body_json(res: &ApiResponse) -> serde_json::Value {
        serde_json::from_str(&res.body).expect("valid json body")
    }

    #[test]
    fn validate_flags_missing_required_fields() {
        let err = PacienteData::default().validate().expect_err("must fail");

        assert!(err.errors.contains_key("nome"));
        assert!(err.errors.contains_key("cpf"));
        assert!(err.errors.contains_key("data_nascimento"));
    }

    #[test]
    fn validate_accepts_minimal_input() {
        assert!(valid_input("Ana Souza", "123.456.789-00").validate().is_ok());
    }

    #[test]
    fn unique_violation_translates_to_conflict() {
        let res = translate_write_error(
            Some(SqlErr::UniqueConstraintViolation(
                "duplicate key value violates unique constraint".to_owned(),
            )),
            "detail",
            "Failed to create paciente",
        );

        assert_eq!(res.status_code, 400);
        assert_eq!(body_json(&res)["message"], "CPF already exists");
    }

    #[test]
    fn unknown_write_error_translates_to_server_error() {
        let res = translate_write_error(None, "connection reset", "Failed to create paciente");

        assert_eq!(res.status_code, 500);
        assert_eq!(body_json(&res)["message"], "Failed to create paciente");
    }

    #[test]
    fn foreign_key_violation_blocks_delete() {
        let res = translate_delete_error(
            Some(SqlErr::ForeignKeyConstraintViolation(
                "violates foreign key constraint".to_owned(),
            )),
            "detail",
        );

        assert_eq!(res.status_code, 400);
        assert_eq!(
            body_json(&res)["message"],
            "Cannot delete paciente with existing consultas"
        );
    }

    #[actix_web::test]
    async fn list_returns_rows_as_bare_array() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![
                paciente_row(1, "Ana Souza", "111.111.111-11"),
                paciente_row(2, "Bruno Lima", "222.222.222-22"),
            ]])
            .into_connection();
        let app_state = AppState { db };

        let res = get_all_pacientes(&app_state).await.expect("list succeeds");

        assert_eq!(res.status_code, 200);
        let body = body_json(&res);
        assert_eq!(body.as_array().map(|rows| rows.len()), Some(2));
        assert_eq!(body[0]["nome"], "Ana Souza");
        assert_eq!(body[1]["nome"], "Bruno Lima");
    }

    #[actix_web::test]
    async fn get_by_id_returns_composed_record() {
        let mut row = paciente_row(7, "Ana Souza", "111.111.111-11");
        row.insert("id_convenio", Value::Int(Some(1)));
        row.insert("convenio_nome", Value::from("Unimed"));

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![row]])
            .into_connection();
        let app_state = AppState { db };

        let res = get_paciente_by_id(&app_state, 7).await.expect("found");

        assert_eq!(res.status_code, 200);
        let body = body_json(&res);
        assert_eq!(body["id_pessoa"], 7);
        assert_eq!(body["data_nascimento"], "1990-01-15");
        assert_eq!(body["convenio_nome"], "Unimed");
    }

    #[actix_web::test]
    async fn get_by_id_returns_not_found_for_unknown_id() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<BTreeMap<&'static str, Value>>::new()])
            .into_connection();
        let app_state = AppState { db };

        let err = get_paciente_by_id(&app_state, 99)
            .await
            .expect_err("must be missing");

        assert_eq!(err.status_code, 404);
    }

    #[actix_web::test]
    async fn create_rejects_missing_required_fields_before_touching_db() {
        // No results appended: any statement would panic the mock.
        let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();
        let app_state = AppState { db };

        let err = create_paciente(&app_state, &PacienteData::default())
            .await
            .expect_err("must fail validation");

        assert_eq!(err.status_code, 400);
        let body = body_json(&err);
        assert!(body["errors"]["nome"].is_string());
        assert!(body["errors"]["cpf"].is_string());
        assert!(body["errors"]["data_nascimento"].is_string());
    }

    #[actix_web::test]
    async fn create_inserts_both_rows_and_returns_created_record() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![pessoa::Model {
                id_pessoa: 1,
                nome: "Ana Souza".to_owned(),
                cpf: "111.111.111-11".to_owned(),
                telefone: None,
                email: None,
                endereco: None,
            }]])
            .append_query_results([vec![paciente::Model {
                id_paciente: 1,
                data_nascimento: birth_date(),
                id_convenio: None,
            }]])
            .append_query_results([vec![paciente_row(1, "Ana Souza", "111.111.111-11")]])
            .into_connection();
        let app_state = AppState { db };

        let res = create_paciente(&app_state, &valid_input("Ana Souza", "111.111.111-11"))
            .await
            .expect("create succeeds");

        assert_eq!(res.status_code, 201);
        let body = body_json(&res);
        assert_eq!(body["id_pessoa"], 1);
        assert_eq!(body["nome"], "Ana Souza");
    }

    #[actix_web::test]
    async fn update_returns_not_found_without_side_effects() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<pessoa::Model>::new()])
            .into_connection();
        let app_state = AppState { db };

        let err = edit_paciente(&app_state, 42, &valid_input("Ana Souza", "111.111.111-11"))
            .await
            .expect_err("must be missing");

        assert_eq!(err.status_code, 404);
    }

    #[actix_web::test]
    async fn update_writes_both_tables_and_returns_updated_record() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![pessoa::Model {
                id_pessoa: 3,
                nome: "Ana Souza".to_owned(),
                cpf: "111.111.111-11".to_owned(),
                telefone: None,
                email: None,
                endereco: None,
            }]])
            .append_query_results([vec![paciente::Model {
                id_paciente: 3,
                data_nascimento: birth_date(),
                id_convenio: None,
            }]])
            .append_query_results([vec![pessoa::Model {
                id_pessoa: 3,
                nome: "Ana Souza Santos".to_owned(),
                cpf: "111.111.111-11".to_owned(),
                telefone: None,
                email: None,
                endereco: None,
            }]])
            .append_query_results([vec![paciente::Model {
                id_paciente: 3,
                data_nascimento: birth_date(),
                id_convenio: None,
            }]])
            .append_query_results([vec![paciente_row(3, "Ana Souza Santos", "111.111.111-11")]])
            .into_connection();
        let app_state = AppState { db };

        let res = edit_paciente(
            &app_state,
            3,
            &valid_input("Ana Souza Santos", "111.111.111-11"),
        )
        .await
        .expect("update succeeds");

        assert_eq!(res.status_code, 200);
        assert_eq!(body_json(&res)["nome"], "Ana Souza Santos");
    }

    #[actix_web::test]
    async fn destroy_returns_not_found_for_unknown_id() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<BTreeMap<&'static str, Value>>::new()])
            .into_connection();
        let app_state = AppState { db };

        let err = destroy_paciente(&app_state, 99)
            .await
            .expect_err("must be missing");

        assert_eq!(err.status_code, 404);
    }

    #[actix_web::test]
    async fn destroy_deletes_paciente_then_pessoa() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![paciente_row(5, "Ana Souza", "111.111.111-11")]])
            .append_exec_results([
                MockExecResult {
                    last_insert_id: 0,
                    rows_affected: 1,
                },
                MockExecResult {
                    last_insert_id: 0,
                    rows_affected: 1,
                },
            ])
            .into_connection();
        let app_state = AppState { db };

        let res = destroy_paciente(&app_state, 5).await.expect("delete succeeds");

        assert_eq!(res.status_code, 204);
        assert!(res.body.is_empty());
    }
}
