use actix_web::web;

use crate::{
    handlers::services::pacientes::{
        PacienteData, PacienteResponse, create_paciente, destroy_paciente, edit_paciente,
        get_all_pacientes, get_paciente_by_id,
    },
    utils::{api_response::ApiResponse, app_state::AppState},
};

#[utoipa::path(
    get,
    path = "/api/pacientes",
    responses(
        (status = 200, description = "All pacientes with their convenio details", body = [PacienteResponse]),
        (status = 500, description = "Internal server error")
    ),
    tag = "Pacientes"
)]
pub async fn index(app_state: web::Data<AppState>) -> Result<ApiResponse, ApiResponse> {
    get_all_pacientes(&app_state).await
}

#[utoipa::path(
    get,
    path = "/api/pacientes/{id}",
    params(("id" = i32, Path, description = "Paciente id")),
    responses(
        (status = 200, description = "Paciente found", body = PacienteResponse),
        (status = 404, description = "Paciente not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Pacientes"
)]
pub async fn show(
    app_state: web::Data<AppState>,
    path: web::Path<i32>,
) -> Result<ApiResponse, ApiResponse> {
    let paciente_id = path.into_inner();

    get_paciente_by_id(&app_state, paciente_id).await
}

#[utoipa::path(
    post,
    path = "/api/pacientes",
    request_body = PacienteData,
    responses(
        (status = 201, description = "Paciente created", body = PacienteResponse),
        (status = 400, description = "Missing required fields or CPF already exists"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Pacientes"
)]
pub async fn create(
    app_state: web::Data<AppState>,
    data: web::Json<PacienteData>,
) -> Result<ApiResponse, ApiResponse> {
    create_paciente(&app_state, &data).await
}

#[utoipa::path(
    put,
    path = "/api/pacientes/{id}",
    params(("id" = i32, Path, description = "Paciente id")),
    request_body = PacienteData,
    responses(
        (status = 200, description = "Paciente updated", body = PacienteResponse),
        (status = 400, description = "Missing required fields or CPF already exists"),
        (status = 404, description = "Paciente not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Pacientes"
)]
pub async fn update(
    app_state: web::Data<AppState>,
    path: web::Path<i32>,
    data: web::Json<PacienteData>,
) -> Result<ApiResponse, ApiResponse> {
    let paciente_id = path.into_inner();

    edit_paciente(&app_state, paciente_id, &data).await
}

#[utoipa::path(
    delete,
    path = "/api/pacientes/{id}",
    params(("id" = i32, Path, description = "Paciente id")),
    responses(
        (status = 204, description = "Paciente deleted"),
        (status = 400, description = "Paciente has existing consultas"),
        (status = 404, description = "Paciente not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Pacientes"
)]
pub async fn destroy(
    app_state: web::Data<AppState>,
    path: web::Path<i32>,
) -> Result<ApiResponse, ApiResponse> {
    let paciente_id = path.into_inner();

    destroy_paciente(&app_state, paciente_id).await
}
