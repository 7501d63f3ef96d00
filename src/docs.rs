use utoipa::OpenApi;

use crate::handlers::services::pacientes::{PacienteData, PacienteResponse};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Medical Clinic API",
        description = "CRUD API for managing pacientes in a medical clinic"
    ),
    paths(
        crate::handlers::health::health,
        crate::handlers::pacientes::index,
        crate::handlers::pacientes::show,
        crate::handlers::pacientes::create,
        crate::handlers::pacientes::update,
        crate::handlers::pacientes::destroy,
    ),
    components(schemas(PacienteData, PacienteResponse)),
    tags(
        (name = "Pacientes", description = "Endpoints for managing pacientes"),
        (name = "Health", description = "Service health")
    )
)]
pub struct ApiDoc;
