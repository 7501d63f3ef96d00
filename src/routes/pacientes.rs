use actix_web::web::{self};

use crate::handlers::pacientes;

pub fn config(config: &mut web::ServiceConfig) {
    config.service(
        web::scope("/pacientes")
            .service(
                web::resource("")
                    .route(web::get().to(pacientes::index))
                    .route(web::post().to(pacientes::create)),
            )
            .service(
                web::resource("/{id}")
                    .route(web::get().to(pacientes::show))
                    .route(web::put().to(pacientes::update))
                    .route(web::delete().to(pacientes::destroy)),
            ),
    );
}
