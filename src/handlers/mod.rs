pub mod health;
pub mod user;

use actix_web::web;

/// Mounts the full HTTP surface; shared between `main` and the tests.
pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .service(
                web::scope("/users")
                    .service(user::list_users)
                    .service(user::create_user)
                    .service(user::update_user)
                    .service(user::delete_user)
                    .service(user::get_user),
            )
            .route("/health", web::get().to(health::health_check)),
    );
}
