use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use anyhow::Context;
use dotenv::dotenv;

use user_directory::config::AppConfig;
use user_directory::handlers;
use user_directory::services::database::DatabaseService;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    env_logger::init();

    let config = AppConfig::from_env();

    let database_service = DatabaseService::new(&config.database_url)
        .await
        .context("failed to initialize database")?;

    println!("🚀 Starting user directory server on {}", config.bind_address);
    println!("  GET    /api/users       - List all users");
    println!("  GET    /api/users/{{id}}  - Get user by id");
    println!("  POST   /api/users       - Create user");
    println!("  PUT    /api/users       - Update user");
    println!("  DELETE /api/users       - Delete user");

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header(),
            )
            .app_data(web::Data::new(database_service.clone()))
            .configure(handlers::routes)
    })
    .bind(&config.bind_address)?
    .run()
    .await?;

    Ok(())
}
