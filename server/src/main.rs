use actix_cors::Cors;
use actix_web::{http::header, web, App, HttpServer};
use dotenv::dotenv;
use log::info;
use std::env;

use staffdesk_backend::{db, employee_routes, ALLOWED_ORIGINS};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init();

    let port: u16 = match env::var("PORT") {
        Ok(value) => value.parse().expect("PORT must be a valid port number"),
        Err(_) => 5000,
    };

    // Initialize the database pool and make sure the employees table exists
    let pool = db::create_pool().await;
    db::ensure_schema(&pool)
        .await
        .expect("Failed to initialize the employees table");

    info!("Starting server at 127.0.0.1:{}", port);

    HttpServer::new(move || {
        let mut cors = Cors::default()
            .allowed_methods(vec!["GET", "POST", "PUT", "DELETE"])
            .allowed_headers(vec![header::CONTENT_TYPE, header::ACCEPT]);
        for origin in ALLOWED_ORIGINS {
            cors = cors.allowed_origin(origin);
        }

        App::new()
            .app_data(web::Data::new(pool.clone()))
            .wrap(cors)
            .configure(employee_routes)
    })
    .bind(("127.0.0.1", port))?
    .run()
    .await
}
