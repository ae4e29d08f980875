use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use env_logger::Env;

use tripcraft_api::db::memory::MemStorage;
use tripcraft_api::routes;

const HOST: &str = "0.0.0.0";
const PORT: u16 = 8080;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    if cfg!(debug_assertions) {
        dotenv::dotenv().ok();
    }

    let host = std::env::var("HOST").unwrap_or_else(|_| HOST.to_string());
    let port: u16 = std::env::var("PORT")
        .unwrap_or_else(|_| PORT.to_string())
        .parse()
        .unwrap_or(PORT);
    println!("Attempting to bind to {}:{}", host, port);

    let storage = Arc::new(MemStorage::seeded());
    println!("Catalog seeded");

    HttpServer::new(move || {
        App::new()
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header()
                    .max_age(3600),
            )
            .wrap(Logger::default())
            .route("/health", web::get().to(|| async { "OK" }))
            .app_data(web::Data::new(storage.clone()))
            .service(
                web::scope("/api")
                    .route(
                        "/destinations",
                        web::get().to(routes::destination::get_destinations),
                    )
                    .route("/destinations", web::post().to(routes::destination::create))
                    .route(
                        "/destinations/{id}",
                        web::get().to(routes::destination::get_by_id),
                    )
                    .route("/flights", web::get().to(routes::flight::get_flights))
                    .route("/flights", web::post().to(routes::flight::create))
                    .route("/flights/{id}", web::get().to(routes::flight::get_by_id))
                    .route("/hotels", web::get().to(routes::hotel::get_hotels))
                    .route("/hotels", web::post().to(routes::hotel::create))
                    .route("/hotels/{id}", web::get().to(routes::hotel::get_by_id))
                    .route(
                        "/activities",
                        web::get().to(routes::activity::get_activities),
                    )
                    .route("/activities", web::post().to(routes::activity::create))
                    .route(
                        "/activities/{id}",
                        web::get().to(routes::activity::get_by_id),
                    )
                    .route(
                        "/itineraries",
                        web::get().to(routes::itinerary::get_itineraries),
                    )
                    .route("/itineraries", web::post().to(routes::itinerary::create))
                    .route(
                        "/itineraries/{id}",
                        web::get().to(routes::itinerary::get_by_id),
                    )
                    .route(
                        "/itineraries/{id}",
                        web::put().to(routes::itinerary::update),
                    )
                    .route(
                        "/itineraries/{id}",
                        web::delete().to(routes::itinerary::delete),
                    ),
            )
    })
    .bind((host, port))?
    .run()
    .await
}
