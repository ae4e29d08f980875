use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App};

use tripcraft_api::db::memory::MemStorage;
use tripcraft_api::routes;

pub struct TestApp {
    pub storage: Arc<MemStorage>,
}

impl TestApp {
    /// A fresh app with the demo catalog loaded and no saved itineraries.
    pub fn new() -> Self {
        Self {
            storage: Arc::new(MemStorage::seeded()),
        }
    }

    pub fn create_app(
        &self,
    ) -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .app_data(web::Data::new(self.storage.clone()))
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header()
                    .max_age(3600),
            )
            .wrap(Logger::default())
            .route("/health", web::get().to(|| async { "OK" }))
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
    }
}
