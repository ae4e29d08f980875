use actix_web::{web, HttpResponse, Responder};
use serde::Deserialize;
use std::sync::Arc;

use crate::db::memory::MemStorage;
use crate::models::flight::NewFlight;

#[derive(Debug, Deserialize)]
pub struct FlightQuery {
    pub from: Option<String>,
    pub to: Option<String>,
}

/*
    /api/flights?from=&to=
*/
pub async fn get_flights(
    query: web::Query<FlightQuery>,
    data: web::Data<Arc<MemStorage>>,
) -> impl Responder {
    let storage = data.into_inner();
    let flights = storage
        .get_flights(query.from.as_deref(), query.to.as_deref())
        .await;
    HttpResponse::Ok().json(flights)
}

/*
    /api/flights/{id}
*/
pub async fn get_by_id(
    path: web::Path<String>,
    data: web::Data<Arc<MemStorage>>,
) -> impl Responder {
    let storage = data.into_inner();
    let id: u32 = match path.into_inner().parse() {
        Ok(id) => id,
        Err(_) => return HttpResponse::BadRequest().body("Invalid flight ID"),
    };

    match storage.get_flight(id).await {
        Some(flight) => HttpResponse::Ok().json(flight),
        None => HttpResponse::NotFound().body("Flight not found"),
    }
}

/*
    POST /api/flights
*/
pub async fn create(
    payload: web::Json<NewFlight>,
    data: web::Data<Arc<MemStorage>>,
) -> impl Responder {
    let storage = data.into_inner();
    let flight = storage.create_flight(payload.into_inner()).await;
    HttpResponse::Created().json(flight)
}
