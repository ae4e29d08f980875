use actix_web::{web, HttpResponse, Responder};
use serde::Deserialize;
use std::sync::Arc;

use crate::db::memory::MemStorage;
use crate::models::itinerary::{ItineraryUpdate, NewItinerary};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItineraryQuery {
    pub user_id: Option<u32>,
}

/*
    /api/itineraries?userId=
*/
pub async fn get_itineraries(
    query: web::Query<ItineraryQuery>,
    data: web::Data<Arc<MemStorage>>,
) -> impl Responder {
    let storage = data.into_inner();
    HttpResponse::Ok().json(storage.get_itineraries(query.user_id).await)
}

/*
    /api/itineraries/{id}
*/
pub async fn get_by_id(
    path: web::Path<String>,
    data: web::Data<Arc<MemStorage>>,
) -> impl Responder {
    let storage = data.into_inner();
    let id: u32 = match path.into_inner().parse() {
        Ok(id) => id,
        Err(_) => return HttpResponse::BadRequest().body("Invalid itinerary ID"),
    };

    match storage.get_itinerary(id).await {
        Some(itinerary) => HttpResponse::Ok().json(itinerary),
        None => HttpResponse::NotFound().body("Itinerary not found"),
    }
}

/*
    POST /api/itineraries

    The payload carries the fully assembled trip: name, date range, day plans
    and the total the builder last computed. The store assigns the id.
*/
pub async fn create(
    payload: web::Json<NewItinerary>,
    data: web::Data<Arc<MemStorage>>,
) -> impl Responder {
    let storage = data.into_inner();
    let itinerary = storage.create_itinerary(payload.into_inner()).await;
    println!("Saved itinerary {} ({})", itinerary.id, itinerary.name);
    HttpResponse::Created().json(itinerary)
}

/*
    PUT /api/itineraries/{id}
*/
pub async fn update(
    path: web::Path<String>,
    payload: web::Json<ItineraryUpdate>,
    data: web::Data<Arc<MemStorage>>,
) -> impl Responder {
    let storage = data.into_inner();
    let id: u32 = match path.into_inner().parse() {
        Ok(id) => id,
        Err(_) => return HttpResponse::BadRequest().body("Invalid itinerary ID"),
    };

    match storage.update_itinerary(id, payload.into_inner()).await {
        Some(itinerary) => HttpResponse::Ok().json(itinerary),
        None => HttpResponse::NotFound().body("Itinerary not found"),
    }
}

/*
    DELETE /api/itineraries/{id}
*/
pub async fn delete(path: web::Path<String>, data: web::Data<Arc<MemStorage>>) -> impl Responder {
    let storage = data.into_inner();
    let id: u32 = match path.into_inner().parse() {
        Ok(id) => id,
        Err(_) => return HttpResponse::BadRequest().body("Invalid itinerary ID"),
    };

    if storage.delete_itinerary(id).await {
        HttpResponse::NoContent().finish()
    } else {
        HttpResponse::NotFound().body("Itinerary not found")
    }
}
