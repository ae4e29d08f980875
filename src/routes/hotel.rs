use actix_web::{web, HttpResponse, Responder};
use serde::Deserialize;
use std::sync::Arc;

use crate::db::memory::MemStorage;
use crate::models::hotel::NewHotel;

#[derive(Debug, Deserialize)]
pub struct HotelQuery {
    pub city: Option<String>,
}

/*
    /api/hotels?city=
*/
pub async fn get_hotels(
    query: web::Query<HotelQuery>,
    data: web::Data<Arc<MemStorage>>,
) -> impl Responder {
    let storage = data.into_inner();
    let hotels = storage.get_hotels(query.city.as_deref()).await;
    HttpResponse::Ok().json(hotels)
}

/*
    /api/hotels/{id}
*/
pub async fn get_by_id(
    path: web::Path<String>,
    data: web::Data<Arc<MemStorage>>,
) -> impl Responder {
    let storage = data.into_inner();
    let id: u32 = match path.into_inner().parse() {
        Ok(id) => id,
        Err(_) => return HttpResponse::BadRequest().body("Invalid hotel ID"),
    };

    match storage.get_hotel(id).await {
        Some(hotel) => HttpResponse::Ok().json(hotel),
        None => HttpResponse::NotFound().body("Hotel not found"),
    }
}

/*
    POST /api/hotels
*/
pub async fn create(
    payload: web::Json<NewHotel>,
    data: web::Data<Arc<MemStorage>>,
) -> impl Responder {
    let storage = data.into_inner();
    let hotel = storage.create_hotel(payload.into_inner()).await;
    HttpResponse::Created().json(hotel)
}
