use actix_web::{web, HttpResponse, Responder};
use std::sync::Arc;

use crate::db::memory::MemStorage;
use crate::models::destination::NewDestination;

/*
    /api/destinations
*/
pub async fn get_destinations(data: web::Data<Arc<MemStorage>>) -> impl Responder {
    let storage = data.into_inner();
    HttpResponse::Ok().json(storage.get_destinations().await)
}

/*
    /api/destinations/{id}
*/
pub async fn get_by_id(
    path: web::Path<String>,
    data: web::Data<Arc<MemStorage>>,
) -> impl Responder {
    let storage = data.into_inner();
    let id: u32 = match path.into_inner().parse() {
        Ok(id) => id,
        Err(_) => return HttpResponse::BadRequest().body("Invalid destination ID"),
    };

    match storage.get_destination(id).await {
        Some(destination) => HttpResponse::Ok().json(destination),
        None => HttpResponse::NotFound().body("Destination not found"),
    }
}

/*
    POST /api/destinations
*/
pub async fn create(
    payload: web::Json<NewDestination>,
    data: web::Data<Arc<MemStorage>>,
) -> impl Responder {
    let storage = data.into_inner();
    let destination = storage.create_destination(payload.into_inner()).await;
    HttpResponse::Created().json(destination)
}
