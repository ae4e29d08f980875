use actix_web::{web, HttpResponse, Responder};
use serde::Deserialize;
use std::sync::Arc;

use crate::db::memory::MemStorage;
use crate::models::activity::NewActivity;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityQuery {
    pub destination_id: Option<u32>,
}

/*
    /api/activities?destinationId=
*/
pub async fn get_activities(
    query: web::Query<ActivityQuery>,
    data: web::Data<Arc<MemStorage>>,
) -> impl Responder {
    let storage = data.into_inner();
    let activities = storage.get_activities(query.destination_id).await;
    HttpResponse::Ok().json(activities)
}

/*
    /api/activities/{id}
*/
pub async fn get_by_id(
    path: web::Path<String>,
    data: web::Data<Arc<MemStorage>>,
) -> impl Responder {
    let storage = data.into_inner();
    let id: u32 = match path.into_inner().parse() {
        Ok(id) => id,
        Err(_) => return HttpResponse::BadRequest().body("Invalid activity ID"),
    };

    match storage.get_activity(id).await {
        Some(activity) => HttpResponse::Ok().json(activity),
        None => HttpResponse::NotFound().body("Activity not found"),
    }
}

/*
    POST /api/activities
*/
pub async fn create(
    payload: web::Json<NewActivity>,
    data: web::Data<Arc<MemStorage>>,
) -> impl Responder {
    let storage = data.into_inner();
    let activity = storage.create_activity(payload.into_inner()).await;
    HttpResponse::Created().json(activity)
}
