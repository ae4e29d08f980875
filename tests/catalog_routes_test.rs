mod common;

use actix_web::test;
use serde_json::json;
use serial_test::serial;

use common::TestApp;

#[actix_rt::test]
#[serial]
async fn test_get_destinations_returns_seeded_catalog() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::get().uri("/api/destinations").to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body: serde_json::Value = test::read_body_json(resp).await;
    let destinations = body.as_array().unwrap();
    assert_eq!(destinations.len(), 6);
    assert_eq!(destinations[0]["name"], "Paris");
    assert_eq!(destinations[0]["id"], 1);
}

#[actix_rt::test]
#[serial]
async fn test_get_destination_by_id() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::get().uri("/api/destinations/2").to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["name"], "Tokyo");
    assert_eq!(body["country"], "Japan");
}

#[actix_rt::test]
#[serial]
async fn test_get_destination_missing_and_malformed_ids() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::get().uri("/api/destinations/999").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 404);

    let req = test::TestRequest::get().uri("/api/destinations/abc").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
}

#[actix_rt::test]
#[serial]
async fn test_create_destination_assigns_next_id() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::post()
        .uri("/api/destinations")
        .set_json(&json!({
            "name": "Lisbon",
            "country": "Portugal",
            "description": "Hills, trams and pastel de nata.",
            "imageUrl": "https://example.com/lisbon.jpg",
            "lat": 38.7223,
            "lng": -9.1393
        }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 201);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["id"], 7);
    assert_eq!(body["name"], "Lisbon");
}

#[actix_rt::test]
#[serial]
async fn test_get_flights_filters_by_cities() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::get().uri("/api/flights").to_request();
    let resp = test::call_service(&app, req).await;
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body.as_array().unwrap().len(), 8);

    // Case-insensitive departure filter.
    let req = test::TestRequest::get()
        .uri("/api/flights?from=paris")
        .to_request();
    let resp = test::call_service(&app, req).await;
    let body: serde_json::Value = test::read_body_json(resp).await;
    let flights = body.as_array().unwrap();
    assert_eq!(flights.len(), 1);
    assert_eq!(flights[0]["flightNumber"], "AA567");

    // Both ends.
    let req = test::TestRequest::get()
        .uri("/api/flights?from=New%20York&to=Paris")
        .to_request();
    let resp = test::call_service(&app, req).await;
    let body: serde_json::Value = test::read_body_json(resp).await;
    let flights = body.as_array().unwrap();
    assert_eq!(flights.len(), 1);
    assert_eq!(flights[0]["airline"], "Sky Airways");

    // No match is an empty list, not an error.
    let req = test::TestRequest::get()
        .uri("/api/flights?from=Atlantis")
        .to_request();
    let resp = test::call_service(&app, req).await;
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert!(body.as_array().unwrap().is_empty());
}

#[actix_rt::test]
#[serial]
async fn test_get_flight_by_id() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::get().uri("/api/flights/2").to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["flightNumber"], "GA456");
    assert_eq!(body["price"], 900.0);

    let req = test::TestRequest::get().uri("/api/flights/999").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 404);
}

#[actix_rt::test]
#[serial]
async fn test_get_hotels_by_city() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::get().uri("/api/hotels?city=Tokyo").to_request();
    let resp = test::call_service(&app, req).await;
    let body: serde_json::Value = test::read_body_json(resp).await;
    let hotels = body.as_array().unwrap();
    assert_eq!(hotels.len(), 1);
    assert_eq!(hotels[0]["name"], "Imperial Tokyo");
    assert_eq!(hotels[0]["price"], 320.0);
}

#[actix_rt::test]
#[serial]
async fn test_get_hotel_by_id() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::get().uri("/api/hotels/1").to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["name"], "Grand Plaza Hotel");
    assert_eq!(body["city"], "Paris");

    let req = test::TestRequest::get().uri("/api/hotels/abc").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
}

#[actix_rt::test]
#[serial]
async fn test_get_activities_by_destination() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::get()
        .uri("/api/activities?destinationId=1")
        .to_request();
    let resp = test::call_service(&app, req).await;
    let body: serde_json::Value = test::read_body_json(resp).await;
    let activities = body.as_array().unwrap();
    assert_eq!(activities.len(), 3);
    assert!(activities
        .iter()
        .all(|a| a["destinationId"] == 1));

    let req = test::TestRequest::get()
        .uri("/api/activities?destinationId=notanumber")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
}

#[actix_rt::test]
#[serial]
async fn test_get_activity_by_id() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::get().uri("/api/activities/1").to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["name"], "Eiffel Tower Tour");
    assert_eq!(body["price"], 25.0);
}

#[actix_rt::test]
#[serial]
async fn test_create_activity() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::post()
        .uri("/api/activities")
        .set_json(&json!({
            "name": "Catacombs Tour",
            "destinationId": 1,
            "description": "Walk the tunnels beneath the city.",
            "price": 29.0,
            "duration": "1h 45m"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 201);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["id"], 19);
    assert!(body.get("imageUrl").is_none());
}

#[actix_rt::test]
#[serial]
async fn test_create_activity_rejects_missing_fields() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::post()
        .uri("/api/activities")
        .set_json(&json!({ "name": "No price" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_client_error());
}
