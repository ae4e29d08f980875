pub mod day_plan_service;
pub mod itinerary_edit_service;
pub mod pricing_service;
