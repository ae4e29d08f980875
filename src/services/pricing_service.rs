use crate::models::itinerary::DayPlan;

pub struct PricingService;

impl PricingService {
    /// Calculate total activity costs across all days
    pub fn calculate_activity_cost(days: &[DayPlan]) -> f64 {
        days.iter()
            .flat_map(|day| &day.activities)
            .map(|activity| activity.price)
            .sum()
    }

    /// Calculate total accommodation costs (per-night price counted once per
    /// day it is attached)
    pub fn calculate_accommodation_cost(days: &[DayPlan]) -> f64 {
        days.iter()
            .filter_map(|day| day.accommodation.as_ref())
            .map(|accommodation| accommodation.price)
            .sum()
    }

    /// Calculate total transportation costs across all days
    pub fn calculate_transportation_cost(days: &[DayPlan]) -> f64 {
        days.iter()
            .filter_map(|day| day.transportation.as_ref())
            .map(|transportation| transportation.price)
            .sum()
    }

    /// Total trip cost: a full fold over the current day plans. Recomputed
    /// from scratch after every edit rather than maintained incrementally,
    /// so partial updates can never leave the total stale. Rounding for
    /// display is the caller's concern.
    pub fn calculate_total_cost(days: &[DayPlan]) -> f64 {
        Self::calculate_activity_cost(days)
            + Self::calculate_accommodation_cost(days)
            + Self::calculate_transportation_cost(days)
    }
}
