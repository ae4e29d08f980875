use chrono::Duration;

use crate::models::itinerary::{DateRange, DayPlan};

pub struct DayPlanService;

impl DayPlanService {
    /// Rebuild the day-plan skeleton for a date range, carrying existing day
    /// content forward by positional index. Day `i` of the new range keeps
    /// whatever day `i` of the old range held, even if the start date moved
    /// and the content now sits under a different date. Days past the end of
    /// the new range are dropped along with their content.
    ///
    /// An inverted range (end before start) leaves the previous sequence
    /// untouched; callers validate date order at the form boundary.
    pub fn derive_day_plans(range: &DateRange, previous: &[DayPlan]) -> Vec<DayPlan> {
        if !range.is_valid() {
            return previous.to_vec();
        }

        let day_count = range.day_count() as usize;
        (0..day_count)
            .map(|i| {
                let date = range.start + Duration::days(i as i64);
                match previous.get(i) {
                    Some(existing) => DayPlan {
                        date,
                        activities: existing.activities.clone(),
                        notes: existing.notes.clone(),
                        accommodation: existing.accommodation.clone(),
                        transportation: existing.transportation.clone(),
                    },
                    None => DayPlan::empty(date),
                }
            })
            .collect()
    }
}
