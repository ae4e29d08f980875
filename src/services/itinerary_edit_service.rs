use crate::models::itinerary::{
    AccommodationEntry, ActivityEntry, ActivityPatch, DayPlan, TransportationEntry,
};

/// Single-edit transformations over a day-plan sequence. Every operation
/// takes the current sequence and returns a new one; indices that fell out
/// of range (for example after a range shrink) are tolerated as no-ops
/// rather than panics. Callers recompute the trip total afterwards with
/// `PricingService::calculate_total_cost`.
pub struct ItineraryEditService;

impl ItineraryEditService {
    /// Append an activity snapshot to a day's schedule. No duplicate check:
    /// adding the same catalog activity twice produces two entries.
    pub fn add_activity(days: &[DayPlan], day_index: usize, entry: ActivityEntry) -> Vec<DayPlan> {
        let mut next = days.to_vec();
        if let Some(day) = next.get_mut(day_index) {
            day.activities.push(entry);
        }
        next
    }

    pub fn remove_activity(
        days: &[DayPlan],
        day_index: usize,
        activity_index: usize,
    ) -> Vec<DayPlan> {
        let mut next = days.to_vec();
        if let Some(day) = next.get_mut(day_index) {
            if activity_index < day.activities.len() {
                day.activities.remove(activity_index);
            }
        }
        next
    }

    /// Merge the provided patch fields into an existing entry, leaving the
    /// rest untouched. Typically used to change `start_time`.
    pub fn update_activity(
        days: &[DayPlan],
        day_index: usize,
        activity_index: usize,
        patch: &ActivityPatch,
    ) -> Vec<DayPlan> {
        let mut next = days.to_vec();
        if let Some(entry) = next
            .get_mut(day_index)
            .and_then(|day| day.activities.get_mut(activity_index))
        {
            if let Some(name) = &patch.name {
                entry.name = name.clone();
            }
            if let Some(description) = &patch.description {
                entry.description = description.clone();
            }
            if let Some(image_url) = &patch.image_url {
                entry.image_url = Some(image_url.clone());
            }
            if let Some(price) = patch.price {
                entry.price = price;
            }
            if let Some(duration) = &patch.duration {
                entry.duration = duration.clone();
            }
            if let Some(start_time) = &patch.start_time {
                entry.start_time = Some(start_time.clone());
            }
        }
        next
    }

    /// The drag-and-drop contract. Within one day this is a list move: the
    /// entry is removed first and the destination index is interpreted
    /// against the shortened list. Across days the entry leaves the source
    /// schedule and is inserted into the destination schedule, both days
    /// replaced in the same result. A destination index past the end of the
    /// target list appends.
    pub fn relocate_activity(
        days: &[DayPlan],
        source_day: usize,
        source_index: usize,
        dest_day: usize,
        dest_index: usize,
    ) -> Vec<DayPlan> {
        let mut next = days.to_vec();
        if source_day >= next.len() || dest_day >= next.len() {
            return next;
        }
        if source_index >= next[source_day].activities.len() {
            return next;
        }

        if source_day == dest_day {
            let activities = &mut next[source_day].activities;
            let entry = activities.remove(source_index);
            let insert_at = dest_index.min(activities.len());
            activities.insert(insert_at, entry);
        } else {
            let entry = next[source_day].activities.remove(source_index);
            let dest = &mut next[dest_day].activities;
            let insert_at = dest_index.min(dest.len());
            dest.insert(insert_at, entry);
        }
        next
    }

    /// Replace or clear the day's single accommodation slot. Passing a new
    /// value replaces whatever was there; passing `None` removes it.
    pub fn set_accommodation(
        days: &[DayPlan],
        day_index: usize,
        accommodation: Option<AccommodationEntry>,
    ) -> Vec<DayPlan> {
        let mut next = days.to_vec();
        if let Some(day) = next.get_mut(day_index) {
            day.accommodation = accommodation;
        }
        next
    }

    /// Same replace/clear semantics as accommodation. Partial edits are the
    /// caller's job: re-send the previous entry with the changed fields.
    pub fn set_transportation(
        days: &[DayPlan],
        day_index: usize,
        transportation: Option<TransportationEntry>,
    ) -> Vec<DayPlan> {
        let mut next = days.to_vec();
        if let Some(day) = next.get_mut(day_index) {
            day.transportation = transportation;
        }
        next
    }

    /// Replace the day's notes verbatim; an empty string clears them.
    pub fn set_notes(days: &[DayPlan], day_index: usize, notes: &str) -> Vec<DayPlan> {
        let mut next = days.to_vec();
        if let Some(day) = next.get_mut(day_index) {
            day.notes = if notes.is_empty() {
                None
            } else {
                Some(notes.to_string())
            };
        }
        next
    }

    /// Clear one day back to an empty slot, keeping its date.
    pub fn reset_day(days: &[DayPlan], day_index: usize) -> Vec<DayPlan> {
        let mut next = days.to_vec();
        if let Some(day) = next.get_mut(day_index) {
            *day = DayPlan::empty(day.date);
        }
        next
    }

    /// Clear every day. Destructive: the confirmation prompt lives at the
    /// presentation boundary, not here.
    pub fn reset_all(days: &[DayPlan]) -> Vec<DayPlan> {
        days.iter().map(|day| DayPlan::empty(day.date)).collect()
    }
}
