//! In-memory planner state for one day.
//!
//! # Responsibility
//! - Hold the single `PlannerRecord` of the active storage key.
//! - Apply schedule, water and meal mutations, reporting what changed.
//!
//! # Invariants
//! - Activities are addressed by `ActivityId` only.
//! - `water` stays within `0..=WATER_GOAL` after every mutation.
//! - Failed preconditions are no-ops, never errors.

use crate::model::record::{clamp_water, Activity, ActivityId, MealSlot, PlannerRecord};

/// Owned planner record with mutation operations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlannerState {
    record: PlannerRecord,
}

impl PlannerState {
    /// Wraps a loaded record, re-establishing range invariants.
    pub fn new(mut record: PlannerRecord) -> Self {
        record.normalize();
        Self { record }
    }

    pub fn record(&self) -> &PlannerRecord {
        &self.record
    }

    pub fn water(&self) -> u8 {
        self.record.water
    }

    pub fn meal(&self, slot: MealSlot) -> &str {
        self.record.meals.get(slot)
    }

    pub fn activity(&self, id: ActivityId) -> Option<&Activity> {
        self.record.schedule.iter().find(|activity| activity.id == id)
    }

    /// Appends a new open activity.
    ///
    /// Returns `None` without touching state when `time` or `name` is empty.
    /// Values are stored exactly as given.
    pub fn add_activity(&mut self, time: &str, name: &str) -> Option<ActivityId> {
        if time.is_empty() || name.is_empty() {
            return None;
        }

        let activity = Activity::new(time, name);
        let id = activity.id;
        self.record.schedule.push(activity);
        Some(id)
    }

    /// Sets the completion flag. Returns `false` when `id` is unknown.
    pub fn set_activity_completed(&mut self, id: ActivityId, completed: bool) -> bool {
        match self.record.schedule.iter_mut().find(|activity| activity.id == id) {
            Some(activity) => {
                activity.completed = completed;
                true
            }
            None => false,
        }
    }

    /// Removes and returns the activity. Returns `None` when `id` is unknown.
    pub fn remove_activity(&mut self, id: ActivityId) -> Option<Activity> {
        let position = self
            .record
            .schedule
            .iter()
            .position(|activity| activity.id == id)?;
        Some(self.record.schedule.remove(position))
    }

    /// Clamps and stores the glass count, returning the stored value.
    pub fn set_water(&mut self, requested: i64) -> u8 {
        self.record.water = clamp_water(requested);
        self.record.water
    }

    /// Replaces the free text of one meal slot.
    pub fn set_meal(&mut self, slot: MealSlot, text: impl Into<String>) -> &str {
        let field = self.record.meals.get_mut(slot);
        *field = text.into();
        field.as_str()
    }

    /// Activities ordered by `time`, ties kept in insertion order.
    pub fn sorted_schedule(&self) -> Vec<&Activity> {
        self.record.sorted_schedule()
    }
}

#[cfg(test)]
mod tests {
    use super::PlannerState;
    use crate::model::record::{MealSlot, PlannerRecord, WATER_GOAL};

    #[test]
    fn add_activity_ignores_empty_fields() {
        let mut state = PlannerState::default();
        assert!(state.add_activity("", "Standup").is_none());
        assert!(state.add_activity("09:00", "").is_none());
        assert!(state.record().schedule.is_empty());
    }

    #[test]
    fn add_activity_stores_values_as_given() {
        let mut state = PlannerState::default();
        let spaces = state.add_activity("09:00", "   ").unwrap();
        let padded = state.add_activity("10:00", " Gym ").unwrap();

        assert_eq!(state.activity(spaces).unwrap().name, "   ");
        assert_eq!(state.activity(padded).unwrap().name, " Gym ");
        assert_eq!(state.record().schedule.len(), 2);
    }

    #[test]
    fn sorted_schedule_is_stable_for_equal_times() {
        let mut state = PlannerState::default();
        let first = state.add_activity("10:00", "first").unwrap();
        state.add_activity("07:45", "early").unwrap();
        let second = state.add_activity("10:00", "second").unwrap();

        let order = state
            .sorted_schedule()
            .into_iter()
            .map(|activity| activity.name.as_str())
            .collect::<Vec<_>>();
        assert_eq!(order, vec!["early", "first", "second"]);

        let ids = state
            .sorted_schedule()
            .into_iter()
            .map(|activity| activity.id)
            .collect::<Vec<_>>();
        assert_eq!(&ids[1..], &[first, second]);
    }

    #[test]
    fn duplicate_time_and_name_are_addressed_independently() {
        let mut state = PlannerState::default();
        let first = state.add_activity("12:00", "Lunch walk").unwrap();
        let second = state.add_activity("12:00", "Lunch walk").unwrap();

        assert!(state.set_activity_completed(second, true));
        assert!(!state.activity(first).unwrap().completed);
        assert!(state.activity(second).unwrap().completed);

        let removed = state.remove_activity(second).unwrap();
        assert_eq!(removed.id, second);
        assert_eq!(state.record().schedule.len(), 1);
        assert_eq!(state.record().schedule[0].id, first);
    }

    #[test]
    fn unknown_ids_are_no_ops() {
        let mut state = PlannerState::default();
        state.add_activity("08:00", "Run").unwrap();
        let before = state.clone();

        let stranger = uuid::Uuid::new_v4();
        assert!(!state.set_activity_completed(stranger, true));
        assert!(state.remove_activity(stranger).is_none());
        assert_eq!(state, before);
    }

    #[test]
    fn set_water_clamps_any_request() {
        let mut state = PlannerState::default();
        for requested in [-100, -1, 0, 3, 8, 9, i64::MAX] {
            let stored = state.set_water(requested);
            assert!(stored <= WATER_GOAL);
            assert_eq!(stored, state.water());
        }
        assert_eq!(state.set_water(-1), 0);
        assert_eq!(state.set_water(42), WATER_GOAL);
    }

    #[test]
    fn set_meal_replaces_slot_text() {
        let mut state = PlannerState::new(PlannerRecord::default());
        assert_eq!(state.set_meal(MealSlot::Dinner, "soup"), "soup");
        assert_eq!(state.meal(MealSlot::Dinner), "soup");
        assert_eq!(state.meal(MealSlot::Lunch), "");
    }
}
