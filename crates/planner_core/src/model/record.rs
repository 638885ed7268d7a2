//! Planner record model.
//!
//! # Responsibility
//! - Define `PlannerRecord`, `Activity`, `Meals` and `MealSlot`.
//! - Normalize decoded data so in-memory invariants hold regardless of the
//!   stored blob.
//!
//! # Invariants
//! - `id` is generated once per activity and never reused.
//! - `water` is clamped into `0..=WATER_GOAL` on decode and on assignment.
//! - Meal slots are a closed set: breakfast, lunch, dinner.

use serde::{Deserialize, Deserializer, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use uuid::Uuid;

/// Stable identifier for a scheduled activity.
pub type ActivityId = Uuid;

/// Number of glasses tracked per day.
pub const WATER_GOAL: u8 = 8;

/// One scheduled item of the day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    /// Generated on creation. Blobs written before ids existed get a fresh one
    /// when decoded.
    #[serde(default = "Uuid::new_v4")]
    pub id: ActivityId,
    /// 24-hour `HH:MM`. Lexicographic order equals chronological order.
    pub time: String,
    pub name: String,
    #[serde(default)]
    pub completed: bool,
}

impl Activity {
    /// Creates an open (not completed) activity with a generated id.
    pub fn new(time: impl Into<String>, name: impl Into<String>) -> Self {
        Self::with_id(Uuid::new_v4(), time, name)
    }

    /// Creates an open activity with a caller-provided id.
    pub fn with_id(id: ActivityId, time: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id,
            time: time.into(),
            name: name.into(),
            completed: false,
        }
    }
}

/// Fixed meal slots of the meal planner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MealSlot {
    Breakfast,
    Lunch,
    Dinner,
}

impl MealSlot {
    /// All slots in display order.
    pub const ALL: [MealSlot; 3] = [MealSlot::Breakfast, MealSlot::Lunch, MealSlot::Dinner];

    /// Stable slot name, identical to the persisted field name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Breakfast => "breakfast",
            Self::Lunch => "lunch",
            Self::Dinner => "dinner",
        }
    }

    /// Capitalized label for display.
    pub fn label(self) -> &'static str {
        match self {
            Self::Breakfast => "Breakfast",
            Self::Lunch => "Lunch",
            Self::Dinner => "Dinner",
        }
    }
}

impl Display for MealSlot {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for meal slot names outside the fixed set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MealSlotParseError(pub String);

impl Display for MealSlotParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "unknown meal slot `{}`; expected breakfast|lunch|dinner",
            self.0
        )
    }
}

impl Error for MealSlotParseError {}

impl FromStr for MealSlot {
    type Err = MealSlotParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "breakfast" => Ok(Self::Breakfast),
            "lunch" => Ok(Self::Lunch),
            "dinner" => Ok(Self::Dinner),
            _ => Err(MealSlotParseError(value.to_string())),
        }
    }
}

/// Free-text meal plan, one field per slot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Meals {
    pub breakfast: String,
    pub lunch: String,
    pub dinner: String,
}

impl Meals {
    pub fn get(&self, slot: MealSlot) -> &str {
        match slot {
            MealSlot::Breakfast => &self.breakfast,
            MealSlot::Lunch => &self.lunch,
            MealSlot::Dinner => &self.dinner,
        }
    }

    pub fn get_mut(&mut self, slot: MealSlot) -> &mut String {
        match slot {
            MealSlot::Breakfast => &mut self.breakfast,
            MealSlot::Lunch => &mut self.lunch,
            MealSlot::Dinner => &mut self.dinner,
        }
    }
}

/// Full state of one calendar day.
///
/// Serialized as `{schedule: [...], water: n, meals: {...}}`. Missing fields
/// decode to their defaults so partial blobs still load.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlannerRecord {
    /// Insertion order; views always sort by `time` before display.
    #[serde(default)]
    pub schedule: Vec<Activity>,
    #[serde(default, deserialize_with = "deserialize_water")]
    pub water: u8,
    #[serde(default)]
    pub meals: Meals,
}

impl PlannerRecord {
    /// Clamps `water` back into range.
    pub fn normalize(&mut self) {
        self.water = self.water.min(WATER_GOAL);
    }

    /// Activities ordered by `time`, ties kept in insertion order.
    pub fn sorted_schedule(&self) -> Vec<&Activity> {
        let mut sorted = self.schedule.iter().collect::<Vec<_>>();
        // `sort_by` is stable.
        sorted.sort_by(|left, right| left.time.cmp(&right.time));
        sorted
    }
}

/// Clamps any requested glass count into `0..=WATER_GOAL`.
pub fn clamp_water(requested: i64) -> u8 {
    // Cannot truncate: clamped into 0..=8 first.
    requested.clamp(0, i64::from(WATER_GOAL)) as u8
}

fn deserialize_water<'de, D>(deserializer: D) -> Result<u8, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = i64::deserialize(deserializer)?;
    Ok(clamp_water(raw))
}

#[cfg(test)]
mod tests {
    use super::{clamp_water, MealSlot, PlannerRecord, WATER_GOAL};

    #[test]
    fn clamp_water_bounds_both_ends() {
        assert_eq!(clamp_water(-4), 0);
        assert_eq!(clamp_water(5), 5);
        assert_eq!(clamp_water(99), WATER_GOAL);
    }

    #[test]
    fn meal_slot_parses_case_insensitively() {
        assert_eq!(" Lunch ".parse::<MealSlot>().unwrap(), MealSlot::Lunch);
        assert!("brunch".parse::<MealSlot>().is_err());
    }

    #[test]
    fn out_of_range_water_is_clamped_on_decode() {
        let record: PlannerRecord = serde_json::from_str(r#"{"water": 12}"#).unwrap();
        assert_eq!(record.water, WATER_GOAL);

        let record: PlannerRecord = serde_json::from_str(r#"{"water": -1}"#).unwrap();
        assert_eq!(record.water, 0);
    }
}
