//! Meal planner view: one free-text field per slot.

use crate::model::record::{MealSlot, PlannerRecord};
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MealField {
    pub slot: MealSlot,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MealPlannerView {
    pub fields: Vec<MealField>,
}

impl MealPlannerView {
    pub fn render(record: &PlannerRecord) -> Self {
        let fields = MealSlot::ALL
            .into_iter()
            .map(|slot| MealField {
                slot,
                text: record.meals.get(slot).to_string(),
            })
            .collect();
        Self { fields }
    }

    pub fn field(&self, slot: MealSlot) -> Option<&MealField> {
        self.fields.iter().find(|field| field.slot == slot)
    }
}

impl Display for MealPlannerView {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for (index, field) in self.fields.iter().enumerate() {
            if index > 0 {
                writeln!(f)?;
            }
            let label = format!("{}:", field.slot.label());
            write!(f, "{label:<11}{}", field.text)?;
        }
        Ok(())
    }
}
