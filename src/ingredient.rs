//! A single recipe ingredient.

use crate::error::ValidationError;

/// A named item with a per-unit cost and the quantity a recipe uses.
///
/// Fields are fixed at construction; there is no way to obtain an
/// `Ingredient` that violates its invariants.
#[derive(Debug, Clone, PartialEq)]
pub struct Ingredient {
    name: String,
    unit_cost: f64,
    quantity: f64,
}

impl Ingredient {
    /// Build an ingredient, rejecting a blank name and any cost or quantity
    /// that is not a finite number above zero.
    pub fn new(
        name: impl Into<String>,
        unit_cost: f64,
        quantity: f64,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ValidationError::EmptyIngredientName);
        }
        if !is_positive(unit_cost) {
            return Err(ValidationError::NonPositiveCost(unit_cost));
        }
        if !is_positive(quantity) {
            return Err(ValidationError::NonPositiveQuantity(quantity));
        }

        Ok(Self {
            name,
            unit_cost,
            quantity,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn unit_cost(&self) -> f64 {
        self.unit_cost
    }

    pub fn quantity(&self) -> f64 {
        self.quantity
    }

    /// Cost contributed by this ingredient: unit cost times quantity.
    pub fn line_cost(&self) -> f64 {
        self.unit_cost * self.quantity
    }
}

pub(crate) fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_ingredient() {
        let egg = Ingredient::new("Egg", 3.0, 2.0).unwrap();
        assert_eq!(egg.name(), "Egg");
        assert_eq!(egg.unit_cost(), 3.0);
        assert_eq!(egg.quantity(), 2.0);
        assert_eq!(egg.line_cost(), 6.0);
    }

    #[test]
    fn test_blank_names_rejected() {
        assert_eq!(
            Ingredient::new("", 1.0, 1.0),
            Err(ValidationError::EmptyIngredientName)
        );
        assert_eq!(
            Ingredient::new("  \t", 1.0, 1.0),
            Err(ValidationError::EmptyIngredientName)
        );
    }

    #[test]
    fn test_non_positive_cost_rejected() {
        assert_eq!(
            Ingredient::new("Salt", 0.0, 1.0),
            Err(ValidationError::NonPositiveCost(0.0))
        );
        assert_eq!(
            Ingredient::new("Salt", -2.5, 1.0),
            Err(ValidationError::NonPositiveCost(-2.5))
        );
    }

    #[test]
    fn test_non_positive_quantity_rejected() {
        assert_eq!(
            Ingredient::new("Salt", 1.0, 0.0),
            Err(ValidationError::NonPositiveQuantity(0.0))
        );
        assert!(Ingredient::new("Salt", 1.0, -0.1).is_err());
    }

    #[test]
    fn test_non_finite_values_rejected() {
        assert!(Ingredient::new("Salt", f64::NAN, 1.0).is_err());
        assert!(Ingredient::new("Salt", f64::INFINITY, 1.0).is_err());
        assert!(Ingredient::new("Salt", 1.0, f64::NAN).is_err());
    }

    #[test]
    fn test_name_checked_before_numbers() {
        assert_eq!(
            Ingredient::new(" ", -1.0, -1.0),
            Err(ValidationError::EmptyIngredientName)
        );
    }
}
