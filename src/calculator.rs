//! Recipe cost calculation.

use crate::recipe::Recipe;

/// Sum of unit cost times quantity over every ingredient, in insertion order.
pub fn total_cost(recipe: &Recipe) -> f64 {
    recipe.ingredients().fold(0.0, |acc, i| acc + i.line_cost())
}
