//! Recipes: a name plus an ordered list of ingredients.

use crate::error::ValidationError;
use crate::ids::{IdCounter, IngredientId};
use crate::ingredient::Ingredient;

/// A named collection of ingredients, kept in insertion order.
///
/// An empty ingredient list is legal; such a recipe costs nothing.
#[derive(Debug, Clone)]
pub struct Recipe {
    name: String,
    ingredients: Vec<(IngredientId, Ingredient)>,
    ids: IdCounter,
}

impl Recipe {
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ValidationError::EmptyRecipeName);
        }

        Ok(Self {
            name,
            ingredients: Vec::new(),
            ids: IdCounter::default(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Append an ingredient and return the handle that identifies it.
    pub fn add_ingredient(&mut self, ingredient: Ingredient) -> IngredientId {
        let id = self.ids.next_ingredient();
        tracing::debug!(
            recipe = %self.name,
            ingredient = ingredient.name(),
            %id,
            "ingredient added"
        );
        self.ingredients.push((id, ingredient));
        id
    }

    /// Remove the ingredient with the given handle.
    ///
    /// Returns `None` and leaves the list untouched if the id is unknown.
    pub fn remove_ingredient(&mut self, id: IngredientId) -> Option<Ingredient> {
        let pos = self.ingredients.iter().position(|(i, _)| *i == id)?;
        let (_, ingredient) = self.ingredients.remove(pos);
        tracing::debug!(
            recipe = %self.name,
            ingredient = ingredient.name(),
            %id,
            "ingredient removed"
        );
        Some(ingredient)
    }

    pub fn ingredient(&self, id: IngredientId) -> Option<&Ingredient> {
        self.ingredients
            .iter()
            .find(|(i, _)| *i == id)
            .map(|(_, ingredient)| ingredient)
    }

    /// Ingredients in insertion order.
    pub fn ingredients(&self) -> impl Iterator<Item = &Ingredient> {
        self.ingredients.iter().map(|(_, ingredient)| ingredient)
    }

    pub fn len(&self) -> usize {
        self.ingredients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ingredients.is_empty()
    }
}
