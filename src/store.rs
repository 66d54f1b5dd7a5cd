//! In-memory recipe repository.
//!
//! The store lives for one session and is never persisted. Recipe names are
//! not deduplicated; two recipes called "Soup" are distinct entries.

use crate::ids::{IdCounter, RecipeId};
use crate::recipe::Recipe;

/// A recipe together with the handle the store assigned to it.
#[derive(Debug, Clone)]
pub struct StoredRecipe {
    pub id: RecipeId,
    pub recipe: Recipe,
}

#[derive(Debug, Default)]
pub struct RecipeStore {
    recipes: Vec<StoredRecipe>,
    ids: IdCounter,
}

impl RecipeStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a recipe; it is listed after every recipe already stored.
    pub fn add_recipe(&mut self, recipe: Recipe) -> RecipeId {
        let id = self.ids.next_recipe();
        tracing::debug!(recipe = recipe.name(), %id, "recipe stored");
        self.recipes.push(StoredRecipe { id, recipe });
        id
    }

    /// Remove a recipe by handle. Unknown ids leave the store unchanged.
    pub fn remove_recipe(&mut self, id: RecipeId) -> Option<Recipe> {
        let pos = self.recipes.iter().position(|r| r.id == id)?;
        let StoredRecipe { recipe, .. } = self.recipes.remove(pos);
        tracing::debug!(recipe = recipe.name(), %id, "recipe removed");
        Some(recipe)
    }

    /// Owned copy of every stored recipe, in insertion order.
    ///
    /// Changing the returned vector has no effect on the store.
    pub fn list_recipes(&self) -> Vec<StoredRecipe> {
        self.recipes.clone()
    }

    pub fn get(&self, id: RecipeId) -> Option<&Recipe> {
        self.recipes.iter().find(|r| r.id == id).map(|r| &r.recipe)
    }

    /// Entry at a 1-based list position, as shown to the user.
    pub fn select(&self, position: usize) -> Option<&StoredRecipe> {
        position.checked_sub(1).and_then(|i| self.recipes.get(i))
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }
}
