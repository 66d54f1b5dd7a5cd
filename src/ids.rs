//! Owner-assigned handles for recipes and ingredients.
//!
//! Ids are handed out by the collection that owns the value (a `Recipe` for
//! its ingredients, a `RecipeStore` for its recipes). They increase
//! monotonically and are never reused by the same owner.

use std::fmt;

macro_rules! define_id {
    ($name:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name(u64);

        impl $name {
            pub fn as_u64(&self) -> u64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

define_id!(IngredientId);
define_id!(RecipeId);

/// Sequential id source owned by a collection.
#[derive(Debug, Clone, Default)]
pub(crate) struct IdCounter(u64);

impl IdCounter {
    pub(crate) fn next_ingredient(&mut self) -> IngredientId {
        IngredientId(self.bump())
    }

    pub(crate) fn next_recipe(&mut self) -> RecipeId {
        RecipeId(self.bump())
    }

    fn bump(&mut self) -> u64 {
        self.0 += 1;
        self.0
    }
}
