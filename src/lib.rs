//! Interactive recipe cost calculator
//!
//! Recipes are named lists of ingredients, each with a unit cost and a
//! quantity. The total cost of a recipe is the sum of cost times quantity
//! over its ingredients. Everything lives in memory for a single session.
//!
//! # Example
//!
//! ```
//! use recipe_cost::{Ingredient, Recipe, RecipeStore, total_cost};
//!
//! let mut omelette = Recipe::new("Omelette")?;
//! omelette.add_ingredient(Ingredient::new("Egg", 3.0, 2.0)?);
//! omelette.add_ingredient(Ingredient::new("Milk", 20.0, 0.5)?);
//! assert_eq!(total_cost(&omelette), 16.0);
//!
//! let mut store = RecipeStore::new();
//! store.add_recipe(omelette);
//! assert_eq!(store.list_recipes().len(), 1);
//! # Ok::<(), recipe_cost::ValidationError>(())
//! ```
//!
//! # Session
//!
//! [`Session`] drives the text menu over any `BufRead`/`Write` pair:
//! - `1` view recipes with their ingredients and cost
//! - `2` add a recipe, prompting for ingredients until the answer is not "yes"
//! - `3` remove a recipe by its list number
//! - `4` calculate the cost of one recipe
//! - `5` exit

pub mod calculator;
pub mod config;
pub mod error;
pub mod ids;
pub mod ingredient;
pub mod output;
pub mod recipe;
pub mod session;
pub mod store;

pub use calculator::total_cost;
pub use config::Config;
pub use error::{InputError, SessionError, ValidationError};
pub use ids::{IngredientId, RecipeId};
pub use ingredient::Ingredient;
pub use recipe::Recipe;
pub use session::{MenuChoice, Session};
pub use store::{RecipeStore, StoredRecipe};
