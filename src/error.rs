//! Error types for recipe construction and the interactive session.

use thiserror::Error;

/// An entity invariant was violated at construction time.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("recipe name cannot be empty")]
    EmptyRecipeName,
    #[error("ingredient name cannot be empty")]
    EmptyIngredientName,
    #[error("cost must be greater than zero, got {0}")]
    NonPositiveCost(f64),
    #[error("quantity must be greater than zero, got {0}")]
    NonPositiveQuantity(f64),
}

/// User-supplied text did not parse as the expected value.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InputError {
    #[error("please enter a valid positive number for quantity (got '{0}')")]
    InvalidQuantity(String),
    #[error("please enter a valid positive number for cost (got '{0}')")]
    InvalidCost(String),
    #[error("please enter a valid recipe number between 1 and {count} (got '{input}')")]
    InvalidSelection { input: String, count: usize },
    #[error("unexpected end of input")]
    UnexpectedEof,
}

/// Anything that can abort a single sub-dialogue.
#[derive(Error, Debug)]
pub enum SessionError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Input(#[from] InputError),
    #[error("console I/O failed: {0}")]
    Io(#[from] std::io::Error),
}
