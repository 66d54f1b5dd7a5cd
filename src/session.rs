//! Interactive menu loop.
//!
//! The session reads one menu selection per line, runs the matching
//! sub-dialogue against the store, and returns to the menu. Failures inside a
//! sub-dialogue are reported on a single line and never end the loop; a
//! recipe is only handed to the store once its dialogue has fully succeeded.

use std::io::{self, BufRead, Write};
use std::ops::ControlFlow;

use crate::calculator::total_cost;
use crate::config::Config;
use crate::error::{InputError, SessionError};
use crate::ingredient::{Ingredient, is_positive};
use crate::output::Console;
use crate::recipe::Recipe;
use crate::store::{RecipeStore, StoredRecipe};

/// Word that keeps the ingredient prompt going, compared case-insensitively.
pub const AFFIRMATIVE: &str = "yes";

const MENU: [&str; 5] = [
    "View recipes",
    "Add recipe",
    "Remove recipe",
    "Calculate dish cost",
    "Exit",
];

/// A top-level menu selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    List,
    Add,
    Remove,
    Cost,
    Exit,
}

impl MenuChoice {
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(Self::List),
            "2" => Some(Self::Add),
            "3" => Some(Self::Remove),
            "4" => Some(Self::Cost),
            "5" => Some(Self::Exit),
            _ => None,
        }
    }

    /// What the sub-dialogue was doing, for error lines.
    fn activity(self) -> &'static str {
        match self {
            Self::List => "listing recipes",
            Self::Add => "adding recipe",
            Self::Remove => "removing recipe",
            Self::Cost => "calculating cost",
            Self::Exit => "exiting",
        }
    }
}

pub struct Session<'a, R, W> {
    input: R,
    console: Console<W>,
    store: &'a mut RecipeStore,
    config: Config,
}

impl<'a, R: BufRead, W: Write> Session<'a, R, W> {
    pub fn new(input: R, output: W, store: &'a mut RecipeStore, config: Config) -> Self {
        Self {
            input,
            console: Console::new(output, config.color),
            store,
            config,
        }
    }

    /// Run until the user picks exit or input is exhausted.
    ///
    /// Only console I/O failures outside a sub-dialogue are returned.
    pub fn run(&mut self) -> io::Result<()> {
        tracing::info!(recipes = self.store.len(), "session started");

        loop {
            self.show_menu()?;

            let Some(line) = self.read_line()? else {
                tracing::debug!("input closed at menu");
                return Ok(());
            };

            let Some(choice) = MenuChoice::parse(&line) else {
                self.console
                    .info("Unknown option. Please enter a number from 1 to 5.")?;
                continue;
            };

            tracing::debug!(?choice, "dispatching");
            match self.dispatch(choice) {
                Ok(ControlFlow::Continue(())) => {}
                Ok(ControlFlow::Break(())) => return Ok(()),
                Err(err) => {
                    tracing::warn!(?choice, error = %err, "sub-dialogue aborted");
                    self.console.error(choice.activity(), &err.to_string())?;
                }
            }
        }
    }

    pub fn into_output(self) -> W {
        self.console.into_inner()
    }

    /// Run one menu action; `Break` ends the session.
    fn dispatch(&mut self, choice: MenuChoice) -> Result<ControlFlow<()>, SessionError> {
        match choice {
            MenuChoice::List => self.list_recipes()?,
            MenuChoice::Add => self.add_recipe()?,
            MenuChoice::Remove => self.remove_recipe()?,
            MenuChoice::Cost => self.calculate_cost()?,
            MenuChoice::Exit => {
                self.console.line("Goodbye.")?;
                return Ok(ControlFlow::Break(()));
            }
        }
        Ok(ControlFlow::Continue(()))
    }

    fn show_menu(&mut self) -> io::Result<()> {
        for (i, item) in MENU.iter().enumerate() {
            self.console.list_item(i + 1, item)?;
        }
        self.console.prompt("Select an option: ")
    }

    fn list_recipes(&mut self) -> Result<(), SessionError> {
        let recipes = self.store.list_recipes();
        if recipes.is_empty() {
            self.console.info("No recipes found.")?;
            return Ok(());
        }

        for StoredRecipe { recipe, .. } in &recipes {
            self.console.header("Name:", recipe.name())?;
            for ingredient in recipe.ingredients() {
                self.console.detail(&format!(
                    "{}: {} at {}",
                    ingredient.name(),
                    ingredient.quantity(),
                    self.config.money(ingredient.unit_cost())
                ))?;
            }
            self.console
                .line(&format!("Dish cost: {}", self.config.money(total_cost(recipe))))?;
        }
        Ok(())
    }

    fn add_recipe(&mut self) -> Result<(), SessionError> {
        let name = self.ask("Enter recipe name: ")?;
        let mut recipe = Recipe::new(name.trim())?;

        loop {
            let ingredient_name = self.ask("Enter ingredient name: ")?;

            let raw = self.ask("Enter quantity: ")?;
            let quantity = parse_positive(&raw)
                .ok_or_else(|| InputError::InvalidQuantity(raw.trim().to_string()))?;

            let raw = self.ask("Enter unit cost: ")?;
            let cost = parse_positive(&raw)
                .ok_or_else(|| InputError::InvalidCost(raw.trim().to_string()))?;

            recipe.add_ingredient(Ingredient::new(ingredient_name.trim(), cost, quantity)?);

            let answer = self.ask(&format!("Add another ingredient? ({}/no): ", AFFIRMATIVE))?;
            if !is_affirmative(&answer) {
                break;
            }
        }

        self.store.add_recipe(recipe);
        self.console.success("Recipe added.")?;
        Ok(())
    }

    fn remove_recipe(&mut self) -> Result<(), SessionError> {
        if self.store.is_empty() {
            self.console.info("No recipes to remove.")?;
            return Ok(());
        }

        let selected = self.choose_recipe("Enter the number of the recipe to remove: ")?;
        self.store.remove_recipe(selected.id);
        self.console.success("Recipe removed.")?;
        Ok(())
    }

    fn calculate_cost(&mut self) -> Result<(), SessionError> {
        if self.store.is_empty() {
            self.console.info("No recipes to calculate.")?;
            return Ok(());
        }

        let selected = self.choose_recipe("Enter the number of the recipe to calculate: ")?;
        let total = total_cost(&selected.recipe);
        self.console.line(&format!(
            "Total cost of {}: {}",
            selected.recipe.name(),
            self.config.money(total)
        ))?;
        Ok(())
    }

    /// Print the numbered recipe list and read a 1-based selection.
    fn choose_recipe(&mut self, prompt: &str) -> Result<StoredRecipe, SessionError> {
        let mut recipes = self.store.list_recipes();
        for (i, entry) in recipes.iter().enumerate() {
            self.console.list_item(i + 1, entry.recipe.name())?;
        }

        let raw = self.ask(prompt)?;
        let position = parse_selection(&raw, recipes.len())?;
        Ok(recipes.swap_remove(position - 1))
    }

    fn ask(&mut self, prompt: &str) -> Result<String, SessionError> {
        self.console.prompt(prompt)?;
        Ok(self.read_line()?.ok_or(InputError::UnexpectedEof)?)
    }

    /// One line without its terminator, or `None` at end of input.
    ///
    /// Bytes that are not valid UTF-8 are replaced rather than rejected, so
    /// they surface as unrecognized text instead of a console failure.
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        let line = String::from_utf8_lossy(&buf);
        Ok(Some(line.trim_end_matches(['\n', '\r']).to_string()))
    }
}

/// Parse a finite real number greater than zero.
pub fn parse_positive(input: &str) -> Option<f64> {
    input.trim().parse::<f64>().ok().filter(|v| is_positive(*v))
}

/// Parse a 1-based position within a list of `count` entries.
pub fn parse_selection(input: &str, count: usize) -> Result<usize, InputError> {
    match input.trim().parse::<usize>() {
        Ok(n) if (1..=count).contains(&n) => Ok(n),
        _ => Err(InputError::InvalidSelection {
            input: input.trim().to_string(),
            count,
        }),
    }
}

pub fn is_affirmative(answer: &str) -> bool {
    answer.trim().eq_ignore_ascii_case(AFFIRMATIVE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_choices() {
        assert_eq!(MenuChoice::parse("1"), Some(MenuChoice::List));
        assert_eq!(MenuChoice::parse(" 4 "), Some(MenuChoice::Cost));
        assert_eq!(MenuChoice::parse("5"), Some(MenuChoice::Exit));
        assert_eq!(MenuChoice::parse("6"), None);
        assert_eq!(MenuChoice::parse(""), None);
        assert_eq!(MenuChoice::parse("list"), None);
    }

    #[test]
    fn test_parse_positive() {
        assert_eq!(parse_positive("0.5"), Some(0.5));
        assert_eq!(parse_positive(" 2 "), Some(2.0));
        assert_eq!(parse_positive("abc"), None);
        assert_eq!(parse_positive("0"), None);
        assert_eq!(parse_positive("-1"), None);
        assert_eq!(parse_positive("NaN"), None);
        assert_eq!(parse_positive("inf"), None);
        assert_eq!(parse_positive(""), None);
    }

    #[test]
    fn test_parse_selection_range() {
        assert_eq!(parse_selection("1", 3), Ok(1));
        assert_eq!(parse_selection("3", 3), Ok(3));
        assert!(parse_selection("0", 3).is_err());
        assert!(parse_selection("4", 3).is_err());
        assert!(parse_selection("-1", 3).is_err());
        assert!(parse_selection("two", 3).is_err());
    }

    #[test]
    fn test_affirmative_is_case_insensitive() {
        assert!(is_affirmative("yes"));
        assert!(is_affirmative("YES"));
        assert!(is_affirmative("Yes\r"));
        assert!(!is_affirmative("y"));
        assert!(!is_affirmative("no"));
        assert!(!is_affirmative(""));
    }
}
