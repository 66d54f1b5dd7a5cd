//! Session configuration.

/// Currency suffix used when none is configured.
pub const DEFAULT_CURRENCY: &str = "UAH";

/// Presentation settings for a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Literal unit appended to every printed cost, e.g. "16 UAH".
    pub currency: String,
    /// Emit ANSI colors.
    pub color: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            currency: DEFAULT_CURRENCY.to_string(),
            color: false,
        }
    }
}

impl Config {
    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = currency.into();
        self
    }

    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    /// Format an amount with the configured unit.
    pub fn money(&self, amount: f64) -> String {
        if self.currency.is_empty() {
            amount.to_string()
        } else {
            format!("{} {}", amount, self.currency)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_currency() {
        let config = Config::default();
        assert_eq!(config.money(16.0), "16 UAH");
        assert_eq!(config.money(0.5), "0.5 UAH");
    }

    #[test]
    fn test_custom_and_empty_currency() {
        assert_eq!(Config::default().with_currency("EUR").money(2.25), "2.25 EUR");
        assert_eq!(Config::default().with_currency("").money(3.0), "3");
    }
}
