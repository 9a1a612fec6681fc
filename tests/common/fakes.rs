use std::collections::HashSet;

use trade_util::role::{CurrencyClassifier, Localizer};

/// Classifier over a fixed set of fiat codes.
pub struct TableCurrencyClassifier {
    fiat_codes: HashSet<String>,
}

impl TableCurrencyClassifier {
    pub fn new(fiat_codes: &[&str]) -> Self {
        TableCurrencyClassifier {
            fiat_codes: fiat_codes.iter().map(|c| c.to_string()).collect(),
        }
    }
}

impl CurrencyClassifier for TableCurrencyClassifier {
    fn is_fiat(&self, currency_code: &str) -> bool {
        self.fiat_codes.contains(currency_code)
    }
}

/// Localizer that echoes keys and arguments so tests can assert on structure.
pub struct EchoLocalizer;

impl Localizer for EchoLocalizer {
    fn resolve(&self, template_key: &str, args: &[&str]) -> String {
        if args.is_empty() {
            template_key.to_string()
        } else {
            format!("{}({})", template_key, args.join(","))
        }
    }

    fn base_currency_code(&self) -> String {
        "BASE".to_string()
    }
}
