use std::str::FromStr;

use iso_currency::Currency;

#[cfg_attr(test, mockall::automock)]
pub trait CurrencyClassifier {
    fn is_fiat(&self, currency_code: &str) -> bool;
}

/// Anything with an ISO 4217 code is fiat, everything else (BTC, XMR, ..) is not.
#[derive(Clone, Copy, Debug, Default)]
pub struct IsoCurrencyClassifier;

impl CurrencyClassifier for IsoCurrencyClassifier {
    fn is_fiat(&self, currency_code: &str) -> bool {
        Currency::from_str(currency_code).is_ok()
    }
}
