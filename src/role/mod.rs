mod currency;
mod describer;
mod localizer;

pub use currency::{CurrencyClassifier, IsoCurrencyClassifier};
pub use describer::RoleDescriber;
pub use localizer::{Localizer, StaticLocalizer};

#[cfg(test)]
pub use currency::MockCurrencyClassifier;
