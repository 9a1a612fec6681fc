use std::collections::HashMap;

use serde::Deserialize;
use tracing::warn;

use crate::common::error::TradeUtilError;

pub const AS_MAKER_KEY: &str = "formatter.asMaker";
pub const AS_TAKER_KEY: &str = "formatter.asTaker";
pub const BUYER_KEY: &str = "shared.buyer";
pub const SELLER_KEY: &str = "shared.seller";

pub trait Localizer {
    /// Resolves `template_key` and substitutes `{0}`, `{1}`, .. with `args`.
    fn resolve(&self, template_key: &str, args: &[&str]) -> String;

    fn base_currency_code(&self) -> String;
}

/// Localizer over a fixed string table. Unknown keys resolve to the key itself.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct StaticLocalizer {
    base_currency_code: String,
    strings: HashMap<String, String>,
}

impl StaticLocalizer {
    pub fn new(base_currency_code: impl Into<String>, strings: HashMap<String, String>) -> Self {
        StaticLocalizer {
            base_currency_code: base_currency_code.into(),
            strings,
        }
    }

    pub fn english() -> Self {
        let strings = HashMap::from([
            (AS_MAKER_KEY.to_string(), "{0} {1} as maker".to_string()),
            (AS_TAKER_KEY.to_string(), "{0} {1} as taker".to_string()),
            (BUYER_KEY.to_string(), "buyer".to_string()),
            (SELLER_KEY.to_string(), "seller".to_string()),
        ]);
        Self::new("BTC", strings)
    }

    /// Expects `{"base_currency_code": "BTC", "strings": {"key": "template", ..}}`.
    pub fn from_json(json: impl AsRef<str>) -> Result<Self, TradeUtilError> {
        let localizer: StaticLocalizer = serde_json::from_str(json.as_ref())?;
        Ok(localizer)
    }
}

impl Default for StaticLocalizer {
    fn default() -> Self {
        Self::english()
    }
}

impl Localizer for StaticLocalizer {
    fn resolve(&self, template_key: &str, args: &[&str]) -> String {
        let Some(template) = self.strings.get(template_key) else {
            warn!("Missing localization for key {}", template_key);
            return template_key.to_string();
        };

        // Single pass, so placeholders inside arguments stay as they are
        let mut resolved = String::with_capacity(template.len());
        let mut rest = template.as_str();
        while let Some(open) = rest.find('{') {
            resolved.push_str(&rest[..open]);
            let after = &rest[open + 1..];
            let placeholder = after.find('}').and_then(|close| {
                let index = after[..close].parse::<usize>().ok()?;
                args.get(index).map(|arg| (close, *arg))
            });
            match placeholder {
                Some((close, arg)) => {
                    resolved.push_str(arg);
                    rest = &after[close + 1..];
                }
                None => {
                    resolved.push('{');
                    rest = after;
                }
            }
        }
        resolved.push_str(rest);
        resolved
    }

    fn base_currency_code(&self) -> String {
        self.base_currency_code.to_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn english_resolves_templates() {
        let localizer = StaticLocalizer::english();
        let buyer = localizer.resolve(BUYER_KEY, &[]);
        assert_eq!(
            localizer.resolve(AS_MAKER_KEY, &["BTC", buyer.as_str()]),
            "BTC buyer as maker"
        );
        assert_eq!(localizer.base_currency_code(), "BTC");
    }

    #[test]
    fn placeholders_inside_arguments_are_not_substituted() {
        let localizer = StaticLocalizer::english();
        assert_eq!(
            localizer.resolve(AS_MAKER_KEY, &["{1}", "buyer"]),
            "{1} buyer as maker"
        );
    }

    #[test]
    fn placeholders_without_arguments_are_kept() {
        let localizer = StaticLocalizer::english();
        assert_eq!(localizer.resolve(AS_TAKER_KEY, &["BTC"]), "BTC {1} as taker");
        assert_eq!(
            localizer.resolve(AS_MAKER_KEY, &["{x}", "seller"]),
            "{x} seller as maker"
        );
    }

    #[test]
    fn unknown_key_resolves_to_itself() {
        let localizer = StaticLocalizer::english();
        assert_eq!(localizer.resolve("shared.unknown", &["x"]), "shared.unknown");
    }

    #[test]
    fn from_json_loads_table() {
        let json = r#"{
            "base_currency_code": "BTC",
            "strings": {
                "formatter.asMaker": "{0} {1} als Maker",
                "shared.buyer": "Käufer"
            }
        }"#;
        let localizer = StaticLocalizer::from_json(json).unwrap();
        assert_eq!(
            localizer.resolve(AS_MAKER_KEY, &["BTC", "Käufer"]),
            "BTC Käufer als Maker"
        );
    }

    #[test]
    fn from_json_rejects_malformed_table() {
        match StaticLocalizer::from_json("{\"strings\": []}") {
            Err(TradeUtilError::SerdesJson(_)) => {}
            other => panic!("expected SerdesJson error, got {:?}", other),
        }
    }
}
