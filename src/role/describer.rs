use std::sync::Arc;

use super::localizer::{AS_MAKER_KEY, AS_TAKER_KEY, BUYER_KEY, SELLER_KEY};
use super::{CurrencyClassifier, Localizer};
use crate::common::error::TradeUtilError;
use crate::trade::Trade;

/// Presentation strings for a trade: the trader's role, market and payment method.
#[derive(Clone)]
pub struct RoleDescriber {
    classifier: Arc<dyn CurrencyClassifier + Send + Sync>,
    localizer: Arc<dyn Localizer + Send + Sync>,
}

impl RoleDescriber {
    pub fn new(
        classifier: Arc<dyn CurrencyClassifier + Send + Sync>,
        localizer: Arc<dyn Localizer + Send + Sync>,
    ) -> Self {
        RoleDescriber {
            classifier,
            localizer,
        }
    }

    /// Fiat markets name the base currency and non-fiat markets name the
    /// traded currency. The two classes pair the buyer/seller nouns with the
    /// flags the opposite way round.
    pub fn describe_role(
        &self,
        is_buyer_maker_and_seller_taker: bool,
        is_maker: bool,
        currency_code: &str,
    ) -> String {
        let is_fiat = self.classifier.is_fiat(currency_code);
        let currency_term = if is_fiat {
            self.localizer.base_currency_code()
        } else {
            currency_code.to_string()
        };

        // Fiat: maker is buyer iff buyer is maker. Non-fiat flips that.
        let maker_is_buyer = is_buyer_maker_and_seller_taker == is_fiat;
        let role_is_buyer = if is_maker {
            maker_is_buyer
        } else {
            !maker_is_buyer
        };

        let role = self
            .localizer
            .resolve(if role_is_buyer { BUYER_KEY } else { SELLER_KEY }, &[]);
        let template_key = if is_maker { AS_MAKER_KEY } else { AS_TAKER_KEY };
        self.localizer
            .resolve(template_key, &[currency_term.as_str(), role.as_str()])
    }

    /// Currency pair of the trade's market, `""` without a trade.
    pub fn market_description(&self, trade: Option<&Trade>) -> Result<String, TradeUtilError> {
        let Some(trade) = trade else {
            return Ok(String::new());
        };

        let Some(offer) = trade.offer.as_ref() else {
            return Err(TradeUtilError::Precondition(format!(
                "Trade {} has no Offer",
                trade.trade_uuid
            )));
        };

        let Some(currency_code) = offer.currency_code.as_ref() else {
            return Err(TradeUtilError::Precondition(format!(
                "Offer {} of Trade {} has no currency code",
                offer.offer_id, trade.trade_uuid
            )));
        };

        Ok(self.currency_pair(currency_code))
    }

    pub fn currency_pair(&self, currency_code: &str) -> String {
        let base_currency_code = self.localizer.base_currency_code();
        if self.classifier.is_fiat(currency_code) {
            format!("{}/{}", base_currency_code, currency_code)
        } else {
            format!("{}/{}", currency_code, base_currency_code)
        }
    }

    /// Short payment method name followed by the offer's country code, if any.
    pub fn payment_method_name_with_country_code(
        &self,
        trade: Option<&Trade>,
    ) -> Result<String, TradeUtilError> {
        let Some(trade) = trade else {
            return Ok(String::new());
        };

        let Some(offer) = trade.offer.as_ref() else {
            return Err(TradeUtilError::Precondition(format!(
                "Trade {} has no Offer",
                trade.trade_uuid
            )));
        };

        let Some(payment_method) = offer.payment_method.as_ref() else {
            return Err(TradeUtilError::Precondition(format!(
                "Offer {} of Trade {} has no payment method",
                offer.offer_id, trade.trade_uuid
            )));
        };

        let short_name_key = format!("{}_SHORT", payment_method.id);
        let mut short_name = self.localizer.resolve(&short_name_key, &[]);
        if short_name == short_name_key {
            short_name = payment_method.id.to_string();
        }

        match offer.country_code.as_ref() {
            Some(country_code) => Ok(format!("{} ({})", short_name, country_code)),
            None => Ok(short_name),
        }
    }
}
