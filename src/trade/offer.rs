use std::str::FromStr;

use chrono::Duration;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::common::error::TradeUtilError;
use crate::common::types::{duration_millis, PaymentMethodId};

#[derive(PartialEq, Eq, Clone, Debug, Serialize, Deserialize)]
pub struct PaymentMethod {
    pub id: PaymentMethodId,
    #[serde(with = "duration_millis")]
    pub max_trade_period: Duration,
}

impl PaymentMethod {
    pub fn new(id: PaymentMethodId, max_trade_period: Duration) -> Self {
        PaymentMethod {
            id,
            max_trade_period,
        }
    }

    pub fn from_id(id: PaymentMethodId) -> Self {
        PaymentMethod {
            id,
            max_trade_period: id.default_max_trade_period(),
        }
    }

    pub fn from_id_str(id: impl AsRef<str>) -> Result<Self, TradeUtilError> {
        let id = PaymentMethodId::from_str(id.as_ref())?;
        Ok(Self::from_id(id))
    }
}

impl From<PaymentMethodId> for PaymentMethod {
    fn from(id: PaymentMethodId) -> Self {
        PaymentMethod::from_id(id)
    }
}

/// The offer a trade was taken from. Currency code and payment method are
/// optional because offers may reach us partially populated.
#[derive(PartialEq, Clone, Debug, Serialize, Deserialize)]
pub struct Offer {
    pub offer_id: Uuid,
    pub currency_code: Option<String>,
    pub payment_method: Option<PaymentMethod>,
    pub country_code: Option<String>,
}

impl Offer {
    pub fn new(
        currency_code: impl Into<String>,
        payment_method: impl Into<PaymentMethod>,
    ) -> Self {
        Offer {
            offer_id: Uuid::new_v4(),
            currency_code: Some(currency_code.into()),
            payment_method: Some(payment_method.into()),
            country_code: None,
        }
    }

    pub fn with_country_code(mut self, country_code: impl Into<String>) -> Self {
        self.country_code = Some(country_code.into());
        self
    }

    pub fn max_trade_period(&self) -> Option<Duration> {
        self.payment_method.as_ref().map(|pm| pm.max_trade_period)
    }
}
