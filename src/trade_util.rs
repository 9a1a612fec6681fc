use std::result::Result;
use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use tracing::debug;

use crate::common::error::TradeUtilError;
use crate::duration::{
    Clock, DurationTracker, HumanDurationFormatter, SystemClock, WordsDurationFormatter,
};
use crate::resolver::{AddressResolver, TradeAddresses};
use crate::role::{
    CurrencyClassifier, IsoCurrencyClassifier, Localizer, RoleDescriber, StaticLocalizer,
};
use crate::trade::{KeyRing, Trade};
use crate::wallet::WalletAddressCatalog;

/// Trade helpers bound to the local identity and its wallet.
#[derive(Clone)]
pub struct TradeUtil {
    key_ring: KeyRing,
    resolver: AddressResolver,
    tracker: DurationTracker,
    describer: RoleDescriber,
}

impl TradeUtil {
    pub fn builder() -> TradeUtilBuilder {
        TradeUtilBuilder::new()
    }

    pub fn key_ring(&self) -> &KeyRing {
        &self.key_ring
    }

    // Addresses

    /// Multisig and payout address if both are available, otherwise `None`.
    pub fn available_addresses(&self, trade: &Trade) -> Option<TradeAddresses> {
        self.resolver.available_addresses(trade, &self.key_ring)
    }

    /// Multisig and payout address if the wallet knows both, otherwise `None`.
    pub fn trade_addresses(&self, trade: &Trade) -> Option<TradeAddresses> {
        self.resolver.trade_addresses(trade, &self.key_ring)
    }

    // Trade period

    pub fn remaining_trade_duration(&self, trade: &Trade) -> Duration {
        self.tracker.remaining_duration(trade)
    }

    pub fn max_trade_period(&self, trade: &Trade) -> Duration {
        self.tracker.max_trade_period(trade)
    }

    pub fn remaining_trade_duration_as_percentage(&self, trade: &Trade) -> f64 {
        self.tracker.remaining_duration_as_percentage(trade)
    }

    pub fn remaining_trade_duration_as_words(&self, trade: &Trade) -> String {
        self.tracker.remaining_duration_as_words(trade)
    }

    pub fn half_trade_period_date(&self, trade: Option<&Trade>) -> Option<DateTime<Utc>> {
        self.tracker.half_trade_period_date(trade)
    }

    pub fn date_for_open_dispute(&self, trade: &Trade) -> DateTime<Utc> {
        self.tracker.date_for_open_dispute(trade)
    }

    // Presentation

    pub fn market_description(&self, trade: Option<&Trade>) -> Result<String, TradeUtilError> {
        self.describer.market_description(trade)
    }

    pub fn payment_method_name_with_country_code(
        &self,
        trade: Option<&Trade>,
    ) -> Result<String, TradeUtilError> {
        self.describer.payment_method_name_with_country_code(trade)
    }

    pub fn role(
        &self,
        is_buyer_maker_and_seller_taker: bool,
        is_maker: bool,
        currency_code: &str,
    ) -> String {
        self.describer
            .describe_role(is_buyer_maker_and_seller_taker, is_maker, currency_code)
    }

    /// Role of the local identity in a trade with a contract.
    pub fn my_role(&self, trade: &Trade) -> Option<String> {
        let contract = trade.contract.as_ref()?;
        let currency_code = trade.offer.as_ref()?.currency_code.as_ref()?;
        let is_maker = contract.is_my_role_maker(self.key_ring.pub_key_ring());
        Some(self.role(
            contract.is_buyer_maker_and_seller_taker,
            is_maker,
            currency_code,
        ))
    }
}

pub struct TradeUtilBuilder {
    wallet: Option<Arc<dyn WalletAddressCatalog + Send + Sync>>,
    key_ring: Option<KeyRing>,
    clock: Option<Arc<dyn Clock + Send + Sync>>,
    duration_formatter: Option<Arc<dyn HumanDurationFormatter + Send + Sync>>,
    currency_classifier: Option<Arc<dyn CurrencyClassifier + Send + Sync>>,
    localizer: Option<Arc<dyn Localizer + Send + Sync>>,
}

impl TradeUtilBuilder {
    pub fn new() -> Self {
        Self {
            wallet: None,
            key_ring: None,
            clock: None,
            duration_formatter: None,
            currency_classifier: None,
            localizer: None,
        }
    }

    pub fn wallet(&mut self, wallet: Arc<dyn WalletAddressCatalog + Send + Sync>) -> &mut Self {
        self.wallet = Some(wallet);
        self
    }

    pub fn key_ring(&mut self, key_ring: impl Into<KeyRing>) -> &mut Self {
        self.key_ring = Some(key_ring.into());
        self
    }

    pub fn clock(&mut self, clock: Arc<dyn Clock + Send + Sync>) -> &mut Self {
        self.clock = Some(clock);
        self
    }

    pub fn duration_formatter(
        &mut self,
        duration_formatter: Arc<dyn HumanDurationFormatter + Send + Sync>,
    ) -> &mut Self {
        self.duration_formatter = Some(duration_formatter);
        self
    }

    pub fn currency_classifier(
        &mut self,
        currency_classifier: Arc<dyn CurrencyClassifier + Send + Sync>,
    ) -> &mut Self {
        self.currency_classifier = Some(currency_classifier);
        self
    }

    pub fn localizer(&mut self, localizer: Arc<dyn Localizer + Send + Sync>) -> &mut Self {
        self.localizer = Some(localizer);
        self
    }

    pub fn build(&self) -> Result<TradeUtil, TradeUtilError> {
        let Some(wallet) = self.wallet.as_ref() else {
            return Err(TradeUtilError::Simple("No Wallet defined".to_string()));
        };

        let Some(key_ring) = self.key_ring else {
            return Err(TradeUtilError::Simple("No KeyRing defined".to_string()));
        };

        let clock: Arc<dyn Clock + Send + Sync> = match self.clock.as_ref() {
            Some(clock) => clock.clone(),
            None => {
                debug!("No Clock defined, using SystemClock");
                Arc::new(SystemClock)
            }
        };

        let duration_formatter: Arc<dyn HumanDurationFormatter + Send + Sync> =
            match self.duration_formatter.as_ref() {
                Some(duration_formatter) => duration_formatter.clone(),
                None => Arc::new(WordsDurationFormatter::default()),
            };

        let currency_classifier: Arc<dyn CurrencyClassifier + Send + Sync> =
            match self.currency_classifier.as_ref() {
                Some(currency_classifier) => currency_classifier.clone(),
                None => Arc::new(IsoCurrencyClassifier),
            };

        let localizer: Arc<dyn Localizer + Send + Sync> = match self.localizer.as_ref() {
            Some(localizer) => localizer.clone(),
            None => Arc::new(StaticLocalizer::english()),
        };

        Ok(TradeUtil {
            key_ring,
            resolver: AddressResolver::new(wallet.clone()),
            tracker: DurationTracker::new(clock, duration_formatter),
            describer: RoleDescriber::new(currency_classifier, localizer),
        })
    }
}

impl Default for TradeUtilBuilder {
    fn default() -> Self {
        Self::new()
    }
}
