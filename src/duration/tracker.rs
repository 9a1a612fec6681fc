use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use tracing::trace;

use super::{Clock, HumanDurationFormatter};
use crate::trade::Trade;

/// Time-window state of a trade, relative to the clock it was built with.
#[derive(Clone)]
pub struct DurationTracker {
    clock: Arc<dyn Clock + Send + Sync>,
    formatter: Arc<dyn HumanDurationFormatter + Send + Sync>,
}

impl DurationTracker {
    pub fn new(
        clock: Arc<dyn Clock + Send + Sync>,
        formatter: Arc<dyn HumanDurationFormatter + Send + Sync>,
    ) -> Self {
        DurationTracker { clock, formatter }
    }

    /// Time left until the recorded deadline, negative once it has passed.
    /// Without a recorded deadline the full trade period is left.
    pub fn remaining_duration(&self, trade: &Trade) -> Duration {
        match trade.max_trade_period_date {
            Some(max_trade_period_date) => max_trade_period_date - self.clock.now(),
            None => self.max_trade_period(trade),
        }
    }

    pub fn max_trade_period(&self, trade: &Trade) -> Duration {
        trade
            .offer
            .as_ref()
            .and_then(|offer| offer.max_trade_period())
            .unwrap_or_else(Duration::zero)
    }

    /// Elapsed fraction of the trade period. Not clamped, passes 1.0 once the
    /// deadline is over.
    pub fn remaining_duration_as_percentage(&self, trade: &Trade) -> f64 {
        let max_period = self.max_trade_period(trade);
        let remaining = self.remaining_duration(trade);
        if max_period.num_milliseconds() == 0 {
            return 0.0;
        }
        1.0 - remaining.num_milliseconds() as f64 / max_period.num_milliseconds() as f64
    }

    pub fn remaining_duration_as_words(&self, trade: &Trade) -> String {
        let remaining = self.remaining_duration(trade).max(Duration::zero());
        self.formatter.format(remaining)
    }

    pub fn half_trade_period_date(&self, trade: Option<&Trade>) -> Option<DateTime<Utc>> {
        trade.and_then(|trade| trade.half_trade_period_date)
    }

    /// Lies in the past when the deadline is already over.
    pub fn date_for_open_dispute(&self, trade: &Trade) -> DateTime<Utc> {
        let remaining = self.remaining_duration(trade);
        trace!(
            "Trade {} has {} ms remaining until a dispute can be opened",
            trade.trade_uuid,
            remaining.num_milliseconds()
        );
        self.clock.now() + remaining
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::types::PaymentMethodId;
    use crate::duration::{FixedClock, WordsDurationFormatter};
    use crate::testing::{SomeTestOfferParams, SomeTestParams, SomeTestTradeParams};
    use crate::trade::{Offer, PaymentMethod, TradeBuilder};

    fn tracker_at(now: DateTime<Utc>) -> (DurationTracker, Arc<FixedClock>) {
        let clock = Arc::new(FixedClock::new(now));
        let tracker = DurationTracker::new(
            clock.clone(),
            Arc::new(WordsDurationFormatter::default()),
        );
        (tracker, clock)
    }

    #[test]
    fn remaining_without_deadline_is_full_period() {
        let (tracker, _) = tracker_at(SomeTestParams::some_now());
        let trade = SomeTestTradeParams::default_builder().build().unwrap();
        assert_eq!(tracker.remaining_duration(&trade), Duration::seconds(86400));
        assert_eq!(tracker.remaining_duration_as_percentage(&trade), 0.0);
    }

    #[test]
    fn remaining_with_deadline_counts_down() {
        let now = SomeTestParams::some_now();
        let (tracker, clock) = tracker_at(now);
        let trade = SomeTestTradeParams::default_builder()
            .max_trade_period_date(now + Duration::hours(6))
            .build()
            .unwrap();

        assert_eq!(tracker.remaining_duration(&trade), Duration::hours(6));
        assert_eq!(tracker.remaining_duration_as_percentage(&trade), 0.75);

        clock.advance(Duration::hours(8));
        assert_eq!(tracker.remaining_duration(&trade), Duration::hours(-2));
        assert_eq!(tracker.remaining_duration_as_words(&trade), "");
        assert!(tracker.remaining_duration_as_percentage(&trade) > 1.0);
    }

    #[test]
    fn no_offer_means_zero_period() {
        let (tracker, _) = tracker_at(SomeTestParams::some_now());
        let trade = TradeBuilder::new().build().unwrap();
        assert_eq!(tracker.max_trade_period(&trade), Duration::zero());
        assert_eq!(tracker.remaining_duration(&trade), Duration::zero());
        assert_eq!(tracker.remaining_duration_as_percentage(&trade), 0.0);
    }

    #[test]
    fn percentage_is_zero_for_zero_period_even_with_deadline() {
        let now = SomeTestParams::some_now();
        let (tracker, _) = tracker_at(now);
        let trade = TradeBuilder::new()
            .max_trade_period_date(now - Duration::days(3))
            .build()
            .unwrap();
        assert_eq!(tracker.remaining_duration_as_percentage(&trade), 0.0);
    }

    #[test]
    fn percentage_is_zero_for_sub_millisecond_period() {
        let (tracker, _) = tracker_at(SomeTestParams::some_now());
        let offer = Offer::new(
            "USD",
            PaymentMethod::new(PaymentMethodId::Zelle, Duration::microseconds(500)),
        );
        let trade = TradeBuilder::new().offer(offer).build().unwrap();
        assert_eq!(tracker.remaining_duration_as_percentage(&trade), 0.0);
    }

    #[test]
    fn offer_without_payment_method_means_zero_period() {
        let (tracker, _) = tracker_at(SomeTestParams::some_now());
        let mut offer = SomeTestOfferParams::fiat_offer();
        offer.payment_method = None;
        let trade = TradeBuilder::new().offer(offer).build().unwrap();
        assert_eq!(tracker.max_trade_period(&trade), Duration::zero());
    }

    #[test]
    fn remaining_as_words_formats_full_period() {
        let (tracker, _) = tracker_at(SomeTestParams::some_now());
        let trade = SomeTestTradeParams::default_builder().build().unwrap();
        assert_eq!(
            tracker.remaining_duration_as_words(&trade),
            "1 day, 0 hours, 0 minutes"
        );
    }

    #[test]
    fn half_trade_period_date_passthrough() {
        let now = SomeTestParams::some_now();
        let (tracker, _) = tracker_at(now);
        let trade = SomeTestTradeParams::default_builder()
            .half_trade_period_date(now + Duration::hours(12))
            .build()
            .unwrap();
        assert_eq!(
            tracker.half_trade_period_date(Some(&trade)),
            Some(now + Duration::hours(12))
        );
        assert_eq!(tracker.half_trade_period_date(None), None);
    }

    #[test]
    fn dispute_date_is_the_deadline() {
        let now = SomeTestParams::some_now();
        let (tracker, clock) = tracker_at(now);
        let deadline = now + Duration::hours(10);
        let trade = SomeTestTradeParams::default_builder()
            .max_trade_period_date(deadline)
            .build()
            .unwrap();
        assert_eq!(tracker.date_for_open_dispute(&trade), deadline);

        clock.advance(Duration::days(1));
        assert_eq!(tracker.date_for_open_dispute(&trade), deadline);
        assert!(tracker.date_for_open_dispute(&trade) < clock.now());
    }

    #[test]
    fn dispute_date_without_deadline_is_a_full_period_away() {
        let now = SomeTestParams::some_now();
        let (tracker, _) = tracker_at(now);
        let trade = SomeTestTradeParams::default_builder().build().unwrap();
        assert_eq!(
            tracker.date_for_open_dispute(&trade),
            now + Duration::seconds(86400)
        );
    }
}
