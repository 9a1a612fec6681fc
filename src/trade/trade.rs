use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{Contract, Offer};

/// Snapshot of one trade. Only read by this crate, the trade lifecycle owns
/// every mutation.
#[derive(PartialEq, Clone, Debug, Serialize, Deserialize)]
pub struct Trade {
    pub trade_uuid: Uuid,
    pub contract: Option<Contract>,
    pub offer: Option<Offer>,
    pub max_trade_period_date: Option<DateTime<Utc>>,
    pub half_trade_period_date: Option<DateTime<Utc>>,
}
