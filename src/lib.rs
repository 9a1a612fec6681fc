pub mod common;
pub mod duration;
pub mod resolver;
pub mod role;
pub mod testing;
pub mod trade;
pub mod trade_util;
pub mod wallet;

pub use common::error::TradeUtilError;
pub use trade_util::{TradeUtil, TradeUtilBuilder};
