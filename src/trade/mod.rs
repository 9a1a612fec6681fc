mod builder;
mod contract;
mod key_ring;
mod offer;
mod trade;

pub use builder::{ContractBuilder, TradeBuilder};
pub use contract::Contract;
pub use key_ring::{KeyRing, PubKeyRing};
pub use offer::{Offer, PaymentMethod};
pub use trade::Trade;
