mod resolver;

pub use resolver::{AddressResolver, TradeAddresses};
