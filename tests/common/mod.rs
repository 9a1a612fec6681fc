pub mod fakes;
pub mod logger;
