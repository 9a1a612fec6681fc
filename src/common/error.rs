use std::{error::Error, fmt};

#[derive(Debug)]
pub enum TradeUtilError {
    Simple(String),
    Precondition(String),
    StrumParsing(strum::ParseError),
    SerdesJson(serde_json::Error),
    HexDecoding(hex::FromHexError),
}

impl Error for TradeUtilError {}

impl fmt::Display for TradeUtilError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let error_string = match self {
            TradeUtilError::Simple(msg) => format!("TradeUtil-Error | Other - {}", msg),
            TradeUtilError::Precondition(msg) => {
                format!("TradeUtil-Error | Precondition - {}", msg)
            }
            TradeUtilError::StrumParsing(err) => {
                format!("TradeUtil-Error | StrumParseError - {}", err)
            }
            TradeUtilError::SerdesJson(err) => {
                format!("TradeUtil-Error | SerdesJsonError - {}", err)
            }
            TradeUtilError::HexDecoding(err) => {
                format!("TradeUtil-Error | HexDecodingError - {}", err)
            }
        };
        write!(f, "{}", error_string)
    }
}

impl From<strum::ParseError> for TradeUtilError {
    fn from(e: strum::ParseError) -> TradeUtilError {
        TradeUtilError::StrumParsing(e)
    }
}

impl From<serde_json::Error> for TradeUtilError {
    fn from(e: serde_json::Error) -> TradeUtilError {
        TradeUtilError::SerdesJson(e)
    }
}

impl From<hex::FromHexError> for TradeUtilError {
    fn from(e: hex::FromHexError) -> TradeUtilError {
        TradeUtilError::HexDecoding(e)
    }
}
