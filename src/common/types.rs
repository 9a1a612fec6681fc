use chrono::Duration;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

// Payment methods and their default trade periods follow
// https://github.com/bisq-network/bisq/blob/release/v1.9.10/core/src/main/java/bisq/core/payment/payload/PaymentMethod.java
// Trade limits and risk association are left to the higher level.

#[derive(
    PartialEq, Eq, Hash, Clone, Copy, Debug, Serialize, Deserialize, EnumString, Display,
)]
pub enum PaymentMethodId {
    Uphold,
    MoneyBeam,
    PopMoney,
    Revolut,
    PerfectMoney,
    Sepa,
    SepaInstant,
    FasterPayments,
    NationalBank,
    SameBank,
    SpecificBanks,
    JapanBank,
    AustraliaPayID,
    Swish,
    AliPay,
    WeChatPay,
    Zelle,
    InteracETransfer,
    USPostalMoneyOrder,
    CashDeposit,
    MoneyGram,
    WesternUnion,
    FaceToFace,
    HalCash,
    Blockchains,
    BlockchainsInstant,
    PromptPay,
    AdvancedCash,
    TransferWise,
    Paysera,
    Paxum,
    NEFT,
    RTGS,
    IMPS,
    UPI,
    Paytm,
    Nequi,
    Bizum,
    Pix,
    AmazonGiftCard,
    CashByMail,
    Capitual,
    Celpay,
    Monese,
    Satispay,
    Tikkie,
    Verse,
    Strike,
    SWIFT,
    ACHTransfer,
    DomesticWireTransfer,
    CashApp,
    Venmo,
}

impl PaymentMethodId {
    /// Maximum time a trade paid with this method may take before a dispute can be opened.
    pub fn default_max_trade_period(&self) -> Duration {
        match self {
            PaymentMethodId::BlockchainsInstant => Duration::hours(1),
            PaymentMethodId::SameBank | PaymentMethodId::Celpay => Duration::days(2),
            PaymentMethodId::DomesticWireTransfer => Duration::days(3),
            PaymentMethodId::NationalBank
            | PaymentMethodId::SpecificBanks
            | PaymentMethodId::Zelle
            | PaymentMethodId::CashDeposit
            | PaymentMethodId::MoneyGram
            | PaymentMethodId::WesternUnion
            | PaymentMethodId::FaceToFace
            | PaymentMethodId::TransferWise => Duration::days(4),
            PaymentMethodId::ACHTransfer => Duration::days(5),
            PaymentMethodId::Sepa => Duration::days(6),
            PaymentMethodId::SWIFT => Duration::days(7),
            PaymentMethodId::USPostalMoneyOrder | PaymentMethodId::CashByMail => Duration::days(8),
            _ => Duration::days(1),
        }
    }
}

// chrono::Duration carries no serde impls, so durations travel as signed milliseconds
pub(crate) mod duration_millis {
    use chrono::Duration;
    use serde::{de::Error, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i64(duration.num_milliseconds())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        let millis = i64::deserialize(deserializer)?;
        Duration::try_milliseconds(millis)
            .ok_or_else(|| D::Error::custom(format!("duration of {} ms out of range", millis)))
    }
}
