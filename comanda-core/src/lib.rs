pub mod payment;
pub mod pii;

pub use payment::{
    PaymentMethod, ReferenceSource, SettlementError, SettlementGateway, SettlementReceipt,
    UuidReferenceSource,
};
pub use pii::Masked;
