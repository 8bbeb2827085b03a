use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::pii::Masked;

/// Accepted payment methods.
///
/// A closed set dispatched by pattern matching: adding a method means adding a
/// variant here and covering it in every gateway.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "method", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentMethod {
    Cash,
    Card { number: Masked<String> },
    Transfer { account: String },
}

impl PaymentMethod {
    pub fn card(number: impl Into<String>) -> Self {
        Self::Card {
            number: Masked::new(number.into()),
        }
    }

    pub fn transfer(account: impl Into<String>) -> Self {
        Self::Transfer {
            account: account.into(),
        }
    }

    /// Customer-facing method name.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Cash => "Efectivo",
            Self::Card { .. } => "Tarjeta",
            Self::Transfer { .. } => "Transferencia",
        }
    }

    /// Last four digits of the card number, if this is a card payment.
    pub fn card_last_four(&self) -> Option<&str> {
        match self {
            Self::Card { number } => {
                let digits = number.expose();
                Some(&digits[digits.len().saturating_sub(4)..])
            }
            _ => None,
        }
    }
}

/// Proof of a successful settlement attempt.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SettlementReceipt {
    pub method: String,
    pub amount_cents: i64,
    pub reference: Option<String>,
    pub settled_at: DateTime<Utc>,
}

#[derive(Debug, thiserror::Error)]
pub enum SettlementError {
    #[error("Settlement declined by {method}: {reason}")]
    Declined { method: String, reason: String },
}

/// Gateway contract for collecting an order total.
///
/// Implementations make exactly one settlement attempt per call; retrying is
/// the caller's decision, never the gateway's.
pub trait SettlementGateway: Send + Sync {
    fn settle(
        &self,
        method: &PaymentMethod,
        amount_cents: i64,
    ) -> Result<SettlementReceipt, SettlementError>;
}

/// Source of the synthetic reference codes attached to receipts.
///
/// Injected so settlement output stays deterministic under test.
pub trait ReferenceSource: Send + Sync {
    /// Six-digit authorization code for card settlements.
    fn authorization_code(&self) -> String;

    /// Bank reference for transfer settlements.
    fn transfer_reference(&self) -> String;
}

/// Default source deriving codes from freshly minted UUIDs.
pub struct UuidReferenceSource;

impl ReferenceSource for UuidReferenceSource {
    fn authorization_code(&self) -> String {
        (Uuid::new_v4().as_u128() % 900_000 + 100_000).to_string()
    }

    fn transfer_reference(&self) -> String {
        let id = Uuid::new_v4().to_string();
        format!(
            "TRF-{}",
            id.split('-').next().unwrap_or("00000000").to_uppercase()
        )
    }
}
