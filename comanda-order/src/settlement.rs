use chrono::Utc;
use comanda_core::{
    PaymentMethod, ReferenceSource, SettlementError, SettlementGateway, SettlementReceipt,
    UuidReferenceSource,
};

/// In-process settlement over the closed payment-method set.
///
/// Every shipped method settles on the first attempt; the `Result` contract
/// still lets a gateway decline.
pub struct DirectSettlement {
    references: Box<dyn ReferenceSource>,
}

impl DirectSettlement {
    pub fn new() -> Self {
        Self {
            references: Box::new(UuidReferenceSource),
        }
    }

    /// Replaces the reference-code source, for deterministic tests.
    pub fn with_reference_source(references: Box<dyn ReferenceSource>) -> Self {
        Self { references }
    }
}

impl Default for DirectSettlement {
    fn default() -> Self {
        Self::new()
    }
}

impl SettlementGateway for DirectSettlement {
    fn settle(
        &self,
        method: &PaymentMethod,
        amount_cents: i64,
    ) -> Result<SettlementReceipt, SettlementError> {
        let reference = match method {
            PaymentMethod::Cash => None,
            PaymentMethod::Card { .. } => Some(self.references.authorization_code()),
            PaymentMethod::Transfer { .. } => Some(self.references.transfer_reference()),
        };

        tracing::debug!(
            method = method.display_name(),
            amount_cents,
            "settlement approved"
        );

        Ok(SettlementReceipt {
            method: method.display_name().to_string(),
            amount_cents,
            reference,
            settled_at: Utc::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedReferenceSource;

    impl ReferenceSource for FixedReferenceSource {
        fn authorization_code(&self) -> String {
            "123456".to_string()
        }

        fn transfer_reference(&self) -> String {
            "TRF-TEST0001".to_string()
        }
    }

    #[test]
    fn test_cash_settles_without_reference() {
        let gateway = DirectSettlement::new();
        let receipt = gateway.settle(&PaymentMethod::Cash, 3_500).unwrap();

        assert_eq!(receipt.method, "Efectivo");
        assert_eq!(receipt.amount_cents, 3_500);
        assert!(receipt.reference.is_none());
    }

    #[test]
    fn test_card_receipt_carries_authorization_code() {
        let gateway = DirectSettlement::with_reference_source(Box::new(FixedReferenceSource));
        let receipt = gateway
            .settle(&PaymentMethod::card("1234567890123456"), 6_500)
            .unwrap();

        assert_eq!(receipt.method, "Tarjeta");
        assert_eq!(receipt.reference.as_deref(), Some("123456"));
    }

    #[test]
    fn test_transfer_receipt_carries_bank_reference() {
        let gateway = DirectSettlement::with_reference_source(Box::new(FixedReferenceSource));
        let receipt = gateway
            .settle(&PaymentMethod::transfer("4567-8901-2345"), 5_500)
            .unwrap();

        assert_eq!(receipt.method, "Transferencia");
        assert_eq!(receipt.reference.as_deref(), Some("TRF-TEST0001"));
    }
}
