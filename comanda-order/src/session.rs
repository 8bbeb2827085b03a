use comanda_catalog::{ExtraKind, MealType};
use comanda_core::{PaymentMethod, SettlementError, SettlementGateway, SettlementReceipt};
use serde::{Deserialize, Serialize};

use crate::models::{AssemblyStep, CompletedOrder, Order};
use crate::settlement::DirectSettlement;

/// What to build: the meal plus the requested extras.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct OrderRequest {
    pub meal: MealType,
    pub extra_cheese: bool,
    pub extra_portion: bool,
    pub premium_drink: bool,
}

impl OrderRequest {
    pub fn plain(meal: MealType) -> Self {
        Self {
            meal,
            extra_cheese: false,
            extra_portion: false,
            premium_drink: false,
        }
    }
}

/// Terminal result of one `process_order` call.
#[derive(Debug)]
pub enum OrderOutcome {
    /// The order settled and was recorded.
    Completed {
        order: Order,
        assembly: Vec<AssemblyStep>,
        receipt: SettlementReceipt,
    },
    /// Settlement was declined; the order was discarded.
    PaymentFailed {
        amount_cents: i64,
        error: SettlementError,
    },
}

/// Aggregate view over the completed orders.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Statistics {
    pub count: usize,
    pub total_cents: i64,
    pub average_cents: f64,
}

/// Process-lifetime order book: runs compose → assemble → settle and keeps
/// the append-only sequence of completed orders.
pub struct OrderSession {
    gateway: Box<dyn SettlementGateway>,
    completed: Vec<CompletedOrder>,
}

impl OrderSession {
    pub fn new() -> Self {
        Self::with_gateway(Box::new(DirectSettlement::new()))
    }

    pub fn with_gateway(gateway: Box<dyn SettlementGateway>) -> Self {
        Self {
            gateway,
            completed: Vec::new(),
        }
    }

    /// Runs one order through its three phases. A declined settlement is a
    /// terminal outcome, not an error, and leaves the session untouched.
    pub fn process_order(
        &mut self,
        request: OrderRequest,
        method: &PaymentMethod,
    ) -> OrderOutcome {
        // Compose. Extras apply in fixed priority order: cheese, portion, drink.
        let mut order = Order::from_menu(request.meal);
        tracing::info!(name = order.name(), "order created");

        if request.extra_cheese {
            order = order.with_extra(ExtraKind::ExtraCheese);
        }
        if request.extra_portion {
            order = order.with_extra(ExtraKind::ExtraPortion);
        }
        if request.premium_drink {
            order = order.with_extra(ExtraKind::PremiumDrink);
        }

        // Assemble.
        let assembly = order.assembly_plan();

        // Settle. One attempt, no retry.
        let amount_cents = order.price_cents();
        match self.gateway.settle(method, amount_cents) {
            Ok(receipt) => {
                let record = CompletedOrder::new(order.clone(), receipt.clone());
                tracing::info!(order_id = %record.id, amount_cents, "order completed");
                self.completed.push(record);
                OrderOutcome::Completed {
                    order,
                    assembly,
                    receipt,
                }
            }
            Err(error) => {
                tracing::warn!(amount_cents, %error, "payment failed, order discarded");
                OrderOutcome::PaymentFailed {
                    amount_cents,
                    error,
                }
            }
        }
    }

    /// Completed orders in completion order.
    pub fn completed_orders(&self) -> &[CompletedOrder] {
        &self.completed
    }

    pub fn statistics(&self) -> Statistics {
        let count = self.completed.len();
        let total_cents: i64 = self
            .completed
            .iter()
            .map(|record| record.order.price_cents())
            .sum();
        let average_cents = if count == 0 {
            0.0
        } else {
            total_cents as f64 / count as f64
        };

        Statistics {
            count,
            total_cents,
            average_cents,
        }
    }

    /// Aggregate settlement report for the session.
    pub fn settlement_report(&self) -> serde_json::Value {
        let stats = self.statistics();
        let orders: Vec<serde_json::Value> = self
            .completed
            .iter()
            .map(|record| {
                serde_json::json!({
                    "order_id": record.id,
                    "name": record.order.name(),
                    "description": record.order.description(),
                    "amount_cents": record.order.price_cents(),
                    "method": record.receipt.method,
                    "reference": record.receipt.reference,
                    "completed_at": record.completed_at.to_rfc3339(),
                })
            })
            .collect();

        serde_json::json!({
            "report_date": chrono::Utc::now().to_rfc3339(),
            "metrics": {
                "completed_orders": stats.count,
                "total_revenue_cents": stats.total_cents,
                "average_per_order_cents": stats.average_cents,
            },
            "orders": orders,
        })
    }
}

impl Default for OrderSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct DecliningGateway;

    impl SettlementGateway for DecliningGateway {
        fn settle(
            &self,
            method: &PaymentMethod,
            _amount_cents: i64,
        ) -> Result<SettlementReceipt, SettlementError> {
            Err(SettlementError::Declined {
                method: method.display_name().to_string(),
                reason: "insufficient funds".to_string(),
            })
        }
    }

    #[test]
    fn test_statistics_on_empty_session() {
        let session = OrderSession::new();
        let stats = session.statistics();

        assert_eq!(stats.count, 0);
        assert_eq!(stats.total_cents, 0);
        assert_eq!(stats.average_cents, 0.0);
    }

    #[test]
    fn test_extras_apply_in_fixed_priority_order() {
        let mut session = OrderSession::new();
        let request = OrderRequest {
            meal: MealType::Lunch,
            extra_cheese: true,
            extra_portion: true,
            premium_drink: true,
        };

        match session.process_order(request, &PaymentMethod::Cash) {
            OrderOutcome::Completed { order, .. } => assert_eq!(
                order.description(),
                "Sopa, plato principal, postre, refresco + Queso Extra + Porción Extra + Bebida Premium"
            ),
            OrderOutcome::PaymentFailed { .. } => panic!("cash settlement never declines"),
        }
    }

    #[test]
    fn test_completed_orders_accumulate_in_completion_order() {
        let mut session = OrderSession::new();
        session.process_order(OrderRequest::plain(MealType::Breakfast), &PaymentMethod::Cash);
        session.process_order(OrderRequest::plain(MealType::Dinner), &PaymentMethod::Cash);

        let completed = session.completed_orders();
        assert_eq!(completed.len(), 2);
        assert_eq!(completed[0].order.name(), "Desayuno Completo");
        assert_eq!(completed[1].order.name(), "Cena Especial");

        let stats = session.statistics();
        assert_eq!(stats.count, 2);
        assert_eq!(stats.total_cents, 3_500 + 5_500);
        assert_eq!(stats.average_cents, (3_500.0 + 5_500.0) / 2.0);
    }

    #[test]
    fn test_declined_settlement_records_nothing() {
        let mut session = OrderSession::with_gateway(Box::new(DecliningGateway));
        let outcome = session.process_order(
            OrderRequest::plain(MealType::Lunch),
            &PaymentMethod::card("1234567890123456"),
        );

        match outcome {
            OrderOutcome::PaymentFailed {
                amount_cents,
                error,
            } => {
                assert_eq!(amount_cents, 4_500);
                assert!(matches!(error, SettlementError::Declined { .. }));
            }
            OrderOutcome::Completed { .. } => panic!("gateway always declines"),
        }

        assert!(session.completed_orders().is_empty());
        assert_eq!(session.statistics().count, 0);
        assert_eq!(session.statistics().total_cents, 0);
    }

    #[test]
    fn test_settlement_report_agrees_with_statistics() {
        let mut session = OrderSession::new();
        let request = OrderRequest {
            meal: MealType::Lunch,
            extra_cheese: true,
            extra_portion: false,
            premium_drink: true,
        };
        session.process_order(request, &PaymentMethod::transfer("4567-8901"));

        let report = session.settlement_report();
        assert_eq!(report["metrics"]["completed_orders"], 1);
        assert_eq!(report["metrics"]["total_revenue_cents"], 6_500);
        assert_eq!(report["orders"].as_array().unwrap().len(), 1);
        assert_eq!(report["orders"][0]["method"], "Transferencia");
    }
}
