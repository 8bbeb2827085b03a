use chrono::{DateTime, Utc};
use comanda_catalog::{ExtraKind, MealType, MenuItem};
use comanda_core::SettlementReceipt;
use serde::Serialize;
use uuid::Uuid;

/// A priced, describable order: a menu item plus the extras wrapped around it.
///
/// Extras are held as an owned chain in application order; price and
/// description are folds over that chain. Once applied, an extra cannot be
/// removed.
#[derive(Debug, Clone, Serialize)]
pub struct Order {
    base: MenuItem,
    extras: Vec<ExtraKind>,
}

impl Order {
    /// Builds the base order for a meal type from the catalog.
    pub fn from_menu(meal: MealType) -> Self {
        Self {
            base: MenuItem::for_meal(meal),
            extras: Vec::new(),
        }
    }

    /// Wraps this order with an extra, consuming it.
    ///
    /// The same extra may be applied more than once; each application charges
    /// its surcharge and appends its label again.
    pub fn with_extra(mut self, extra: ExtraKind) -> Self {
        self.extras.push(extra);
        self
    }

    /// The base order's name. Wrapping never changes it.
    pub fn name(&self) -> &str {
        self.base.name
    }

    pub fn base_price_cents(&self) -> i64 {
        self.base.base_price_cents
    }

    /// Base price plus every applied surcharge.
    pub fn price_cents(&self) -> i64 {
        self.base.base_price_cents
            + self
                .extras
                .iter()
                .map(|extra| extra.price_delta_cents())
                .sum::<i64>()
    }

    /// Base description with each extra's label appended in application order.
    pub fn description(&self) -> String {
        let mut description = String::from(self.base.description);
        for extra in &self.extras {
            description.push_str(" + ");
            description.push_str(extra.label());
        }
        description
    }

    /// Kitchen plan for this order, innermost first: the base item's steps,
    /// then one step per extra in application order.
    pub fn assembly_plan(&self) -> Vec<AssemblyStep> {
        let mut plan: Vec<AssemblyStep> = self
            .base
            .preparation_steps
            .iter()
            .copied()
            .map(AssemblyStep::Prepare)
            .collect();
        plan.extend(self.extras.iter().map(|extra| AssemblyStep::AddExtra(*extra)));
        plan
    }
}

/// One kitchen action in an order's assembly plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AssemblyStep {
    Prepare(&'static str),
    AddExtra(ExtraKind),
}

impl AssemblyStep {
    /// Narration text for this step.
    pub fn narration(&self) -> &'static str {
        match self {
            Self::Prepare(step) => step,
            Self::AddExtra(extra) => extra.preparation_step(),
        }
    }
}

/// A settled order as recorded by the session.
#[derive(Debug, Clone, Serialize)]
pub struct CompletedOrder {
    pub id: Uuid,
    pub order: Order,
    pub receipt: SettlementReceipt,
    pub completed_at: DateTime<Utc>,
}

impl CompletedOrder {
    pub fn new(order: Order, receipt: SettlementReceipt) -> Self {
        Self {
            id: Uuid::new_v4(),
            order,
            receipt,
            completed_at: Utc::now(),
        }
    }
}
