use serde::{Deserialize, Serialize};

/// Priced extras that can wrap any order.
///
/// Each extra is a pure transform: a fixed surcharge plus a description label.
/// It carries no state of its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ExtraKind {
    ExtraCheese,
    ExtraPortion,
    PremiumDrink,
}

impl ExtraKind {
    pub const ALL: [ExtraKind; 3] = [
        ExtraKind::ExtraCheese,
        ExtraKind::ExtraPortion,
        ExtraKind::PremiumDrink,
    ];

    /// Fixed surcharge for this extra.
    pub fn price_delta_cents(&self) -> i64 {
        match self {
            Self::ExtraCheese => 800,
            Self::ExtraPortion => 1_500,
            Self::PremiumDrink => 1_200,
        }
    }

    /// Label appended to the order description.
    pub fn label(&self) -> &'static str {
        match self {
            Self::ExtraCheese => "Queso Extra",
            Self::ExtraPortion => "Porción Extra",
            Self::PremiumDrink => "Bebida Premium",
        }
    }

    /// Kitchen step performed after the wrapped order has been assembled.
    pub fn preparation_step(&self) -> &'static str {
        match self {
            Self::ExtraCheese => "Agregando queso extra de primera calidad",
            Self::ExtraPortion => "Agregando porción extra (tamaño doble)",
            Self::PremiumDrink => "Agregando bebida premium (jugo natural o smoothie)",
        }
    }
}
