use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Meal types on the fixed menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
}

impl MealType {
    pub const ALL: [MealType; 3] = [MealType::Breakfast, MealType::Lunch, MealType::Dinner];
}

impl FromStr for MealType {
    type Err = CatalogError;

    /// Parses a menu tag. English and Spanish forms are accepted.
    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        match tag.trim().to_ascii_uppercase().as_str() {
            "BREAKFAST" | "DESAYUNO" => Ok(Self::Breakfast),
            "LUNCH" | "ALMUERZO" => Ok(Self::Lunch),
            "DINNER" | "CENA" => Ok(Self::Dinner),
            _ => Err(CatalogError::UnknownMealType(tag.to_string())),
        }
    }
}

/// A fixed menu entry: name, base price, and what the kitchen does to make it.
#[derive(Debug, Clone, Serialize)]
pub struct MenuItem {
    pub meal: MealType,
    pub name: &'static str,
    pub base_price_cents: i64,
    pub description: &'static str,
    pub preparation_steps: &'static [&'static str],
}

impl MenuItem {
    /// Catalog lookup for a meal type. Every call yields a fresh value.
    pub fn for_meal(meal: MealType) -> MenuItem {
        match meal {
            MealType::Breakfast => MenuItem {
                meal,
                name: "Desayuno Completo",
                base_price_cents: 3_500,
                description: "Huevos, pan, jugo de naranja, café",
                preparation_steps: &[
                    "Cocinando huevos revueltos",
                    "Tostando pan",
                    "Exprimiendo jugo de naranja fresco",
                    "Preparando café",
                ],
            },
            MealType::Lunch => MenuItem {
                meal,
                name: "Almuerzo Ejecutivo",
                base_price_cents: 4_500,
                description: "Sopa, plato principal, postre, refresco",
                preparation_steps: &[
                    "Calentando sopa del día",
                    "Cocinando plato principal (pollo con arroz)",
                    "Preparando ensalada fresca",
                    "Sirviendo postre",
                ],
            },
            MealType::Dinner => MenuItem {
                meal,
                name: "Cena Especial",
                base_price_cents: 5_500,
                description: "Entrada, plato fuerte gourmet, vino, postre",
                preparation_steps: &[
                    "Preparando entrada (ensalada caprese)",
                    "Cocinando plato gourmet (filete con papas)",
                    "Sirviendo vino de la casa",
                    "Preparando postre especial",
                ],
            },
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Unknown meal type: {0}")]
    UnknownMealType(String),
}
