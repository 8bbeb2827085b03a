pub mod extras;
pub mod menu;

pub use extras::ExtraKind;
pub use menu::{CatalogError, MealType, MenuItem};
