pub mod models;
pub mod session;
pub mod settlement;

pub use models::{AssemblyStep, CompletedOrder, Order};
pub use session::{OrderOutcome, OrderRequest, OrderSession, Statistics};
pub use settlement::DirectSettlement;
