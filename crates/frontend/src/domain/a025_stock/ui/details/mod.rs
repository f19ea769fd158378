//! Stock modal (create / edit)
//!
//! - model.rs: edit session, validation, create/update submission
//! - catalog.rs: vendor/product reference lists
//! - view_model.rs: ViewModel with session generations
//! - view.rs: Leptos component (pure UI)

pub mod catalog;
pub mod model;
mod view;
pub mod view_model;

pub use model::{EditSession, StockFormController, Submitted};
pub use view::StockModal;
pub use view_model::{FormOutcome, StockFormViewModel};
