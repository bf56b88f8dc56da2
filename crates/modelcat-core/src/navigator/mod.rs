//! Navigator state for one interactive catalog view.
//!
//! Expansion and selection are owned by a [`NavigatorSession`]; the listing
//! and detail projections are derived from its current selection.

mod expansion;
mod listing;
mod rows;
mod selection;
mod session;

pub use expansion::ExpansionState;
pub use listing::{ModelDetail, ModelRow, Property, RowAction};
pub use rows::{visible_rows, Affordance, VisibleRow};
pub use selection::Selection;
pub use session::{NavigatorSession, SelectionView};
