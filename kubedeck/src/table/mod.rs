//! The generic data-table engine: column model, interactive state and
//! gesture sessions. Rendering lives in `ui::table`; the pieces here are
//! UI-free and carry the behavioral contracts (filter → sort → paginate,
//! ordering/visibility invariants, identity-keyed selection).

pub mod column;
pub mod gesture;
pub mod state;

pub use column::{ActionVariant, CellTone, Column, RowAction, TableCell};
pub use gesture::{Gesture, GestureEffect, GestureSession, MIN_COLUMN_WIDTH};
pub use state::{array_move, page_window, HeaderSelection, TableState};
