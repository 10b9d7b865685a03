//! Unit field whose label follows the housing type of the chosen condominium.
//!
//! - `synchronizer` holds the reconcile logic behind two traits
//! - `dom` binds it to elements of a server-rendered page
//! - `view` is the Leptos rendition of the same field

pub mod display;
pub mod dom;
pub mod synchronizer;
pub mod view;

pub use display::UnitFieldDisplay;
pub use dom::{init_unit_label_sync, mount_unit_label_sync, DomUnitFieldView};
pub use synchronizer::{ReconcileOutcome, UnitFieldView, UnitLabelSynchronizer, UnitTypeSource};
pub use view::{CondominioUnitField, SignalUnitFieldView};
