//! Shift Board Common Library
//!
//! CLIと将来のWeb版で共有する型と純粋ロジック（I/Oなし）

pub mod calendar;
pub mod error;
pub mod selection;
pub mod storage;
pub mod store;
pub mod title;
pub mod transformer;
pub mod types;
pub mod view;
pub mod weekday;

pub use error::{Error, Result};
pub use selection::{default_day, resolve_selection, restore_employee, Selection};
pub use storage::{MemoryStorage, Storage};
pub use store::ScheduleStore;
pub use title::{sheet_title, PLACEHOLDER_TITLE};
pub use transformer::build_master_map;
pub use types::{Cell, DaySchedule, EntryList, Grid, MasterMap, Row, Value};
pub use view::{select, ViewOutcome};
pub use weekday::Weekday;
