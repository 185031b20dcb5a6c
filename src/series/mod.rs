//! Change-event series: scheduled balance and rate changes for a note

mod event;
mod change_series;
pub mod loader;

pub use event::{ChangeEvent, ChangeRow, SeriesKind};
pub use change_series::ChangeSeries;
pub use loader::{load_change_rows, load_change_rows_from_reader, load_series};
