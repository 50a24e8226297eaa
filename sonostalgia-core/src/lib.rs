//! Turns a collection of memories into the statistics and groupings that
//! sonostalgia's pages are rendered from.
//!
//! Everything here is pure: memories come in already loaded, views go out as
//! plain data borrowing from them.
pub mod aggregate;
pub mod date;
pub mod view;

pub use aggregate::{Aggregate, EARLIEST_YEAR_SENTINEL};
pub use date::{YearToken, parse_date_expression};
pub use view::{Page, Pages, RECENT_MEMORY_COUNT, assemble};

pub use sonostalgia_state;
