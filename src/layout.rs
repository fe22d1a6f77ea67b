//! Layout module for tracking UI component regions
//!
//! Rendering records where the input field and the suggestion panel were
//! drawn; `region_at()` maps a pointer position back to one of them.

mod layout_regions;

pub use layout_hit_test::{region_at, suggestion_row_at};
pub use layout_regions::{LayoutRegions, Region};
