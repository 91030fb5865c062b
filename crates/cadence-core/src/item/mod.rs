//! Item Module
//!
//! The reviewable item record and its boundary validation.

mod reviewable;

pub use reviewable::ReviewableItem;
