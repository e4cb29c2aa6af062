//! Activity index: normalized activity path → completion record.
//!
//! The index is built lazily from the platform's module list and completion
//! data for a single (course, user) pair:
//! - only visible modules with a view page are included
//! - keys are module URLs normalized with [`crate::url_path::normalize_url_path`]
//! - a later module wins when two normalize to the same path
//!
//! It lives for one request and is owned by [`crate::filter::ActivityFilter`].

mod index;
mod record;

pub use index::{ActivityIndex, IndexKey};
pub use record::{ActivityMap, ActivityRecord};
