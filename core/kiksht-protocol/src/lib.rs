#![no_std] // Shared by every layer, host adapters included

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

pub mod ids;
pub mod model;

pub use ids::EntryId;
pub use model::*;
