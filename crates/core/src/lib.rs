// crates/core/src/lib.rs
#![no_std]
#![allow(clippy::cargo_common_metadata)]
#![allow(clippy::multiple_crate_versions)]

extern crate alloc;

pub mod block;
pub mod comparator;
pub mod error;
pub mod order;
pub mod priority;
pub mod property;
pub mod stats;

pub use block::{BlockOptions, process};
pub use comparator::{ConcentricComparator, UnknownPlacement};
pub use error::{CoreError, MalformedLine};
pub use priority::{PriorityIndex, PriorityList};
pub use stats::SortStats;
