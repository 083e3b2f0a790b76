//! A two-resistor network finder for circuit design.
//!
//! Given a target resistance, it searches every series and parallel pairing of standard resistor
//! values and presents the pairings closest to the target, each with a construction expression
//! such as `(4700.00||5600.00)`.
//!
//! # Example
//! ```rust
//! extern crate resistor_combo;
//!
//! use resistor_combo::*;
//!
//! fn main() {
//!     let candidates = build_catalog_and_candidates().expect("Error: catalog could not be built");
//!
//!     println!("Number of candidates: {}", candidates.len());
//!
//!     let res = find_nearest(&candidates, 1000.0, DEFAULT_MATCHES)
//!         .expect("Error: no match for this target");
//!
//!     assert_eq!(res.len(), 10);
//!     print!("{}", res);
//! }
//! ```
//!
//! Catalogs other than the default one are described with a [`SeriesConfig`]:
//! ```rust
//! # use resistor_combo::*;
//! let config = SeriesConfig::new(&[1.0, 2.2, 4.7]).decades(1..=4);
//! let candidates = CandidateSet::from_series(&config).unwrap();
//! let best = find_nearest(&candidates, 3300.0, 1).unwrap();
//! assert!(best.best()[0].distance < 100.0);
//! ```

extern crate itertools;
#[macro_use]
extern crate lazy_static;

mod catalog;
mod combination;
mod error;
mod generator;
mod selector;
mod store;
mod target;

pub use catalog::{Catalog, SeriesConfig, BASE_SERIES, DEFAULT_DECADES};
pub use combination::{Combination, Expr, Kind, Network, NodeId};
pub use error::{Error, Result};
pub use generator::{admissible, generate, CandidateSet, MAX_RATIO};
pub use selector::{select_top_k, validate_target, Match, Matches};
pub use store::{next_capacity, RecordStore, MIN_INCREMENT};
pub use target::parse_target;

/// How many matches the command line reports unless told otherwise.
pub const DEFAULT_MATCHES: usize = 10;

/// Builds the default catalog and every admissible pair drawn from it.
pub fn build_catalog_and_candidates() -> Result<CandidateSet> {
    CandidateSet::from_series(&SeriesConfig::default())
}

/// The `k` candidates nearest to `target`, nearest first. Fails if `target` is not a positive
/// finite resistance, or if fewer than `k` candidates exist.
pub fn find_nearest(candidates: &CandidateSet, target: f64, k: usize) -> Result<Matches> {
    select_top_k(candidates, target, k)
}
