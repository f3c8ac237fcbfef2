// model = "claude-opus-4-5"
// created = "2026-10-19"
// modified = "2026-10-19"
// driver = "Isaac Clayton"

//! Skipset - an in-memory sorted set backed by a skip list.
//!
//! # Quick Start
//!
//! ```
//! use skipset::SetError;
//! use skipset::SkipSet;
//!
//! let mut set = SkipSet::new();
//! for value in [5, 3, 8, 1] {
//!     set.insert(value);
//! }
//! assert_eq!(set.iter().copied().collect::<Vec<_>>(), vec![1, 3, 5, 8]);
//! assert_eq!(set.first(), Ok(&1));
//! assert_eq!(set.last(), Ok(&8));
//!
//! // Duplicates are refused without fuss.
//! assert!(!set.insert(5));
//!
//! set.remove(&3);
//! assert!(!set.contains(&3));
//!
//! set.clear();
//! assert_eq!(set.first(), Err(SetError::EmptyCollection));
//! ```
//!
//! # Modules
//!
//! - `skip_set`: the engine (search, insert, remove, boundaries, rebalance)
//! - `level`: tower height generation and construction config
//! - `iter`: borrowing and owning ordered iterators
//! - `collection`: bulk operations and standard trait impls
//! - `profiling`: process-wide hot path counters
//!
//! Sets are single-threaded structures with no internal locking.

pub mod collection;
pub mod error;
pub mod iter;
pub mod level;
pub mod profiling;
pub mod skip_set;

pub use error::SetError;
pub use iter::IntoIter;
pub use iter::Iter;
pub use level::Config;
pub use level::MAX_LEVEL;
pub use skip_set::SkipSet;
