//! # record-utils
//!
//! Higher-order collection utilities over field-mapped records.
//!
//! A [`Record`] is an immutable mapping from field name to string value
//! (one student, one employee). A [`Collection`] is an ordered sequence of
//! records, and carries a small set of higher-order operations modeled on
//! the classic functional-utility libraries:
//!
//! - **Iteration**: `each`
//! - **Tests**: `all`, `any`
//! - **Search**: `contains`, `index_of`
//! - **Transformation**: `filter`, `reject`, `pluck`
//!
//! Callers never write index-based loops: the operations take plain
//! closures (predicates and extractors) and do the stepping themselves.
//! Every operation is non-mutating and total; "not found" and empty
//! collections are ordinary results, not errors.
//!
//! ## Example
//!
//! ```
//! use record_utils::{Collection, Record};
//!
//! let roster: Collection = [
//!     "first=Obi-Wan, last=Kenobi, age=55, class=Math",
//!     "first=Mace, last=Windu, age=56, class=Science",
//!     "first=Han, last=Solo, age=35, class=Science",
//!     "first=Chew, last=Bacca, age=33, class=Science",
//! ]
//! .iter()
//! .map(|line| Record::parse(line))
//! .collect::<Result<_, _>>()?;
//!
//! let science = roster.filter(|r| r.field("class") == "Science");
//! let lasts = science.pluck(|r| r.field("last").to_string());
//! assert_eq!(lasts, vec!["Windu", "Solo", "Bacca"]);
//!
//! assert!(roster.any(|r| r.field("class") == "Math"));
//! assert_eq!(roster.index_of(science.get(0).unwrap()), Some(1));
//! # Ok::<(), record_utils::RecordError>(())
//! ```

pub mod collection;
pub mod error;
pub mod record;

pub use collection::Collection;
pub use error::RecordError;
pub use record::Record;
