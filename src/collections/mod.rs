//! Collections of records
//!
//! [`StructureCollection`] wraps an ordered sequence of [`Record`](crate::models::Record)
//! values and offers functional, non-mutating transforms over it:
//!
//! - **Append** - `with_new_one_item`, `with_many_new_items`, `with_many_new_rows`
//! - **Narrow** - `filtered_by`, `without_objects_like`
//! - **Transform** - `map`, `reworked_by`, `sorted_by`
//! - **Guard** - `get_first_asserted`, `get_last_asserted`, `assert_count`
//!
//! ## Example
//!
//! ```
//! use structure_sdk::{Structure, StructureCollection};
//!
//! let people = StructureCollection::new(
//!     ["Valerua", "Jones", "Valerua"].map(|name| Structure::new([("name", name)]).unwrap()),
//! );
//! let template = Structure::new([("name", "Valerua")])?;
//!
//! let deduped = people.without_objects_like(&template, 1);
//! assert_eq!(deduped.count(), 2);
//! assert_eq!(people.count(), 3);
//! # Ok::<(), structure_sdk::ValidationError>(())
//! ```

mod error;
mod structure_collection;

pub use error::{CollectionError, CollectionResult};
pub use structure_collection::StructureCollection;
