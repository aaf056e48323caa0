//! Testing utilities for the data quality crates
//!
//! This crate provides:
//! - Test fixtures for common dataset shapes
//! - A builder for constructing datasets column by column
//! - Proptest strategies for property-based tests
//!
//! # Examples
//!
//! ```
//! use dataquality_testing::{fixtures::*, builders::*};
//!
//! let example = create_example_dataset();
//! assert_eq!(example.row_count(), 2);
//!
//! let custom = DatasetBuilder::new()
//!     .with_ints("id", &[1, 2, 3])
//!     .with_nulls("notes", 3)
//!     .build();
//! assert_eq!(custom.missing_cells(), 3);
//! ```

pub mod builders;
pub mod fixtures;

// Re-export commonly used types
pub use builders::*;
pub use fixtures::*;

// Re-export testing dependencies for convenience
pub use proptest;
