//! Prelude module for `nightmap_internal`.
//!
//! This module provides a convenient way to import commonly used types and traits.
//!
//! # Examples
//!
//! ```rust
//! use nightmap_internal::prelude::*;
//!
//! let coords: CoordinateTable = [(1160, Point::new(10.0, 20.0))].into_iter().collect();
//! let names: NameLookup = [(49410, "Church")].into_iter().collect();
//! let tables = MapTables::new(coords, names, &[]);
//!
//! let cavern = tables.coords.resolve(1160, rules::CAVERN_CATEGORY);
//! assert!(cavern.is_some());
//! ```

// Re-export everything from both preludes
#[doc(inline)]
pub use nightmap_render::prelude::*;
#[doc(inline)]
pub use nightmap_types::prelude::*;

// Re-export the member crates for advanced usage
#[doc(inline)]
pub use nightmap_render;
#[doc(inline)]
pub use nightmap_types;
