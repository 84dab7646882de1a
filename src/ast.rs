//! # Hyperchunk Selectors - Abstract Syntax Tree
//!
//! This module defines the Abstract Syntax Tree (AST) for hyperchunk
//! selectors, a compact textual language for addressing sub-regions of
//! large, chunked, multi-dimensional, multi-attribute arrays.
//!
//! ## Architecture Overview
//!
//! The AST module is organized into focused submodules:
//!
//! - **[literals]** - Numbers, strings and attribute indices
//! - **[operators]** - Comparison and logical operators
//! - **[selectors]** - Dimension selectors (`0:5`, `...`, `2`) and hyperslices
//! - **[expressions]** - Comparisons, logical expressions, function calls
//! - **[hyperchunk]** - One selector clause and the `;`-separated sequence
//!
//! ## Quick Start
//!
//! ```text
//! 0:5/a0 >= 3.5 and a1 < 2/order:top(a0, 5)/0:2,1:3
//! ```
//!
//! This selects arrays 0 through 4, filters rows where attribute 0 is at
//! least 3.5 and attribute 1 is below 2, orders them with `top(a0, 5)` and
//! extracts the `[0:2, 1:3]` hyperslice from each chunk.
//!
//! ## Core Concepts
//!
//! ### Sections
//!
//! A hyperchunk is made of up to four `/`-separated sections, strictly
//! nested:
//!
//! ```text
//! arrays / attributes / order:function(...) / hyperslices
//! ```
//!
//! Only `arrays` is mandatory. A missing section is `None` in the AST and
//! means "no restriction" to the consumer.
//!
//! ### Alternatives and Dimensions
//!
//! - `|` separates alternatives within a section (`0|2|4:8`)
//! - `,` separates dimensions within a hyperslice (`0:2,...`)
//! - `;` separates hyperchunks (`0/a0;1/a1`)
//!
//! ### Unresolved Bounds
//!
//! Slices keep empty bounds as `None`. Resolving them against a concrete
//! array shape is left to the consumer.
pub mod expressions;
pub mod hyperchunk;
pub mod literals;
pub mod operators;
pub mod selectors;

pub use expressions::{Argument, AttributeExpr, Comparison, FunctionCall, LogicalExpr};
pub use hyperchunk::{Hyperchunk, Hyperchunks};
pub use literals::{AttributeIndex, Literal, Number};
pub use operators::{Comparator, LogicalOp};
pub use selectors::{DimensionSelector, Hyperslice, Slice};
