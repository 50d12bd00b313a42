//! Synthetic record generation.
//!
//! This crate turns a list of field descriptors (a name plus a coarse type such
//! as `string`, `int` or `date`) into rows of plausible fake data. Values come
//! from name heuristics layered over type defaults, with a catalog of semantic
//! generators for well-known string field names.
//!
//! # Quick Start
//!
//! ```rust
//! use synth_data::prelude::*;
//!
//! let builder = RecordBuilder::new();
//! let fields = vec![
//!     FieldDescriptor::new("Full Name", "string"),
//!     FieldDescriptor::new("Age", "int"),
//! ];
//!
//! let records = builder.build(&fields, 2, &mut rand::thread_rng());
//! assert_eq!(records.len(), 2);
//! assert!(records[0]["Age"].is_i64());
//! ```

pub mod builder;
pub mod error;
pub mod schema;
pub mod semantic;
pub mod values;

pub mod prelude {
    //! Convenient re-exports for common usage.

    pub use crate::builder::{DEFAULT_ROWS, RecordBuilder, default_rows};
    pub use crate::error::GenerateError;
    pub use crate::schema::{
        FieldDescriptor, FieldType, GenerationRequest, GenerationResponse, Record,
        normalize_field_name,
    };
    pub use crate::semantic::{Semantic, SemanticCatalog, SemanticValue};
    pub use crate::values::{ValueGenConfig, ValueGenerator};
}
