// Multitax Types - Core Library
// Closed set of tax-category labels, their lookup surface, and the
// enum-sealing codemod that produces such label sets

pub mod registry;
pub mod tax_type;
pub mod transform;

// Re-export commonly used types
pub use registry::TaxTypeRegistry;
pub use tax_type::{ParseTaxTypeError, TaxType};
pub use transform::{rewrite_enums, rewrite_file, rewrite_tree, RewriteOutcome, RewriteReport};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
