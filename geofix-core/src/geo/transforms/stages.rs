//! Individual transformation stages
//!
//! Each stage implements the `Runnable` trait and runs in the order listed here.

pub mod blank_lines;
pub mod filtering;
pub mod injection;
pub mod substitution;

pub use blank_lines::StripBlankLines;
pub use filtering::FilterExcluded;
pub use injection::{InjectBlock, Normalized};
pub use substitution::{KeywordSubstitution, Substituted};
