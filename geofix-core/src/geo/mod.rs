//! Normalization of generated `.geo` scripts

pub mod error;
pub mod extraction;
pub mod normalizer;
pub mod relocation;
pub mod report;
pub mod rules;
pub mod script;
pub mod transforms;
