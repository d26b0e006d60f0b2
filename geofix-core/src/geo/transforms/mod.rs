//! Transform pipeline infrastructure
//!
//! Every normalization step after artifact relocation is a stage implementing
//! [`Runnable`]. Stages are chained into a [`Transform`] with `.then()`, and the
//! compiler checks that each stage's input matches the previous stage's output:
//!
//! ```rust,ignore
//! let pipeline = Transform::from_fn(Ok)
//!     .then(StripBlankLines::new())      // Script -> Script
//!     .then(FilterExcluded::new())       // Script -> Script
//!     .then(KeywordSubstitution::new(base)) // Script -> Substituted
//!     .then(InjectBlock::new());         // Substituted -> Script
//! ```
//!
//! # Module Organization
//!
//! - [`stages`]: the individual stages (blank lines, filtering, substitution, injection)
//! - [`standard`]: pre-built chains used by the normalizer and the CLI

pub mod stages;
pub mod standard;

/// Error that can occur during transformation
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransformError {
    /// No line carried the wall-group placeholder, so the refinement field has no
    /// surface list to reference.
    #[error("no line contains the wall-group token '{trigger}'; refinement field surface list is unresolved")]
    UnresolvedFieldList { trigger: String },
}

/// Trait for anything that can transform an input to an output
///
/// This is implemented by individual transformation stages.
/// The `Transform` struct composes multiple `Runnable` implementations.
pub trait Runnable<I, O> {
    /// Execute this transformation on the input
    fn run(&self, input: I) -> Result<O, TransformError>;
}

/// A composable transformation pipeline
///
/// `Transform<I, O>` represents a transformation from type `I` to type `O`.
pub struct Transform<I, O> {
    run_fn: Box<dyn Fn(I) -> Result<O, TransformError> + Send + Sync>,
}

impl<I, O> Transform<I, O> {
    /// Create a transform from a function
    pub fn from_fn<F>(f: F) -> Self
    where
        F: Fn(I) -> Result<O, TransformError> + Send + Sync + 'static,
    {
        Transform {
            run_fn: Box::new(f),
        }
    }

    /// Add a stage to this transform, returning a new transform with extended output type
    pub fn then<O2, S>(self, stage: S) -> Transform<I, O2>
    where
        S: Runnable<O, O2> + Send + Sync + 'static,
        I: 'static,
        O: 'static,
        O2: 'static,
    {
        let prev_run = self.run_fn;
        Transform {
            run_fn: Box::new(move |input| {
                let intermediate = prev_run(input)?;
                stage.run(intermediate)
            }),
        }
    }

    /// Chain a pre-built static transform after this one
    pub fn then_transform<O2>(self, next: &'static Transform<O, O2>) -> Transform<I, O2>
    where
        I: 'static,
        O: 'static,
        O2: 'static,
    {
        let prev_run = self.run_fn;
        Transform {
            run_fn: Box::new(move |input| {
                let intermediate = prev_run(input)?;
                next.run(intermediate)
            }),
        }
    }

    /// Execute this transform on the given input
    pub fn run(&self, input: I) -> Result<O, TransformError> {
        (self.run_fn)(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Double;
    impl Runnable<i32, i32> for Double {
        fn run(&self, input: i32) -> Result<i32, TransformError> {
            Ok(input * 2)
        }
    }

    struct Describe;
    impl Runnable<i32, String> for Describe {
        fn run(&self, input: i32) -> Result<String, TransformError> {
            Ok(format!("n={input}"))
        }
    }

    struct Unresolved;
    impl Runnable<i32, i32> for Unresolved {
        fn run(&self, _input: i32) -> Result<i32, TransformError> {
            Err(TransformError::UnresolvedFieldList {
                trigger: "mg_wall".to_string(),
            })
        }
    }

    #[test]
    fn test_stages_chain_in_order() {
        let transform = Transform::from_fn(|x: i32| Ok(x + 1))
            .then(Double)
            .then(Describe);
        assert_eq!(transform.run(4).unwrap(), "n=10");
    }

    #[test]
    fn test_error_short_circuits_later_stages() {
        let transform = Transform::from_fn(|x: i32| Ok(x))
            .then(Unresolved)
            .then(Describe);
        assert_eq!(
            transform.run(1).unwrap_err(),
            TransformError::UnresolvedFieldList {
                trigger: "mg_wall".to_string()
            }
        );
    }

    #[test]
    fn test_error_display_names_trigger() {
        let err = TransformError::UnresolvedFieldList {
            trigger: "mg_wall".to_string(),
        };
        assert!(err.to_string().contains("'mg_wall'"));
    }
}
