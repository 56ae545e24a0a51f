use thiserror::Error;

use crate::{ConjugationClass, Dialect, Width};

/// An error while conjugating a verb.
///
/// Conjugation is deterministic, so none of these are retryable; they signal bad
/// verb data or a table slice that isn't populated.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConjugationError {
    /// Irregular verbs have no ending tables.
    #[error("irregular verbs are not supported")]
    IrregularUnsupported,
    /// No endings are populated for the requested class, width, and dialect.
    #[error("no {class} {width} endings for the {dialect} dialect")]
    MissingEndings {
        class: ConjugationClass,
        width: Width,
        dialect: Dialect,
    },
    /// The verb record has no future root to build stems from.
    #[error("verb \"{verb}\" has no future root")]
    MissingFutureRoot { verb: String },
}
