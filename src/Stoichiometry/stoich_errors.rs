use thiserror::Error;

/// Programmer errors of the quantity model: a reaction or a guess was built or
/// edited in a way that breaks its structural invariants.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoichiometryError {
    #[error("reaction '{reaction}' needs at least 2 reactants, got {found}")]
    TooFewReactants { reaction: String, found: usize },
    #[error("reaction '{reaction}' needs at least 1 product")]
    NoProducts { reaction: String },
    #[error("symbol '{symbol}' occurs more than once among the {list}")]
    DuplicateSymbol { symbol: String, list: &'static str },
    #[error("{list} index {index} is out of range (length {len})")]
    IndexOutOfRange {
        list: &'static str,
        index: usize,
        len: usize,
    },
    #[error("guess has {guess} {list}, reaction has {reaction}")]
    LengthMismatch {
        list: &'static str,
        guess: usize,
        reaction: usize,
    },
    #[error("coefficients of reaction '{0}' are fixed")]
    CoefficientLocked(String),
    #[error("cannot parse equation '{equation}': {reason}")]
    Parse { equation: String, reason: String },
    #[error("unknown recipe '{0}'")]
    UnknownRecipe(String),
}

/// checks that `index` addresses an element of a list of length `len`
pub(crate) fn check_index(list: &'static str, index: usize, len: usize) -> Result<(), StoichiometryError> {
    if index < len {
        Ok(())
    } else {
        Err(StoichiometryError::IndexOutOfRange { list, index, len })
    }
}
