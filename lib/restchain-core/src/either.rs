//! Two-way result carried as a value.

use serde::{Deserialize, Serialize};

use crate::{Error, RestBusinessError, RestException, Result};

/// Either a business error (`Left`) or a success value (`Right`).
///
/// Unlike [`Result`], a `Left` is an expected outcome of a call and does not
/// abort the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Either<L, R> {
    /// Business error.
    Left(L),
    /// Success value.
    Right(R),
}

impl<L, R> Either<L, R> {
    /// Is a business error.
    #[must_use]
    pub const fn is_left(&self) -> bool {
        matches!(self, Self::Left(_))
    }

    /// Is a success value.
    #[must_use]
    pub const fn is_right(&self) -> bool {
        matches!(self, Self::Right(_))
    }

    /// The business error, if any.
    #[must_use]
    pub fn left(self) -> Option<L> {
        match self {
            Self::Left(left) => Some(left),
            Self::Right(_) => None,
        }
    }

    /// The success value, if any.
    #[must_use]
    pub fn right(self) -> Option<R> {
        match self {
            Self::Left(_) => None,
            Self::Right(right) => Some(right),
        }
    }

    /// Borrow both sides.
    #[must_use]
    pub const fn as_ref(&self) -> Either<&L, &R> {
        match self {
            Self::Left(left) => Either::Left(left),
            Self::Right(right) => Either::Right(right),
        }
    }

    /// Convert into a [`std::result::Result`], `Left` becoming `Err`.
    ///
    /// # Errors
    ///
    /// Returns the left value.
    pub fn into_result(self) -> std::result::Result<R, L> {
        match self {
            Self::Left(left) => Err(left),
            Self::Right(right) => Ok(right),
        }
    }
}

impl<R> Either<RestBusinessError, R> {
    /// Raise a business error as [`Error::Rest`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::Rest`] if this is a `Left`.
    pub fn into_rest_result(self) -> Result<R> {
        self.into_result()
            .map_err(|error| Error::Rest(RestException::from(error)))
    }
}
