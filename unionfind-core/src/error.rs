//! Error types for the union-find core library.
//!
//! Defines the error enum raised by fallible construction and the validating
//! wrapper, plus a convenient result alias.

use std::fmt;

use thiserror::Error;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// An error produced by fallible construction or [`crate::CheckedDisjointSet`]
/// operations.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum DisjointSetError {
    /// Element id fell outside `[0, len)`.
    #[error("element {index} is out of range for a universe of {len} elements")]
    IndexOutOfRange {
        /// The rejected element id.
        index: i64,
        /// Number of elements in the universe.
        len: usize,
    },
    /// Requested universe size was negative.
    #[error("universe size must be a non-negative index count (got {len})")]
    NegativeLength {
        /// The rejected universe size.
        len: i64,
    },
    /// The forest for the requested universe size could not be allocated.
    #[error("cannot allocate a universe of {len} elements")]
    LengthTooLarge {
        /// The rejected universe size.
        len: usize,
    },
}

define_error_codes! {
    /// Stable codes describing [`DisjointSetError`] variants.
    enum DisjointSetErrorCode for DisjointSetError {
        /// Element id fell outside `[0, len)`.
        IndexOutOfRange => IndexOutOfRange { .. } => "DISJOINT_SET_INDEX_OUT_OF_RANGE",
        /// Requested universe size was negative.
        NegativeLength => NegativeLength { .. } => "DISJOINT_SET_NEGATIVE_LENGTH",
        /// The forest for the requested universe size could not be allocated.
        LengthTooLarge => LengthTooLarge { .. } => "DISJOINT_SET_LENGTH_TOO_LARGE",
    }
}

/// Convenient alias for results returned by the checked API.
pub type Result<T> = core::result::Result<T, DisjointSetError>;
