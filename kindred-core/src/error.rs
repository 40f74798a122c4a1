//! Error types for the Kindred core library.
//!
//! Defines the error enum exposed by the public API, its stable error codes
//! and a convenient result alias.

use thiserror::Error;

use crate::{cooccurrence::CountingStrategy, vocabulary::WordId};

/// Generates a stable code enum for an error type together with the
/// `code()` accessor on the error itself.
///
/// Each entry maps a code variant to an error variant pattern (`{ .. }` for
/// struct variants, `(..)` for tuple variants, nothing for unit variants) and
/// its machine-readable string.
///
/// # Examples
/// ```
/// use kindred_core::define_error_codes;
///
/// #[derive(Debug)]
/// pub enum LoadError {
///     Missing { path: String },
///     Io(std::io::Error),
/// }
///
/// define_error_codes! {
///     /// Stable codes for [`LoadError`].
///     enum LoadErrorCode for LoadError {
///         /// Input was absent.
///         Missing => Missing { .. } => "LOAD_MISSING",
///         /// Reading failed.
///         Io => Io(..) => "LOAD_IO",
///     }
/// }
///
/// let err = LoadError::Missing { path: "a.txt".into() };
/// assert_eq!(err.code(), LoadErrorCode::Missing);
/// assert_eq!(err.code().to_string(), "LOAD_MISSING");
/// ```
#[macro_export]
macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident
                    $( ( $($tuple:tt)* ) )?
                    $( { $($fields:tt)* } )?
                    => $code:expr
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
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl ::core::fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            #[must_use]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(
                        Self::$ErrVariant $( ( $($tuple)* ) )? $( { $($fields)* } )?
                            => $CodeTy::$CodeVariant,
                    )+
                }
            }
        }
    };
}

/// Error type produced when building or running [`crate::Kindred`].
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum KindredError {
    /// A word id was looked up before it was registered with the forest or
    /// snapshot. This is an internal invariant violation.
    #[error("word id {id} is not registered ({registered} words known)")]
    UnknownWord {
        /// The offending identifier.
        id: WordId,
        /// Number of identifiers known at the time of the lookup.
        registered: usize,
    },
    /// The vocabulary grew beyond the identifier space.
    #[error("vocabulary of {words} distinct words exceeds the identifier space")]
    VocabularyOverflow {
        /// Number of distinct words seen when interning failed.
        words: usize,
    },
    /// The requested counting strategy is not compiled into this build.
    #[error("the requested counting strategy {requested:?} is not available in this build")]
    StrategyUnavailable {
        /// Strategy that could not be satisfied.
        requested: CountingStrategy,
    },
}

define_error_codes! {
    /// Stable codes describing [`KindredError`] variants.
    enum KindredErrorCode for KindredError {
        /// A word id was looked up before registration.
        UnknownWord => UnknownWord { .. } => "KINDRED_UNKNOWN_WORD",
        /// The vocabulary grew beyond the identifier space.
        VocabularyOverflow => VocabularyOverflow { .. } => "KINDRED_VOCABULARY_OVERFLOW",
        /// The requested counting strategy is unavailable.
        StrategyUnavailable => StrategyUnavailable { .. } => "KINDRED_STRATEGY_UNAVAILABLE",
    }
}

/// Convenient alias for results returned by the core API.
pub type Result<T> = core::result::Result<T, KindredError>;
