// SRT - srt-error
// Module: Error Set Macros
// SW-REQ-ID: REQ_ERROR_003
//
// Copyright (c) 2025 The SRT Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Macros for declaring per-operation error sets

/// Declare the ordered set of error kinds an operation can fail with.
///
/// Generates an enum with one tuple variant per kind, in declaration order,
/// together with [`ErrorSet`](crate::ErrorSet), [`ErrorSource`](crate::ErrorSource),
/// `Display`, `From<Kind>` for every kind (so `?` lifts a single kind into
/// the set) and `From<Set>` for [`Error`](crate::Error).
///
/// # Examples
///
/// ```
/// use srt_error::{declare_errors, ErrorSet, OverflowError, AllocError};
///
/// declare_errors! {
///     /// Failure modes of building a string
///     pub enum BuildError {
///         Overflow(OverflowError),
///         Alloc(AllocError),
///     }
/// }
///
/// let e: BuildError = OverflowError::new("too long").into();
/// assert_eq!(e.ordinal(), 1);
/// assert_eq!(BuildError::DECLARED, &["OverflowError", "AllocError"]);
/// ```
#[macro_export]
macro_rules! declare_errors {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $($variant:ident($kind:ident)),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq)]
        $vis enum $name {
            $(
                #[doc = concat!("`", stringify!($kind), "` occurred")]
                $variant($kind),
            )+
        }

        impl $crate::ErrorSet for $name {
            const DECLARED: &'static [&'static str] = &[$(stringify!($kind)),+];

            fn ordinal(&self) -> u8 {
                let variant = match self {
                    $(Self::$variant(_) => stringify!($variant),)+
                };
                [$(stringify!($variant)),+]
                    .iter()
                    .position(|v| *v == variant)
                    .map_or(0, |p| (p + 1) as u8)
            }
        }

        impl $crate::ErrorSource for $name {
            fn code(&self) -> u16 {
                match self {
                    $(Self::$variant(e) => $crate::ErrorSource::code(e),)+
                }
            }

            fn message(&self) -> &str {
                match self {
                    $(Self::$variant(e) => $crate::ErrorSource::message(e),)+
                }
            }

            fn category(&self) -> $crate::ErrorCategory {
                match self {
                    $(Self::$variant(e) => $crate::ErrorSource::category(e),)+
                }
            }

            fn kind_name(&self) -> &'static str {
                match self {
                    $(Self::$variant(e) => $crate::ErrorSource::kind_name(e),)+
                }
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                match self {
                    $(Self::$variant(e) => ::core::fmt::Display::fmt(e, f),)+
                }
            }
        }

        $(
            impl From<$kind> for $name {
                fn from(e: $kind) -> Self {
                    Self::$variant(e)
                }
            }
        )+

        impl From<$name> for $crate::Error {
            fn from(e: $name) -> Self {
                match e {
                    $($name::$variant(inner) => $crate::Error::from(inner),)+
                }
            }
        }

        impl ::core::error::Error for $name {}
    };
}
