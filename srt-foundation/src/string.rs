// SRT - srt-foundation
// Module: Runtime Strings
// SW-REQ-ID: REQ_STR_001
//
// Copyright (c) 2025 The SRT Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Immutable length-prefixed byte strings.
//!
//! A [`Str`] either borrows a `'static` literal, which is never released, or
//! owns a provider-accounted buffer, which is released exactly once when the
//! string is dropped. Contents never change; every transform returns a new
//! owned string allocated through the source string's provider.
//!
//! Lengths and offsets are `i64` to match the rest of the runtime. Searching
//! is a naive left-to-right scan and an empty needle is never found.

use core::fmt;

use srt_error::{declare_errors, AllocError, ConversionError, IndexOutOfBoundsError, OverflowError};
use srt_math::{i64_add, i64_eq, i64_gt, i64_lt, i64_lteq, i64_mul, i64_neg, i64_sub, u8_eq};
use srt_panic::fatal;

use crate::{
    array::Array,
    buffer::{signed_len, Buffer},
    element::Element,
    provider::{HeapProvider, MemoryProvider},
};

declare_errors! {
    /// Failure modes of [`Str::get_substr`]
    pub enum SubstrError {
        IndexOutOfBounds(IndexOutOfBoundsError),
        Alloc(AllocError),
    }
}

declare_errors! {
    /// Failure modes of [`Str::format`]
    pub enum FormatError {
        Overflow(OverflowError),
        IndexOutOfBounds(IndexOutOfBoundsError),
        Alloc(AllocError),
    }
}

enum Repr<P: MemoryProvider> {
    Static { bytes: &'static [u8], provider: P },
    Owned(Buffer<u8, P>),
}

/// Immutable byte string allocated through `P`.
pub struct Str<P: MemoryProvider = HeapProvider> {
    repr: Repr<P>,
}

impl Str<HeapProvider> {
    /// Borrow a string literal
    #[must_use]
    pub const fn from_static(text: &'static str) -> Self {
        Self { repr: Repr::Static { bytes: text.as_bytes(), provider: HeapProvider } }
    }

    /// Copy `bytes` into a new heap string.
    ///
    /// # Errors
    ///
    /// Returns [`AllocError`] if the buffer cannot be allocated.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, AllocError> {
        Self::from_bytes_in(bytes, HeapProvider)
    }

    /// Decimal text of `value`.
    ///
    /// # Errors
    ///
    /// Returns [`AllocError`] if the buffer cannot be allocated.
    pub fn from_i64(value: i64) -> Result<Self, AllocError> {
        Self::from_i64_in(value, HeapProvider)
    }

    /// One-byte string holding `byte`.
    ///
    /// # Errors
    ///
    /// Returns [`AllocError`] if the buffer cannot be allocated.
    pub fn from_byte(byte: u8) -> Result<Self, AllocError> {
        Self::from_byte_in(byte, HeapProvider)
    }
}

impl<P: MemoryProvider> Str<P> {
    /// Borrow a string literal, allocating later transforms through `provider`
    #[must_use]
    pub fn from_static_in(text: &'static str, provider: P) -> Self {
        Self { repr: Repr::Static { bytes: text.as_bytes(), provider } }
    }

    /// Copy `bytes` into a new string owned through `provider`.
    ///
    /// # Errors
    ///
    /// Returns [`AllocError`] if the provider refuses the buffer.
    pub fn from_bytes_in(bytes: &[u8], provider: P) -> Result<Self, AllocError> {
        let mut buffer = Buffer::with_slots(provider, bytes.len(), 1)?;
        buffer.copy_from(bytes);
        Ok(Self::owned(buffer))
    }

    /// Decimal text of `value`, owned through `provider`.
    ///
    /// # Errors
    ///
    /// Returns [`AllocError`] if the provider refuses the buffer.
    pub fn from_i64_in(value: i64, provider: P) -> Result<Self, AllocError> {
        Self::from_bytes_in(value.to_string().as_bytes(), provider)
    }

    /// One-byte string holding `byte`, owned through `provider`.
    ///
    /// # Errors
    ///
    /// Returns [`AllocError`] if the provider refuses the buffer.
    pub fn from_byte_in(byte: u8, provider: P) -> Result<Self, AllocError> {
        Self::from_bytes_in(&[byte], provider)
    }

    fn owned(buffer: Buffer<u8, P>) -> Self {
        Self { repr: Repr::Owned(buffer) }
    }

    fn provider(&self) -> &P {
        match &self.repr {
            Repr::Static { provider, .. } => provider,
            Repr::Owned(buffer) => buffer.provider(),
        }
    }

    /// Raw contents
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        match &self.repr {
            Repr::Static { bytes, .. } => bytes,
            Repr::Owned(buffer) => buffer.as_slice(),
        }
    }

    /// Length in bytes
    #[must_use]
    pub fn len(&self) -> i64 {
        signed_len(self.as_bytes().len())
    }

    /// Whether the string has no bytes
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.as_bytes().is_empty()
    }

    /// Whether this string owns its buffer (as opposed to borrowing a literal)
    #[must_use]
    pub fn is_owned(&self) -> bool {
        matches!(self.repr, Repr::Owned(_))
    }

    /// Whether `needle` occurs in this string. An empty needle never does.
    #[must_use]
    pub fn contains<Q: MemoryProvider>(&self, needle: &Str<Q>) -> bool {
        find_bytes(self.as_bytes(), needle.as_bytes()).is_some()
    }

    /// Offset of the first occurrence of `needle`, or `-1`.
    ///
    /// An empty needle reports `-1`.
    #[must_use]
    pub fn find<Q: MemoryProvider>(&self, needle: &Str<Q>) -> i64 {
        find_bytes(self.as_bytes(), needle.as_bytes()).map_or(-1, signed_len)
    }

    /// Copy of the bytes in `start..end`.
    ///
    /// The checks run in a fixed order and the first failing one is
    /// reported: `start >= 0`, `end >= 0`, `start <= end`, `end <= len`, and
    /// finally `start != end`, since an empty range is an error rather than
    /// an empty string.
    ///
    /// # Errors
    ///
    /// Returns [`SubstrError::IndexOutOfBounds`] for an invalid range and
    /// [`SubstrError::Alloc`] if the copy cannot be allocated.
    pub fn get_substr(&self, start: i64, end: i64) -> Result<Self, SubstrError> {
        let len = self.len();
        if i64_lt(start, 0) {
            return Err(out_of_bounds(format!("substring start {start} is negative")));
        }
        if i64_lt(end, 0) {
            return Err(out_of_bounds(format!("substring end {end} is negative")));
        }
        if i64_gt(start, end) {
            return Err(out_of_bounds(format!("substring start {start} is greater than end {end}")));
        }
        if i64_gt(end, len) {
            return Err(out_of_bounds(format!("substring end {end} exceeds length {len}")));
        }
        if i64_eq(start, end) {
            return Err(out_of_bounds(format!("substring range {start}..{end} is empty")));
        }

        let window = usize::try_from(start)
            .ok()
            .zip(usize::try_from(end).ok())
            .and_then(|(from, to)| self.as_bytes().get(from..to))
            .ok_or_else(|| out_of_bounds(format!("substring range {start}..{end} is not addressable")))?;

        Ok(Self::from_bytes_in(window, self.provider().clone())?)
    }

    /// `self` followed by `other`.
    ///
    /// Unlike [`format`](Self::format), a length overflow or allocation
    /// failure here is not recoverable and enters the panic path.
    #[track_caller]
    #[must_use]
    pub fn concat<Q: MemoryProvider>(&self, other: &Str<Q>) -> Self {
        let total = match i64_add(self.len(), other.len()) {
            Ok(total) => total,
            Err(err) => fatal(&["concat: ", err.message()]),
        };
        let Ok(bytes) = usize::try_from(total) else {
            fatal(&["concat: negative length ", &total.to_string()]);
        };
        let mut buffer = match Buffer::with_slots(self.provider().clone(), bytes, 1) {
            Ok(buffer) => buffer,
            Err(err) => fatal(&["concat: ", err.message()]),
        };

        buffer.copy_from(self.as_bytes());
        buffer.copy_from(other.as_bytes());
        Self::owned(buffer)
    }

    /// `prefix` followed by every element of `args`, in order.
    ///
    /// The total length is computed up front with checked addition and the
    /// result is allocated once.
    ///
    /// # Errors
    ///
    /// Returns [`FormatError::Overflow`] naming the argument whose length
    /// overflowed the total, [`FormatError::IndexOutOfBounds`] if an
    /// argument cannot be read, and [`FormatError::Alloc`] if the result
    /// cannot be allocated.
    pub fn format<Q, R>(prefix: &Self, args: &Array<Str<Q>, R>) -> Result<Self, FormatError>
    where
        Q: MemoryProvider,
        R: MemoryProvider,
    {
        let mut total = prefix.len();
        for index in 0..args.len() {
            let arg = args.get(index)?;
            total = i64_add(total, arg.len()).map_err(|err| {
                OverflowError::new(format!(
                    "formatted length overflows at argument {index}: {}",
                    err.message()
                ))
            })?;
        }

        let bytes = usize::try_from(total)
            .map_err(|_| OverflowError::new(format!("formatted length {total} is not addressable")))?;
        let mut buffer = Buffer::with_slots(prefix.provider().clone(), bytes, 1)?;
        buffer.copy_from(prefix.as_bytes());
        for arg in args {
            buffer.copy_from(arg.as_bytes());
        }

        tracing::trace!(args = args.len(), bytes, "string formatted");
        Ok(Self::owned(buffer))
    }

    /// Replace up to `n` leftmost non-overlapping occurrences of `from`
    /// with `to`.
    ///
    /// Matches are located on borrowed slices of the source and the result
    /// is allocated once, so the only buffer charged to the provider is the
    /// result itself. When nothing is replaced (`n <= 0`, an empty `from`, or
    /// no match) the result is still a fresh owned copy.
    ///
    /// # Errors
    ///
    /// Returns [`AllocError`] if the result cannot be allocated.
    pub fn replacen<Q, R>(&self, from: &Str<Q>, to: &Str<R>, n: i64) -> Result<Self, AllocError>
    where
        Q: MemoryProvider,
        R: MemoryProvider,
    {
        let bytes = self.as_bytes();
        let needle = from.as_bytes();
        let replacement = to.as_bytes();

        let count = leftmost_matches(bytes, needle, n).count();
        if count == 0 {
            return self.try_clone();
        }

        // Matches never overlap, so the removed bytes fit in the source.
        let kept = bytes.len() - count * needle.len();
        let total = count
            .checked_mul(replacement.len())
            .and_then(|added| kept.checked_add(added))
            .ok_or_else(|| AllocError::new("replacement length overflows the address space"))?;

        let mut buffer = Buffer::with_slots(self.provider().clone(), total, 1)?;
        let mut copied = 0;
        for at in leftmost_matches(bytes, needle, n) {
            buffer.copy_from(&bytes[copied..at]);
            buffer.copy_from(replacement);
            copied = at + needle.len();
        }
        buffer.copy_from(&bytes[copied..]);

        tracing::trace!(replaced = count, bytes = total, "string replaced");
        Ok(Self::owned(buffer))
    }

    /// Owned copy of this string, in a new allocation.
    ///
    /// # Errors
    ///
    /// Returns [`AllocError`] if the provider refuses the buffer.
    pub fn try_clone(&self) -> Result<Self, AllocError> {
        Self::from_bytes_in(self.as_bytes(), self.provider().clone())
    }

    /// Parse decimal text with an optional sign.
    ///
    /// # Errors
    ///
    /// Returns [`ConversionError`] for empty or non-digit text and for values
    /// outside the `i64` range.
    pub fn to_i64(&self) -> Result<i64, ConversionError> {
        let (negative, digits) = match self.as_bytes() {
            [b'-', rest @ ..] => (true, rest),
            [b'+', rest @ ..] => (false, rest),
            all => (false, all),
        };
        if digits.is_empty() {
            return Err(ConversionError::new(format!("'{self}' is not an integer")));
        }

        let out_of_range = || ConversionError::new(format!("'{self}' is out of range for i64"));
        // Accumulate towards negative so i64::MIN parses without overflow.
        let mut acc: i64 = 0;
        for &byte in digits {
            if !byte.is_ascii_digit() {
                return Err(ConversionError::new(format!(
                    "'{self}' is not an integer: unexpected byte {byte:#04x}"
                )));
            }
            let digit = i64::from(byte - b'0');
            acc = i64_mul(acc, 10).and_then(|shifted| i64_sub(shifted, digit)).map_err(|_| out_of_range())?;
        }

        if negative { Ok(acc) } else { i64_neg(acc).map_err(|_| out_of_range()) }
    }

    /// Release the string's buffer, if it owns one
    pub fn delete(self) {
        tracing::trace!(owned = self.is_owned(), len = self.as_bytes().len(), "string deleted");
    }
}

fn out_of_bounds(message: String) -> SubstrError {
    IndexOutOfBoundsError::new(message).into()
}

/// Byte-wise equality, comparing lengths first and then scanning low to high
fn bytes_eq(a: &[u8], b: &[u8]) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(&x, &y)| u8_eq(x, y))
}

fn find_bytes(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    if needle.is_empty() || needle.len() > haystack.len() {
        return None;
    }
    (0..=haystack.len() - needle.len()).find(|&start| bytes_eq(&haystack[start..start + needle.len()], needle))
}

/// Offsets of up to `limit` leftmost non-overlapping occurrences of `needle`
fn leftmost_matches<'a>(haystack: &'a [u8], needle: &'a [u8], limit: i64) -> impl Iterator<Item = usize> + 'a {
    let mut cursor = 0;
    let mut remaining = limit;
    core::iter::from_fn(move || {
        if i64_lteq(remaining, 0) {
            return None;
        }
        let at = cursor + find_bytes(haystack.get(cursor..)?, needle)?;
        cursor = at + needle.len();
        remaining -= 1;
        Some(at)
    })
}

impl<P: MemoryProvider, Q: MemoryProvider> PartialEq<Str<Q>> for Str<P> {
    fn eq(&self, other: &Str<Q>) -> bool {
        bytes_eq(self.as_bytes(), other.as_bytes())
    }
}

impl<P: MemoryProvider> Eq for Str<P> {}

impl<P: MemoryProvider> Element for Str<P> {
    const TYPE_NAME: &'static str = "Str";
}

impl<P: MemoryProvider + Default> Default for Str<P> {
    fn default() -> Self {
        Self::from_static_in("", P::default())
    }
}

impl<P: MemoryProvider> fmt::Display for Str<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&String::from_utf8_lossy(self.as_bytes()))
    }
}

impl<P: MemoryProvider> fmt::Debug for Str<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&String::from_utf8_lossy(self.as_bytes()), f)
    }
}

#[cfg(test)]
mod tests {
    use srt_error::{status_of, ErrorSet, ErrorSource};

    use super::*;
    use crate::provider::BudgetProvider;

    fn s(text: &'static str) -> Str {
        Str::from_static(text)
    }

    #[test]
    fn equality_compares_length_then_bytes() {
        assert_eq!(s("abc"), s("abc"));
        assert_ne!(s("abc"), s("abd"));
        assert_ne!(s("abc"), s("ab"));
        assert_eq!(s("abc"), Str::from_bytes(b"abc").unwrap());
    }

    #[test]
    fn find_and_contains() {
        let hay = s("hello world");
        assert_eq!(hay.find(&s("o")), 4);
        assert_eq!(hay.find(&s("world")), 6);
        assert_eq!(hay.find(&s("xyz")), -1);
        assert_eq!(hay.find(&s("")), -1);
        assert!(hay.contains(&s("lo w")));
        assert!(!hay.contains(&s("")));
        assert!(!s("ab").contains(&s("abc")));
    }

    #[test]
    fn substr_copies_the_window() {
        let hello = s("hello world").get_substr(0, 5).unwrap();
        assert_eq!(hello, s("hello"));
        assert!(hello.is_owned());
        assert_eq!(s("hello world").get_substr(6, 11).unwrap(), s("world"));
    }

    #[test]
    fn substr_checks_run_in_order() {
        let text = s("hello");
        let message = |start, end| match text.get_substr(start, end) {
            Err(SubstrError::IndexOutOfBounds(err)) => err.message().to_owned(),
            other => panic!("expected an index error, got {other:?}"),
        };

        assert_eq!(message(-1, -2), "substring start -1 is negative");
        assert_eq!(message(0, -2), "substring end -2 is negative");
        assert_eq!(message(3, 2), "substring start 3 is greater than end 2");
        assert_eq!(message(2, 9), "substring end 9 exceeds length 5");
        assert_eq!(message(5, 5), "substring range 5..5 is empty");
        assert_eq!(message(0, 0), "substring range 0..0 is empty");
    }

    #[test]
    fn substr_reports_alloc_as_second_ordinal() {
        let text = Str::from_static_in("hello", BudgetProvider::new(2));
        let result = text.get_substr(0, 5);
        assert!(matches!(result, Err(SubstrError::Alloc(_))));
        assert_eq!(status_of(&result), 2);
        assert_eq!(status_of(&text.get_substr(1, 1)), 1);
        assert_eq!(status_of(&text.get_substr(0, 1)), 0);
    }

    #[test]
    fn concat_joins_contiguously() {
        let joined = s("foo").concat(&s("bar"));
        assert_eq!(joined.len(), 6);
        assert_eq!(joined, s("foobar"));
        assert_eq!(joined.get_substr(0, 3).unwrap(), s("foo"));
        assert_eq!(s("").concat(&s("")).len(), 0);
    }

    #[test]
    #[should_panic(expected = "concat: budget exhausted")]
    fn concat_allocation_failure_is_fatal() {
        srt_panic::testing::install_recording_console();
        let text = Str::from_static_in("hello", BudgetProvider::new(4));
        text.concat(&s(" world")).delete();
    }

    #[test]
    fn format_appends_arguments_in_order() {
        let args = Array::from_values([s("x")]).unwrap();
        let message = Str::format(&s("assert failed: "), &args).unwrap();
        assert_eq!(message, s("assert failed: x"));

        let args = Array::from_values([s("a"), s(""), s("bc")]).unwrap();
        assert_eq!(Str::format(&s(">"), &args).unwrap(), s(">abc"));
    }

    #[test]
    fn format_with_no_arguments_copies_prefix() {
        let args: Array<Str> = Array::new(0).unwrap();
        let copy = Str::format(&s("alone"), &args).unwrap();
        assert_eq!(copy, s("alone"));
        assert!(copy.is_owned());
    }

    #[test]
    fn format_allocates_once() {
        let provider = BudgetProvider::new(64);
        let prefix = Str::from_static_in("n=", provider.clone());
        let args = Array::from_values([s("1"), s("2")]).unwrap();
        let out = Str::format(&prefix, &args).unwrap();
        assert_eq!(provider.in_use(), 4);
        assert_eq!(provider.peak(), 4);
        assert_eq!(out, s("n=12"));
    }

    #[test]
    fn format_alloc_failure_is_third_ordinal() {
        let prefix = Str::from_static_in("too long", BudgetProvider::new(1));
        let args = Array::from_values([s("!")]).unwrap();
        let err = Str::format(&prefix, &args).unwrap_err();
        assert_eq!(err.ordinal(), 3);
        assert_eq!(err.kind_name(), "AllocError");
    }

    #[test]
    fn replacen_replaces_leftmost_occurrences() {
        assert_eq!(s("aaa").replacen(&s("a"), &s("b"), 2).unwrap(), s("bba"));
        assert_eq!(s("aaa").replacen(&s("a"), &s("b"), 9).unwrap(), s("bbb"));
        assert_eq!(s("a-b-c").replacen(&s("-"), &s(", "), 1).unwrap(), s("a, b-c"));
        assert_eq!(s("abab").replacen(&s("ab"), &s(""), 2).unwrap(), s(""));
        assert_eq!(s("aaaa").replacen(&s("aa"), &s("x"), 5).unwrap(), s("xx"));
    }

    #[test]
    fn replacen_no_op_paths_return_a_fresh_copy() {
        let source = s("abc");
        for result in [
            source.replacen(&s("a"), &s("z"), 0),
            source.replacen(&s("a"), &s("z"), -3),
            source.replacen(&s(""), &s("z"), 1),
            source.replacen(&s("q"), &s("z"), 1),
        ] {
            let copy = result.unwrap();
            assert_eq!(copy, source);
            assert!(copy.is_owned());
            assert_ne!(copy.as_bytes().as_ptr(), source.as_bytes().as_ptr());
        }
    }

    #[test]
    fn replacen_releases_intermediate_buffers() {
        let provider = BudgetProvider::new(256);
        let source = Str::from_static_in("aaa", provider.clone());
        let out = source.replacen(&s("a"), &s("b"), 3).unwrap();
        assert_eq!(out, s("bbb"));
        assert_eq!(provider.in_use(), 3);
        out.delete();
        assert_eq!(provider.in_use(), 0);
    }

    #[test]
    fn replacen_handles_many_replacements_without_recursion() {
        let source = Str::from_bytes(&vec![b'a'; 100_000]).unwrap();
        let all = source.replacen(&s("a"), &s("b"), 100_000).unwrap();
        assert_eq!(all.len(), 100_000);
        assert!(all.as_bytes().iter().all(|&byte| byte == b'b'));

        let most = source.replacen(&s("a"), &s("bc"), 99_999).unwrap();
        assert_eq!(most.len(), 199_999);
        assert!(most.as_bytes().ends_with(b"bca"));
    }

    #[test]
    fn replacen_needs_only_source_and_result_under_a_budget() {
        let provider = BudgetProvider::new(400);
        let source = Str::from_bytes_in(&[b'a'; 200], provider.clone()).unwrap();
        let out = source.replacen(&s("a"), &s("b"), 200).unwrap();
        assert_eq!(out, Str::from_bytes(&[b'b'; 200]).unwrap());
        assert_eq!(provider.peak(), 400);
        assert_eq!(provider.refusals(), 0);
    }

    #[test]
    fn try_clone_is_an_independent_allocation() {
        let owned = Str::from_bytes(b"data").unwrap();
        let copy = owned.try_clone().unwrap();
        assert_eq!(copy, owned);
        assert_ne!(copy.as_bytes().as_ptr(), owned.as_bytes().as_ptr());
        assert!(!s("lit").is_owned());
        assert!(s("lit").try_clone().unwrap().is_owned());
    }

    #[test]
    fn integer_text_conversions() {
        assert_eq!(Str::from_i64(-42).unwrap(), s("-42"));
        assert_eq!(Str::from_i64(i64::MIN).unwrap().to_i64(), Ok(i64::MIN));
        assert_eq!(s("+17").to_i64(), Ok(17));
        assert_eq!(s("9223372036854775807").to_i64(), Ok(i64::MAX));
        assert_eq!(
            s("9223372036854775808").to_i64().unwrap_err().message(),
            "'9223372036854775808' is out of range for i64"
        );
        assert_eq!(s("-").to_i64().unwrap_err().message(), "'-' is not an integer");
        assert!(s("12a").to_i64().is_err());
        assert_eq!(Str::from_byte(b'z').unwrap(), s("z"));
    }

    #[test]
    fn display_and_debug() {
        let text = s("hi \"there\"");
        assert_eq!(text.to_string(), "hi \"there\"");
        assert_eq!(format!("{text:?}"), "\"hi \\\"there\\\"\"");
    }
}
