//! Failure taxonomy: the closed set of failure kinds and their weights.
//!
//! Every [`Failure`] carries a weight through its [`FailureKind`]. When two
//! failures meet during chaining, the weight decides which one survives
//! (see [`combine`](crate::types::combine)). Only [`Failure::Validation`]
//! merges its payload with another failure of the same kind.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::{Failure, FailureKind};
//!
//! let failure = Failure::invalid("email", "must contain @");
//! assert_eq!(failure.kind(), FailureKind::Validation);
//! assert_eq!(failure.weight(), 8);
//! ```

use core::error::Error;
use core::fmt;

use crate::types::alloc_type::{Arc, String, Vec};
use crate::types::InlineVec;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Discriminant of a [`Failure`], carrying the priority weight of the kind.
///
/// Weights are fixed; reordering them changes which failure survives a
/// combine.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FailureKind {
    /// Detail-free placeholder failure. Yields to any other failure.
    Generic,
    /// Warning that a receiver may choose to suppress.
    Warning,
    /// A lookup found nothing for a key.
    NotFound,
    /// One or more fields failed validation.
    Validation,
    /// An error raised by foreign code, wrapped as a value.
    Exception,
}

impl FailureKind {
    /// Priority weight of the kind. Higher weights win a combine.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::FailureKind;
    ///
    /// assert!(FailureKind::Exception.weight() > FailureKind::Validation.weight());
    /// assert_eq!(FailureKind::Generic.weight(), 1);
    /// ```
    #[must_use]
    #[inline]
    pub const fn weight(self) -> u8 {
        match self {
            FailureKind::Generic => 1,
            FailureKind::Warning => 2,
            FailureKind::NotFound => 4,
            FailureKind::Validation => 8,
            FailureKind::Exception => 16,
        }
    }

    /// Returns `true` for the kinds that merge payloads with their own kind.
    #[must_use]
    #[inline]
    pub const fn merges_with_itself(self) -> bool {
        matches!(self, FailureKind::Validation)
    }
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FailureKind::Generic => "generic",
            FailureKind::Warning => "warning",
            FailureKind::NotFound => "not_found",
            FailureKind::Validation => "validation",
            FailureKind::Exception => "exception",
        };
        f.write_str(name)
    }
}

/// A single field that failed validation.
///
/// # Examples
///
/// ```
/// use outcome_rail::ValidationFailure;
///
/// let failure = ValidationFailure::new("age", "must be positive");
/// assert_eq!(failure.to_string(), "age: must be positive");
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ValidationFailure {
    field: String,
    message: String,
}

impl ValidationFailure {
    /// Creates a validation failure for `field`.
    #[inline]
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self { field: field.into(), message: message.into() }
    }

    /// The field that failed.
    #[must_use]
    #[inline]
    pub fn field(&self) -> &str {
        &self.field
    }

    /// Why the field failed.
    #[must_use]
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for ValidationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl<F, M> From<(F, M)> for ValidationFailure
where
    F: Into<String>,
    M: Into<String>,
{
    fn from((field, message): (F, M)) -> Self {
        Self::new(field, message)
    }
}

/// Ordered list of [`ValidationFailure`]s carried by [`Failure::Validation`].
///
/// Merging two lists keeps the receiver's entries first.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct ValidationFailures {
    failures: InlineVec<ValidationFailure>,
}

impl ValidationFailures {
    /// Creates an empty list.
    #[inline]
    pub fn new() -> Self {
        Self { failures: InlineVec::new() }
    }

    /// Appends a failure.
    #[inline]
    pub fn push(&mut self, failure: ValidationFailure) {
        self.failures.push(failure);
    }

    /// Appends every failure of `other`, preserving order.
    #[inline]
    pub fn append(&mut self, other: ValidationFailures) {
        self.failures.extend(other.failures);
    }

    /// Number of failed fields.
    #[must_use]
    #[inline]
    pub fn len(&self) -> usize {
        self.failures.len()
    }

    /// Returns `true` if no failure was recorded.
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.failures.is_empty()
    }

    /// Iterates over the failures in insertion order.
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, ValidationFailure> {
        self.failures.iter()
    }

    /// Messages recorded for a single field, in insertion order.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::{ValidationFailure, ValidationFailures};
    ///
    /// let failures: ValidationFailures = [
    ///     ValidationFailure::new("name", "required"),
    ///     ValidationFailure::new("age", "too young"),
    ///     ValidationFailure::new("name", "too short"),
    /// ]
    /// .into_iter()
    /// .collect();
    ///
    /// assert_eq!(failures.of_field("name"), vec!["required", "too short"]);
    /// ```
    #[must_use]
    pub fn of_field(&self, field: &str) -> Vec<&str> {
        self.failures.iter().filter(|f| f.field == field).map(|f| f.message.as_str()).collect()
    }

    /// Groups messages by field. Fields appear in first-seen order.
    #[must_use]
    pub fn grouped_by_field(&self) -> Vec<(&str, Vec<&str>)> {
        let mut groups: Vec<(&str, Vec<&str>)> = Vec::new();
        for failure in &self.failures {
            match groups.iter_mut().find(|(field, _)| *field == failure.field) {
                Some((_, messages)) => messages.push(failure.message.as_str()),
                None => groups.push((failure.field.as_str(), alloc::vec![failure.message.as_str()])),
            }
        }
        groups
    }
}

impl FromIterator<ValidationFailure> for ValidationFailures {
    fn from_iter<I: IntoIterator<Item = ValidationFailure>>(iter: I) -> Self {
        Self { failures: iter.into_iter().collect() }
    }
}

impl IntoIterator for ValidationFailures {
    type Item = ValidationFailure;
    type IntoIter = smallvec::IntoIter<[ValidationFailure; 2]>;

    fn into_iter(self) -> Self::IntoIter {
        self.failures.into_iter()
    }
}

impl<'a> IntoIterator for &'a ValidationFailures {
    type Item = &'a ValidationFailure;
    type IntoIter = core::slice::Iter<'a, ValidationFailure>;

    fn into_iter(self) -> Self::IntoIter {
        self.failures.iter()
    }
}

/// Shared handle to an error raised by foreign code.
///
/// Cloning shares the same allocation; two handles compare equal only when
/// they point at the same error.
#[derive(Clone)]
pub struct ExceptionError {
    inner: Arc<dyn Error + Send + Sync + 'static>,
}

impl ExceptionError {
    /// Wraps an error.
    #[inline]
    pub fn new<E>(error: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        Self { inner: Arc::new(error) }
    }

    /// Borrows the wrapped error.
    #[must_use]
    #[inline]
    pub fn error(&self) -> &(dyn Error + Send + Sync + 'static) {
        &*self.inner
    }

    /// Attempts to downcast the wrapped error to a concrete type.
    #[must_use]
    #[inline]
    pub fn downcast_ref<E: Error + 'static>(&self) -> Option<&E> {
        self.inner.downcast_ref::<E>()
    }
}

impl PartialEq for ExceptionError {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl Eq for ExceptionError {}

impl fmt::Debug for ExceptionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&*self.inner, f)
    }
}

impl fmt::Display for ExceptionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&*self.inner, f)
    }
}

/// Why an operation failed.
///
/// A failure is created once where the operation fails and afterwards only
/// merged as outcomes combine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Failure {
    /// Placeholder failure without detail. Any other failure supersedes it.
    Generic,
    /// A warning. Dropped by receivers built with [`WarningPolicy::Suppress`](crate::WarningPolicy).
    Warning(String),
    /// Nothing was found for `key`.
    NotFound {
        /// The key that was looked up, rendered with `Display`.
        key: String,
    },
    /// Fields failed validation.
    Validation(ValidationFailures),
    /// Foreign error wrapped as a value. Always wins a combine.
    Exception(ExceptionError),
}

impl Failure {
    /// Creates a [`Failure::NotFound`] for `key`.
    #[inline]
    pub fn not_found(key: impl fmt::Display) -> Self {
        Failure::NotFound { key: alloc::format!("{}", key) }
    }

    /// Creates a [`Failure::Validation`] with a single field.
    #[inline]
    pub fn invalid(field: impl Into<String>, message: impl Into<String>) -> Self {
        let mut failures = ValidationFailures::new();
        failures.push(ValidationFailure::new(field, message));
        Failure::Validation(failures)
    }

    /// Creates a [`Failure::Validation`] from `(field, message)` pairs.
    #[inline]
    pub fn invalid_many<I, V>(failures: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<ValidationFailure>,
    {
        Failure::Validation(failures.into_iter().map(Into::into).collect())
    }

    /// Wraps a foreign error as [`Failure::Exception`].
    #[inline]
    pub fn exception<E>(error: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        Failure::Exception(ExceptionError::new(error))
    }

    /// Creates a [`Failure::Warning`].
    #[inline]
    pub fn warning(message: impl Into<String>) -> Self {
        Failure::Warning(message.into())
    }

    /// The kind of this failure.
    #[must_use]
    #[inline]
    pub fn kind(&self) -> FailureKind {
        match self {
            Failure::Generic => FailureKind::Generic,
            Failure::Warning(_) => FailureKind::Warning,
            Failure::NotFound { .. } => FailureKind::NotFound,
            Failure::Validation(_) => FailureKind::Validation,
            Failure::Exception(_) => FailureKind::Exception,
        }
    }

    /// Priority weight, see [`FailureKind::weight`].
    #[must_use]
    #[inline]
    pub fn weight(&self) -> u8 {
        self.kind().weight()
    }

    /// Returns `true` for [`Failure::Warning`].
    #[must_use]
    #[inline]
    pub fn is_warning(&self) -> bool {
        matches!(self, Failure::Warning(_))
    }

    /// Validation entries, if this is a validation failure.
    #[must_use]
    #[inline]
    pub fn validation_failures(&self) -> Option<&ValidationFailures> {
        match self {
            Failure::Validation(failures) => Some(failures),
            _ => None,
        }
    }

    /// The wrapped error, if this is an exception.
    #[must_use]
    #[inline]
    pub fn exception_error(&self) -> Option<&ExceptionError> {
        match self {
            Failure::Exception(error) => Some(error),
            _ => None,
        }
    }
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let detail = self.detail();
        if detail.is_empty() {
            f.write_str(self.title())
        } else {
            write!(f, "{} {}", self.title(), detail)
        }
    }
}

impl Error for Failure {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Failure::Exception(error) => Some(error.error()),
            _ => None,
        }
    }
}
