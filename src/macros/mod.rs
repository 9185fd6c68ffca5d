//! Shorthand macros for building failed outcomes.
//!
//! - [`macro@crate::fail`] - Formats a message and returns a generic failure.
//! - [`macro@crate::invalid`] - Builds a validation failure from `field => message` pairs.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::{fail, invalid, Failure, Outcome};
//!
//! let outcome: Outcome<()> = fail!("order {} is closed", 17);
//! assert_eq!(outcome.messages(), ["order 17 is closed"]);
//!
//! let outcome: Outcome<()> = invalid!("name" => "required", "age" => "too young");
//! assert_eq!(
//!     outcome.try_failure(),
//!     Some(&Failure::invalid_many([("name", "required"), ("age", "too young")]))
//! );
//! ```

/// Creates a [`Failure::Generic`](crate::Failure::Generic) outcome with a
/// formatted message.
///
/// Accepts the same arguments as the standard `format!` macro.
///
/// # Examples
///
/// ```
/// use outcome_rail::{fail, Outcome};
///
/// let id = 42;
/// let outcome: Outcome<u8> = fail!("user {} is locked", id);
/// assert!(outcome.is_failure());
/// ```
#[macro_export]
macro_rules! fail {
    ($($arg:tt)*) => {
        $crate::Outcome::fail($crate::__private::format!($($arg)*))
    };
}

/// Creates a [`Failure::Validation`](crate::Failure::Validation) outcome from
/// `field => message` pairs, in order.
///
/// # Examples
///
/// ```
/// use outcome_rail::{invalid, Outcome};
///
/// let outcome: Outcome<()> = invalid!("email" => "malformed");
/// let failures = outcome.try_failure().and_then(|f| f.validation_failures()).unwrap();
/// assert_eq!(failures.of_field("email"), vec!["malformed"]);
/// ```
#[macro_export]
macro_rules! invalid {
    ($($field:expr => $message:expr),+ $(,)?) => {
        $crate::Outcome::invalid_many([$(($field, $message)),+])
    };
}
