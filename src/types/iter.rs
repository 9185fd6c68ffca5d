use crate::types::alloc_type::Vec;
use crate::types::combine::{combine, WarningPolicy};
use crate::types::outcome::Outcome;
use crate::types::Messages;

/// Collects outcomes into one outcome of all values.
///
/// Every element is inspected; failures are joined in iteration order and
/// all logs are concatenated.
///
/// # Examples
///
/// ```
/// use outcome_rail::{Failure, Outcome};
///
/// let all: Outcome<Vec<i32>> = vec![Outcome::ok(1), Outcome::ok(2)].into_iter().collect();
/// assert_eq!(all.into_value(), Some(vec![1, 2]));
///
/// let some: Outcome<Vec<i32>> =
///     vec![Outcome::fail("a"), Outcome::ok(2), Outcome::not_found(9)].into_iter().collect();
/// assert_eq!(some.try_failure(), Some(&Failure::not_found(9)));
/// assert_eq!(some.messages().len(), 2);
/// ```
impl<T> FromIterator<Outcome<T>> for Outcome<Vec<T>> {
    fn from_iter<I: IntoIterator<Item = Outcome<T>>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let (lower, _) = iter.size_hint();

        let mut values = Vec::with_capacity(lower);
        let mut failure = None;
        let mut messages = Messages::new();

        for outcome in iter {
            let (state, log) = outcome.into_parts();
            messages.extend(log);
            match state {
                Ok(value) if failure.is_none() => values.push(value),
                Ok(_) => {},
                Err(incoming) => failure = combine(failure, Some(incoming)),
            }
        }

        Outcome::assemble(Some(values), failure, messages, WarningPolicy::Enforce)
    }
}

/// Iterates over the value of a success; yields nothing for a failure.
impl<T> IntoIterator for Outcome<T> {
    type Item = T;
    type IntoIter = core::option::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_value().into_iter()
    }
}
