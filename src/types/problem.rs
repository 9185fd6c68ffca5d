//! Transport-neutral presentation of failures.
//!
//! A [`Problem`] is what an HTTP or RPC adapter needs to render a failed
//! [`Outcome`]: a title, a status code, a detail line and the message log.
//! The adapters themselves live outside this crate.

use crate::types::alloc_type::{Cow, String, Vec};
use crate::types::failure::Failure;
use crate::types::outcome::Outcome;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

impl Failure {
    /// Short human readable heading for the failure kind.
    #[must_use]
    pub fn title(&self) -> &'static str {
        match self {
            Failure::Generic => "Something was wrong with the request:",
            Failure::Warning(_) => "The action needs attention:",
            Failure::NotFound { .. } => "The requested resource was not found:",
            Failure::Validation(_) => "One or more validation errors occurred:",
            Failure::Exception(_) => "One or more errors occurred:",
        }
    }

    /// Status code suggested for transport adapters.
    #[must_use]
    pub fn status_code(&self) -> u16 {
        match self {
            Failure::Generic | Failure::Warning(_) | Failure::Validation(_) => 400,
            Failure::NotFound { .. } => 404,
            Failure::Exception(_) => 500,
        }
    }

    /// Detail text carried by the descriptor itself.
    ///
    /// Empty for [`Failure::Generic`], which carries no detail.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Failure;
    ///
    /// let failure = Failure::invalid_many([("name", "required"), ("age", "too young")]);
    /// assert_eq!(failure.detail(), "name: required\nage: too young");
    /// assert_eq!(Failure::Generic.detail(), "");
    /// ```
    #[must_use]
    pub fn detail(&self) -> String {
        match self {
            Failure::Generic => String::new(),
            Failure::Warning(message) => message.clone(),
            Failure::NotFound { key } => alloc::format!("no entry with id {}", key),
            Failure::Validation(failures) => {
                let lines: Vec<String> = failures.iter().map(alloc::string::ToString::to_string).collect();
                lines.join("\n")
            },
            Failure::Exception(error) => alloc::string::ToString::to_string(error),
        }
    }

    /// Projects the failure into a [`Problem`] without a message log.
    #[must_use]
    pub fn to_problem(&self) -> Problem {
        Problem {
            title: Cow::Borrowed(self.title()),
            status: self.status_code(),
            detail: self.detail(),
            messages: Vec::new(),
        }
    }
}

/// Rendering of a failed outcome for transport adapters.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Problem {
    /// Heading of the failure kind.
    pub title: Cow<'static, str>,
    /// Suggested status code.
    pub status: u16,
    /// Detail line.
    pub detail: String,
    /// The outcome's message log.
    pub messages: Vec<String>,
}

impl<T> Outcome<T> {
    /// Projects a failed outcome into a [`Problem`]. `None` on success.
    ///
    /// When the descriptor carries no detail, the log is used instead.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let problem = Outcome::<()>::fail("queue is full").to_problem().unwrap();
    /// assert_eq!(problem.status, 400);
    /// assert_eq!(problem.detail, "queue is full");
    ///
    /// assert!(Outcome::ok(1).to_problem().is_none());
    /// ```
    #[must_use]
    pub fn to_problem(&self) -> Option<Problem> {
        let failure = self.try_failure()?;
        let mut problem = failure.to_problem();
        problem.messages = self.messages().to_vec();
        if problem.detail.is_empty() {
            problem.detail = problem.messages.join("\n");
        }
        Some(problem)
    }
}
