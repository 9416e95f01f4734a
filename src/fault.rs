//! Domain fault contract and a ready-made implementation.
//!
//! Failed reply assertions surface an error built by the caller, not by
//! this crate. [`Fault`] is the contract such errors satisfy: a business
//! code on top of the standard error machinery, with `Error::source` as
//! the cause chain. [`CodedFault`] is the stock implementation for callers
//! that key their errors by string code.

use serde::Serialize;
use tracing_error::SpanTrace;

/// Contract for domain errors raised through reply assertions.
///
/// A fault is a regular [`std::error::Error`] that additionally exposes a
/// business code. The cause chain, when there is one, is reachable through
/// [`source`](std::error::Error::source).
pub trait Fault: std::error::Error {
    /// Business code type.
    type Code: Ord + Serialize;

    /// The fault's business code.
    fn code(&self) -> &Self::Code;
}

/// Stock fault keyed by a string code.
///
/// Besides the code, a `CodedFault` can carry placeholder arguments for
/// later message interpolation and an optional underlying cause. Each fault
/// captures a tracing span backtrace at construction for improved
/// diagnostics.
#[derive(Debug)]
pub struct CodedFault {
    context: SpanTrace,
    code: String,
    args: Vec<String>,
    source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl CodedFault {
    /// Create a fault with the given code.
    pub fn new(code: impl ToString) -> Self {
        Self {
            context: SpanTrace::capture(),
            code: code.to_string(),
            args: Vec::new(),
            source: None,
        }
    }

    /// Create a fault with the given code and placeholder arguments.
    pub fn with_args(
        code: impl ToString,
        args: impl IntoIterator<Item = impl ToString>,
    ) -> Self {
        Self {
            context: SpanTrace::capture(),
            code: code.to_string(),
            args: args.into_iter().map(|arg| arg.to_string()).collect(),
            source: None,
        }
    }

    /// Attach an underlying cause to the fault.
    pub fn caused_by(
        mut self,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Placeholder arguments carried by the fault.
    pub fn args(&self) -> &[String] {
        &self.args
    }
}

impl std::fmt::Display for CodedFault {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.args.is_empty() {
            writeln!(f, "Fault code: {}", self.code)?;
        } else {
            writeln!(f, "Fault code: {} ({})", self.code, self.args.join(", "))?;
        }
        self.context.fmt(f)
    }
}

impl std::error::Error for CodedFault {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_deref()
            .map(|source| source as &(dyn std::error::Error + 'static))
    }
}

impl Fault for CodedFault {
    type Code = String;

    fn code(&self) -> &String {
        &self.code
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_leads_with_the_code() {
        let fault = CodedFault::new("user.missing");

        assert!(fault.to_string().starts_with("Fault code: user.missing"));
    }

    #[test]
    fn args_ride_along_for_later_interpolation() {
        let fault = CodedFault::with_args("user.missing", ["42"]);

        assert_eq!(fault.args(), ["42"]);
        assert!(fault.to_string().contains("42"));
    }

    #[test]
    fn the_cause_chain_is_reachable_through_source() {
        let cause = std::io::Error::other("boom");
        let fault = CodedFault::new("io.failed").caused_by(cause);

        let source = std::error::Error::source(&fault).unwrap();
        assert_eq!(source.to_string(), "boom");
    }

    #[test]
    fn faults_expose_their_code_through_the_contract() {
        fn code_of<F: Fault>(fault: &F) -> &F::Code {
            fault.code()
        }

        let fault = CodedFault::new("bad.reply");

        assert_eq!(code_of(&fault).as_str(), "bad.reply");
    }
}
