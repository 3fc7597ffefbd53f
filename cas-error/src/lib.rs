//! Contains the common [`ErrorKind`] trait used by all errors to display user-facing error
//! messages, and the [`Error`] type that pairs a kind with the source regions it points at.
//!
//! Errors produced while parsing point at the tokens they originated from. Errors produced by
//! the symbolic engine (evaluation, differentiation, integration) have no source to point at, so
//! their list of spans is empty; their reports then consist of the message and help text only.

// lets the derive macro's `cas_error::` paths resolve inside this crate's own tests
extern crate self as cas_error;

pub use ariadne;

use ariadne::{Color, Report, Source};
use std::{any::Any, fmt::{self, Debug, Display}, io, ops::Range};

/// The color to use to highlight expressions.
pub const EXPR: Color = Color::RGB(52, 235, 152);

/// Represents any kind of error that can occur during some operation.
///
/// This trait is usually derived with `#[derive(ErrorKind)]` from the `cas-attrs` crate.
pub trait ErrorKind: Debug + Send + Sync {
    /// Returns `self` as [`Any`], so that the concrete kind can be recovered with
    /// [`Error::downcast_ref`].
    fn as_any(&self) -> &dyn Any;

    /// The one-line message describing the error.
    fn message(&self) -> String;

    /// Builds the report for this error.
    fn build_report<'a>(
        &self,
        src_id: &'a str,
        spans: &[Range<usize>],
    ) -> Report<(&'a str, Range<usize>)>;
}

/// An error associated with regions of source code that can be highlighted.
#[derive(Debug)]
pub struct Error {
    /// The regions of the source code that this error originated from.
    pub spans: Vec<Range<usize>>,

    /// The kind of error that occurred.
    pub kind: Box<dyn ErrorKind>,
}

impl Error {
    /// Creates a new error with the given spans and kind.
    pub fn new(spans: Vec<Range<usize>>, kind: impl ErrorKind + 'static) -> Self {
        Self { spans, kind: Box::new(kind) }
    }

    /// Creates a new error that is not associated with any region of source code.
    pub fn without_span(kind: impl ErrorKind + 'static) -> Self {
        Self::new(Vec::new(), kind)
    }

    /// Returns true if the kind of this error is `K`.
    pub fn is<K: ErrorKind + 'static>(&self) -> bool {
        self.kind.as_any().is::<K>()
    }

    /// Returns the kind of this error as a `K`, if it is one.
    pub fn downcast_ref<K: ErrorKind + 'static>(&self) -> Option<&K> {
        self.kind.as_any().downcast_ref::<K>()
    }

    /// Build a report from this error kind.
    pub fn build_report<'a>(&self, src_id: &'a str) -> Report<(&'a str, Range<usize>)> {
        self.kind.build_report(src_id, &self.spans)
    }

    /// Writes the report of this error to the given writer, using `input` as the source code the
    /// spans refer to.
    pub fn write_report(&self, src_id: &str, input: &str, writer: impl io::Write) -> io::Result<()> {
        self.build_report(src_id).write((src_id, Source::from(input)), writer)
    }

    /// Report this error to stderr.
    ///
    /// The `ariadne` crate's [`Report`] type does not have a `Display` implementation, so we can
    /// only use its `eprint` method to print to stderr.
    pub fn report_to_stderr(&self, src_id: &str, input: &str) -> io::Result<()> {
        self.build_report(src_id).eprint((src_id, Source::from(input)))
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind.message())
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use ariadne::Fmt;
    use cas_attrs::ErrorKind;
    use super::*;

    #[derive(Debug, Clone, ErrorKind, PartialEq)]
    #[error(
        message = format!("`{}` is not defined", self.name),
        labels = ["this variable"],
        help = format!("bind it first: {}", (&self.name).fg(EXPR)),
    )]
    struct Undefined {
        name: String,
    }

    #[derive(Debug, Clone, ErrorKind, PartialEq)]
    #[error(message = "nothing to point at")]
    struct Spanless;

    /// Renders the report of the error without color codes.
    fn render(err: &Error, input: &str) -> String {
        let mut buf = Vec::new();
        err.write_report("input", input, &mut buf).unwrap();
        String::from_utf8(strip_ansi_escapes::strip(buf)).unwrap()
    }

    #[test]
    fn downcast_kind() {
        let err = Error::new(vec![4..5], Undefined { name: "y".to_string() });
        assert!(err.is::<Undefined>());
        assert!(!err.is::<Spanless>());
        assert_eq!(err.downcast_ref::<Undefined>().unwrap().name, "y");
    }

    #[test]
    fn display_uses_message() {
        let err = Error::new(vec![4..5], Undefined { name: "y".to_string() });
        assert_eq!(err.to_string(), "`y` is not defined");
    }

    #[test]
    fn report_with_span() {
        let err = Error::new(vec![4..5], Undefined { name: "y".to_string() });
        let report = render(&err, "x + y");
        assert!(report.contains("`y` is not defined"));
        assert!(report.contains("this variable"));
        assert!(report.contains("bind it first: y"));
    }

    #[test]
    fn report_without_span() {
        let err = Error::without_span(Spanless);
        let report = render(&err, "");
        assert!(report.contains("nothing to point at"));
    }
}
