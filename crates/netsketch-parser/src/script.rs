//! Line-oriented relation scripts.
//!
//! A script is plain text where each line of the form `<label> -> <label>`
//! describes one connection. Lines without the `->` delimiter are skipped.
//! Labels are trimmed; text after a second delimiter on the same line is
//! ignored. There is no quoting, escaping or comment syntax.

use std::ops::Range;

use log::{debug, trace};
use winnow::{
    Parser as _,
    combinator::{alt, opt, preceded},
    error::{ContextError, ModalResult},
    stream::LocatingSlice,
    token::{literal, rest, take_until},
};

use crate::{
    error::{Diagnostic, DiagnosticCollector, ErrorCode, ParseError},
    span::Span,
};

/// Separator between the two labels of a relation line.
pub const DELIMITER: &str = "->";

const FORMAT_HELP: &str = "write one connection per line as `<label> -> <label>`";

type Input<'a> = LocatingSlice<&'a str>;
type IResult<O> = ModalResult<O, ContextError>;

/// One `from -> to` relation read from a script line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Relation<'a> {
    /// 1-based line number.
    pub line: usize,
    pub from: &'a str,
    pub to: &'a str,
    pub from_span: Span,
    pub to_span: Span,
    /// Text from a second delimiter to the end of the line, if present.
    pub ignored: Option<Span>,
}

impl Relation<'_> {
    /// Returns a warning describing ignored trailing text, if the line had any.
    pub fn ignored_text_warning(&self) -> Option<Diagnostic> {
        self.ignored.map(|span| {
            Diagnostic::warning(format!("line {} has more than one `->`", self.line))
                .with_code(ErrorCode::W100)
                .with_label(span, ErrorCode::W100.description())
                .with_secondary_label(self.from_span.union(self.to_span), "connection read from here")
        })
    }
}

/// Raw pieces of a relation line with offsets relative to the line start.
struct RawRelation<'a> {
    from: (&'a str, Range<usize>),
    arrow: Range<usize>,
    to: (&'a str, Range<usize>),
    tail: Option<Range<usize>>,
}

/// Text up to the next delimiter, or to the end of the line.
fn endpoint<'a>(input: &mut Input<'a>) -> IResult<(&'a str, Range<usize>)> {
    alt((take_until(0.., DELIMITER), rest))
        .with_span()
        .parse_next(input)
}

fn relation_line<'a>(input: &mut Input<'a>) -> IResult<RawRelation<'a>> {
    let from = take_until(0.., DELIMITER).with_span().parse_next(input)?;
    let arrow = literal(DELIMITER).span().parse_next(input)?;
    let to = endpoint.parse_next(input)?;
    let tail = opt(preceded(literal(DELIMITER), rest).span()).parse_next(input)?;

    Ok(RawRelation {
        from,
        arrow,
        to,
        tail,
    })
}

/// Trims `text` and returns it with its span shifted to absolute offsets.
fn trimmed(text: &str, range: Range<usize>, line_start: usize) -> (&str, Span) {
    let lead = text.len() - text.trim_start().len();
    let label = text.trim();
    let start = line_start + range.start + lead;
    (label, Span::new(start..start + label.len()))
}

fn parse_line(text: &str, line_start: usize, line: usize) -> Result<Relation<'_>, Diagnostic> {
    let mut input = LocatingSlice::new(text);
    let raw = relation_line(&mut input).map_err(|_| {
        Diagnostic::error(format!("line {line} is not a connection"))
            .with_code(ErrorCode::E102)
            .with_label(
                Span::new(0..text.len()).offset_by(line_start),
                ErrorCode::E102.description(),
            )
            .with_help(FORMAT_HELP)
    })?;

    let arrow = Span::new(raw.arrow).offset_by(line_start);
    let (from, from_span) = trimmed(raw.from.0, raw.from.1, line_start);
    let (to, to_span) = trimmed(raw.to.0, raw.to.1, line_start);

    if from.is_empty() {
        let mut diag = Diagnostic::error(format!("connection on line {line} has no source label"))
            .with_code(ErrorCode::E100)
            .with_label(arrow, "expected a label before `->`");
        if !to.is_empty() {
            diag = diag.with_secondary_label(to_span, "target label");
        }
        return Err(diag.with_help(FORMAT_HELP));
    }

    if to.is_empty() {
        return Err(
            Diagnostic::error(format!("connection on line {line} has no target label"))
                .with_code(ErrorCode::E101)
                .with_label(arrow, "expected a label after `->`")
                .with_secondary_label(from_span, "source label")
                .with_help(FORMAT_HELP),
        );
    }

    Ok(Relation {
        line,
        from,
        to,
        from_span,
        to_span,
        ignored: raw.tail.map(|tail| Span::new(tail).offset_by(line_start)),
    })
}

/// Iterator over the relation lines of a script.
///
/// Yields one item per line containing the delimiter, in source order. Lines
/// without the delimiter produce nothing. A malformed line yields an `Err`
/// and iteration continues with the next line.
#[derive(Debug, Clone)]
pub struct Relations<'a> {
    source: &'a str,
    offset: usize,
    line: usize,
}

impl<'a> Iterator for Relations<'a> {
    type Item = Result<Relation<'a>, Diagnostic>;

    fn next(&mut self) -> Option<Self::Item> {
        while self.offset < self.source.len() {
            let remaining = &self.source[self.offset..];
            let (text, consumed) = match remaining.find('\n') {
                Some(end) => (&remaining[..end], end + 1),
                None => (remaining, remaining.len()),
            };
            let line_start = self.offset;
            self.offset += consumed;
            self.line += 1;

            if !text.contains(DELIMITER) {
                trace!(line = self.line; "Skipping line without delimiter");
                continue;
            }
            return Some(parse_line(text, line_start, self.line));
        }
        None
    }
}

/// Returns an iterator over the relations of `source`.
///
/// # Examples
///
/// ```
/// use netsketch_parser::relations;
///
/// let source = "web -> db\nnot a relation\n -> cache";
/// let mut iter = relations(source);
///
/// let first = iter.next().unwrap().unwrap();
/// assert_eq!((first.from, first.to), ("web", "db"));
/// assert!(iter.next().unwrap().is_err());
/// assert!(iter.next().is_none());
/// ```
pub fn relations(source: &str) -> Relations<'_> {
    Relations {
        source,
        offset: 0,
        line: 0,
    }
}

/// Parses a whole script, reporting every malformed line at once.
///
/// # Errors
///
/// Returns a [`ParseError`] holding one diagnostic per malformed line.
pub fn parse_script(source: &str) -> Result<Vec<Relation<'_>>, ParseError> {
    let mut collector = DiagnosticCollector::new();
    let mut parsed = Vec::new();

    for item in relations(source) {
        match item {
            Ok(relation) => parsed.push(relation),
            Err(diag) => collector.emit(diag),
        }
    }

    collector.finish()?;
    debug!(relations = parsed.len(); "Script parsed");
    Ok(parsed)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn single(source: &str) -> Result<Relation<'_>, Diagnostic> {
        relations(source).next().expect("one relation line")
    }

    #[test]
    fn test_simple_relation() {
        let relation = single("A -> B").unwrap();
        assert_eq!(relation.from, "A");
        assert_eq!(relation.to, "B");
        assert_eq!(relation.line, 1);
        assert_eq!(relation.from_span, Span::new(0..1));
        assert_eq!(relation.to_span, Span::new(5..6));
        assert!(relation.ignored.is_none());
    }

    #[test]
    fn test_labels_are_trimmed() {
        let relation = single("   edge router   ->\tcore switch  ").unwrap();
        assert_eq!(relation.from, "edge router");
        assert_eq!(relation.to, "core switch");
        assert_eq!(relation.from_span, Span::new(3..14));
    }

    #[test]
    fn test_no_whitespace_needed() {
        let relation = single("a->b").unwrap();
        assert_eq!((relation.from, relation.to), ("a", "b"));
    }

    #[test]
    fn test_spans_are_absolute() {
        let source = "skip me\nweb -> db";
        let relation = single(source).unwrap();
        assert_eq!(relation.line, 2);
        assert_eq!(&source[relation.from_span.range()], "web");
        assert_eq!(&source[relation.to_span.range()], "db");
    }

    #[test]
    fn test_second_delimiter_is_ignored() {
        let source = "A -> B -> C";
        let relation = single(source).unwrap();
        assert_eq!(relation.to, "B");
        let ignored = relation.ignored.unwrap();
        assert_eq!(&source[ignored.range()], "-> C");

        let warning = relation.ignored_text_warning().unwrap();
        assert_eq!(warning.code(), Some(ErrorCode::W100));
        assert!(warning.severity().is_warning());
    }

    #[test]
    fn test_lines_without_delimiter_are_skipped() {
        let all: Vec<_> = relations("hello\n\n- > nope\nA -> B\n").collect();
        assert_eq!(all.len(), 1);
    }

    #[test]
    fn test_crlf_line_endings() {
        let relation = single("A -> B\r\n").unwrap();
        assert_eq!(relation.to, "B");
    }

    #[test]
    fn test_missing_source_label() {
        let source = "   -> B";
        let diag = single(source).unwrap_err();
        assert_eq!(diag.code(), Some(ErrorCode::E100));
        assert_eq!(&source[diag.primary_span().unwrap().range()], "->");
        assert!(diag.help().is_some());
    }

    #[test]
    fn test_missing_target_label() {
        let diag = single("A ->   ").unwrap_err();
        assert_eq!(diag.code(), Some(ErrorCode::E101));
        assert_eq!(diag.labels().len(), 2);
    }

    #[test]
    fn test_bare_delimiter_reports_source_first() {
        let diag = single("->").unwrap_err();
        assert_eq!(diag.code(), Some(ErrorCode::E100));
    }

    #[test]
    fn test_parse_script_collects_all_errors() {
        let err = parse_script("-> a\nok -> fine\nb ->\n").unwrap_err();
        assert_eq!(err.diagnostics().len(), 2);
        assert_eq!(err.diagnostics()[0].code(), Some(ErrorCode::E100));
        assert_eq!(err.diagnostics()[1].code(), Some(ErrorCode::E101));
    }

    #[test]
    fn test_parse_script_success() {
        let parsed = parse_script("A -> B\nB -> C\nA -> A").unwrap();
        assert_eq!(parsed.len(), 3);
        assert_eq!(parsed[2].from, parsed[2].to);
    }

    #[test]
    fn test_empty_script() {
        assert!(parse_script("").unwrap().is_empty());
    }
}
