use netsketch_parser::{
    Span,
    error::{ErrorCode, Severity},
    parse_script, relations,
};
use proptest::prelude::*;

#[test]
fn test_topology_script() {
    let script = "\
# comments are not special, this line has no delimiter
internet -> firewall
firewall -> core switch

core switch -> web-01
core switch -> db-01
";
    let parsed = parse_script(script).expect("valid script");

    let pairs: Vec<_> = parsed.iter().map(|r| (r.from, r.to)).collect();
    assert_eq!(
        pairs,
        vec![
            ("internet", "firewall"),
            ("firewall", "core switch"),
            ("core switch", "web-01"),
            ("core switch", "db-01"),
        ]
    );
    assert_eq!(parsed[0].line, 2);
    assert_eq!(parsed[3].line, 6);
}

#[test]
fn test_streaming_stops_where_caller_stops() {
    let script = "A -> B\n -> C\nC -> D";
    let mut applied = Vec::new();
    let mut failure = None;

    for item in relations(script) {
        match item {
            Ok(relation) => applied.push((relation.from, relation.to)),
            Err(diag) => {
                failure = Some(diag);
                break;
            }
        }
    }

    assert_eq!(applied, vec![("A", "B")]);
    let diag = failure.expect("second line is malformed");
    assert_eq!(diag.severity(), Severity::Error);
    assert_eq!(diag.code(), Some(ErrorCode::E100));
    assert_eq!(diag.primary_span(), Some(Span::new(8..10)));
}

#[test]
fn test_error_display_counts_extra_diagnostics() {
    let err = parse_script("->\n->\n->").unwrap_err();
    assert_eq!(
        err.to_string(),
        "error[E100]: connection on line 1 has no source label (+2 more)"
    );
}

proptest! {
    #[test]
    fn well_formed_lines_roundtrip(
        from in "[A-Za-z0-9_.]{1,10}( [A-Za-z0-9]{1,5})?",
        to in "[A-Za-z0-9_.]{1,10}( [A-Za-z0-9]{1,5})?",
        pad_left in " {0,3}",
        pad_right in " {0,3}",
    ) {
        let line = format!("{pad_left}{from}{pad_right}->{pad_left}{to}{pad_right}");
        let parsed = parse_script(&line).unwrap();

        prop_assert_eq!(parsed.len(), 1);
        prop_assert_eq!(parsed[0].from, from.as_str());
        prop_assert_eq!(parsed[0].to, to.as_str());
        prop_assert_eq!(&line[parsed[0].from_span.range()], from.as_str());
        prop_assert_eq!(&line[parsed[0].to_span.range()], to.as_str());
    }

    #[test]
    fn lines_without_delimiter_never_fail(text in "[^>\n]{0,40}") {
        prop_assert!(parse_script(&text).unwrap().is_empty());
    }
}
