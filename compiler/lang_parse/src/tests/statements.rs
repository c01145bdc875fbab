use lang_ir::{Span, StmtKind};
use pretty_assertions::assert_eq;

use super::{parse_source, render};

#[test]
fn var_and_assignment() {
    assert_eq!(render("var x = 5; x = x + 1;"), "var x = 5;\nx = (x + 1);");
}

#[test]
fn semicolons_are_optional() {
    assert_eq!(render("var a = 1\nvar b = 2\na + b"), "var a = 1;\nvar b = 2;\n(a + b);");
}

#[test]
fn equality_is_not_assignment() {
    let output = parse_source("x == 1");
    assert!(matches!(
        output.program.statements[0].kind,
        StmtKind::Expr(_)
    ));
}

#[test]
fn return_statement() {
    assert_eq!(render("return [1, 2];"), "return [1, 2];");
}

#[test]
fn loop_with_and_without_index() {
    assert_eq!(
        render("for (x in xs) { print(x) }"),
        "for (x in xs) { print(x); }"
    );
    assert_eq!(
        render("for (x, i in xs) { total = total + i; }"),
        "for (x, i in xs) { total = (total + i); }"
    );
}

#[test]
fn loop_fields() {
    let output = parse_source("for (item, n in items) {}");
    let StmtKind::Loop(lp) = &output.program.statements[0].kind else {
        panic!("expected a loop, got {:?}", output.program.statements[0]);
    };
    assert_eq!(lp.source.name.as_str(), "items");
    assert_eq!(lp.element.name.as_str(), "item");
    assert_eq!(lp.index.as_ref().map(|i| i.name.as_str()), Some("n"));
    assert!(lp.body.statements.is_empty());
}

#[test]
fn empty_program() {
    let output = parse_source("  // only a comment\n");
    assert!(!output.has_errors());
    assert!(output.program.statements.is_empty());
}

#[test]
fn statement_spans_cover_the_source() {
    let output = parse_source("var x = 5;\nx");
    let spans: Vec<Span> = output.program.statements.iter().map(|s| s.span).collect();
    assert_eq!(spans, vec![Span::new(0, 10), Span::new(11, 12)]);
}
