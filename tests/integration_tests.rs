//! Integration tests for the TanglawPL front end

use std::fs;
use std::path::{Path, PathBuf};

use tanglaw::ast::{ElseBranch, Expr, Literal, NodeKind, Statement};
use tanglaw::diagnostics::{LexError, ParseError};
use tanglaw::lexer::{TokenCategory, TokenKind};
use tanglaw::{FrontendConfig, analyze};

fn fixtures(kind: &str) -> Vec<PathBuf> {
    let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures").join(kind);
    let mut paths: Vec<PathBuf> = fs::read_dir(&dir)
        .unwrap()
        .map(|entry| entry.unwrap().path())
        .filter(|path| path.extension().is_some_and(|e| e == "lit"))
        .collect();
    paths.sort();
    paths
}

fn analyze_str(source: &str) -> tanglaw::Analysis {
    analyze("test.lit", source, &FrontendConfig::default())
}

/// Test that all valid fixtures lex and parse without diagnostics
#[test]
fn test_valid_fixtures() {
    let paths = fixtures("valid");
    assert!(!paths.is_empty(), "no valid fixtures found");

    for path in paths {
        let source = fs::read_to_string(&path).unwrap();
        let analysis = analyze(&path.to_string_lossy(), &source, &FrontendConfig::default());
        let rendered: Vec<String> = analysis.diagnostics().iter().map(|d| d.render()).collect();
        assert!(
            rendered.is_empty(),
            "{} should be clean, got:\n{}",
            path.display(),
            rendered.join("\n")
        );
        assert!(analysis.valid_program().is_some());
    }
}

/// Test that all invalid fixtures report at least one diagnostic
#[test]
fn test_invalid_fixtures() {
    let paths = fixtures("invalid");
    assert!(!paths.is_empty(), "no invalid fixtures found");

    for path in paths {
        let source = fs::read_to_string(&path).unwrap();
        let analysis = analyze(&path.to_string_lossy(), &source, &FrontendConfig::default());
        assert!(analysis.has_errors(), "{} should report errors", path.display());
        assert!(analysis.valid_program().is_none());
    }
}

#[test]
fn test_invalid_fixture_kinds() {
    let expected = [
        ("missing_paren.lit", "Missing Closing Parenthesis"),
        ("type_mismatch.lit", "Type Mismatch"),
        ("unclosed_string.lit", "Unclosed String Literal"),
    ];
    for (name, kind) in expected {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/invalid").join(name);
        let source = fs::read_to_string(&path).unwrap();
        let analysis = analyze(name, &source, &FrontendConfig::default());
        let first = analysis.diagnostics().into_iter().next().unwrap();
        assert_eq!(first.name(), kind, "{name}");
    }
}

#[test]
fn test_integer_literal_is_one_token() {
    let analysis = analyze_str("-42");
    let kinds: Vec<_> = analysis.tokens.iter().map(|t| t.kind.clone()).collect();
    assert_eq!(kinds, [TokenKind::Integer(-42), TokenKind::Eof]);
}

#[test]
fn test_two_decimal_points_is_invalid_number() {
    let analysis = analyze_str("1.2.3");
    assert!(matches!(analysis.lex_errors[..], [LexError::InvalidNumber { .. }]));
    assert!(
        analysis
            .tokens
            .iter()
            .all(|t| t.category() != TokenCategory::RealNumber && t.category() != TokenCategory::Integer)
    );
}

#[test]
fn test_operator_munching() {
    let cats = |src: &str| -> Vec<TokenCategory> {
        analyze_str(src)
            .tokens
            .iter()
            .map(|t| t.category())
            .filter(|c| *c != TokenCategory::Eof)
            .collect()
    };
    assert_eq!(cats("<<="), [TokenCategory::Assignment]);
    assert_eq!(cats("<="), [TokenCategory::Relational]);
    assert_eq!(cats("< ="), [TokenCategory::Relational, TokenCategory::Assignment]);
    assert_eq!(
        cats("5-3"),
        [TokenCategory::Integer, TokenCategory::Arithmetic, TokenCategory::Integer]
    );
}

#[test]
fn test_sign_folding_after_paren_and_assignment() {
    for src in ["(-3)", "x=-3;"] {
        let analysis = analyze_str(src);
        assert!(
            analysis.tokens.iter().any(|t| t.kind == TokenKind::Integer(-3)),
            "{src}: {:?}",
            analysis.tokens
        );
    }
}

#[test]
fn test_unclosed_string_spans_to_end() {
    let analysis = analyze_str("\"abc");
    assert!(
        !analysis
            .tokens
            .iter()
            .any(|t| t.category() == TokenCategory::StringLiteral)
    );
    match &analysis.lex_errors[..] {
        [LexError::UnclosedString { span }] => assert_eq!(span.range(), 0..4),
        other => panic!("expected one UnclosedString, got {other:?}"),
    }
}

#[test]
fn test_declaration_shape() {
    let analysis = analyze_str("int x = 5;");
    let program = analysis.valid_program().unwrap();
    let Statement::VariableDeclaration(decl) = &program.statements[0].node else {
        panic!("Expected declaration");
    };
    assert_eq!(decl.data_type.to_string(), "int");
    let d = &decl.declarators[0].node;
    assert_eq!(d.name, "x");
    assert_eq!(d.initializer.as_ref().unwrap().node, Expr::Literal(Literal::Integer(5)));
}

#[test]
fn test_if_else_shape() {
    let analysis = analyze_str(r#"if (x > 5) { println("big"); } else { println("small"); }"#);
    let program = analysis.valid_program().unwrap();
    let Statement::Conditional(cond) = &program.statements[0].node else {
        panic!("Expected conditional");
    };
    assert_eq!(cond.if_clause.node.block.statements[0].node.kind(), NodeKind::OutputStatement);
    assert!(matches!(cond.else_branch, Some(ElseBranch::Block(_))));
}

#[test]
fn test_recovery_keeps_following_declaration() {
    let analysis = analyze_str("int ;  int y = 2;");
    assert_eq!(analysis.parse_errors.len(), 1);
    let program = analysis.program.as_ref().unwrap();
    assert_eq!(program.statements.len(), 1);
}

#[test]
fn test_all_errors_are_collected() {
    let analysis = analyze_str("int a = §; int b = 'xy'; c = ; int d = \"s\";");
    assert_eq!(analysis.lex_errors.len(), 2, "{:?}", analysis.lex_errors);
    assert!(
        analysis
            .parse_errors
            .iter()
            .any(|e| matches!(e, ParseError::TypeMismatch { .. }))
    );
    assert!(analysis.diagnostics().len() >= 4);
}

#[test]
fn test_render_format() {
    let analysis = analyze("demo.lit", "int x = 1;\nx = (2;", &FrontendConfig::default());
    let rendered = analysis.diagnostics()[0].render();
    assert_eq!(
        rendered,
        "Missing Closing Parenthesis: Expected closing parenthesis.\nFile demo.lit, line 2, column 7-8"
    );
}

#[test]
fn test_render_unclosed_string_across_lines() {
    let analysis = analyze("demo.lit", "String s = \"abc\nint y = 2;", &FrontendConfig::default());
    let rendered = analysis.diagnostics()[0].render();
    assert_eq!(
        rendered,
        "Unclosed String Literal: String literal was not closed.\nFile demo.lit, line 1, column 12"
    );
}
