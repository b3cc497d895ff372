use parser_framework::{
    failure, from_fn, literal, many_satisfy, parse, ParseContext, ParseOutcome, Parser, Position,
};

fn prop_name<'input>() -> impl Parser<'input, Output = &'input str> + Clone {
    many_satisfy(|c: char| c.is_alphanumeric() || c.is_whitespace() || c == '_')
}

#[test]
fn test_until_text_keeps_delimiter() {
    let parser = prop_name().until_text(":delimiter:", false);
    let parsed = parse(&parser, "my_json_prop :delimiter: 1234").unwrap();

    assert_eq!(parsed.value, "my_json_prop ");
    assert_eq!(parsed.context.remaining(), ":delimiter: 1234");
    assert_eq!(parsed.context.position(), Position::at(0, 13, 13));
}

#[test]
fn test_until_text_skips_delimiter() {
    let parser = prop_name().until_text(":delimiter:", true);
    let parsed = parse(&parser, "my_json_prop :delimiter: 1234").unwrap();

    assert_eq!(parsed.value, "my_json_prop ");
    assert_eq!(parsed.context.remaining(), " 1234");
    assert_eq!(parsed.context.position(), Position::at(0, 24, 24));
}

#[test]
fn test_until_text_missing_delimiter() {
    let parser = prop_name().until_text(";", true);
    let failure = parse(&parser, "no end here").unwrap_err();
    assert_eq!(failure.message, "';' not found");
    assert_eq!(failure.context.position().offset, 0);
}

#[test]
fn test_until_text_inner_sees_only_prefix() {
    // The inner parser would happily run past the delimiter on the full input.
    let parser = many_satisfy(|_| true).until_text("--", true);
    let parsed = parse(&parser, "abc--def").unwrap();
    assert_eq!(parsed.value, "abc");
    assert_eq!(parsed.context.remaining(), "def");
}

#[test]
fn test_until_text_inner_failure_is_relocated() {
    let parser = many_satisfy(|c: char| c.is_ascii_digit()).until_text(";", false);
    let failure = parse(&parser, "ab\ncd;").unwrap_err();
    assert_eq!(failure.message, "'a' does not satisfy condition");
    assert_eq!(failure.context.position().offset, 0);

    let parser = literal("ab\nc").pair(literal("x")).until_text(";", false);
    let failure = parse(&parser, "ab\ncd;").unwrap_err();
    assert_eq!(failure.context.position(), Position::at(1, 1, 4));
    assert_eq!(failure.context.remaining(), "d;");
}

#[test]
fn test_until_text_empty_prefix() {
    let parser = many_satisfy(|_| true).until_text("::", false);
    assert!(parse(&parser, "::rest").is_err());
}

#[test]
fn test_until_limit_parser() {
    let parser = many_satisfy(|c: char| c.is_alphanumeric() || c == '*')
        .until(literal("**").or(literal("__")));
    let parsed = parse(&parser, "ab*cd**12345_end").unwrap();

    assert_eq!(parsed.value, ("ab*cd", "**"));
    assert_eq!(parsed.context.remaining(), "12345_end");
}

#[test]
fn test_until_limit_then_more() {
    let parser = many_satisfy(|c: char| c.is_alphanumeric() || c == '*')
        .until(literal("**").or(literal("__")))
        .pair(many_satisfy(|c: char| c.is_ascii_digit()));
    let parsed = parse(&parser, "ab*cd**12345_end").unwrap();

    let ((letters, delimiter), digits) = parsed.value;
    assert_eq!(letters, "ab*cd");
    assert_eq!(delimiter, "**");
    assert_eq!(digits, "12345");
    assert_eq!(parsed.context.remaining(), "_end");
}

#[test]
fn test_until_limit_never_matches() {
    let parser = many_satisfy(|_| true).until(literal("**"));
    let failure = parse(&parser, "a*b*c").unwrap_err();
    assert_eq!(failure.message, "limit parser not satisfied");
}

#[test]
fn test_until_limit_at_end_of_input() {
    let parser = many_satisfy(|_| true).until(parser_framework::end_of_input());
    let parsed = parse(&parser, "everything").unwrap();
    assert_eq!(parsed.value, ("everything", ()));
    assert!(parsed.context.is_empty());
}

#[test]
fn test_until_inner_failure_outside_region() {
    // A hand-written rule that reports its failure over unrelated, longer text.
    fn elsewhere<'input>(_: ParseContext<'input>) -> ParseOutcome<'input, ()> {
        failure(ParseContext::from_text("somewhere else entirely"), "not here")
    }

    let parser = from_fn(elsewhere).until_text(";", false);
    let failure = parse(&parser, "ab;").unwrap_err();
    assert_eq!(failure.message, "not here");
    assert_eq!(failure.context.position().offset, 0);
    assert_eq!(failure.context.remaining(), "ab;");

    let parser = from_fn(elsewhere).until(literal(";"));
    let failure = parse(&parser, "ab;").unwrap_err();
    assert_eq!(failure.context.position().offset, 0);
}
