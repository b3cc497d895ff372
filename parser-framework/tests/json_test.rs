//! 集成测试：用公开接口搭建一个小型 JSON 解析器

use parser_framework::{
    between, choice, integer, lazy, literal, one_char, parse_complete, quoted_text, skip_spaces,
    BoxedParser, ParseError, Parser, Position,
};

#[derive(Debug, Clone, PartialEq)]
enum Json {
    Null,
    Bool(bool),
    Number(i64),
    Str(String),
    Array(Vec<Json>),
    Object(Vec<(String, Json)>),
}

fn token<'input, P>(parser: P) -> impl Parser<'input, Output = P::Output> + Clone + Send + Sync
where
    P: Parser<'input> + Clone + Send + Sync,
{
    skip_spaces()
        .then_skip_left(parser)
        .then_skip_right(skip_spaces())
}

fn value<'input>() -> BoxedParser<'input, Json> {
    let null = literal("null").map(|_| Json::Null);
    let boolean = literal("true")
        .map(|_| Json::Bool(true))
        .or(literal("false").map(|_| Json::Bool(false)));
    let number = one_char('-')
        .optional()
        .pair(integer())
        .map(|(sign, n)| Json::Number(if sign.is_some() { -n } else { n }));
    let string = quoted_text('"').map(Json::Str);

    let array = between(
        token(one_char('[')),
        lazy(value)
            .separated_by(token(one_char(',')), false)
            .optional(),
        token(one_char(']')),
    )
    .map(|(_, items, _)| Json::Array(items.unwrap_or_default()));

    let member = token(quoted_text('"'))
        .then_skip_right(token(one_char(':')))
        .pair(lazy(value));
    let object = between(
        token(one_char('{')),
        member.separated_by(token(one_char(',')), false).optional(),
        token(one_char('}')),
    )
    .map(|(_, members, _)| Json::Object(members.unwrap_or_default()));

    token(choice(vec![
        null.boxed(),
        boolean.boxed(),
        number.boxed(),
        string.boxed(),
        array.boxed(),
        object.boxed(),
    ]))
    .boxed()
}

fn parse_json(text: &str) -> Result<Json, ParseError> {
    parse_complete(&value(), text)
}

#[test]
fn test_scalars() {
    assert_eq!(parse_json("null").unwrap(), Json::Null);
    assert_eq!(parse_json(" true ").unwrap(), Json::Bool(true));
    assert_eq!(parse_json("false").unwrap(), Json::Bool(false));
    assert_eq!(parse_json("-42").unwrap(), Json::Number(-42));
    assert_eq!(parse_json("\"hi\"").unwrap(), Json::Str("hi".to_string()));
}

#[test]
fn test_empty_containers() {
    assert_eq!(parse_json("[]").unwrap(), Json::Array(Vec::new()));
    assert_eq!(parse_json("{ }").unwrap(), Json::Object(Vec::new()));
}

#[test]
fn test_nested_document() {
    let text = r#"
        {
            "name": "parser \"framework\"",
            "tags": [1, -2, true, null],
            "nested": { "deep": [[], [3]] }
        }
    "#;
    let expected = Json::Object(vec![
        (
            "name".to_string(),
            Json::Str("parser \"framework\"".to_string()),
        ),
        (
            "tags".to_string(),
            Json::Array(vec![
                Json::Number(1),
                Json::Number(-2),
                Json::Bool(true),
                Json::Null,
            ]),
        ),
        (
            "nested".to_string(),
            Json::Object(vec![(
                "deep".to_string(),
                Json::Array(vec![
                    Json::Array(Vec::new()),
                    Json::Array(vec![Json::Number(3)]),
                ]),
            )]),
        ),
    ]);
    assert_eq!(parse_json(text).unwrap(), expected);
}

#[test]
fn test_unclosed_array() {
    match parse_json("[1, 2") {
        Err(ParseError::Failed { position, .. }) => assert_eq!(position.offset, 5),
        other => panic!("unexpected result: {:?}", other),
    }
}

#[test]
fn test_trailing_garbage() {
    let err = parse_json("[1] x").unwrap_err();
    assert_eq!(
        err,
        ParseError::TrailingInput {
            remaining: "x".to_string(),
            position: Position::at(0, 4, 4),
        }
    );
}

#[test]
fn test_trailing_comma_rejected() {
    assert!(parse_json("[1, 2,]").is_err());
}
