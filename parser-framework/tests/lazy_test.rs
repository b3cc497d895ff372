use parser_framework::{
    between, lazy, letter_or_digit, literal, one_char, parse, parse_complete, BoxedParser, Parser,
};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;

#[derive(Debug, Clone, PartialEq)]
enum Tree {
    Leaf(char),
    List(Vec<Tree>),
}

/// `tree := letter | '[' (tree (',' tree)*)? ']'`
fn tree<'input>() -> BoxedParser<'input, Tree> {
    let leaf = letter_or_digit().map(Tree::Leaf);
    let items = lazy(tree)
        .separated_by(one_char(','), false)
        .optional()
        .map(|items| items.unwrap_or_default());
    let list = between(one_char('['), items, one_char(']')).map(|(_, items, _)| Tree::List(items));
    leaf.or(list).boxed()
}

#[test]
fn test_factory_not_called_until_used() {
    let builds = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&builds);
    let parser = lazy(move || {
        counter.fetch_add(1, Ordering::SeqCst);
        literal("ab")
    });

    assert!(!parser.is_built());
    assert_eq!(builds.load(Ordering::SeqCst), 0);

    assert_eq!(parse(&parser, "abc").unwrap().value, "ab");
    assert!(parse(&parser, "xyz").is_err());
    assert_eq!(parse(&parser, "ab").unwrap().value, "ab");

    assert!(parser.is_built());
    assert_eq!(builds.load(Ordering::SeqCst), 1);
}

#[test]
fn test_clone_starts_unbuilt() {
    let builds = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&builds);
    let parser = lazy(move || {
        counter.fetch_add(1, Ordering::SeqCst);
        one_char('x')
    });
    parse(&parser, "x").unwrap();

    let copy = parser.clone();
    assert!(!copy.is_built());
    parse(&copy, "x").unwrap();
    assert_eq!(builds.load(Ordering::SeqCst), 2);
}

#[test]
fn test_built_once_across_threads() {
    let builds = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&builds);
    let parser = lazy(move || {
        counter.fetch_add(1, Ordering::SeqCst);
        literal("go")
    });

    thread::scope(|scope| {
        for _ in 0..8 {
            scope.spawn(|| {
                assert_eq!(parse(&parser, "gone").unwrap().value, "go");
            });
        }
    });

    assert_eq!(builds.load(Ordering::SeqCst), 1);
}

#[test]
fn test_recursive_grammar() {
    let parser = tree();
    assert_eq!(parse_complete(&parser, "a").unwrap(), Tree::Leaf('a'));
    assert_eq!(parse_complete(&parser, "[]").unwrap(), Tree::List(Vec::new()));
    assert_eq!(
        parse_complete(&parser, "[a,[b,[c]],d]").unwrap(),
        Tree::List(vec![
            Tree::Leaf('a'),
            Tree::List(vec![Tree::Leaf('b'), Tree::List(vec![Tree::Leaf('c')])]),
            Tree::Leaf('d'),
        ])
    );
}

#[test]
fn test_recursive_grammar_failure() {
    let parser = tree();
    assert!(parse_complete(&parser, "[a,[b]").is_err());
    assert!(parse_complete(&parser, "[a,,b]").is_err());
}

#[test]
fn test_shared_grammar_across_threads() {
    let parser = tree();
    thread::scope(|scope| {
        let handles: Vec<_> = ["[a]", "[[b]]", "[c,d]"]
            .into_iter()
            .map(|input| {
                let parser = parser.clone();
                scope.spawn(move || parse_complete(&parser, input).is_ok())
            })
            .collect();
        for handle in handles {
            assert!(handle.join().unwrap());
        }
    });
}
