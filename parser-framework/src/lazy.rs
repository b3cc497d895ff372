use crate::context::ParseContext;
use crate::outcome::ParseOutcome;
use crate::traits::Parser;
use std::fmt;
use std::sync::OnceLock;

/// A parser built on first use by a factory and cached afterwards.
///
/// This is how a grammar rule refers to itself: the rule's definition can
/// contain a `Lazy` whose factory rebuilds the rule, and nothing is
/// constructed until input actually needs it. The cache is written at most
/// once, so a `Lazy` can be shared between threads.
pub struct Lazy<F, P> {
    factory: F,
    parser: OnceLock<P>,
}

impl<F, P> Lazy<F, P>
where
    F: Fn() -> P,
{
    pub fn new(factory: F) -> Self {
        Self {
            factory,
            parser: OnceLock::new(),
        }
    }

    /// Returns the cached parser, building it if needed.
    pub fn get(&self) -> &P {
        self.parser.get_or_init(|| {
            log_trace!("lazy: building deferred parser");
            (self.factory)()
        })
    }

    /// Returns true once the factory has run.
    pub fn is_built(&self) -> bool {
        self.parser.get().is_some()
    }
}

impl<F: Clone, P> Clone for Lazy<F, P> {
    /// The clone starts unbuilt.
    fn clone(&self) -> Self {
        Self {
            factory: self.factory.clone(),
            parser: OnceLock::new(),
        }
    }
}

impl<F, P> fmt::Debug for Lazy<F, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Lazy")
            .field("built", &self.parser.get().is_some())
            .finish_non_exhaustive()
    }
}

impl<'input, F, P> Parser<'input> for Lazy<F, P>
where
    F: Fn() -> P,
    P: Parser<'input>,
{
    type Output = P::Output;

    fn parse(&self, context: ParseContext<'input>) -> ParseOutcome<'input, P::Output> {
        self.get().parse(context)
    }
}

/// Builds a [`Lazy`] parser from `factory`.
pub fn lazy<F, P>(factory: F) -> Lazy<F, P>
where
    F: Fn() -> P,
{
    Lazy::new(factory)
}
