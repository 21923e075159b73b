use core::fmt;
use std::sync::Arc;

/// Named boolean predicate over a state.
///
/// Predicates are cheap to clone; the evaluation closure is shared. Rule
/// definitions built from them can therefore be handed to multiple
/// controllers without copying domain logic.
pub struct Predicate<S> {
    name: &'static str,
    eval: Arc<dyn Fn(&S) -> bool + Send + Sync>,
}

impl<S> Predicate<S> {
    pub fn new(name: &'static str, eval: impl Fn(&S) -> bool + Send + Sync + 'static) -> Self {
        Self {
            name,
            eval: Arc::new(eval),
        }
    }

    /// Constant-true predicate.
    pub fn always() -> Self {
        Self::new("always", |_| true)
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn holds(&self, state: &S) -> bool {
        (self.eval)(state)
    }
}

impl<S> Clone for Predicate<S> {
    fn clone(&self) -> Self {
        Self {
            name: self.name,
            eval: Arc::clone(&self.eval),
        }
    }
}

impl<S> fmt::Debug for Predicate<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Predicate").field(&self.name).finish()
    }
}
