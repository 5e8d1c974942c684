use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Shared flag threaded through every scheduled continuation of a timeline.
/// Cancelling is idempotent and cannot be undone.
#[derive(Clone, Debug, Default)]
pub struct CancelToken(Rc<Cell<bool>>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.set(true);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.get()
    }
}

/// Tokens of every timeline mounted on a page, so the page can tear them all
/// down at once.
#[derive(Clone, Debug, Default)]
pub struct MotionRegistry {
    tokens: Rc<RefCell<Vec<CancelToken>>>,
}

impl MotionRegistry {
    pub fn register(&self, token: CancelToken) {
        let mut tokens = self.tokens.borrow_mut();
        tokens.retain(|t| !t.is_cancelled());
        tokens.push(token);
    }

    pub fn cancel_all(&self) {
        let tokens: Vec<CancelToken> = self.tokens.borrow_mut().drain(..).collect();
        if !tokens.is_empty() {
            tracing::debug!(count = tokens.len(), "cancelling registered timelines");
        }
        for token in tokens {
            token.cancel();
        }
    }

    pub fn live(&self) -> usize {
        self.tokens
            .borrow()
            .iter()
            .filter(|t| !t.is_cancelled())
            .count()
    }
}

impl PartialEq for MotionRegistry {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.tokens, &other.tokens)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cancel_is_idempotent_and_shared_between_clones() {
        let token = CancelToken::new();
        let clone = token.clone();
        token.cancel();
        token.cancel();
        assert!(clone.is_cancelled());
    }

    #[test]
    fn registry_cancels_everything_once() {
        let registry = MotionRegistry::default();
        let a = CancelToken::new();
        let b = CancelToken::new();
        registry.register(a.clone());
        registry.register(b.clone());
        assert_eq!(registry.live(), 2);

        registry.cancel_all();
        assert!(a.is_cancelled());
        assert!(b.is_cancelled());
        assert_eq!(registry.live(), 0);

        registry.cancel_all();
        assert_eq!(registry.live(), 0);
    }

    #[test]
    fn registry_drops_already_cancelled_tokens() {
        let registry = MotionRegistry::default();
        let gone = CancelToken::new();
        registry.register(gone.clone());
        gone.cancel();
        registry.register(CancelToken::new());
        assert_eq!(registry.live(), 1);
    }
}
