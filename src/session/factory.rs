use super::{AfterCommitHook, HookRegistry, Session};
use crate::store::Store;

/// Produces sessions over a shared store.
///
/// Hooks registered on the factory are attached to every session it creates
/// from then on.
pub struct SessionFactory<S: Store + Clone> {
    store: S,
    hooks: Vec<AfterCommitHook>,
}

impl<S: Store + Clone> SessionFactory<S> {
    pub fn new(store: S) -> Self {
        SessionFactory {
            store,
            hooks: Vec::new(),
        }
    }

    pub fn session(&self) -> Session<S> {
        Session::with_hooks(self.store.clone(), self.hooks.clone())
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn hook_count(&self) -> usize {
        self.hooks.len()
    }
}

impl<S: Store + Clone> HookRegistry for SessionFactory<S> {
    fn on_after_commit(&mut self, hook: AfterCommitHook) {
        self.hooks.push(hook);
    }
}
