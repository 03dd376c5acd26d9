use super::{AfterCommitHook, HookRegistry, SessionError, SessionInfo, UnitOfWork};
use crate::store::Store;

/// Where a session is in its current transaction attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionState {
    /// Accepting changes
    #[default]
    Open,
    /// Applying staged records to the store
    Committing,
    /// The last commit was durable and its hooks ran
    Committed,
    /// The last commit was refused; staged records and scratch space were discarded
    Failed,
}

/// A unit of work over a [`Store`].
///
/// Records are staged with [`add`](Self::add) and written by
/// [`commit`](Self::commit). After a durable commit every registered
/// after-commit hook runs, in registration order, before `commit` returns.
/// A session can be committed repeatedly; each commit starts a new attempt.
pub struct Session<S: Store> {
    store: S,
    staged: Vec<S::Record>,
    info: SessionInfo,
    state: SessionState,
    hooks: Vec<AfterCommitHook>,
}

impl<S: Store> Session<S> {
    pub fn new(store: S) -> Self {
        Self::with_hooks(store, Vec::new())
    }

    pub(crate) fn with_hooks(store: S, hooks: Vec<AfterCommitHook>) -> Self {
        Session {
            store,
            staged: Vec::new(),
            info: SessionInfo::new(),
            state: SessionState::Open,
            hooks,
        }
    }

    /// Stage a record for the next commit.
    pub fn add(&mut self, record: S::Record) {
        self.staged.push(record);
        self.state = SessionState::Open;
    }

    pub fn pending_len(&self) -> usize {
        self.staged.len()
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Write staged records, then run the after-commit hooks.
    ///
    /// If the store refuses the batch, the staged records and the scratch
    /// space are dropped, no hook runs, and the store's error is returned.
    /// A hook error is returned after the data is already durable; hooks
    /// registered after the failing one do not run, so whatever they would
    /// have drained stays in the scratch space until the next successful
    /// commit (or a reset). With a single draining hook this cannot happen.
    pub fn commit(&mut self) -> Result<(), SessionError> {
        self.state = SessionState::Committing;
        let staged = std::mem::take(&mut self.staged);

        if let Err(err) = self.store.apply(&staged) {
            tracing::debug!(error = %err, discarded = staged.len(), "commit refused");
            self.info.clear();
            self.state = SessionState::Failed;
            return Err(err.into());
        }
        self.state = SessionState::Committed;

        for hook in &self.hooks {
            hook(&mut self.info).map_err(SessionError::AfterCommit)?;
        }
        Ok(())
    }

    /// Abandon the current attempt: staged records and scratch space are dropped.
    pub fn rollback(&mut self) {
        self.reset();
    }

    /// Return the session to a fresh state with nothing staged and an empty
    /// scratch space. Registered hooks stay.
    pub fn reset(&mut self) {
        self.staged.clear();
        self.info.clear();
        self.state = SessionState::Open;
    }
}

impl<S: Store> UnitOfWork for Session<S> {
    fn info(&self) -> &SessionInfo {
        &self.info
    }

    fn info_mut(&mut self) -> &mut SessionInfo {
        &mut self.info
    }
}

impl<S: Store> HookRegistry for Session<S> {
    fn on_after_commit(&mut self, hook: AfterCommitHook) {
        self.hooks.push(hook);
    }
}
