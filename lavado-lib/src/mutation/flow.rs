//! Mutation flow with pending guards and notifications.

use std::marker::PhantomData;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use super::notify::Notifier;
use super::store::EntityStore;
use crate::error::MutationError;
use crate::model::Entity;

/// Kind of mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Create,
    Update,
    Delete,
}

impl Operation {
    pub fn name(self) -> &'static str {
        match self {
            Operation::Create => "create",
            Operation::Update => "update",
            Operation::Delete => "delete",
        }
    }

    /// Infinitive used in failure messages.
    fn verb(self) -> &'static str {
        match self {
            Operation::Create => "crear",
            Operation::Update => "actualizar",
            Operation::Delete => "borrar",
        }
    }
}

/// Marks an operation in flight; clears the flag when dropped.
struct PendingGuard<'a>(&'a AtomicBool);

impl<'a> PendingGuard<'a> {
    fn acquire(flag: &'a AtomicBool, operation: Operation) -> Result<Self, MutationError> {
        if flag.swap(true, Ordering::AcqRel) {
            log::debug!("{} already in progress, ignoring", operation.name());
            return Err(MutationError::Pending {
                operation: operation.name(),
            });
        }
        Ok(Self(flag))
    }
}

impl Drop for PendingGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

/// Runs create/update/delete for one entity kind against a store.
///
/// Each operation kind allows one request in flight; a second request of the
/// same kind while the first is pending is refused with
/// [`MutationError::Pending`] and nothing is sent.
pub struct MutationFlow<E, S> {
    store: S,
    notifier: Arc<dyn Notifier>,
    creating: AtomicBool,
    updating: AtomicBool,
    deleting: AtomicBool,
    _entity: PhantomData<fn() -> E>,
}

impl<E, S> MutationFlow<E, S>
where
    E: Entity + Send + Sync,
    E::Key: Send + Sync,
    S: EntityStore<E>,
{
    pub fn new(store: S, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            store,
            notifier,
            creating: AtomicBool::new(false),
            updating: AtomicBool::new(false),
            deleting: AtomicBool::new(false),
            _entity: PhantomData,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    fn flag(&self, operation: Operation) -> &AtomicBool {
        match operation {
            Operation::Create => &self.creating,
            Operation::Update => &self.updating,
            Operation::Delete => &self.deleting,
        }
    }

    /// Whether an operation of this kind is in flight.
    pub fn is_pending(&self, operation: Operation) -> bool {
        self.flag(operation).load(Ordering::Acquire)
    }

    fn report_failure(&self, operation: Operation, error: &MutationError) {
        log::error!("{} {} failed: {}", E::KIND.noun(), operation.name(), error);
        self.notifier
            .error(&E::KIND.failure_message(operation.verb()));
    }

    /// Validate and create a record.
    ///
    /// Invalid forms are returned without contacting the store or notifying;
    /// the form shows the field errors itself.
    pub async fn create(&self, record: &E) -> Result<E, MutationError> {
        record.validate().into_result()?;
        let _guard = PendingGuard::acquire(self.flag(Operation::Create), Operation::Create)?;
        match self.store.create(record).await {
            Ok(created) => {
                self.notifier
                    .success(&E::KIND.created_message(&created.title()));
                Ok(created)
            }
            Err(err) => {
                let err = MutationError::from(err);
                self.report_failure(Operation::Create, &err);
                Err(err)
            }
        }
    }

    /// Validate and update a record.
    pub async fn update(&self, record: &E) -> Result<E, MutationError> {
        record.validate().into_result()?;
        let _guard = PendingGuard::acquire(self.flag(Operation::Update), Operation::Update)?;
        match self.store.update(record).await {
            Ok(updated) => {
                self.notifier
                    .success(&E::KIND.updated_message(&updated.title()));
                Ok(updated)
            }
            Err(err) => {
                let err = MutationError::from(err);
                self.report_failure(Operation::Update, &err);
                Err(err)
            }
        }
    }

    /// Delete a record.
    pub async fn delete(&self, record: &E) -> Result<(), MutationError> {
        let _guard = PendingGuard::acquire(self.flag(Operation::Delete), Operation::Delete)?;
        match self.store.delete(&record.key()).await {
            Ok(()) => {
                self.notifier
                    .success(&E::KIND.deleted_message(&record.title()));
                Ok(())
            }
            Err(err) => {
                let err = MutationError::from(err);
                self.report_failure(Operation::Delete, &err);
                Err(err)
            }
        }
    }
}
