//! Cancellable Local Tasks
//!
//! A slot for at most one in-flight future per component action. Spawning
//! through the slot aborts the task it supersedes. An owned slot also aborts
//! its task when the owning component is torn down; a detached slot lets the
//! task run to completion so a result the backend already committed still
//! reaches whoever outlives the component.

use std::future::Future;

use futures_util::future::{AbortHandle, Abortable};
use leptos::prelude::*;
use leptos::task::spawn_local;

#[derive(Clone, Copy)]
pub struct TaskSlot {
    handle: StoredValue<Option<AbortHandle>>,
}

impl TaskSlot {
    /// Aborts on teardown. Must be called inside a component so cleanup is
    /// tied to its owner.
    pub fn new() -> Self {
        let slot = Self::detached();
        let handle = slot.handle;
        on_cleanup(move || {
            if let Some(running) = handle.try_update_value(Option::take).flatten() {
                running.abort();
            }
        });
        slot
    }

    /// Supersede only. The running task survives the owning component.
    pub fn detached() -> Self {
        Self {
            handle: StoredValue::new(None),
        }
    }

    /// Run `fut` on the local executor, aborting whatever this slot was running.
    pub fn spawn<F>(&self, fut: F)
    where
        F: Future<Output = ()> + 'static,
    {
        let (abort, registration) = AbortHandle::new_pair();
        if let Some(previous) = self.handle.try_update_value(|h| h.replace(abort)).flatten() {
            previous.abort();
        }
        spawn_local(async move {
            if Abortable::new(fut, registration).await.is_err() {
                tracing::debug!("task aborted");
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use any_spawner::Executor;
    use tokio::sync::oneshot;
    use tokio::task::LocalSet;

    use super::*;

    pub(crate) async fn settle() {
        for _ in 0..8 {
            tokio::task::yield_now().await;
        }
    }

    /// Spawn a gated task, tear the owner down, then open the gate.
    /// Returns whether the task ran to the end.
    async fn finished_after_teardown(make: fn() -> TaskSlot) -> bool {
        let _ = Executor::init_tokio();
        let finished = Rc::new(Cell::new(false));
        let (release, gate) = oneshot::channel::<()>();

        let owner = Owner::new();
        let slot = owner.with(make);
        let done = Rc::clone(&finished);
        slot.spawn(async move {
            if gate.await.is_ok() {
                done.set(true);
            }
        });
        settle().await;

        owner.cleanup();
        let _ = release.send(());
        settle().await;
        finished.get()
    }

    #[tokio::test]
    async fn test_owned_slot_aborts_on_teardown() {
        LocalSet::new()
            .run_until(async { assert!(!finished_after_teardown(TaskSlot::new).await) })
            .await;
    }

    #[tokio::test]
    async fn test_detached_slot_outlives_owner() {
        LocalSet::new()
            .run_until(async { assert!(finished_after_teardown(TaskSlot::detached).await) })
            .await;
    }

    #[tokio::test]
    async fn test_spawn_supersedes_running_task() {
        LocalSet::new()
            .run_until(async {
                let _ = Executor::init_tokio();
                let owner = Owner::new();
                let slot = owner.with(TaskSlot::detached);
                let first = Rc::new(Cell::new(false));
                let second = Rc::new(Cell::new(false));
                let (release, gate) = oneshot::channel::<()>();

                let done = Rc::clone(&first);
                slot.spawn(async move {
                    if gate.await.is_ok() {
                        done.set(true);
                    }
                });
                settle().await;

                let done = Rc::clone(&second);
                slot.spawn(async move { done.set(true) });
                let _ = release.send(());
                settle().await;

                assert!(!first.get());
                assert!(second.get());
            })
            .await;
    }
}

#[cfg(test)]
pub(crate) use tests::settle;
