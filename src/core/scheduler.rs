//! The frame scheduler: one cooperative tick loop driving every binding.
//!
//! The host calls [`FrameScheduler::tick`] once per frame after updating
//! the scene's scroll snapshot. Tasks are grouped into scopes so that a
//! view being torn down removes exactly its own tasks; there is no
//! blanket clear that could strip another view's bindings.

use std::time::Instant;

use crate::core::scene::Scene;

/// Owner handle for a group of frame tasks. Tearing down a scope removes
/// every task registered under it and nothing else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Scope(u64);

/// Whether a task wants to keep running after this tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskStatus {
    Running,
    Finished,
}

struct Task {
    scope: Scope,
    tick: Box<dyn FnMut(&mut Scene, Instant) -> TaskStatus + Send>,
}

/// Runs registered frame tasks in registration order, once per tick.
pub struct FrameScheduler {
    tasks: Vec<Task>,
    next_scope: u64,
}

impl FrameScheduler {
    pub fn new() -> Self {
        Self {
            tasks: Vec::new(),
            next_scope: 1,
        }
    }

    /// Allocate a fresh scope.
    pub fn scope(&mut self) -> Scope {
        let scope = Scope(self.next_scope);
        self.next_scope += 1;
        scope
    }

    /// Register a per-frame task under `scope`. The task runs every tick
    /// until it returns [`TaskStatus::Finished`] or its scope is removed.
    pub fn register(
        &mut self,
        scope: Scope,
        tick: impl FnMut(&mut Scene, Instant) -> TaskStatus + Send + 'static,
    ) {
        self.tasks.push(Task {
            scope,
            tick: Box::new(tick),
        });
    }

    /// Remove every task registered under `scope`. Tasks in other scopes
    /// are untouched.
    pub fn unregister_scope(&mut self, scope: Scope) {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.scope != scope);
        let removed = before - self.tasks.len();
        if removed > 0 {
            log::debug!("scope {:?} torn down, {} tasks removed", scope, removed);
        }
    }

    /// Run all tasks against the scene at `now`, dropping the finished
    /// ones.
    pub fn tick(&mut self, scene: &mut Scene, now: Instant) {
        self.tasks
            .retain_mut(|task| (task.tick)(scene, now) == TaskStatus::Running);
    }

    /// Number of live tasks.
    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }
}

impl Default for FrameScheduler {
    fn default() -> Self {
        Self::new()
    }
}
