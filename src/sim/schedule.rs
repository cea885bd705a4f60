//! Tick-based one-shot task queue
//!
//! Delayed events (target respawn) are stored as `(fire_at_tick, action)`
//! pairs sorted by tick and drained from the simulation loop, so timing is
//! part of the deterministic state rather than a platform timer.

use serde::{Deserialize, Serialize};

/// Deferred simulation actions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScheduledAction {
    /// Make the popped target visible again at its home position
    RespawnTarget,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledTask {
    pub fire_at_tick: u64,
    pub action: ScheduledAction,
}

/// Pending tasks, ordered by `fire_at_tick` (FIFO among equal ticks)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TaskQueue {
    tasks: Vec<ScheduledTask>,
}

impl TaskQueue {
    pub fn new() -> Self {
        Self { tasks: Vec::new() }
    }

    /// Schedule `action` at `fire_at_tick`.
    ///
    /// An action already pending is replaced, so one hide event yields at
    /// most one respawn.
    pub fn schedule(&mut self, fire_at_tick: u64, action: ScheduledAction) {
        self.tasks.retain(|t| t.action != action);
        let pos = self.tasks.partition_point(|t| t.fire_at_tick <= fire_at_tick);
        self.tasks.insert(pos, ScheduledTask { fire_at_tick, action });
    }

    /// Remove and return every task due at or before `now`
    pub fn drain_due(&mut self, now: u64) -> Vec<ScheduledAction> {
        let due = self.tasks.partition_point(|t| t.fire_at_tick <= now);
        self.tasks.drain(..due).map(|t| t.action).collect()
    }

    /// Drop all pending tasks (restart, terminal states)
    pub fn cancel_all(&mut self) {
        if !self.tasks.is_empty() {
            log::debug!("Cancelled {} scheduled task(s)", self.tasks.len());
        }
        self.tasks.clear();
    }

    pub fn is_pending(&self, action: ScheduledAction) -> bool {
        self.tasks.iter().any(|t| t.action == action)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drain_due_only() {
        let mut queue = TaskQueue::new();
        queue.schedule(10, ScheduledAction::RespawnTarget);
        assert!(queue.drain_due(9).is_empty());
        assert_eq!(queue.drain_due(10), vec![ScheduledAction::RespawnTarget]);
        assert!(queue.is_empty());
        // fires at most once
        assert!(queue.drain_due(11).is_empty());
    }

    #[test]
    fn test_reschedule_replaces() {
        let mut queue = TaskQueue::new();
        queue.schedule(10, ScheduledAction::RespawnTarget);
        queue.schedule(20, ScheduledAction::RespawnTarget);
        assert_eq!(queue.len(), 1);
        assert!(queue.drain_due(15).is_empty());
        assert_eq!(queue.drain_due(20).len(), 1);
    }

    #[test]
    fn test_cancel_all() {
        let mut queue = TaskQueue::new();
        queue.schedule(5, ScheduledAction::RespawnTarget);
        assert!(queue.is_pending(ScheduledAction::RespawnTarget));
        queue.cancel_all();
        assert!(!queue.is_pending(ScheduledAction::RespawnTarget));
        assert!(queue.drain_due(100).is_empty());
    }
}
