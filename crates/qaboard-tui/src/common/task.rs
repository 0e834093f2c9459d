//! Ids for async requests whose results may arrive out of order.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskId(pub u64);

#[derive(Debug, Default)]
pub struct TaskSeq {
    next: u64,
}

impl TaskSeq {
    pub fn next_id(&mut self) -> TaskId {
        let id = TaskId(self.next);
        self.next = self.next.wrapping_add(1);
        id
    }
}

/// Tracks the most recently issued request of one kind.
///
/// Only the result of the latest request is accepted; results of requests
/// issued before it are stale.
#[derive(Debug, Default, Clone)]
pub struct LatestTask {
    active: Option<TaskId>,
}

impl LatestTask {
    pub fn is_running(&self) -> bool {
        self.active.is_some()
    }

    pub fn start(&mut self, id: TaskId) {
        self.active = Some(id);
    }

    /// Returns true (and clears the slot) when `id` is the latest request.
    pub fn finish_if_active(&mut self, id: TaskId) -> bool {
        let ok = self.active == Some(id);
        if ok {
            self.active = None;
        }
        ok
    }
}
