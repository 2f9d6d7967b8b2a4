use std::rc::Rc;

use chrono::Utc;
use log::debug;

use crate::model::task::{Task, TaskId};

/// Source of wall-clock milliseconds for task ids
pub trait Clock {
    fn now_millis(&self) -> i64;
}

/// The system clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> i64 {
        Utc::now().timestamp_millis()
    }
}

/// Hands out creation-time ids that never repeat within a session, even
/// when two tasks are created in the same millisecond or the clock steps back.
#[derive(Debug)]
pub struct IdClock<C: Clock = SystemClock> {
    clock: C,
    last: Option<i64>,
}

impl<C: Clock> IdClock<C> {
    pub fn new(clock: C) -> Self {
        IdClock { clock, last: None }
    }

    pub fn next_id(&mut self) -> TaskId {
        let now = self.clock.now_millis();
        let id = match self.last {
            Some(last) if now <= last => last + 1,
            _ => now,
        };
        self.last = Some(id);
        TaskId(id)
    }
}

impl Default for IdClock<SystemClock> {
    fn default() -> Self {
        IdClock::new(SystemClock)
    }
}

/// The canonical, ordered task collection.
///
/// Every effective mutation swaps in a freshly built snapshot and bumps the
/// revision, so a snapshot handed out earlier is never changed under its
/// holder. Lookups that miss are silent no-ops.
#[derive(Debug)]
pub struct TaskList<C: Clock = SystemClock> {
    tasks: Rc<[Task]>,
    revision: u64,
    ids: IdClock<C>,
}

impl Default for TaskList<SystemClock> {
    fn default() -> Self {
        TaskList::with_clock(SystemClock)
    }
}

impl TaskList<SystemClock> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<C: Clock> TaskList<C> {
    pub fn with_clock(clock: C) -> Self {
        TaskList {
            tasks: Rc::from(Vec::new()),
            revision: 0,
            ids: IdClock::new(clock),
        }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Shared handle to the current snapshot
    pub fn snapshot(&self) -> Rc<[Task]> {
        Rc::clone(&self.tasks)
    }

    /// Number of effective mutations so far
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn done_count(&self) -> usize {
        self.tasks.iter().filter(|t| t.done).count()
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Append a new task. Title emptiness is not checked here.
    pub fn add_task(&mut self, title: impl Into<String>) -> TaskId {
        let id = self.ids.next_id();
        let task = Task::new(id, title);
        debug!("event=task_added id={} title_len={}", id, task.title.len());
        let next: Vec<Task> = self.tasks.iter().cloned().chain([task]).collect();
        self.commit(next);
        id
    }

    /// Flip `done` for `id`. Returns false when `id` is absent.
    pub fn toggle_done(&mut self, id: TaskId) -> bool {
        let changed = self.replace_with(id, |t| Task {
            done: !t.done,
            ..t.clone()
        });
        if changed {
            debug!("event=task_toggled id={}", id);
        }
        changed
    }

    /// Remove the task with `id`. Returns false when `id` is absent.
    pub fn remove_task(&mut self, id: TaskId) -> bool {
        if self.get(id).is_none() {
            return false;
        }
        let next: Vec<Task> = self.tasks.iter().filter(|t| t.id != id).cloned().collect();
        self.commit(next);
        debug!("event=task_removed id={}", id);
        true
    }

    /// Overwrite the title of `id`. Returns false when `id` is absent.
    pub fn edit_task(&mut self, id: TaskId, new_title: impl Into<String>) -> bool {
        let new_title = new_title.into();
        let changed = self.replace_with(id, |t| Task {
            title: new_title.clone(),
            ..t.clone()
        });
        if changed {
            debug!("event=task_edited id={} title_len={}", id, new_title.len());
        }
        changed
    }

    fn replace_with(&mut self, id: TaskId, f: impl Fn(&Task) -> Task) -> bool {
        if self.get(id).is_none() {
            return false;
        }
        let next: Vec<Task> = self
            .tasks
            .iter()
            .map(|t| if t.id == id { f(t) } else { t.clone() })
            .collect();
        self.commit(next);
        true
    }

    fn commit(&mut self, next: Vec<Task>) {
        self.tasks = Rc::from(next);
        self.revision += 1;
    }
}
