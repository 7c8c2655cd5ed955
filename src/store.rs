// In-memory task store: the only mutation surface for the task list

use crate::filter::FilterState;
use crate::id::IdSequence;
use crate::seed::SeedTask;
use crate::task::{Change, Field, FieldValue, Task, TaskId};
use tracing::{debug, info};

/// Ordered task collection plus the active display filter
///
/// Mutations happen in place. Every mutation that actually changes the
/// collection advances [`TaskStore::revision`], so callers can detect changes
/// by comparing revisions instead of comparing task lists.
#[derive(Debug, Clone, Default)]
pub struct TaskStore {
    tasks: Vec<Task>,
    filter: FilterState,
    ids: IdSequence,
    revision: u64,
}

impl TaskStore {
    /// Create an empty store showing all tasks
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store populated from an initial task list
    ///
    /// Ids are assigned in seed order starting from 1.
    pub fn with_seed<'a, I>(seed: I, filter: FilterState) -> Self
    where
        I: IntoIterator<Item = &'a SeedTask>,
    {
        let mut store = Self {
            filter,
            ..Self::default()
        };
        store.seed(seed);
        store
    }

    /// Replace the collection with a fresh one built from seed records
    ///
    /// The id sequence restarts, so the first seeded task gets id 1.
    pub fn seed<'a, I>(&mut self, seed: I)
    where
        I: IntoIterator<Item = &'a SeedTask>,
    {
        self.ids.reset();
        let tasks: Vec<Task> = seed.into_iter().map(|s| self.create(&s.description)).collect();

        info!(count = tasks.len(), "Seeded task store");
        self.tasks = tasks;
        self.bump();
    }

    /// Tasks in display order
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Change counter, advanced on every effective mutation
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn filter(&self) -> FilterState {
        self.filter
    }

    pub fn set_filter(&mut self, filter: FilterState) {
        if self.filter != filter {
            debug!(%filter, "Filter changed");
            self.filter = filter;
            self.bump();
        }
    }

    /// Look up a task by id
    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.find_index(id).map(|index| &self.tasks[index])
    }

    // ========================================================================
    // Creation
    // ========================================================================

    /// Allocate the next id and build a task with default flags
    ///
    /// The task is not appended; see [`TaskStore::add_task`]. The description
    /// is taken as given, including empty text.
    pub fn create(&mut self, description: &str) -> Task {
        Task::new(self.ids.next_id(), description)
    }

    /// Create a task and append it to the end of the collection
    pub fn add_task(&mut self, description: &str) -> TaskId {
        let task = self.create(description);
        let id = task.id;
        debug!(id, "Adding task");

        self.tasks.push(task);
        self.bump();
        id
    }

    // ========================================================================
    // Field mutation
    // ========================================================================

    /// Position of a task in the collection
    pub fn find_index(&self, id: TaskId) -> Option<usize> {
        self.tasks.iter().position(|task| task.id == id)
    }

    /// Rewrite one field of one task
    ///
    /// When `guard` is given and the field currently holds that value the
    /// mutation is skipped. Unknown ids and changes that do not fit the field
    /// are no-ops. Returns whether the collection changed.
    pub fn set_property(&mut self, field: Field, id: TaskId, change: Change, guard: Option<FieldValue>) -> bool {
        let Some(index) = self.find_index(id) else {
            debug!(id, %field, "Task not found, ignoring");
            return false;
        };

        let task = &mut self.tasks[index];
        if let Some(guard) = guard
            && task.get(field) == guard
        {
            debug!(id, %field, %guard, "Field already at guard value, skipping");
            return false;
        }

        if !task.apply(field, &change) {
            return false;
        }

        debug!(id, %field, "Task updated");
        self.bump();
        true
    }

    /// Replace a task's description
    pub fn change_description(&mut self, description: &str, id: TaskId) -> bool {
        self.set_property(
            Field::Description,
            id,
            Change::Value(FieldValue::Text(description.to_string())),
            None,
        )
    }

    pub fn toggle_done(&mut self, id: TaskId) -> bool {
        self.set_property(Field::IsDone, id, Change::Toggle, None)
    }

    pub fn toggle_editing(&mut self, id: TaskId) -> bool {
        self.set_property(Field::IsEditing, id, Change::Toggle, None)
    }

    /// Leave edit mode
    ///
    /// Only flips a task that is currently being edited, so repeated calls
    /// (several blur events for one edit) leave it closed.
    pub fn finish_editing(&mut self, id: TaskId) -> bool {
        self.set_property(Field::IsEditing, id, Change::Toggle, Some(FieldValue::Bool(false)))
    }

    /// Advance a task's timer by one second
    pub fn tick(&mut self, id: TaskId) -> bool {
        self.set_property(Field::Seconds, id, Change::Increment, None)
    }

    // ========================================================================
    // Removal
    // ========================================================================

    /// Remove a task; returns whether it existed
    pub fn delete_task(&mut self, id: TaskId) -> bool {
        match self.find_index(id) {
            Some(index) => {
                self.tasks.remove(index);
                debug!(id, "Deleted task");
                self.bump();
                true
            }
            None => {
                debug!(id, "Task not found, nothing to delete");
                false
            }
        }
    }

    /// Remove every finished task; returns how many were removed
    pub fn clear_completed(&mut self) -> usize {
        let before = self.tasks.len();
        self.tasks.retain(|task| !task.is_done);

        let removed = before - self.tasks.len();
        if removed > 0 {
            debug!(removed, "Cleared completed tasks");
            self.bump();
        }
        removed
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// Number of unfinished tasks
    pub fn count_active(&self) -> usize {
        self.tasks.iter().filter(|task| !task.is_done).count()
    }

    /// Tasks visible under a filter, in display order
    pub fn visible_tasks(&self, filter: FilterState) -> impl Iterator<Item = &Task> + '_ {
        self.tasks.iter().filter(move |task| filter.matches(task))
    }

    /// Tasks visible under the store's current filter
    pub fn visible(&self) -> impl Iterator<Item = &Task> + '_ {
        self.visible_tasks(self.filter)
    }

    fn bump(&mut self) {
        self.revision += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded(descriptions: &[&str]) -> TaskStore {
        let seed: Vec<SeedTask> = descriptions.iter().map(|d| SeedTask::new(*d)).collect();
        TaskStore::with_seed(&seed, FilterState::All)
    }

    fn ids<'a>(tasks: impl Iterator<Item = &'a Task>) -> Vec<TaskId> {
        tasks.map(|task| task.id).collect()
    }

    #[test]
    fn test_create_keeps_description_and_increments_ids() {
        let mut store = TaskStore::new();

        let first = store.create("buy milk");
        let second = store.create("walk dog");

        assert_eq!(first.description, "buy milk");
        assert_eq!(first.id, 1);
        assert!(second.id > first.id);
        assert!(store.is_empty(), "create must not append");
    }

    #[test]
    fn test_create_accepts_empty_description() {
        let mut store = TaskStore::new();

        let task = store.create("");
        assert_eq!(task.description, "");

        let id = store.add_task("");
        assert_eq!(store.get(id).unwrap().description, "");
    }

    #[test]
    fn test_add_task_appends_last() {
        let mut store = seeded(&["buy milk"]);

        let id = store.add_task("walk dog");

        assert_eq!(store.len(), 2);
        assert_eq!(store.tasks().last().unwrap().id, id);
        assert_eq!(id, 2);
    }

    #[test]
    fn test_seed_assigns_ids_in_order() {
        let store = seeded(&["buy milk", "walk dog"]);

        assert_eq!(ids(store.tasks().iter()), vec![1, 2]);
        assert_eq!(store.tasks()[0].description, "buy milk");
        assert_eq!(store.tasks()[1].description, "walk dog");
    }

    #[test]
    fn test_reseed_restarts_ids() {
        let mut store = seeded(&["a", "b", "c"]);
        store.add_task("d");

        store.seed(&[SeedTask::new("fresh")]);

        assert_eq!(store.len(), 1);
        assert_eq!(store.tasks()[0].id, 1);
        assert_eq!(store.add_task("next"), 2);
    }

    #[test]
    fn test_find_index() {
        let store = seeded(&["a", "b", "c"]);

        assert_eq!(store.find_index(1), Some(0));
        assert_eq!(store.find_index(3), Some(2));
        assert_eq!(store.find_index(42), None);
    }

    #[test]
    fn test_unknown_id_is_noop() {
        let mut store = seeded(&["a", "b"]);
        store.toggle_done(1);
        let before = store.tasks().to_vec();
        let revision = store.revision();

        assert!(!store.set_property(Field::IsDone, 99, Change::Toggle, None));
        assert!(!store.change_description("x", 99));
        assert!(!store.toggle_editing(99));
        assert!(!store.finish_editing(99));
        assert!(!store.tick(99));
        assert!(!store.delete_task(99));

        assert_eq!(store.tasks(), before.as_slice());
        assert_eq!(store.revision(), revision);
    }

    #[test]
    fn test_set_property_replaces_only_target() {
        let mut store = seeded(&["a", "b", "c"]);
        let before = store.tasks().to_vec();

        assert!(store.change_description("bee", 2));

        assert_eq!(store.tasks()[0], before[0]);
        assert_eq!(store.tasks()[1].description, "bee");
        assert_eq!(store.tasks()[1].id, 2);
        assert_eq!(store.tasks()[2], before[2]);
    }

    #[test]
    fn test_set_property_guard_skips_mutation() {
        let mut store = seeded(&["a"]);
        let revision = store.revision();

        let changed = store.set_property(
            Field::IsDone,
            1,
            Change::Toggle,
            Some(FieldValue::Bool(false)),
        );

        assert!(!changed);
        assert!(!store.tasks()[0].is_done);
        assert_eq!(store.revision(), revision);
    }

    #[test]
    fn test_set_property_mismatched_change_is_noop() {
        let mut store = seeded(&["a"]);
        let before = store.tasks().to_vec();

        assert!(!store.set_property(Field::Description, 1, Change::Increment, None));
        assert_eq!(store.tasks(), before.as_slice());
    }

    #[test]
    fn test_toggle_done_and_editing() {
        let mut store = seeded(&["a"]);

        assert!(store.toggle_done(1));
        assert!(store.get(1).unwrap().is_done);
        assert!(store.toggle_done(1));
        assert!(!store.get(1).unwrap().is_done);

        assert!(store.toggle_editing(1));
        assert!(store.get(1).unwrap().is_editing);
    }

    #[test]
    fn test_finish_editing_is_idempotent() {
        let mut store = seeded(&["a", "b"]);
        store.toggle_editing(1);

        assert!(store.finish_editing(1));
        let once = store.tasks().to_vec();

        assert!(!store.finish_editing(1));
        assert_eq!(store.tasks(), once.as_slice());
        assert!(!store.get(1).unwrap().is_editing);
    }

    #[test]
    fn test_finish_editing_does_not_open_closed_task() {
        let mut store = seeded(&["a"]);

        assert!(!store.finish_editing(1));
        assert!(!store.get(1).unwrap().is_editing);
    }

    #[test]
    fn test_tick_increments_seconds() {
        let mut store = seeded(&["a", "b"]);

        for _ in 0..3 {
            assert!(store.tick(2));
        }

        assert_eq!(store.get(1).unwrap().seconds, 0);
        assert_eq!(store.get(2).unwrap().seconds, 3);
    }

    #[test]
    fn test_add_then_delete_restores_collection() {
        let mut store = seeded(&["a", "b"]);
        store.toggle_done(2);
        let before = store.tasks().to_vec();

        let id = store.add_task("temporary");
        assert!(store.delete_task(id));

        assert_eq!(store.tasks(), before.as_slice());
    }

    #[test]
    fn test_delete_preserves_order() {
        let mut store = seeded(&["a", "b", "c"]);

        assert!(store.delete_task(2));

        assert_eq!(ids(store.tasks().iter()), vec![1, 3]);
    }

    #[test]
    fn test_deleted_ids_are_not_reused() {
        let mut store = seeded(&["a", "b"]);

        store.delete_task(2);
        assert_eq!(store.add_task("c"), 3);
    }

    #[test]
    fn test_clear_completed_is_idempotent() {
        let mut store = seeded(&["a", "b", "c", "d"]);
        store.toggle_done(1);
        store.toggle_done(3);

        assert_eq!(store.clear_completed(), 2);
        let once = store.tasks().to_vec();
        let revision = store.revision();

        assert_eq!(store.clear_completed(), 0);
        assert_eq!(store.tasks(), once.as_slice());
        assert_eq!(store.revision(), revision);
        assert_eq!(ids(store.tasks().iter()), vec![2, 4]);
    }

    #[test]
    fn test_count_active_matches_done_count() {
        let mut store = seeded(&["a", "b", "c"]);
        store.toggle_done(2);

        let done = store.tasks().iter().filter(|task| task.is_done).count();
        assert_eq!(store.count_active(), store.len() - done);
        assert_eq!(store.count_active(), 2);
    }

    #[test]
    fn test_visible_tasks_respects_filter() {
        let mut store = seeded(&["a", "b", "c"]);
        store.toggle_done(2);

        assert_eq!(ids(store.visible_tasks(FilterState::All)), vec![1, 2, 3]);
        assert_eq!(ids(store.visible_tasks(FilterState::Active)), vec![1, 3]);
        assert_eq!(ids(store.visible_tasks(FilterState::Completed)), vec![2]);
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn test_set_filter_drives_visible() {
        let mut store = seeded(&["a", "b"]);
        store.toggle_done(1);
        let revision = store.revision();

        store.set_filter(FilterState::Completed);
        assert_eq!(store.filter(), FilterState::Completed);
        assert_eq!(ids(store.visible()), vec![1]);
        assert_eq!(store.revision(), revision + 1);

        store.set_filter(FilterState::Completed);
        assert_eq!(store.revision(), revision + 1);
    }

    #[test]
    fn test_revision_advances_on_change() {
        let mut store = TaskStore::new();
        let start = store.revision();

        let id = store.add_task("a");
        store.tick(id);
        store.toggle_done(id);

        assert_eq!(store.revision(), start + 3);
    }

    #[test]
    fn test_buy_milk_walk_dog_scenario() {
        let mut store = seeded(&["buy milk", "walk dog"]);
        assert_eq!(ids(store.tasks().iter()), vec![1, 2]);

        store.toggle_done(1);
        assert_eq!(store.count_active(), 1);
        assert_eq!(ids(store.visible_tasks(FilterState::Completed)), vec![1]);
        assert_eq!(ids(store.visible_tasks(FilterState::Active)), vec![2]);

        store.clear_completed();
        assert_eq!(ids(store.tasks().iter()), vec![2]);

        store.delete_task(2);
        assert!(store.is_empty());
    }
}
