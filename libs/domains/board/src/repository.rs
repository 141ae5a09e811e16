use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::BoardResult;
use crate::models::{Section, Task};

/// Store trait for board persistence
///
/// This trait defines the data access interface for sections and tasks.
/// Every operation touches a single record: cross-record coordination is
/// the service's job, which is why membership mutations (`add_task_to_section`,
/// `remove_task_from_section`) are idempotent at the store level.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BoardStore: Send + Sync {
    /// Insert a new section record
    async fn insert_section(&self, section: Section) -> BoardResult<Section>;

    /// Insert a new task record
    async fn insert_task(&self, task: Task) -> BoardResult<Task>;

    /// Get a section by ID
    async fn get_section(&self, id: Uuid) -> BoardResult<Option<Section>>;

    /// Get a task by ID
    async fn get_task(&self, id: Uuid) -> BoardResult<Option<Task>>;

    /// List all sections in creation order
    async fn list_sections(&self) -> BoardResult<Vec<Section>>;

    /// List all tasks
    async fn list_tasks(&self) -> BoardResult<Vec<Task>>;

    /// Fetch the tasks for the given ids; missing ids are silently skipped
    async fn get_tasks_by_ids(&self, ids: Vec<Uuid>) -> BoardResult<Vec<Task>>;

    /// Replace a task record in full
    async fn update_task(&self, task: Task) -> BoardResult<Task>;

    /// Set the owning section on a task record; returns false if no such task
    async fn set_task_section(&self, task_id: Uuid, section_id: Uuid) -> BoardResult<bool>;

    /// Append a task id to a section's membership list if not already present;
    /// returns false if no such section
    async fn add_task_to_section(&self, section_id: Uuid, task_id: Uuid) -> BoardResult<bool>;

    /// Remove a task id from a section's membership list; a no-op when the id
    /// is not listed; returns false if no such section
    async fn remove_task_from_section(&self, section_id: Uuid, task_id: Uuid) -> BoardResult<bool>;

    /// Delete a task record; returns false if no such task
    async fn delete_task(&self, id: Uuid) -> BoardResult<bool>;

    /// Delete a section record; returns false if no such section
    async fn delete_section(&self, id: Uuid) -> BoardResult<bool>;
}

#[derive(Debug, Default)]
struct BoardState {
    sections: HashMap<Uuid, Section>,
    tasks: HashMap<Uuid, Task>,
}

/// In-memory implementation of BoardStore (for development/testing)
#[derive(Debug, Default, Clone)]
pub struct InMemoryBoardStore {
    state: Arc<RwLock<BoardState>>,
}

impl InMemoryBoardStore {
    pub fn new() -> Self {
        Self {
            state: Arc::new(RwLock::new(BoardState::default())),
        }
    }
}

#[async_trait]
impl BoardStore for InMemoryBoardStore {
    async fn insert_section(&self, section: Section) -> BoardResult<Section> {
        let mut state = self.state.write().await;
        state.sections.insert(section.id, section.clone());
        tracing::info!(section_id = %section.id, "Created section");
        Ok(section)
    }

    async fn insert_task(&self, task: Task) -> BoardResult<Task> {
        let mut state = self.state.write().await;
        state.tasks.insert(task.id, task.clone());
        tracing::info!(task_id = %task.id, "Created task");
        Ok(task)
    }

    async fn get_section(&self, id: Uuid) -> BoardResult<Option<Section>> {
        let state = self.state.read().await;
        Ok(state.sections.get(&id).cloned())
    }

    async fn get_task(&self, id: Uuid) -> BoardResult<Option<Task>> {
        let state = self.state.read().await;
        Ok(state.tasks.get(&id).cloned())
    }

    async fn list_sections(&self) -> BoardResult<Vec<Section>> {
        let state = self.state.read().await;
        let mut sections: Vec<Section> = state.sections.values().cloned().collect();
        sections.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        Ok(sections)
    }

    async fn list_tasks(&self) -> BoardResult<Vec<Task>> {
        let state = self.state.read().await;
        let mut tasks: Vec<Task> = state.tasks.values().cloned().collect();
        tasks.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        Ok(tasks)
    }

    async fn get_tasks_by_ids(&self, ids: Vec<Uuid>) -> BoardResult<Vec<Task>> {
        let state = self.state.read().await;
        Ok(ids
            .iter()
            .filter_map(|id| state.tasks.get(id).cloned())
            .collect())
    }

    async fn update_task(&self, task: Task) -> BoardResult<Task> {
        let mut state = self.state.write().await;
        state.tasks.insert(task.id, task.clone());
        tracing::info!(task_id = %task.id, "Updated task");
        Ok(task)
    }

    async fn set_task_section(&self, task_id: Uuid, section_id: Uuid) -> BoardResult<bool> {
        let mut state = self.state.write().await;
        match state.tasks.get_mut(&task_id) {
            Some(task) => {
                task.section_id = section_id;
                task.updated_at = chrono::Utc::now();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn add_task_to_section(&self, section_id: Uuid, task_id: Uuid) -> BoardResult<bool> {
        let mut state = self.state.write().await;
        match state.sections.get_mut(&section_id) {
            Some(section) => {
                if !section.task_ids.contains(&task_id) {
                    section.task_ids.push(task_id);
                    section.updated_at = chrono::Utc::now();
                }
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn remove_task_from_section(&self, section_id: Uuid, task_id: Uuid) -> BoardResult<bool> {
        let mut state = self.state.write().await;
        match state.sections.get_mut(&section_id) {
            Some(section) => {
                if let Some(pos) = section.task_ids.iter().position(|id| *id == task_id) {
                    section.task_ids.remove(pos);
                    section.updated_at = chrono::Utc::now();
                }
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete_task(&self, id: Uuid) -> BoardResult<bool> {
        let mut state = self.state.write().await;
        if state.tasks.remove(&id).is_some() {
            tracing::info!(task_id = %id, "Deleted task");
            Ok(true)
        } else {
            Ok(false)
        }
    }

    async fn delete_section(&self, id: Uuid) -> BoardResult<bool> {
        let mut state = self.state.write().await;
        if state.sections.remove(&id).is_some() {
            tracing::info!(section_id = %id, "Deleted section");
            Ok(true)
        } else {
            Ok(false)
        }
    }
}
