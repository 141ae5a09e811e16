//! Board Service - consistency coordinator
//!
//! Every cross-record operation runs as an ordered sequence of single-record
//! store calls, because the store gives no multi-record transactions. The
//! orderings here are chosen so that a mid-sequence crash leaves the board in
//! a state that is either already valid or repairable by `reconcile`.

use std::sync::Arc;
use tracing::instrument;
use uuid::Uuid;
use validator::Validate;

use crate::error::{BoardError, BoardResult};
use crate::models::{
    CreateSection, CreateTask, MoveTask, ReconcileReport, Section, SectionWithTasks, Task,
    UpdateTask,
};
use crate::repository::BoardStore;

/// Board service coordinating sections and tasks
///
/// The task record's `section_id` is the authoritative side of the ownership
/// relation; section membership lists are the ordered view derived from it.
pub struct BoardService<S: BoardStore> {
    store: Arc<S>,
}

impl<S: BoardStore> BoardService<S> {
    /// Create a new BoardService with the given store
    pub fn new(store: S) -> Self {
        Self {
            store: Arc::new(store),
        }
    }

    /// Create a new empty section
    #[instrument(skip(self, input), fields(section_title = %input.title))]
    pub async fn create_section(&self, input: CreateSection) -> BoardResult<Section> {
        input
            .validate()
            .map_err(|e| BoardError::Validation(e.to_string()))?;

        self.store.insert_section(Section::new(input)).await
    }

    /// List every section with its tasks resolved, in creation order
    #[instrument(skip(self))]
    pub async fn list_board(&self) -> BoardResult<Vec<SectionWithTasks>> {
        let sections = self.store.list_sections().await?;

        let mut board = Vec::with_capacity(sections.len());
        for section in sections {
            board.push(self.resolve_section(section).await?);
        }
        Ok(board)
    }

    /// Get a single section with its tasks resolved
    #[instrument(skip(self))]
    pub async fn get_section(&self, id: Uuid) -> BoardResult<SectionWithTasks> {
        let section = self
            .store
            .get_section(id)
            .await?
            .ok_or(BoardError::SectionNotFound(id))?;

        self.resolve_section(section).await
    }

    /// Delete an empty section
    ///
    /// Refuses when the section still lists tasks: deleting it would orphan
    /// every task it owns in one step.
    #[instrument(skip(self))]
    pub async fn delete_section(&self, id: Uuid) -> BoardResult<()> {
        let section = self
            .store
            .get_section(id)
            .await?
            .ok_or(BoardError::SectionNotFound(id))?;

        if !section.task_ids.is_empty() {
            return Err(BoardError::SectionNotEmpty(id, section.task_ids.len()));
        }

        self.store.delete_section(id).await?;
        Ok(())
    }

    /// Create a task inside an existing section
    ///
    /// Step 1 inserts the task record, step 2 appends its id to the section's
    /// list. A step-2 failure is logged and swallowed: the task exists with a
    /// correct `section_id` and the missing listing is repaired by `reconcile`.
    #[instrument(skip(self, input), fields(task_title = %input.title))]
    pub async fn create_task(&self, input: CreateTask) -> BoardResult<Task> {
        input
            .validate()
            .map_err(|e| BoardError::Validation(e.to_string()))?;

        let section_id = input.section_id;
        self.store
            .get_section(section_id)
            .await?
            .ok_or(BoardError::SectionNotFound(section_id))?;

        let task = self.store.insert_task(Task::new(input)).await?;

        match self.store.add_task_to_section(section_id, task.id).await {
            Ok(true) => {}
            Ok(false) => {
                tracing::warn!(
                    task_id = %task.id,
                    section_id = %section_id,
                    "Section vanished before task could be listed; awaiting reconcile"
                );
            }
            Err(e) => {
                tracing::warn!(
                    task_id = %task.id,
                    section_id = %section_id,
                    error = %e,
                    "Failed to list task in section; awaiting reconcile"
                );
            }
        }

        Ok(task)
    }

    /// Get a task by ID
    #[instrument(skip(self))]
    pub async fn get_task(&self, id: Uuid) -> BoardResult<Task> {
        self.store
            .get_task(id)
            .await?
            .ok_or(BoardError::TaskNotFound(id))
    }

    /// List all tasks
    #[instrument(skip(self))]
    pub async fn list_tasks(&self) -> BoardResult<Vec<Task>> {
        self.store.list_tasks().await
    }

    /// Update a task's own fields; ownership is not touched here
    #[instrument(skip(self, input))]
    pub async fn update_task(&self, id: Uuid, input: UpdateTask) -> BoardResult<Task> {
        input
            .validate()
            .map_err(|e| BoardError::Validation(e.to_string()))?;

        let mut task = self
            .store
            .get_task(id)
            .await?
            .ok_or(BoardError::TaskNotFound(id))?;

        task.apply_update(input);
        self.store.update_task(task).await
    }

    /// Move a task to another section
    ///
    /// The source section is re-derived from the task record rather than
    /// trusted from the caller, so two concurrent moves of the same task
    /// cannot strand its id in an abandoned source list. Sequence: unlist
    /// from the derived source, list in the destination, then write the
    /// authoritative `section_id`. No rollback on mid-sequence failure;
    /// each step is idempotent and a retry or `reconcile` converges.
    #[instrument(skip(self, input), fields(to_section_id = %input.to_section_id))]
    pub async fn move_task(&self, id: Uuid, input: MoveTask) -> BoardResult<Task> {
        let mut task = self
            .store
            .get_task(id)
            .await?
            .ok_or(BoardError::TaskNotFound(id))?;

        let destination = input.to_section_id;
        self.store
            .get_section(destination)
            .await?
            .ok_or(BoardError::SectionNotFound(destination))?;

        let source = task.section_id;
        if input.from_section_id != source {
            tracing::warn!(
                task_id = %id,
                claimed_source = %input.from_section_id,
                actual_source = %source,
                "Stale move request; using the task record's section instead"
            );
        }

        if source == destination {
            // Nothing to move; make sure the listing exists and keep its position
            self.store.add_task_to_section(destination, id).await?;
            return Ok(task);
        }

        self.store.remove_task_from_section(source, id).await?;
        self.store.add_task_to_section(destination, id).await?;

        if !self.store.set_task_section(id, destination).await? {
            return Err(BoardError::TaskNotFound(id));
        }

        task.section_id = destination;
        tracing::info!(task_id = %id, from = %source, to = %destination, "Task moved");
        Ok(task)
    }

    /// Delete a task
    ///
    /// Unlists first, then deletes the record. A crash between the two steps
    /// leaves an unlisted record with a valid `section_id`, which `reconcile`
    /// re-lists; the retried delete then completes.
    #[instrument(skip(self))]
    pub async fn delete_task(&self, id: Uuid) -> BoardResult<()> {
        let task = self
            .store
            .get_task(id)
            .await?
            .ok_or(BoardError::TaskNotFound(id))?;

        self.store
            .remove_task_from_section(task.section_id, id)
            .await?;
        self.store.delete_task(id).await?;

        tracing::info!(task_id = %id, "Task deleted");
        Ok(())
    }

    /// Repair every membership violation on the board
    ///
    /// Task records are authoritative. Listings whose task is gone or owned
    /// elsewhere are removed; tasks missing from their owner's list are
    /// re-appended.
    #[instrument(skip(self))]
    pub async fn reconcile(&self) -> BoardResult<ReconcileReport> {
        let sections = self.store.list_sections().await?;
        let tasks = self.store.list_tasks().await?;

        let task_by_id: std::collections::HashMap<Uuid, &Task> =
            tasks.iter().map(|t| (t.id, t)).collect();
        let mut report = ReconcileReport::default();

        for section in &sections {
            for task_id in &section.task_ids {
                match task_by_id.get(task_id) {
                    None => {
                        self.store
                            .remove_task_from_section(section.id, *task_id)
                            .await?;
                        report.dangling_ids_removed += 1;
                        tracing::warn!(
                            section_id = %section.id,
                            task_id = %task_id,
                            "Removed dangling task id from section"
                        );
                    }
                    Some(task) if task.section_id != section.id => {
                        self.store
                            .remove_task_from_section(section.id, *task_id)
                            .await?;
                        report.stale_listings_removed += 1;
                        tracing::warn!(
                            section_id = %section.id,
                            task_id = %task_id,
                            owner = %task.section_id,
                            "Removed task id listed outside its owning section"
                        );
                    }
                    Some(_) => {}
                }
            }
        }

        for task in &tasks {
            match sections.iter().find(|s| s.id == task.section_id) {
                Some(owner) => {
                    if !owner.task_ids.contains(&task.id) {
                        self.store
                            .add_task_to_section(task.section_id, task.id)
                            .await?;
                        report.tasks_relisted += 1;
                        tracing::warn!(
                            task_id = %task.id,
                            section_id = %task.section_id,
                            "Re-listed task in its owning section"
                        );
                    }
                }
                None => {
                    tracing::warn!(
                        task_id = %task.id,
                        section_id = %task.section_id,
                        "Task points at a section that no longer exists"
                    );
                }
            }
        }

        report.consistent = report.tasks_relisted == 0
            && report.stale_listings_removed == 0
            && report.dangling_ids_removed == 0;

        tracing::info!(
            consistent = report.consistent,
            relisted = report.tasks_relisted,
            stale = report.stale_listings_removed,
            dangling = report.dangling_ids_removed,
            "Reconcile pass finished"
        );
        Ok(report)
    }

    async fn resolve_section(&self, section: Section) -> BoardResult<SectionWithTasks> {
        let tasks = self
            .store
            .get_tasks_by_ids(section.task_ids.clone())
            .await?;
        Ok(SectionWithTasks::resolve(section, tasks))
    }
}

impl<S: BoardStore> Clone for BoardService<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Assignee;
    use crate::repository::{InMemoryBoardStore, MockBoardStore};
    use chrono::NaiveDate;

    fn create_task_input(section_id: Uuid) -> CreateTask {
        CreateTask {
            title: "Write report".to_string(),
            description: "Quarterly summary".to_string(),
            due_date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            assignee: Assignee {
                id: "u1".to_string(),
                name: "Ann".to_string(),
                avatar: "a.png".to_string(),
            },
            tag: "reports".to_string(),
            section_id,
        }
    }

    async fn service_with_section() -> (BoardService<InMemoryBoardStore>, Section) {
        let service = BoardService::new(InMemoryBoardStore::new());
        let section = service
            .create_section(CreateSection {
                title: "Todo".to_string(),
            })
            .await
            .unwrap();
        (service, section)
    }

    #[tokio::test]
    async fn test_create_task_lists_it_in_section() {
        let (service, section) = service_with_section().await;

        let task = service
            .create_task(create_task_input(section.id))
            .await
            .unwrap();

        let resolved = service.get_section(section.id).await.unwrap();
        assert_eq!(resolved.tasks.len(), 1);
        assert_eq!(resolved.tasks[0].id, task.id);
        assert_eq!(task.section_id, section.id);
    }

    #[tokio::test]
    async fn test_create_task_in_missing_section_fails() {
        let (service, section) = service_with_section().await;

        let result = service.create_task(create_task_input(Uuid::now_v7())).await;
        assert!(matches!(result, Err(BoardError::SectionNotFound(_))));

        // The rejection happens before the insert, so no record exists
        assert!(service.list_tasks().await.unwrap().is_empty());
        let resolved = service.get_section(section.id).await.unwrap();
        assert!(resolved.tasks.is_empty());
    }

    #[tokio::test]
    async fn test_create_task_rejects_invalid_input() {
        let (service, section) = service_with_section().await;

        let mut input = create_task_input(section.id);
        input.title = String::new();

        let result = service.create_task(input).await;
        assert!(matches!(result, Err(BoardError::Validation(_))));
    }

    #[tokio::test]
    async fn test_move_task_is_listed_exactly_once() {
        let (service, source) = service_with_section().await;
        let destination = service
            .create_section(CreateSection {
                title: "Doing".to_string(),
            })
            .await
            .unwrap();
        let task = service
            .create_task(create_task_input(source.id))
            .await
            .unwrap();

        let moved = service
            .move_task(
                task.id,
                MoveTask {
                    from_section_id: source.id,
                    to_section_id: destination.id,
                },
            )
            .await
            .unwrap();

        assert_eq!(moved.section_id, destination.id);
        let source = service.get_section(source.id).await.unwrap();
        let destination = service.get_section(destination.id).await.unwrap();
        assert!(source.tasks.is_empty());
        assert_eq!(destination.tasks.len(), 1);
        assert_eq!(destination.tasks[0].id, task.id);
    }

    #[tokio::test]
    async fn test_move_task_ignores_stale_source_claim() {
        let (service, source) = service_with_section().await;
        let destination = service
            .create_section(CreateSection {
                title: "Doing".to_string(),
            })
            .await
            .unwrap();
        let task = service
            .create_task(create_task_input(source.id))
            .await
            .unwrap();

        // Caller claims a source that was never the owner
        let moved = service
            .move_task(
                task.id,
                MoveTask {
                    from_section_id: Uuid::now_v7(),
                    to_section_id: destination.id,
                },
            )
            .await
            .unwrap();

        assert_eq!(moved.section_id, destination.id);
        let source = service.get_section(source.id).await.unwrap();
        assert!(source.tasks.is_empty());
    }

    #[tokio::test]
    async fn test_move_round_trip_restores_membership() {
        let (service, section_a) = service_with_section().await;
        let section_b = service
            .create_section(CreateSection {
                title: "Doing".to_string(),
            })
            .await
            .unwrap();
        let task = service
            .create_task(create_task_input(section_a.id))
            .await
            .unwrap();

        service
            .move_task(
                task.id,
                MoveTask {
                    from_section_id: section_a.id,
                    to_section_id: section_b.id,
                },
            )
            .await
            .unwrap();
        let returned = service
            .move_task(
                task.id,
                MoveTask {
                    from_section_id: section_b.id,
                    to_section_id: section_a.id,
                },
            )
            .await
            .unwrap();

        // Back where it started: record and both membership lists
        assert_eq!(returned.section_id, section_a.id);
        let stored = service.get_task(task.id).await.unwrap();
        assert_eq!(stored.section_id, section_a.id);
        let section_a = service.get_section(section_a.id).await.unwrap();
        let ids: Vec<Uuid> = section_a.tasks.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![task.id]);
        let section_b = service.get_section(section_b.id).await.unwrap();
        assert!(section_b.tasks.is_empty());
    }

    #[tokio::test]
    async fn test_move_to_same_section_preserves_order() {
        let (service, section) = service_with_section().await;
        let first = service
            .create_task(create_task_input(section.id))
            .await
            .unwrap();
        let second = service
            .create_task(create_task_input(section.id))
            .await
            .unwrap();

        service
            .move_task(
                first.id,
                MoveTask {
                    from_section_id: section.id,
                    to_section_id: section.id,
                },
            )
            .await
            .unwrap();

        let resolved = service.get_section(section.id).await.unwrap();
        let ids: Vec<Uuid> = resolved.tasks.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![first.id, second.id]);
    }

    #[tokio::test]
    async fn test_move_to_missing_destination_fails() {
        let (service, section) = service_with_section().await;
        let task = service
            .create_task(create_task_input(section.id))
            .await
            .unwrap();

        let result = service
            .move_task(
                task.id,
                MoveTask {
                    from_section_id: section.id,
                    to_section_id: Uuid::now_v7(),
                },
            )
            .await;

        assert!(matches!(result, Err(BoardError::SectionNotFound(_))));
        // Failed precondition must leave the source untouched
        let resolved = service.get_section(section.id).await.unwrap();
        assert_eq!(resolved.tasks.len(), 1);
    }

    #[tokio::test]
    async fn test_delete_task_removes_record_and_listing() {
        let (service, section) = service_with_section().await;
        let task = service
            .create_task(create_task_input(section.id))
            .await
            .unwrap();

        service.delete_task(task.id).await.unwrap();

        let resolved = service.get_section(section.id).await.unwrap();
        assert!(resolved.tasks.is_empty());
        assert!(matches!(
            service.get_task(task.id).await,
            Err(BoardError::TaskNotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_delete_missing_task_fails() {
        let (service, section) = service_with_section().await;
        let task = service
            .create_task(create_task_input(section.id))
            .await
            .unwrap();

        let result = service.delete_task(Uuid::now_v7()).await;
        assert!(matches!(result, Err(BoardError::TaskNotFound(_))));

        // The read-first short-circuit leaves every membership list untouched
        let resolved = service.get_section(section.id).await.unwrap();
        let ids: Vec<Uuid> = resolved.tasks.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![task.id]);
    }

    #[tokio::test]
    async fn test_delete_section_refuses_when_not_empty() {
        let (service, section) = service_with_section().await;
        service
            .create_task(create_task_input(section.id))
            .await
            .unwrap();

        let result = service.delete_section(section.id).await;
        assert!(matches!(result, Err(BoardError::SectionNotEmpty(_, 1))));
    }

    #[tokio::test]
    async fn test_delete_empty_section_succeeds() {
        let (service, section) = service_with_section().await;

        service.delete_section(section.id).await.unwrap();
        assert!(matches!(
            service.get_section(section.id).await,
            Err(BoardError::SectionNotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_update_task_cannot_change_section() {
        let (service, section) = service_with_section().await;
        let task = service
            .create_task(create_task_input(section.id))
            .await
            .unwrap();

        let updated = service
            .update_task(
                task.id,
                UpdateTask {
                    title: Some("Edit report".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.title, "Edit report");
        assert_eq!(updated.section_id, section.id);
    }

    #[tokio::test]
    async fn test_reconcile_on_consistent_board_repairs_nothing() {
        let (service, section) = service_with_section().await;
        service
            .create_task(create_task_input(section.id))
            .await
            .unwrap();

        let report = service.reconcile().await.unwrap();
        assert!(report.consistent);
        assert_eq!(report.tasks_relisted, 0);
    }

    #[tokio::test]
    async fn test_reconcile_relists_unlisted_task() {
        let store = InMemoryBoardStore::new();
        let service = BoardService::new(store.clone());
        let section = service
            .create_section(CreateSection {
                title: "Todo".to_string(),
            })
            .await
            .unwrap();

        // Simulate a crash between task insert and section append
        let task = Task::new(create_task_input(section.id));
        store.insert_task(task.clone()).await.unwrap();

        let report = service.reconcile().await.unwrap();
        assert!(!report.consistent);
        assert_eq!(report.tasks_relisted, 1);

        let resolved = service.get_section(section.id).await.unwrap();
        assert_eq!(resolved.tasks.len(), 1);
        assert_eq!(resolved.tasks[0].id, task.id);
    }

    #[tokio::test]
    async fn test_reconcile_drops_dangling_and_stale_listings() {
        let store = InMemoryBoardStore::new();
        let service = BoardService::new(store.clone());
        let section_a = service
            .create_section(CreateSection {
                title: "A".to_string(),
            })
            .await
            .unwrap();
        let section_b = service
            .create_section(CreateSection {
                title: "B".to_string(),
            })
            .await
            .unwrap();
        let task = service
            .create_task(create_task_input(section_a.id))
            .await
            .unwrap();

        // A listing in a section that does not own the task
        store
            .add_task_to_section(section_b.id, task.id)
            .await
            .unwrap();
        // A listing that resolves to no task at all
        store
            .add_task_to_section(section_a.id, Uuid::now_v7())
            .await
            .unwrap();

        let report = service.reconcile().await.unwrap();
        assert!(!report.consistent);
        assert_eq!(report.stale_listings_removed, 1);
        assert_eq!(report.dangling_ids_removed, 1);

        let section_b = service.get_section(section_b.id).await.unwrap();
        assert!(section_b.tasks.is_empty());
        let section_a = service.get_section(section_a.id).await.unwrap();
        assert_eq!(section_a.tasks.len(), 1);

        // A second pass finds nothing left to repair
        let report = service.reconcile().await.unwrap();
        assert!(report.consistent);
    }

    #[tokio::test]
    async fn test_create_task_survives_listing_failure() {
        let mut mock = MockBoardStore::new();
        let section_id = Uuid::now_v7();

        mock.expect_get_section().returning(move |id| {
            Ok(Some(Section {
                id,
                title: "Todo".to_string(),
                task_ids: vec![],
                created_at: chrono::Utc::now(),
                updated_at: chrono::Utc::now(),
            }))
        });
        mock.expect_insert_task().returning(|task| Ok(task));
        mock.expect_add_task_to_section()
            .times(1)
            .returning(|_, _| Err(BoardError::Database("connection reset".to_string())));

        let service = BoardService::new(mock);
        let task = service
            .create_task(create_task_input(section_id))
            .await
            .unwrap();

        // The task exists and carries the right owner even though listing failed
        assert_eq!(task.section_id, section_id);
    }

    #[tokio::test]
    async fn test_move_task_listing_failure_propagates_without_rollback() {
        let mut mock = MockBoardStore::new();
        let source_id = Uuid::now_v7();
        let destination_id = Uuid::now_v7();
        let task_id = Uuid::now_v7();

        let mut task = Task::new(create_task_input(source_id));
        task.id = task_id;
        mock.expect_get_task()
            .returning(move |_| Ok(Some(task.clone())));
        mock.expect_get_section().returning(move |id| {
            Ok(Some(Section {
                id,
                title: "Doing".to_string(),
                task_ids: vec![],
                created_at: chrono::Utc::now(),
                updated_at: chrono::Utc::now(),
            }))
        });
        mock.expect_remove_task_from_section()
            .times(1)
            .returning(|_, _| Ok(true));
        mock.expect_add_task_to_section()
            .times(1)
            .returning(|_, _| Err(BoardError::Database("connection reset".to_string())));
        // No compensating re-add on the source and no ownership write
        mock.expect_set_task_section().times(0);

        let service = BoardService::new(mock);
        let result = service
            .move_task(
                task_id,
                MoveTask {
                    from_section_id: source_id,
                    to_section_id: destination_id,
                },
            )
            .await;

        assert!(matches!(result, Err(BoardError::Database(_))));
    }

    #[tokio::test]
    async fn test_move_task_ownership_write_failure_propagates_without_rollback() {
        let mut mock = MockBoardStore::new();
        let source_id = Uuid::now_v7();
        let destination_id = Uuid::now_v7();
        let task_id = Uuid::now_v7();

        let mut task = Task::new(create_task_input(source_id));
        task.id = task_id;
        mock.expect_get_task()
            .returning(move |_| Ok(Some(task.clone())));
        mock.expect_get_section().returning(move |id| {
            Ok(Some(Section {
                id,
                title: "Doing".to_string(),
                task_ids: vec![],
                created_at: chrono::Utc::now(),
                updated_at: chrono::Utc::now(),
            }))
        });
        // Both membership writes already happened; neither is undone
        mock.expect_remove_task_from_section()
            .times(1)
            .returning(|_, _| Ok(true));
        mock.expect_add_task_to_section()
            .times(1)
            .returning(|_, _| Ok(true));
        mock.expect_set_task_section()
            .times(1)
            .returning(|_, _| Err(BoardError::Database("connection reset".to_string())));

        let service = BoardService::new(mock);
        let result = service
            .move_task(
                task_id,
                MoveTask {
                    from_section_id: source_id,
                    to_section_id: destination_id,
                },
            )
            .await;

        assert!(matches!(result, Err(BoardError::Database(_))));
    }

    #[tokio::test]
    async fn test_move_task_vanishing_before_ownership_write_reports_not_found() {
        let mut mock = MockBoardStore::new();
        let source_id = Uuid::now_v7();
        let destination_id = Uuid::now_v7();
        let task_id = Uuid::now_v7();

        let mut task = Task::new(create_task_input(source_id));
        task.id = task_id;
        mock.expect_get_task()
            .returning(move |_| Ok(Some(task.clone())));
        mock.expect_get_section().returning(move |id| {
            Ok(Some(Section {
                id,
                title: "Doing".to_string(),
                task_ids: vec![],
                created_at: chrono::Utc::now(),
                updated_at: chrono::Utc::now(),
            }))
        });
        mock.expect_remove_task_from_section()
            .times(1)
            .returning(|_, _| Ok(true));
        mock.expect_add_task_to_section()
            .times(1)
            .returning(|_, _| Ok(true));
        // A concurrent delete removed the record between the read and the write
        mock.expect_set_task_section()
            .times(1)
            .returning(|_, _| Ok(false));

        let service = BoardService::new(mock);
        let result = service
            .move_task(
                task_id,
                MoveTask {
                    from_section_id: source_id,
                    to_section_id: destination_id,
                },
            )
            .await;

        assert!(matches!(result, Err(BoardError::TaskNotFound(_))));
    }
}
