use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Section entity - a board column owning an ordered list of tasks
///
/// `task_ids` is insertion-ordered: the order tasks were added is the order
/// they are displayed. A task id appears in at most one section's list.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Section {
    /// Unique identifier (stored as _id in MongoDB)
    #[serde(rename = "_id", alias = "id")]
    pub id: Uuid,
    /// Section title
    pub title: String,
    /// Ordered task membership list
    #[serde(default)]
    pub task_ids: Vec<Uuid>,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

/// Task assignee
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate, ToSchema)]
pub struct Assignee {
    #[validate(length(min = 1, max = 100))]
    pub id: String,
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    #[validate(length(min = 1, max = 500))]
    pub avatar: String,
}

/// Task entity - a card owned by exactly one section
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Task {
    /// Unique identifier (stored as _id in MongoDB)
    #[serde(rename = "_id", alias = "id")]
    pub id: Uuid,
    /// Task title
    pub title: String,
    /// Task description
    pub description: String,
    /// Due date
    pub due_date: NaiveDate,
    /// Person the task is assigned to
    pub assignee: Assignee,
    /// Category label
    pub tag: String,
    /// Identifier of the section that currently owns this task
    pub section_id: Uuid,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

/// DTO for creating a new section
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateSection {
    #[validate(length(min = 1, max = 200))]
    pub title: String,
}

/// DTO for creating a new task
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateTask {
    #[validate(length(min = 1, max = 200))]
    pub title: String,
    #[validate(length(min = 1, max = 2000))]
    pub description: String,
    pub due_date: NaiveDate,
    #[validate(nested)]
    pub assignee: Assignee,
    #[validate(length(min = 1, max = 100))]
    pub tag: String,
    /// Section the task is created in; must reference an existing section
    pub section_id: Uuid,
}

/// DTO for updating an existing task
///
/// `section_id` is deliberately absent: ownership changes go through the
/// move operation so the membership lists stay in step.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateTask {
    #[validate(length(min = 1, max = 200))]
    pub title: Option<String>,
    #[validate(length(min = 1, max = 2000))]
    pub description: Option<String>,
    pub due_date: Option<NaiveDate>,
    #[validate(nested)]
    pub assignee: Option<Assignee>,
    #[validate(length(min = 1, max = 100))]
    pub tag: Option<String>,
}

/// DTO for moving a task between sections
///
/// `from_section_id` is what the caller believes the current section to be.
/// The coordinator treats the task record as authoritative and only uses
/// this value to detect stale callers.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct MoveTask {
    pub from_section_id: Uuid,
    pub to_section_id: Uuid,
}

/// A section with its task ids resolved into full task records
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SectionWithTasks {
    pub id: Uuid,
    pub title: String,
    /// Resolved tasks, in membership-list order
    pub tasks: Vec<Task>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl SectionWithTasks {
    pub fn resolve(section: Section, tasks: Vec<Task>) -> Self {
        Self {
            id: section.id,
            title: section.title,
            tasks,
            created_at: section.created_at,
            updated_at: section.updated_at,
        }
    }
}

/// Result of an on-demand consistency pass over the whole board
#[derive(Debug, Clone, Default, Serialize, ToSchema)]
pub struct ReconcileReport {
    /// True when no repair was necessary
    pub consistent: bool,
    /// Tasks that were missing from their owning section's list and re-added
    pub tasks_relisted: u64,
    /// Task ids removed from sections that were not the task's owner
    pub stale_listings_removed: u64,
    /// Listed ids that resolved to no task record and were removed
    pub dangling_ids_removed: u64,
}

impl Section {
    /// Create a new empty section from a CreateSection DTO
    pub fn new(input: CreateSection) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::now_v7(),
            title: input.title,
            task_ids: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }
}

impl Task {
    /// Create a new task from a CreateTask DTO, bound to its section
    pub fn new(input: CreateTask) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::now_v7(),
            title: input.title,
            description: input.description,
            due_date: input.due_date,
            assignee: input.assignee,
            tag: input.tag,
            section_id: input.section_id,
            created_at: now,
            updated_at: now,
        }
    }

    /// Apply updates from an UpdateTask DTO
    pub fn apply_update(&mut self, update: UpdateTask) {
        if let Some(title) = update.title {
            self.title = title;
        }
        if let Some(description) = update.description {
            self.description = description;
        }
        if let Some(due_date) = update.due_date {
            self.due_date = due_date;
        }
        if let Some(assignee) = update.assignee {
            self.assignee = assignee;
        }
        if let Some(tag) = update.tag {
            self.tag = tag;
        }
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_task_input(section_id: Uuid) -> CreateTask {
        CreateTask {
            title: "Write spec".to_string(),
            description: "Draft the first version".to_string(),
            due_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            assignee: Assignee {
                id: "u1".to_string(),
                name: "Ann".to_string(),
                avatar: "a.png".to_string(),
            },
            tag: "docs".to_string(),
            section_id,
        }
    }

    #[test]
    fn test_section_created_empty() {
        let section = Section::new(CreateSection {
            title: "Todo".to_string(),
        });
        assert_eq!(section.title, "Todo");
        assert!(section.task_ids.is_empty());
    }

    #[test]
    fn test_task_bound_to_section() {
        let section_id = Uuid::now_v7();
        let task = Task::new(create_task_input(section_id));
        assert_eq!(task.section_id, section_id);
        assert_eq!(task.tag, "docs");
    }

    #[test]
    fn test_apply_update_merges_fields() {
        let task_input = create_task_input(Uuid::now_v7());
        let mut task = Task::new(task_input);
        let original_description = task.description.clone();

        task.apply_update(UpdateTask {
            title: Some("Review spec".to_string()),
            ..Default::default()
        });

        assert_eq!(task.title, "Review spec");
        assert_eq!(task.description, original_description);
    }

    #[test]
    fn test_create_task_validation_rejects_empty_title() {
        use validator::Validate;

        let mut input = create_task_input(Uuid::now_v7());
        input.title = String::new();
        assert!(input.validate().is_err());
    }

    #[test]
    fn test_create_task_validation_rejects_empty_assignee_name() {
        use validator::Validate;

        let mut input = create_task_input(Uuid::now_v7());
        input.assignee.name = String::new();
        assert!(input.validate().is_err());
    }
}
