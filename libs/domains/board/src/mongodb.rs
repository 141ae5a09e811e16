//! MongoDB implementation of BoardStore

use async_trait::async_trait;
use mongodb::{
    Collection, Database,
    bson::{Bson, Document, doc, to_bson},
};
use tracing::instrument;
use uuid::Uuid;

use crate::error::BoardResult;
use crate::models::{Section, Task};
use crate::repository::BoardStore;

/// MongoDB implementation of the BoardStore
///
/// Sections and tasks live in separate collections. Membership mutations use
/// `$addToSet` / `$pull` so retried or concurrent calls converge on the same
/// list instead of duplicating entries.
pub struct MongoBoardStore {
    sections: Collection<Section>,
    tasks: Collection<Task>,
}

impl MongoBoardStore {
    /// Create a new MongoBoardStore
    ///
    /// # Arguments
    /// * `db` - MongoDB database instance
    ///
    /// # Example
    /// ```ignore
    /// let client = Client::with_uri_str("mongodb://localhost:27017").await?;
    /// let db = client.database("mydb");
    /// let store = MongoBoardStore::new(db);
    /// ```
    pub fn new(db: Database) -> Self {
        Self {
            sections: db.collection::<Section>("sections"),
            tasks: db.collection::<Task>("tasks"),
        }
    }

    /// Create a new MongoBoardStore with custom collection names
    pub fn with_collections(db: Database, sections_name: &str, tasks_name: &str) -> Self {
        Self {
            sections: db.collection::<Section>(sections_name),
            tasks: db.collection::<Task>(tasks_name),
        }
    }

    /// Create indexes for efficient querying
    pub async fn create_indexes(&self) -> BoardResult<()> {
        use mongodb::IndexModel;

        // Creation order drives board rendering
        self.sections
            .create_index(IndexModel::builder().keys(doc! { "created_at": 1 }).build())
            .await?;

        let task_indexes = vec![
            // Owner lookups during reconcile
            IndexModel::builder().keys(doc! { "section_id": 1 }).build(),
            IndexModel::builder().keys(doc! { "created_at": 1 }).build(),
        ];
        self.tasks.create_indexes(task_indexes).await?;

        Ok(())
    }

    fn id_filter(id: Uuid) -> Document {
        doc! { "_id": to_bson(&id).unwrap_or(Bson::Null) }
    }

    fn now_bson() -> Bson {
        to_bson(&chrono::Utc::now()).unwrap_or(Bson::Null)
    }
}

#[async_trait]
impl BoardStore for MongoBoardStore {
    #[instrument(skip(self, section), fields(section_id = %section.id))]
    async fn insert_section(&self, section: Section) -> BoardResult<Section> {
        self.sections.insert_one(&section).await?;

        tracing::info!(section_id = %section.id, "Section created successfully");
        Ok(section)
    }

    #[instrument(skip(self, task), fields(task_id = %task.id))]
    async fn insert_task(&self, task: Task) -> BoardResult<Task> {
        self.tasks.insert_one(&task).await?;

        tracing::info!(task_id = %task.id, "Task created successfully");
        Ok(task)
    }

    #[instrument(skip(self))]
    async fn get_section(&self, id: Uuid) -> BoardResult<Option<Section>> {
        let section = self.sections.find_one(Self::id_filter(id)).await?;
        Ok(section)
    }

    #[instrument(skip(self))]
    async fn get_task(&self, id: Uuid) -> BoardResult<Option<Task>> {
        let task = self.tasks.find_one(Self::id_filter(id)).await?;
        Ok(task)
    }

    #[instrument(skip(self))]
    async fn list_sections(&self) -> BoardResult<Vec<Section>> {
        use futures_util::TryStreamExt;

        let options = mongodb::options::FindOptions::builder()
            .sort(doc! { "created_at": 1 })
            .build();

        let cursor = self.sections.find(doc! {}).with_options(options).await?;
        let sections: Vec<Section> = cursor.try_collect().await?;

        Ok(sections)
    }

    #[instrument(skip(self))]
    async fn list_tasks(&self) -> BoardResult<Vec<Task>> {
        use futures_util::TryStreamExt;

        let options = mongodb::options::FindOptions::builder()
            .sort(doc! { "created_at": 1 })
            .build();

        let cursor = self.tasks.find(doc! {}).with_options(options).await?;
        let tasks: Vec<Task> = cursor.try_collect().await?;

        Ok(tasks)
    }

    #[instrument(skip(self, ids))]
    async fn get_tasks_by_ids(&self, ids: Vec<Uuid>) -> BoardResult<Vec<Task>> {
        use futures_util::TryStreamExt;

        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let bson_ids: Vec<Bson> = ids
            .iter()
            .map(|id| to_bson(id).unwrap_or(Bson::Null))
            .collect();
        let filter = doc! { "_id": { "$in": bson_ids } };

        let cursor = self.tasks.find(filter).await?;
        let fetched: Vec<Task> = cursor.try_collect().await?;

        // $in does not preserve the requested order; restore it
        let mut by_id: std::collections::HashMap<Uuid, Task> =
            fetched.into_iter().map(|t| (t.id, t)).collect();
        let tasks = ids.iter().filter_map(|id| by_id.remove(id)).collect();

        Ok(tasks)
    }

    #[instrument(skip(self, task), fields(task_id = %task.id))]
    async fn update_task(&self, task: Task) -> BoardResult<Task> {
        self.tasks
            .replace_one(Self::id_filter(task.id), &task)
            .await?;

        tracing::info!(task_id = %task.id, "Task updated successfully");
        Ok(task)
    }

    #[instrument(skip(self))]
    async fn set_task_section(&self, task_id: Uuid, section_id: Uuid) -> BoardResult<bool> {
        let update = doc! {
            "$set": {
                "section_id": to_bson(&section_id).unwrap_or(Bson::Null),
                "updated_at": Self::now_bson(),
            }
        };
        let result = self
            .tasks
            .update_one(Self::id_filter(task_id), update)
            .await?;

        Ok(result.matched_count > 0)
    }

    #[instrument(skip(self))]
    async fn add_task_to_section(&self, section_id: Uuid, task_id: Uuid) -> BoardResult<bool> {
        let update = doc! {
            "$addToSet": { "task_ids": to_bson(&task_id).unwrap_or(Bson::Null) },
            "$set": { "updated_at": Self::now_bson() },
        };
        let result = self
            .sections
            .update_one(Self::id_filter(section_id), update)
            .await?;

        Ok(result.matched_count > 0)
    }

    #[instrument(skip(self))]
    async fn remove_task_from_section(&self, section_id: Uuid, task_id: Uuid) -> BoardResult<bool> {
        let update = doc! {
            "$pull": { "task_ids": to_bson(&task_id).unwrap_or(Bson::Null) },
            "$set": { "updated_at": Self::now_bson() },
        };
        let result = self
            .sections
            .update_one(Self::id_filter(section_id), update)
            .await?;

        Ok(result.matched_count > 0)
    }

    #[instrument(skip(self))]
    async fn delete_task(&self, id: Uuid) -> BoardResult<bool> {
        let result = self.tasks.delete_one(Self::id_filter(id)).await?;

        if result.deleted_count > 0 {
            tracing::info!(task_id = %id, "Task deleted successfully");
        }
        Ok(result.deleted_count > 0)
    }

    #[instrument(skip(self))]
    async fn delete_section(&self, id: Uuid) -> BoardResult<bool> {
        let result = self.sections.delete_one(Self::id_filter(id)).await?;

        if result.deleted_count > 0 {
            tracing::info!(section_id = %id, "Section deleted successfully");
        }
        Ok(result.deleted_count > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_filter_encodes_uuid() {
        let id = Uuid::now_v7();
        let filter = MongoBoardStore::id_filter(id);
        assert!(filter.contains_key("_id"));
        assert_ne!(filter.get("_id"), Some(&Bson::Null));
    }
}
