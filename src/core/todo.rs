//! Todo business logic - CRUD, goal import, task breakdown, and ordering.
//!
//! Two invariants are enforced here rather than by the store: importing a
//! check-in's goals is at-most-once per check-in, and deleting a parent task
//! cascades to its subtasks. Both run inside database transactions so a
//! concurrent double-submission or a mid-cascade failure can never leave the
//! collection half-written.

use crate::{
    core::{Page, PageMeta},
    entities::{Todo, todo},
    errors::{Error, Result},
};
use chrono::Utc;
use sea_orm::{PaginatorTrait, QueryOrder, Set, TransactionTrait, prelude::*};
use std::collections::HashMap;

/// Default page size for the flat todo listing.
pub const DEFAULT_PAGE_SIZE: u64 = 50;

/// Outcome of a goal-import request.
#[derive(Debug, Clone)]
pub enum ImportOutcome {
    /// The check-in's goals had already been imported; nothing was created.
    AlreadyImported,
    /// One todo was created per goal, in goal order.
    Imported(Vec<todo::Model>),
}

/// Finds a todo by id, scoped to its owner.
///
/// Returns `None` both when the id does not exist and when it belongs to a
/// different user.
pub async fn get_todo_by_id_and_user(
    db: &DatabaseConnection,
    todo_id: i64,
    user_id: i64,
) -> Result<Option<todo::Model>> {
    Todo::find_by_id(todo_id)
        .filter(todo::Column::UserId.eq(user_id))
        .one(db)
        .await
        .map_err(Into::into)
}

/// Creates a single todo for the user.
///
/// When `parent_id` is given the referenced todo must exist, belong to the
/// same user, and itself be top-level - only one level of nesting is
/// supported. `is_subtask` is derived from the presence of `parent_id`,
/// never passed in.
pub async fn create_todo(
    db: &DatabaseConnection,
    user_id: i64,
    text: &str,
    checkin_id: Option<i64>,
    parent_id: Option<i64>,
) -> Result<todo::Model> {
    let text = text.trim();
    if text.is_empty() {
        return Err(Error::validation("todo text is required"));
    }

    if let Some(parent_id) = parent_id {
        let parent = get_todo_by_id_and_user(db, parent_id, user_id)
            .await?
            .ok_or(Error::TodoNotFound { id: parent_id })?;
        if parent.is_subtask {
            return Err(Error::validation("a subtask cannot have subtasks of its own"));
        }
    }

    let now = Utc::now();
    let new_todo = todo::ActiveModel {
        user_id: Set(user_id),
        text: Set(text.to_owned()),
        completed: Set(false),
        checkin_id: Set(checkin_id),
        parent_id: Set(parent_id),
        is_subtask: Set(parent_id.is_some()),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };

    new_todo.insert(db).await.map_err(Into::into)
}

/// Applies a partial update (text and/or completion flag) to a todo owned by
/// the user, refreshing `updated_at`.
pub async fn update_todo(
    db: &DatabaseConnection,
    user_id: i64,
    todo_id: i64,
    text: Option<&str>,
    completed: Option<bool>,
) -> Result<todo::Model> {
    let todo = get_todo_by_id_and_user(db, todo_id, user_id)
        .await?
        .ok_or(Error::TodoNotFound { id: todo_id })?;

    let mut active_model: todo::ActiveModel = todo.into();

    if let Some(text) = text {
        let text = text.trim();
        if text.is_empty() {
            return Err(Error::validation("todo text is required"));
        }
        active_model.text = Set(text.to_owned());
    }
    if let Some(completed) = completed {
        active_model.completed = Set(completed);
    }
    active_model.updated_at = Set(Utc::now());

    active_model.update(db).await.map_err(Into::into)
}

/// Deletes a todo owned by the user.
///
/// Deleting a top-level task first deletes every todo whose `parent_id`
/// references it, then the task itself, all in one transaction: if any step
/// fails the whole cascade rolls back and the parent survives, so the caller
/// can simply retry. Deleting a subtask removes only that row.
pub async fn delete_todo(db: &DatabaseConnection, user_id: i64, todo_id: i64) -> Result<()> {
    let todo = get_todo_by_id_and_user(db, todo_id, user_id)
        .await?
        .ok_or(Error::TodoNotFound { id: todo_id })?;

    let txn = db.begin().await?;

    if !todo.is_subtask {
        Todo::delete_many()
            .filter(todo::Column::ParentId.eq(todo.id))
            .filter(todo::Column::UserId.eq(user_id))
            .exec(&txn)
            .await?;
    }
    Todo::delete_by_id(todo.id).exec(&txn).await?;

    txn.commit().await?;
    Ok(())
}

/// Imports a check-in's goals as todos, at most once per check-in.
///
/// The check-in must exist and belong to the user. Inside one transaction:
/// if any todo already references this check-in the call is a no-op
/// reporting [`ImportOutcome::AlreadyImported`]; otherwise one todo is
/// created per normalized goal, each tagged with the source `checkin_id`.
/// Running the existence check in the same transaction as the inserts closes
/// the race between two concurrent imports of the same check-in.
pub async fn import_goals(
    db: &DatabaseConnection,
    user_id: i64,
    checkin_id: i64,
) -> Result<ImportOutcome> {
    let checkin = crate::core::checkin::get_checkin_by_id_and_user(db, checkin_id, user_id)
        .await?
        .ok_or(Error::CheckinNotFound { id: checkin_id })?;

    let txn = db.begin().await?;

    let existing = Todo::find()
        .filter(todo::Column::UserId.eq(user_id))
        .filter(todo::Column::CheckinId.eq(checkin_id))
        .count(&txn)
        .await?;
    if existing > 0 {
        txn.commit().await?;
        return Ok(ImportOutcome::AlreadyImported);
    }

    let goals = checkin.normalized_goals();
    if goals.is_empty() {
        return Err(Error::validation("no goals found in the check-in"));
    }

    let now = Utc::now();
    let mut created = Vec::with_capacity(goals.len());
    for goal in goals {
        let new_todo = todo::ActiveModel {
            user_id: Set(user_id),
            text: Set(goal),
            completed: Set(false),
            checkin_id: Set(Some(checkin_id)),
            parent_id: Set(None),
            is_subtask: Set(false),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };
        created.push(new_todo.insert(&txn).await?);
    }

    txn.commit().await?;
    Ok(ImportOutcome::Imported(created))
}

/// Reports whether the check-in's goals have already been imported.
pub async fn goals_imported(
    db: &DatabaseConnection,
    user_id: i64,
    checkin_id: i64,
) -> Result<bool> {
    let count = Todo::find()
        .filter(todo::Column::UserId.eq(user_id))
        .filter(todo::Column::CheckinId.eq(checkin_id))
        .count(db)
        .await?;
    Ok(count > 0)
}

/// Breaks a top-level task down into subtasks.
///
/// Blank texts are dropped; if nothing remains the call is a silent no-op
/// returning an empty list. The parent must exist, belong to the user, and
/// be top-level. The surviving texts are created as child todos in one
/// transaction, in the order given.
pub async fn create_subtasks(
    db: &DatabaseConnection,
    user_id: i64,
    parent_id: i64,
    texts: &[String],
) -> Result<Vec<todo::Model>> {
    let texts: Vec<&str> = texts
        .iter()
        .map(|text| text.trim())
        .filter(|text| !text.is_empty())
        .collect();
    if texts.is_empty() {
        return Ok(Vec::new());
    }

    let parent = get_todo_by_id_and_user(db, parent_id, user_id)
        .await?
        .ok_or(Error::TodoNotFound { id: parent_id })?;
    if parent.is_subtask {
        return Err(Error::validation("a subtask cannot have subtasks of its own"));
    }

    let txn = db.begin().await?;
    let now = Utc::now();
    let mut created = Vec::with_capacity(texts.len());
    for text in texts {
        let new_todo = todo::ActiveModel {
            user_id: Set(user_id),
            text: Set(text.to_owned()),
            completed: Set(false),
            checkin_id: Set(None),
            parent_id: Set(Some(parent.id)),
            is_subtask: Set(true),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };
        created.push(new_todo.insert(&txn).await?);
    }
    txn.commit().await?;

    Ok(created)
}

/// Reconstructs the parent/subtask display ordering from a flat collection.
///
/// Top-level tasks come newest-first; each is immediately followed by its
/// own subtasks, also newest-first. Ties on creation time break by id so the
/// ordering is deterministic. Subtasks whose parent is missing from the
/// collection, or whose parent is itself a subtask, are dropped from the
/// output.
#[must_use]
pub fn group_by_parent(todos: Vec<todo::Model>) -> Vec<todo::Model> {
    let (mut top_level, subtasks): (Vec<_>, Vec<_>) =
        todos.into_iter().partition(|todo| todo.parent_id.is_none());

    top_level.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));

    let mut children: HashMap<i64, Vec<todo::Model>> = HashMap::new();
    for subtask in subtasks {
        if let Some(parent_id) = subtask.parent_id {
            children.entry(parent_id).or_default().push(subtask);
        }
    }

    let mut ordered = Vec::with_capacity(top_level.len());
    for parent in top_level {
        let parent_id = parent.id;
        ordered.push(parent);
        if let Some(mut subs) = children.remove(&parent_id) {
            subs.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
            ordered.append(&mut subs);
        }
    }

    ordered
}

/// Returns every todo the user owns in grouped display order.
pub async fn list_todos_grouped(
    db: &DatabaseConnection,
    user_id: i64,
) -> Result<Vec<todo::Model>> {
    let todos = Todo::find()
        .filter(todo::Column::UserId.eq(user_id))
        .all(db)
        .await?;
    Ok(group_by_parent(todos))
}

/// Returns one page of the user's todos, newest first.
pub async fn list_todos(
    db: &DatabaseConnection,
    user_id: i64,
    page: u64,
    per_page: u64,
) -> Result<Page<todo::Model>> {
    let page = page.max(1);
    let per_page = per_page.max(1);

    let paginator = Todo::find()
        .filter(todo::Column::UserId.eq(user_id))
        .order_by_desc(todo::Column::CreatedAt)
        .order_by_desc(todo::Column::Id)
        .paginate(db, per_page);

    let total = paginator.num_items().await?;
    let total_pages = paginator.num_pages().await?;
    let items = paginator.fetch_page(page - 1).await?;

    Ok(Page {
        items,
        pagination: PageMeta {
            total,
            page,
            limit: per_page,
            total_pages,
        },
    })
}
