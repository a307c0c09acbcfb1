//! Notification Repository

use async_trait::async_trait;
use rusqlite::{params, Connection, Row};

use crate::domain::{DomainResult, NewNotification, Notification, NotificationKind};
use super::db::SharedConnection;
use super::traits::UserScopedRepository;

const NOTIFICATION_COLUMNS: &str = "id, user_id, title, message, type, is_read, created_at";

/// SQLite implementation of Notification repository
pub struct NotificationRepository {
    conn: SharedConnection,
}

impl NotificationRepository {
    pub fn new(conn: SharedConnection) -> Self {
        Self { conn }
    }

    /// Mark one of the user's notifications read.
    /// Returns false when the user has no such notification.
    pub async fn mark_read(&self, user_id: u32, id: u32) -> DomainResult<bool> {
        let conn = self.conn.lock().await;
        let changed = conn.execute(
            "UPDATE notifications SET is_read = 1 WHERE id = ?1 AND user_id = ?2",
            params![id, user_id],
        )?;
        Ok(changed > 0)
    }
}

#[async_trait]
impl UserScopedRepository<Notification> for NotificationRepository {
    async fn list_for_user(&self, user_id: u32, limit: Option<u32>) -> DomainResult<Vec<Notification>> {
        let conn = self.conn.lock().await;
        // LIMIT -1 means no limit in SQLite
        let limit = limit.map_or(-1, i64::from);
        let mut stmt = conn.prepare(&format!(
            "SELECT {} FROM notifications WHERE user_id = ?1 ORDER BY created_at DESC, id DESC LIMIT ?2",
            NOTIFICATION_COLUMNS
        ))?;
        let rows = stmt.query_map(params![user_id, limit], row_to_notification)?;
        Ok(rows.collect::<Result<Vec<_>, _>>()?)
    }
}

/// Insert on an existing connection or transaction, returning the new id
pub(super) fn insert_notification(conn: &Connection, n: &NewNotification) -> rusqlite::Result<i64> {
    conn.execute(
        "INSERT INTO notifications (user_id, title, message, type) VALUES (?1, ?2, ?3, ?4)",
        params![n.user_id, n.title, n.message, n.kind.as_str()],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Convert a database row to Notification
fn row_to_notification(row: &Row<'_>) -> rusqlite::Result<Notification> {
    let kind: String = row.get(4)?;
    Ok(Notification {
        id: row.get(0)?,
        user_id: row.get(1)?,
        title: row.get(2)?,
        message: row.get(3)?,
        kind: NotificationKind::from_str(&kind),
        is_read: row.get(5)?,
        created_at: row.get(6)?,
    })
}
