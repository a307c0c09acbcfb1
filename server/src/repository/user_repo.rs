//! User Repository
//!
//! Accounts, Telegram login and referral bookkeeping.

use async_trait::async_trait;
use rusqlite::{params, Connection, OptionalExtension, Row};

use crate::domain::{
    generate_referral_code, normalize_referral_code, DomainError, DomainResult, NewNotification,
    Registration, TelegramProfile, User,
};
use super::db::SharedConnection;
use super::notification_repo::insert_notification;
use super::traits::Repository;

const USER_COLUMNS: &str =
    "id, telegram_id, username, first_name, last_name, photo_url, balance, referral_code, referred_by_id, created_at";

/// Attempts at drawing a referral code not already taken
const REFERRAL_CODE_ATTEMPTS: usize = 5;

/// Bonuses credited on sign-up
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SignupBonuses {
    /// Starting balance of a new user
    pub signup: i64,
    /// Credited to the owner of the referral code used
    pub referral: i64,
}

/// SQLite implementation of User repository
pub struct UserRepository {
    conn: SharedConnection,
}

impl UserRepository {
    pub fn new(conn: SharedConnection) -> Self {
        Self { conn }
    }

    /// Number of users who signed up with this user's code
    pub async fn count_referrals(&self, user_id: u32) -> DomainResult<u32> {
        let conn = self.conn.lock().await;
        let count = conn.query_row(
            "SELECT COUNT(*) FROM users WHERE referred_by_id = ?1",
            params![user_id],
            |row| row.get(0),
        )?;
        Ok(count)
    }

    /// Return the user for this Telegram id, registering it first when unknown.
    ///
    /// Registration, the referrer's bonus and the referrer's notification are
    /// committed together. An unknown referral code is ignored.
    pub async fn login_or_register(
        &self,
        profile: &TelegramProfile,
        referral_code: Option<&str>,
        bonuses: SignupBonuses,
    ) -> DomainResult<Registration> {
        if profile.telegram_id == 0 {
            return Err(DomainError::InvalidInput("telegram_id is required".to_string()));
        }

        let mut conn = self.conn.lock().await;
        if let Some(user) = select_by_telegram_id(&conn, profile.telegram_id)? {
            return Ok(Registration { user, created: false });
        }

        let tx = conn.transaction()?;

        let referrer_id: Option<u32> = match referral_code.and_then(normalize_referral_code) {
            Some(code) => tx
                .query_row(
                    "SELECT id FROM users WHERE referral_code = ?1",
                    params![code],
                    |row| row.get(0),
                )
                .optional()?,
            None => None,
        };

        let code = unused_referral_code(&tx, profile.telegram_id)?;
        tx.execute(
            "INSERT INTO users (telegram_id, username, first_name, last_name, photo_url, balance, referral_code, referred_by_id)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
            params![
                profile.telegram_id,
                profile.username,
                profile.first_name,
                profile.last_name,
                profile.photo_url,
                bonuses.signup,
                code,
                referrer_id
            ],
        )?;
        let user_id = tx.last_insert_rowid();

        if let Some(referrer_id) = referrer_id {
            tx.execute(
                "UPDATE users SET balance = balance + ?1 WHERE id = ?2",
                params![bonuses.referral, referrer_id],
            )?;
            insert_notification(&tx, &NewNotification::referral_joined(referrer_id, bonuses.referral))?;
        }

        let user = tx.query_row(
            &format!("SELECT {} FROM users WHERE id = ?1", USER_COLUMNS),
            params![user_id],
            row_to_user,
        )?;
        tx.commit()?;

        tracing::info!(
            user_id = user.id,
            telegram_id = user.telegram_id,
            referred_by = ?user.referred_by_id,
            "registered user"
        );
        Ok(Registration { user, created: true })
    }
}

#[async_trait]
impl Repository<User> for UserRepository {
    async fn find_by_id(&self, id: u32) -> DomainResult<Option<User>> {
        let conn = self.conn.lock().await;
        let user = conn
            .query_row(
                &format!("SELECT {} FROM users WHERE id = ?1", USER_COLUMNS),
                params![id],
                row_to_user,
            )
            .optional()?;
        Ok(user)
    }
}

fn select_by_telegram_id(conn: &Connection, telegram_id: i64) -> rusqlite::Result<Option<User>> {
    conn.query_row(
        &format!("SELECT {} FROM users WHERE telegram_id = ?1", USER_COLUMNS),
        params![telegram_id],
        row_to_user,
    )
    .optional()
}

fn unused_referral_code(conn: &Connection, telegram_id: i64) -> DomainResult<String> {
    for _ in 0..REFERRAL_CODE_ATTEMPTS {
        let code = generate_referral_code(telegram_id);
        let taken: bool = conn.query_row(
            "SELECT EXISTS(SELECT 1 FROM users WHERE referral_code = ?1)",
            params![code],
            |row| row.get(0),
        )?;
        if !taken {
            return Ok(code);
        }
    }
    Err(DomainError::Conflict("Could not allocate a referral code".to_string()))
}

/// Convert a database row to User
fn row_to_user(row: &Row<'_>) -> rusqlite::Result<User> {
    Ok(User {
        id: row.get(0)?,
        telegram_id: row.get(1)?,
        username: row.get(2)?,
        first_name: row.get(3)?,
        last_name: row.get(4)?,
        photo_url: row.get(5)?,
        balance: row.get(6)?,
        referral_code: row.get(7)?,
        referred_by_id: row.get(8)?,
        created_at: row.get(9)?,
    })
}
