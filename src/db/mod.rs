mod schema;

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use anyhow::Result;
use chrono::Utc;
use rusqlite::{Connection, OptionalExtension};

use crate::curriculum::{self, CURRICULUM};
use crate::models::*;

/// Ratings storage, keyed by `(lesson, user_id)`.
pub struct Database {
    conn: Arc<Mutex<Connection>>,
}

impl Database {
    pub fn open(path: PathBuf) -> Result<Self> {
        let parent = path
            .parent()
            .ok_or_else(|| anyhow::anyhow!("Database path has no parent directory"))?;
        std::fs::create_dir_all(parent)?;
        let conn = Connection::open(&path)?;
        conn.pragma_update(None, "journal_mode", "WAL")?;
        tracing::debug!("Opened database at {}", path.display());
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// Open the database in the platform data directory.
    pub fn open_default() -> Result<Self> {
        Self::open(default_path()?)
    }

    pub fn open_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    pub fn migrate(&self) -> Result<()> {
        let mut conn = self.conn.lock().expect("database lock poisoned");
        schema::run_migrations(&mut conn)
    }

    // ============================================================
    // Rating operations
    // ============================================================

    pub fn get_rating(&self, lesson: &str, user_id: &str) -> Result<Option<Rating>> {
        let conn = self.conn.lock().expect("database lock poisoned");
        let rating = conn
            .query_row(
                "SELECT lesson, user_id, value, updated_at
                 FROM ratings WHERE lesson = ? AND user_id = ?",
                [lesson, user_id],
                |row| {
                    Ok(Rating {
                        lesson: row.get(0)?,
                        user_id: row.get(1)?,
                        value: row.get(2)?,
                        updated_at: parse_datetime(row.get::<_, String>(3)?),
                    })
                },
            )
            .optional()?;

        Ok(rating)
    }

    /// Create or replace the user's rating for a lesson.
    pub fn set_rating(&self, lesson: &str, user_id: &str, value: i64) -> Result<Rating> {
        ensure_lesson(lesson)?;
        let value = validate_rating(value)?;
        let now = Utc::now();

        let conn = self.conn.lock().expect("database lock poisoned");
        conn.execute(
            "INSERT INTO ratings (lesson, user_id, value, updated_at) VALUES (?, ?, ?, ?)
             ON CONFLICT(lesson, user_id) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at",
            (lesson, user_id, value, now.to_rfc3339()),
        )?;

        tracing::debug!("User {} rated {} as {}", user_id, lesson, value);

        Ok(Rating {
            lesson: lesson.to_string(),
            user_id: user_id.to_string(),
            value,
            updated_at: now,
        })
    }

    pub fn delete_rating(&self, lesson: &str, user_id: &str) -> Result<bool> {
        let conn = self.conn.lock().expect("database lock poisoned");
        let rows = conn.execute(
            "DELETE FROM ratings WHERE lesson = ? AND user_id = ?",
            [lesson, user_id],
        )?;
        Ok(rows > 0)
    }

    /// The user's rating for every curriculum lesson, in curriculum order.
    pub fn get_user_ratings(&self, user_id: &str) -> Result<Vec<LessonRating>> {
        let conn = self.conn.lock().expect("database lock poisoned");
        let mut stmt = conn.prepare("SELECT lesson, value FROM ratings WHERE user_id = ?")?;
        let rated = stmt
            .query_map([user_id], |row| {
                Ok((row.get::<_, String>(0)?, row.get::<_, u8>(1)?))
            })?
            .collect::<Result<Vec<_>, _>>()?;

        let ratings = CURRICULUM
            .iter()
            .map(|&lesson| LessonRating {
                lesson: lesson.to_string(),
                value: rated
                    .iter()
                    .find(|(rated_lesson, _)| rated_lesson == lesson)
                    .map(|(_, value)| *value),
            })
            .collect();

        Ok(ratings)
    }

    pub fn get_rating_summary(&self, lesson: &str) -> Result<RatingSummary> {
        ensure_lesson(lesson)?;

        let conn = self.conn.lock().expect("database lock poisoned");
        let (count, average) = conn.query_row(
            "SELECT COUNT(*), AVG(value) FROM ratings WHERE lesson = ?",
            [lesson],
            |row| Ok((row.get::<_, u32>(0)?, row.get::<_, Option<f64>>(1)?)),
        )?;

        Ok(RatingSummary {
            lesson: lesson.to_string(),
            count,
            average,
        })
    }
}

impl Clone for Database {
    fn clone(&self) -> Self {
        Self {
            conn: self.conn.clone(),
        }
    }
}

/// Default database location in the platform data directory.
pub fn default_path() -> Result<PathBuf> {
    let dirs = directories::ProjectDirs::from("", "", "physics-lessons")
        .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))?;
    Ok(dirs.data_dir().join("ratings.db"))
}

fn ensure_lesson(lesson: &str) -> Result<(), RatingError> {
    if curriculum::is_lesson(lesson) {
        Ok(())
    } else {
        Err(RatingError::UnknownLesson(lesson.to_string()))
    }
}

fn parse_datetime(s: String) -> chrono::DateTime<Utc> {
    chrono::DateTime::parse_from_rfc3339(&s)
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or_else(|_| Utc::now())
}
