use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;

use async_trait::async_trait;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use sqlx::SqlitePool;
use wordjet_algo::AnswerDirection;

use super::{StoreError, TallyStore};

const SCHEMA_SQL: &str = r#"
CREATE TABLE IF NOT EXISTS "scores" (
  "word" TEXT PRIMARY KEY NOT NULL,
  "up" INTEGER NOT NULL,
  "down" INTEGER NOT NULL
)
"#;

const INCREMENT_UP_SQL: &str = r#"
INSERT INTO "scores" ("word", "up", "down") VALUES (?1, 1, 0)
ON CONFLICT("word") DO UPDATE SET "up" = "up" + 1
"#;

const INCREMENT_DOWN_SQL: &str = r#"
INSERT INTO "scores" ("word", "up", "down") VALUES (?1, 0, 1)
ON CONFLICT("word") DO UPDATE SET "down" = "down" + 1
"#;

#[derive(Debug, Clone)]
pub struct SqliteTallyStore {
    pool: SqlitePool,
}

impl SqliteTallyStore {
    /// Open (or create) the database file and make sure the table exists
    pub async fn connect(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            if let Err(err) = std::fs::create_dir_all(parent) {
                tracing::warn!(error = %err, dir = %parent.display(), "failed to create database directory");
            }
        }

        let options = SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .busy_timeout(Duration::from_secs(30));

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await?;

        let store = Self::from_pool(pool).await?;
        tracing::info!(path = %path.display(), "sqlite tally store ready");
        Ok(store)
    }

    pub async fn from_pool(pool: SqlitePool) -> Result<Self, StoreError> {
        sqlx::query(SCHEMA_SQL).execute(&pool).await?;
        Ok(Self { pool })
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[async_trait]
impl TallyStore for SqliteTallyStore {
    async fn get_all(&self) -> Result<HashMap<String, (u64, u64)>, StoreError> {
        let rows: Vec<(String, i64, i64)> =
            sqlx::query_as(r#"SELECT "word", "up", "down" FROM "scores""#)
                .fetch_all(&self.pool)
                .await?;

        rows.into_iter()
            .map(|(word, up, down)| match (u64::try_from(up), u64::try_from(down)) {
                (Ok(up), Ok(down)) => Ok((word, (up, down))),
                _ => Err(StoreError::NegativeCount { word }),
            })
            .collect()
    }

    async fn increment(&self, word: &str, direction: AnswerDirection) -> Result<(), StoreError> {
        let sql = match direction {
            AnswerDirection::Up => INCREMENT_UP_SQL,
            AnswerDirection::Down => INCREMENT_DOWN_SQL,
        };

        let result = sqlx::query(sql).bind(word).execute(&self.pool).await?;
        if result.rows_affected() != 1 {
            return Err(StoreError::UnexpectedRowCount {
                word: word.to_string(),
                rows: result.rows_affected(),
            });
        }

        tracing::debug!(word, direction = direction.as_str(), "tally incremented");
        Ok(())
    }
}
