use anyhow::Result;
use fake::Fake;
use fake::faker::name::en::Name;
use sqlx::SqlitePool;
use sqlx::sqlite::SqlitePoolOptions;
use tempfile::NamedTempFile;

use team_registry::TeamRepository;
use team_registry::database::models::{Member, TeamInput};

/// Test database wrapper that provides an isolated SQLite file per test.
pub struct TestDb {
    pub pool: SqlitePool,
    _temp_file: NamedTempFile,
}

impl TestDb {
    /// Create a new test database with fresh schema
    pub async fn new() -> Result<Self> {
        let temp_file = NamedTempFile::new()?;
        let database_url = format!("sqlite:{}", temp_file.path().display());

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect(&database_url)
            .await?;

        // Run migrations
        sqlx::migrate!("./migrations").run(&pool).await?;

        Ok(TestDb {
            pool,
            _temp_file: temp_file,
        })
    }

    pub fn repository(&self) -> TeamRepository {
        TeamRepository::new(self.pool.clone())
    }
}

/// Member with fixed identifying fields and a faked display name.
pub fn member(srn: &str, email: &str) -> Member {
    Member {
        srn: srn.to_string(),
        name: Name().fake(),
        email: email.to_string(),
        wallet_address: None,
    }
}

pub fn team(team_name: &str, captain: Member, members: Vec<Member>) -> TeamInput {
    TeamInput {
        team_name: team_name.to_string(),
        captain,
        members,
        idea: "An idea".to_string(),
        idea_description: "A longer description of the idea".to_string(),
    }
}

pub async fn count_teams(pool: &SqlitePool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM teams")
        .fetch_one(pool)
        .await
        .unwrap()
}
