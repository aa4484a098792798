use std::collections::HashMap;

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::database::models::{Member, TeamInput, TeamRecord};

const ROLE_CAPTAIN: &str = "captain";
const ROLE_MEMBER: &str = "member";

#[derive(Debug, sqlx::FromRow)]
struct TeamRow {
    id: Uuid,
    team_name: String,
    idea: String,
    idea_description: String,
    created_at: DateTime<Utc>,
}

#[derive(Debug, sqlx::FromRow)]
struct MemberRow {
    team_id: Uuid,
    role: String,
    srn: String,
    name: String,
    email: String,
    wallet_address: Option<String>,
}

impl From<MemberRow> for Member {
    fn from(row: MemberRow) -> Self {
        Member {
            srn: row.srn,
            name: row.name,
            email: row.email,
            wallet_address: row.wallet_address,
        }
    }
}

/// Access to the persistent set of team registrations.
///
/// The pool is created once at startup and a clone of this handle is injected
/// into every handler; no ambient global connection state.
#[derive(Clone)]
pub struct TeamRepository {
    pool: SqlitePool,
}

impl TeamRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Full scan of every stored team, captain and members assembled back
    /// into the nested record shape. The duplicate check runs over this set;
    /// no index is assumed.
    pub async fn find_all(&self) -> Result<Vec<TeamRecord>, sqlx::Error> {
        let team_rows = sqlx::query_as::<_, TeamRow>(
            r#"
            SELECT id, team_name, idea, idea_description, created_at
            FROM teams
            ORDER BY created_at, id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        let member_rows = sqlx::query_as::<_, MemberRow>(
            r#"
            SELECT team_id, role, srn, name, email, wallet_address
            FROM team_members
            ORDER BY team_id, position
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        let mut rosters: HashMap<Uuid, (Option<Member>, Vec<Member>)> = HashMap::new();
        for row in member_rows {
            let entry = rosters.entry(row.team_id).or_default();
            if row.role == ROLE_CAPTAIN {
                entry.0 = Some(row.into());
            } else {
                entry.1.push(row.into());
            }
        }

        let mut teams = Vec::with_capacity(team_rows.len());
        for row in team_rows {
            let (captain, members) = rosters.remove(&row.id).unwrap_or_default();
            // A team row without a captain row means the store is corrupt.
            let captain = captain.ok_or(sqlx::Error::RowNotFound)?;
            teams.push(TeamRecord {
                id: row.id,
                team_name: row.team_name,
                captain,
                members,
                idea: row.idea,
                idea_description: row.idea_description,
                created_at: row.created_at,
            });
        }

        Ok(teams)
    }

    /// Insert a new team with its full roster, stamping `created_at`.
    /// Team row and member rows go in under one transaction so a failure
    /// leaves no partial registration behind.
    pub async fn insert(&self, input: TeamInput) -> Result<TeamRecord, sqlx::Error> {
        let id = Uuid::new_v4();
        let now = Utc::now();

        let mut tx = self.pool.begin().await?;

        sqlx::query(
            r#"
            INSERT INTO teams (id, team_name, idea, idea_description, created_at)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(id)
        .bind(&input.team_name)
        .bind(&input.idea)
        .bind(&input.idea_description)
        .bind(now)
        .execute(&mut *tx)
        .await?;

        Self::insert_member(&mut tx, id, ROLE_CAPTAIN, 0, &input.captain).await?;
        for (position, member) in input.members.iter().enumerate() {
            Self::insert_member(&mut tx, id, ROLE_MEMBER, (position + 1) as i64, member).await?;
        }

        tx.commit().await?;

        Ok(TeamRecord {
            id,
            team_name: input.team_name,
            captain: input.captain,
            members: input.members,
            idea: input.idea,
            idea_description: input.idea_description,
            created_at: now,
        })
    }

    async fn insert_member(
        tx: &mut sqlx::Transaction<'_, sqlx::Sqlite>,
        team_id: Uuid,
        role: &str,
        position: i64,
        member: &Member,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            r#"
            INSERT INTO team_members (id, team_id, role, position, srn, name, email, wallet_address)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(team_id)
        .bind(role)
        .bind(position)
        .bind(&member.srn)
        .bind(&member.name)
        .bind(&member.email)
        .bind(&member.wallet_address)
        .execute(&mut **tx)
        .await?;

        Ok(())
    }
}
