use actix_web::{HttpResponse, Result, web};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    database::{models::TeamInput, repositories::TeamRepository},
    error::AppError,
    handlers::shared::ApiResponse,
    services::duplicate,
};

#[derive(Debug, Serialize, Deserialize)]
pub struct RegistrationResponse {
    pub message: String,
    #[serde(rename = "teamID")]
    pub team_id: Uuid,
}

/// POST /add_team
///
/// Single write path of the service: validate the payload, scan the stored
/// teams for identifying-field collisions, insert only on a clean result.
/// Check and insert are two separate store round trips with nothing spanning
/// them; concurrent registrations sharing a field can both pass the check
/// (known gap, the store does not enforce uniqueness either).
pub async fn add_team(
    repository: web::Data<TeamRepository>,
    payload: Option<web::Json<TeamInput>>,
) -> Result<HttpResponse> {
    let input = payload
        .ok_or_else(|| AppError::Validation("No Team Data Provided".to_string()))?
        .into_inner();

    if input.team_name.trim().is_empty() {
        return Err(AppError::Validation("No Team Data Provided".to_string()).into());
    }

    let existing = repository.find_all().await.map_err(|e| {
        log::error!("Error fetching teams for duplicate check: {}", e);
        AppError::Dependency(e)
    })?;

    let check = duplicate::check_team(&input, &existing);
    if check.has_duplicates {
        log::info!(
            "Registration of '{}' rejected as duplicate ({} colliding emails)",
            input.team_name,
            check.duplicate_emails.len()
        );
        return Err(AppError::Conflict(check).into());
    }

    let team = repository.insert(input).await.map_err(|e| {
        log::error!("Error inserting team: {}", e);
        AppError::Dependency(e)
    })?;

    log::info!("Team '{}' registered as {}", team.team_name, team.id);

    Ok(HttpResponse::Ok().json(RegistrationResponse {
        message: "Team successfully added.".to_string(),
        team_id: team.id,
    }))
}

/// GET /teams — every stored registration, the same scan the duplicate
/// check runs over.
pub async fn get_teams(repository: web::Data<TeamRepository>) -> Result<HttpResponse> {
    let teams = repository.find_all().await.map_err(|e| {
        log::error!("Error fetching teams: {}", e);
        AppError::Dependency(e)
    })?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(teams)))
}
