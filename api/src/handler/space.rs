use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use garde::Validate;
use kernel::model::{
    id::SpaceId,
    space::{
        event::{AvailabilityChange, DeleteSpace, UpdateAvailability},
        Availability,
    },
};
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

use crate::{
    extractor::{AppJson, AppQuery},
    model::{
        space::{
            AvailabilityDatesRequest, AvailabilityPatchRequest, AvailabilityQuery,
            AvailabilityResponse, CreateSpaceRequest, SpaceCreatedResponse, SpaceResponse,
            UpdateSpaceRequest, UpdateSpaceRequestWithId,
        },
        MessageResponse,
    },
};

fn space_not_found() -> AppError {
    AppError::EntityNotFound("Space not found".into())
}

pub async fn register_space(
    State(registry): State<AppRegistry>,
    AppJson(req): AppJson<CreateSpaceRequest>,
) -> AppResult<(StatusCode, Json<SpaceCreatedResponse>)> {
    req.validate(&())?;

    registry
        .space_repository()
        .create(req.into())
        .await
        .map(|created| (StatusCode::CREATED, Json(created.into())))
        .map_err(AppError::during("Error creating space"))
}

pub async fn show_space_list(
    State(registry): State<AppRegistry>,
) -> AppResult<Json<Vec<SpaceResponse>>> {
    registry
        .space_repository()
        .find_all()
        .await
        .map(|spaces| Json(spaces.into_iter().map(SpaceResponse::from).collect()))
        .map_err(AppError::during("Error fetching spaces"))
}

pub async fn show_space(
    Path(space_id): Path<SpaceId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<SpaceResponse>> {
    registry
        .space_repository()
        .find_by_id(&space_id)
        .await
        .map_err(AppError::during("Error fetching space"))
        .and_then(|space| match space {
            Some(space) => Ok(Json(space.into())),
            None => Err(space_not_found()),
        })
}

pub async fn update_space(
    Path(space_id): Path<SpaceId>,
    State(registry): State<AppRegistry>,
    AppJson(req): AppJson<UpdateSpaceRequest>,
) -> AppResult<Json<MessageResponse>> {
    req.validate(&())?;

    let update_space = UpdateSpaceRequestWithId::new(space_id, req);
    registry
        .space_repository()
        .update(update_space.into())
        .await
        .map(|_| Json(MessageResponse::new("Space updated successfully")))
        .map_err(AppError::during("Error updating space"))
}

pub async fn delete_space(
    Path(space_id): Path<SpaceId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<MessageResponse>> {
    registry
        .space_repository()
        .delete(DeleteSpace { space_id })
        .await
        .map(|_| Json(MessageResponse::new("Space deleted successfully")))
        .map_err(AppError::during("Error deleting space"))
}

// 指定期間の空き状況を返す。start_date / end_date のどちらかを省略すると、その側は無制限になる
pub async fn show_space_availability(
    Path(space_id): Path<SpaceId>,
    AppQuery(query): AppQuery<AvailabilityQuery>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<Availability>> {
    let availability = registry
        .space_repository()
        .find_availability(&space_id)
        .await
        .map_err(AppError::during("Error fetching availability"))?
        .ok_or_else(space_not_found)?;

    Ok(Json(availability.range(
        query.start_date.as_deref(),
        query.end_date.as_deref(),
    )))
}

async fn change_availability(
    registry: &AppRegistry,
    space_id: SpaceId,
    change: AvailabilityChange,
    success: &'static str,
    failure: &'static str,
) -> AppResult<Json<AvailabilityResponse>> {
    registry
        .space_repository()
        .update_availability(UpdateAvailability::new(space_id, change))
        .await
        .map(|availability| {
            Json(AvailabilityResponse {
                message: success,
                availability,
            })
        })
        .map_err(AppError::during(failure))
}

pub async fn add_space_availability(
    Path(space_id): Path<SpaceId>,
    State(registry): State<AppRegistry>,
    AppJson(req): AppJson<AvailabilityDatesRequest>,
) -> AppResult<Json<AvailabilityResponse>> {
    change_availability(
        &registry,
        space_id,
        AvailabilityChange::Add(req.dates),
        "Availability slots added successfully",
        "Error adding availability slots",
    )
    .await
}

pub async fn remove_space_availability(
    Path(space_id): Path<SpaceId>,
    State(registry): State<AppRegistry>,
    AppJson(req): AppJson<AvailabilityDatesRequest>,
) -> AppResult<Json<AvailabilityResponse>> {
    change_availability(
        &registry,
        space_id,
        AvailabilityChange::Remove(req.dates),
        "Availability slots removed successfully",
        "Error removing availability slots",
    )
    .await
}

pub async fn patch_space_availability(
    Path(space_id): Path<SpaceId>,
    State(registry): State<AppRegistry>,
    AppJson(req): AppJson<AvailabilityPatchRequest>,
) -> AppResult<Json<AvailabilityResponse>> {
    change_availability(
        &registry,
        space_id,
        AvailabilityChange::Patch(req.updates.into_iter().collect()),
        "Availability slots updated successfully",
        "Error updating availability slots",
    )
    .await
}
