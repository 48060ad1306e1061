use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use garde::Validate;
use kernel::model::{
    id::{SpaceId, VendorId},
    vendor::event::{DeleteVendor, SpaceMembershipChange, UpdateVendorSpaces},
};
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

use crate::{
    extractor::AppJson,
    model::{
        vendor::{
            AddVendorSpaceRequest, CreateVendorRequest, UpdateVendorRequest,
            UpdateVendorRequestWithId, VendorCreatedResponse, VendorResponse,
            VendorSpacesResponse,
        },
        MessageResponse,
    },
};

pub async fn register_vendor(
    State(registry): State<AppRegistry>,
    AppJson(req): AppJson<CreateVendorRequest>,
) -> AppResult<(StatusCode, Json<VendorCreatedResponse>)> {
    req.validate(&())?;

    registry
        .vendor_repository()
        .create(req.into())
        .await
        .map(|created| (StatusCode::CREATED, Json(created.into())))
        .map_err(AppError::during("Error creating vendor"))
}

pub async fn show_vendor_list(
    State(registry): State<AppRegistry>,
) -> AppResult<Json<Vec<VendorResponse>>> {
    registry
        .vendor_repository()
        .find_all()
        .await
        .map(|vendors| Json(vendors.into_iter().map(VendorResponse::from).collect()))
        .map_err(AppError::during("Error fetching vendors"))
}

pub async fn show_vendor(
    Path(vendor_id): Path<VendorId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<VendorResponse>> {
    registry
        .vendor_repository()
        .find_by_id(&vendor_id)
        .await
        .map_err(AppError::during("Error fetching vendor"))
        .and_then(|vendor| match vendor {
            Some(vendor) => Ok(Json(vendor.into())),
            None => Err(AppError::EntityNotFound("Vendor not found".into())),
        })
}

pub async fn update_vendor(
    Path(vendor_id): Path<VendorId>,
    State(registry): State<AppRegistry>,
    AppJson(req): AppJson<UpdateVendorRequest>,
) -> AppResult<Json<MessageResponse>> {
    req.validate(&())?;

    let update_vendor = UpdateVendorRequestWithId::new(vendor_id, req);
    registry
        .vendor_repository()
        .update(update_vendor.into())
        .await
        .map(|_| Json(MessageResponse::new("Vendor updated successfully")))
        .map_err(AppError::during("Error updating vendor"))
}

pub async fn delete_vendor(
    Path(vendor_id): Path<VendorId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<MessageResponse>> {
    registry
        .vendor_repository()
        .delete(DeleteVendor { vendor_id })
        .await
        .map(|_| Json(MessageResponse::new("Vendor deleted successfully")))
        .map_err(AppError::during("Error deleting vendor"))
}

// スペースの実在確認はしない
pub async fn add_vendor_space(
    Path(vendor_id): Path<VendorId>,
    State(registry): State<AppRegistry>,
    AppJson(req): AppJson<AddVendorSpaceRequest>,
) -> AppResult<Json<VendorSpacesResponse>> {
    let event = UpdateVendorSpaces::new(vendor_id, SpaceMembershipChange::Add(req.space_id));
    registry
        .vendor_repository()
        .update_space_ids(event)
        .await
        .map(|space_ids| {
            Json(VendorSpacesResponse {
                message: "Space added to vendor successfully",
                space_ids,
            })
        })
        .map_err(AppError::during("Error adding space to vendor"))
}

pub async fn remove_vendor_space(
    Path((vendor_id, space_id)): Path<(VendorId, SpaceId)>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<VendorSpacesResponse>> {
    let event = UpdateVendorSpaces::new(vendor_id, SpaceMembershipChange::Remove(space_id));
    registry
        .vendor_repository()
        .update_space_ids(event)
        .await
        .map(|space_ids| {
            Json(VendorSpacesResponse {
                message: "Space removed from vendor successfully",
                space_ids,
            })
        })
        .map_err(AppError::during("Error removing space from vendor"))
}
