use chrono::{DateTime, Utc};
use derive_new::new;
use garde::Validate;
use kernel::model::{
    id::SpaceId,
    price::Price,
    space::{
        event::{CreateSpace, UpdateSpace},
        Availability, AvailabilityStatus, CreatedSpace, Space,
    },
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Deserialize, Validate)]
pub struct CreateSpaceRequest {
    #[serde(rename = "type")]
    #[garde(length(min = 1, max = 100))]
    pub space_type: String,
    #[garde(skip)]
    pub media: Option<Vec<String>>,
    #[garde(skip)]
    pub price: Price,
    #[garde(skip)]
    pub description: Option<String>,
    #[garde(length(max = 10))]
    pub pincode: Option<String>,
    #[garde(skip)]
    pub google_maps_url: Option<String>,
    #[garde(skip)]
    pub availability: Option<Availability>,
}

impl From<CreateSpaceRequest> for CreateSpace {
    fn from(value: CreateSpaceRequest) -> Self {
        let CreateSpaceRequest {
            space_type,
            media,
            price,
            description,
            pincode,
            google_maps_url,
            availability,
        } = value;
        // 省略・null はどちらも空として扱う
        CreateSpace {
            space_type,
            media: media.unwrap_or_default(),
            price,
            description,
            pincode,
            google_maps_url,
            availability: availability.unwrap_or_default(),
        }
    }
}

// 更新は全項目の上書きなので、変更しない項目も送り直す必要がある
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateSpaceRequest {
    #[serde(rename = "type")]
    #[garde(length(min = 1, max = 100))]
    pub space_type: String,
    #[garde(skip)]
    pub media: Option<Vec<String>>,
    #[garde(skip)]
    pub price: Price,
    #[garde(skip)]
    pub description: Option<String>,
    #[garde(length(max = 10))]
    pub pincode: Option<String>,
    #[garde(skip)]
    pub google_maps_url: Option<String>,
    #[garde(skip)]
    pub availability: Option<Availability>,
}

#[derive(new)]
pub struct UpdateSpaceRequestWithId(SpaceId, UpdateSpaceRequest);

impl From<UpdateSpaceRequestWithId> for UpdateSpace {
    fn from(value: UpdateSpaceRequestWithId) -> Self {
        let UpdateSpaceRequestWithId(
            space_id,
            UpdateSpaceRequest {
                space_type,
                media,
                price,
                description,
                pincode,
                google_maps_url,
                availability,
            },
        ) = value;
        UpdateSpace {
            space_id,
            space_type,
            media: media.unwrap_or_default(),
            price,
            description,
            pincode,
            google_maps_url,
            availability: availability.unwrap_or_default(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SpaceCreatedResponse {
    pub id: i64,
    pub space_id: SpaceId,
    pub message: &'static str,
}

impl From<CreatedSpace> for SpaceCreatedResponse {
    fn from(value: CreatedSpace) -> Self {
        let CreatedSpace { id, space_id } = value;
        Self {
            id,
            space_id,
            message: "Space created successfully",
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SpaceResponse {
    pub id: i64,
    pub space_id: SpaceId,
    #[serde(rename = "type")]
    pub space_type: String,
    pub media: Vec<String>,
    pub price: Price,
    pub description: Option<String>,
    pub pincode: Option<String>,
    pub google_maps_url: Option<String>,
    pub availability: Availability,
    pub created_at: DateTime<Utc>,
}

impl From<Space> for SpaceResponse {
    fn from(value: Space) -> Self {
        let Space {
            id,
            space_id,
            space_type,
            media,
            price,
            description,
            pincode,
            google_maps_url,
            availability,
            created_at,
        } = value;
        Self {
            id,
            space_id,
            space_type,
            media,
            price,
            description,
            pincode,
            google_maps_url,
            availability,
            created_at,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct AvailabilityQuery {
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct AvailabilityDatesRequest {
    pub dates: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct AvailabilityPatchRequest {
    pub updates: BTreeMap<String, AvailabilityStatus>,
}

#[derive(Debug, Serialize)]
pub struct AvailabilityResponse {
    pub message: &'static str,
    pub availability: Availability,
}
