use chrono::{DateTime, Utc};
use derive_new::new;
use garde::Validate;
use kernel::model::{
    id::{SpaceId, VendorId},
    vendor::{
        event::{CreateVendor, UpdateVendor},
        CreatedVendor, SpaceIds, Vendor,
    },
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Validate)]
pub struct CreateVendorRequest {
    #[garde(length(min = 1, max = 255))]
    pub name: String,
    #[garde(length(max = 255))]
    pub firm_name: Option<String>,
    #[garde(length(min = 1, max = 20))]
    pub phone_number: String,
    #[garde(length(min = 1, max = 255))]
    pub email: String,
    #[garde(length(max = 20))]
    pub gst_number: Option<String>,
    #[garde(skip)]
    pub address: Option<String>,
    #[garde(skip)]
    pub space_ids: Option<SpaceIds>,
}

impl From<CreateVendorRequest> for CreateVendor {
    fn from(value: CreateVendorRequest) -> Self {
        let CreateVendorRequest {
            name,
            firm_name,
            phone_number,
            email,
            gst_number,
            address,
            space_ids,
        } = value;
        CreateVendor {
            name,
            firm_name,
            phone_number,
            email,
            gst_number,
            address,
            space_ids: space_ids.unwrap_or_default(),
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateVendorRequest {
    #[garde(length(min = 1, max = 255))]
    pub name: String,
    #[garde(length(max = 255))]
    pub firm_name: Option<String>,
    #[garde(length(min = 1, max = 20))]
    pub phone_number: String,
    #[garde(length(min = 1, max = 255))]
    pub email: String,
    #[garde(length(max = 20))]
    pub gst_number: Option<String>,
    #[garde(skip)]
    pub address: Option<String>,
    #[garde(skip)]
    pub space_ids: Option<SpaceIds>,
}

#[derive(new)]
pub struct UpdateVendorRequestWithId(VendorId, UpdateVendorRequest);

impl From<UpdateVendorRequestWithId> for UpdateVendor {
    fn from(value: UpdateVendorRequestWithId) -> Self {
        let UpdateVendorRequestWithId(
            vendor_id,
            UpdateVendorRequest {
                name,
                firm_name,
                phone_number,
                email,
                gst_number,
                address,
                space_ids,
            },
        ) = value;
        UpdateVendor {
            vendor_id,
            name,
            firm_name,
            phone_number,
            email,
            gst_number,
            address,
            space_ids: space_ids.unwrap_or_default(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct VendorCreatedResponse {
    pub id: i64,
    pub vendor_id: VendorId,
    pub message: &'static str,
}

impl From<CreatedVendor> for VendorCreatedResponse {
    fn from(value: CreatedVendor) -> Self {
        let CreatedVendor { id, vendor_id } = value;
        Self {
            id,
            vendor_id,
            message: "Vendor created successfully",
        }
    }
}

#[derive(Debug, Serialize)]
pub struct VendorResponse {
    pub id: i64,
    pub vendor_id: VendorId,
    pub name: String,
    pub firm_name: Option<String>,
    pub phone_number: String,
    pub email: String,
    pub gst_number: Option<String>,
    pub address: Option<String>,
    pub space_ids: SpaceIds,
    pub created_at: DateTime<Utc>,
}

impl From<Vendor> for VendorResponse {
    fn from(value: Vendor) -> Self {
        let Vendor {
            id,
            vendor_id,
            name,
            firm_name,
            phone_number,
            email,
            gst_number,
            address,
            space_ids,
            created_at,
        } = value;
        Self {
            id,
            vendor_id,
            name,
            firm_name,
            phone_number,
            email,
            gst_number,
            address,
            space_ids,
            created_at,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct AddVendorSpaceRequest {
    pub space_id: SpaceId,
}

#[derive(Debug, Serialize)]
pub struct VendorSpacesResponse {
    pub message: &'static str,
    pub space_ids: SpaceIds,
}
