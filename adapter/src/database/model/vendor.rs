use kernel::model::{
    id::VendorId,
    vendor::{SpaceIds, Vendor},
};
use sqlx::types::{
    chrono::{DateTime, Utc},
    Json,
};

#[derive(sqlx::FromRow)]
pub struct VendorRow {
    pub id: i64,
    pub vendor_id: VendorId,
    pub name: String,
    pub firm_name: Option<String>,
    pub phone_number: String,
    pub email: String,
    pub gst_number: Option<String>,
    pub address: Option<String>,
    pub space_ids: Json<SpaceIds>,
    pub created_at: DateTime<Utc>,
}

impl From<VendorRow> for Vendor {
    fn from(value: VendorRow) -> Self {
        let VendorRow {
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
        Vendor {
            id,
            vendor_id,
            name,
            firm_name,
            phone_number,
            email,
            gst_number,
            address,
            space_ids: space_ids.0,
            created_at,
        }
    }
}

#[derive(sqlx::FromRow)]
pub struct VendorSpaceIdsRow {
    pub space_ids: Json<SpaceIds>,
}
