use async_trait::async_trait;
use shared::error::AppResult;

use crate::model::{
    id::VendorId,
    vendor::{
        event::{CreateVendor, DeleteVendor, UpdateVendor, UpdateVendorSpaces},
        CreatedVendor, SpaceIds, Vendor,
    },
};

#[async_trait]
pub trait VendorRepository: Send + Sync {
    async fn create(&self, event: CreateVendor) -> AppResult<CreatedVendor>;
    async fn find_all(&self) -> AppResult<Vec<Vendor>>;
    async fn find_by_id(&self, vendor_id: &VendorId) -> AppResult<Option<Vendor>>;
    async fn update(&self, event: UpdateVendor) -> AppResult<()>;
    async fn delete(&self, event: DeleteVendor) -> AppResult<()>;
    // ベンダーに紐づくスペース ID 一覧を更新し、更新後の一覧を返す
    async fn update_space_ids(&self, event: UpdateVendorSpaces) -> AppResult<SpaceIds>;
}
