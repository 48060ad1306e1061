use async_trait::async_trait;
use shared::error::AppResult;

use crate::model::{
    id::SpaceId,
    space::{
        event::{CreateSpace, DeleteSpace, UpdateAvailability, UpdateSpace},
        Availability, CreatedSpace, Space,
    },
};

#[async_trait]
pub trait SpaceRepository: Send + Sync {
    // スペースを登録し、新しく発行したスペース ID を返す
    async fn create(&self, event: CreateSpace) -> AppResult<CreatedSpace>;
    // 全スペースを取得する（順序は保証しない）
    async fn find_all(&self) -> AppResult<Vec<Space>>;
    async fn find_by_id(&self, space_id: &SpaceId) -> AppResult<Option<Space>>;
    // 対象が存在しない場合は EntityNotFound を返す
    async fn update(&self, event: UpdateSpace) -> AppResult<()>;
    async fn delete(&self, event: DeleteSpace) -> AppResult<()>;
    async fn find_availability(&self, space_id: &SpaceId) -> AppResult<Option<Availability>>;
    // 現在の空き状況を読み込み、変更を適用して保存し、適用後の全体を返す
    async fn update_availability(&self, event: UpdateAvailability) -> AppResult<Availability>;
}
