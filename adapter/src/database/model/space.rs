use kernel::model::{
    id::SpaceId,
    space::{Availability, Space},
};
use shared::error::AppError;
use sqlx::types::{
    chrono::{DateTime, Utc},
    Json,
};

// spaces テーブルの 1 行。price は文字列として読み出す（`price::TEXT`）
#[derive(sqlx::FromRow)]
pub struct SpaceRow {
    pub id: i64,
    pub space_id: SpaceId,
    pub space_type: String,
    pub media: Json<Vec<String>>,
    pub price: String,
    pub description: Option<String>,
    pub pincode: Option<String>,
    pub google_maps_url: Option<String>,
    pub availability: Json<Availability>,
    pub created_at: DateTime<Utc>,
}

impl TryFrom<SpaceRow> for Space {
    type Error = AppError;

    fn try_from(value: SpaceRow) -> Result<Self, Self::Error> {
        let SpaceRow {
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
        let price = price.parse().map_err(|e| {
            AppError::ConversionEntityError(format!("invalid price of space {space_id}: {e}"))
        })?;
        Ok(Space {
            id,
            space_id,
            space_type,
            media: media.0,
            price,
            description,
            pincode,
            google_maps_url,
            availability: availability.0,
            created_at,
        })
    }
}

// 空き状況の読み書きだけで使う型
#[derive(sqlx::FromRow)]
pub struct SpaceAvailabilityRow {
    pub availability: Json<Availability>,
}
