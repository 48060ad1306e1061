use chrono::{DateTime, Utc};

use crate::model::{id::SpaceId, price::Price};

pub mod availability;
pub mod event;

pub use availability::{Availability, AvailabilityStatus};

#[derive(Debug, Clone)]
pub struct Space {
    pub id: i64,
    pub space_id: SpaceId,
    pub space_type: String,
    pub media: Vec<String>,
    pub price: Price,
    pub description: Option<String>,
    pub pincode: Option<String>,
    pub google_maps_url: Option<String>,
    pub availability: Availability,
    pub created_at: DateTime<Utc>,
}

// 登録直後に呼び出し元へ返す識別子の組
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedSpace {
    pub id: i64,
    pub space_id: SpaceId,
}
