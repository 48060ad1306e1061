use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
    Router,
};
use kernel::model::{
    id::{SpaceId, VendorId},
    space::{
        event::{CreateSpace, DeleteSpace, UpdateAvailability, UpdateSpace},
        Availability, CreatedSpace, Space,
    },
    vendor::{
        event::{CreateVendor, DeleteVendor, UpdateVendor, UpdateVendorSpaces},
        CreatedVendor, SpaceIds, Vendor,
    },
};
use kernel::repository::{
    health::HealthCheckRepository, space::SpaceRepository, vendor::VendorRepository,
};
use registry::AppRegistry;
use shared::error::{AppError, AppResult};
use tower::ServiceExt;

// 接続できないストアを模したエラー
fn unreachable_store() -> AppError {
    AppError::SpecificOperationError(sqlx::Error::PoolTimedOut)
}

#[derive(Default)]
pub struct InMemoryStore {
    failing: bool,
    next_id: Mutex<i64>,
    spaces: Mutex<Vec<Space>>,
    vendors: Mutex<Vec<Vendor>>,
}

impl InMemoryStore {
    fn failing() -> Self {
        Self {
            failing: true,
            ..Default::default()
        }
    }

    fn check(&self) -> AppResult<()> {
        if self.failing {
            Err(unreachable_store())
        } else {
            Ok(())
        }
    }

    fn next_id(&self) -> i64 {
        let mut id = self.next_id.lock().unwrap();
        *id += 1;
        *id
    }
}

#[async_trait]
impl HealthCheckRepository for InMemoryStore {
    async fn check_db(&self) -> bool {
        !self.failing
    }
}

#[async_trait]
impl SpaceRepository for InMemoryStore {
    async fn create(&self, event: CreateSpace) -> AppResult<CreatedSpace> {
        self.check()?;
        let created = CreatedSpace {
            id: self.next_id(),
            space_id: SpaceId::new(),
        };
        self.spaces.lock().unwrap().push(Space {
            id: created.id,
            space_id: created.space_id.clone(),
            space_type: event.space_type,
            media: event.media,
            price: event.price,
            description: event.description,
            pincode: event.pincode,
            google_maps_url: event.google_maps_url,
            availability: event.availability,
            created_at: chrono::Utc::now(),
        });
        Ok(created)
    }

    async fn find_all(&self) -> AppResult<Vec<Space>> {
        self.check()?;
        Ok(self.spaces.lock().unwrap().clone())
    }

    async fn find_by_id(&self, space_id: &SpaceId) -> AppResult<Option<Space>> {
        self.check()?;
        Ok(self
            .spaces
            .lock()
            .unwrap()
            .iter()
            .find(|s| &s.space_id == space_id)
            .cloned())
    }

    async fn update(&self, event: UpdateSpace) -> AppResult<()> {
        self.check()?;
        let mut spaces = self.spaces.lock().unwrap();
        let space = spaces
            .iter_mut()
            .find(|s| s.space_id == event.space_id)
            .ok_or_else(|| AppError::EntityNotFound("Space not found".into()))?;
        space.space_type = event.space_type;
        space.media = event.media;
        space.price = event.price;
        space.description = event.description;
        space.pincode = event.pincode;
        space.google_maps_url = event.google_maps_url;
        space.availability = event.availability;
        Ok(())
    }

    async fn delete(&self, event: DeleteSpace) -> AppResult<()> {
        self.check()?;
        let mut spaces = self.spaces.lock().unwrap();
        let before = spaces.len();
        spaces.retain(|s| s.space_id != event.space_id);
        if spaces.len() == before {
            return Err(AppError::EntityNotFound("Space not found".into()));
        }
        Ok(())
    }

    async fn find_availability(&self, space_id: &SpaceId) -> AppResult<Option<Availability>> {
        Ok(SpaceRepository::find_by_id(self, space_id)
            .await?
            .map(|s| s.availability))
    }

    async fn update_availability(&self, event: UpdateAvailability) -> AppResult<Availability> {
        self.check()?;
        let mut spaces = self.spaces.lock().unwrap();
        let space = spaces
            .iter_mut()
            .find(|s| s.space_id == event.space_id)
            .ok_or_else(|| AppError::EntityNotFound("Space not found".into()))?;
        event.change.apply(&mut space.availability);
        Ok(space.availability.clone())
    }
}

#[async_trait]
impl VendorRepository for InMemoryStore {
    async fn create(&self, event: CreateVendor) -> AppResult<CreatedVendor> {
        self.check()?;
        let created = CreatedVendor {
            id: self.next_id(),
            vendor_id: VendorId::new(),
        };
        self.vendors.lock().unwrap().push(Vendor {
            id: created.id,
            vendor_id: created.vendor_id.clone(),
            name: event.name,
            firm_name: event.firm_name,
            phone_number: event.phone_number,
            email: event.email,
            gst_number: event.gst_number,
            address: event.address,
            space_ids: event.space_ids,
            created_at: chrono::Utc::now(),
        });
        Ok(created)
    }

    async fn find_all(&self) -> AppResult<Vec<Vendor>> {
        self.check()?;
        Ok(self.vendors.lock().unwrap().clone())
    }

    async fn find_by_id(&self, vendor_id: &VendorId) -> AppResult<Option<Vendor>> {
        self.check()?;
        Ok(self
            .vendors
            .lock()
            .unwrap()
            .iter()
            .find(|v| &v.vendor_id == vendor_id)
            .cloned())
    }

    async fn update(&self, event: UpdateVendor) -> AppResult<()> {
        self.check()?;
        let mut vendors = self.vendors.lock().unwrap();
        let vendor = vendors
            .iter_mut()
            .find(|v| v.vendor_id == event.vendor_id)
            .ok_or_else(|| AppError::EntityNotFound("Vendor not found".into()))?;
        vendor.name = event.name;
        vendor.firm_name = event.firm_name;
        vendor.phone_number = event.phone_number;
        vendor.email = event.email;
        vendor.gst_number = event.gst_number;
        vendor.address = event.address;
        vendor.space_ids = event.space_ids;
        Ok(())
    }

    async fn delete(&self, event: DeleteVendor) -> AppResult<()> {
        self.check()?;
        let mut vendors = self.vendors.lock().unwrap();
        let before = vendors.len();
        vendors.retain(|v| v.vendor_id != event.vendor_id);
        if vendors.len() == before {
            return Err(AppError::EntityNotFound("Vendor not found".into()));
        }
        Ok(())
    }

    async fn update_space_ids(&self, event: UpdateVendorSpaces) -> AppResult<SpaceIds> {
        self.check()?;
        let mut vendors = self.vendors.lock().unwrap();
        let vendor = vendors
            .iter_mut()
            .find(|v| v.vendor_id == event.vendor_id)
            .ok_or_else(|| AppError::EntityNotFound("Vendor not found".into()))?;
        event.change.apply(&mut vendor.space_ids);
        Ok(vendor.space_ids.clone())
    }
}

fn app_with(store: InMemoryStore) -> Router {
    let store = Arc::new(store);
    let registry = AppRegistry::with_repositories(store.clone(), store.clone(), store);
    crate::route::routes().with_state(registry)
}

pub fn app() -> Router {
    app_with(InMemoryStore::default())
}

pub fn failing_app() -> Router {
    app_with(InMemoryStore::failing())
}

/// ルーターにリクエストを 1 件送り、ステータスと JSON ボディを返す
pub async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<serde_json::Value>,
) -> (StatusCode, serde_json::Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string())),
        None => builder.body(Body::empty()),
    }
    .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}
