use std::sync::Arc;

use adapter::database::ConnectionPool;
use adapter::repository::{
    health::HealthCheckRepositoryImpl, space::SpaceRepositoryImpl, vendor::VendorRepositoryImpl,
};
use kernel::repository::{
    health::HealthCheckRepository, space::SpaceRepository, vendor::VendorRepository,
};

#[derive(Clone)]
pub struct AppRegistry {
    health_check_repository: Arc<dyn HealthCheckRepository>,
    space_repository: Arc<dyn SpaceRepository>,
    vendor_repository: Arc<dyn VendorRepository>,
}

impl AppRegistry {
    pub fn new(pool: ConnectionPool) -> Self {
        let health_check_repository = Arc::new(HealthCheckRepositoryImpl::new(pool.clone()));
        let space_repository = Arc::new(SpaceRepositoryImpl::new(pool.clone()));
        let vendor_repository = Arc::new(VendorRepositoryImpl::new(pool.clone()));
        Self::with_repositories(
            health_check_repository,
            space_repository,
            vendor_repository,
        )
    }

    // DB 以外の実装（テスト用のインメモリ実装など）を差し込む場合に使う
    pub fn with_repositories(
        health_check_repository: Arc<dyn HealthCheckRepository>,
        space_repository: Arc<dyn SpaceRepository>,
        vendor_repository: Arc<dyn VendorRepository>,
    ) -> Self {
        Self {
            health_check_repository,
            space_repository,
            vendor_repository,
        }
    }

    pub fn health_check_repository(&self) -> Arc<dyn HealthCheckRepository> {
        self.health_check_repository.clone()
    }

    pub fn space_repository(&self) -> Arc<dyn SpaceRepository> {
        self.space_repository.clone()
    }

    pub fn vendor_repository(&self) -> Arc<dyn VendorRepository> {
        self.vendor_repository.clone()
    }
}
