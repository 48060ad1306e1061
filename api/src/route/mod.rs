pub mod health;
pub mod space;
pub mod vendor;

use axum::Router;
use registry::AppRegistry;

use self::{
    health::build_health_check_routers, space::build_space_routers,
    vendor::build_vendor_routers,
};

pub fn routes() -> Router<AppRegistry> {
    let router = Router::new()
        .merge(build_health_check_routers())
        .merge(build_space_routers())
        .merge(build_vendor_routers());
    Router::new().nest("/api", router)
}
