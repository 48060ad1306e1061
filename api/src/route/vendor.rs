use axum::{
    routing::{delete, get, post},
    Router,
};
use registry::AppRegistry;

use crate::handler::vendor::{
    add_vendor_space, delete_vendor, register_vendor, remove_vendor_space, show_vendor,
    show_vendor_list, update_vendor,
};

pub fn build_vendor_routers() -> Router<AppRegistry> {
    let vendors_routers = Router::new()
        .route("/", post(register_vendor).get(show_vendor_list))
        .route(
            "/:vendor_id",
            get(show_vendor).put(update_vendor).delete(delete_vendor),
        )
        .route("/:vendor_id/spaces", post(add_vendor_space))
        .route("/:vendor_id/spaces/:space_id", delete(remove_vendor_space));

    Router::new().nest("/vendors", vendors_routers)
}
