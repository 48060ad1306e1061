use axum::{
    routing::{get, post},
    Router,
};
use registry::AppRegistry;

use crate::handler::space::{
    add_space_availability, delete_space, patch_space_availability, register_space,
    remove_space_availability, show_space, show_space_availability, show_space_list,
    update_space,
};

pub fn build_space_routers() -> Router<AppRegistry> {
    let spaces_routers = Router::new()
        .route("/", post(register_space).get(show_space_list))
        .route(
            "/:space_id",
            get(show_space).put(update_space).delete(delete_space),
        )
        .route(
            "/:space_id/availability",
            get(show_space_availability)
                .post(add_space_availability)
                .delete(remove_space_availability)
                .patch(patch_space_availability),
        );

    Router::new().nest("/spaces", spaces_routers)
}
