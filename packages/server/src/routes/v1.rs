use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

use crate::handlers;
use crate::state::AppState;

pub fn routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .nest("/login", login_routes())
        .nest("/blogs", blog_routes())
        .nest("/users", user_routes())
}

fn login_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new().routes(routes!(handlers::auth::login))
}

fn blog_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(
            handlers::blog::list_blogs,
            handlers::blog::create_blog
        ))
        .routes(routes!(handlers::blog::blog_stats))
        .routes(routes!(
            handlers::blog::get_blog,
            handlers::blog::update_blog,
            handlers::blog::delete_blog
        ))
}

fn user_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new().routes(routes!(
        handlers::user::list_users,
        handlers::user::create_user
    ))
}
