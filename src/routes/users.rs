use actix_web::{web, HttpResponse};
use validator::Validate;
use crate::error::ApiError;
use crate::models::{DeleteUserResponse, UserPayload};
use crate::routes::AppState;

/// Configure all user and match routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/users")
            .route("/", web::post().to(create_user))
            .route("", web::post().to(create_user))
            .route("/", web::get().to(list_users))
            .route("", web::get().to(list_users))
            .route("/{id}", web::get().to(get_user))
            .route("/{id}", web::put().to(update_user))
            .route("/{id}", web::delete().to(delete_user))
            .route("/{id}/matches", web::get().to(find_matches)),
    );
}

/// Create user endpoint
///
/// POST /users/
///
/// Request body:
/// ```json
/// {
///   "name": "string",
///   "age": 30,
///   "gender": "string",
///   "email": "user@example.com",
///   "city": "string",
///   "interests": ["string"]
/// }
/// ```
async fn create_user(
    state: web::Data<AppState>,
    req: web::Json<UserPayload>,
) -> Result<HttpResponse, ApiError> {
    req.validate()?;

    let user = state.store.create(req.into_inner()).await?;
    tracing::info!("Created user {}", user.id);

    Ok(HttpResponse::Ok().json(user))
}

/// List users endpoint
///
/// GET /users/
async fn list_users(state: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    let users = state.store.list().await?;
    tracing::debug!("Listing {} users", users.len());

    Ok(HttpResponse::Ok().json(users))
}

/// GET /users/{id}
async fn get_user(
    state: web::Data<AppState>,
    path: web::Path<i64>,
) -> Result<HttpResponse, ApiError> {
    let user = state.store.get(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(user))
}

/// Update user endpoint
///
/// PUT /users/{id}
///
/// Replaces every field except the id; the body has the same shape as for
/// creation.
async fn update_user(
    state: web::Data<AppState>,
    path: web::Path<i64>,
    req: web::Json<UserPayload>,
) -> Result<HttpResponse, ApiError> {
    req.validate()?;

    let id = path.into_inner();
    let user = state.store.update(id, req.into_inner()).await?;
    tracing::info!("Updated user {}", id);

    Ok(HttpResponse::Ok().json(user))
}

/// DELETE /users/{id}
async fn delete_user(
    state: web::Data<AppState>,
    path: web::Path<i64>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    state.store.delete(id).await?;
    tracing::info!("Deleted user {}", id);

    Ok(HttpResponse::Ok().json(DeleteUserResponse { id, deleted: true }))
}

/// Find matches endpoint
///
/// GET /users/{id}/matches
///
/// Returns the other users ranked by similarity to `id`, best first.
async fn find_matches(
    state: web::Data<AppState>,
    path: web::Path<i64>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    let target = state.store.get(id).await?;
    let candidates = state.store.list().await?;

    let result = state.matcher.find_matches(&target, candidates);

    tracing::info!(
        "Returning {} matches for user {} (from {} candidates)",
        result.matches.len(),
        id,
        result.total_candidates
    );

    Ok(HttpResponse::Ok().json(result.into_users()))
}
