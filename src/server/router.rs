//! Route table and OpenAPI document assembly.

use std::time::Duration;

use axum::{
    extract::DefaultBodyLimit,
    http::HeaderValue,
    response::IntoResponse,
    routing::get,
    Router,
};
use tower_governor::{GovernorError, GovernorLayer};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{
        attendance::{self, ATTENDANCE_TAG},
        auth::{self, AUTH_TAG},
        document::{self, DOCUMENT_TAG},
        folder::{self, FOLDER_TAG},
        memo::{self, MEMO_TAG},
        notification::{self, NOTIFICATION_TAG},
        storage,
        upload::MAX_UPLOAD_BYTES,
        user::{self, USER_TAG},
    },
    error::{config::ConfigError, AppError},
    startup::LoginRateLimit,
    state::AppState,
};

/// Room left for multipart boundaries and text fields on top of the largest file.
const MULTIPART_OVERHEAD_BYTES: u64 = 2 * 1024 * 1024;

#[derive(OpenApi)]
#[openapi(
    info(title = "docvault", description = "Document management API"),
    modifiers(&BearerAuth),
    tags(
        (name = AUTH_TAG, description = "Registration and login"),
        (name = USER_TAG, description = "Profiles and user administration"),
        (name = DOCUMENT_TAG, description = "Document upload, retrieval and sharing"),
        (name = FOLDER_TAG, description = "Folders grouping documents"),
        (name = MEMO_TAG, description = "Announcements posted by admins"),
        (name = NOTIFICATION_TAG, description = "Per-user notifications"),
        (name = ATTENDANCE_TAG, description = "Login and logout history"),
    )
)]
struct ApiDoc;

struct BearerAuth;

impl Modify for BearerAuth {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearer",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}

/// Builds the application router.
///
/// The login route is wrapped in its own rate limiter keyed by peer IP, so the router must
/// be served with `into_make_service_with_connect_info::<SocketAddr>()`.
///
/// # Arguments
/// - `cors_origin` - Single allowed browser origin, or `None` to allow any origin
/// - `login_limiter` - Rate limit configuration for `POST /api/auth/login`
///
/// # Returns
/// - `Ok(Router)` - Router awaiting its `AppState`
/// - `Err(AppError::ConfigErr)` - `cors_origin` is not a valid header value
pub fn router(
    cors_origin: Option<&str>,
    login_limiter: LoginRateLimit,
) -> Result<Router<AppState>, AppError> {
    let login = OpenApiRouter::new()
        .routes(routes!(auth::login))
        .layer(GovernorLayer::new(login_limiter).error_handler(rate_limit_response));

    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(auth::register))
        .merge(login)
        .routes(routes!(user::get_profile))
        .routes(routes!(user::upload_profile_picture))
        .routes(routes!(user::get_all_users))
        .routes(routes!(user::delete_user))
        .routes(routes!(user::batch_delete_users))
        .routes(routes!(user::make_admin))
        .routes(routes!(user::revoke_admin))
        .routes(routes!(document::upload_document, document::get_documents))
        .routes(routes!(document::download_document))
        .routes(routes!(document::move_document))
        .routes(routes!(document::delete_document))
        .routes(routes!(document::share_document))
        .routes(routes!(document::remove_document_access))
        .routes(routes!(document::count_documents))
        .routes(routes!(document::count_shared_documents))
        .routes(routes!(folder::create_folder, folder::get_folders))
        .routes(routes!(
            folder::get_folder,
            folder::rename_folder,
            folder::delete_folder
        ))
        .routes(routes!(memo::create_memo, memo::get_memos))
        .routes(routes!(memo::update_memo, memo::delete_memo))
        .routes(routes!(notification::get_notifications))
        .routes(routes!(notification::mark_notification_read))
        .routes(routes!(notification::mark_all_notifications_read))
        .routes(routes!(attendance::get_attendance))
        .routes(routes!(attendance::logout))
        .route("/api/storage/{*key}", get(storage::get_blob))
        .split_for_parts();

    let router = router
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
        .layer(DefaultBodyLimit::max(
            (MAX_UPLOAD_BYTES + MULTIPART_OVERHEAD_BYTES) as usize,
        ))
        .layer(cors_layer(cors_origin)?)
        .layer(TraceLayer::new_for_http());

    Ok(router)
}

fn cors_layer(origin: Option<&str>) -> Result<CorsLayer, ConfigError> {
    let cors = CorsLayer::new()
        .allow_methods(Any)
        .allow_headers(Any)
        .max_age(Duration::from_secs(60 * 60));

    match origin {
        Some(origin) => {
            let origin =
                HeaderValue::from_str(origin).map_err(|e| ConfigError::InvalidEnvVar {
                    name: "CORS_ALLOWED_ORIGIN".to_string(),
                    reason: e.to_string(),
                })?;
            Ok(cors.allow_origin(origin))
        }
        None => Ok(cors.allow_origin(Any)),
    }
}

fn rate_limit_response(err: GovernorError) -> axum::response::Response {
    match err {
        GovernorError::TooManyRequests { wait_time, headers } => {
            tracing::debug!("Login rate limit hit, retry in {}s", wait_time);

            let mut response = AppError::TooManyRequests(format!(
                "Too many login attempts, try again in {} seconds",
                wait_time
            ))
            .into_response();
            if let Some(headers) = headers {
                response.headers_mut().extend(headers);
            }
            response
        }
        GovernorError::UnableToExtractKey => {
            AppError::InternalError("Unable to determine client address for rate limiting".to_string())
                .into_response()
        }
        GovernorError::Other { msg, .. } => AppError::InternalError(format!(
            "Rate limiter error: {}",
            msg.unwrap_or_default()
        ))
        .into_response(),
    }
}
