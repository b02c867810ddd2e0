use actix_web::{get, http::Version, post, web, HttpMessage, HttpRequest, HttpResponse, Responder};
use chrono::Utc;

use crate::types::{
    AdminAccessResponse, AdminIdentity, HealthResponse, HttpVersionInfo, LoginFailure,
    LoginRequest, LoginResponse,
};
use crate::web::middleware::AdminAuth;
use crate::web::AppState;

/// Human-readable HTTP version for the current connection, in the shape
/// the original wire format reported ("1.1", "2.0", ...).
fn http_version_label(req: &HttpRequest) -> &'static str {
    let version = req.version();
    if version == Version::HTTP_2 {
        "2.0"
    } else if version == Version::HTTP_3 {
        "3.0"
    } else if version == Version::HTTP_10 {
        "1.0"
    } else if version == Version::HTTP_09 {
        "0.9"
    } else {
        "1.1"
    }
}

/// Liveness probe; succeeds whenever the process is up.
#[get("/health")]
pub async fn health(req: HttpRequest) -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "OK".to_string(),
        timestamp: Utc::now(),
        http_version: http_version_label(&req).to_string(),
    })
}

/// Reports the negotiated transport for the current connection.
#[get("/api/http-version")]
pub async fn http_version(req: HttpRequest) -> impl Responder {
    let scheme = req.connection_info().scheme().to_string();
    HttpResponse::Ok().json(HttpVersionInfo {
        http_version: http_version_label(&req).to_string(),
        secure: scheme == "https",
        protocol: scheme,
    })
}

#[post("/admin/login")]
pub async fn admin_login(
    state: web::Data<AppState>,
    body: web::Json<LoginRequest>,
) -> impl Responder {
    match state.authenticator.authenticate(&body.username, &body.password) {
        Some(session) => {
            tracing::info!(username = %body.username, "admin login accepted");
            HttpResponse::Ok().json(LoginResponse {
                message: "Authentication successful".to_string(),
                token: session.token,
                user: session.identity.summary(),
                timestamp: Utc::now(),
            })
        }
        None => {
            tracing::warn!(username = %body.username, "admin login rejected");
            HttpResponse::Unauthorized().json(LoginFailure {
                error: "Invalid credentials".to_string(),
                timestamp: Utc::now(),
            })
        }
    }
}

/// Guarded admin endpoint. The guard attaches the verifier's identity to
/// the request; the fallback to the fixed record only exists because the
/// stock verifier cannot derive anything from the token itself.
pub async fn admin_home(req: HttpRequest) -> impl Responder {
    let user = req
        .extensions()
        .get::<AdminIdentity>()
        .cloned()
        .unwrap_or_else(AdminIdentity::admin);

    HttpResponse::Ok().json(AdminAccessResponse {
        message: "Admin endpoint accessed successfully".to_string(),
        user,
        timestamp: Utc::now(),
        http_version: http_version_label(&req).to_string(),
    })
}

/// Registers the JSON API. `/admin/login` must sit in front of the
/// guarded `/admin` scope so credential checks stay unauthenticated.
pub fn configure(cfg: &mut web::ServiceConfig, state: AppState) {
    let guard = AdminAuth::new(state.verifier.clone());

    cfg.app_data(web::Data::new(state))
        .service(health)
        .service(http_version)
        .service(admin_login)
        .service(
            web::scope("/admin")
                .wrap(guard)
                .route("", web::get().to(admin_home)),
        );
}
