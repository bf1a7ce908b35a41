//! Sistema de manejo de errores
//!
//! Este módulo define todos los tipos de errores del sistema
//! y su conversión a respuestas HTTP apropiadas. Los rechazos de dominio
//! (guardas del ciclo de vida, autorización, duplicados) son variantes
//! distintas de los fallos de infraestructura.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Errores principales de la aplicación
#[derive(Error, Debug)]
pub enum AppError {
    // Rechazos de rol
    #[error("Not a driver: {0}")]
    NotDriver(String),

    #[error("Not a rider: {0}")]
    NotRider(String),

    // Rechazo de propiedad/asignación
    #[error("Forbidden: {0}")]
    Forbidden(String),

    // Guardas de estado del viaje
    #[error("Not acceptable: {0}")]
    NotAcceptable(String),

    #[error("Not completable: {0}")]
    NotCompletable(String),

    #[error("Not cancellable: {0}")]
    NotCancellable(String),

    #[error("Not editable: {0}")]
    NotEditable(String),

    #[error("Invalid transition: {0}")]
    InvalidTransition(String),

    // Violación de unicidad (matrícula, licencia, email, username)
    #[error("Duplicate key: {0}")]
    DuplicateKey(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("JWT error: {0}")]
    Jwt(String),

    #[error("Hash error: {0}")]
    Hash(String),

    // Fallos de infraestructura
    #[error("Database error: {0}")]
    Database(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl AppError {
    /// Mapear errores de sqlx a variantes de dominio cuando aplica.
    ///
    /// Una violación de constraint UNIQUE (código PostgreSQL 23505) se
    /// convierte en `DuplicateKey`: es el respaldo de los chequeos de
    /// unicidad de los controllers cuando dos inserts compiten.
    pub fn from_sqlx(context: &str, e: sqlx::Error) -> Self {
        if let sqlx::Error::Database(ref db) = e {
            if db.code().as_deref() == Some("23505") {
                return AppError::DuplicateKey(format!("{}: registro duplicado", context));
            }
        }
        AppError::Database(format!("{}: {}", context, e))
    }
}

/// Respuesta de error para la API
#[derive(Debug, serde::Serialize)]
struct ErrorResponse {
    error: String,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    code: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_response) = match self {
            AppError::NotDriver(msg) => (
                StatusCode::FORBIDDEN,
                ErrorResponse {
                    error: "Not Driver".to_string(),
                    message: msg,
                    details: None,
                    code: Some("NOT_DRIVER".to_string()),
                },
            ),

            AppError::NotRider(msg) => (
                StatusCode::FORBIDDEN,
                ErrorResponse {
                    error: "Not Rider".to_string(),
                    message: msg,
                    details: None,
                    code: Some("NOT_RIDER".to_string()),
                },
            ),

            AppError::Forbidden(msg) => (
                StatusCode::FORBIDDEN,
                ErrorResponse {
                    error: "Forbidden".to_string(),
                    message: msg,
                    details: None,
                    code: Some("FORBIDDEN".to_string()),
                },
            ),

            AppError::NotAcceptable(msg) => (
                StatusCode::CONFLICT,
                ErrorResponse {
                    error: "Not Acceptable".to_string(),
                    message: msg,
                    details: None,
                    code: Some("NOT_ACCEPTABLE".to_string()),
                },
            ),

            AppError::NotCompletable(msg) => (
                StatusCode::CONFLICT,
                ErrorResponse {
                    error: "Not Completable".to_string(),
                    message: msg,
                    details: None,
                    code: Some("NOT_COMPLETABLE".to_string()),
                },
            ),

            AppError::NotCancellable(msg) => (
                StatusCode::CONFLICT,
                ErrorResponse {
                    error: "Not Cancellable".to_string(),
                    message: msg,
                    details: None,
                    code: Some("NOT_CANCELLABLE".to_string()),
                },
            ),

            AppError::NotEditable(msg) => (
                StatusCode::CONFLICT,
                ErrorResponse {
                    error: "Not Editable".to_string(),
                    message: msg,
                    details: None,
                    code: Some("NOT_EDITABLE".to_string()),
                },
            ),

            AppError::InvalidTransition(msg) => (
                StatusCode::CONFLICT,
                ErrorResponse {
                    error: "Invalid Transition".to_string(),
                    message: msg,
                    details: None,
                    code: Some("INVALID_TRANSITION".to_string()),
                },
            ),

            AppError::DuplicateKey(msg) => (
                StatusCode::CONFLICT,
                ErrorResponse {
                    error: "Duplicate Key".to_string(),
                    message: msg,
                    details: None,
                    code: Some("DUPLICATE_KEY".to_string()),
                },
            ),

            AppError::NotFound(msg) => (
                StatusCode::NOT_FOUND,
                ErrorResponse {
                    error: "Not Found".to_string(),
                    message: msg,
                    details: None,
                    code: Some("NOT_FOUND".to_string()),
                },
            ),

            AppError::Validation(e) => (
                StatusCode::BAD_REQUEST,
                ErrorResponse {
                    error: "Validation Error".to_string(),
                    message: "Los datos enviados no son válidos".to_string(),
                    details: Some(json!(e)),
                    code: Some("VALIDATION_ERROR".to_string()),
                },
            ),

            AppError::Unauthorized(msg) => (
                StatusCode::UNAUTHORIZED,
                ErrorResponse {
                    error: "Unauthorized".to_string(),
                    message: msg,
                    details: None,
                    code: Some("UNAUTHORIZED".to_string()),
                },
            ),

            AppError::Jwt(msg) => (
                StatusCode::UNAUTHORIZED,
                ErrorResponse {
                    error: "JWT Error".to_string(),
                    message: msg,
                    details: None,
                    code: Some("JWT_ERROR".to_string()),
                },
            ),

            AppError::Hash(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorResponse {
                    error: "Hash Error".to_string(),
                    message: "Ocurrió un error procesando las credenciales".to_string(),
                    details: Some(json!({ "hash_error": msg })),
                    code: Some("HASH_ERROR".to_string()),
                },
            ),

            AppError::Database(msg) => {
                tracing::error!("Database error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse {
                        error: "Database Error".to_string(),
                        message: "Ocurrió un error accediendo a la base de datos".to_string(),
                        details: Some(json!({ "db_error": msg })),
                        code: Some("DB_ERROR".to_string()),
                    },
                )
            }

            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse {
                        error: "Internal Server Error".to_string(),
                        message: "Ocurrió un error inesperado".to_string(),
                        details: Some(json!({ "internal_error": msg })),
                        code: Some("INTERNAL_ERROR".to_string()),
                    },
                )
            }
        };

        (status, Json(error_response)).into_response()
    }
}

/// Resultado tipado para operaciones que pueden fallar
pub type AppResult<T> = Result<T, AppError>;

/// Función helper para crear errores de validación sobre un campo concreto
pub fn validation_error(field: &'static str, message: &'static str) -> AppError {
    use validator::ValidationError;

    let mut error = ValidationError::new("custom");
    error.add_param("field".into(), &field);
    error.add_param("message".into(), &message);

    let mut errors = validator::ValidationErrors::new();
    errors.add(field, error);

    AppError::Validation(errors)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status_of(error: AppError) -> StatusCode {
        error.into_response().status()
    }

    #[test]
    fn test_role_rejections_are_forbidden() {
        assert_eq!(status_of(AppError::NotDriver("x".to_string())), StatusCode::FORBIDDEN);
        assert_eq!(status_of(AppError::NotRider("x".to_string())), StatusCode::FORBIDDEN);
        assert_eq!(status_of(AppError::Forbidden("x".to_string())), StatusCode::FORBIDDEN);
    }

    #[test]
    fn test_state_guard_rejections_are_conflict() {
        assert_eq!(status_of(AppError::NotAcceptable("x".to_string())), StatusCode::CONFLICT);
        assert_eq!(status_of(AppError::NotCompletable("x".to_string())), StatusCode::CONFLICT);
        assert_eq!(status_of(AppError::NotCancellable("x".to_string())), StatusCode::CONFLICT);
        assert_eq!(status_of(AppError::NotEditable("x".to_string())), StatusCode::CONFLICT);
        assert_eq!(
            status_of(AppError::InvalidTransition("x".to_string())),
            StatusCode::CONFLICT
        );
        assert_eq!(status_of(AppError::DuplicateKey("x".to_string())), StatusCode::CONFLICT);
    }

    #[test]
    fn test_infrastructure_errors_are_500() {
        assert_eq!(
            status_of(AppError::Database("x".to_string())),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            status_of(AppError::Internal("x".to_string())),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_not_found_and_auth_errors() {
        assert_eq!(status_of(AppError::NotFound("x".to_string())), StatusCode::NOT_FOUND);
        assert_eq!(
            status_of(AppError::Unauthorized("x".to_string())),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(status_of(AppError::Jwt("x".to_string())), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn test_validation_error_helper() {
        let error = validation_error("license_number", "requerido para conductores");
        assert_eq!(status_of(error), StatusCode::BAD_REQUEST);
    }
}
