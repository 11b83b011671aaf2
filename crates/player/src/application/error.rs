//! Service layer error types
//!
//! Abstracts over the HTTP boundary so the controller and UI only deal with
//! submission failures, not transport details.

use thiserror::Error;

use curpgen_domain::DomainError;

use crate::ports::outbound::ApiError;

/// Errors that can occur while generating a code
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
    /// Transport or service failure reported by the HTTP adapter
    #[error(transparent)]
    Api(#[from] ApiError),

    /// 2xx response whose body carries no usable code
    #[error("Service response did not contain a CURP")]
    MissingCode,

    /// The snapshot did not pass validation
    #[error(transparent)]
    Validation(#[from] DomainError),
}

impl ServiceError {
    /// Short message shown in the form's error banner.
    pub fn user_message(&self) -> String {
        match self {
            ServiceError::Api(ApiError::RequestFailed(_)) => {
                "No se pudo contactar al servicio. Verifica tu conexión e inténtalo de nuevo."
                    .to_string()
            }
            ServiceError::Api(ApiError::Timeout) => {
                "El servicio tardó demasiado en responder. Inténtalo de nuevo.".to_string()
            }
            ServiceError::Api(ApiError::HttpError { status, .. }) => {
                format!("El servicio no pudo generar la CURP (código {}).", status)
            }
            ServiceError::Api(ApiError::ParseError(_)) | ServiceError::MissingCode => {
                "El servicio devolvió una respuesta inválida.".to_string()
            }
            ServiceError::Api(ApiError::SerializeError(_)) => {
                "No se pudo preparar la solicitud.".to_string()
            }
            ServiceError::Validation(e) => format!("Revisa los datos del formulario: {}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_error_message_mentions_status() {
        let err = ServiceError::from(ApiError::HttpError {
            status: 503,
            message: "unavailable".to_string(),
        });
        assert!(err.user_message().contains("503"));
    }

    #[test]
    fn malformed_and_missing_code_share_a_message() {
        let parse = ServiceError::from(ApiError::ParseError("eof".to_string()));
        assert_eq!(parse.user_message(), ServiceError::MissingCode.user_message());
    }

    #[test]
    fn display_is_transparent_over_api_error() {
        let err = ServiceError::from(ApiError::Timeout);
        assert_eq!(err.to_string(), "Request timed out");
    }
}
