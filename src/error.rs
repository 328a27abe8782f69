use thiserror::Error;

/// Normalized failure surfaced to views through `RequestState::error`.
///
/// Every failure channel of the backend (transport error, non-2xx status,
/// `success: false` envelope, unparseable body) collapses into one of these
/// variants; the message is ready for display as-is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// No response at all (network down, CORS, backend unreachable).
    #[error("Error de conexión al servidor")]
    Connection,
    /// The server answered and supplied its own message.
    #[error("{0}")]
    Server(String),
    /// The server answered but the body was not what we expected.
    #[error("Respuesta inválida del servidor")]
    Decode,
}

impl FetchError {
    /// Server-side failure, preferring the backend's message when it sent one.
    pub fn server(message: Option<String>, fallback: &str) -> Self {
        match message {
            Some(msg) if !msg.is_empty() => FetchError::Server(msg),
            _ => FetchError::Server(fallback.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_prefers_backend_message() {
        let err = FetchError::server(Some("Cuota no encontrada".into()), "Error al consultar");
        assert_eq!(err.to_string(), "Cuota no encontrada");
    }

    #[test]
    fn server_falls_back_when_message_missing_or_empty() {
        let err = FetchError::server(None, "Error al generar reporte");
        assert_eq!(err.to_string(), "Error al generar reporte");

        let err = FetchError::server(Some(String::new()), "Error al generar reporte");
        assert_eq!(err.to_string(), "Error al generar reporte");
    }

    #[test]
    fn connection_message_is_generic() {
        assert_eq!(
            FetchError::Connection.to_string(),
            "Error de conexión al servidor"
        );
    }
}
