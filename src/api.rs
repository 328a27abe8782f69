//! Thin HTTP client over the collections backend.
//!
//! Endpoints answer either a bare JSON payload or a
//! `{ success, message?, data? }` envelope; both are normalized here into
//! `Result<T, FetchError>` so views only ever see one error shape.

use gloo_console::error;
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::config::ApiConfig;
use crate::error::FetchError;
use crate::filters::SubscriptionQuery;
use crate::models::{
    CustomerSegmentation, DashboardStats, EmailResult, ExecutionRecord, MonthlyComparison,
    MonthlyOverdue, ProjectOverdue, RefreshResult, ReportResult, StatusSlice, Subscription,
};

/// Envelope used by the automation endpoints.
#[derive(Debug, Deserialize)]
pub struct ApiEnvelope<T> {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub data: Option<T>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            base_url: config.base_url,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        pairs: Vec<(&'static str, String)>,
    ) -> Result<T, FetchError> {
        let mut builder = Request::get(&self.url(path));
        if !pairs.is_empty() {
            builder = builder.query(pairs);
        }
        let response = builder.send().await.map_err(|err| {
            error!("GET", path.to_string(), "falló:", err.to_string());
            FetchError::Connection
        })?;
        decode_body(response).await
    }

    async fn post_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, FetchError> {
        let response = Request::post(&self.url(path)).send().await.map_err(|err| {
            error!("POST", path.to_string(), "falló:", err.to_string());
            FetchError::Connection
        })?;
        decode_body(response).await
    }

    /// Subscriptions table, server-filtered by the translated query.
    pub async fn subscriptions(
        &self,
        query: &SubscriptionQuery,
    ) -> Result<Vec<Subscription>, FetchError> {
        self.get_json("/subscriptions", query.to_pairs()).await
    }

    /// Status distribution of active and soon-to-finish subscriptions.
    pub async fn active_subscriptions(&self) -> Result<Vec<StatusSlice>, FetchError> {
        self.get_json("/subscriptions/active", Vec::new()).await
    }

    pub async fn dashboard_stats(&self) -> Result<DashboardStats, FetchError> {
        self.get_json("/dashboard/stats", Vec::new()).await
    }

    pub async fn expected_vs_actual(
        &self,
        year: Option<i32>,
    ) -> Result<Vec<MonthlyComparison>, FetchError> {
        self.get_json("/analytics/expected-vs-actual", year_pairs(year))
            .await
    }

    pub async fn monthly_overdue(
        &self,
        year: Option<i32>,
    ) -> Result<Vec<MonthlyOverdue>, FetchError> {
        self.get_json("/analytics/monthly-overdue", year_pairs(year))
            .await
    }

    pub async fn overdue_by_project(
        &self,
        year: Option<i32>,
    ) -> Result<Vec<ProjectOverdue>, FetchError> {
        self.get_json("/analytics/overdue-by-project", year_pairs(year))
            .await
    }

    pub async fn customer_segmentation(
        &self,
        period: &str,
    ) -> Result<CustomerSegmentation, FetchError> {
        let pairs = if period.is_empty() {
            Vec::new()
        } else {
            vec![("period", period.to_string())]
        };
        self.get_json("/insights/customer-segmentation", pairs).await
    }

    pub async fn generate_report(&self, format: &str) -> Result<ReportResult, FetchError> {
        let envelope = self
            .get_json("/automations/generate-report", vec![("format", format.to_string())])
            .await?;
        unwrap_envelope(envelope, "Error al generar reporte")
    }

    pub async fn send_overdue_emails(&self) -> Result<EmailResult, FetchError> {
        let envelope = self.post_json("/automations/send-emails").await?;
        unwrap_envelope(envelope, "Error al enviar emails")
    }

    pub async fn update_overdue_table(&self) -> Result<RefreshResult, FetchError> {
        let envelope = self.post_json("/automations/update-overdue-table").await?;
        unwrap_envelope(envelope, "Error al actualizar tabla")
    }

    pub async fn set_email_frequency(&self, frequency: &str) -> Result<(), FetchError> {
        let payload = serde_json::json!({ "frequency": frequency });
        let request = Request::post(&self.url("/automations/set-email-frequency"))
            .json(&payload)
            .map_err(|_| FetchError::Decode)?;
        let response = request.send().await.map_err(|err| {
            error!("POST /automations/set-email-frequency falló:", err.to_string());
            FetchError::Connection
        })?;
        let envelope: ApiEnvelope<serde_json::Value> = decode_body(response).await?;
        ensure_success(envelope, "Error al configurar frecuencia")
    }

    pub async fn execution_history(&self) -> Result<Vec<ExecutionRecord>, FetchError> {
        let envelope = self.get_json("/automations/execution-history", Vec::new()).await?;
        unwrap_envelope(envelope, "Error al obtener historial")
    }
}

fn year_pairs(year: Option<i32>) -> Vec<(&'static str, String)> {
    match year {
        Some(year) => vec![("year", year.to_string())],
        None => Vec::new(),
    }
}

async fn decode_body<T: DeserializeOwned>(response: Response) -> Result<T, FetchError> {
    if !response.ok() {
        let body = response.text().await.unwrap_or_default();
        return Err(error_from_body(response.status(), &body));
    }
    response.json::<T>().await.map_err(|err| {
        error!("respuesta no decodificable:", err.to_string());
        FetchError::Decode
    })
}

/// Non-2xx bodies carry `{"error": ...}` or `{"message": ...}` when the
/// backend had something to say; otherwise fall back to the status code.
fn error_from_body(status: u16, body: &str) -> FetchError {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        for key in ["error", "message"] {
            if let Some(msg) = value.get(key).and_then(|v| v.as_str()) {
                if !msg.is_empty() {
                    return FetchError::Server(msg.to_string());
                }
            }
        }
    }
    FetchError::Server(format!("Error del servidor ({status})"))
}

fn unwrap_envelope<T>(envelope: ApiEnvelope<T>, fallback: &str) -> Result<T, FetchError> {
    if !envelope.success {
        return Err(FetchError::server(envelope.message, fallback));
    }
    envelope.data.ok_or(FetchError::Decode)
}

fn ensure_success(envelope: ApiEnvelope<serde_json::Value>, fallback: &str) -> Result<(), FetchError> {
    if envelope.success {
        Ok(())
    } else {
        Err(FetchError::server(envelope.message, fallback))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EmailResult;

    #[test]
    fn successful_envelope_yields_its_data() {
        let envelope: ApiEnvelope<EmailResult> =
            serde_json::from_str(r#"{"success": true, "data": {"emailsSent": 12}}"#).unwrap();
        let result = unwrap_envelope(envelope, "Error al enviar emails").unwrap();
        assert_eq!(result.emails_sent, 12);
    }

    #[test]
    fn failed_envelope_surfaces_the_server_message() {
        let envelope: ApiEnvelope<EmailResult> =
            serde_json::from_str(r#"{"success": false, "message": "SMTP no disponible"}"#).unwrap();
        let err = unwrap_envelope(envelope, "Error al enviar emails").unwrap_err();
        assert_eq!(err.to_string(), "SMTP no disponible");
    }

    #[test]
    fn failed_envelope_without_message_uses_the_fallback() {
        let envelope: ApiEnvelope<EmailResult> =
            serde_json::from_str(r#"{"success": false}"#).unwrap();
        let err = unwrap_envelope(envelope, "Error al enviar emails").unwrap_err();
        assert_eq!(err.to_string(), "Error al enviar emails");
    }

    #[test]
    fn successful_envelope_without_data_is_a_decode_error() {
        let envelope: ApiEnvelope<EmailResult> =
            serde_json::from_str(r#"{"success": true}"#).unwrap();
        let err = unwrap_envelope(envelope, "Error al enviar emails").unwrap_err();
        assert_eq!(err, FetchError::Decode);
    }

    #[test]
    fn ensure_success_ignores_the_data_field() {
        let envelope: ApiEnvelope<serde_json::Value> =
            serde_json::from_str(r#"{"success": true, "data": null}"#).unwrap();
        assert!(ensure_success(envelope, "Error al configurar frecuencia").is_ok());
    }

    #[test]
    fn error_body_prefers_the_error_field() {
        let err = error_from_body(422, r#"{"error": "Año fuera de rango", "message": "otro"}"#);
        assert_eq!(err.to_string(), "Año fuera de rango");
    }

    #[test]
    fn error_body_falls_back_to_message_field() {
        let err = error_from_body(500, r#"{"message": "Fallo interno"}"#);
        assert_eq!(err.to_string(), "Fallo interno");
    }

    #[test]
    fn unparseable_error_body_reports_the_status() {
        let err = error_from_body(502, "<html>Bad Gateway</html>");
        assert_eq!(err.to_string(), "Error del servidor (502)");
    }
}
