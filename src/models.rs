//! Payload shapes returned by the collections backend (camelCase JSON).

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SubscriptionStatus {
    Active,
    Completed,
    EndingSoon,
    Canceled,
}

impl SubscriptionStatus {
    /// Wire value, as the filter select and the backend use it.
    pub fn as_str(&self) -> &'static str {
        match self {
            SubscriptionStatus::Active => "active",
            SubscriptionStatus::Completed => "completed",
            SubscriptionStatus::EndingSoon => "ending_soon",
            SubscriptionStatus::Canceled => "canceled",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SubscriptionStatus::Active => "Activa",
            SubscriptionStatus::Completed => "Completada",
            SubscriptionStatus::EndingSoon => "Finalizando Pronto",
            SubscriptionStatus::Canceled => "Cancelada",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InstallmentStatus {
    Paid,
    Pending,
    Overdue,
}

impl InstallmentStatus {
    pub fn label(&self) -> &'static str {
        match self {
            InstallmentStatus::Paid => "Pagada",
            InstallmentStatus::Pending => "Pendiente",
            InstallmentStatus::Overdue => "En mora",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Installment {
    pub id: i64,
    pub due_date: String,
    pub amount: i64,
    pub status: InstallmentStatus,
    #[serde(default)]
    pub payment_date: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Subscription {
    pub id: i64,
    pub status: SubscriptionStatus,
    pub project: String,
    pub investment: i64,
    pub units: u32,
    pub start_date: String,
    pub end_date: String,
    pub total_installments: u32,
    pub overdue: i64,
    pub total_paid: i64,
    pub total_remaining: i64,
    pub email: String,
    #[serde(default)]
    pub installments: Vec<Installment>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_revenue: i64,
    pub active_subscriptions: u32,
    pub total_overdue: i64,
    pub collection_rate: f64,
}

/// One slice of the status-distribution chart.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct StatusSlice {
    pub status: SubscriptionStatus,
    pub count: u32,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct MonthlyComparison {
    pub month: String,
    pub expected: i64,
    pub actual: i64,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct MonthlyOverdue {
    pub month: String,
    pub overdue: i64,
    pub accumulated: i64,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectOverdue {
    pub project_name: String,
    pub overdue_amount: i64,
    pub percentage: f64,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerSegment {
    pub name: String,
    pub color: String,
    pub count: u32,
    pub total_investment: i64,
    pub investment_percentage: f64,
    pub average_payment_delay: f64,
    pub total_overdue: i64,
    pub overdue_percentage: f64,
    pub description: String,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct CustomerSegmentation {
    pub segments: Vec<CustomerSegment>,
    pub period: String,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportResult {
    pub file_path: String,
    #[serde(default)]
    pub file_url: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailResult {
    pub emails_sent: u32,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshResult {
    pub users_count: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ExecutionKind {
    Report,
    Email,
    Table,
}

impl ExecutionKind {
    pub fn label(&self) -> &'static str {
        match self {
            ExecutionKind::Report => "Generación de Reporte",
            ExecutionKind::Email => "Envío de Alertas por Email",
            ExecutionKind::Table => "Actualización de Tabla de Mora",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ExecutionStatus {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct ExecutionRecord {
    pub id: i64,
    #[serde(rename = "type")]
    pub kind: ExecutionKind,
    pub status: ExecutionStatus,
    pub message: String,
    pub timestamp: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subscription_decodes_from_backend_json() {
        let json = r#"{
            "id": 3,
            "status": "ending_soon",
            "project": "Blue Ocean",
            "investment": 24000000,
            "units": 8,
            "startDate": "2023-10-01",
            "endDate": "2024-07-01",
            "totalInstallments": 10,
            "overdue": 1500000,
            "totalPaid": 21600000,
            "totalRemaining": 2400000,
            "email": "usuario2@example.com",
            "installments": [
                {"id": 1, "dueDate": "2023-11-01", "amount": 2400000, "status": "paid", "paymentDate": "2023-10-28"},
                {"id": 2, "dueDate": "2023-12-01", "amount": 2400000, "status": "overdue"}
            ]
        }"#;

        let sub: Subscription = serde_json::from_str(json).unwrap();
        assert_eq!(sub.status, SubscriptionStatus::EndingSoon);
        assert_eq!(sub.installments.len(), 2);
        assert_eq!(sub.installments[0].payment_date.as_deref(), Some("2023-10-28"));
        assert_eq!(sub.installments[1].status, InstallmentStatus::Overdue);
        assert_eq!(sub.installments[1].payment_date, None);
    }

    #[test]
    fn subscription_tolerates_missing_installments() {
        let json = r#"{
            "id": 1, "status": "active", "project": "Green Tower",
            "investment": 15000000, "units": 5,
            "startDate": "2024-01-15", "endDate": "2025-01-15",
            "totalInstallments": 12, "overdue": 0,
            "totalPaid": 5000000, "totalRemaining": 10000000,
            "email": "usuario1@example.com"
        }"#;

        let sub: Subscription = serde_json::from_str(json).unwrap();
        assert!(sub.installments.is_empty());
    }

    #[test]
    fn execution_record_maps_the_type_field() {
        let json = r#"{"id": 1, "type": "email", "status": "success",
                       "message": "12 correos enviados", "timestamp": "2025-04-22T09:30:00Z"}"#;
        let record: ExecutionRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.kind, ExecutionKind::Email);
        assert_eq!(record.status, ExecutionStatus::Success);
    }
}
