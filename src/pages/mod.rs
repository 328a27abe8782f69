mod analytics;
mod automation;
mod dashboard;
mod overdue;
mod subscriptions;

pub use analytics::AnalyticsPage;
pub use automation::AutomationPage;
pub use dashboard::DashboardPage;
pub use overdue::OverduePage;
pub use subscriptions::SubscriptionsPage;
