pub mod charts;
pub mod stat_card;
pub mod subscriptions_table;

pub use charts::{ComparisonChart, MonthlyOverdueChart, ProjectOverdueChart, StatusChart};
pub use stat_card::{StatCard, StatIcon};
pub use subscriptions_table::SubscriptionsTable;
