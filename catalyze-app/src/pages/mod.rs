mod dashboard;
mod devices;
mod health_events;
mod reports;
mod settings;

pub use dashboard::DashboardPage;
pub use devices::DevicesPage;
pub use health_events::HealthEventsPage;
pub use reports::ReportsPage;
pub use settings::SettingsPage;
