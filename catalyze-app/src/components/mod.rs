mod button;
mod card;
mod device_status;
mod event_card;
mod event_detail;
mod filter;
mod health_chart;
mod input;
mod modal;
mod navbar;
mod stat_card;

pub use button::{Button, ButtonProps, ButtonSize, ButtonVariant};
pub use card::{Card, CardProps};
pub use device_status::{DeviceStatus, DeviceStatusProps};
pub use event_card::{EventCard, EventCardProps};
pub use event_detail::{EventDetail, EventDetailProps};
pub use filter::{Filter, FilterOption};
pub use health_chart::{HealthChart, HealthChartProps};
pub use input::{Input, InputProps};
pub use modal::{Modal, ModalProps};
pub use navbar::{NavItem, Navbar, NavbarProps};
pub use stat_card::{StatCard, StatCardProps, Trend};
