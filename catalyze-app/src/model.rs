//! Domain types for cats, devices, health events and reports.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cat {
    pub id: String,
    pub name: String,
    pub breed: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub weight_kg: Option<f64>,
    pub photo: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceState {
    Online,
    Offline,
    Maintenance,
}

impl DeviceState {
    pub fn label(&self) -> &'static str {
        match self {
            DeviceState::Online => "online",
            DeviceState::Offline => "offline",
            DeviceState::Maintenance => "maintenance",
        }
    }

    /// Semantic class understood by the renderer's theme.
    pub fn class(&self) -> &'static str {
        self.label()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Device {
    pub id: String,
    pub name: String,
    pub status: DeviceState,
    pub firmware_version: String,
    /// Remaining litter, percent.
    pub litter_level: u8,
    /// Waste compartment fill, percent.
    pub waste_level: u8,
    pub last_cleaned: Option<DateTime<Utc>>,
    pub battery_level: Option<u8>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    Urination,
    Defecation,
}

impl EventKind {
    pub fn label(&self) -> &'static str {
        match self {
            EventKind::Urination => "Urination",
            EventKind::Defecation => "Defecation",
        }
    }

    pub fn glyph(&self) -> &'static str {
        match self {
            EventKind::Urination => "💧",
            EventKind::Defecation => "💩",
        }
    }
}

/// Automated visual screening of a single event. Screening only, never a
/// diagnosis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScreeningResult {
    pub color: String,
    pub consistency: String,
    pub size: String,
    pub shape: String,
    pub anomalies: Vec<String>,
    pub confidence: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthEvent {
    pub id: String,
    pub cat_id: String,
    pub timestamp: DateTime<Utc>,
    pub kind: EventKind,
    pub has_image: bool,
    pub screening: Option<ScreeningResult>,
    pub notes: Option<String>,
}

impl HealthEvent {
    pub fn has_anomaly(&self) -> bool {
        self.screening
            .as_ref()
            .map(|s| !s.anomalies.is_empty())
            .unwrap_or(false)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Info,
    Warning,
    Alert,
    Success,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notification {
    pub id: String,
    pub title: String,
    pub message: String,
    pub kind: NotificationKind,
    pub timestamp: DateTime<Utc>,
    pub read: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    pub name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CleaningStatus {
    Scheduled,
    InProgress,
    Completed,
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CleaningKind {
    Manual,
    Automatic,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CleaningCycle {
    pub id: String,
    pub device_id: String,
    pub start_time: DateTime<Utc>,
    pub end_time: Option<DateTime<Utc>>,
    pub status: CleaningStatus,
    pub kind: CleaningKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    Pdf,
    Html,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VetReport {
    pub id: String,
    pub range_start: NaiveDate,
    pub range_end: NaiveDate,
    pub cat_ids: Vec<String>,
    pub generated_at: DateTime<Utc>,
    pub format: ReportFormat,
}
