//! Backend service stubs.
//!
//! The real backend does not exist yet; every call returns a typed
//! `NotImplemented` error instead of performing network I/O. Callers log the
//! error and fall back to the in-memory mock data.

use snafu::prelude::*;

use crate::model::{CleaningCycle, Device, HealthEvent, User, VetReport};

#[derive(Debug, Snafu)]
pub enum ServiceError {
    #[snafu(display("`{endpoint}` is not implemented; backend integration is pending"))]
    NotImplemented { endpoint: &'static str },
}

pub type Result<T> = std::result::Result<T, ServiceError>;

pub async fn fetch_user(_user_id: &str) -> Result<User> {
    NotImplementedSnafu {
        endpoint: "fetch_user",
    }
    .fail()
}

pub async fn login(_email: &str, _password: &str) -> Result<User> {
    NotImplementedSnafu { endpoint: "login" }.fail()
}

pub async fn fetch_events(_cat_id: Option<&str>) -> Result<Vec<HealthEvent>> {
    NotImplementedSnafu {
        endpoint: "fetch_events",
    }
    .fail()
}

pub async fn generate_report(_report: &VetReport) -> Result<Vec<u8>> {
    NotImplementedSnafu {
        endpoint: "generate_report",
    }
    .fail()
}

pub async fn pair_device(_name: &str) -> Result<Device> {
    NotImplementedSnafu {
        endpoint: "pair_device",
    }
    .fail()
}

pub async fn schedule_cleaning(_device_id: &str) -> Result<CleaningCycle> {
    NotImplementedSnafu {
        endpoint: "schedule_cleaning",
    }
    .fail()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn every_endpoint_reports_not_implemented() {
        assert!(matches!(
            fetch_user("u-1").await,
            Err(ServiceError::NotImplemented { endpoint: "fetch_user" })
        ));
        assert!(matches!(
            login("a@b.c", "hunter2").await,
            Err(ServiceError::NotImplemented { endpoint: "login" })
        ));
        assert!(matches!(
            fetch_events(Some("1")).await,
            Err(ServiceError::NotImplemented { endpoint: "fetch_events" })
        ));
        assert!(matches!(
            pair_device("new box").await,
            Err(ServiceError::NotImplemented { endpoint: "pair_device" })
        ));
        assert!(matches!(
            schedule_cleaning("device-1").await,
            Err(ServiceError::NotImplemented { endpoint: "schedule_cleaning" })
        ));
    }
}
