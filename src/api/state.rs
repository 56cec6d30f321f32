//! Application state for the Attendance Engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use chrono::{NaiveDate, Utc};

use crate::config::ConfigLoader;

/// Shared application state.
///
/// Contains the loaded shift configuration and, optionally, a pinned
/// current date. Without a pinned date "today" is the current UTC date.
#[derive(Clone)]
pub struct AppState {
    /// The loaded shift configuration.
    config: Arc<ConfigLoader>,
    /// Fixed current date, if pinned.
    today: Option<NaiveDate>,
}

impl AppState {
    /// Creates a new application state with the given configuration loader.
    pub fn new(config: ConfigLoader) -> Self {
        Self {
            config: Arc::new(config),
            today: None,
        }
    }

    /// Creates an application state whose current date is fixed.
    pub fn with_today(config: ConfigLoader, today: NaiveDate) -> Self {
        Self {
            config: Arc::new(config),
            today: Some(today),
        }
    }

    /// Returns a reference to the configuration loader.
    pub fn config(&self) -> &ConfigLoader {
        &self.config
    }

    /// Returns the date attendance may currently be marked for.
    pub fn today(&self) -> NaiveDate {
        self.today.unwrap_or_else(|| Utc::now().date_naive())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty_config() -> ConfigLoader {
        ConfigLoader::from_shifts(vec![]).unwrap()
    }

    #[test]
    fn test_app_state_is_clone() {
        fn assert_clone<T: Clone>() {}
        assert_clone::<AppState>();
    }

    #[test]
    fn test_pinned_today() {
        let date = NaiveDate::from_ymd_opt(2026, 3, 2).unwrap();
        let state = AppState::with_today(empty_config(), date);
        assert_eq!(state.today(), date);
    }

    #[test]
    fn test_default_today_is_utc_date() {
        let state = AppState::new(empty_config());
        let before = Utc::now().date_naive();
        let today = state.today();
        let after = Utc::now().date_naive();
        assert!(before <= today && today <= after);
    }
}
