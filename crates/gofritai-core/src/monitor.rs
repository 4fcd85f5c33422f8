use serde::Deserialize;

use crate::error::{FritError, Result};

/// Parameters a quota monitor would run with.
///
/// Only used to print the `monitor` banner; no polling exists yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct MonitorPlan {
    pub interval_minutes: u32,
    pub alert_threshold_pct: u8,
}

impl Default for MonitorPlan {
    fn default() -> Self {
        Self {
            interval_minutes: 5,
            alert_threshold_pct: 80,
        }
    }
}

impl MonitorPlan {
    pub fn validate(&self) -> Result<()> {
        if self.interval_minutes == 0 {
            return Err(FritError::Config(
                "monitor.interval_minutes must be at least 1".into(),
            ));
        }
        if !(1..=100).contains(&self.alert_threshold_pct) {
            return Err(FritError::Config(format!(
                "monitor.alert_threshold_pct must be within 1..=100, got {}",
                self.alert_threshold_pct
            )));
        }
        Ok(())
    }

    /// Intent text printed by `gofritai monitor`.
    pub fn banner_lines(&self) -> Vec<String> {
        let every = if self.interval_minutes == 1 {
            "every minute".to_string()
        } else {
            format!("every {} minutes", self.interval_minutes)
        };
        vec![
            "Starting monitor daemon...".to_string(),
            format!("Checking quotas {every}"),
            format!("Alerts enabled for >{}% usage", self.alert_threshold_pct),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_banner() {
        let lines = MonitorPlan::default().banner_lines();
        assert_eq!(lines[1], "Checking quotas every 5 minutes");
        assert_eq!(lines[2], "Alerts enabled for >80% usage");
    }

    #[test]
    fn singular_interval() {
        let plan = MonitorPlan {
            interval_minutes: 1,
            ..Default::default()
        };
        assert_eq!(plan.banner_lines()[1], "Checking quotas every minute");
    }

    #[test]
    fn validate_rejects_out_of_range() {
        assert!(MonitorPlan::default().validate().is_ok());
        let zero = MonitorPlan {
            interval_minutes: 0,
            ..Default::default()
        };
        assert!(zero.validate().is_err());
        let over = MonitorPlan {
            alert_threshold_pct: 101,
            ..Default::default()
        };
        assert!(over.validate().is_err());
        let none = MonitorPlan {
            alert_threshold_pct: 0,
            ..Default::default()
        };
        assert!(none.validate().is_err());
    }
}
