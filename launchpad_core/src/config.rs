//! Page configuration loaded from `site.json`.
//!
//! Every section is optional in the JSON; missing keys take the stock values.
//!
//! ```json
//! {
//!   "carousel": { "interval_ms": 5000 },
//!   "pricing": { "yearly_multiplier": 0.8 },
//!   "faq": { "allow_multiple": false },
//!   "log_level": "info"
//! }
//! ```

use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::Level;

use crate::accordion::AccordionMode;
use crate::carousel::ROTATION_INTERVAL;
use crate::pricing::{
    DEFAULT_USERS, MAX_USERS, MIN_USERS, PricingSelection, PricingTable, Tier, YEARLY_MULTIPLIER,
};

/// Configuration could not be used.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Not valid JSON or wrong shape
    #[error("failed to parse site config: {0}")]
    Parse(#[from] serde_json::Error),
    /// Parsed but semantically wrong
    #[error("invalid site config: {0}")]
    Invalid(String),
}

/// Testimonial rotation settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CarouselConfig {
    /// Auto-rotation period in milliseconds
    pub interval_ms: u64,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            interval_ms: ROTATION_INTERVAL.as_millis() as u64,
        }
    }
}

impl CarouselConfig {
    /// Rotation period.
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }
}

/// Calculator settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PricingConfig {
    /// Price steps, ascending, last one unbounded
    pub tiers: Vec<Tier>,
    /// Yearly discount multiplier
    pub yearly_multiplier: f64,
    /// Slider minimum
    pub min_users: u32,
    /// Slider maximum
    pub max_users: u32,
    /// Slider position on load
    pub default_users: u32,
}

impl Default for PricingConfig {
    fn default() -> Self {
        let table = PricingTable::default();
        Self {
            tiers: table.tiers,
            yearly_multiplier: YEARLY_MULTIPLIER,
            min_users: MIN_USERS,
            max_users: MAX_USERS,
            default_users: DEFAULT_USERS,
        }
    }
}

impl PricingConfig {
    /// Price function described by this config.
    pub fn table(&self) -> PricingTable {
        PricingTable {
            tiers: self.tiers.clone(),
            yearly_multiplier: self.yearly_multiplier,
        }
    }

    /// Initial calculator state.
    pub fn initial_selection(&self) -> PricingSelection {
        PricingSelection::with_bounds(self.default_users, self.min_users, self.max_users)
    }

    fn check(&self) -> Result<(), ConfigError> {
        let Some(last) = self.tiers.last() else {
            return Err(ConfigError::Invalid("pricing.tiers must not be empty".into()));
        };
        if last.max_users.is_some() {
            return Err(ConfigError::Invalid(
                "the last pricing tier must have no max_users".into(),
            ));
        }
        let bounds: Vec<u32> = self.tiers.iter().filter_map(|t| t.max_users).collect();
        if bounds.len() != self.tiers.len() - 1 {
            return Err(ConfigError::Invalid(
                "only the last pricing tier may be unbounded".into(),
            ));
        }
        if bounds.windows(2).any(|pair| pair[0] >= pair[1]) {
            return Err(ConfigError::Invalid(
                "pricing tier bounds must be strictly ascending".into(),
            ));
        }
        if !(self.yearly_multiplier > 0.0 && self.yearly_multiplier <= 1.0) {
            return Err(ConfigError::Invalid(format!(
                "pricing.yearly_multiplier must be in (0, 1], got {}",
                self.yearly_multiplier
            )));
        }
        if self.min_users == 0 || self.min_users > self.max_users {
            return Err(ConfigError::Invalid(format!(
                "pricing user bounds {}..={} are not a valid range",
                self.min_users, self.max_users
            )));
        }
        Ok(())
    }
}

/// FAQ accordion settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FaqConfig {
    /// Let several panels stay open at once
    pub allow_multiple: bool,
}

impl FaqConfig {
    /// Accordion mode for the FAQ.
    pub fn mode(&self) -> AccordionMode {
        AccordionMode::from_allow_multiple(self.allow_multiple)
    }
}

/// Whole-page configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Testimonial rotation
    pub carousel: CarouselConfig,
    /// Calculator
    pub pricing: PricingConfig,
    /// FAQ accordion
    pub faq: FaqConfig,
    /// Browser log filter: trace, debug, info, warn or error
    pub log_level: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            carousel: CarouselConfig::default(),
            pricing: PricingConfig::default(),
            faq: FaqConfig::default(),
            log_level: "info".to_string(),
        }
    }
}

impl SiteConfig {
    /// Parse and validate a JSON document.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: SiteConfig = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Check cross-field rules serde cannot express.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.carousel.interval_ms == 0 {
            return Err(ConfigError::Invalid(
                "carousel.interval_ms must be greater than zero".into(),
            ));
        }
        self.pricing.check()?;
        self.level()?;
        Ok(())
    }

    /// Parsed log level.
    pub fn level(&self) -> Result<Level, ConfigError> {
        self.log_level
            .parse::<Level>()
            .map_err(|_| ConfigError::Invalid(format!("unknown log_level '{}'", self.log_level)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_object_gives_defaults() {
        let config = SiteConfig::from_json("{}").unwrap();
        assert_eq!(config, SiteConfig::default());
        assert_eq!(config.carousel.interval(), Duration::from_secs(5));
        assert_eq!(config.pricing.table(), PricingTable::default());
        assert_eq!(config.faq.mode(), AccordionMode::Single);
        assert_eq!(config.level().unwrap(), Level::INFO);
    }

    #[test]
    fn partial_sections_merge_with_defaults() {
        let config = SiteConfig::from_json(
            r#"{"carousel": {"interval_ms": 8000}, "faq": {"allow_multiple": true}}"#,
        )
        .unwrap();
        assert_eq!(config.carousel.interval_ms, 8000);
        assert_eq!(config.faq.mode(), AccordionMode::Multiple);
        assert_eq!(config.pricing, PricingConfig::default());
    }

    #[test]
    fn initial_selection_uses_configured_bounds() {
        let config = SiteConfig::from_json(
            r#"{"pricing": {"min_users": 2, "max_users": 50, "default_users": 80}}"#,
        )
        .unwrap();
        let selection = config.pricing.initial_selection();
        assert_eq!(selection.bounds(), (2, 50));
        assert_eq!(selection.users(), 50);
    }

    #[test]
    fn rejects_zero_interval() {
        let err = SiteConfig::from_json(r#"{"carousel": {"interval_ms": 0}}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn rejects_bounded_last_tier() {
        let raw = r#"{"pricing": {"tiers": [{"max_users": 5, "base": 29}]}}"#;
        assert!(matches!(SiteConfig::from_json(raw), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn rejects_descending_tiers() {
        let raw = r#"{"pricing": {"tiers": [
            {"max_users": 20, "base": 79},
            {"max_users": 5, "base": 29},
            {"max_users": null, "base": 149}
        ]}}"#;
        assert!(matches!(SiteConfig::from_json(raw), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn rejects_discount_out_of_range() {
        let raw = r#"{"pricing": {"yearly_multiplier": 1.5}}"#;
        assert!(matches!(SiteConfig::from_json(raw), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn rejects_unknown_log_level() {
        let raw = r#"{"log_level": "chatty"}"#;
        assert!(matches!(SiteConfig::from_json(raw), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        assert!(matches!(SiteConfig::from_json("{"), Err(ConfigError::Parse(_))));
    }
}
