use serde::Deserialize;
use std::env;

use config::builder::DefaultState;
use config::ConfigBuilder;
use skybooker_catalog::{CabinClass, CabinPlan, PricingConfig};

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub pricing: PricingConfig,
    pub inventory: InventoryConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct InventoryConfig {
    /// Fixed seed for a reproducible seat map
    #[serde(default)]
    pub seed: Option<u64>,
    pub business_availability: f64,
    pub premium_availability: f64,
    pub economy_availability: f64,
}

impl InventoryConfig {
    /// The 737-800 cabin plans with configured availability ratios
    pub fn plans(&self) -> Vec<CabinPlan> {
        CabinPlan::boeing_737_800()
            .into_iter()
            .map(|plan| {
                let ratio = match plan.cabin_class {
                    CabinClass::Business => self.business_availability,
                    CabinClass::Premium => self.premium_availability,
                    CabinClass::Economy => self.economy_availability,
                };
                plan.with_availability(ratio)
            })
            .collect()
    }
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        Self::defaults()?
            .add_source(config::File::with_name("config/default").required(false))
            // Per-environment overrides, optional
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            // Local overrides, not checked in
            .add_source(config::File::with_name("config/local").required(false))
            // Eg. `SKYBOOKER__PRICING__BOOKING_FEE=30`
            .add_source(
                config::Environment::with_prefix("SKYBOOKER")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize::<Self>()?
            .validated()
    }

    /// Defaults overlaid with an inline TOML document
    pub fn from_toml(overrides: &str) -> Result<Self, config::ConfigError> {
        Self::defaults()?
            .add_source(config::File::from_str(overrides, config::FileFormat::Toml))
            .build()?
            .try_deserialize::<Self>()?
            .validated()
    }

    fn validated(self) -> Result<Self, config::ConfigError> {
        self.pricing
            .validate()
            .map_err(|e| config::ConfigError::Message(format!("pricing: {}", e)))?;
        Ok(self)
    }

    fn defaults() -> Result<ConfigBuilder<DefaultState>, config::ConfigError> {
        let pricing = PricingConfig::default();

        config::Config::builder()
            .set_default("pricing.tax_rate", pricing.tax_rate)?
            .set_default("pricing.booking_fee", pricing.booking_fee as i64)?
            .set_default("inventory.business_availability", 0.7)?
            .set_default("inventory.premium_availability", 0.6)?
            .set_default("inventory.economy_availability", 0.5)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::from_toml("").unwrap();
        assert_eq!(config.pricing, PricingConfig::default());
        assert_eq!(config.inventory.seed, None);

        let plans = config.inventory.plans();
        assert_eq!(plans[0].availability, 0.7);
        assert_eq!(plans[1].availability, 0.6);
        assert_eq!(plans[2].availability, 0.5);
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_toml(
            r#"
            [pricing]
            booking_fee = 30

            [inventory]
            seed = 42
            economy_availability = 1.0
            "#,
        )
        .unwrap();

        assert_eq!(config.pricing.booking_fee, 30);
        assert_eq!(config.pricing.tax_rate, 0.15);
        assert_eq!(config.inventory.seed, Some(42));
        assert_eq!(config.inventory.plans()[2].availability, 1.0);
        assert_eq!(config.inventory.business_availability, 0.7);
    }

    #[test]
    fn test_rejects_invalid_pricing() {
        let err = Config::from_toml("[pricing]\ntax_rate = -2.0").unwrap_err();
        assert!(err.to_string().contains("Tax rate"));

        let err = Config::from_toml("[pricing]\nbooking_fee = -100").unwrap_err();
        assert!(err.to_string().contains("Booking fee"));

        assert!(Config::from_toml("[pricing]\ntax_rate = 1e12").is_err());
    }
}
