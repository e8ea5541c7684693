//! Pricing calculator: a three-tier step function with a yearly discount.
//!
//! Base price by seat count: up to 5 users is 29, up to 20 is 79, anything
//! above is 149. Yearly billing multiplies the base by 0.8. The displayed
//! price is rounded to the nearest whole currency unit.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Lowest seat count the slider allows.
pub const MIN_USERS: u32 = 1;
/// Highest seat count the slider allows.
pub const MAX_USERS: u32 = 100;
/// Seat count selected on page load.
pub const DEFAULT_USERS: u32 = 10;
/// Multiplier applied to the base price for yearly billing.
pub const YEARLY_MULTIPLIER: f64 = 0.8;

/// Billing period toggle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BillingPeriod {
    /// Billed every month, no discount
    #[default]
    Monthly,
    /// Billed yearly, 20% off
    Yearly,
}

impl BillingPeriod {
    /// Both periods, in toggle order.
    pub const ALL: [BillingPeriod; 2] = [BillingPeriod::Monthly, BillingPeriod::Yearly];

    /// Unit rendered after the price (`$79/month`).
    pub fn suffix(self) -> &'static str {
        match self {
            BillingPeriod::Monthly => "month",
            BillingPeriod::Yearly => "year",
        }
    }

    /// Toggle button caption.
    pub fn label(self) -> &'static str {
        match self {
            BillingPeriod::Monthly => "Monthly",
            BillingPeriod::Yearly => "Yearly (20% off)",
        }
    }
}

impl fmt::Display for BillingPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.suffix())
    }
}

/// One step of the price function. `max_users: None` marks the open-ended top tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tier {
    /// Inclusive upper seat bound for this tier
    pub max_users: Option<u32>,
    /// Monthly base price in whole currency units
    pub base: u32,
}

/// Starter, Professional, Enterprise.
pub const DEFAULT_TIERS: [Tier; 3] = [
    Tier { max_users: Some(5), base: 29 },
    Tier { max_users: Some(20), base: 79 },
    Tier { max_users: None, base: 149 },
];

/// Price function parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingTable {
    /// Ascending tiers, last one unbounded
    pub tiers: Vec<Tier>,
    /// Multiplier for yearly billing
    pub yearly_multiplier: f64,
}

impl Default for PricingTable {
    fn default() -> Self {
        Self {
            tiers: DEFAULT_TIERS.to_vec(),
            yearly_multiplier: YEARLY_MULTIPLIER,
        }
    }
}

impl PricingTable {
    /// Base price of the first tier that covers `users`.
    pub fn base_price(&self, users: u32) -> u32 {
        base_for(&self.tiers, users)
    }

    /// Displayed price for a seat count and billing period.
    pub fn price(&self, users: u32, billing: BillingPeriod) -> u32 {
        price_with(&self.tiers, self.yearly_multiplier, users, billing)
    }
}

fn base_for(tiers: &[Tier], users: u32) -> u32 {
    tiers
        .iter()
        .find(|tier| tier.max_users.is_none_or(|max| users <= max))
        .or(tiers.last())
        .map_or(0, |tier| tier.base)
}

fn price_with(tiers: &[Tier], yearly_multiplier: f64, users: u32, billing: BillingPeriod) -> u32 {
    let base = base_for(tiers, users);
    let multiplier = match billing {
        BillingPeriod::Monthly => 1.0,
        BillingPeriod::Yearly => yearly_multiplier,
    };
    (f64::from(base) * multiplier).round() as u32
}

/// Displayed price with the stock tiers and discount.
///
/// ```rust
/// use launchpad_core::pricing::{calculate_price, BillingPeriod};
///
/// assert_eq!(calculate_price(3, BillingPeriod::Monthly), 29);
/// assert_eq!(calculate_price(15, BillingPeriod::Yearly), 63);
/// assert_eq!(calculate_price(50, BillingPeriod::Yearly), 119);
/// ```
pub fn calculate_price(users: u32, billing: BillingPeriod) -> u32 {
    price_with(&DEFAULT_TIERS, YEARLY_MULTIPLIER, users, billing)
}

/// Input events from the calculator controls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PricingEvent {
    /// Slider moved to a numeric value
    SetUsers(u32),
    /// Raw slider value as reported by the input element
    SliderInput(String),
    /// Billing toggle clicked
    SetBilling(BillingPeriod),
}

/// Calculator state: seat count within slider bounds plus billing period.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PricingSelection {
    users: u32,
    billing: BillingPeriod,
    min_users: u32,
    max_users: u32,
}

impl Default for PricingSelection {
    fn default() -> Self {
        Self::with_bounds(DEFAULT_USERS, MIN_USERS, MAX_USERS)
    }
}

impl PricingSelection {
    /// Selection with the stock 1..=100 slider bounds.
    pub fn new(users: u32, billing: BillingPeriod) -> Self {
        let mut selection = Self::default();
        selection.billing = billing;
        selection.set_users(users);
        selection
    }

    /// Selection with custom slider bounds, monthly billing.
    pub fn with_bounds(users: u32, min_users: u32, max_users: u32) -> Self {
        let (min_users, max_users) = if min_users <= max_users {
            (min_users, max_users)
        } else {
            (max_users, min_users)
        };
        Self {
            users: users.clamp(min_users, max_users),
            billing: BillingPeriod::Monthly,
            min_users,
            max_users,
        }
    }

    /// Current seat count.
    pub fn users(&self) -> u32 {
        self.users
    }

    /// Current billing period.
    pub fn billing(&self) -> BillingPeriod {
        self.billing
    }

    /// Slider bounds as `(min, max)`.
    pub fn bounds(&self) -> (u32, u32) {
        (self.min_users, self.max_users)
    }

    /// Set the seat count, clamped to the slider bounds.
    pub fn set_users(&mut self, users: u32) {
        self.users = users.clamp(self.min_users, self.max_users);
    }

    /// Switch billing period.
    pub fn set_billing(&mut self, billing: BillingPeriod) {
        self.billing = billing;
    }

    /// Apply one control event. Unparseable slider input leaves the state alone.
    pub fn apply(mut self, event: PricingEvent) -> Self {
        match event {
            PricingEvent::SetUsers(users) => self.set_users(users),
            PricingEvent::SliderInput(raw) => match raw.trim().parse::<i64>() {
                Ok(value) => {
                    let value = value.clamp(0, i64::from(u32::MAX)) as u32;
                    self.set_users(value);
                }
                Err(err) => {
                    tracing::warn!(input = %raw, error = %err, "ignoring slider input");
                    return self;
                }
            },
            PricingEvent::SetBilling(billing) => self.set_billing(billing),
        }
        tracing::debug!(users = self.users, billing = %self.billing, "pricing selection changed");
        self
    }

    /// Price for this selection under `table`.
    pub fn price(&self, table: &PricingTable) -> u32 {
        table.price(self.users, self.billing)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn small_teams_pay_starter_monthly() {
        for users in 1..=5 {
            assert_eq!(calculate_price(users, BillingPeriod::Monthly), 29);
        }
    }

    #[test]
    fn tier_boundaries() {
        assert_eq!(calculate_price(5, BillingPeriod::Monthly), 29);
        assert_eq!(calculate_price(6, BillingPeriod::Monthly), 79);
        assert_eq!(calculate_price(20, BillingPeriod::Monthly), 79);
        assert_eq!(calculate_price(21, BillingPeriod::Monthly), 149);
        assert_eq!(calculate_price(100, BillingPeriod::Monthly), 149);
    }

    #[test]
    fn yearly_discount_rounds_to_whole_units() {
        assert_eq!(calculate_price(1, BillingPeriod::Yearly), 23);
        for users in 6..=20 {
            assert_eq!(calculate_price(users, BillingPeriod::Yearly), 63);
        }
        for users in 21..=100 {
            assert_eq!(calculate_price(users, BillingPeriod::Yearly), 119);
        }
    }

    #[test]
    fn default_table_matches_free_function() {
        let table = PricingTable::default();
        for users in MIN_USERS..=MAX_USERS {
            for billing in BillingPeriod::ALL {
                assert_eq!(table.price(users, billing), calculate_price(users, billing));
            }
        }
    }

    #[test]
    fn custom_table_steps() {
        let table = PricingTable {
            tiers: vec![
                Tier { max_users: Some(10), base: 10 },
                Tier { max_users: None, base: 50 },
            ],
            yearly_multiplier: 0.5,
        };
        assert_eq!(table.price(10, BillingPeriod::Monthly), 10);
        assert_eq!(table.price(11, BillingPeriod::Yearly), 25);
    }

    #[test]
    fn selection_defaults() {
        let selection = PricingSelection::default();
        assert_eq!(selection.users(), 10);
        assert_eq!(selection.billing(), BillingPeriod::Monthly);
        assert_eq!(selection.price(&PricingTable::default()), 79);
    }

    #[test]
    fn selection_clamps_to_slider_bounds() {
        let selection = PricingSelection::default()
            .apply(PricingEvent::SetUsers(0));
        assert_eq!(selection.users(), 1);

        let selection = selection.apply(PricingEvent::SliderInput("250".into()));
        assert_eq!(selection.users(), 100);

        let selection = selection.apply(PricingEvent::SliderInput("-4".into()));
        assert_eq!(selection.users(), 1);
    }

    #[test]
    fn garbage_slider_input_is_ignored() {
        let selection = PricingSelection::new(42, BillingPeriod::Yearly);
        let after = selection.apply(PricingEvent::SliderInput("lots".into()));
        assert_eq!(after, selection);
    }

    #[test]
    fn billing_toggle_changes_suffix_and_price() {
        let selection = PricingSelection::new(30, BillingPeriod::Monthly)
            .apply(PricingEvent::SetBilling(BillingPeriod::Yearly));
        assert_eq!(selection.billing().suffix(), "year");
        assert_eq!(selection.price(&PricingTable::default()), 119);
    }

    #[test]
    fn inverted_bounds_are_normalized() {
        let selection = PricingSelection::with_bounds(7, 20, 5);
        assert_eq!(selection.bounds(), (5, 20));
        assert_eq!(selection.users(), 7);
    }
}
