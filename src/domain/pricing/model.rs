//! Pricing configuration aggregate

use chrono::{DateTime, Utc, Weekday};
use rust_decimal::Decimal;

/// Default free waiting allowance, in minutes.
pub const DEFAULT_FREE_WAITING_MINUTES: u32 = 3;

/// A named pricing policy and all of its rules.
///
/// Loaded as one value from the configuration store, so a calculation always
/// sees a single consistent snapshot of the rules.
#[derive(Debug, Clone, PartialEq)]
pub struct PricingConfig {
    pub id: i32,
    pub name: String,
    pub is_active: bool,
    pub base_fares: Vec<BaseFare>,
    pub day_factors: Vec<DayOfWeekFactor>,
    pub time_prices: Vec<TimeBasedPrice>,
    pub distance_prices: Vec<DistanceBasedPrice>,
    pub waiting_charges: Vec<WaitingCharge>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl PricingConfig {
    pub fn new(name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: 0,
            name: name.into(),
            is_active: true,
            base_fares: Vec::new(),
            day_factors: Vec::new(),
            time_prices: Vec::new(),
            distance_prices: Vec::new(),
            waiting_charges: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// The authoritative base fare. First one wins if several are stored.
    pub fn base_fare(&self) -> Option<&BaseFare> {
        self.base_fares.first()
    }

    /// The authoritative waiting charge. First one wins if several are stored.
    pub fn waiting_charge(&self) -> Option<&WaitingCharge> {
        self.waiting_charges.first()
    }

    pub fn day_factor(&self, weekday: Weekday) -> Option<&DayOfWeekFactor> {
        let day = weekday.num_days_from_monday() as u8;
        self.day_factors.iter().find(|f| f.day == day)
    }

    /// Name comparison ignoring case, with full Unicode case folding.
    pub fn has_name(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.to_lowercase()
    }

    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

impl std::fmt::Display for PricingConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = if self.is_active { "Active" } else { "Inactive" };
        write!(f, "{} ({})", self.name, state)
    }
}

/// Multiplier for one day of the week (0 = Monday .. 6 = Sunday).
#[derive(Debug, Clone, PartialEq)]
pub struct DayOfWeekFactor {
    pub day: u8,
    pub multiplier: Decimal,
}

impl DayOfWeekFactor {
    pub fn day_name(&self) -> &'static str {
        match self.day {
            0 => "Monday",
            1 => "Tuesday",
            2 => "Wednesday",
            3 => "Thursday",
            4 => "Friday",
            5 => "Saturday",
            6 => "Sunday",
            _ => "Unknown",
        }
    }
}

impl std::fmt::Display for DayOfWeekFactor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}x", self.day_name(), self.multiplier)
    }
}

/// Duration tier, bounds in minutes.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeBasedPrice {
    pub min_duration: u32,
    /// `None` (or `Some(0)`) marks an open-ended tier.
    pub max_duration: Option<u32>,
    pub price_per_minute: Decimal,
}

/// Distance tier, bounds in kilometers.
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceBasedPrice {
    pub min_distance: u32,
    /// `None` (or `Some(0)`) marks an open-ended tier.
    pub max_distance: Option<u32>,
    pub price_per_km: Decimal,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WaitingCharge {
    pub free_waiting_minutes: u32,
    pub price_per_minute: Decimal,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BaseFare {
    pub amount: Decimal,
}

/// A per-unit rate applied to the slice of a measurement inside `[lower, upper)`.
pub trait Tier {
    fn lower_bound(&self) -> u32;
    fn upper_bound(&self) -> Option<u32>;
    fn rate(&self) -> Decimal;

    /// Width of the tier, `None` when open-ended. A zero upper bound counts as
    /// open-ended. An upper bound below the lower one yields a negative width.
    fn width(&self) -> Option<Decimal> {
        match self.upper_bound() {
            Some(upper) if upper != 0 => {
                Some(Decimal::from(upper) - Decimal::from(self.lower_bound()))
            }
            _ => None,
        }
    }
}

impl Tier for TimeBasedPrice {
    fn lower_bound(&self) -> u32 {
        self.min_duration
    }

    fn upper_bound(&self) -> Option<u32> {
        self.max_duration
    }

    fn rate(&self) -> Decimal {
        self.price_per_minute
    }
}

impl Tier for DistanceBasedPrice {
    fn lower_bound(&self) -> u32 {
        self.min_distance
    }

    fn upper_bound(&self) -> Option<u32> {
        self.max_distance
    }

    fn rate(&self) -> Decimal {
        self.price_per_km
    }
}

impl std::fmt::Display for TimeBasedPrice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.max_duration {
            Some(max) if max != 0 => write!(
                f,
                "{}-{} mins: {}/min",
                self.min_duration, max, self.price_per_minute
            ),
            _ => write!(f, "{}+ mins: {}/min", self.min_duration, self.price_per_minute),
        }
    }
}

impl std::fmt::Display for DistanceBasedPrice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.max_distance {
            Some(max) if max != 0 => write!(
                f,
                "{}-{} km: {}/km",
                self.min_distance, max, self.price_per_km
            ),
            _ => write!(f, "{}+ km: {}/km", self.min_distance, self.price_per_km),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn first_base_fare_wins() {
        let mut cfg = PricingConfig::new("City");
        cfg.base_fares.push(BaseFare { amount: dec("2.50") });
        cfg.base_fares.push(BaseFare { amount: dec("9.99") });
        assert_eq!(cfg.base_fare().unwrap().amount, dec("2.50"));
    }

    #[test]
    fn first_waiting_charge_wins() {
        let mut cfg = PricingConfig::new("City");
        assert!(cfg.waiting_charge().is_none());
        cfg.waiting_charges.push(WaitingCharge {
            free_waiting_minutes: 3,
            price_per_minute: dec("0.50"),
        });
        cfg.waiting_charges.push(WaitingCharge {
            free_waiting_minutes: 0,
            price_per_minute: dec("5"),
        });
        assert_eq!(cfg.waiting_charge().unwrap().free_waiting_minutes, 3);
    }

    #[test]
    fn day_factor_lookup_by_weekday() {
        let mut cfg = PricingConfig::new("City");
        cfg.day_factors.push(DayOfWeekFactor {
            day: 6,
            multiplier: dec("1.5"),
        });
        assert_eq!(cfg.day_factor(Weekday::Sun).unwrap().multiplier, dec("1.5"));
        assert!(cfg.day_factor(Weekday::Mon).is_none());
    }

    #[test]
    fn name_match_ignores_unicode_case() {
        let cfg = PricingConfig::new("Ärzte Nacht");
        assert!(cfg.has_name("ärzte nacht"));
        assert!(cfg.has_name("ÄRZTE NACHT"));
        assert!(!cfg.has_name("Arzte Nacht"));
    }

    #[test]
    fn zero_upper_bound_is_open_ended() {
        let tier = DistanceBasedPrice {
            min_distance: 5,
            max_distance: Some(0),
            price_per_km: dec("1"),
        };
        assert_eq!(tier.width(), None);

        let bounded = TimeBasedPrice {
            min_duration: 10,
            max_duration: Some(30),
            price_per_minute: dec("0.2"),
        };
        assert_eq!(bounded.width(), Some(dec("20")));
    }

    #[test]
    fn inverted_bounds_give_negative_width() {
        let tier = DistanceBasedPrice {
            min_distance: 10,
            max_distance: Some(4),
            price_per_km: dec("1"),
        };
        assert_eq!(tier.width(), Some(dec("-6")));
    }

    #[test]
    fn display_formats() {
        let cfg = PricingConfig::new("City");
        assert_eq!(cfg.to_string(), "City (Active)");

        let factor = DayOfWeekFactor {
            day: 0,
            multiplier: dec("1.25"),
        };
        assert_eq!(factor.to_string(), "Monday: 1.25x");

        let tier = DistanceBasedPrice {
            min_distance: 0,
            max_distance: Some(5),
            price_per_km: dec("1.00"),
        };
        assert_eq!(tier.to_string(), "0-5 km: 1.00/km");

        let open = TimeBasedPrice {
            min_duration: 30,
            max_duration: None,
            price_per_minute: dec("0.10"),
        };
        assert_eq!(open.to_string(), "30+ mins: 0.10/min");
    }
}
