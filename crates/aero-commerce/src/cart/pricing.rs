//! Cart pricing: delivery modes and totals breakdown.

use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Flat delivery surcharge, in cents.
pub const DELIVERY_FEE_CENTS: i64 = 800;

/// How the order reaches the customer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DeliveryMode {
    /// Delivered to the customer; adds the delivery fee.
    #[default]
    Delivery,
    /// Picked up at the counter.
    Pickup,
}

impl DeliveryMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeliveryMode::Delivery => "DELIVERY",
            DeliveryMode::Pickup => "PICKUP",
        }
    }

    /// Surcharge for this mode.
    pub fn fee(&self) -> Money {
        match self {
            DeliveryMode::Delivery => Money::new(DELIVERY_FEE_CENTS, Currency::BRL),
            DeliveryMode::Pickup => Money::zero(Currency::BRL),
        }
    }
}

impl FromStr for DeliveryMode {
    type Err = CommerceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "DELIVERY" => Ok(DeliveryMode::Delivery),
            "PICKUP" => Ok(DeliveryMode::Pickup),
            _ => Err(CommerceError::InvalidDeliveryMode(s.to_string())),
        }
    }
}

impl fmt::Display for DeliveryMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Complete pricing breakdown for a cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartPricing {
    /// Mode the breakdown was computed for.
    pub mode: DeliveryMode,
    /// Sum of line totals.
    pub subtotal: Money,
    /// Delivery surcharge (zero for pickup).
    pub delivery_fee: Money,
    /// subtotal + delivery_fee.
    pub grand_total: Money,
    /// Per-line-item pricing breakdown.
    pub line_items: Vec<LineItemPricing>,
}

/// Pricing breakdown for a single line item.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LineItemPricing {
    pub product_id: ProductId,
    pub unit_price: Money,
    pub quantity: u32,
    /// unit_price * quantity.
    pub total: Money,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_delivery_mode() {
        assert_eq!("DELIVERY".parse::<DeliveryMode>().unwrap(), DeliveryMode::Delivery);
        assert_eq!("pickup".parse::<DeliveryMode>().unwrap(), DeliveryMode::Pickup);
        assert!(matches!(
            "drone".parse::<DeliveryMode>(),
            Err(CommerceError::InvalidDeliveryMode(_))
        ));
    }

    #[test]
    fn test_default_mode_is_delivery() {
        assert_eq!(DeliveryMode::default(), DeliveryMode::Delivery);
    }

    #[test]
    fn test_fee() {
        assert_eq!(DeliveryMode::Delivery.fee().amount_cents, 800);
        assert!(DeliveryMode::Pickup.fee().is_zero());
    }

    #[test]
    fn test_mode_serializes_upper_case() {
        assert_eq!(
            serde_json::to_string(&DeliveryMode::Pickup).unwrap(),
            r#""PICKUP""#
        );
    }
}
