//! Shipping fee rules.

use serde::{Deserialize, Serialize};

/// Default order total from which shipping is free.
pub const DEFAULT_FREE_SHIPPING_THRESHOLD: u64 = 50_000;

/// Default flat fee below the threshold.
pub const DEFAULT_SHIPPING_FEE: u64 = 3_000;

/// Flat-fee shipping with a free-shipping threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShippingPolicy {
    pub free_threshold: u64,
    pub flat_fee: u64,
}

impl Default for ShippingPolicy {
    fn default() -> Self {
        Self {
            free_threshold: DEFAULT_FREE_SHIPPING_THRESHOLD,
            flat_fee: DEFAULT_SHIPPING_FEE,
        }
    }
}

impl ShippingPolicy {
    /// Fee for an order of `total`. Nothing is shipped for an empty order.
    #[must_use]
    pub const fn fee_for(&self, total: u64) -> u64 {
        if total == 0 || total >= self.free_threshold {
            0
        } else {
            self.flat_fee
        }
    }

    /// Amount still missing for free shipping, `None` once reached.
    #[must_use]
    pub const fn remaining_for_free(&self, total: u64) -> Option<u64> {
        if total >= self.free_threshold {
            None
        } else {
            Some(self.free_threshold - total)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_is_inclusive() {
        let policy = ShippingPolicy::default();
        assert_eq!(policy.fee_for(49_999), 3_000);
        assert_eq!(policy.fee_for(50_000), 0);
        assert_eq!(policy.fee_for(0), 0);
    }

    #[test]
    fn remaining_amount() {
        let policy = ShippingPolicy::default();
        assert_eq!(policy.remaining_for_free(38_000), Some(12_000));
        assert_eq!(policy.remaining_for_free(50_000), None);
    }
}
