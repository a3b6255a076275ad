// ==========================================
// Cross Check - statistics value types
// ==========================================
// Read models produced by the statistics queries and consumed by
// presentation layers.
// ==========================================

use serde::{Deserialize, Serialize};

/// Total row counts per entity kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreCounts {
    pub customers: i64,
    pub orders: i64,
    pub financials: i64,
}

/// One row of the top-customers ranking.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerOrderTotal {
    pub subscription_code: i64,
    pub name: Option<String>,
    pub surname: Option<String>,
    pub total_value: f64,
}

/// Combined snapshot: counts plus the two scalar sums. All fields
/// default to zero over an empty store.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Statistics {
    pub counts: StoreCounts,
    pub total_order_value: f64,
    pub total_financial_amount: f64,
}
