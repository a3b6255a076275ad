// ==========================================
// Cross Check - derived field computation
// ==========================================
// The only derived field in the pipeline is the order line total.
// ==========================================

use crate::importer::batch_importer_trait::DerivationService as DerivationServiceTrait;

pub struct DerivationService;

impl DerivationServiceTrait for DerivationService {
    /// total_value = quantity × price
    ///
    /// Absent quantity coerces to 0, absent price to 0.0; the input
    /// total column of the source sheet is ignored.
    fn derive_total_value(&self, quantity: Option<i64>, price: Option<f64>) -> f64 {
        quantity.unwrap_or(0) as f64 * price.unwrap_or(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_value_basic() {
        let total = DerivationService.derive_total_value(Some(5), Some(1200.0));
        assert!((total - 6000.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_total_value_absent_quantity_is_zero() {
        let total = DerivationService.derive_total_value(None, Some(1200.0));
        assert_eq!(total, 0.0);
    }

    #[test]
    fn test_total_value_absent_price_is_zero() {
        let total = DerivationService.derive_total_value(Some(5), None);
        assert_eq!(total, 0.0);
    }
}
