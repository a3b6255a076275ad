// ==========================================
// Cross Check - field mapper
// ==========================================
// Source column → typed field coercion, one method per entity kind.
// Numeric fields: absent → None, unparseable → row-level error.
// Text fields: trimmed, blank → None (absent, not empty string).
// ==========================================

use crate::domain::customer::RawCustomerRecord;
use crate::domain::financial::RawFinancialRecord;
use crate::domain::order::RawOrderRecord;
use crate::domain::record::RawRecord;
use crate::importer::batch_importer_trait::FieldMapper as FieldMapperTrait;
use crate::importer::error::{ImportError, ImportResult};
use crate::importer::labels;

pub struct FieldMapper;

impl FieldMapperTrait for FieldMapper {
    fn map_to_customer(&self, record: &RawRecord) -> ImportResult<RawCustomerRecord> {
        use labels::customer as c;

        Ok(RawCustomerRecord {
            subscription_code: self.parse_i64(record, c::SUBSCRIPTION_CODE)?,
            name: self.text(record, c::NAME),
            surname: self.text(record, c::SURNAME),
            father_name: self.text(record, c::FATHER_NAME),
            certificate_number: self.text(record, c::CERTIFICATE_NUMBER),
            national_id: self.text(record, c::NATIONAL_ID),
            second_name: self.text(record, c::SECOND_NAME),
            phone1: self.text(record, c::PHONE1),
            phone2: self.text(record, c::PHONE2),
            phone3: self.text(record, c::PHONE3),
            mobile: self.text(record, c::MOBILE),
            fax: self.text(record, c::FAX),
            economic_code: self.text(record, c::ECONOMIC_CODE),
            address: self.text(record, c::ADDRESS),
            postal_code: self.text(record, c::POSTAL_CODE),
            email: self.text(record, c::EMAIL),
            province: self.text(record, c::PROVINCE),
            city: self.text(record, c::CITY),
            row_number: record.row_number(),
        })
    }

    fn map_to_order(&self, record: &RawRecord) -> ImportResult<RawOrderRecord> {
        use labels::order as o;

        Ok(RawOrderRecord {
            invoice_id: self.text(record, o::INVOICE_ID),
            invoice_date: self.text(record, o::INVOICE_DATE),
            subscription_code: self.parse_i64(record, o::SUBSCRIPTION_CODE)?,
            person_name: self.text(record, o::PERSON_NAME),
            description: self.text(record, o::DESCRIPTION),
            settlement_type: self.text(record, o::SETTLEMENT_TYPE),
            settlement_date: self.text(record, o::SETTLEMENT_DATE),
            expiry_date: self.text(record, o::EXPIRY_DATE),
            person_subject_code: self.text(record, o::PERSON_SUBJECT_CODE),
            operation_subject_code: self.text(record, o::OPERATION_SUBJECT_CODE),
            invoice_nature_code: self.text(record, o::INVOICE_NATURE_CODE),
            marketer_code: self.text(record, o::MARKETER_CODE),
            amount_discount: self.parse_f64(record, o::AMOUNT_DISCOUNT)?,
            total_tax_percent: self.parse_f64(record, o::TOTAL_TAX_PERCENT)?,
            total_toll_percent: self.parse_f64(record, o::TOTAL_TOLL_PERCENT)?,
            warehouse_code: self.text(record, o::WAREHOUSE_CODE),
            warehouse_name: self.text(record, o::WAREHOUSE_NAME),
            product_code: self.text(record, o::PRODUCT_CODE),
            product_name: self.text(record, o::PRODUCT_NAME),
            item_description: self.text(record, o::ITEM_DESCRIPTION),
            special_coef1: self.parse_f64(record, o::SPECIAL_COEF1)?,
            special_coef2: self.parse_f64(record, o::SPECIAL_COEF2)?,
            special_coef3: self.parse_f64(record, o::SPECIAL_COEF3)?,
            quantity: self.parse_i64(record, o::QUANTITY)?,
            secondary_quantity: self.parse_f64(record, o::SECONDARY_QUANTITY)?,
            price: self.parse_f64(record, o::PRICE)?,
            price_foreign: self.parse_f64(record, o::PRICE_FOREIGN)?,
            discount_percent: self.parse_f64(record, o::DISCOUNT_PERCENT)?,
            tax_percent: self.parse_f64(record, o::TAX_PERCENT)?,
            toll_percent: self.parse_f64(record, o::TOLL_PERCENT)?,
            sending_nature_code: self.text(record, o::SENDING_NATURE_CODE),
            sending_date: self.text(record, o::SENDING_DATE),
            row_number: record.row_number(),
        })
    }

    fn map_to_financial(&self, record: &RawRecord) -> ImportResult<RawFinancialRecord> {
        use labels::financial as f;

        Ok(RawFinancialRecord {
            subscription_code: self.parse_i64(record, f::SUBSCRIPTION_CODE)?,
            amount: self.parse_f64(record, f::AMOUNT)?,
            loan_code: self.text(record, f::LOAN_CODE),
            description: self.text(record, f::DESCRIPTION),
            row_number: record.row_number(),
        })
    }
}

impl FieldMapper {
    /// Text field: trimmed value, blank/absent → None.
    fn text(&self, record: &RawRecord, label: &str) -> Option<String> {
        record.get(label).map(|v| v.trim().to_string())
    }

    /// Integer field. Spreadsheet cells frequently arrive as decimals
    /// ("1001.0"), so an integral float is accepted and truncated;
    /// anything else non-numeric is a row-level error.
    fn parse_i64(&self, record: &RawRecord, label: &str) -> ImportResult<Option<i64>> {
        let value = match record.get(label) {
            None => return Ok(None),
            Some(v) => v.trim(),
        };

        if let Ok(n) = value.parse::<i64>() {
            return Ok(Some(n));
        }

        match value.parse::<f64>() {
            Ok(f) if f.fract() == 0.0 && f.abs() < i64::MAX as f64 => Ok(Some(f as i64)),
            _ => Err(ImportError::TypeConversionError {
                row: record.row_number(),
                field: label.to_string(),
                message: format!("cannot parse as integer: {}", value),
            }),
        }
    }

    /// Float field: absent → None, non-numeric → row-level error.
    fn parse_f64(&self, record: &RawRecord, label: &str) -> ImportResult<Option<f64>> {
        match record.get(label) {
            None => Ok(None),
            Some(value) => {
                let value = value.trim();
                value
                    .parse::<f64>()
                    .map(Some)
                    .map_err(|_| ImportError::TypeConversionError {
                        row: record.row_number(),
                        field: label.to_string(),
                        message: format!("cannot parse as number: {}", value),
                    })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn customer_record(code: &str, name: &str) -> RawRecord {
        let mut record = RawRecord::new(2);
        record.insert(labels::customer::SUBSCRIPTION_CODE, code);
        record.insert(labels::customer::NAME, name);
        record
    }

    #[test]
    fn test_map_customer_basic() {
        let record = customer_record("1001", "علی");

        let mapped = FieldMapper.map_to_customer(&record).unwrap();

        assert_eq!(mapped.subscription_code, Some(1001));
        assert_eq!(mapped.name.as_deref(), Some("علی"));
        assert_eq!(mapped.surname, None);
        assert_eq!(mapped.row_number, 2);
    }

    #[test]
    fn test_map_customer_trims_whitespace() {
        let record = customer_record("1001", "  علی  ");

        let mapped = FieldMapper.map_to_customer(&record).unwrap();

        assert_eq!(mapped.name.as_deref(), Some("علی"));
    }

    #[test]
    fn test_map_customer_blank_is_absent() {
        let mut record = customer_record("1001", "علی");
        record.insert(labels::customer::EMAIL, "   ");

        let mapped = FieldMapper.map_to_customer(&record).unwrap();

        assert_eq!(mapped.email, None);
    }

    #[test]
    fn test_parse_i64_accepts_integral_decimal() {
        let record = customer_record("1001.0", "علی");

        let mapped = FieldMapper.map_to_customer(&record).unwrap();

        assert_eq!(mapped.subscription_code, Some(1001));
    }

    #[test]
    fn test_parse_i64_rejects_text() {
        let record = customer_record("abc", "علی");

        let result = FieldMapper.map_to_customer(&record);

        assert!(matches!(
            result,
            Err(ImportError::TypeConversionError { row: 2, .. })
        ));
    }

    #[test]
    fn test_map_order_numeric_fields() {
        let mut record = RawRecord::new(5);
        record.insert(labels::order::SUBSCRIPTION_CODE, "1001");
        record.insert(labels::order::QUANTITY, "5");
        record.insert(labels::order::PRICE, "1200.0");

        let mapped = FieldMapper.map_to_order(&record).unwrap();

        assert_eq!(mapped.subscription_code, Some(1001));
        assert_eq!(mapped.quantity, Some(5));
        assert_eq!(mapped.price, Some(1200.0));
        assert_eq!(mapped.tax_percent, None);
    }

    #[test]
    fn test_map_order_bad_price_is_row_error() {
        let mut record = RawRecord::new(7);
        record.insert(labels::order::SUBSCRIPTION_CODE, "1001");
        record.insert(labels::order::PRICE, "free");

        let result = FieldMapper.map_to_order(&record);

        assert!(matches!(
            result,
            Err(ImportError::TypeConversionError { row: 7, .. })
        ));
    }

    #[test]
    fn test_map_financial() {
        let mut record = RawRecord::new(3);
        record.insert(labels::financial::SUBSCRIPTION_CODE, "2002");
        record.insert(labels::financial::AMOUNT, "150000");
        record.insert(labels::financial::LOAN_CODE, "L01");

        let mapped = FieldMapper.map_to_financial(&record).unwrap();

        assert_eq!(mapped.subscription_code, Some(2002));
        assert_eq!(mapped.amount, Some(150000.0));
        assert_eq!(mapped.loan_code.as_deref(), Some("L01"));
        assert_eq!(mapped.description, None);
    }
}
