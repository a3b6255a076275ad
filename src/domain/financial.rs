// ==========================================
// Cross Check - financial/loan entity
// ==========================================
// financials table: append-only loan entries.
// ==========================================

use serde::{Deserialize, Serialize};

// ==========================================
// RawFinancialRecord - coercion output
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawFinancialRecord {
    pub subscription_code: Option<i64>,
    pub amount: Option<f64>,
    pub loan_code: Option<String>,
    pub description: Option<String>,

    pub row_number: usize,
}

impl RawFinancialRecord {
    /// Promote the candidate once the key has been validated. An
    /// absent amount persists as 0.0.
    pub fn into_financial_record(self, subscription_code: i64) -> FinancialRecord {
        FinancialRecord {
            id: None,
            subscription_code,
            amount: self.amount.unwrap_or(0.0),
            loan_code: self.loan_code,
            description: self.description,
        }
    }
}

// ==========================================
// FinancialRecord - persisted entity
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FinancialRecord {
    /// Store-assigned identity; None until inserted
    pub id: Option<i64>,

    /// کد اشتراک - weak reference to customers
    pub subscription_code: i64,
    pub amount: f64,                 // مبلغ
    pub loan_code: Option<String>,   // کد وام
    pub description: Option<String>, // توضیحات
}
