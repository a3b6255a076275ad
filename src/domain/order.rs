// ==========================================
// Cross Check - order line entity
// ==========================================
// orders table: append-only invoice line items. The id is assigned by
// the store; total_value is recomputed at import time and never read
// from the source.
// ==========================================

use serde::{Deserialize, Serialize};

// ==========================================
// RawOrderRecord - coercion output
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawOrderRecord {
    pub invoice_id: Option<String>,
    pub invoice_date: Option<String>,
    pub subscription_code: Option<i64>,
    pub person_name: Option<String>,
    pub description: Option<String>,
    pub settlement_type: Option<String>,
    pub settlement_date: Option<String>,
    pub expiry_date: Option<String>,
    pub person_subject_code: Option<String>,
    pub operation_subject_code: Option<String>,
    pub invoice_nature_code: Option<String>,
    pub marketer_code: Option<String>,
    pub amount_discount: Option<f64>,
    pub total_tax_percent: Option<f64>,
    pub total_toll_percent: Option<f64>,
    pub warehouse_code: Option<String>,
    pub warehouse_name: Option<String>,
    pub product_code: Option<String>,
    pub product_name: Option<String>,
    pub item_description: Option<String>,
    pub special_coef1: Option<f64>,
    pub special_coef2: Option<f64>,
    pub special_coef3: Option<f64>,
    pub quantity: Option<i64>,
    pub secondary_quantity: Option<f64>,
    pub price: Option<f64>,
    pub price_foreign: Option<f64>,
    pub discount_percent: Option<f64>,
    pub tax_percent: Option<f64>,
    pub toll_percent: Option<f64>,
    pub sending_nature_code: Option<String>,
    pub sending_date: Option<String>,

    pub row_number: usize,
}

impl RawOrderRecord {
    /// Promote the candidate once the key has been validated and the
    /// line total has been derived. Absent quantity/price persist as
    /// their zero defaults, matching the derivation inputs.
    pub fn into_order_line(self, subscription_code: i64, total_value: f64) -> OrderLine {
        OrderLine {
            id: None,
            invoice_id: self.invoice_id,
            invoice_date: self.invoice_date,
            subscription_code,
            person_name: self.person_name,
            description: self.description,
            settlement_type: self.settlement_type,
            settlement_date: self.settlement_date,
            expiry_date: self.expiry_date,
            person_subject_code: self.person_subject_code,
            operation_subject_code: self.operation_subject_code,
            invoice_nature_code: self.invoice_nature_code,
            marketer_code: self.marketer_code,
            amount_discount: self.amount_discount,
            total_tax_percent: self.total_tax_percent,
            total_toll_percent: self.total_toll_percent,
            warehouse_code: self.warehouse_code,
            warehouse_name: self.warehouse_name,
            product_code: self.product_code,
            product_name: self.product_name,
            item_description: self.item_description,
            special_coef1: self.special_coef1,
            special_coef2: self.special_coef2,
            special_coef3: self.special_coef3,
            quantity: self.quantity.unwrap_or(0),
            secondary_quantity: self.secondary_quantity,
            price: self.price.unwrap_or(0.0),
            price_foreign: self.price_foreign,
            discount_percent: self.discount_percent,
            tax_percent: self.tax_percent,
            toll_percent: self.toll_percent,
            sending_nature_code: self.sending_nature_code,
            sending_date: self.sending_date,
            total_value,
        }
    }
}

// ==========================================
// OrderLine - persisted entity
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderLine {
    /// Store-assigned identity; None until inserted
    pub id: Option<i64>,

    pub invoice_id: Option<String>,             // شناسه فاکتور
    pub invoice_date: Option<String>,           // تاریخ فاکتور
    /// کد اشتراک - weak reference to customers
    pub subscription_code: i64,
    pub person_name: Option<String>,            // نام شخص
    pub description: Option<String>,            // توضیحات
    pub settlement_type: Option<String>,        // نوع تسویه
    pub settlement_date: Option<String>,        // تاریخ تسویه
    pub expiry_date: Option<String>,            // تاریخ انقضا
    pub person_subject_code: Option<String>,    // کدبابت شخص
    pub operation_subject_code: Option<String>, // کد بابت عملیات
    pub invoice_nature_code: Option<String>,    // کد ماهیت فاکتور
    pub marketer_code: Option<String>,          // کد بازاریاب
    pub amount_discount: Option<f64>,           // تخفیف مبلغی
    pub total_tax_percent: Option<f64>,         // درصد مالیات کل
    pub total_toll_percent: Option<f64>,        // درصد عوارض کل
    pub warehouse_code: Option<String>,         // کد انبار
    pub warehouse_name: Option<String>,         // نام انبار
    pub product_code: Option<String>,           // کد کالا
    pub product_name: Option<String>,           // نام کالا
    pub item_description: Option<String>,       // توضیحات کالا
    pub special_coef1: Option<f64>,             // ضریب ویژه 1
    pub special_coef2: Option<f64>,             // ضریب ویژه 2
    pub special_coef3: Option<f64>,             // ضریب ویژه 3
    pub quantity: i64,                          // تعداد (واحد اصلی)
    pub secondary_quantity: Option<f64>,        // مقدار (واحد فرعی)
    pub price: f64,                             // فی
    pub price_foreign: Option<f64>,             // فی (ارزی)
    pub discount_percent: Option<f64>,          // درصد/مبلغ تخفیف
    pub tax_percent: Option<f64>,               // درصد مالیات
    pub toll_percent: Option<f64>,              // درصد عوارض
    pub sending_nature_code: Option<String>,    // کد ماهیت ارسال
    pub sending_date: Option<String>,           // تاریخ ارسال
    /// Derived: quantity × price, recomputed at import
    pub total_value: f64,
}
