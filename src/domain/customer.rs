// ==========================================
// Cross Check - customer entity
// ==========================================
// customers table: one row per subscription code, merge-by-key on
// re-import. All attributes except the key are optional text.
// ==========================================

use serde::{Deserialize, Serialize};

// ==========================================
// RawCustomerRecord - coercion output
// ==========================================
// Intermediate candidate produced by the field mapper. The key is
// still optional here; the persistence precondition (present,
// non-zero) is checked by the batch importer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawCustomerRecord {
    pub subscription_code: Option<i64>,
    pub name: Option<String>,
    pub surname: Option<String>,
    pub father_name: Option<String>,
    pub certificate_number: Option<String>,
    pub national_id: Option<String>,
    pub second_name: Option<String>,
    pub phone1: Option<String>,
    pub phone2: Option<String>,
    pub phone3: Option<String>,
    pub mobile: Option<String>,
    pub fax: Option<String>,
    pub economic_code: Option<String>,
    pub address: Option<String>,
    pub postal_code: Option<String>,
    pub email: Option<String>,
    pub province: Option<String>,
    pub city: Option<String>,

    pub row_number: usize,
}

impl RawCustomerRecord {
    /// Promote the candidate once the key has been validated.
    pub fn into_customer(self, subscription_code: i64) -> Customer {
        Customer {
            subscription_code,
            name: self.name,
            surname: self.surname,
            father_name: self.father_name,
            certificate_number: self.certificate_number,
            national_id: self.national_id,
            second_name: self.second_name,
            phone1: self.phone1,
            phone2: self.phone2,
            phone3: self.phone3,
            mobile: self.mobile,
            fax: self.fax,
            economic_code: self.economic_code,
            address: self.address,
            postal_code: self.postal_code,
            email: self.email,
            province: self.province,
            city: self.city,
        }
    }
}

// ==========================================
// Customer - persisted entity
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Customer {
    /// کد اشتراک - the natural business key
    pub subscription_code: i64,

    pub name: Option<String>,               // نام
    pub surname: Option<String>,            // نام خانوادگی
    pub father_name: Option<String>,        // نام پدر
    pub certificate_number: Option<String>, // شماره شناسنامه
    pub national_id: Option<String>,        // کد ملی/شناسه ملی
    pub second_name: Option<String>,        // نام دوم (چاپی)
    pub phone1: Option<String>,             // تلفن 1
    pub phone2: Option<String>,             // تلفن 2
    pub phone3: Option<String>,             // تلفن 3
    pub mobile: Option<String>,             // موبایل
    pub fax: Option<String>,                // نمابر
    pub economic_code: Option<String>,      // کد اقتصادی
    pub address: Option<String>,            // آدرس
    pub postal_code: Option<String>,        // کد پستی
    pub email: Option<String>,              // ایمیل
    pub province: Option<String>,           // استان
    pub city: Option<String>,               // شهرستان
}
