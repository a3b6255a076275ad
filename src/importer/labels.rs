// ==========================================
// Cross Check - source column labels
// ==========================================
// The Persian column headers of the three source spreadsheets. This
// is the single source of truth for the external header contract;
// the field mapper looks fields up only through these constants.
// Parsers trim headers, so the tables hold trimmed labels (the
// financials sheet ships trailing spaces in its headers).
// ==========================================

pub mod customer {
    pub const SUBSCRIPTION_CODE: &str = "کد اشتراک";
    pub const NAME: &str = "نام";
    pub const SURNAME: &str = "نام خانوادگی";
    pub const FATHER_NAME: &str = "نام پدر";
    pub const CERTIFICATE_NUMBER: &str = "شماره شناسنامه";
    pub const NATIONAL_ID: &str = "کد ملی/شناسه ملی";
    pub const SECOND_NAME: &str = "نام دوم (چاپی)";
    pub const PHONE1: &str = "تلفن 1";
    pub const PHONE2: &str = "تلفن 2";
    pub const PHONE3: &str = "تلفن 3";
    pub const MOBILE: &str = "موبایل";
    pub const FAX: &str = "نمابر";
    pub const ECONOMIC_CODE: &str = "کد اقتصادی";
    pub const ADDRESS: &str = "آدرس";
    pub const POSTAL_CODE: &str = "کد پستی";
    pub const EMAIL: &str = "ایمیل";
    pub const PROVINCE: &str = "استان";
    pub const CITY: &str = "شهرستان";

    /// Complete label vocabulary of the customers sheet.
    pub const ALL: &[&str] = &[
        SUBSCRIPTION_CODE,
        NAME,
        SURNAME,
        FATHER_NAME,
        CERTIFICATE_NUMBER,
        NATIONAL_ID,
        SECOND_NAME,
        PHONE1,
        PHONE2,
        PHONE3,
        MOBILE,
        FAX,
        ECONOMIC_CODE,
        ADDRESS,
        POSTAL_CODE,
        EMAIL,
        PROVINCE,
        CITY,
    ];
}

pub mod order {
    pub const INVOICE_ID: &str = "شناسه فاکتور";
    pub const INVOICE_DATE: &str = "تاریخ فاکتور";
    pub const SUBSCRIPTION_CODE: &str = "کد اشتراک";
    pub const PERSON_NAME: &str = "نام شخص";
    pub const DESCRIPTION: &str = "توضیحات";
    pub const SETTLEMENT_TYPE: &str = "نوع تسویه";
    pub const SETTLEMENT_DATE: &str = "تاریخ تسویه";
    pub const EXPIRY_DATE: &str = "تاریخ انقضا";
    pub const PERSON_SUBJECT_CODE: &str = "کدبابت شخص";
    pub const OPERATION_SUBJECT_CODE: &str = "کد بابت عملیات";
    pub const INVOICE_NATURE_CODE: &str = "کد ماهیت فاکتور";
    pub const MARKETER_CODE: &str = "کد بازاریاب";
    pub const AMOUNT_DISCOUNT: &str = "تخفیف مبلغی";
    pub const TOTAL_TAX_PERCENT: &str = "درصد مالیات کل";
    pub const TOTAL_TOLL_PERCENT: &str = "درصد عوارض کل";
    pub const WAREHOUSE_CODE: &str = "کد انبار";
    pub const WAREHOUSE_NAME: &str = "نام انبار";
    pub const PRODUCT_CODE: &str = "کد کالا";
    pub const PRODUCT_NAME: &str = "نام کالا";
    pub const ITEM_DESCRIPTION: &str = "توضیحات کالا";
    pub const SPECIAL_COEF1: &str = "ضریب ویژه 1";
    pub const SPECIAL_COEF2: &str = "ضریب ویژه 2";
    pub const SPECIAL_COEF3: &str = "ضریب ویژه 3";
    pub const QUANTITY: &str = "تعداد (واحد اصلی)";
    pub const SECONDARY_QUANTITY: &str = "مقدار (واحد فرعی)";
    pub const PRICE: &str = "فی";
    pub const PRICE_FOREIGN: &str = "فی (ارزی)";
    pub const DISCOUNT_PERCENT: &str = "درصد/مبلغ تخفیف";
    pub const TAX_PERCENT: &str = "درصد مالیات";
    pub const TOLL_PERCENT: &str = "درصد عوارض";
    pub const SENDING_NATURE_CODE: &str = "کد ماهیت ارسال";
    pub const SENDING_DATE: &str = "تاریخ ارسال";

    /// Complete label vocabulary of the orders sheet.
    pub const ALL: &[&str] = &[
        INVOICE_ID,
        INVOICE_DATE,
        SUBSCRIPTION_CODE,
        PERSON_NAME,
        DESCRIPTION,
        SETTLEMENT_TYPE,
        SETTLEMENT_DATE,
        EXPIRY_DATE,
        PERSON_SUBJECT_CODE,
        OPERATION_SUBJECT_CODE,
        INVOICE_NATURE_CODE,
        MARKETER_CODE,
        AMOUNT_DISCOUNT,
        TOTAL_TAX_PERCENT,
        TOTAL_TOLL_PERCENT,
        WAREHOUSE_CODE,
        WAREHOUSE_NAME,
        PRODUCT_CODE,
        PRODUCT_NAME,
        ITEM_DESCRIPTION,
        SPECIAL_COEF1,
        SPECIAL_COEF2,
        SPECIAL_COEF3,
        QUANTITY,
        SECONDARY_QUANTITY,
        PRICE,
        PRICE_FOREIGN,
        DISCOUNT_PERCENT,
        TAX_PERCENT,
        TOLL_PERCENT,
        SENDING_NATURE_CODE,
        SENDING_DATE,
    ];
}

pub mod financial {
    pub const SUBSCRIPTION_CODE: &str = "کد اشتراک";
    pub const AMOUNT: &str = "مبلغ";
    pub const LOAN_CODE: &str = "کد وام";
    pub const DESCRIPTION: &str = "توضیحات";

    /// Complete label vocabulary of the financials sheet.
    pub const ALL: &[&str] = &[SUBSCRIPTION_CODE, AMOUNT, LOAN_CODE, DESCRIPTION];
}
