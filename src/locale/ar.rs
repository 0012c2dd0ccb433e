use super::Catalog;

/// Arabic strings.
pub static ARABIC: Catalog = Catalog {
    wizard_title: "اطلب سيارتك",
    order_title: "ملخص طلب السيارة",

    step_buyer_type: "نوع المشتري",
    step_payment_method: "طريقة الدفع",
    step_personal_info: "المعلومات الشخصية",
    step_financial_info: "المعلومات المالية",
    step_confirmation: "المراجعة والتأكيد",

    label_buyer_type: "نوع المشتري",
    label_payment_method: "طريقة الدفع",
    label_full_name: "الاسم الكامل",
    label_national_id: "رقم الهوية / الإقامة",
    label_email: "البريد الإلكتروني",
    label_phone: "رقم الجوال",
    label_has_whatsapp: "متاح على واتساب",
    label_job_sector: "قطاع العمل",
    label_bank_verified: "الراتب موثق من البنك",
    label_monthly_salary: "الراتب الشهري",
    label_bank_or_finance_company: "البنك أو جهة التمويل",
    label_has_existing_obligations: "التزامات مالية قائمة",
    label_personal_obligation_amount: "قسط القرض الشخصي",
    label_property_obligation_amount: "قسط التمويل العقاري",
    label_loan_details: "تفاصيل الالتزامات",
    label_accepted_terms: "أوافق على الشروط والأحكام",
    label_note: "ملاحظات",

    individual: "فرد",
    company: "شركة",
    cash: "كاش",
    finance: "تمويل",
    government: "حكومي",
    military: "عسكري",
    private_sector: "قطاع خاص",
    retired: "متقاعد",
    verified: "موثق",
    not_verified: "غير موثق",
    yes: "نعم",
    no: "لا",

    err_buyer_type_required: "يرجى اختيار نوع المشتري",
    err_payment_method_required: "يرجى اختيار طريقة الدفع",
    err_job_sector_required: "يرجى اختيار قطاع العمل",
    err_bank_verified_required: "يرجى تحديد ما إذا كان الراتب موثقا من البنك",
    err_monthly_salary_required: "يرجى إدخال الراتب الشهري",
    err_bank_required: "يرجى إدخال البنك أو جهة التمويل",
    err_obligations_required: "يرجى تحديد الالتزامات المالية القائمة",
    err_loan_details_required: "يرجى إدخال مبلغ التزام واحد على الأقل",
    err_full_name_required: "يرجى إدخال الاسم الكامل",
    err_national_id_required: "يرجى إدخال رقم الهوية",
    err_email_invalid: "يرجى إدخال بريد إلكتروني صحيح",
    err_phone_required: "يرجى إدخال رقم الجوال",
    err_terms_required: "يجب الموافقة على الشروط والأحكام",

    nav_prompt: "الخطوة التالية؟",
    action_next: "التالي",
    action_back: "السابق",
    action_cancel: "إلغاء",
    action_submit: "إرسال الطلب",
    action_export: "تحميل ملخص الطلب",

    submitting: "جار إرسال طلبك...",
    submit_success: "تم استلام طلبك. سيتواصل معك فريقنا قريبا.",
    submit_failure: "تعذر إرسال طلبك. يرجى المحاولة مرة أخرى.",
    export_saved: "تم حفظ ملخص الطلب في",
    cancelled: "تم إلغاء الطلب",

    summary_title: "ملخص الطلب",
    vehicle_title: "السيارة",
    vehicle_year: "سنة الصنع",
    vehicle_price: "السعر",
    vehicle_specs: "المواصفات",
    generated_at: "تاريخ الإنشاء",

    filter_make: "الشركة المصنعة",
    filter_body_type: "نوع الهيكل",
    filter_fuel: "نوع الوقود",
    filter_max_price: "السعر الأقصى (اتركه فارغا لأي سعر)",
    filter_any: "الكل",
};
