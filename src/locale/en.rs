use super::Catalog;

/// English strings.
pub static ENGLISH: Catalog = Catalog {
    wizard_title: "Order your car",
    order_title: "Car order summary",

    step_buyer_type: "Buyer type",
    step_payment_method: "Payment method",
    step_personal_info: "Personal information",
    step_financial_info: "Financial information",
    step_confirmation: "Review and confirm",

    label_buyer_type: "Buyer type",
    label_payment_method: "Payment method",
    label_full_name: "Full name",
    label_national_id: "National ID / Iqama",
    label_email: "Email",
    label_phone: "Mobile number",
    label_has_whatsapp: "Reachable on WhatsApp",
    label_job_sector: "Job sector",
    label_bank_verified: "Salary verified by bank",
    label_monthly_salary: "Monthly salary",
    label_bank_or_finance_company: "Bank or finance company",
    label_has_existing_obligations: "Existing financial obligations",
    label_personal_obligation_amount: "Personal loan installment",
    label_property_obligation_amount: "Mortgage installment",
    label_loan_details: "Obligation details",
    label_accepted_terms: "I accept the terms and conditions",
    label_note: "Notes",

    individual: "Individual",
    company: "Company",
    cash: "Cash",
    finance: "Finance",
    government: "Government",
    military: "Military",
    private_sector: "Private sector",
    retired: "Retired",
    verified: "Verified",
    not_verified: "Not verified",
    yes: "Yes",
    no: "No",

    err_buyer_type_required: "Please choose a buyer type",
    err_payment_method_required: "Please choose a payment method",
    err_job_sector_required: "Please choose your job sector",
    err_bank_verified_required: "Please tell us whether your salary is bank verified",
    err_monthly_salary_required: "Please enter your monthly salary",
    err_bank_required: "Please enter your bank or finance company",
    err_obligations_required: "Please tell us about existing obligations",
    err_loan_details_required: "Please enter at least one obligation amount",
    err_full_name_required: "Please enter your full name",
    err_national_id_required: "Please enter your national ID",
    err_email_invalid: "Please enter a valid email address",
    err_phone_required: "Please enter your mobile number",
    err_terms_required: "You must accept the terms and conditions",

    nav_prompt: "What next?",
    action_next: "Next",
    action_back: "Back",
    action_cancel: "Cancel",
    action_submit: "Submit order",
    action_export: "Download order summary",

    submitting: "Sending your order...",
    submit_success: "Your order was received. Our team will contact you shortly.",
    submit_failure: "We could not send your order. Please try again.",
    export_saved: "Order summary saved to",
    cancelled: "Order cancelled",

    summary_title: "Order summary",
    vehicle_title: "Vehicle",
    vehicle_year: "Year",
    vehicle_price: "Price",
    vehicle_specs: "Specifications",
    generated_at: "Generated",

    filter_make: "Make",
    filter_body_type: "Body type",
    filter_fuel: "Fuel",
    filter_max_price: "Maximum price (blank for any)",
    filter_any: "Any",
};
