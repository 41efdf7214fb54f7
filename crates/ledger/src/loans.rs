//! Static loan catalogue shown on the loans page.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoanProduct {
    pub id: &'static str,
    pub name: &'static str,
    pub interest_rate: &'static str,
    pub term: &'static str,
    pub description: &'static str,
}

const LOAN_PRODUCTS: &[LoanProduct] = &[
    LoanProduct {
        id: "personal",
        name: "Personal Loan",
        interest_rate: "7.99% APR",
        term: "12 - 60 months",
        description: "Unsecured financing for life's planned and unplanned expenses.",
    },
    LoanProduct {
        id: "auto",
        name: "Auto Loan",
        interest_rate: "5.49% APR",
        term: "24 - 72 months",
        description: "Competitive rates on new and used vehicles.",
    },
    LoanProduct {
        id: "mortgage",
        name: "Home Mortgage",
        interest_rate: "6.25% APR",
        term: "15 or 30 years",
        description: "Fixed-rate mortgages for buying or refinancing a home.",
    },
];

pub fn loan_products() -> &'static [LoanProduct] {
    LOAN_PRODUCTS
}
