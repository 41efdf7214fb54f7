//! Account ledger: users, their accounts and balance mutations.
//!
//! Pure domain logic only: no IO, no HTTP, no persistence concerns.

pub mod account;
pub mod ids;
pub mod ledger;
pub mod loans;
pub mod user;

pub use account::Account;
pub use ids::{AccountIdGenerator, ClockIdGenerator, SequentialIdGenerator};
pub use ledger::{NewAccount, Transfer};
pub use loans::{LoanProduct, loan_products};
pub use user::{PublicUser, User};
