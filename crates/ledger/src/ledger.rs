//! Ledger operations on a single user's accounts.
//!
//! These only mutate the in-memory `User`; persisting the result is the
//! caller's job (see the user store).

use banklite_core::{AccountId, DomainError, DomainResult, entity::position_of};

use crate::{Account, AccountIdGenerator, User};

/// Input for opening a new account.
#[derive(Debug, Clone, PartialEq)]
pub struct NewAccount {
    pub name: String,
    pub kind: String,
    pub initial_balance: f64,
}

/// Move `amount` from one of the user's accounts to another.
#[derive(Debug, Clone, PartialEq)]
pub struct Transfer {
    pub from: AccountId,
    pub to: AccountId,
    pub amount: f64,
}

impl User {
    /// Append a new account with a freshly generated id.
    ///
    /// The id is not checked against existing accounts.
    pub fn add_account(
        &mut self,
        ids: &dyn AccountIdGenerator,
        new: NewAccount,
    ) -> DomainResult<Account> {
        if new.name.is_empty() || new.kind.is_empty() {
            return Err(DomainError::validation("account name and type are required"));
        }
        if !new.initial_balance.is_finite() {
            return Err(DomainError::validation("initial balance must be a finite number"));
        }

        let account = Account {
            id: ids.next_id(),
            name: new.name,
            kind: new.kind,
            balance: new.initial_balance,
        };
        self.accounts.push(account.clone());
        Ok(account)
    }

    pub fn account(&self, account_id: &AccountId) -> Option<&Account> {
        position_of(&self.accounts, account_id).map(|i| &self.accounts[i])
    }

    fn account_mut(&mut self, account_id: &AccountId) -> DomainResult<&mut Account> {
        let i = position_of(&self.accounts, account_id).ok_or(DomainError::not_found("account"))?;
        Ok(&mut self.accounts[i])
    }

    /// Rename the first account with `account_id`.
    pub fn rename_account(&mut self, account_id: &AccountId, new_name: &str) -> DomainResult<Account> {
        if new_name.is_empty() {
            return Err(DomainError::validation("new name is required"));
        }
        let account = self.account_mut(account_id)?;
        account.name = new_name.to_string();
        Ok(account.clone())
    }

    /// `balance += amount`. Negative amounts are withdrawals; the result may
    /// be negative.
    pub fn adjust_balance(&mut self, account_id: &AccountId, amount: f64) -> DomainResult<Account> {
        if !amount.is_finite() {
            return Err(DomainError::validation("amount must be a finite number"));
        }
        let account = self.account_mut(account_id)?;
        let balance = account.balance + amount;
        if !balance.is_finite() {
            return Err(DomainError::validation("resulting balance is out of range"));
        }
        account.balance = balance;
        Ok(account.clone())
    }

    /// Drop every account with `account_id`. Returns how many were removed.
    pub fn remove_account(&mut self, account_id: &AccountId) -> DomainResult<usize> {
        let before = self.accounts.len();
        self.accounts.retain(|a| &a.id != account_id);
        match before - self.accounts.len() {
            0 => Err(DomainError::not_found("account")),
            removed => Ok(removed),
        }
    }

    /// Debit `from` and credit `to` by the same amount.
    ///
    /// Either both balances change or neither does. Returns the updated
    /// `(from, to)` accounts.
    pub fn transfer(&mut self, transfer: &Transfer) -> DomainResult<(Account, Account)> {
        if !transfer.amount.is_finite() || transfer.amount <= 0.0 {
            return Err(DomainError::validation("transfer amount must be positive"));
        }
        if transfer.from == transfer.to {
            return Err(DomainError::validation("cannot transfer to the same account"));
        }

        let from = position_of(&self.accounts, &transfer.from).ok_or(DomainError::not_found("account"))?;
        let to = position_of(&self.accounts, &transfer.to).ok_or(DomainError::not_found("account"))?;

        let from_balance = self.accounts[from].balance - transfer.amount;
        let to_balance = self.accounts[to].balance + transfer.amount;
        if !from_balance.is_finite() || !to_balance.is_finite() {
            return Err(DomainError::validation("resulting balance is out of range"));
        }
        self.accounts[from].balance = from_balance;
        self.accounts[to].balance = to_balance;

        Ok((self.accounts[from].clone(), self.accounts[to].clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use banklite_core::UserId;
    use proptest::prelude::*;

    use crate::SequentialIdGenerator;

    fn test_user() -> User {
        User::new(UserId::new(1), "alice", "hash")
    }

    fn open(user: &mut User, ids: &SequentialIdGenerator, name: &str, balance: f64) -> Account {
        user.add_account(
            ids,
            NewAccount {
                name: name.to_string(),
                kind: "Checking".to_string(),
                initial_balance: balance,
            },
        )
        .unwrap()
    }

    #[test]
    fn add_account_appends_exactly_one() {
        let ids = SequentialIdGenerator::starting_at(1);
        let mut user = test_user();

        let first = open(&mut user, &ids, "Everyday", 100.0);
        assert_eq!(user.accounts.len(), 1);
        let second = open(&mut user, &ids, "Holiday", 0.0);
        assert_eq!(user.accounts.len(), 2);

        assert_eq!(user.accounts[0], first);
        assert_eq!(user.accounts[1], second);
        assert_ne!(first.id, second.id);
    }

    #[test]
    fn add_account_requires_name_and_type() {
        let ids = SequentialIdGenerator::starting_at(1);
        let mut user = test_user();

        let err = user
            .add_account(
                &ids,
                NewAccount {
                    name: String::new(),
                    kind: "Savings".to_string(),
                    initial_balance: 1.0,
                },
            )
            .unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
        assert!(user.accounts.is_empty());
    }

    #[test]
    fn rename_changes_only_the_first_match() {
        let mut user = test_user();
        let dup = AccountId::from("7");
        for name in ["one", "two"] {
            user.accounts.push(Account {
                id: dup.clone(),
                name: name.to_string(),
                kind: "Checking".to_string(),
                balance: 0.0,
            });
        }

        let renamed = user.rename_account(&dup, "renamed").unwrap();
        assert_eq!(renamed.name, "renamed");
        assert_eq!(user.accounts[0].name, "renamed");
        assert_eq!(user.accounts[1].name, "two");
    }

    #[test]
    fn rename_unknown_account_is_not_found() {
        let mut user = test_user();
        let err = user.rename_account(&AccountId::from("nope"), "x").unwrap_err();
        assert_eq!(err, DomainError::not_found("account"));
    }

    #[test]
    fn withdrawal_may_overdraw() {
        let ids = SequentialIdGenerator::starting_at(1);
        let mut user = test_user();
        let acc = open(&mut user, &ids, "Everyday", 10.0);

        let updated = user.adjust_balance(&acc.id, -25.0).unwrap();
        assert_eq!(updated.balance, -15.0);
        assert_eq!(user.account(&acc.id).unwrap().balance, -15.0);
    }

    #[test]
    fn overflowing_balance_is_rejected() {
        let ids = SequentialIdGenerator::starting_at(1);
        let mut user = test_user();
        let acc = open(&mut user, &ids, "Everyday", 1.7e308);
        let before = user.clone();

        let err = user.adjust_balance(&acc.id, 1.7e308).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
        assert_eq!(user, before);

        let drained = user.adjust_balance(&acc.id, -f64::MAX).unwrap();
        assert!(drained.balance.is_finite());
    }

    #[test]
    fn transfer_that_would_overflow_changes_nothing() {
        let ids = SequentialIdGenerator::starting_at(1);
        let mut user = test_user();
        let a = open(&mut user, &ids, "A", -1.7e308);
        let b = open(&mut user, &ids, "B", 1.7e308);
        let before = user.clone();

        let err = user
            .transfer(&Transfer {
                from: a.id.clone(),
                to: b.id.clone(),
                amount: 1.7e308,
            })
            .unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
        assert_eq!(user, before);
    }

    #[test]
    fn remove_unknown_account_leaves_ledger_untouched() {
        let ids = SequentialIdGenerator::starting_at(1);
        let mut user = test_user();
        open(&mut user, &ids, "Everyday", 10.0);
        let before = user.clone();

        let err = user.remove_account(&AccountId::from("missing")).unwrap_err();
        assert_eq!(err, DomainError::not_found("account"));
        assert_eq!(user, before);
    }

    #[test]
    fn remove_filters_every_copy_of_the_id() {
        let mut user = test_user();
        for _ in 0..2 {
            user.accounts.push(Account {
                id: AccountId::from("dup"),
                name: "dup".to_string(),
                kind: "Checking".to_string(),
                balance: 0.0,
            });
        }

        assert_eq!(user.remove_account(&AccountId::from("dup")).unwrap(), 2);
        assert!(user.accounts.is_empty());
    }

    #[test]
    fn transfer_rejects_bad_requests_without_side_effects() {
        let ids = SequentialIdGenerator::starting_at(1);
        let mut user = test_user();
        let a = open(&mut user, &ids, "A", 50.0);
        let b = open(&mut user, &ids, "B", 0.0);
        let before = user.clone();

        let cases = [
            (a.id.clone(), b.id.clone(), 0.0),
            (a.id.clone(), b.id.clone(), -5.0),
            (a.id.clone(), a.id.clone(), 5.0),
            (a.id.clone(), AccountId::from("ghost"), 5.0),
            (AccountId::from("ghost"), b.id.clone(), 5.0),
        ];
        for (from, to, amount) in cases {
            assert!(user.transfer(&Transfer { from, to, amount }).is_err());
            assert_eq!(user, before);
        }
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: adjusting by A moves the balance by exactly A, for any
        /// sign of A (integer amounts keep float arithmetic exact).
        #[test]
        fn adjust_moves_balance_by_exactly_amount(
            start in -1_000_000i64..1_000_000i64,
            deltas in prop::collection::vec(-100_000i64..100_000i64, 1..20)
        ) {
            let ids = SequentialIdGenerator::starting_at(1);
            let mut user = test_user();
            let acc = open(&mut user, &ids, "Everyday", start as f64);

            let mut expected = start as f64;
            for delta in deltas {
                let before = user.account(&acc.id).unwrap().balance;
                let after = user.adjust_balance(&acc.id, delta as f64).unwrap().balance;
                prop_assert_eq!(after - before, delta as f64);
                expected += delta as f64;
            }
            prop_assert_eq!(user.account(&acc.id).unwrap().balance, expected);
        }

        /// Property: transfers between a user's accounts conserve the total.
        #[test]
        fn transfers_conserve_total(
            amounts in prop::collection::vec(1i64..10_000i64, 1..20)
        ) {
            let ids = SequentialIdGenerator::starting_at(1);
            let mut user = test_user();
            let a = open(&mut user, &ids, "A", 1_000.0);
            let b = open(&mut user, &ids, "B", 0.0);

            for (i, amount) in amounts.into_iter().enumerate() {
                let (from, to) = if i % 2 == 0 { (&a, &b) } else { (&b, &a) };
                user.transfer(&Transfer {
                    from: from.id.clone(),
                    to: to.id.clone(),
                    amount: amount as f64,
                }).unwrap();

                let total: f64 = user.accounts.iter().map(|x| x.balance).sum();
                prop_assert_eq!(total, 1_000.0);
            }
        }
    }
}
