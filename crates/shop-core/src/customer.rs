//! # Customer
//!
//! A shopper with a balance and an inbox for shop announcements.

use crate::error::{ShopError, ShopResult};
use crate::observer::Observer;
use crate::product::Money;
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;
use tracing::info;

type Inbox = Rc<RefCell<VecDeque<String>>>;

/// A customer of the shop
#[derive(Debug)]
pub struct Customer {
    name: String,
    balance: Money,
    inbox: Inbox,
}

impl Customer {
    pub fn new(name: impl Into<String>, balance: Money) -> Self {
        Self {
            name: name.into(),
            balance,
            inbox: Rc::new(RefCell::new(VecDeque::new())),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn balance(&self) -> Money {
        self.balance
    }

    /// Check whether the balance covers `amount`
    pub fn can_afford(&self, amount: &Money) -> ShopResult<bool> {
        self.balance.covers(amount)
    }

    /// Debit the balance.
    ///
    /// Fails with `InsufficientFunds` rather than going below zero; the
    /// balance is untouched on any error.
    pub fn pay(&mut self, amount: Money) -> ShopResult<()> {
        if !self.can_afford(&amount)? {
            return Err(ShopError::InsufficientFunds {
                required: amount,
                available: self.balance,
            });
        }
        self.balance = self.balance.checked_sub(amount)?;
        Ok(())
    }

    /// An observer that delivers into this customer's inbox
    pub fn listener(&self) -> CustomerListener {
        CustomerListener {
            name: self.name.clone(),
            inbox: Rc::clone(&self.inbox),
        }
    }

    /// Drain pending notifications, oldest first
    pub fn take_notifications(&mut self) -> Vec<String> {
        self.inbox.borrow_mut().drain(..).collect()
    }
}

/// Observer half of a [`Customer`]
pub struct CustomerListener {
    name: String,
    inbox: Inbox,
}

impl Observer for CustomerListener {
    fn notify(&self, message: &str) {
        info!(customer = %self.name, "Notification: {}", message);
        self.inbox.borrow_mut().push_back(message.to_string());
    }

    fn observer_name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::product::Currency;

    fn pln(major: i64) -> Money {
        Money::from_major(major, Currency::PLN)
    }

    #[test]
    fn test_pay_debits_balance() {
        let mut customer = Customer::new("jan", pln(5000));
        customer.pay(pln(150)).unwrap();
        assert_eq!(customer.balance(), pln(4850));

        customer.pay(pln(4850)).unwrap();
        assert_eq!(customer.balance(), pln(0));
    }

    #[test]
    fn test_pay_refuses_overdraft() {
        let mut customer = Customer::new("jan", pln(10));
        let err = customer.pay(pln(20)).unwrap_err();

        assert_eq!(
            err,
            ShopError::InsufficientFunds {
                required: pln(20),
                available: pln(10),
            }
        );
        assert_eq!(customer.balance(), pln(10));
    }

    #[test]
    fn test_pay_refuses_foreign_currency() {
        let mut customer = Customer::new("jan", pln(100));
        let err = customer
            .pay(Money::from_major(1, Currency::EUR))
            .unwrap_err();

        assert!(matches!(err, ShopError::CurrencyMismatch { .. }));
        assert_eq!(customer.balance(), pln(100));
    }

    #[test]
    fn test_listener_fills_inbox() {
        let mut customer = Customer::new("jan", pln(1));
        let listener = customer.listener();

        listener.notify("first");
        listener.notify("second");

        assert_eq!(listener.observer_name(), "jan");
        assert_eq!(customer.take_notifications(), vec!["first", "second"]);
        assert!(customer.take_notifications().is_empty());
    }
}
