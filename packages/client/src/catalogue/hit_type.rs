//! Enumerated protocol values

use std::fmt;

/// Value of the `t` parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HitType {
    PageView,
    ScreenView,
    Event,
    Transaction,
    Item,
    Social,
    Exception,
    Timing,
}

impl HitType {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            HitType::PageView => "pageview",
            HitType::ScreenView => "screenview",
            HitType::Event => "event",
            HitType::Transaction => "transaction",
            HitType::Item => "item",
            HitType::Social => "social",
            HitType::Exception => "exception",
            HitType::Timing => "timing",
        }
    }
}

impl fmt::Display for HitType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Value of the `pa` parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProductAction {
    Detail,
    Click,
    Add,
    Remove,
    Checkout,
    CheckoutOption,
    Purchase,
    Refund,
}

impl ProductAction {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ProductAction::Detail => "detail",
            ProductAction::Click => "click",
            ProductAction::Add => "add",
            ProductAction::Remove => "remove",
            ProductAction::Checkout => "checkout",
            ProductAction::CheckoutOption => "checkout_option",
            ProductAction::Purchase => "purchase",
            ProductAction::Refund => "refund",
        }
    }
}

impl fmt::Display for ProductAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Protocol version this client speaks.
pub const PROTOCOL_VERSION: &str = "1";
