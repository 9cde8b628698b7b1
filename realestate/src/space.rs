use std::fmt::{Display, Formatter};
use crate::money::purchase_price;
use crate::Money;

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Space {
    rent: Money,
    purchase_price: Money,
    owner: Option<String>,
}

impl Space {
    pub fn new(rent: u32) -> Self {
        let rent = Money::from(rent);
        Self {
            rent,
            purchase_price: purchase_price(rent),
            owner: None,
        }
    }

    /// The rent free, unownable space every board begins with.
    pub fn go() -> Self {
        Self::new(0)
    }

    pub fn rent(&self) -> Money {
        self.rent
    }

    pub fn purchase_price(&self) -> Money {
        self.purchase_price
    }

    pub fn owner(&self) -> Option<&str> {
        self.owner.as_deref()
    }

    pub fn is_owned(&self) -> bool {
        self.owner.is_some()
    }

    pub fn is_owned_by(&self, name: &str) -> bool {
        self.owner.as_deref() == Some(name)
    }

    pub fn set_owner(&mut self, owner: Option<String>) {
        self.owner = owner;
    }
}

impl Display for Space {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match &self.owner {
            Some(owner) => write!(f, "${: <5} ${: <6} {}", self.rent, self.purchase_price, owner),
            None => write!(f, "${: <5} ${: <6} -", self.rent, self.purchase_price),
        }
    }
}
