use crate::Money;

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Player {
    name: String,
    position: usize,
    balance: Money,
}

impl Player {
    pub fn new(name: impl Into<String>, balance: Money) -> Self {
        Self {
            name: name.into(),
            position: 0,
            balance,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn balance(&self) -> Money {
        self.balance
    }

    /// A player with nothing left is out of the game. There is no stored
    /// status, every check goes through here.
    pub fn is_eliminated(&self) -> bool {
        self.balance <= 0
    }

    pub fn deposit(&mut self, amount: Money) {
        self.balance = self.balance.saturating_add(amount);
    }

    /// No floor check, callers clamp the amount before withdrawing.
    pub fn withdraw(&mut self, amount: Money) {
        self.balance = self.balance.saturating_sub(amount);
    }

    pub fn set_position(&mut self, position: usize) {
        self.position = position;
    }
}
