use tracing::{debug, info};
use crate::{Game, GameError, Money};

const PURCHASE_PRICE_MULTIPLIER: Money = 5;

pub fn purchase_price(rent: Money) -> Money {
    rent * PURCHASE_PRICE_MULTIPLIER
}

impl Game {
    /// Settles whatever `name` owes for the space they are standing on.
    ///
    /// Unowned spaces, the player's own spaces and positions past the end of the
    /// board cost nothing. A rent that meets or exceeds the payer's balance takes
    /// all of it and the payer forfeits every space they hold. A payer already in
    /// debt hands over nothing.
    pub fn pay_rent(&mut self, name: &str) -> Result<(), GameError> {
        let player = self.player_or_err(name)?;
        let position = player.position();
        let balance = player.balance();

        let Some(space) = self.board.get(position) else {
            return Ok(());
        };

        let owner = match space.owner() {
            Some(owner) if owner != name => owner.to_string(),
            _ => return Ok(()),
        };

        let rent = space.rent();

        if rent >= balance {
            let amount = balance.max(0);
            self.transfer(name, &owner, amount)?;
            let released = self.board.release_all_owned_by(name);
            info!(player = name, owner = %owner, amount, released, "player eliminated");
        } else {
            self.transfer(name, &owner, rent)?;
            debug!(player = name, owner = %owner, amount = rent, "paid rent");
        }

        Ok(())
    }

    /// Moves `amount` from one player to another. Both players are resolved
    /// before either balance changes.
    fn transfer(&mut self, from: &str, to: &str, amount: Money) -> Result<(), GameError> {
        if !self.players.contains_key(to) {
            return Err(GameError::UnknownPlayer(to.to_string()));
        }

        self.player_mut_or_err(from)?.withdraw(amount);
        self.player_mut_or_err(to)?.deposit(amount);

        Ok(())
    }
}
