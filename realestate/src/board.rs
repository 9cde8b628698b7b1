use std::fmt::{Display, Formatter};
use crate::space::Space;
use crate::Money;

#[derive(Clone, Debug, Default)]
pub struct Board {
    spaces: Vec<Space>,
    land_bonus: Money,
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the land bonus and appends go followed by one space per rent.
    ///
    /// Calling this a second time appends another go and another run of spaces
    /// rather than replacing the board.
    pub fn extend(&mut self, land_bonus: Money, rents: &[u32]) {
        self.land_bonus = land_bonus;
        self.spaces.push(Space::go());
        self.spaces.extend(rents.iter().map(|rent| Space::new(*rent)));
    }

    pub fn len(&self) -> usize {
        self.spaces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spaces.is_empty()
    }

    pub fn land_bonus(&self) -> Money {
        self.land_bonus
    }

    pub fn get(&self, position: usize) -> Option<&Space> {
        self.spaces.get(position)
    }

    pub fn get_mut(&mut self, position: usize) -> Option<&mut Space> {
        self.spaces.get_mut(position)
    }

    pub fn spaces(&self) -> impl Iterator<Item = &Space> {
        self.spaces.iter()
    }

    pub fn spaces_owned_by<'a>(&'a self, name: &'a str) -> impl Iterator<Item = usize> + 'a {
        self.spaces
            .iter()
            .enumerate()
            .filter(move |(_, space)| space.is_owned_by(name))
            .map(|(position, _)| position)
    }

    /// Returns every space held by `name` to the bank, yielding how many were freed.
    pub fn release_all_owned_by(&mut self, name: &str) -> usize {
        let mut released = 0;
        for space in self.spaces.iter_mut().filter(|space| space.is_owned_by(name)) {
            space.set_owner(None);
            released += 1;
        }
        released
    }
}

#[allow(unused_must_use)]
impl Display for Board {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "  #   Rent   Price   Owner");
        for (position, space) in self.spaces.iter().enumerate() {
            f.write_fmt(format_args!("{: >3}   {}", position, space));
            writeln!(f);
        }
        Ok(())
    }
}
