use std::{
    fmt,
    sync::atomic::{AtomicU32, Ordering},
};

use super::{
    error::{PacError, Result},
    player::Player,
};

static NEXT_ROSTER: AtomicU32 = AtomicU32::new(0);

/// Stable identity of a player: the roster it belongs to and its seat there.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash)]
pub struct PlayerId {
    roster: u32,
    seat: usize,
}

impl PlayerId {
    pub fn index(&self) -> usize {
        self.seat
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // seats are shown 1-indexed
        write!(f, "Player {}", self.seat + 1)
    }
}

/// The fixed, ordered set of players taking part in a session.
///
/// Ids handed out by one roster are never valid in another.
#[derive(Debug, Clone)]
pub struct Roster {
    id: u32,
    players: Vec<Player>,
}

impl Roster {
    pub fn new(players: Vec<Player>) -> Result<Self> {
        if players.is_empty() {
            return Err(PacError::NoPlayers);
        }
        Ok(Self {
            id: NEXT_ROSTER.fetch_add(1, Ordering::Relaxed),
            players,
        })
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    fn seat(&self, seat: usize) -> PlayerId {
        PlayerId { roster: self.id, seat }
    }

    pub fn contains(&self, id: PlayerId) -> bool {
        id.roster == self.id && id.seat < self.players.len()
    }

    pub fn first_id(&self) -> PlayerId {
        self.seat(0)
    }

    pub fn ids(&self) -> impl Iterator<Item = PlayerId> + '_ {
        (0..self.players.len()).map(|seat| self.seat(seat))
    }

    pub fn get(&self, id: PlayerId) -> Result<&Player> {
        match self.contains(id) {
            true => Ok(&self.players[id.seat]),
            false => Err(PacError::UnknownPlayer(id)),
        }
    }

    pub fn get_mut(&mut self, id: PlayerId) -> Result<&mut Player> {
        match self.contains(id) {
            true => Ok(&mut self.players[id.seat]),
            false => Err(PacError::UnknownPlayer(id)),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &Player)> {
        let roster = self.id;
        self.players
            .iter()
            .enumerate()
            .map(move |(seat, p)| (PlayerId { roster, seat }, p))
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (PlayerId, &mut Player)> {
        let roster = self.id;
        self.players
            .iter_mut()
            .enumerate()
            .map(move |(seat, p)| (PlayerId { roster, seat }, p))
    }

    /// The seat after `id`, wrapping around to the first.
    pub fn next_id(&self, id: PlayerId) -> PlayerId {
        self.seat((id.seat + 1) % self.players.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::player::tests::new_player;

    #[test]
    fn test_empty_roster_is_rejected() {
        assert!(matches!(Roster::new(Vec::new()), Err(PacError::NoPlayers)));
    }

    #[test]
    fn test_ids_are_ordered_seats() {
        let mut roster = Roster::new(vec![new_player(), new_player(), new_player()]).unwrap();
        let ids: Vec<PlayerId> = roster.ids().collect();
        assert_eq!(ids.iter().map(|id| id.index()).collect::<Vec<_>>(), vec![0, 1, 2]);
        assert_eq!(ids[1].to_string(), "Player 2");
        assert_eq!(roster.first_id(), ids[0]);

        roster.get_mut(ids[1]).unwrap().add_points(50);
        assert_eq!(roster.get(ids[1]).unwrap().score(), 50);
        assert_eq!(roster.get(ids[0]).unwrap().score(), 0);

        assert_eq!(roster.next_id(ids[2]), ids[0]);
    }

    #[test]
    fn test_unknown_player() {
        let small = Roster::new(vec![new_player()]).unwrap();
        let big = Roster::new(vec![new_player(), new_player()]).unwrap();
        let outsider = big.ids().last().unwrap();
        assert!(matches!(
            small.get(outsider),
            Err(PacError::UnknownPlayer(id)) if id == outsider
        ));
    }

    #[test]
    fn test_ids_do_not_cross_rosters() {
        let one = Roster::new(vec![new_player(), new_player()]).unwrap();
        let mut other = Roster::new(vec![new_player(), new_player()]).unwrap();

        let seat = one.first_id();
        assert_eq!(seat.index(), other.first_id().index());
        assert_ne!(seat, other.first_id());
        assert!(!other.contains(seat));
        assert!(other.get_mut(seat).is_err());

        // a clone is the same roster
        let copy = one.clone();
        assert!(copy.get(seat).is_ok());
    }
}
