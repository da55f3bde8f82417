use std::{collections::HashMap, time::Duration};

use log::debug;

use super::{
    direction::Direction,
    error::{PacError, Result},
    sprite::{AnimatedSprite, Sprite, Visual},
    unit::Unit,
};

pub const INITIAL_SCORE: i32 = 0;
pub const INITIAL_LIVES: i32 = 3;

/// A player operated unit in the maze.
#[derive(Debug, Clone)]
pub struct Player {
    score: i32,
    lives: i32,
    alive: bool,
    killer: Option<Unit>,
    direction: Direction,
    // one sprite per direction, indexed by `usize::from(Direction)`
    sprites: Vec<Sprite>,
    death_sprite: AnimatedSprite,
}

impl Player {
    /// Fails unless `sprites` holds an entry for every direction.
    pub fn new(
        mut sprites: HashMap<Direction, Sprite>,
        death_animation: AnimatedSprite,
    ) -> Result<Self> {
        let mut ordered = Vec::with_capacity(Direction::count());
        for direction in Direction::iter() {
            match sprites.remove(&direction) {
                Some(sprite) => ordered.push(sprite),
                None => return Err(PacError::MissingSprite(direction)),
            }
        }

        let mut death_sprite = death_animation;
        death_sprite.set_animating(false);

        Ok(Self {
            score: INITIAL_SCORE,
            lives: INITIAL_LIVES,
            alive: true,
            killer: None,
            direction: Direction::default(),
            sprites: ordered,
            death_sprite,
        })
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    /// Reviving clears the killer and stops the death animation but gives no
    /// life back. Dying always costs a life, even with none left.
    pub fn set_alive(&mut self, alive: bool) {
        if alive {
            self.revive();
        } else {
            self.kill();
        }
        self.alive = alive;
    }

    fn revive(&mut self) {
        if !self.alive {
            debug!("player revived with {} lives", self.lives);
        }
        self.death_sprite.set_animating(false);
        self.killer = None;
    }

    fn kill(&mut self) {
        self.lives -= 1;
        self.death_sprite.restart();
        match self.killer {
            Some(killer) => debug!("player killed by {}, {} lives left", killer, self.lives),
            None => debug!("player died, {} lives left", self.lives),
        }
    }

    pub fn killer(&self) -> Option<Unit> {
        self.killer
    }

    pub fn set_killer(&mut self, killer: Unit) {
        self.killer = Some(killer);
    }

    pub fn score(&self) -> i32 {
        self.score
    }

    pub fn lives(&self) -> i32 {
        self.lives
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn set_direction(&mut self, direction: Direction) {
        self.direction = direction;
    }

    pub fn death_sprite(&self) -> &AnimatedSprite {
        &self.death_sprite
    }

    pub fn sprite(&self) -> Visual<'_> {
        if self.alive {
            Visual::Still(&self.sprites[usize::from(self.direction)])
        } else {
            Visual::Animated(&self.death_sprite)
        }
    }

    pub fn add_points(&mut self, points: i32) {
        self.score += points;
    }

    pub fn update(&mut self, elapsed: Duration) {
        self.death_sprite.update(elapsed);
    }
}
