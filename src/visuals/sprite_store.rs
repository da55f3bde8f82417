use std::{collections::HashMap, time::Duration};

use ratatui::style::Color;

use crate::logic::{
    direction::Direction,
    error::Result,
    player::Player,
    sprite::{AnimatedSprite, Sprite},
};

const DEATH_FRAMES: [&str; 8] = ["<", "(", "|", ")", "^", "-", ".", " "];
const PLAYER_COLOR: Color = Color::Yellow;
const DEATH_COLOR: Color = Color::Red;

/// Pac-Man glyphs, mouth open towards the facing direction.
pub fn player_sprites() -> HashMap<Direction, Sprite> {
    Direction::iter()
        .map(|direction| {
            let glyph = match direction {
                Direction::North => "V",
                Direction::South => "^",
                Direction::West => ">",
                Direction::East => "<",
            };
            (direction, Sprite::new(glyph, PLAYER_COLOR))
        })
        .collect()
}

pub fn death_animation(frame_delay: Duration) -> Result<AnimatedSprite> {
    let frames = DEATH_FRAMES
        .iter()
        .map(|glyph| Sprite::new(glyph, DEATH_COLOR))
        .collect();
    AnimatedSprite::new(frames, frame_delay, false)
}

pub fn new_player(frame_delay: Duration) -> Result<Player> {
    Player::new(player_sprites(), death_animation(frame_delay)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::error::PacError;

    #[test]
    fn test_store_builds_a_complete_player() {
        let player = new_player(Duration::from_millis(100)).unwrap();
        assert_eq!(player.sprite().current_frame(), &Sprite::new("<", PLAYER_COLOR));
        assert_eq!(player.death_sprite().frame_count(), DEATH_FRAMES.len());
        assert_eq!(player.death_sprite().current_frame().color, DEATH_COLOR);
    }

    #[test]
    fn test_zero_tick_is_rejected() {
        assert!(matches!(
            new_player(Duration::ZERO),
            Err(PacError::ZeroFrameDelay)
        ));
    }
}
