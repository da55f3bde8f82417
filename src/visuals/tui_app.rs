use std::time::{Duration, Instant};

use crossterm::event::{self, KeyCode, KeyEventKind};
use log::{debug, info};
use rand::seq::SliceRandom;
use ratatui::{
    layout::{Alignment, Constraint, Direction as LayoutDirection, Layout, Rect},
    style::{Color, Modifier, Style, Stylize},
    symbols::border,
    text::{Line, Span, Text},
    widgets::{
        block::{Position, Title},
        Block, BorderType, Borders, Paragraph,
    },
    Frame,
};

use crate::logic::{
    direction::Direction,
    error::Result,
    player::Player,
    roster::{PlayerId, Roster},
    unit::{Ghost, Unit},
};

use super::score_display::ScoreDisplay;

const PELLET_POINTS: i32 = 10;
const SCORE_PANEL_HEIGHT: u16 = 5;

#[derive(typed_builder::TypedBuilder)]
pub struct TuiApp {
    roster: Roster,
    score_display: ScoreDisplay,
    active: PlayerId,
    tick: Duration,
    exit: bool,
}

impl TuiApp {
    pub fn run(&mut self, terminal: &mut super::tui::Tui) -> Result<()> {
        info!("session started with {} players", self.roster.len());

        let mut last_tick = Instant::now();
        while !self.exit {
            self.score_display.refresh(&self.roster)?;
            terminal.draw(|frame| self.render_frame(frame))?;

            let timeout = self.tick.saturating_sub(last_tick.elapsed());
            if event::poll(timeout)? {
                self.handle_events()?;
            }

            let elapsed = last_tick.elapsed();
            if elapsed >= self.tick {
                for (_, player) in self.roster.iter_mut() {
                    player.update(elapsed);
                }
                last_tick = Instant::now();
            }
        }

        info!("session ended");
        Ok(())
    }

    fn handle_events(&mut self) -> Result<()> {
        if let event::Event::Key(event) = event::read()? {
            if event.kind == KeyEventKind::Press {
                self.handle_key(event.code)?;
            }
        }
        Ok(())
    }

    // Stands in for the movement, scoring and collision collaborators.
    fn handle_key(&mut self, code: KeyCode) -> Result<()> {
        match code {
            KeyCode::Char('q') => self.exit = true,
            KeyCode::Tab => {
                self.active = self.roster.next_id(self.active);
                debug!("{} selected", self.active);
            }
            KeyCode::Up => self.active_player()?.set_direction(Direction::North),
            KeyCode::Down => self.active_player()?.set_direction(Direction::South),
            KeyCode::Left => self.active_player()?.set_direction(Direction::West),
            KeyCode::Right => self.active_player()?.set_direction(Direction::East),
            KeyCode::Char(' ') => {
                let player = self.active_player()?;
                if player.is_alive() {
                    player.add_points(PELLET_POINTS);
                }
            }
            KeyCode::Char('g') => {
                let ghost = *Ghost::ALL
                    .choose(&mut rand::thread_rng())
                    .unwrap_or(&Ghost::Blinky);
                let player = self.active_player()?;
                if player.is_alive() {
                    player.set_killer(Unit::Ghost(ghost));
                    player.set_alive(false);
                }
            }
            KeyCode::Char('x') => {
                let other = self.roster.next_id(self.active);
                if other == self.active {
                    return Ok(());
                }
                let player = self.active_player()?;
                if player.is_alive() {
                    player.set_killer(Unit::Player(other));
                    player.set_alive(false);
                }
            }
            KeyCode::Char('d') => {
                let player = self.active_player()?;
                if player.is_alive() {
                    player.set_alive(false);
                }
            }
            KeyCode::Char('r') => self.active_player()?.set_alive(true),
            _ => {}
        }
        Ok(())
    }

    fn active_player(&mut self) -> Result<&mut Player> {
        self.roster.get_mut(self.active)
    }

    fn render_frame(&self, frame: &mut Frame) {
        let rects = Layout::default()
            .direction(LayoutDirection::Vertical)
            .constraints([Constraint::Min(3), Constraint::Length(SCORE_PANEL_HEIGHT)])
            .split(frame.size());

        self.render_players(rects[0], frame);
        frame.render_widget(&self.score_display, rects[1]);
    }

    fn render_players(&self, area: Rect, frame: &mut Frame) {
        let title = Title::from(" pacTUI ".bold());

        let block = Block::default()
            .title(title.alignment(Alignment::Center))
            .title(
                Title::from(" Tab arrows Space g x d r q ")
                    .alignment(Alignment::Center)
                    .position(Position::Bottom),
            )
            .borders(Borders::ALL)
            .border_set(border::THICK)
            .border_type(BorderType::Rounded);

        let lines = self
            .roster
            .iter()
            .map(|(id, player)| self.player_line(id, player))
            .collect::<Vec<_>>();

        frame.render_widget(Paragraph::new(Text::from(lines)).centered().block(block), area);
    }

    fn player_line(&self, id: PlayerId, player: &Player) -> Line<'static> {
        let sprite = player.sprite().current_frame();
        let glyph_style = Style::default().fg(sprite.color).bg(Color::Black);

        let status = match (player.is_alive(), player.killer()) {
            (true, _) => format!("facing {}", player.direction()),
            (false, Some(killer)) => format!("caught by {}", killer),
            (false, None) => "died".to_string(),
        };

        let name_style = match id == self.active {
            true => Style::default().add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            false => Style::default(),
        };

        Line::from(vec![
            Span::styled(id.to_string(), name_style),
            "  ".into(),
            Span::styled(sprite.glyph.clone(), glyph_style),
            "  ".into(),
            status.into(),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::visuals::sprite_store;

    fn new_app(players: usize) -> TuiApp {
        let players = (0..players)
            .map(|_| sprite_store::new_player(Duration::from_millis(100)).unwrap())
            .collect();
        let roster = Roster::new(players).unwrap();
        let score_display = ScoreDisplay::new(&roster).unwrap();
        let active = roster.first_id();

        TuiApp::builder()
            .roster(roster)
            .score_display(score_display)
            .active(active)
            .tick(Duration::from_millis(100))
            .exit(false)
            .build()
    }

    #[test]
    fn test_keys_drive_the_active_player() {
        let mut app = new_app(2);
        let first = app.active;

        app.handle_key(KeyCode::Char(' ')).unwrap();
        app.handle_key(KeyCode::Up).unwrap();
        let player = app.roster.get(first).unwrap();
        assert_eq!(player.score(), PELLET_POINTS);
        assert_eq!(player.direction(), Direction::North);

        app.handle_key(KeyCode::Char('g')).unwrap();
        let player = app.roster.get(first).unwrap();
        assert!(!player.is_alive());
        assert_eq!(player.lives(), 2);
        assert!(matches!(player.killer(), Some(Unit::Ghost(_))));

        // no points and no second death while dead
        app.handle_key(KeyCode::Char(' ')).unwrap();
        app.handle_key(KeyCode::Char('d')).unwrap();
        let player = app.roster.get(first).unwrap();
        assert_eq!(player.score(), PELLET_POINTS);
        assert_eq!(player.lives(), 2);

        app.handle_key(KeyCode::Char('r')).unwrap();
        let player = app.roster.get(first).unwrap();
        assert!(player.is_alive());
        assert_eq!(player.killer(), None);
    }

    #[test]
    fn test_tab_cycles_players() {
        let mut app = new_app(2);
        let first = app.active;

        app.handle_key(KeyCode::Tab).unwrap();
        assert_ne!(app.active, first);
        app.handle_key(KeyCode::Char('d')).unwrap();
        assert!(app.roster.get(first).unwrap().is_alive());
        assert_eq!(app.roster.get(app.active).unwrap().killer(), None);

        app.handle_key(KeyCode::Tab).unwrap();
        assert_eq!(app.active, first);
    }

    #[test]
    fn test_collision_with_another_player() {
        let mut app = new_app(2);
        let first = app.active;
        let second = app.roster.next_id(first);

        app.handle_key(KeyCode::Char('x')).unwrap();
        let player = app.roster.get(first).unwrap();
        assert!(!player.is_alive());
        assert_eq!(player.killer(), Some(Unit::Player(second)));
        assert_eq!(player.lives(), 2);
        assert!(app.roster.get(second).unwrap().is_alive());

        // nobody to collide with
        let mut app = new_app(1);
        app.handle_key(KeyCode::Char('x')).unwrap();
        assert!(app.roster.get(app.active).unwrap().is_alive());
    }

    #[test]
    fn test_quit() {
        let mut app = new_app(1);
        app.handle_key(KeyCode::Char('q')).unwrap();
        assert!(app.exit);
    }
}
