use log::debug;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style, Stylize},
    symbols::border,
    widgets::{block::Title, Block, BorderType, Borders, Paragraph, Widget},
};

use crate::logic::{
    error::{PacError, Result},
    player::Player,
    roster::{PlayerId, Roster},
};

/// Shown in front of the score of a player who is currently dead.
pub const DIED_MARKER: &str = "You died. ";

/// Turns the state of a player into the text of one label.
pub trait PlayerFormatter {
    fn format(&self, player: &Player) -> String;
}

impl<F> PlayerFormatter for F
where
    F: Fn(&Player) -> String,
{
    fn format(&self, player: &Player) -> String {
        self(player)
    }
}

fn format_score(player: &Player) -> String {
    format!("Score: {:3}", player.score())
}

fn format_lives(player: &Player) -> String {
    format!("Lives: {:3}", player.lives())
}

pub const DEFAULT_SCORE_FORMATTER: fn(&Player) -> String = format_score;
pub const DEFAULT_LIVES_FORMATTER: fn(&Player) -> String = format_lives;

struct PlayerLabels {
    id: PlayerId,
    header: String,
    score: String,
    lives: String,
    dead: bool,
}

/// A column per player: the numbered player on top, the score and the
/// remaining lives underneath.
pub struct ScoreDisplay {
    labels: Vec<PlayerLabels>,
    score_formatter: Box<dyn PlayerFormatter>,
}

impl ScoreDisplay {
    pub fn new(roster: &Roster) -> Result<Self> {
        if roster.is_empty() {
            return Err(PacError::NoPlayers);
        }

        let labels = roster
            .ids()
            .map(|id| PlayerLabels {
                id,
                header: id.to_string(),
                score: String::new(),
                lives: String::new(),
                dead: false,
            })
            .collect();

        let mut display = Self {
            labels,
            score_formatter: Box::new(DEFAULT_SCORE_FORMATTER),
        };
        display.refresh(roster)?;
        Ok(display)
    }

    /// Rewrites every label from the current state of its player.
    /// Fails without touching any label if `roster` is not the one the
    /// display was built for.
    pub fn refresh(&mut self, roster: &Roster) -> Result<()> {
        if let Some(labels) = self.labels.iter().find(|l| !roster.contains(l.id)) {
            return Err(PacError::UnknownPlayer(labels.id));
        }
        self.refresh_scores(roster)?;
        self.refresh_lives(roster)
    }

    fn refresh_scores(&mut self, roster: &Roster) -> Result<()> {
        for labels in self.labels.iter_mut() {
            let player = roster.get(labels.id)?;

            let mut score = String::from(if player.is_alive() { "" } else { DIED_MARKER });
            score.push_str(&self.score_formatter.format(player));

            labels.score = score;
            labels.dead = !player.is_alive();
        }
        Ok(())
    }

    fn refresh_lives(&mut self, roster: &Roster) -> Result<()> {
        for labels in self.labels.iter_mut() {
            labels.lives = DEFAULT_LIVES_FORMATTER(roster.get(labels.id)?);
        }
        Ok(())
    }

    /// Takes effect on the next refresh. Lives keep their fixed format.
    pub fn set_score_formatter(&mut self, formatter: impl PlayerFormatter + 'static) {
        debug!("score formatter replaced");
        self.score_formatter = Box::new(formatter);
    }

    pub fn headers(&self) -> Vec<&str> {
        self.labels.iter().map(|l| l.header.as_str()).collect()
    }

    pub fn score_text(&self, id: PlayerId) -> Option<&str> {
        self.find(id).map(|l| l.score.as_str())
    }

    pub fn lives_text(&self, id: PlayerId) -> Option<&str> {
        self.find(id).map(|l| l.lives.as_str())
    }

    fn find(&self, id: PlayerId) -> Option<&PlayerLabels> {
        self.labels.iter().find(|l| l.id == id)
    }
}

impl Widget for &ScoreDisplay {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title = Title::from(" Scores ".bold());

        let block = Block::default()
            .title(title.alignment(Alignment::Center))
            .borders(Borders::ALL)
            .border_set(border::THICK)
            .border_type(BorderType::Rounded);

        let inner = block.inner(area);
        block.render(area, buf);

        let row_rects = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1); 3])
            .split(inner);

        let columns = self.labels.len() as u32;
        let col_constraints = std::iter::repeat(Constraint::Ratio(1, columns))
            .take(self.labels.len())
            .collect::<Vec<_>>();

        let split_row = |row: Rect| {
            Layout::default()
                .direction(Direction::Horizontal)
                .constraints(col_constraints.clone())
                .split(row)
        };

        let headers = split_row(row_rects[0]);
        let scores = split_row(row_rects[1]);
        let lives = split_row(row_rects[2]);

        for (i, labels) in self.labels.iter().enumerate() {
            let score_style = match labels.dead {
                true => Style::default().fg(Color::Red),
                false => Style::default(),
            };

            Paragraph::new(labels.header.as_str().bold())
                .centered()
                .render(headers[i], buf);
            Paragraph::new(labels.score.as_str())
                .style(score_style)
                .centered()
                .render(scores[i], buf);
            Paragraph::new(labels.lives.as_str())
                .centered()
                .render(lives[i], buf);
        }
    }
}
