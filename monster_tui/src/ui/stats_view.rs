//! Full stats tab

use crate::app::App;
use crate::ui::{section_title, stat_line};
use ratatui::{
    layout::Rect,
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn draw(f: &mut Frame, app: &App, area: Rect) {
    let stats = app.snapshot();

    let next_evolution = match stats.next_evolution_level() {
        Some(level) => format!("at level {}", level),
        None => "fully evolved".to_string(),
    };

    let lines = vec![
        section_title("Monster Stats"),
        stat_line("Level", stats.level),
        stat_line("XP", format!("{}/{}", stats.xp, stats.max_xp)),
        stat_line("Energy", stats.energy),
        Line::from(""),
        stat_line("Attack", stats.attack),
        stat_line("Defense", stats.defense),
        stat_line("Speed", stats.speed),
        Line::from(""),
        section_title("Progress"),
        stat_line("Evolution Stage", stats.evolution_stage),
        stat_line("Next evolution", next_evolution),
        stat_line("XP to next level", stats.xp_to_next_level()),
        stat_line("Actions taken", app.actions_taken),
    ];

    let paragraph =
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(" Detailed Stats "));
    f.render_widget(paragraph, area);
}
