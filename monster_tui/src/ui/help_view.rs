//! Help tab view

use crate::app::App;
use crate::ui::section_title;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn draw(f: &mut Frame, _app: &App, area: Rect) {
    let lines = vec![
        section_title("Navigation"),
        key_line("1-3", "Jump to tab (Monster/Full Stats/Help)"),
        key_line("Tab / Shift+Tab", "Next/previous tab"),
        key_line("↑/k  ↓/j", "Scroll activity log"),
        key_line("q / Ctrl+C", "Quit"),
        key_line("?", "Show help"),
        Line::from(""),
        section_title("Actions"),
        key_line("t", "Train: -20 energy, +15-25 XP"),
        key_line("r", "Rest: +20-40 energy (max 100)"),
        key_line("b", "Battle: -30 energy, 50% win for +30-50 XP"),
        key_line("", "a lost battle costs 15 more energy"),
        Line::from(""),
        section_title("Growth"),
        Line::from("  Reaching the XP threshold grants one level:"),
        Line::from("  XP resets, the threshold grows x1.5,"),
        Line::from("  Attack +2-5, Defense +1-4, Speed +1-3"),
        Line::from("  The monster evolves every 5 levels (up to stage 3)"),
        Line::from(""),
        section_title("About"),
        Line::from(Span::styled(
            "  Monster Evolution Game",
            Style::default().fg(Color::Yellow),
        )),
        Line::from(format!("  Version {}", env!("CARGO_PKG_VERSION"))),
    ];

    let paragraph =
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(" Help & About "));

    f.render_widget(paragraph, area);
}

fn key_line(key: &str, desc: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  {:20}", key), Style::default().fg(Color::Yellow)),
        Span::styled(desc.to_string(), Style::default().fg(Color::White)),
    ])
}
