//! Monster tab: evolution art, stat summary, actions and activity log

use crate::app::App;
use crate::ui::{notice_color, progress_bar};
use monster_core::{Action, MonsterSnapshot};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

/// Art per evolution stage
const STAGE_ART: [&str; 4] = [
    "🟩",
    "🟥\n🟩",
    "🟥🟦\n🟩🟨",
    "🟥🟥🟥\n🟦🟦🟦\n🟩🟩🟩",
];

pub fn stage_art(stage: u32) -> &'static str {
    STAGE_ART[(stage as usize).min(STAGE_ART.len() - 1)]
}

pub fn draw(f: &mut Frame, app: &App, area: Rect) {
    let snapshot = app.snapshot();

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(9), // Art + stats
            Constraint::Length(3), // Actions
            Constraint::Min(0),    // Log
        ])
        .split(area);

    let top = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(24), Constraint::Min(30)])
        .split(rows[0]);

    draw_art(f, &snapshot, top[0]);
    draw_summary(f, &snapshot, top[1]);
    draw_actions(f, &snapshot, rows[1]);
    draw_log(f, app, rows[2]);
}

fn draw_art(f: &mut Frame, snapshot: &MonsterSnapshot, area: Rect) {
    let mut lines = vec![Line::from("")];
    lines.extend(stage_art(snapshot.evolution_stage).lines().map(Line::from));

    let paragraph = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" Stage {} ", snapshot.evolution_stage)),
    );
    f.render_widget(paragraph, area);
}

fn draw_summary(f: &mut Frame, snapshot: &MonsterSnapshot, area: Rect) {
    let bar_width = area.width.saturating_sub(24).min(30);

    let energy_color = if snapshot.energy >= Action::Battle.energy_cost() {
        Color::Green
    } else if snapshot.energy >= Action::Train.energy_cost() {
        Color::Yellow
    } else {
        Color::Red
    };

    let lines = vec![
        Line::from(vec![
            Span::styled("Level: ", Style::default().fg(Color::Gray)),
            Span::styled(
                snapshot.level.to_string(),
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::styled(format!("{:8}", "XP:"), Style::default().fg(Color::Gray)),
            Span::styled(
                progress_bar(snapshot.xp as i64, snapshot.max_xp as i64, bar_width),
                Style::default().fg(Color::Magenta),
            ),
            Span::styled(
                format!(" {}/{}", snapshot.xp, snapshot.max_xp),
                Style::default().fg(Color::White),
            ),
        ]),
        Line::from(vec![
            Span::styled(format!("{:8}", "Energy:"), Style::default().fg(Color::Gray)),
            Span::styled(
                progress_bar(snapshot.energy as i64, 100, bar_width),
                Style::default().fg(energy_color),
            ),
            Span::styled(
                format!(" {}", snapshot.energy),
                Style::default().fg(energy_color).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("Attack: ", Style::default().fg(Color::Gray)),
            Span::styled(snapshot.attack.to_string(), Style::default().fg(Color::Red)),
            Span::raw("   "),
            Span::styled("Defense: ", Style::default().fg(Color::Gray)),
            Span::styled(snapshot.defense.to_string(), Style::default().fg(Color::Blue)),
            Span::raw("   "),
            Span::styled("Speed: ", Style::default().fg(Color::Gray)),
            Span::styled(snapshot.speed.to_string(), Style::default().fg(Color::Green)),
        ]),
    ];

    let paragraph =
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(" Stats "));
    f.render_widget(paragraph, area);
}

fn draw_actions(f: &mut Frame, snapshot: &MonsterSnapshot, area: Rect) {
    let mut spans = Vec::new();

    for (i, action) in Action::all().iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("    "));
        }
        let key = match action {
            Action::Train => "t",
            Action::Rest => "r",
            Action::Battle => "b",
        };
        let ready = snapshot.energy >= action.energy_cost();
        let style = if ready {
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        spans.push(Span::styled(format!("[{}] ", key), Style::default().fg(Color::Yellow)));
        spans.push(Span::styled(action.name(), style));
        if action.energy_cost() > 0 {
            spans.push(Span::styled(
                format!(" (-{} energy)", action.energy_cost()),
                Style::default().fg(Color::DarkGray),
            ));
        }
    }

    let paragraph = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title(" Actions "));
    f.render_widget(paragraph, area);
}

fn draw_log(f: &mut Frame, app: &App, area: Rect) {
    let visible = area.height.saturating_sub(2) as usize;
    let end = (app.log_scroll + 1).min(app.log.len());
    let start = end.saturating_sub(visible);

    let items: Vec<ListItem> = app.log[start..end]
        .iter()
        .map(|entry| {
            ListItem::new(Line::from(Span::styled(
                entry.text.clone(),
                Style::default().fg(notice_color(entry.kind)),
            )))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" Activity ({}) ", app.log.len())),
    );
    f.render_widget(list, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_art_grows() {
        assert_eq!(stage_art(0).lines().count(), 1);
        assert_eq!(stage_art(1).lines().count(), 2);
        assert_eq!(stage_art(3).lines().count(), 3);
        assert_eq!(stage_art(7), stage_art(3));
    }
}
