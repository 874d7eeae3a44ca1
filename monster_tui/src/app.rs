//! Application state

use monster_core::{
    Action, BattleResult, LevelUp, Monster, MonsterError, MonsterSnapshot, RandomSource,
};
use std::collections::VecDeque;

/// Oldest entries are dropped past this many
pub const MAX_LOG_ENTRIES: usize = 200;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Monster,
    Stats,
    Help,
}

impl Tab {
    pub fn all() -> &'static [Tab] {
        &[Tab::Monster, Tab::Stats, Tab::Help]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Tab::Monster => "Monster",
            Tab::Stats => "Full Stats",
            Tab::Help => "Help",
        }
    }
}

/// How a message should be presented
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Warning,
    LevelUp,
}

/// Modal message shown until the player presses a key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: String,
    pub message: String,
}

impl Notice {
    fn new(kind: NoticeKind, title: &str, message: String) -> Self {
        Notice {
            kind,
            title: title.to_string(),
            message,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub kind: NoticeKind,
    pub text: String,
}

pub struct App {
    pub current_tab: Tab,
    pub monster: Monster<Box<dyn RandomSource>>,
    pub log: Vec<LogEntry>,
    pub log_scroll: usize,
    /// Pending notices, front is displayed
    pub notices: VecDeque<Notice>,
    pub actions_taken: u32,
}

impl App {
    pub fn new(monster: Monster<Box<dyn RandomSource>>) -> Self {
        App {
            current_tab: Tab::Monster,
            monster,
            log: vec![LogEntry {
                kind: NoticeKind::Info,
                text: "A wild monster hatched. Train it!".to_string(),
            }],
            log_scroll: 0,
            notices: VecDeque::new(),
            actions_taken: 0,
        }
    }

    /// Fresh monster rolling with the given source
    pub fn with_source(source: impl RandomSource + 'static) -> Self {
        let source: Box<dyn RandomSource> = Box::new(source);
        Self::new(Monster::new(source))
    }

    pub fn snapshot(&self) -> MonsterSnapshot {
        self.monster.snapshot()
    }

    pub fn next_tab(&mut self) {
        let tabs = Tab::all();
        let current_idx = tabs.iter().position(|t| *t == self.current_tab).unwrap_or(0);
        let next_idx = (current_idx + 1) % tabs.len();
        self.current_tab = tabs[next_idx];
    }

    pub fn prev_tab(&mut self) {
        let tabs = Tab::all();
        let current_idx = tabs.iter().position(|t| *t == self.current_tab).unwrap_or(0);
        let prev_idx = if current_idx == 0 {
            tabs.len() - 1
        } else {
            current_idx - 1
        };
        self.current_tab = tabs[prev_idx];
    }

    pub fn set_tab(&mut self, index: usize) {
        let tabs = Tab::all();
        if index < tabs.len() {
            self.current_tab = tabs[index];
        }
    }

    pub fn on_up(&mut self) {
        if self.current_tab == Tab::Monster && self.log_scroll > 0 {
            self.log_scroll -= 1;
        }
    }

    pub fn on_down(&mut self) {
        if self.current_tab == Tab::Monster && self.log_scroll < self.log.len().saturating_sub(1) {
            self.log_scroll += 1;
        }
    }

    pub fn current_notice(&self) -> Option<&Notice> {
        self.notices.front()
    }

    pub fn has_notice(&self) -> bool {
        !self.notices.is_empty()
    }

    pub fn dismiss_notice(&mut self) {
        self.notices.pop_front();
    }

    pub fn perform(&mut self, action: Action) {
        match action {
            Action::Train => self.train(),
            Action::Rest => self.rest(),
            Action::Battle => self.battle(),
        }
    }

    pub fn train(&mut self) {
        match self.monster.train() {
            Ok(outcome) => {
                self.actions_taken += 1;
                tracing::info!(gained_xp = outcome.gained_xp, "train");
                // Level-up is reported before the training result
                if let Some(level_up) = outcome.level_up {
                    self.announce_level_up(&level_up);
                }
                self.notify(
                    NoticeKind::Info,
                    "Training",
                    format!("You gained {} XP!", outcome.gained_xp),
                );
            }
            Err(err) => self.refuse(err),
        }
    }

    pub fn rest(&mut self) {
        let outcome = self.monster.rest();
        self.actions_taken += 1;
        tracing::info!(recovered = outcome.recovered, "rest");
        self.notify(
            NoticeKind::Info,
            "Resting",
            format!("You recovered {} energy!", outcome.recovered),
        );
    }

    pub fn battle(&mut self) {
        match self.monster.battle() {
            Ok(outcome) => {
                self.actions_taken += 1;
                tracing::info!(won = outcome.won(), gained_xp = ?outcome.gained_xp(), "battle");
                let message = match outcome.result {
                    BattleResult::Won { gained_xp } => {
                        format!("You won and gained {} XP!", gained_xp)
                    }
                    BattleResult::Lost => "You lost the battle!".to_string(),
                };
                // Battle result is reported before the level-up it caused
                self.notify(NoticeKind::Info, "Battle", message);
                if let Some(level_up) = outcome.level_up {
                    self.announce_level_up(&level_up);
                }
            }
            Err(err) => self.refuse(err),
        }
    }

    fn announce_level_up(&mut self, level_up: &LevelUp) {
        tracing::info!(
            new_level = level_up.new_level,
            attack_gain = level_up.attack_gain,
            defense_gain = level_up.defense_gain,
            speed_gain = level_up.speed_gain,
            "level up"
        );
        self.notify(
            NoticeKind::LevelUp,
            "Level Up!",
            format!("Congratulations! You reached level {}!", level_up.new_level),
        );
        self.push_log(NoticeKind::LevelUp, level_up.summary());
    }

    fn refuse(&mut self, err: MonsterError) {
        tracing::warn!(%err, "action refused");
        let action = err.action();
        self.notify(
            NoticeKind::Warning,
            "Low Energy",
            format!("Not enough energy to {}!", action),
        );
    }

    fn notify(&mut self, kind: NoticeKind, title: &str, message: String) {
        self.push_log(kind, format!("{}: {}", title, message));
        self.notices.push_back(Notice::new(kind, title, message));
    }

    fn push_log(&mut self, kind: NoticeKind, text: String) {
        self.log.push(LogEntry { kind, text });
        if self.log.len() > MAX_LOG_ENTRIES {
            let excess = self.log.len() - MAX_LOG_ENTRIES;
            self.log.drain(..excess);
        }
        // Follow the newest entry
        self.log_scroll = self.log.len().saturating_sub(1);
    }
}
