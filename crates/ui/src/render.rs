use crossterm::style::{style, Color, Stylize};
use extman_domain::{ExtensionFilter, Theme};
use std::fmt::Write;

use crate::state::{ExtensionManager, ManagedRecord, SyncState, ViewPhase};

const NAME_WIDTH: usize = 16;
const DESCRIPTION_WIDTH: usize = 56;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Emit ANSI colors. Off for pipes and tests.
    pub color: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { color: true }
    }
}

struct Palette {
    title: Color,
    text: Color,
    muted: Color,
    active: Color,
    inactive: Color,
    selected: Color,
    alert: Color,
}

impl Palette {
    fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Dark => Self {
                title: Color::White,
                text: Color::Grey,
                muted: Color::DarkGrey,
                active: Color::Red,
                inactive: Color::DarkGrey,
                selected: Color::Red,
                alert: Color::Yellow,
            },
            Theme::Light => Self {
                title: Color::Black,
                text: Color::DarkBlue,
                muted: Color::DarkGrey,
                active: Color::DarkRed,
                inactive: Color::Grey,
                selected: Color::DarkRed,
                alert: Color::DarkYellow,
            },
        }
    }
}

struct Painter {
    palette: Palette,
    color: bool,
}

impl Painter {
    fn paint(&self, text: &str, color: Color) -> String {
        if self.color {
            style(text).with(color).to_string()
        } else {
            text.to_string()
        }
    }
}

/// Renders the whole screen for the manager's current phase.
pub fn render(manager: &ExtensionManager, options: RenderOptions) -> String {
    let painter = Painter {
        palette: Palette::for_theme(manager.theme()),
        color: options.color,
    };

    match manager.phase() {
        ViewPhase::Loading => painter.paint("Loading extensions...", painter.palette.muted),
        ViewPhase::Failed(message) => {
            painter.paint(&format!("Error: {}", message), painter.palette.alert)
        }
        ViewPhase::Ready => render_ready(manager, &painter),
    }
}

fn render_ready(manager: &ExtensionManager, painter: &Painter) -> String {
    let palette = &painter.palette;
    let mut out = String::new();

    let _ = writeln!(
        out,
        "{}  {}",
        painter.paint("Extensions List", palette.title),
        painter.paint(&format!("[theme: {}]", manager.theme()), palette.muted)
    );
    let _ = writeln!(out, "{}", render_filter_bar(manager.filter(), painter));

    if let Some(notice) = manager.notice() {
        let _ = writeln!(out, "{}", painter.paint(&format!("! {}", notice), palette.alert));
    }

    let visible = manager.visible();
    if visible.is_empty() {
        let _ = writeln!(out, "{}", painter.paint("No extensions to show.", palette.muted));
    }
    for record in visible {
        let _ = writeln!(out, "{}", render_row(record, painter));
    }

    let _ = write!(
        out,
        "{}",
        painter.paint(
            &format!(
                "{} extensions loaded, {} active",
                manager.records().len(),
                manager.active_count()
            ),
            palette.muted
        )
    );
    out
}

fn render_filter_bar(current: ExtensionFilter, painter: &Painter) -> String {
    ExtensionFilter::ALL
        .iter()
        .map(|f| {
            let label = capitalize(f.to_str());
            if *f == current {
                painter.paint(&format!("[{}]", label), painter.palette.selected)
            } else {
                painter.paint(&format!(" {} ", label), painter.palette.text)
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn render_row(record: &ManagedRecord, painter: &Painter) -> String {
    let palette = &painter.palette;
    let ext = &record.extension;

    let switch = if ext.is_active {
        painter.paint("(on) ", palette.active)
    } else {
        painter.paint("(off)", palette.inactive)
    };
    let marker = match record.sync {
        SyncState::Confirmed => String::new(),
        SyncState::Pending { .. } => painter.paint(" saving...", palette.muted),
        SyncState::Reverted => painter.paint(" not saved", palette.alert),
    };

    format!(
        "{:>3}  {} {}  {}{}",
        ext.id,
        painter.paint(&pad(&ext.name, NAME_WIDTH), palette.title),
        switch,
        painter.paint(&truncate(&ext.description, DESCRIPTION_WIDTH), palette.text),
        marker
    )
}

fn pad(text: &str, width: usize) -> String {
    format!("{:<width$}", truncate(text, width), width = width)
}

fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let mut cut: String = text.chars().take(width.saturating_sub(3)).collect();
    cut.push_str("...");
    cut
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
