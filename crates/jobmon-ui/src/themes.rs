use ratatui::style::{Color, Modifier, Style};

use jobmon_core::models::AlertLevel;

/// Terminal background type detection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BackgroundType {
    Dark,
    Light,
    Unknown,
}

/// Detect terminal background type from the `COLORFGBG` environment variable.
///
/// The variable has the format `"foreground;background"`.  Background values
/// 0–6 are considered dark; 7–15 are considered light.  If the variable is
/// absent or unparseable, `BackgroundType::Dark` is returned as the safe
/// default.
pub fn detect_background() -> BackgroundType {
    if let Ok(val) = std::env::var("COLORFGBG") {
        if let Some(bg) = val.split(';').next_back() {
            if let Ok(bg_num) = bg.parse::<u8>() {
                return if bg_num <= 6 {
                    BackgroundType::Dark
                } else {
                    BackgroundType::Light
                };
            }
        }
    }
    BackgroundType::Dark
}

/// Complete theme definition carrying all UI styles used by jobmon-ui
/// components.
#[derive(Debug, Clone)]
pub struct Theme {
    // ── Header ───────────────────────────────────────────────────────────────
    pub header: Style,
    pub separator: Style,

    // ── Text ─────────────────────────────────────────────────────────────────
    pub text: Style,
    pub dim: Style,
    pub bold: Style,
    pub label: Style,
    pub value: Style,

    // ── Status ───────────────────────────────────────────────────────────────
    pub info: Style,
    pub success: Style,
    pub warning: Style,
    pub error: Style,

    // ── Alert levels ─────────────────────────────────────────────────────────
    pub alert_ok: Style,
    pub alert_warning: Style,
    pub alert_error: Style,

    // ── Distribution bars ────────────────────────────────────────────────────
    /// Filled portion of the OK bar.
    pub bar_ok: Style,
    /// Filled portion of the WARNING bar.
    pub bar_warning: Style,
    /// Filled portion of the ERROR bar.
    pub bar_error: Style,
    /// Unfilled portion of any bar.
    pub bar_empty: Style,

    // ── Table ────────────────────────────────────────────────────────────────
    pub table_header: Style,
    pub table_border: Style,
    pub table_row: Style,
    pub table_row_alt: Style,
}

impl Theme {
    // ── Constructors ─────────────────────────────────────────────────────────

    /// Dark-background terminal theme (default).
    pub fn dark() -> Self {
        Self {
            header: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            separator: Style::default().fg(Color::DarkGray),

            text: Style::default().fg(Color::White),
            dim: Style::default().fg(Color::DarkGray),
            bold: Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
            label: Style::default().fg(Color::Gray),
            value: Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),

            info: Style::default().fg(Color::Cyan),
            success: Style::default().fg(Color::Green),
            warning: Style::default().fg(Color::Yellow),
            error: Style::default().fg(Color::Red),

            alert_ok: Style::default().fg(Color::Green),
            alert_warning: Style::default().fg(Color::Yellow),
            alert_error: Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),

            bar_ok: Style::default().fg(Color::Green),
            bar_warning: Style::default().fg(Color::Yellow),
            bar_error: Style::default().fg(Color::Red),
            bar_empty: Style::default().fg(Color::DarkGray),

            table_header: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            table_border: Style::default().fg(Color::DarkGray),
            table_row: Style::default().fg(Color::White),
            table_row_alt: Style::default().fg(Color::Gray),
        }
    }

    /// Light-background terminal theme.
    ///
    /// Uses dark colours for text and bright accent colours so that content
    /// remains legible against a white/light-grey terminal canvas.
    pub fn light() -> Self {
        Self {
            header: Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::BOLD),
            separator: Style::default().fg(Color::Gray),

            text: Style::default().fg(Color::Black),
            dim: Style::default().fg(Color::Gray),
            bold: Style::default()
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
            label: Style::default().fg(Color::DarkGray),
            value: Style::default()
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),

            info: Style::default().fg(Color::Blue),
            success: Style::default().fg(Color::Green),
            warning: Style::default().fg(Color::Yellow),
            error: Style::default().fg(Color::Red),

            alert_ok: Style::default().fg(Color::Green),
            alert_warning: Style::default().fg(Color::Yellow),
            alert_error: Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),

            bar_ok: Style::default().fg(Color::Green),
            bar_warning: Style::default().fg(Color::Yellow),
            bar_error: Style::default().fg(Color::Red),
            bar_empty: Style::default().fg(Color::Gray),

            table_header: Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::BOLD),
            table_border: Style::default().fg(Color::Gray),
            table_row: Style::default().fg(Color::Black),
            table_row_alt: Style::default().fg(Color::DarkGray),
        }
    }

    /// Classic terminal theme using only the basic 8-colour ANSI palette.
    ///
    /// Avoids bold modifiers to maintain a retro aesthetic and maximise
    /// compatibility with minimal terminal emulators.
    pub fn classic() -> Self {
        Self {
            header: Style::default().fg(Color::Cyan),
            separator: Style::default().fg(Color::DarkGray),

            text: Style::default().fg(Color::White),
            dim: Style::default().fg(Color::DarkGray),
            bold: Style::default().fg(Color::White),
            label: Style::default().fg(Color::Gray),
            value: Style::default().fg(Color::White),

            info: Style::default().fg(Color::Cyan),
            success: Style::default().fg(Color::Green),
            warning: Style::default().fg(Color::Yellow),
            error: Style::default().fg(Color::Red),

            alert_ok: Style::default().fg(Color::Green),
            alert_warning: Style::default().fg(Color::Yellow),
            alert_error: Style::default().fg(Color::Red),

            bar_ok: Style::default().fg(Color::Green),
            bar_warning: Style::default().fg(Color::Yellow),
            bar_error: Style::default().fg(Color::Red),
            bar_empty: Style::default().fg(Color::DarkGray),

            table_header: Style::default().fg(Color::Cyan),
            table_border: Style::default().fg(Color::DarkGray),
            table_row: Style::default().fg(Color::White),
            table_row_alt: Style::default().fg(Color::Gray),
        }
    }

    /// Choose a theme automatically based on the detected terminal background.
    pub fn auto_detect() -> Self {
        match detect_background() {
            BackgroundType::Light => Self::light(),
            _ => Self::dark(),
        }
    }

    /// Construct a theme by name.  Falls back to `auto_detect` for `"auto"`
    /// and unknown names.
    pub fn from_name(name: &str) -> Self {
        match name {
            "light" => Self::light(),
            "dark" => Self::dark(),
            "classic" => Self::classic(),
            _ => Self::auto_detect(),
        }
    }

    // ── Style helpers ────────────────────────────────────────────────────────

    /// Return the style for a job's alert level.
    pub fn alert_style(&self, level: AlertLevel) -> Style {
        match level {
            AlertLevel::Ok => self.alert_ok,
            AlertLevel::Warning => self.alert_warning,
            AlertLevel::Error => self.alert_error,
        }
    }

    /// Return the style for a job's completion status.
    pub fn status_style(&self, complete: bool) -> Style {
        if complete {
            self.success
        } else {
            self.dim
        }
    }

    /// Return the bar fill style for an alert level in the distribution panel.
    pub fn bar_style(&self, level: AlertLevel) -> Style {
        match level {
            AlertLevel::Ok => self.bar_ok,
            AlertLevel::Warning => self.bar_warning,
            AlertLevel::Error => self.bar_error,
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
