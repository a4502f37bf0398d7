//! Year grid configuration model.
//!
//! [`YearConfig`] is the flat, resolved configuration record consumed by the
//! rendering engine. It is immutable per render pass: widget setters replace
//! the whole value and re-resolve styles, never mutate it mid-repaint.
//! The record round-trips through serde so hosts can keep it in a
//! declarative resource file (the demo binary loads it from TOML).

use egui::Color32;
use serde::{Deserialize, Serialize};

use crate::utils::date::MONDAY;

/// Fallback text size in points when a configured size is negative.
pub const DEFAULT_TEXT_SIZE: f32 = 10.0;

/// Font rendering style for a text role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FontStyle {
    #[default]
    Normal,
    Bold,
    Italic,
    BoldItalic,
}

impl FontStyle {
    /// Map a raw attribute index to a style; unknown values fall back to
    /// `Normal` deterministically.
    pub fn from_index(index: i32) -> Self {
        match index {
            1 => FontStyle::Bold,
            2 => FontStyle::Italic,
            3 => FontStyle::BoldItalic,
            _ => FontStyle::Normal,
        }
    }

    pub fn is_bold(self) -> bool {
        matches!(self, FontStyle::Bold | FontStyle::BoldItalic)
    }

    pub fn is_italic(self) -> bool {
        matches!(self, FontStyle::Italic | FontStyle::BoldItalic)
    }
}

/// Background shape drawn behind a highlighted day number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BackgroundShape {
    Circle,
    Square,
}

/// Horizontal alignment of a month title inside its cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TitleGravity {
    Start,
    #[default]
    Center,
    End,
}

impl TitleGravity {
    /// Map a raw attribute index (1 = center, 2 = start, 3 = end) to a
    /// gravity; any other value falls back to `Center`.
    pub fn from_index(index: i32) -> Self {
        match index {
            2 => TitleGravity::Start,
            3 => TitleGravity::End,
            _ => TitleGravity::Center,
        }
    }
}

/// Text styling for one role (month name, day number, header, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextStyle {
    pub color: Color32,
    pub font_style: FontStyle,
    /// Name of an installed egui font family; `None` uses the proportional
    /// default. Hosts are responsible for installing named families.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    /// Text size in points. Negative values resolve to [`DEFAULT_TEXT_SIZE`].
    pub size: f32,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            color: Color32::BLACK,
            font_style: FontStyle::Normal,
            font_family: None,
            size: DEFAULT_TEXT_SIZE,
        }
    }
}

impl TextStyle {
    pub fn with_color(color: Color32) -> Self {
        Self { color, ..Self::default() }
    }
}

/// Text plus background styling for the "today" and "selected day" roles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DayHighlightStyle {
    pub background_color: Color32,
    pub shape: BackgroundShape,
    /// Extra radius/margin in points around the day number.
    pub radius: f32,
    pub text: TextStyle,
}

impl Default for DayHighlightStyle {
    fn default() -> Self {
        Self {
            background_color: Color32::RED,
            shape: BackgroundShape::Circle,
            radius: 5.0,
            text: TextStyle::with_color(Color32::WHITE),
        }
    }
}

/// Complete configuration for one year grid instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct YearConfig {
    /// Calendar year to render.
    pub year: i32,
    /// Grid shape; the engine assumes `rows * columns == 12` and degrades
    /// to drawing only `rows * columns` cells when the contract is broken.
    pub rows: u32,
    pub columns: u32,
    /// Inter-cell spacing in points.
    pub horizontal_spacing: f32,
    pub vertical_spacing: f32,
    /// 1 = Monday .. 7 = Sunday.
    pub first_day_of_week: u32,
    /// Weekdays highlighted as weekend; empty means none.
    pub weekend_days: Vec<u32>,
    pub title_gravity: TitleGravity,
    /// Vertical gap between a month title and its day grid.
    pub margin_below_month_name: f32,
    /// Fill color of the transient month-selection overlay (drawn at half
    /// alpha).
    pub month_selection_color: Color32,
    /// Extra margin around the month-selection overlay rectangle.
    pub month_selection_margin: f32,
    /// When true, the day-name header style also covers weekend headers.
    pub day_name_transcends_weekend: bool,
    /// When true, a tapped day stays highlighted until tapped again.
    pub sticky_day_selection: bool,
    /// Initially selected day as `yyyy-MM-dd`; honored only when
    /// `sticky_day_selection` is set.
    pub initial_selected_day: String,

    pub month_name: TextStyle,
    /// Style of the month title when today falls inside that month.
    pub today_month_name: TextStyle,
    /// Weekday-initial header row.
    pub day_name: TextStyle,
    pub weekend_day: TextStyle,
    pub simple_day: TextStyle,
    pub today: DayHighlightStyle,
    pub selected_day: DayHighlightStyle,
}

impl Default for YearConfig {
    fn default() -> Self {
        Self {
            year: 2018,
            rows: 6,
            columns: 2,
            horizontal_spacing: 5.0,
            vertical_spacing: 5.0,
            first_day_of_week: MONDAY,
            weekend_days: Vec::new(),
            title_gravity: TitleGravity::Center,
            margin_below_month_name: 5.0,
            month_selection_color: Color32::BLUE,
            month_selection_margin: 5.0,
            day_name_transcends_weekend: false,
            sticky_day_selection: false,
            initial_selected_day: String::new(),
            month_name: TextStyle::default(),
            today_month_name: TextStyle::default(),
            day_name: TextStyle::default(),
            weekend_day: TextStyle::default(),
            simple_day: TextStyle::default(),
            today: DayHighlightStyle::default(),
            selected_day: DayHighlightStyle {
                text: TextStyle::with_color(Color32::WHITE),
                background_color: Color32::BLUE,
                shape: BackgroundShape::Square,
                radius: 5.0,
            },
        }
    }
}

impl YearConfig {
    /// Number of month cells the grid will actually produce.
    pub fn cell_count(&self) -> usize {
        ((self.rows * self.columns) as usize).min(12)
    }

    /// Log a warning when the grid shape cannot hold a full year. The
    /// engine still renders `rows * columns` cells without crashing.
    pub fn validate(&self) {
        if self.rows * self.columns != 12 {
            log::warn!(
                "year grid shape {}x{} does not cover 12 months; drawing {} cells",
                self.rows,
                self.columns,
                self.cell_count()
            );
        }
        if !(1..=7).contains(&self.first_day_of_week) {
            log::warn!(
                "first_day_of_week {} outside 1..=7; grid offsets will wrap",
                self.first_day_of_week
            );
        }
    }
}
