//! Style resolution: maps the flat [`YearConfig`] style records into
//! ready-to-paint egui values.
//!
//! Resolution is a pure function of the configuration. The widget replaces
//! the whole [`ResolvedStyles`] value whenever the configuration changes;
//! resolved values never survive a configuration swap.

use egui::{Color32, FontFamily, FontId};

use crate::models::config::{
    BackgroundShape, DayHighlightStyle, TextStyle, YearConfig, DEFAULT_TEXT_SIZE,
};

/// Alpha applied to the month-selection overlay fill.
const SELECTION_ALPHA: u8 = (255 / 2) as u8;

/// A resolved text role: font, color and the faux bold/italic flags the
/// renderer applies at paint time (egui's default fonts carry no weight
/// variants, so bold is painted as a second offset pass and italic through
/// `TextFormat::italics`).
#[derive(Debug, Clone, PartialEq)]
pub struct TextPaint {
    pub color: Color32,
    pub font: FontId,
    pub bold: bool,
    pub italics: bool,
}

/// A resolved day-highlight role: text plus background shape.
#[derive(Debug, Clone, PartialEq)]
pub struct HighlightPaint {
    pub text: TextPaint,
    pub background: Color32,
    pub shape: BackgroundShape,
    pub radius: f32,
}

/// All paint-ready styles for one configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedStyles {
    pub month_name: TextPaint,
    pub today_month_name: TextPaint,
    pub day_name: TextPaint,
    pub weekend_day: TextPaint,
    pub simple_day: TextPaint,
    pub today: HighlightPaint,
    pub selected_day: HighlightPaint,
    /// Half-alpha fill of the transient month-selection rectangle.
    pub selection_fill: Color32,
}

impl ResolvedStyles {
    pub fn resolve(config: &YearConfig) -> Self {
        Self {
            month_name: resolve_text(&config.month_name),
            today_month_name: resolve_text(&config.today_month_name),
            day_name: resolve_text(&config.day_name),
            weekend_day: resolve_text(&config.weekend_day),
            simple_day: resolve_text(&config.simple_day),
            today: resolve_highlight(&config.today),
            selected_day: resolve_highlight(&config.selected_day),
            selection_fill: with_alpha(config.month_selection_color, SELECTION_ALPHA),
        }
    }
}

fn resolve_text(style: &TextStyle) -> TextPaint {
    let size = if style.size < 0.0 { DEFAULT_TEXT_SIZE } else { style.size };
    let family = match &style.font_family {
        Some(name) => FontFamily::Name(name.as_str().into()),
        None => FontFamily::Proportional,
    };
    TextPaint {
        color: style.color,
        font: FontId::new(size, family),
        bold: style.font_style.is_bold(),
        italics: style.font_style.is_italic(),
    }
}

fn resolve_highlight(style: &DayHighlightStyle) -> HighlightPaint {
    HighlightPaint {
        text: resolve_text(&style.text),
        background: style.background_color,
        shape: style.shape,
        radius: style.radius,
    }
}

fn with_alpha(color: Color32, alpha: u8) -> Color32 {
    Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), alpha)
}
