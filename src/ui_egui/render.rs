//! Year renderer: walks the grid layout once per repaint, paints month
//! titles, weekday headers and day numbers, and records the reverse
//! rectangle-to-date lookups consumed by hit-testing.
//!
//! Paint order is fixed: cells are split first, each month draws its title
//! then its day grid, and the transient month-selection overlay goes on
//! top of everything.

use chrono::{Datelike, NaiveDate};
use egui::text::LayoutJob;
use egui::{Galley, Painter, Pos2, Rect, TextFormat, Vec2};
use std::sync::Arc;

use crate::models::config::{BackgroundShape, YearConfig};
use crate::ui_egui::layout::{
    day_anchor, day_number_at, shrink_below_title, split_into_cells, title_anchor_x, MonthCell,
    DAYS_PER_WEEK,
};
use crate::ui_egui::styles::{HighlightPaint, ResolvedStyles, TextPaint};
use crate::utils::date::{
    days_in_month, first_weekday_offset, is_today, is_weekend, weekday_at_column, DateError,
    NameProvider,
};

/// Horizontal offset of the second faux-bold paint pass.
const BOLD_OFFSET: f32 = 0.35;

/// Date strings use this pattern everywhere (records, sticky selection).
pub const DAY_PATTERN: &str = "%Y-%m-%d";

/// Reverse lookup from a drawn day number to its date.
#[derive(Debug, Clone, PartialEq)]
pub struct DayHitRecord {
    pub rect: Rect,
    /// `yyyy-MM-dd`
    pub date: String,
}

/// Everything one repaint derives; consumed by hit-testing for the same
/// repaint generation only.
#[derive(Debug, Clone, Default)]
pub struct RenderOutput {
    pub cells: Vec<MonthCell>,
    pub records: Vec<DayHitRecord>,
}

/// Hit rectangle around a day number drawn center-anchored at `anchor`.
///
/// The half-width divisor is 0.9 for single digits (a wider box, so small
/// numbers stay tappable) and 1.5 for two digits.
pub fn day_hit_rect(anchor: Pos2, text_size: Vec2, day: u32) -> Rect {
    let factor = if day < 10 { 0.9 } else { 1.5 };
    Rect::from_min_max(
        Pos2::new(anchor.x - text_size.x / factor, anchor.y - text_size.y * 1.5),
        Pos2::new(anchor.x + text_size.x / factor, anchor.y + text_size.y / 2.0),
    )
}

/// Render one full year into `bounds` and return the derived cell and
/// hit-record data for this repaint.
#[allow(clippy::too_many_arguments)]
pub fn render_year(
    painter: &Painter,
    bounds: Rect,
    config: &YearConfig,
    styles: &ResolvedStyles,
    names: &dyn NameProvider,
    today: NaiveDate,
    selected_day: &str,
    highlighted_month: Option<usize>,
) -> Result<RenderOutput, DateError> {
    let mut cells = split_into_cells(bounds, config);
    let mut records = Vec::with_capacity(366);

    for index in 0..cells.len() {
        let month = index as u32 + 1;
        draw_month(
            painter,
            &mut cells[index],
            month,
            config,
            styles,
            names,
            today,
            selected_day,
            &mut records,
        )?;
    }

    draw_month_selection(painter, &cells, config, styles, highlighted_month);

    Ok(RenderOutput { cells, records })
}

#[allow(clippy::too_many_arguments)]
fn draw_month(
    painter: &Painter,
    cell: &mut MonthCell,
    month: u32,
    config: &YearConfig,
    styles: &ResolvedStyles,
    names: &dyn NameProvider,
    today: NaiveDate,
    selected_day: &str,
    records: &mut Vec<DayHitRecord>,
) -> Result<(), DateError> {
    let year = config.year;
    let days = days_in_month(year, month)?;
    let offset = first_weekday_offset(year, month, config.first_day_of_week)?;

    draw_month_title(painter, cell, month, config, styles, names, today);

    for row in 0..=DAYS_PER_WEEK {
        for col in 0..DAYS_PER_WEEK {
            let anchor = day_anchor(&cell.rect, col, row);

            if row == 0 {
                draw_day_header(painter, anchor, col, config, styles, names);
                continue;
            }

            let day = day_number_at(col, row, offset);
            if day < 1 || day as u32 > days {
                continue;
            }
            let day = day as u32;
            let weekday = weekday_at_column(col, config.first_day_of_week);
            let weekend = is_weekend(weekday, &config.weekend_days);
            let date = format!("{year:04}-{month:02}-{day:02}");

            // Hit rectangle sized from the plain day text, recorded for
            // every drawn day regardless of its styling.
            let plain = if weekend { &styles.weekend_day } else { &styles.simple_day };
            let text = day.to_string();
            let bounds_galley = measure(painter, &text, plain);
            records.push(DayHitRecord {
                rect: day_hit_rect(anchor, bounds_galley.size(), day),
                date: date.clone(),
            });

            let is_today = is_today(today, year, month, day);
            let is_selected = !selected_day.is_empty() && selected_day == date;
            match day_highlight(styles, is_today, is_selected) {
                Some(highlight) => draw_highlighted_day(painter, anchor, &text, highlight),
                None => paint_text_at(painter, anchor, &text, plain),
            }
            cell.last_day_row_y = anchor.y;
        }
    }
    Ok(())
}

/// Draw the month name and shrink the cell below it so day hit-testing
/// never reaches into the title area.
fn draw_month_title(
    painter: &Painter,
    cell: &mut MonthCell,
    month: u32,
    config: &YearConfig,
    styles: &ResolvedStyles,
    names: &dyn NameProvider,
    today: NaiveDate,
) {
    let paint = if today.year() == config.year && today.month() == month {
        &styles.today_month_name
    } else {
        &styles.month_name
    };

    let title = names.month_name(month);
    let galley = measure(painter, &title, paint);
    let x = title_anchor_x(
        &cell.rect,
        config.title_gravity,
        galley.size().x,
        config.horizontal_spacing,
    );
    let y = cell.rect.top() + galley.size().y;
    let height = galley.size().y;
    paint_galley_at(painter, Pos2::new(x, y), galley, paint);

    shrink_below_title(cell, height, config.margin_below_month_name);
}

fn draw_day_header(
    painter: &Painter,
    anchor: Pos2,
    col: u32,
    config: &YearConfig,
    styles: &ResolvedStyles,
    names: &dyn NameProvider,
) {
    let weekday = weekday_at_column(col, config.first_day_of_week);
    let initial = names.day_initial(weekday);
    let weekend_header =
        is_weekend(weekday, &config.weekend_days) && !config.day_name_transcends_weekend;
    let paint = if weekend_header { &styles.weekend_day } else { &styles.day_name };
    paint_text_at(painter, anchor, &initial, paint);
}

/// Highlight precedence for a drawn day: today > selected > none. The
/// sticky selection never masks the today marker.
fn day_highlight(styles: &ResolvedStyles, is_today: bool, is_selected: bool) -> Option<&HighlightPaint> {
    if is_today {
        Some(&styles.today)
    } else if is_selected {
        Some(&styles.selected_day)
    } else {
        None
    }
}

/// Day number with a circle or square background (today / selected day).
fn draw_highlighted_day(painter: &Painter, anchor: Pos2, text: &str, paint: &HighlightPaint) {
    let galley = measure(painter, text, &paint.text);
    let size = galley.size();

    match paint.shape {
        BackgroundShape::Square => {
            let rect = Rect::from_min_max(
                Pos2::new(anchor.x - size.x / 2.0 - paint.radius, anchor.y - size.y - paint.radius),
                Pos2::new(anchor.x + size.x / 2.0 + paint.radius, anchor.y + paint.radius),
            );
            painter.rect_filled(rect, 0.0, paint.background);
        }
        BackgroundShape::Circle => {
            let center = Pos2::new(anchor.x, anchor.y - size.y / 2.0);
            let radius = size.x.max(size.y) / 2.0 + paint.radius;
            painter.circle_filled(center, radius, paint.background);
        }
    }
    paint_galley_at(painter, anchor, galley, &paint.text);
}

/// Transient month-selection overlay, drawn last so it sits on top. Uses
/// the pre-shrink cell rectangle, expanded by the configured margin and
/// shifted left by one horizontal spacing unit, clipped at the bottom to
/// the lowest drawn day row.
fn draw_month_selection(
    painter: &Painter,
    cells: &[MonthCell],
    config: &YearConfig,
    styles: &ResolvedStyles,
    highlighted_month: Option<usize>,
) {
    let Some(cell) = highlighted_month.and_then(|m| cells.get(m)) else {
        return;
    };
    let r = cell.original;
    let margin = config.month_selection_margin;
    let overlay = Rect::from_min_max(
        Pos2::new(
            r.left() - margin - config.horizontal_spacing,
            r.top() - margin,
        ),
        Pos2::new(
            r.right() + margin - config.horizontal_spacing,
            cell.last_day_row_y + margin,
        ),
    );
    painter.rect_filled(overlay, 0.0, styles.selection_fill);
}

fn measure(painter: &Painter, text: &str, paint: &TextPaint) -> Arc<Galley> {
    let format = TextFormat {
        font_id: paint.font.clone(),
        color: paint.color,
        italics: paint.italics,
        ..Default::default()
    };
    let job = LayoutJob::single_section(text.to_owned(), format);
    painter.fonts(|fonts| fonts.layout_job(job))
}

/// Paint a galley center-anchored horizontally with its baseline near
/// `anchor.y` (the anchor carries the bottom of the text box). Bold is a
/// second pass offset by a fraction of a point.
fn paint_galley_at(painter: &Painter, anchor: Pos2, galley: Arc<Galley>, paint: &TextPaint) {
    let size = galley.size();
    let pos = Pos2::new(anchor.x - size.x / 2.0, anchor.y - size.y);
    if paint.bold {
        painter.galley(pos + egui::vec2(BOLD_OFFSET, 0.0), galley.clone(), paint.color);
    }
    painter.galley(pos, galley, paint.color);
}

fn paint_text_at(painter: &Painter, anchor: Pos2, text: &str, paint: &TextPaint) {
    let galley = measure(painter, text, paint);
    paint_galley_at(painter, anchor, galley, paint);
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::vec2;

    #[test]
    fn test_day_hit_rect_single_digit_is_wider() {
        let anchor = Pos2::new(100.0, 50.0);
        let size = vec2(10.0, 12.0);
        let narrow = day_hit_rect(anchor, size, 21);
        let wide = day_hit_rect(anchor, size, 7);
        assert!(wide.width() > narrow.width());
        assert_eq!(narrow.center().x, anchor.x);
        assert_eq!(wide.center().x, anchor.x);
    }

    #[test]
    fn test_day_hit_rect_contains_anchor() {
        let rect = day_hit_rect(Pos2::new(40.0, 80.0), vec2(12.0, 10.0), 15);
        assert!(rect.contains(Pos2::new(40.0, 80.0)));
        // Extends 1.5 text heights above the baseline and half below.
        assert_eq!(rect.top(), 80.0 - 15.0);
        assert_eq!(rect.bottom(), 80.0 + 5.0);
    }

    #[test]
    fn test_today_outranks_sticky_selection() {
        let styles = ResolvedStyles::resolve(&YearConfig::default());
        assert_eq!(day_highlight(&styles, true, true), Some(&styles.today));
        assert_eq!(day_highlight(&styles, true, false), Some(&styles.today));
        assert_eq!(day_highlight(&styles, false, true), Some(&styles.selected_day));
        assert_eq!(day_highlight(&styles, false, false), None);
    }

    #[test]
    fn test_day_hit_rects_in_one_row_do_not_overlap() {
        // Anchors one grid unit apart with typical text sizes stay disjoint.
        let size = vec2(10.0, 12.0);
        let a = day_hit_rect(Pos2::new(100.0, 50.0), size, 10);
        let b = day_hit_rect(Pos2::new(130.0, 50.0), size, 11);
        assert!(!a.intersects(b));
    }
}
