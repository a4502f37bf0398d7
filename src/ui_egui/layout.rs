//! Grid layout engine: partitions the widget rectangle into month cells and
//! each cell into a 7-column day grid.
//!
//! Every repaint rebuilds the cells from scratch; nothing here is cached
//! across frames, so a resized surface can never leave stale rectangles
//! behind for hit-testing.

use egui::{Pos2, Rect};

use crate::models::config::{TitleGravity, YearConfig};

/// Columns in a month's day grid.
pub const DAYS_PER_WEEK: u32 = 7;

/// One month's rectangle in surface space.
///
/// `rect` shrinks after the title is drawn so day rows never collide with
/// it; `original` stays frozen at the pre-shrink bounds and is the only
/// rectangle used for month-level hit-testing and the selection overlay.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonthCell {
    /// Month index 0..=11.
    pub index: usize,
    pub rect: Rect,
    pub original: Rect,
    /// Baseline of the lowest drawn day row, set during rendering; bounds
    /// the selection overlay so it hugs the actual day grid.
    pub last_day_row_y: f32,
}

/// Split `bounds` into `rows * columns` month cells (at most 12).
///
/// Interior edges get half the configured spacing, outer vertical edges a
/// full spacing unit. Every left edge additionally carries a horizontal
/// compensation term that offsets the visual bias of center-anchored text:
/// `spacing * columns / 2` when `columns` is odd, otherwise
/// `spacing * columns / rows`.
pub fn split_into_cells(bounds: Rect, config: &YearConfig) -> Vec<MonthCell> {
    let rows = config.rows.max(1);
    let columns = config.columns.max(1);
    let count = config.cell_count();

    let width = bounds.width();
    let height = bounds.height();
    let half_h = config.horizontal_spacing / 2.0;
    let half_v = config.vertical_spacing / 2.0;

    let compensation = if columns % 2 != 0 {
        config.horizontal_spacing * columns as f32 / 2.0
    } else {
        config.horizontal_spacing * columns as f32 / rows as f32
    };

    let mut cells = Vec::with_capacity(count);
    'grid: for i in 0..rows {
        for j in 0..columns {
            if cells.len() == count {
                break 'grid;
            }
            let left_pad = if j == 0 { half_h * 2.0 } else { half_h };
            let right_pad = if j == columns - 1 { half_h * 2.0 } else { half_h };

            let left = bounds.left() + compensation + left_pad + j as f32 * width / columns as f32;
            let top = bounds.top() + half_v + i as f32 * height / rows as f32;
            let right = bounds.left() + (j + 1) as f32 * width / columns as f32 - right_pad;
            let bottom = bounds.top() + (i + 1) as f32 * height / rows as f32 - half_v;

            let rect = Rect::from_min_max(Pos2::new(left, top), Pos2::new(right, bottom));
            cells.push(MonthCell {
                index: cells.len(),
                rect,
                original: rect,
                last_day_row_y: top,
            });
        }
    }
    cells
}

/// Width and height of one day-grid unit inside a month cell.
///
/// The cell is divided into 7 columns and 7 units of height, but the day
/// loop walks 8 logical rows (headers plus up to 6 full weeks) so a
/// 6-week month is never clipped.
pub fn grid_units(rect: &Rect) -> (f32, f32) {
    (
        rect.width() / DAYS_PER_WEEK as f32,
        rect.height() / DAYS_PER_WEEK as f32,
    )
}

/// Anchor point (center-aligned x, baseline y) of grid slot `(col, row)`.
pub fn day_anchor(rect: &Rect, col: u32, row: u32) -> Pos2 {
    let (x_unit, y_unit) = grid_units(rect);
    Pos2::new(
        rect.left() + x_unit * col as f32,
        rect.top() + y_unit * row as f32,
    )
}

/// Day-of-month occupying grid slot `(col, row)` for a month whose first
/// day sits `offset` columns in. Rows are 1-based (row 0 is the header).
/// Values outside `1..=days_in_month` are blank slots.
pub fn day_number_at(col: u32, row: u32, offset: u32) -> i32 {
    (row as i32 - 1) * DAYS_PER_WEEK as i32 + col as i32 + 1 - offset as i32
}

/// Center-anchored x position of a month title under the given gravity.
/// The constant corrections compensate the center-aligned text paint.
pub fn title_anchor_x(rect: &Rect, gravity: TitleGravity, text_width: f32, h_spacing: f32) -> f32 {
    match gravity {
        TitleGravity::Start => rect.left() + text_width / 2.0 - h_spacing / 2.0,
        TitleGravity::Center => (rect.left() + rect.right()) / 2.0 - h_spacing,
        TitleGravity::End => rect.right() - text_width / 2.0 - h_spacing * 2.0,
    }
}

/// Push the cell's top below the drawn title so day rows (and day
/// hit-testing) can never collide with it.
pub fn shrink_below_title(cell: &mut MonthCell, title_height: f32, margin_below: f32) {
    cell.rect.min.y += title_height * 2.0 + margin_below;
}
