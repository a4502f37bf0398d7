// Integration tests driving a real (headless) egui pass through the year
// grid: render, hit-record generation, gesture dispatch and the widget.

use chrono::NaiveDate;
use egui::{Pos2, Rect, Vec2};
use pretty_assertions::assert_eq;

use year_grid::ui_egui::hit_test::{dispatch, hit_test, GestureEvent, GestureKind, HitTarget};
use year_grid::ui_egui::render::{render_year, RenderOutput};
use year_grid::ui_egui::selection::SelectionState;
use year_grid::ui_egui::styles::ResolvedStyles;
use year_grid::utils::date::{
    is_weekend, weekday_of, EnglishNames, FixedClock, SATURDAY, SUNDAY, THURSDAY,
};
use year_grid::{YearConfig, YearView};

const SURFACE: Vec2 = Vec2::new(800.0, 1100.0);

/// Run one headless egui pass and capture the render output.
fn render_once(
    config: &YearConfig,
    today: NaiveDate,
    selected_day: &str,
    highlighted_month: Option<usize>,
) -> RenderOutput {
    let ctx = egui::Context::default();
    let bounds = Rect::from_min_size(Pos2::ZERO, SURFACE);
    let input = egui::RawInput {
        screen_rect: Some(bounds),
        ..Default::default()
    };

    let mut captured = None;
    let _ = ctx.run(input, |ctx| {
        let painter = egui::Painter::new(
            ctx.clone(),
            egui::LayerId::new(egui::Order::Background, egui::Id::new("year_grid_test")),
            bounds,
        );
        let styles = ResolvedStyles::resolve(config);
        let output = render_year(
            &painter,
            bounds,
            config,
            &styles,
            &EnglishNames,
            today,
            selected_day,
            highlighted_month,
        )
        .expect("render must succeed for a valid configuration");
        captured = Some(output);
    });
    captured.expect("egui pass ran")
}

fn scenario_config() -> YearConfig {
    YearConfig {
        year: 2024,
        rows: 6,
        columns: 2,
        first_day_of_week: 1, // Monday
        weekend_days: vec![SATURDAY, SUNDAY],
        ..YearConfig::default()
    }
}

fn count_for_month(output: &RenderOutput, prefix: &str) -> usize {
    output
        .records
        .iter()
        .filter(|r| r.date.starts_with(prefix))
        .count()
}

#[test]
fn test_leap_year_2024_renders_366_day_records() {
    let output = render_once(
        &scenario_config(),
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap(),
        "",
        None,
    );
    assert_eq!(output.cells.len(), 12);
    assert_eq!(output.records.len(), 366);
    assert_eq!(count_for_month(&output, "2024-02-"), 29);
    assert_eq!(count_for_month(&output, "2024-01-"), 31);
    assert_eq!(count_for_month(&output, "2024-04-"), 30);
}

#[test]
fn test_feb_2024_spans_five_week_rows_and_feb_29_is_thursday() {
    let output = render_once(
        &scenario_config(),
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap(),
        "",
        None,
    );

    // Feb 1 2024 is a Thursday: offset 3 under Monday-first, 29 days,
    // which fits 5 week rows (no 6th week).
    let mut row_tops: Vec<i64> = output
        .records
        .iter()
        .filter(|r| r.date.starts_with("2024-02-"))
        .map(|r| r.rect.top().round() as i64)
        .collect();
    row_tops.sort_unstable();
    row_tops.dedup();
    assert_eq!(row_tops.len(), 5, "February 2024 must occupy 5 week rows");

    assert!(output.records.iter().any(|r| r.date == "2024-02-29"));
    assert_eq!(weekday_of(2024, 2, 29), Ok(THURSDAY));
    assert!(!is_weekend(THURSDAY, &[SATURDAY, SUNDAY]));
}

#[test]
fn test_every_record_round_trips_through_hit_testing() {
    let output = render_once(
        &scenario_config(),
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap(),
        "",
        None,
    );

    for record in &output.records {
        let hit = hit_test(record.rect.center(), &output.cells, &output.records);
        let expected = NaiveDate::parse_from_str(&record.date, "%Y-%m-%d").unwrap();
        assert_eq!(
            hit,
            Some(HitTarget::Day(expected)),
            "center of {} must resolve to its own date",
            record.date
        );
    }
}

#[test]
fn test_day_hit_never_reports_month() {
    let config = scenario_config();
    let output = render_once(
        &config,
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap(),
        "",
        None,
    );

    let mut state = SelectionState::new();
    for record in &output.records {
        let event = dispatch(
            record.rect.center(),
            GestureKind::Tap,
            &output.cells,
            &output.records,
            &config,
            &mut state,
        );
        assert!(
            matches!(event, Some(GestureEvent::DayClick(_))),
            "point inside day rect of {} must never fire a month callback",
            record.date
        );
        assert_eq!(state.highlighted_month(), None);
    }
}

#[test]
fn test_month_tap_between_days_highlights_month() {
    let config = scenario_config();
    let output = render_once(
        &config,
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap(),
        "",
        None,
    );

    // A point just inside a month cell's top-left corner sits in the
    // title area, above every day record.
    let target = output.cells[4].original.left_top() + Vec2::new(2.0, 2.0);
    let mut state = SelectionState::new();
    let event = dispatch(
        target,
        GestureKind::Tap,
        &output.cells,
        &output.records,
        &config,
        &mut state,
    );

    let expected = NaiveDate::from_ymd_opt(2024, 5, 1)
        .unwrap()
        .and_hms_opt(1, 0, 0)
        .unwrap();
    assert_eq!(event, Some(GestureEvent::MonthClick(expected)));
    assert_eq!(state.highlighted_month(), Some(4));
}

#[test]
fn test_title_area_is_not_day_clickable() {
    let output = render_once(
        &scenario_config(),
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap(),
        "",
        None,
    );

    for cell in &output.cells {
        // The shrunk rect starts below the title; everything between the
        // original top and the shrunk top belongs to the month, not a day.
        assert!(cell.rect.top() > cell.original.top());
        let in_title = Pos2::new(cell.original.center().x, cell.original.top() + 1.0);
        let hit = hit_test(in_title, &output.cells, &output.records);
        assert_eq!(hit, Some(HitTarget::Month(cell.index)));
    }
}

#[test]
fn test_selected_and_highlighted_render_pass() {
    // Rendering with an active sticky selection and month highlight must
    // produce identical derived data (overlay drawing changes pixels, not
    // geometry).
    let plain = render_once(
        &scenario_config(),
        NaiveDate::from_ymd_opt(2024, 2, 29).unwrap(),
        "",
        None,
    );
    let decorated = render_once(
        &scenario_config(),
        NaiveDate::from_ymd_opt(2024, 2, 29).unwrap(),
        "2024-02-14",
        Some(1),
    );
    assert_eq!(plain.records, decorated.records);
    assert_eq!(plain.cells, decorated.cells);
}

#[test]
fn test_undersized_grid_renders_partial_year() {
    let config = YearConfig {
        rows: 2,
        columns: 3,
        ..scenario_config()
    };
    let output = render_once(
        &config,
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap(),
        "",
        None,
    );
    assert_eq!(output.cells.len(), 6);
    // Only January..June records exist.
    assert_eq!(count_for_month(&output, "2024-06-"), 30);
    assert_eq!(count_for_month(&output, "2024-07-"), 0);
}

#[test]
fn test_today_and_selected_on_same_date_render_cleanly() {
    // The conflicting state (the sticky-selected day is also today) must
    // render every day exactly once, same as any other frame.
    let today = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
    let output = render_once(&scenario_config(), today, "2024-02-29", None);
    assert_eq!(output.records.len(), 366);
    assert_eq!(
        output.records.iter().filter(|r| r.date == "2024-02-29").count(),
        1
    );
}

#[test]
fn test_widget_smoke_frame() {
    let config = YearConfig {
        sticky_day_selection: true,
        ..scenario_config()
    };
    let mut view = YearView::new(config)
        .with_clock(FixedClock(NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()));

    let ctx = egui::Context::default();
    let input = egui::RawInput {
        screen_rect: Some(Rect::from_min_size(Pos2::ZERO, SURFACE)),
        ..Default::default()
    };
    let _ = ctx.run(input, |ctx| {
        egui::CentralPanel::default().show(ctx, |ui| {
            let result = view.show(ui);
            assert!(result.event.is_none(), "no input, no gesture event");
        });
    });
    assert_eq!(view.year(), 2024);
}
