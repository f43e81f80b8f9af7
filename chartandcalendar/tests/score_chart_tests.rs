// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use chartandcalendar::date::{start_of_today, MILLIS_IN_ONE_DAY};
use chartandcalendar::{android_test_color, Color, Score, ScoreChart, RANDOM_DATA_DAYS};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::{Arc, Mutex};

fn daily_scores(count: usize) -> Vec<Score> {
    (0..count)
        .map(|day| Score::new(-(day as i64) * MILLIS_IN_ONE_DAY, day as i32))
        .collect()
}

#[test]
fn configuration_surface_applies_color_and_transparency() -> anyhow::Result<()> {
    // Arrange
    let mut chart = ScoreChart::new();
    let color = android_test_color(1)?;

    // Act
    chart.set_color(color);
    chart.set_is_transparency_enabled(true);

    // Assert
    assert_eq!(chart.color(), color);
    assert!(chart.is_transparency_enabled());
    assert_eq!(chart.background_color(), Color::TRANSPARENT);

    chart.set_is_transparency_enabled(false);
    assert_eq!(chart.background_color(), Color::WHITE);
    Ok(())
}

#[test]
fn random_data_covers_the_last_hundred_days() {
    // Arrange
    let mut chart = ScoreChart::new();
    let mut rng = StdRng::seed_from_u64(7);
    let before = start_of_today();

    // Act
    chart.populate_with_rng(&mut rng);
    let after = start_of_today();

    // Assert
    let scores = chart.scores();
    assert_eq!(scores.len(), RANDOM_DATA_DAYS);
    let newest = scores[0].timestamp_ms();
    assert!(newest == before || newest == after);
    assert!(scores
        .windows(2)
        .all(|pair| pair[0].timestamp_ms() - pair[1].timestamp_ms() == MILLIS_IN_ONE_DAY));
    assert_eq!(chart.chart().max_data_offset(), RANDOM_DATA_DAYS);
}

#[test]
fn random_data_walks_in_bounded_steps() {
    // Arrange
    let mut chart = ScoreChart::new();
    let mut rng = StdRng::seed_from_u64(42);

    // Act
    chart.populate_with_rng(&mut rng);

    // Assert
    let scores = chart.scores();
    assert!(scores
        .iter()
        .all(|score| (0..=Score::MAX_VALUE).contains(&score.value())));
    assert!(scores
        .windows(2)
        .all(|pair| (pair[0].value() - pair[1].value()).abs() <= Score::MAX_VALUE / 10));
}

#[test]
fn populate_with_random_data_fills_the_chart() {
    // Arrange
    let mut chart = ScoreChart::new();

    // Act
    chart.populate_with_random_data();

    // Assert
    assert_eq!(chart.scores().len(), RANDOM_DATA_DAYS);
}

#[test]
fn populating_notifies_the_scroll_controller() {
    // Arrange
    let offsets = Arc::new(Mutex::new(Vec::new()));
    let mut chart = ScoreChart::new();
    let sink = offsets.clone();
    chart.set_scroll_controller(move |offset| sink.lock().unwrap().push(offset));

    // Act
    chart.populate_with_random_data();

    // Assert
    assert_eq!(*offsets.lock().unwrap(), vec![0]);
}

#[test]
fn visible_window_follows_the_data_offset() {
    // Arrange
    let mut chart = ScoreChart::new();
    chart.set_scores(daily_scores(10));
    chart.chart_mut().set_scroller_bucket_size(10);

    // Act
    let initial: Vec<i32> = chart.visible_scores(3).iter().map(Score::value).collect();
    chart.chart_mut().scroll_by(-40.0, 0.0);
    let scrolled: Vec<i32> = chart.visible_scores(3).iter().map(Score::value).collect();
    chart.chart_mut().scroll_by(-1_000.0, 0.0);
    let exhausted = chart.visible_scores(3).len();

    // Assert
    assert_eq!(initial, vec![0, 1, 2]);
    assert_eq!(scrolled, vec![4, 5, 6]);
    assert_eq!(chart.data_offset(), 10);
    assert_eq!(exhausted, 0);
}

#[test]
fn shorter_history_clamps_the_offset() {
    // Arrange
    let mut chart = ScoreChart::new();
    chart.set_scores(daily_scores(50));
    chart.chart_mut().scroll_by(-30.0, 0.0);

    // Act
    chart.set_scores(daily_scores(20));

    // Assert
    assert_eq!(chart.data_offset(), 20);
    assert!(chart.visible_scores(5).is_empty());
}
