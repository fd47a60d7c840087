//! Tests for app_render

use crate::app::App;
use crate::test_utils::test_helpers::{app_with_input, render_to_string, test_app};

const TEST_WIDTH: u16 = 100;
const TEST_HEIGHT: u16 = 16;

fn render_app(app: &mut App) -> String {
    render_to_string(TEST_WIDTH, TEST_HEIGHT, |f| app.render(f))
}

#[test]
fn test_initial_screen() {
    let mut app = test_app();

    let output = render_app(&mut app);

    assert!(output.contains("Meal Decision Helper"));
    assert!(output.contains("Time of day"));
    assert!(output.contains("Suggest"));
    assert!(output.contains("Reset"));
    assert!(output.contains("Enter: Suggest"));
    assert!(!output.contains(" Suggestion "));
}

#[test]
fn test_suggestion_visible_after_suggest() {
    let mut app = app_with_input("afternoon");
    app.suggest();

    let output = render_app(&mut app);

    assert!(output.contains("Lunch: Grilled chicken sandwich with side salad"));
}

#[test]
fn test_error_notification_rendered() {
    let mut app = test_app();
    app.suggest();

    let output = render_app(&mut app);

    assert!(output.contains("Please enter a time of day"));
}

#[test]
fn test_reset_hides_suggestion() {
    let mut app = app_with_input("dinner");
    app.suggest();
    app.reset();

    let output = render_app(&mut app);

    assert!(!output.contains("Garlic butter shrimp pasta"));
    assert!(output.contains("App reset"));
}
