use ratatui::{Frame, layout::Rect, widgets::Clear};

/// Rect of `width` x `height` anchored to the top-right corner of `frame_area`
pub fn top_right_popup(frame_area: Rect, width: u16, height: u16) -> Rect {
    let popup_width = width.min(frame_area.width);
    let popup_height = height.min(frame_area.height);

    Rect {
        x: frame_area.x + frame_area.width.saturating_sub(popup_width),
        y: frame_area.y,
        width: popup_width,
        height: popup_height,
    }
}

/// Rect of `width` centered horizontally within `area`, keeping its height
pub fn centered_horizontally(area: Rect, width: u16) -> Rect {
    let width = width.min(area.width);

    Rect {
        x: area.x + (area.width.saturating_sub(width)) / 2,
        y: area.y,
        width,
        height: area.height,
    }
}

pub fn clear_area(frame: &mut Frame, area: Rect) {
    frame.render_widget(Clear, area);
}

#[cfg(test)]
#[path = "popup_tests.rs"]
mod popup_tests;
