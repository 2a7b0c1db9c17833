use ratatui::layout::Rect;

/// Splits the frame into the body and a 3-row footer.
pub fn layout_regions(area: Rect) -> (Rect, Rect) {
    let footer_height = area.height.min(3);
    let footer = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(footer_height),
        width: area.width,
        height: footer_height,
    };
    let body = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: area.height.saturating_sub(footer_height),
    };
    (body, footer)
}

/// First row to show so that `line` stays inside a viewport of `height` rows.
pub fn scroll_offset(line: Option<usize>, height: u16) -> u16 {
    let height = height as usize;
    match line {
        Some(line) if height > 0 && line >= height => (line + 1 - height) as u16,
        _ => 0,
    }
}
