use ratatui::layout::Rect;

/// Split `area` into header, body and footer rows (3 lines each for the
/// header and footer when there is room).
pub fn layout_regions(area: Rect) -> (Rect, Rect, Rect) {
    let header_height = area.height.min(3);
    let footer_height = 3.min(area.height.saturating_sub(header_height));
    let header = Rect {
        height: header_height,
        ..area
    };
    let footer = Rect {
        y: area.y + area.height.saturating_sub(footer_height),
        height: footer_height,
        ..area
    };
    let body = Rect {
        y: area.y + header_height,
        height: area.height.saturating_sub(header_height + footer_height),
        ..area
    };
    (header, body, footer)
}

/// A `width` x `height` rectangle centered in `area`, clamped to fit.
pub fn centered_rect_by_size(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
