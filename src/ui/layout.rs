use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Split the frame into header, body, footer.
pub fn layout_regions(area: Rect) -> (Rect, Rect, Rect) {
    let header_height = 3.min(area.height);
    let footer_height = 3.min(area.height.saturating_sub(header_height));
    let header = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: header_height,
    };
    let footer = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(footer_height),
        width: area.width,
        height: footer_height,
    };
    let body = Rect {
        x: area.x,
        y: area.y + header_height,
        width: area.width,
        height: area.height.saturating_sub(header_height + footer_height),
    };
    (header, body, footer)
}

/// Split the body into the three feature columns.
pub fn section_columns(body: Rect) -> (Rect, Rect, Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(33),
            Constraint::Percentage(33),
            Constraint::Percentage(34),
        ])
        .split(body);
    (columns[0], columns[1], columns[2])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn regions_cover_the_area() {
        let area = Rect {
            x: 0,
            y: 0,
            width: 80,
            height: 24,
        };
        let (header, body, footer) = layout_regions(area);
        assert_eq!(header.height + body.height + footer.height, area.height);
        assert_eq!(body.y, header.height);
    }

    #[test]
    fn columns_cover_the_body_width() {
        let body = Rect {
            x: 0,
            y: 3,
            width: 81,
            height: 18,
        };
        let (cake, ice, users) = section_columns(body);
        assert_eq!(cake.width + ice.width + users.width, body.width);
    }
}
