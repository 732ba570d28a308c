use ratatui::layout::Rect;

/// Height of the now-playing header including its bottom border.
pub const NOW_PLAYING_HEIGHT: u16 = 3;
pub const FOOTER_HEIGHT: u16 = 1;

/// Split the screen into an optional now-playing strip, the settings body,
/// and a one-line footer.
pub fn layout_regions(area: Rect, now_playing: bool) -> (Option<Rect>, Rect, Rect) {
    let header_height = if now_playing {
        NOW_PLAYING_HEIGHT.min(area.height)
    } else {
        0
    };
    let footer_height = FOOTER_HEIGHT.min(area.height.saturating_sub(header_height));
    let header = (header_height > 0).then_some(Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: header_height,
    });
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn regions_cover_full_height() {
        let area = Rect::new(0, 0, 80, 24);
        let (header, body, footer) = layout_regions(area, true);
        let header = header.unwrap();
        assert_eq!(header.height + body.height + footer.height, 24);
        assert_eq!(body.y, header.height);
        assert_eq!(footer.y, 23);
    }

    #[test]
    fn no_header_when_hidden() {
        let (header, body, _) = layout_regions(Rect::new(0, 0, 80, 24), false);
        assert!(header.is_none());
        assert_eq!(body.y, 0);
        assert_eq!(body.height, 23);
    }

    #[test]
    fn tiny_area_does_not_underflow() {
        let (header, body, footer) = layout_regions(Rect::new(0, 0, 10, 2), true);
        assert_eq!(header.map(|h| h.height), Some(2));
        assert_eq!(body.height, 0);
        assert_eq!(footer.height, 0);
    }
}
