mod core;
mod group;

pub use self::core::*;
pub use group::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_edges() {
        let r = Rect::new(10.0, 20.0, 300.0, 100.0);
        assert_eq!(r.left(), 10.0);
        assert_eq!(r.top(), 20.0);
        assert_eq!(r.right(), 310.0);
        assert_eq!(r.bottom(), 120.0);
    }

    #[test]
    fn rect_from_edges() {
        let r = Rect::from_edges(0.0, 1040.0, 1920.0, 1080.0);
        assert_eq!(r, Rect::new(0.0, 1040.0, 1920.0, 40.0));
    }

    #[test]
    fn rect_from_inverted_edges_is_empty() {
        let r = Rect::from_edges(100.0, 100.0, 50.0, 50.0);
        assert_eq!(r.width, 0.0);
        assert_eq!(r.height, 0.0);
    }

    #[test]
    fn rect_contains_rect() {
        let outer = Rect::new(0.0, 0.0, 1920.0, 1040.0);
        assert!(outer.contains_rect(&Rect::new(805.0, 898.0, 310.0, 138.0)));
        assert!(!outer.contains_rect(&Rect::new(1800.0, 0.0, 310.0, 138.0)));
    }

    #[test]
    fn rect_unscaled() {
        let r = Rect::new(0.0, 0.0, 2880.0, 1560.0).unscaled(1.5);
        assert_eq!(r, Rect::new(0.0, 0.0, 1920.0, 1040.0));
    }

    #[test]
    fn point_unscaled() {
        let p = Point::new(1440.0, 1560.0).unscaled(1.5);
        assert_eq!(p, Point::new(960.0, 1040.0));
    }

    #[test]
    fn rect_serialization() {
        let r = Rect::new(0.0, 0.0, 1920.0, 1080.0);
        let json = serde_json::to_string(&r).unwrap();
        let deserialized: Rect = serde_json::from_str(&json).unwrap();
        assert_eq!(r, deserialized);
    }

    #[test]
    fn group_id_display_and_from() {
        let id = GroupId::from("work");
        assert_eq!(id.to_string(), "work");
        assert_eq!(id.as_str(), "work");
        assert_eq!(GroupId::from(String::from("work")), id);
    }

    #[test]
    fn group_id_serializes_as_plain_string() {
        let json = serde_json::to_string(&GroupId::from("abc")).unwrap();
        assert_eq!(json, "\"abc\"");
    }

    #[test]
    fn group_icon_empty() {
        assert!(GroupIcon::default().is_empty());
        let icon = GroupIcon {
            glyph: Some("\u{E8B7}".into()),
            ..Default::default()
        };
        assert!(!icon.is_empty());
    }

    #[test]
    fn group_summary_builder() {
        let g = GroupSummary::new("dev", "Dev tools").with_item_count(4);
        assert_eq!(g.id, GroupId::from("dev"));
        assert_eq!(g.name, "Dev tools");
        assert_eq!(g.item_count, 4);
        assert!(g.icon.is_empty());
    }

    #[test]
    fn group_summary_defaults_missing_fields() {
        let g: GroupSummary = serde_json::from_str(r#"{"id":"a","name":"A"}"#).unwrap();
        assert_eq!(g.item_count, 0);
        assert!(g.icon.is_empty());
    }
}
