//! Hit testing for clickable TUI elements
//!
//! Tracks rendered widget bounds and maps mouse coordinates to actions

use ratatui::layout::Rect;

/// Identifies a clickable element
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ClickTarget {
    /// Example question (sidebar card or welcome shortcut)
    Example(&'static str),
    /// Send button next to the input
    Send,
}

/// Tracks clickable regions for hit testing
#[derive(Debug, Default)]
pub struct HitTestRegistry {
    /// Iterated in reverse for hit testing (last rendered is on top)
    regions: Vec<(Rect, ClickTarget)>,
}

impl HitTestRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.regions.clear();
    }

    pub fn register(&mut self, rect: Rect, target: ClickTarget) {
        self.regions.push((rect, target));
    }

    pub fn hit_test(&self, x: u16, y: u16) -> Option<&ClickTarget> {
        self.regions
            .iter()
            .rev()
            .find(|(rect, _)| {
                x >= rect.x && x < rect.x + rect.width && y >= rect.y && y < rect.y + rect.height
            })
            .map(|(_, target)| target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hit_and_miss() {
        let mut registry = HitTestRegistry::new();
        registry.register(Rect::new(2, 3, 10, 1), ClickTarget::Send);

        assert_eq!(registry.hit_test(2, 3), Some(&ClickTarget::Send));
        assert_eq!(registry.hit_test(11, 3), Some(&ClickTarget::Send));
        assert_eq!(registry.hit_test(12, 3), None);
        assert_eq!(registry.hit_test(5, 4), None);
    }

    #[test]
    fn test_last_registered_wins() {
        let mut registry = HitTestRegistry::new();
        registry.register(Rect::new(0, 0, 20, 5), ClickTarget::Send);
        registry.register(Rect::new(0, 1, 20, 1), ClickTarget::Example("q"));

        assert_eq!(registry.hit_test(4, 1), Some(&ClickTarget::Example("q")));
        assert_eq!(registry.hit_test(4, 2), Some(&ClickTarget::Send));

        registry.clear();
        assert_eq!(registry.hit_test(4, 1), None);
    }
}
