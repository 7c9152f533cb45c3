//! Scroll-driven hero expansion.
//!
//! Wheel and touch deltas accumulate into a progress value in `[0, 1]`.
//! Reaching 1 marks the media as expanded and reveals the content below it;
//! content hides again only once progress drops under [`HIDE_BELOW`], which
//! leaves a band between 0.75 and 1 where nothing flickers. While expanded,
//! the media collapses only on an upward gesture with the page at its top.

pub const WHEEL_SCALE: f64 = 0.0012;
/// Finger moving down the screen (negative delta) rewinds faster.
pub const TOUCH_SCALE_REWIND: f64 = 0.008;
pub const TOUCH_SCALE_ADVANCE: f64 = 0.005;
pub const HIDE_BELOW: f64 = 0.75;
pub const TOP_TOLERANCE_PX: f64 = 5.0;
pub const TOUCH_COLLAPSE_PX: f64 = -20.0;
pub const MOBILE_BREAKPOINT_PX: f64 = 768.0;

/// Whether the native event should be cancelled.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputDisposition {
    Consume,
    PassThrough,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    Expanded,
    Collapsed,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollExpansion {
    progress: f64,
    expanded: bool,
    content_visible: bool,
    touch_start_y: Option<f64>,
}

impl Default for ScrollExpansion {
    fn default() -> Self {
        Self {
            progress: 0.0,
            expanded: false,
            content_visible: false,
            touch_start_y: None,
        }
    }
}

impl ScrollExpansion {
    #[cfg(test)]
    pub fn progress(&self) -> f64 {
        self.progress
    }

    #[cfg(test)]
    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    /// Whether anything the hero draws differs from `previous`.
    pub fn renders_differently(&self, previous: &Self) -> bool {
        self.progress != previous.progress
            || self.expanded != previous.expanded
            || self.content_visible != previous.content_visible
    }

    pub fn content_visible(&self) -> bool {
        self.content_visible
    }

    /// The page is held at the top until the media has fully expanded.
    pub fn pins_page_scroll(&self) -> bool {
        !self.expanded
    }

    /// Back to the compact hero; used when the media type changes.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn on_wheel(
        &mut self,
        delta_y: f64,
        ctrl_key: bool,
        scroll_y: f64,
    ) -> (InputDisposition, Option<Transition>) {
        // Pinch-zoom arrives as ctrl+wheel
        if ctrl_key {
            return (InputDisposition::PassThrough, None);
        }

        let collapsing = self.expanded && delta_y < 0.0 && scroll_y <= TOP_TOLERANCE_PX;
        let disposition = if !self.expanded || collapsing {
            InputDisposition::Consume
        } else {
            InputDisposition::PassThrough
        };

        let transition = if collapsing {
            self.expanded = false;
            Some(Transition::Collapsed)
        } else if !self.expanded {
            self.advance(delta_y * WHEEL_SCALE)
        } else {
            None
        };

        (disposition, transition)
    }

    pub fn on_touch_start(&mut self, client_y: f64) {
        self.touch_start_y = Some(client_y);
    }

    pub fn on_touch_move(
        &mut self,
        client_y: f64,
        touch_count: u32,
        scroll_y: f64,
    ) -> (InputDisposition, Option<Transition>) {
        let Some(start_y) = self.touch_start_y else {
            return (InputDisposition::PassThrough, None);
        };
        if touch_count > 1 {
            return (InputDisposition::PassThrough, None);
        }

        let disposition = if self.expanded {
            InputDisposition::PassThrough
        } else {
            InputDisposition::Consume
        };

        let delta_y = start_y - client_y;
        let transition = if self.expanded && delta_y < TOUCH_COLLAPSE_PX && scroll_y <= TOP_TOLERANCE_PX {
            self.expanded = false;
            Some(Transition::Collapsed)
        } else if !self.expanded {
            let scale = if delta_y < 0.0 { TOUCH_SCALE_REWIND } else { TOUCH_SCALE_ADVANCE };
            let transition = self.advance(delta_y * scale);
            self.touch_start_y = Some(client_y);
            transition
        } else {
            None
        };

        (disposition, transition)
    }

    pub fn on_touch_end(&mut self) {
        self.touch_start_y = None;
    }

    fn advance(&mut self, delta: f64) -> Option<Transition> {
        self.progress = (self.progress + delta).clamp(0.0, 1.0);

        if self.progress >= 1.0 {
            self.expanded = true;
            self.content_visible = true;
            Some(Transition::Expanded)
        } else {
            if self.progress < HIDE_BELOW {
                self.content_visible = false;
            }
            None
        }
    }

    pub fn layout(&self, viewport: Viewport) -> MediaLayout {
        let p = self.progress;
        if viewport.is_mobile() {
            MediaLayout {
                width: 240.0 + p * (viewport.width - 240.0),
                height: 340.0 + p * (viewport.height - 340.0),
                border_radius: (1.0 - p) * 32.0,
                text_offset_vw: p * 100.0,
                background_opacity: 1.0 - p,
                overlay_opacity: 0.5 - p * 0.3,
                lead_title_scale: 1.0 - p * 0.2,
                main_title_scale: 1.0 + p * 0.2,
            }
        } else {
            MediaLayout {
                width: 300.0 + p * 1250.0,
                height: 400.0 + p * 400.0,
                border_radius: 4.0,
                text_offset_vw: p * 150.0,
                background_opacity: 1.0 - p,
                overlay_opacity: 0.5 - p * 0.3,
                lead_title_scale: 1.0 - p * 0.2,
                main_title_scale: 1.0 + p * 0.2,
            }
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn is_mobile(&self) -> bool {
        self.width < MOBILE_BREAKPOINT_PX
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MediaLayout {
    pub width: f64,
    pub height: f64,
    pub border_radius: f64,
    /// Horizontal offset of the two caption lines, in opposite directions.
    pub text_offset_vw: f64,
    pub background_opacity: f64,
    pub overlay_opacity: f64,
    pub lead_title_scale: f64,
    pub main_title_scale: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    const DESKTOP: Viewport = Viewport { width: 1440.0, height: 900.0 };
    const PHONE: Viewport = Viewport { width: 390.0, height: 844.0 };

    fn expanded() -> ScrollExpansion {
        let mut hero = ScrollExpansion::default();
        hero.on_wheel(1000.0, false, 0.0);
        assert!(hero.is_expanded());
        hero
    }

    #[test]
    fn progress_stays_within_bounds() {
        let mut hero = ScrollExpansion::default();
        let deltas = [500.0, -2000.0, 90.0, 3000.0, -1.0, 120.0, -120.0, 9999.0, -9999.0];
        for (i, delta) in deltas.iter().enumerate() {
            hero.on_wheel(*delta, false, 0.0);
            assert!((0.0..=1.0).contains(&hero.progress()), "wheel step {i}");
            hero.on_touch_start(400.0);
            hero.on_touch_move(400.0 - delta, 1, 0.0);
            hero.on_touch_end();
            assert!((0.0..=1.0).contains(&hero.progress()), "touch step {i}");
        }
    }

    #[test]
    fn wheel_is_scaled() {
        let mut hero = ScrollExpansion::default();
        let (disposition, transition) = hero.on_wheel(100.0, false, 0.0);
        assert_eq!(disposition, InputDisposition::Consume);
        assert_eq!(transition, None);
        assert!((hero.progress() - 0.12).abs() < 1e-9);
    }

    #[test]
    fn scrolling_revealed_content_needs_no_render() {
        let mut hero = expanded();
        let before = hero;
        let (disposition, _) = hero.on_wheel(120.0, false, 600.0);
        assert_eq!(disposition, InputDisposition::PassThrough);
        assert!(!hero.renders_differently(&before));

        let before = hero;
        hero.on_touch_start(400.0);
        assert!(!hero.renders_differently(&before));
    }

    #[test]
    fn growing_media_needs_a_render() {
        let mut hero = ScrollExpansion::default();
        let before = hero;
        hero.on_wheel(100.0, false, 0.0);
        assert!(hero.renders_differently(&before));
    }

    #[test]
    fn ctrl_wheel_passes_through_untouched() {
        let mut hero = ScrollExpansion::default();
        let (disposition, _) = hero.on_wheel(400.0, true, 0.0);
        assert_eq!(disposition, InputDisposition::PassThrough);
        assert_eq!(hero.progress(), 0.0);
    }

    #[test]
    fn reaching_one_expands_and_reveals() {
        let mut hero = ScrollExpansion::default();
        let (_, transition) = hero.on_wheel(900.0, false, 0.0);
        assert_eq!(transition, Some(Transition::Expanded));
        assert!(hero.is_expanded());
        assert!(hero.content_visible());
        assert!(!hero.pins_page_scroll());
    }

    #[test]
    fn stays_expanded_while_scrolled_into_content() {
        let mut hero = expanded();
        let (disposition, transition) = hero.on_wheel(-300.0, false, 640.0);
        assert_eq!(disposition, InputDisposition::PassThrough);
        assert_eq!(transition, None);
        assert!(hero.is_expanded());

        hero.on_wheel(300.0, false, 0.0);
        assert!(hero.is_expanded());
    }

    #[test]
    fn collapses_on_upward_wheel_at_top() {
        let mut hero = expanded();
        let (disposition, transition) = hero.on_wheel(-50.0, false, 3.0);
        assert_eq!(disposition, InputDisposition::Consume);
        assert_eq!(transition, Some(Transition::Collapsed));
        assert!(!hero.is_expanded());
        // content stays until progress leaves the hysteresis band
        assert!(hero.content_visible());
    }

    #[test]
    fn hysteresis_band_keeps_content_visible() {
        let mut hero = expanded();
        hero.on_wheel(-50.0, false, 0.0);
        hero.on_wheel(-100.0, false, 0.0);
        assert!((hero.progress() - 0.88).abs() < 1e-9);
        assert!(hero.content_visible());

        hero.on_wheel(-150.0, false, 0.0);
        assert!(hero.progress() < HIDE_BELOW);
        assert!(!hero.content_visible());
    }

    #[test]
    fn alternating_wheel_near_the_top_does_not_oscillate() {
        let mut hero = expanded();
        let mut transitions = Vec::new();
        for _ in 0..10 {
            if let (_, Some(t)) = hero.on_wheel(-10.0, false, 12.0) {
                transitions.push(t);
            }
            if let (_, Some(t)) = hero.on_wheel(10.0, false, 12.0) {
                transitions.push(t);
            }
        }
        assert!(transitions.is_empty());
        assert!(hero.is_expanded());
    }

    #[test]
    fn touch_scales_are_asymmetric() {
        let mut hero = ScrollExpansion::default();
        hero.on_touch_start(500.0);
        let (disposition, _) = hero.on_touch_move(400.0, 1, 0.0);
        assert_eq!(disposition, InputDisposition::Consume);
        assert!((hero.progress() - 0.5).abs() < 1e-9);

        hero.on_touch_move(450.0, 1, 0.0);
        assert!((hero.progress() - 0.1).abs() < 1e-9);
    }

    #[test]
    fn touch_move_without_start_is_ignored() {
        let mut hero = ScrollExpansion::default();
        let (disposition, transition) = hero.on_touch_move(100.0, 1, 0.0);
        assert_eq!(disposition, InputDisposition::PassThrough);
        assert_eq!(transition, None);
        assert_eq!(hero.progress(), 0.0);
    }

    #[test]
    fn multi_touch_is_left_to_the_browser() {
        let mut hero = ScrollExpansion::default();
        hero.on_touch_start(500.0);
        let (disposition, _) = hero.on_touch_move(300.0, 2, 0.0);
        assert_eq!(disposition, InputDisposition::PassThrough);
        assert_eq!(hero.progress(), 0.0);
    }

    #[test]
    fn touch_collapse_needs_a_real_swipe_at_the_top() {
        let mut hero = expanded();
        hero.on_touch_start(300.0);
        hero.on_touch_move(310.0, 1, 0.0);
        assert!(hero.is_expanded());

        hero.on_touch_move(330.0, 1, 40.0);
        assert!(hero.is_expanded());

        let (_, transition) = hero.on_touch_move(330.0, 1, 0.0);
        assert_eq!(transition, Some(Transition::Collapsed));
    }

    #[test]
    fn reset_returns_to_compact_hero() {
        let mut hero = expanded();
        hero.reset();
        assert_eq!(hero, ScrollExpansion::default());
    }

    #[test]
    fn desktop_layout_interpolates() {
        let mut hero = ScrollExpansion::default();
        assert_eq!(hero.layout(DESKTOP).width, 300.0);
        assert_eq!(hero.layout(DESKTOP).height, 400.0);

        hero.on_wheel(1000.0, false, 0.0);
        let layout = hero.layout(DESKTOP);
        assert_eq!(layout.width, 1550.0);
        assert_eq!(layout.height, 800.0);
        assert_eq!(layout.text_offset_vw, 150.0);
        assert_eq!(layout.border_radius, 4.0);
        assert_eq!(layout.background_opacity, 0.0);
    }

    #[test]
    fn mobile_layout_fills_the_viewport() {
        let mut hero = ScrollExpansion::default();
        let compact = hero.layout(PHONE);
        assert_eq!(compact.width, 240.0);
        assert_eq!(compact.border_radius, 32.0);

        hero.on_wheel(1000.0, false, 0.0);
        let full = hero.layout(PHONE);
        assert_eq!(full.width, PHONE.width);
        assert_eq!(full.height, PHONE.height);
        assert_eq!(full.border_radius, 0.0);
        assert_eq!(full.text_offset_vw, 100.0);
    }
}
