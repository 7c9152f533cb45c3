//! Geometry for seamless looping strips.
//!
//! A strip renders its items twice back to back and slides left by the width
//! of one copy, so the loop point lands exactly where it started.

pub const ROOT_FONT_PX: f64 = 16.0;

/// Horizontal box of one strip item. `width_rem` includes the padding.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ItemBox {
    pub width_rem: f64,
    pub margin_x_rem: f64,
    pub padding_x_rem: f64,
}

impl ItemBox {
    /// Distance from one item's left edge to the next one's.
    pub fn pitch_px(&self) -> f64 {
        (self.width_rem + 2.0 * self.margin_x_rem) * ROOT_FONT_PX
    }

    /// Declarations that give the item this box.
    pub fn css(&self) -> String {
        format!(
            "box-sizing: border-box; width: {}rem; margin: 0 {}rem; padding: 0 {}rem;",
            self.width_rem, self.margin_x_rem, self.padding_x_rem
        )
    }
}

pub const SCHOOL_CARD: ItemBox = ItemBox {
    width_rem: 8.0,
    margin_x_rem: 0.5,
    padding_x_rem: 0.0,
};
pub const SCHOOL_LOOP_SECONDS: f64 = 30.0;

pub const PARTNER_LOGO: ItemBox = ItemBox {
    width_rem: 8.0,
    margin_x_rem: 0.0,
    padding_x_rem: 1.5,
};
pub const PARTNER_LOOP_SECONDS: f64 = 18.0;

pub fn duplicated<T: Clone>(items: &[T]) -> Vec<T> {
    items.iter().chain(items.iter()).cloned().collect()
}

/// Repeats `items` until one copy spans at least `min_width` pixels.
pub fn covering<T: Clone>(items: &[T], pitch: f64, min_width: f64) -> Vec<T> {
    let copy_width = pitch * items.len() as f64;
    if copy_width <= 0.0 {
        return items.to_vec();
    }
    let copies = (min_width / copy_width).ceil().max(1.0) as usize;
    items.iter().cycle().take(items.len() * copies).cloned().collect()
}

/// Loop distance assumed from the styled item pitch, used before layout.
pub fn declared_loop_distance(pitch: f64, count: usize) -> f64 {
    pitch * count as f64
}

/// Loop distance taken from the rendered strip: one copy is half of it.
pub fn measured_loop_distance(strip_scroll_width: i32) -> Option<f64> {
    (strip_scroll_width > 0).then(|| f64::from(strip_scroll_width) / 2.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{HERO_PARTNERS, SCHOOLS};

    /// Outer width in px of a border-box item styled by `css`.
    fn styled_outer_width(css: &str) -> f64 {
        assert!(css.contains("box-sizing: border-box"));
        let rem = |property: &str| -> f64 {
            let start = css.find(property).unwrap() + property.len();
            let value = &css[start..css[start..].find(';').unwrap() + start];
            let last = value.split_whitespace().last().unwrap();
            last.trim_end_matches("rem").parse::<f64>().unwrap()
        };
        (rem("width:") + 2.0 * rem("margin:")) * ROOT_FONT_PX
    }

    #[test]
    fn duplicates_exactly_twice() {
        let strip = duplicated(SCHOOLS);
        assert_eq!(strip.len(), 2 * SCHOOLS.len());
        assert_eq!(strip[0], strip[SCHOOLS.len()]);
        assert_eq!(strip[SCHOOLS.len() - 1], strip[strip.len() - 1]);
    }

    #[test]
    fn school_pitch_matches_styled_card() {
        assert_eq!(SCHOOL_CARD.pitch_px(), 144.0);
        assert_eq!(SCHOOL_CARD.pitch_px(), styled_outer_width(&SCHOOL_CARD.css()));
    }

    #[test]
    fn partner_pitch_matches_styled_logo() {
        assert_eq!(PARTNER_LOGO.pitch_px(), 128.0);
        assert_eq!(PARTNER_LOGO.pitch_px(), styled_outer_width(&PARTNER_LOGO.css()));
    }

    #[test]
    fn padding_does_not_widen_border_box_items() {
        let padded = ItemBox { padding_x_rem: 3.0, ..PARTNER_LOGO };
        assert_eq!(padded.pitch_px(), PARTNER_LOGO.pitch_px());
    }

    #[test]
    fn declared_distance_is_one_copy() {
        assert_eq!(
            declared_loop_distance(SCHOOL_CARD.pitch_px(), SCHOOLS.len()),
            144.0 * 19.0
        );
    }

    #[test]
    fn measured_distance_is_half_the_strip() {
        assert_eq!(measured_loop_distance(5_472), Some(2_736.0));
    }

    #[test]
    fn unmeasured_strip_has_no_distance() {
        assert_eq!(measured_loop_distance(0), None);
    }

    #[test]
    fn partner_logos_repeat_to_cover_desktop() {
        let logos = covering(HERO_PARTNERS, PARTNER_LOGO.pitch_px(), 1920.0);
        let copy_width = PARTNER_LOGO.pitch_px() * logos.len() as f64;
        assert!(copy_width >= 1920.0);
        assert_eq!(logos.len() % HERO_PARTNERS.len(), 0);
        assert_eq!(logos[0], logos[HERO_PARTNERS.len()]);
    }

    #[test]
    fn covering_keeps_at_least_one_copy() {
        assert_eq!(covering(&[1, 2, 3], 100.0, 0.0), vec![1, 2, 3]);
        assert!(covering::<u8>(&[], 100.0, 1920.0).is_empty());
    }
}
