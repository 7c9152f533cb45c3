//! Character-scramble reveal used for headings.

pub const GLYPHS: &[char] = &[
    '!', '<', '>', '-', '_', '\\', '/', '[', ']', '{', '}', '—', '=', '+', '*', '^', '?', '#', '_',
    '_', '_', '_', '_', '_', '_', '_',
];
const REROLL_CHANCE: f64 = 0.28;

struct Slot {
    to: char,
    start: u32,
    end: u32,
    glyph: Option<char>,
}

/// Frame-by-frame state of one scramble. `random` yields values in `[0, 1)`.
pub struct Scramble<R: FnMut() -> f64> {
    slots: Vec<Slot>,
    frame: u32,
    random: R,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScrambleFrame {
    pub text: String,
    pub complete: bool,
}

impl<R: FnMut() -> f64> Scramble<R> {
    pub fn new(text: &str, duration: u32, mut random: R) -> Self {
        let slots = text
            .chars()
            .map(|to| {
                let start = pick(&mut random, duration);
                let end = start + pick(&mut random, duration);
                Slot { to, start, end, glyph: None }
            })
            .collect();
        Self { slots, frame: 0, random }
    }

    /// Renders the current frame and advances to the next one.
    pub fn step(&mut self) -> ScrambleFrame {
        let mut text = String::new();
        let mut settled = 0;

        for slot in &mut self.slots {
            if self.frame >= slot.end {
                settled += 1;
                text.push(slot.to);
            } else if self.frame >= slot.start {
                let glyph = match slot.glyph {
                    Some(glyph) if (self.random)() >= REROLL_CHANCE => glyph,
                    _ => GLYPHS[pick(&mut self.random, GLYPHS.len() as u32) as usize],
                };
                slot.glyph = Some(glyph);
                text.push(glyph);
            }
        }

        let complete = settled == self.slots.len();
        if !complete {
            self.frame += 1;
        }
        ScrambleFrame { text, complete }
    }
}

fn pick<R: FnMut() -> f64>(random: &mut R, bound: u32) -> u32 {
    if bound == 0 {
        return 0;
    }
    ((random() * f64::from(bound)) as u32).min(bound - 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lcg(seed: u64) -> impl FnMut() -> f64 {
        let mut state = seed;
        move || {
            state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            (state >> 11) as f64 / (1u64 << 53) as f64
        }
    }

    #[test]
    fn settles_on_the_target_text() {
        let mut scramble = Scramble::new("ASCENT 2026", 40, lcg(7));
        let mut last = scramble.step();
        for _ in 0..200 {
            if last.complete {
                break;
            }
            last = scramble.step();
        }
        assert!(last.complete);
        assert_eq!(last.text, "ASCENT 2026");
    }

    #[test]
    fn zero_duration_is_immediate() {
        let mut scramble = Scramble::new("GO", 0, lcg(1));
        assert_eq!(
            scramble.step(),
            ScrambleFrame { text: "GO".into(), complete: true }
        );
    }

    #[test]
    fn in_flight_characters_use_glyphs() {
        let mut scramble = Scramble::new("ABCDEFGH", 40, || 0.5);
        let mut frame = scramble.step();
        while !frame.complete && frame.text.is_empty() {
            frame = scramble.step();
        }
        assert!(frame.text.chars().all(|c| GLYPHS.contains(&c) || "ABCDEFGH".contains(c)));
    }

    #[test]
    fn empty_text_completes() {
        let mut scramble = Scramble::new("", 40, lcg(3));
        assert!(scramble.step().complete);
    }
}
