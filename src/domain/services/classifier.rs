//! Heuristic playstyle classifier
//!
//! Scores a racket + rubber combination on three axes (speed, spin,
//! control) by matching known vendor/model tokens in the equipment names,
//! then buckets each axis into a descriptive phrase.
//!
//! The function is pure: the same names always produce the same label, and
//! swapping front and back rubbers does not change it.

/// Signed contribution of one matched token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Delta {
    speed: i32,
    spin: i32,
    control: i32,
}

const fn delta(speed: i32, spin: i32, control: i32) -> Delta {
    Delta {
        speed,
        spin,
        control,
    }
}

/// Substring rules applied to each rubber name. Matches stack.
const RUBBER_RULES: &[(&str, Delta)] = &[
    ("tenergy", delta(1, 1, 0)),
    ("tenergy 05", delta(0, 1, 0)),
    ("tenergy 64", delta(1, 0, 0)),
    ("dignics", delta(1, 2, 0)),
    ("hurricane", delta(0, 2, 0)),
    ("neo", delta(0, 1, -1)),
    ("rasanter", delta(1, 1, 0)),
    ("bluefire", delta(1, 1, 0)),
    ("vega", delta(1, 0, 1)),
    ("palio", delta(0, 0, 1)),
    ("cj8000", delta(0, 1, 1)),
    ("mark v", delta(0, 1, 1)),
    ("sriver", delta(0, 0, 2)),
    ("pips", delta(-1, -1, 1)),
    ("anti", delta(-1, -2, 1)),
];

/// Substring rules applied to the racket name.
const RACKET_RULES: &[(&str, Delta)] = &[
    ("viscaria", delta(1, 0, 0)),
    ("alc", delta(1, 0, -1)),
    ("zlc", delta(1, 0, -1)),
    ("carbon", delta(1, 0, 0)),
    ("defensive", delta(-2, 0, 2)),
    ("allround", delta(0, 0, 1)),
    ("all-round", delta(0, 0, 1)),
];

/// Separator between the three phrases of a label.
pub const LABEL_SEPARATOR: &str = " / ";

pub const SPEED_TIERS: [&str; 3] = ["fast", "medium", "calm"];
pub const SPIN_TIERS: [&str; 3] = ["high spin", "moderate spin", "light spin"];
pub const CONTROL_TIERS: [&str; 3] = ["high control", "standard handling", "hard to control"];

/// Raw accumulator values for a combination.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize)]
pub struct PlayScore {
    pub speed: i32,
    pub spin: i32,
    pub control: i32,
}

impl PlayScore {
    fn apply(&mut self, name: &str, rules: &[(&str, Delta)]) {
        if name.is_empty() {
            return;
        }
        let lowered = name.to_lowercase();
        for (token, d) in rules {
            if lowered.contains(token) {
                self.speed += d.speed;
                self.spin += d.spin;
                self.control += d.control;
            }
        }
    }

    pub fn speed_phrase(&self) -> &'static str {
        bucket(self.speed, 3, 1, SPEED_TIERS)
    }

    pub fn spin_phrase(&self) -> &'static str {
        bucket(self.spin, 4, 2, SPIN_TIERS)
    }

    pub fn control_phrase(&self) -> &'static str {
        bucket(self.control, 3, 1, CONTROL_TIERS)
    }

    /// e.g. `fast / moderate spin / hard to control`
    pub fn label(&self) -> String {
        [self.speed_phrase(), self.spin_phrase(), self.control_phrase()].join(LABEL_SEPARATOR)
    }
}

fn bucket(value: i32, high: i32, mid: i32, tiers: [&'static str; 3]) -> &'static str {
    if value >= high {
        tiers[0]
    } else if value >= mid {
        tiers[1]
    } else {
        tiers[2]
    }
}

/// Score a combination without bucketing.
pub fn score(racket: &str, front: &str, back: &str) -> PlayScore {
    let mut score = PlayScore::default();
    score.apply(front, RUBBER_RULES);
    score.apply(back, RUBBER_RULES);
    score.apply(racket, RACKET_RULES);
    score
}

/// Describe a combination's character, e.g. `calm / light spin / high control`.
pub fn classify(racket: &str, front: &str, back: &str) -> String {
    score(racket, front, back).label()
}
