//! Declarative entrance animations.
//!
//! Each animation is an immutable [`RevealConfig`]: a hidden and a visible
//! [`Frame`], a [`Transition`] between them, and the visibility trigger
//! settings. The UI renders configs as inline CSS, either as a transition
//! toggled by a [`RevealTrigger`](crate::RevealTrigger) or as a keyframe
//! animation that plays once on mount.

use std::fmt::Write as _;

/// Format a number for CSS with at most three decimals and no trailing zeros
pub(crate) fn num(value: f64) -> String {
    let s = format!("{value:.3}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" || s.is_empty() {
        "0".to_string()
    } else {
        s.to_string()
    }
}

/// Damped harmonic oscillator released from 0 towards 1 at rest
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringCurve {
    pub damping: f64,
    pub stiffness: f64,
    pub mass: f64,
}

impl SpringCurve {
    /// Bouncy word entrance
    pub const WORD: SpringCurve = SpringCurve {
        damping: 12.0,
        stiffness: 100.0,
        mass: 1.0,
    };

    /// Distance from 1 below which the spring counts as settled
    const REST_DELTA: f64 = 0.005;
    const MAX_SETTLE_S: f64 = 10.0;
    const SAMPLES: usize = 40;

    pub fn natural_frequency(&self) -> f64 {
        (self.stiffness / self.mass).sqrt()
    }

    pub fn damping_ratio(&self) -> f64 {
        self.damping / (2.0 * (self.stiffness * self.mass).sqrt())
    }

    /// Normalized position at `t` seconds
    pub fn position(&self, t: f64) -> f64 {
        let w0 = self.natural_frequency();
        let zeta = self.damping_ratio();

        if zeta < 1.0 {
            let wd = w0 * (1.0 - zeta * zeta).sqrt();
            let decay = (-zeta * w0 * t).exp();
            1.0 - decay * ((wd * t).cos() + (zeta * w0 / wd) * (wd * t).sin())
        } else if zeta == 1.0 {
            1.0 - (-w0 * t).exp() * (1.0 + w0 * t)
        } else {
            let root = (zeta * zeta - 1.0).sqrt();
            let r1 = -w0 * (zeta - root);
            let r2 = -w0 * (zeta + root);
            1.0 - (r2 * (r1 * t).exp() - r1 * (r2 * t).exp()) / (r2 - r1)
        }
    }

    /// Upper bound on `|1 - position(t)|`
    fn deviation_bound(&self, t: f64) -> f64 {
        let w0 = self.natural_frequency();
        let zeta = self.damping_ratio();

        if zeta < 1.0 {
            let wd = w0 * (1.0 - zeta * zeta).sqrt();
            let ratio = zeta * w0 / wd;
            (-zeta * w0 * t).exp() * (1.0 + ratio * ratio).sqrt()
        } else {
            (1.0 - self.position(t)).abs()
        }
    }

    /// Seconds until the spring stays within the rest tolerance
    pub fn settle_time(&self) -> f64 {
        if !(self.stiffness > 0.0 && self.mass > 0.0 && self.damping > 0.0) {
            return Self::MAX_SETTLE_S;
        }
        let step = 0.001;
        let mut t = 0.0;
        while t < Self::MAX_SETTLE_S {
            if self.deviation_bound(t) < Self::REST_DELTA {
                return t;
            }
            t += step;
        }
        Self::MAX_SETTLE_S
    }

    /// CSS `linear()` easing sampled over the settle time
    pub fn css(&self) -> String {
        let duration = self.settle_time();
        let mut out = String::from("linear(");
        for i in 0..=Self::SAMPLES {
            let t = duration * i as f64 / Self::SAMPLES as f64;
            let value = if i == Self::SAMPLES { 1.0 } else { self.position(t) };
            if i > 0 {
                out.push_str(", ");
            }
            out.push_str(&num(value));
        }
        out.push(')');
        out
    }
}

/// Timing curve of a transition
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Easing {
    EaseOut,
    Spring(SpringCurve),
}

impl Easing {
    pub fn css(&self) -> String {
        match self {
            Easing::EaseOut => "ease-out".to_string(),
            Easing::Spring(spring) => spring.css(),
        }
    }
}

/// A single visual state: opacity plus a translate/scale transform
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Frame {
    pub opacity: f64,
    pub x: f64,
    pub y: f64,
    pub scale: f64,
}

impl Frame {
    pub const VISIBLE: Frame = Frame {
        opacity: 1.0,
        x: 0.0,
        y: 0.0,
        scale: 1.0,
    };

    /// Transparent and offset by `(x, y)` pixels
    pub const fn offset(x: f64, y: f64) -> Frame {
        Frame {
            opacity: 0.0,
            x,
            y,
            scale: 1.0,
        }
    }

    /// Transparent and scaled down
    pub const fn shrunk(scale: f64) -> Frame {
        Frame {
            opacity: 0.0,
            x: 0.0,
            y: 0.0,
            scale,
        }
    }

    pub fn transform_css(&self) -> String {
        format!(
            "translate({}px, {}px) scale({})",
            num(self.x),
            num(self.y),
            num(self.scale)
        )
    }

    pub fn css(&self) -> String {
        format!("opacity: {}; transform: {};", num(self.opacity), self.transform_css())
    }
}

/// Duration, delay and curve of a hidden to visible change
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transition {
    pub duration_s: f64,
    pub delay_s: f64,
    pub easing: Easing,
}

impl Transition {
    pub const fn ease_out(duration_s: f64) -> Transition {
        Transition {
            duration_s,
            delay_s: 0.0,
            easing: Easing::EaseOut,
        }
    }

    /// Springs run for their settle time regardless of `duration_s`
    pub fn effective_duration(&self) -> f64 {
        match self.easing {
            Easing::Spring(spring) => spring.settle_time(),
            _ => self.duration_s,
        }
    }

    pub fn css(&self) -> String {
        let duration = num(self.effective_duration());
        let easing = self.easing.css();
        let delay = num(self.delay_s);
        format!(
            "transition: opacity {duration}s {easing} {delay}s, transform {duration}s {easing} {delay}s;"
        )
    }
}

/// Hidden/visible pair plus the trigger that flips between them
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealConfig {
    pub hidden: Frame,
    pub visible: Frame,
    pub transition: Transition,
    /// Fraction of the element that must be on screen to trigger
    pub threshold: f64,
    /// Stay visible after the first trigger
    pub once: bool,
}

impl RevealConfig {
    /// Page sections (about, skills, projects, contact)
    pub const SECTION: RevealConfig = RevealConfig {
        hidden: Frame::offset(0.0, 50.0),
        visible: Frame::VISIBLE,
        transition: Transition::ease_out(0.8),
        threshold: 0.3,
        once: true,
    };

    pub const HERO_AVATAR: RevealConfig = RevealConfig {
        hidden: Frame::shrunk(0.8),
        visible: Frame::VISIBLE,
        transition: Transition::ease_out(0.8),
        threshold: 0.0,
        once: true,
    };

    pub const HERO_ACTIONS: RevealConfig = RevealConfig {
        hidden: Frame::offset(0.0, 20.0),
        visible: Frame::VISIBLE,
        transition: Transition {
            duration_s: 0.5,
            delay_s: 1.5,
            easing: Easing::EaseOut,
        },
        threshold: 0.0,
        once: true,
    };

    pub const ABOUT_IMAGE: RevealConfig = RevealConfig {
        hidden: Frame::offset(-50.0, 0.0),
        visible: Frame::VISIBLE,
        transition: Transition::ease_out(0.7),
        threshold: 0.3,
        once: true,
    };

    pub const ABOUT_TEXT: RevealConfig = RevealConfig {
        hidden: Frame::offset(50.0, 0.0),
        ..Self::ABOUT_IMAGE
    };

    pub const CONTACT_CARD: RevealConfig = RevealConfig {
        hidden: Frame::shrunk(0.9),
        visible: Frame::VISIBLE,
        transition: Transition::ease_out(0.7),
        threshold: 0.3,
        once: true,
    };

    /// Skill tiles cascade by 0.1s and trigger as soon as any pixel shows
    pub fn skill_tile(index: usize) -> RevealConfig {
        RevealConfig {
            hidden: Frame::offset(0.0, 20.0),
            visible: Frame::VISIBLE,
            transition: Transition {
                duration_s: 0.5,
                delay_s: index as f64 * 0.1,
                easing: Easing::EaseOut,
            },
            threshold: 0.0,
            once: true,
        }
    }

    pub fn project_card(index: usize) -> RevealConfig {
        RevealConfig {
            hidden: Frame::offset(0.0, 50.0),
            visible: Frame::VISIBLE,
            transition: Transition {
                duration_s: 0.6,
                delay_s: (index + 1) as f64 * 0.1,
                easing: Easing::EaseOut,
            },
            threshold: 0.2,
            once: true,
        }
    }

    /// Spring entrance of a single word, delayed by its stagger offset
    pub fn word(delay_s: f64) -> RevealConfig {
        RevealConfig {
            hidden: Frame::offset(0.0, 20.0),
            visible: Frame::VISIBLE,
            transition: Transition {
                duration_s: 0.0,
                delay_s,
                easing: Easing::Spring(SpringCurve::WORD),
            },
            threshold: 0.0,
            once: true,
        }
    }

    /// Inline style for a transition-driven reveal
    pub fn style(&self, revealed: bool) -> String {
        let frame = if revealed { &self.visible } else { &self.hidden };
        format!("{} {}", frame.css(), self.transition.css())
    }

    /// `@keyframes` rule for a mount-time animation named `name`
    pub fn keyframes(&self, name: &str) -> String {
        let mut out = String::new();
        let _ = write!(
            out,
            "@keyframes {name} {{ from {{ {} }} to {{ {} }} }}",
            self.hidden.css(),
            self.visible.css()
        );
        out
    }

    /// Inline style playing the `name` keyframes once, holding both ends
    pub fn animation(&self, name: &str) -> String {
        format!(
            "animation: {name} {}s {} {}s 1 both;",
            num(self.transition.effective_duration()),
            self.transition.easing.css(),
            num(self.transition.delay_s)
        )
    }
}
