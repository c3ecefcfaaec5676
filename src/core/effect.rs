use super::constants::{PROJECT_TILT_DIVISOR, PROJECT_TILT_LIFT_PX, TILT_PERSPECTIVE_PX};
use super::follower::DampedFollower;
use glam::Vec2;

/// A style property write: `(property, value)`. Custom properties start with `--`.
pub type StyleWrite = (&'static str, String);
/// Style write known at compile time (preset enter/leave styles).
pub type StaticStyle = (&'static str, &'static str);

/// Bounding client rect of the element a sample is taken against.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    #[inline]
    pub fn origin(&self) -> Vec2 {
        Vec2::new(self.left, self.top)
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.origin() + self.size() * 0.5
    }

    /// Zero or negative extents make every relative mapping divide by zero.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }
}

/// How a client-space pointer position maps into an effect's coordinate space.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerMapping {
    /// Raw client pixels; no rect needed.
    ClientPx,
    /// Offset from the rect center divided by the rect size, roughly [-0.5, 0.5].
    CenteredUnit,
    /// Position across the rect rescaled to [-1, 1].
    SignedUnit,
    /// Position across the rect in [0, 100].
    Percent,
}

impl PointerMapping {
    /// Map a client position. Returns `None` when the mapping needs a rect and
    /// none (or a zero-size one) is available.
    pub fn map(self, client: Vec2, rect: Option<Rect>) -> Option<Vec2> {
        if self == PointerMapping::ClientPx {
            return Some(client);
        }
        let rect = rect.filter(|r| !r.is_degenerate())?;
        let local = client - rect.origin();
        let size = rect.size();
        Some(match self {
            PointerMapping::ClientPx => client,
            PointerMapping::CenteredUnit => (client - rect.center()) / size,
            PointerMapping::SignedUnit => (local / size - Vec2::splat(0.5)) * 2.0,
            PointerMapping::Percent => local / size * 100.0,
        })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axes {
    Both,
    Horizontal,
}

impl Axes {
    #[inline]
    pub fn apply(self, v: Vec2) -> Vec2 {
        match self {
            Axes::Both => v,
            Axes::Horizontal => Vec2::new(v.x, 0.0),
        }
    }
}

/// Turns a follower value into style writes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Response {
    /// `left` / `top` in pixels.
    Position,
    /// `transform: translate(..)` scaled, with a fixed suffix (e.g. ` scale(1.1)`).
    Translate { scale: f32, suffix: &'static str },
    /// 3D tilt: x drives rotateY, y drives rotateX (inverted).
    Tilt { max_deg: f32 },
    /// `--mouse-x` / `--mouse-y` as percentages.
    CustomPercent,
}

impl Response {
    pub fn styles(&self, v: Vec2) -> Vec<StyleWrite> {
        match *self {
            Response::Position => vec![("left", format!("{}px", v.x)), ("top", format!("{}px", v.y))],
            Response::Translate { scale, suffix } => vec![(
                "transform",
                format!("translate({}px, {}px){}", v.x * scale, v.y * scale, suffix),
            )],
            Response::Tilt { max_deg } => vec![(
                "transform",
                format!(
                    "perspective({}px) rotateX({}deg) rotateY({}deg)",
                    TILT_PERSPECTIVE_PX,
                    -v.y * max_deg,
                    v.x * max_deg
                ),
            )],
            Response::CustomPercent => vec![
                ("--mouse-x", format!("{}%", v.x)),
                ("--mouse-y", format!("{}%", v.y)),
            ],
        }
    }
}

/// Where pointer samples come from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Source {
    /// Pointer movement anywhere on the document; one instance.
    Document,
    /// Pointer movement over each element matching the selector; one instance per element.
    Each(&'static str),
}

/// Element a track writes to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TrackTarget {
    SourceElement,
    Selector(&'static str),
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Track {
    pub target: TrackTarget,
    pub rate: f32,
    pub response: Response,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum LeaveBehavior {
    /// Stop ticking immediately; leave styles put the element back.
    Snap,
    /// Keep ticking toward zero until every axis is within `epsilon`.
    Settle { epsilon: f32 },
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Lifecycle {
    /// Ticks from start until stopped by the visibility gate or teardown.
    Continuous,
    /// Ticks only while hovered, then applies the leave behavior.
    WhileHovering { on_leave: LeaveBehavior },
}

/// Configuration of one interpolated hover effect.
#[derive(Clone, Debug, PartialEq)]
pub struct HoverEffectConfig {
    pub name: &'static str,
    pub source: Source,
    pub mapping: PointerMapping,
    pub axes: Axes,
    pub initial: Vec2,
    pub lifecycle: Lifecycle,
    pub tracks: Vec<Track>,
    pub enter_styles: &'static [StaticStyle],
    pub leave_styles: &'static [StaticStyle],
    /// Written once a settle loop finishes.
    pub settled_styles: &'static [StaticStyle],
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Tracking,
    Settling,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// Values advanced; schedule another tick.
    Continue,
    /// Nothing to do; the ticker should stop.
    Stop,
    /// Settle loop reached neutral; write settled styles and stop.
    Settled,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LeaveAction {
    None,
    /// Cancel the ticker and write leave styles.
    Stop,
    /// Keep (or start) the ticker for the settle loop.
    Settle,
}

/// Sampler plus followers for one effect instance.
#[derive(Clone, Debug)]
pub struct HoverEffectState {
    pub sample: Vec2,
    pub followers: Vec<DampedFollower>,
    pub phase: Phase,
    mapping: PointerMapping,
    axes: Axes,
    lifecycle: Lifecycle,
}

impl HoverEffectState {
    pub fn new(config: &HoverEffectConfig) -> Self {
        let followers = config
            .tracks
            .iter()
            .map(|t| DampedFollower::new(config.initial, t.rate))
            .collect();
        let phase = match config.lifecycle {
            Lifecycle::Continuous => Phase::Tracking,
            Lifecycle::WhileHovering { .. } => Phase::Idle,
        };
        Self {
            sample: config.initial,
            followers,
            phase,
            mapping: config.mapping,
            axes: config.axes,
            lifecycle: config.lifecycle,
        }
    }

    /// Record a pointer sample. Returns false when the sample was rejected.
    pub fn on_move(&mut self, client: Vec2, rect: Option<Rect>) -> bool {
        let Some(mapped) = self.mapping.map(client, rect) else {
            return false;
        };
        self.set_sample(self.axes.apply(mapped));
        true
    }

    /// Returns true when a ticker should be (re)started.
    pub fn on_enter(&mut self) -> bool {
        match self.lifecycle {
            Lifecycle::Continuous => false,
            Lifecycle::WhileHovering { .. } => {
                self.phase = Phase::Tracking;
                true
            }
        }
    }

    pub fn on_leave(&mut self) -> LeaveAction {
        match self.lifecycle {
            Lifecycle::Continuous => LeaveAction::None,
            Lifecycle::WhileHovering { on_leave } => {
                self.set_sample(Vec2::ZERO);
                match on_leave {
                    LeaveBehavior::Snap => {
                        self.phase = Phase::Idle;
                        LeaveAction::Stop
                    }
                    LeaveBehavior::Settle { .. } => {
                        self.phase = Phase::Settling;
                        LeaveAction::Settle
                    }
                }
            }
        }
    }

    pub fn tick(&mut self) -> TickOutcome {
        match self.phase {
            Phase::Idle => TickOutcome::Stop,
            Phase::Tracking => {
                self.step_all();
                TickOutcome::Continue
            }
            Phase::Settling => {
                self.step_all();
                let epsilon = match self.lifecycle {
                    Lifecycle::WhileHovering {
                        on_leave: LeaveBehavior::Settle { epsilon },
                    } => epsilon,
                    _ => 0.0,
                };
                if self.followers.iter().all(|f| f.is_settled(epsilon)) {
                    self.phase = Phase::Idle;
                    TickOutcome::Settled
                } else {
                    TickOutcome::Continue
                }
            }
        }
    }

    /// Style writes for every track, in track order.
    pub fn track_styles<'a>(
        &'a self,
        config: &'a HoverEffectConfig,
    ) -> impl Iterator<Item = (TrackTarget, Vec<StyleWrite>)> + 'a {
        config
            .tracks
            .iter()
            .zip(self.followers.iter())
            .map(|(track, f)| (track.target, track.response.styles(f.current)))
    }

    fn set_sample(&mut self, sample: Vec2) {
        self.sample = sample;
        for f in &mut self.followers {
            f.set_target(sample);
        }
    }

    fn step_all(&mut self) {
        for f in &mut self.followers {
            f.step();
        }
    }
}

/// Direct (un-damped) tilt for project cards from a card-local pointer position.
pub fn direct_tilt_styles(local: Vec2, size: Vec2) -> Vec<StyleWrite> {
    let center = size * 0.5;
    let rotate_x = (local.y - center.y) / PROJECT_TILT_DIVISOR;
    let rotate_y = (center.x - local.x) / PROJECT_TILT_DIVISOR;
    let percent = local / size * 100.0;
    vec![
        (
            "transform",
            format!(
                "perspective({}px) rotateX({}deg) rotateY({}deg) translateY({}px)",
                TILT_PERSPECTIVE_PX, rotate_x, rotate_y, PROJECT_TILT_LIFT_PX
            ),
        ),
        ("--mouse-x", format!("{}%", percent.x)),
        ("--mouse-y", format!("{}%", percent.y)),
    ]
}

pub fn direct_tilt_neutral() -> StyleWrite {
    (
        "transform",
        format!(
            "perspective({}px) rotateX(0) rotateY(0) translateY(0)",
            TILT_PERSPECTIVE_PX
        ),
    )
}
