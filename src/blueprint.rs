//! Blueprint payload templates for locomotion shortcut tuning.
//!
//! Pure template substitution keyed by an action name. No statistics here;
//! magnitudes normally come from derived motion constants, with
//! engine-friendly defaults for standalone use.

use serde::Serialize;
use std::collections::BTreeMap;

/// Target control mode for generated values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Ik,
    Fk,
}

impl Mode {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "ik" => Some(Self::Ik),
            "fk" => Some(Self::Fk),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Ik => "ik",
            Self::Fk => "fk",
        }
    }
}

/// Shortcut action to scaffold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    NudgeUp,
    NudgeDown,
    WalkLeft,
    WalkRight,
    RunLeft,
    RunRight,
    Jump,
    CrouchEnter,
    CrouchExit,
    DashLeft,
    DashRight,
}

impl Action {
    pub const ALL: [Action; 11] = [
        Action::NudgeUp,
        Action::NudgeDown,
        Action::WalkLeft,
        Action::WalkRight,
        Action::RunLeft,
        Action::RunRight,
        Action::Jump,
        Action::CrouchEnter,
        Action::CrouchExit,
        Action::DashLeft,
        Action::DashRight,
    ];

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "nudge_up" => Some(Self::NudgeUp),
            "nudge_down" => Some(Self::NudgeDown),
            "walk_left" => Some(Self::WalkLeft),
            "walk_right" => Some(Self::WalkRight),
            "run_left" => Some(Self::RunLeft),
            "run_right" => Some(Self::RunRight),
            "jump" => Some(Self::Jump),
            "crouch_enter" => Some(Self::CrouchEnter),
            "crouch_exit" => Some(Self::CrouchExit),
            "dash_left" => Some(Self::DashLeft),
            "dash_right" => Some(Self::DashRight),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::NudgeUp => "nudge_up",
            Self::NudgeDown => "nudge_down",
            Self::WalkLeft => "walk_left",
            Self::WalkRight => "walk_right",
            Self::RunLeft => "run_left",
            Self::RunRight => "run_right",
            Self::Jump => "jump",
            Self::CrouchEnter => "crouch_enter",
            Self::CrouchExit => "crouch_exit",
            Self::DashLeft => "dash_left",
            Self::DashRight => "dash_right",
        }
    }
}

/// Template magnitudes in world units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Magnitudes {
    pub stride: f64,
    pub lift: f64,
    pub jump_height: f64,
    pub nudge_step: f64,
    pub crouch_drop: f64,
    pub dash_distance: f64,
}

impl Default for Magnitudes {
    fn default() -> Self {
        Self {
            stride: 34.0,
            lift: 26.0,
            jump_height: 56.0,
            nudge_step: 14.0,
            crouch_drop: 28.0,
            dash_distance: 64.0,
        }
    }
}

/// Root translation applied as the command impulse.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RootDelta {
    pub x: f64,
    pub y: f64,
}

/// Per-effector offset for IK mode.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct IkTarget {
    pub dx: f64,
    pub dy: f64,
}

/// One generated blueprint payload. Optional sections are omitted entirely
/// rather than serialized as null.
#[derive(Debug, Clone, Serialize)]
pub struct BlueprintPayload {
    pub root_delta: RootDelta,
    pub notes: Vec<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ik_targets: Option<BTreeMap<&'static str, IkTarget>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fk_rotations_deg: Option<BTreeMap<&'static str, f64>>,
}

fn ik(entries: &[(&'static str, f64, f64)]) -> Option<BTreeMap<&'static str, IkTarget>> {
    Some(
        entries
            .iter()
            .map(|&(name, dx, dy)| (name, IkTarget { dx, dy }))
            .collect(),
    )
}

fn fk(entries: &[(&'static str, f64)]) -> Option<BTreeMap<&'static str, f64>> {
    Some(entries.iter().copied().collect())
}

fn walk_payload(direction: f64, mode: Mode, stride: f64, lift: f64) -> BlueprintPayload {
    let mut payload = BlueprintPayload {
        root_delta: RootDelta {
            x: direction * stride * 0.55,
            y: 0.0,
        },
        notes: vec![
            "Use alternating gait phase state for repeated walk commands.",
            "Direction +1 means right/forward; -1 means left/backward.",
        ],
        ik_targets: None,
        fk_rotations_deg: None,
    };

    match mode {
        Mode::Ik => {
            payload.ik_targets = ik(&[
                ("swing_foot", direction * stride, -lift),
                ("plant_foot", -direction * stride * 0.3, 0.0),
                ("lead_hand", direction * stride * 0.5, -lift * 0.3),
                ("trail_hand", -direction * stride * 0.5, lift * 0.15),
            ]);
        }
        Mode::Fk => {
            payload.fk_rotations_deg = fk(&[
                ("l_hip", -34.0 * direction),
                ("r_hip", 10.0 * direction),
                ("l_knee", 24.0),
                ("r_knee", -18.0),
                ("l_shoulder", 22.0 * direction),
                ("r_shoulder", -22.0 * direction),
            ]);
        }
    }

    payload
}

fn run_payload(direction: f64, mode: Mode, stride: f64, lift: f64) -> BlueprintPayload {
    let run_stride = stride * 1.65;
    let run_lift = lift * 1.3;
    let mut payload = BlueprintPayload {
        root_delta: RootDelta {
            x: direction * run_stride * 0.54,
            y: 0.0,
        },
        notes: vec![
            "Use a separate run phase state from walk for cleaner cadence.",
            "Tune run_lift first if feet over-penetrate ground.",
        ],
        ik_targets: None,
        fk_rotations_deg: None,
    };

    match mode {
        Mode::Ik => {
            payload.ik_targets = ik(&[
                ("swing_foot", direction * run_stride, -run_lift),
                ("plant_foot", -direction * run_stride * 0.32, 0.0),
                ("lead_hand", direction * run_stride * 0.54, -run_lift * 0.42),
                ("trail_hand", -direction * run_stride * 0.54, run_lift * 0.2),
            ]);
        }
        Mode::Fk => {
            payload.fk_rotations_deg = fk(&[
                ("l_hip", -52.0 * direction),
                ("r_hip", 18.0 * direction),
                ("l_knee", 40.0),
                ("r_knee", -28.0),
                ("l_shoulder", 34.0 * direction),
                ("r_shoulder", -34.0 * direction),
            ]);
        }
    }

    payload
}

fn jump_payload(mode: Mode, jump_height: f64) -> BlueprintPayload {
    let mut payload = BlueprintPayload {
        root_delta: RootDelta {
            x: 0.0,
            y: -jump_height,
        },
        notes: vec![
            "Apply this as a tap impulse; use a separate landing command or gravity pass to settle.",
        ],
        ik_targets: None,
        fk_rotations_deg: None,
    };

    match mode {
        Mode::Ik => {
            payload.ik_targets = ik(&[
                ("l_foot", -8.0, -jump_height * 0.57),
                ("r_foot", 8.0, -jump_height * 0.57),
                ("l_hand", -12.0, -jump_height * 0.75),
                ("r_hand", 12.0, -jump_height * 0.75),
            ]);
        }
        Mode::Fk => {
            payload.fk_rotations_deg = fk(&[
                ("l_hip", -42.0),
                ("r_hip", 42.0),
                ("l_knee", 34.0),
                ("r_knee", -34.0),
                ("l_shoulder", -78.0),
                ("r_shoulder", 78.0),
            ]);
        }
    }

    payload
}

fn nudge_payload(dx: f64, dy: f64) -> BlueprintPayload {
    BlueprintPayload {
        root_delta: RootDelta { x: dx, y: dy },
        notes: vec!["Nudge commands should be repeatable and small in magnitude."],
        ik_targets: None,
        fk_rotations_deg: None,
    }
}

fn crouch_payload(enter: bool, crouch_drop: f64) -> BlueprintPayload {
    // Crouch always carries the FK table, regardless of requested mode.
    BlueprintPayload {
        root_delta: RootDelta {
            x: 0.0,
            y: if enter { crouch_drop } else { -crouch_drop },
        },
        notes: vec!["Treat crouch as a toggle pair: crouch_enter then crouch_exit."],
        ik_targets: None,
        fk_rotations_deg: fk(&[
            ("torso", if enter { 18.0 } else { 0.0 }),
            ("l_hip", if enter { -22.0 } else { -18.0 }),
            ("r_hip", if enter { 22.0 } else { 18.0 }),
            ("l_knee", if enter { 62.0 } else { 0.0 }),
            ("r_knee", if enter { -62.0 } else { 0.0 }),
        ]),
    }
}

fn dash_payload(direction: f64, dash_distance: f64) -> BlueprintPayload {
    // Dash always carries IK targets, regardless of requested mode.
    BlueprintPayload {
        root_delta: RootDelta {
            x: direction * dash_distance,
            y: -6.0,
        },
        notes: vec!["Dash should be a single non-repeating impulse."],
        ik_targets: ik(&[
            ("lead_foot", direction * (dash_distance * 0.53), -4.0),
            ("trail_foot", -direction * 12.0, 0.0),
            ("lead_hand", direction * 30.0, -12.0),
            ("trail_hand", -direction * 30.0, 6.0),
        ]),
        fk_rotations_deg: None,
    }
}

/// Build the payload for one action.
pub fn build_payload(action: Action, mode: Mode, m: &Magnitudes) -> BlueprintPayload {
    match action {
        Action::NudgeUp => nudge_payload(0.0, -m.nudge_step),
        Action::NudgeDown => nudge_payload(0.0, m.nudge_step),
        Action::WalkLeft => walk_payload(-1.0, mode, m.stride, m.lift),
        Action::WalkRight => walk_payload(1.0, mode, m.stride, m.lift),
        Action::RunLeft => run_payload(-1.0, mode, m.stride, m.lift),
        Action::RunRight => run_payload(1.0, mode, m.stride, m.lift),
        Action::Jump => jump_payload(mode, m.jump_height),
        Action::CrouchEnter => crouch_payload(true, m.crouch_drop),
        Action::CrouchExit => crouch_payload(false, m.crouch_drop),
        Action::DashLeft => dash_payload(-1.0, m.dash_distance),
        Action::DashRight => dash_payload(1.0, m.dash_distance),
    }
}
