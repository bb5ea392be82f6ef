use crate::constants::{KEY_STEP_COARSE, KEY_STEP_FINE};
use ripple_core::DistortionSettings;

/// What a key press does to the distortion controls.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ControlAction {
    Progress(f32),
    Scale(f32),
    Reset,
    ToggleHint,
}

#[inline]
pub fn action_for_key(key: &str, shift: bool) -> Option<ControlAction> {
    let step = if shift { KEY_STEP_COARSE } else { KEY_STEP_FINE };
    match key {
        "[" | "{" => Some(ControlAction::Progress(-step)),
        "]" | "}" => Some(ControlAction::Progress(step)),
        "-" | "_" => Some(ControlAction::Scale(-step)),
        "=" | "+" => Some(ControlAction::Scale(step)),
        "0" => Some(ControlAction::Reset),
        "h" | "H" => Some(ControlAction::ToggleHint),
        _ => None,
    }
}

impl ControlAction {
    /// Apply to `settings`; returns true when a slider value changed.
    pub fn apply(self, settings: &mut DistortionSettings) -> bool {
        let before = (settings.progress(), settings.scale());
        match self {
            ControlAction::Progress(d) => settings.nudge_progress(d),
            ControlAction::Scale(d) => settings.nudge_scale(d),
            ControlAction::Reset => settings.reset(),
            ControlAction::ToggleHint => return false,
        }
        before != (settings.progress(), settings.scale())
    }
}
