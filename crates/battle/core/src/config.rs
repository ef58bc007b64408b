//! Battle tuning parameters.

use std::time::Duration;

/// Timing and threshold knobs for a battle session.
///
/// Defaults mirror the original tuning. Hosts may load overrides from a
/// config file (see `battle-content`); the session treats the values as
/// immutable once constructed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BattleConfig {
    /// Initiative level at which a combatant is granted a turn. Checked
    /// with `>=`: accumulation can overshoot between frames.
    pub initiative_threshold: f32,
    /// Delay before an AI-controlled actor commits to its action.
    pub opponent_delay: Duration,
    /// How long a fainted or captured combatant stays on the field so the
    /// exit animation can play before the replacement appears.
    pub removal_delay: Duration,
    /// Stand-in for the attack animation length: damage applies when this
    /// window completes.
    pub attack_animation: Duration,
    /// Duration of the actor highlight flash.
    pub highlight_duration: Duration,
    /// Capture succeeds strictly below this fraction of max health.
    pub capture_threshold: f32,
    /// Experience awarded per level of a fainted opponent, split across the
    /// active player combatants.
    pub xp_per_level: f32,
}

impl Default for BattleConfig {
    fn default() -> Self {
        Self {
            initiative_threshold: 100.0,
            opponent_delay: Duration::from_millis(600),
            removal_delay: Duration::from_millis(600),
            attack_animation: Duration::from_millis(600),
            highlight_duration: Duration::from_millis(300),
            capture_threshold: 0.9,
            xp_per_level: 100.0,
        }
    }
}
