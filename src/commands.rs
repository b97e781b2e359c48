//! Command types for the Elm-style architecture
//!
//! Commands represent side effects that should be performed after an update:
//! writing the committed value back to the host and scheduling the short
//! visual cues that accompany insertions and rejections.

use std::time::Duration;

use serde::Serialize;

/// How long every visual cue lasts
pub const EFFECT_DURATION: Duration = Duration::from_millis(150);

/// A fire-and-forget visual cue on one chip.
///
/// Effects carry no state: dropping or reordering them never affects the
/// tag value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Effect {
    /// The chip at `index` matched a rejected duplicate
    DuplicatePulse { index: usize },
    /// The field is full; emitted once per current chip
    LimitPulse { index: usize },
    /// A newly inserted chip grows in from zero height
    GrowIn { index: usize },
}

impl Effect {
    /// Chip the cue applies to
    pub fn index(&self) -> usize {
        match self {
            Effect::DuplicatePulse { index }
            | Effect::LimitPulse { index }
            | Effect::GrowIn { index } => *index,
        }
    }

    pub fn duration(&self) -> Duration {
        EFFECT_DURATION
    }
}

/// Commands returned by `update`
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Cmd {
    /// No command - do nothing
    #[default]
    None,
    /// Write the new value to the host and fire its change notification
    CommitValue(String),
    /// Schedule a visual cue
    Effect(Effect),
    /// Execute multiple commands
    Batch(Vec<Cmd>),
}

impl Cmd {
    /// Combine commands, collapsing empty and single-element batches
    pub fn batch(cmds: Vec<Cmd>) -> Option<Cmd> {
        let mut cmds: Vec<Cmd> = cmds.into_iter().filter(|c| !c.is_none()).collect();
        match cmds.len() {
            0 => None,
            1 => cmds.pop(),
            _ => Some(Cmd::Batch(cmds)),
        }
    }

    pub fn is_none(&self) -> bool {
        match self {
            Cmd::None => true,
            Cmd::Batch(cmds) => cmds.iter().all(Cmd::is_none),
            _ => false,
        }
    }

    /// The committed value, if this command (or any nested one) commits
    pub fn committed_value(&self) -> Option<&str> {
        match self {
            Cmd::CommitValue(value) => Some(value),
            Cmd::Batch(cmds) => cmds.iter().rev().find_map(Cmd::committed_value),
            _ => None,
        }
    }

    /// All effects in execution order
    pub fn effects(&self) -> Vec<Effect> {
        let mut out = Vec::new();
        self.collect_effects(&mut out);
        out
    }

    fn collect_effects(&self, out: &mut Vec<Effect>) {
        match self {
            Cmd::Effect(effect) => out.push(*effect),
            Cmd::Batch(cmds) => cmds.iter().for_each(|c| c.collect_effects(out)),
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_batch_collapses() {
        assert_eq!(Cmd::batch(vec![]), None);
        assert_eq!(Cmd::batch(vec![Cmd::None, Cmd::Batch(vec![])]), None);
        assert_eq!(
            Cmd::batch(vec![Cmd::None, Cmd::CommitValue("a".into())]),
            Some(Cmd::CommitValue("a".into()))
        );
    }

    #[test]
    fn test_effects_and_commit_are_found_in_nested_batches() {
        let cmd = Cmd::Batch(vec![
            Cmd::Effect(Effect::DuplicatePulse { index: 0 }),
            Cmd::Batch(vec![
                Cmd::CommitValue("a,b".into()),
                Cmd::Effect(Effect::GrowIn { index: 1 }),
            ]),
        ]);
        assert_eq!(cmd.committed_value(), Some("a,b"));
        assert_eq!(
            cmd.effects(),
            vec![
                Effect::DuplicatePulse { index: 0 },
                Effect::GrowIn { index: 1 }
            ]
        );
    }

    #[test]
    fn test_effect_target_and_duration() {
        let effect = Effect::LimitPulse { index: 3 };
        assert_eq!(effect.index(), 3);
        assert_eq!(effect.duration(), Duration::from_millis(150));
    }
}
