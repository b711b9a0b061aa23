//! Upgrade-selection policies.
//!
//! While the engine sits in `LevelUp` the host asks its selector once per
//! frame. `None` means undecided; the run stays frozen until a choice comes
//! back.

use swarmfall_core::upgrades::{UpgradeKind, UpgradeOption};

pub trait UpgradeSelector {
    fn choose(&mut self, options: &[UpgradeOption]) -> Option<usize>;
}

/// Always the first option.
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstChoice;

impl UpgradeSelector for FirstChoice {
    fn choose(&mut self, options: &[UpgradeOption]) -> Option<usize> {
        if options.is_empty() {
            None
        } else {
            Some(0)
        }
    }
}

/// New weapons first, then Might, then Sharpen, then whatever is first.
#[derive(Debug, Clone, Copy, Default)]
pub struct PreferWeapons;

impl PreferWeapons {
    fn rank(kind: &UpgradeKind) -> u8 {
        match kind {
            UpgradeKind::NewWeapon { .. } => 0,
            UpgradeKind::Might { .. } => 1,
            UpgradeKind::Sharpen => 2,
            UpgradeKind::Swiftness { .. } => 3,
            UpgradeKind::Heal { .. } => 4,
        }
    }
}

impl UpgradeSelector for PreferWeapons {
    fn choose(&mut self, options: &[UpgradeOption]) -> Option<usize> {
        options
            .iter()
            .enumerate()
            .min_by_key(|(_, o)| Self::rank(&o.kind))
            .map(|(i, _)| i)
    }
}

/// Picks replayed from a list; `None` once the list runs out.
#[derive(Debug, Clone, Default)]
pub struct ScriptedChoices {
    picks: std::collections::VecDeque<usize>,
}

impl ScriptedChoices {
    pub fn new(picks: impl IntoIterator<Item = usize>) -> Self {
        Self {
            picks: picks.into_iter().collect(),
        }
    }
}

impl UpgradeSelector for ScriptedChoices {
    fn choose(&mut self, options: &[UpgradeOption]) -> Option<usize> {
        if options.is_empty() {
            return None;
        }
        self.picks.pop_front()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn menu() -> Vec<UpgradeOption> {
        vec![
            UpgradeOption::new("Second Wind", "", UpgradeKind::Heal { amount: 50.0 }),
            UpgradeOption::new("Might", "", UpgradeKind::Might { multiplier: 1.1 }),
            UpgradeOption::new(
                "Triple Bow",
                "",
                UpgradeKind::NewWeapon {
                    weapon_id: "multishot_bow".into(),
                },
            ),
        ]
    }

    #[test]
    fn test_first_choice() {
        assert_eq!(FirstChoice.choose(&menu()), Some(0));
        assert_eq!(FirstChoice.choose(&[]), None);
    }

    #[test]
    fn test_prefer_weapons() {
        let mut policy = PreferWeapons;
        assert_eq!(policy.choose(&menu()), Some(2));
        assert_eq!(policy.choose(&menu()[..2]), Some(1));
    }

    #[test]
    fn test_scripted_runs_dry() {
        let mut policy = ScriptedChoices::new([1]);
        assert_eq!(policy.choose(&menu()), Some(1));
        assert_eq!(policy.choose(&menu()), None);
    }
}
