//! The board-owned box table.

use std::sync::atomic::{AtomicU64, Ordering};

use indexmap::IndexMap;
use plaza_core::{BoxId, BoxInfo, BoxRoster};

use crate::config::BoxSpec;

/// A live box. Only the board holds these; observers get [`BoxInfo`] copies.
pub(crate) struct Agent {
    spec: BoxSpec,
    /// Monotonic contention counter.
    level: AtomicU64,
}

impl Agent {
    fn info(&self) -> BoxInfo {
        BoxInfo::new(
            self.spec.id,
            self.spec.group,
            self.level.load(Ordering::Acquire),
        )
    }
}

/// Every box on the board, indexed by id. Fixed at construction.
pub(crate) struct Roster {
    agents: IndexMap<BoxId, Agent>,
}

impl Roster {
    pub fn new(specs: &[BoxSpec]) -> Self {
        let agents = specs
            .iter()
            .map(|spec| {
                (
                    spec.id,
                    Agent {
                        spec: *spec,
                        level: AtomicU64::new(0),
                    },
                )
            })
            .collect();
        Self { agents }
    }

    pub fn contains(&self, id: BoxId) -> bool {
        self.agents.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.agents.len()
    }

    /// Bump the level of `id`. Unknown ids (including the vacant
    /// sentinel) are ignored.
    pub fn raise_level(&self, id: BoxId) {
        if let Some(agent) = self.agents.get(&id) {
            agent.level.fetch_add(1, Ordering::AcqRel);
        }
    }

    pub fn info(&self, id: BoxId) -> Option<BoxInfo> {
        self.agents.get(&id).map(Agent::info)
    }

    pub fn snapshot(&self) -> BoxRoster {
        self.agents.iter().map(|(id, a)| (*id, a.info())).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn levels_start_at_zero_and_only_rise() {
        let roster = Roster::new(&[BoxSpec::new(0, 0), BoxSpec::new(1, 0)]);
        assert_eq!(roster.info(BoxId(0)).unwrap().level(), 0);
        roster.raise_level(BoxId(0));
        roster.raise_level(BoxId(0));
        roster.raise_level(BoxId::NONE);
        assert_eq!(roster.info(BoxId(0)).unwrap().level(), 2);
        assert_eq!(roster.info(BoxId(1)).unwrap().level(), 0);
    }

    #[test]
    fn snapshot_keeps_roster_order() {
        let roster = Roster::new(&[BoxSpec::new(5, 0), BoxSpec::new(2, 1), BoxSpec::new(9, 1)]);
        let ids: Vec<BoxId> = roster.snapshot().keys().copied().collect();
        assert_eq!(ids, vec![BoxId(5), BoxId(2), BoxId(9)]);
        assert_eq!(roster.len(), 3);
        assert!(roster.contains(BoxId(2)));
        assert!(!roster.contains(BoxId(3)));
    }
}
