use maze_sim::game_tree_search::{AgentIndex, MAX_AGENT};

/// Configuration for the adversarial search engines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchConfig {
    /// Lookahead depth in full rounds; every agent moves once per round.
    pub depth: u8,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self { depth: 2 }
    }
}

/// Role of the agent to move at a game tree node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Role {
    Max,
    Min,
    Chance,
}

/// How adversary nodes back their values up the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum AdversaryModel {
    /// Adversaries minimize, optionally with alpha-beta pruning.
    Minimizing { prune: bool },
    /// Adversaries choose uniformly at random; their nodes average.
    Uniform,
}

impl AdversaryModel {
    #[inline]
    pub(crate) fn role_of(self, agent: AgentIndex) -> Role {
        if agent == MAX_AGENT {
            Role::Max
        } else {
            match self {
                AdversaryModel::Minimizing { .. } => Role::Min,
                AdversaryModel::Uniform => Role::Chance,
            }
        }
    }

    #[inline]
    pub(crate) fn prunes(self) -> bool {
        matches!(self, AdversaryModel::Minimizing { prune: true })
    }
}
