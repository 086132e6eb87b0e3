//! Roster configuration: the label space and the minions taking part in a run.
//!
//! Configurations are JSON documents:
//!
//! ```json
//! {
//!   "labels": [0, 1],
//!   "seed": 42,
//!   "minions": [
//!     { "name": "ada", "policy": "expert" },
//!     { "name": "bob", "policy": "single_label", "label": 0 },
//!     { "name": "cy", "policy": "random" },
//!     { "name": "dot", "policy": "noisy", "confusion_matrix": [0.9, 0.7] }
//!   ]
//! }
//! ```
//!
//! Minion ids are assigned by position, starting at 0.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use fastrand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{MinionError, Result};
use crate::label::Label;
use crate::minion::{
    AllTheSingleLabelsMinion, Classifier, ConfusionMatrix, ExpertMinion, MinionId, NoisyMinion,
    RandomMinion,
};
use crate::roster::Roster;

/// Labeling policy of a configured minion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "policy", rename_all = "snake_case")]
pub enum Policy {
    Expert,
    SingleLabel { label: Label },
    /// Draws from the configuration's `labels`.
    Random,
    Noisy { confusion_matrix: ConfusionMatrix },
}

/// One configured minion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MinionConfig {
    pub name: String,
    #[serde(flatten)]
    pub policy: Policy,
}

/// Top-level configuration for a run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZooConfig {
    /// Valid labels for the classification task.
    pub labels: Vec<Label>,
    /// Seed for every generator in the run (None = seeded from entropy).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    pub minions: Vec<MinionConfig>,
}

impl ZooConfig {
    /// Load and validate a configuration from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| MinionError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let config = Self::from_json(&contents)?;
        tracing::debug!(
            path = %path.display(),
            minions = config.minions.len(),
            labels = config.labels.len(),
            "loaded configuration"
        );
        Ok(config)
    }

    /// Parse and validate a configuration from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: ZooConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the label set is non-empty, minion names are unique, and
    /// noisy minions only appear in binary tasks.
    pub fn validate(&self) -> Result<()> {
        if self.labels.is_empty() {
            return Err(MinionError::EmptyLabelSet);
        }

        let mut seen = HashSet::new();
        for minion in &self.minions {
            if !seen.insert(minion.name.as_str()) {
                return Err(MinionError::DuplicateName(minion.name.clone()));
            }

            match &minion.policy {
                Policy::SingleLabel { label } if !self.labels.contains(label) => {
                    tracing::warn!(
                        minion = %minion.name,
                        label,
                        "single label is not in the configured label set"
                    );
                }
                Policy::Noisy { .. } => {
                    if let Some(&label) = self.labels.iter().find(|&&l| l > 1) {
                        return Err(MinionError::NonBinaryTask {
                            name: minion.name.clone(),
                            label,
                        });
                    }
                }
                _ => {}
            }
        }

        Ok(())
    }

    /// Minion names in roster order.
    pub fn names(&self) -> Vec<&str> {
        self.minions.iter().map(|m| m.name.as_str()).collect()
    }

    /// Build the roster described by this configuration.
    ///
    /// Every minion receives its own generator seeded from a master
    /// generator, so a seeded configuration always produces the same labels.
    pub fn build_roster(&self) -> Result<Roster> {
        self.validate()?;

        let mut master = match self.seed {
            Some(seed) => Rng::with_seed(seed),
            None => Rng::new(),
        };

        let roster = self
            .minions
            .iter()
            .enumerate()
            .map(|(idx, minion)| {
                let rng = Rng::with_seed(master.u64(..));
                self.build_minion(idx as MinionId, minion, rng)
            })
            .collect::<Result<Roster>>()?;

        tracing::debug!(minions = roster.len(), seed = ?self.seed, "built roster");
        Ok(roster)
    }

    fn build_minion(
        &self,
        id: MinionId,
        minion: &MinionConfig,
        rng: Rng,
    ) -> Result<Box<dyn Classifier>> {
        let name = minion.name.clone();
        let built: Box<dyn Classifier> = match &minion.policy {
            Policy::Expert => Box::new(ExpertMinion::new(id, name)),
            Policy::SingleLabel { label } => {
                Box::new(AllTheSingleLabelsMinion::new(id, name, *label))
            }
            Policy::Random => Box::new(RandomMinion::new(id, name, self.labels.clone(), rng)?),
            Policy::Noisy { confusion_matrix } => {
                Box::new(NoisyMinion::with_matrix(id, name, *confusion_matrix, rng))
            }
        };
        Ok(built)
    }
}
