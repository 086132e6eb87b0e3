//! Uniform-random minion.

use fastrand::Rng;

use crate::error::{MinionError, Result};
use crate::label::{Classification, Label, SubjectId};

use super::{Classifier, MinionId, MinionIdentity};

/// A minion that labels each subject with a label drawn uniformly at
/// random from a fixed label set.
///
/// Draws are independent and with replacement. The generator is owned by the
/// minion, so seeding it makes the sequence of labels reproducible.
#[derive(Debug)]
pub struct RandomMinion {
    identity: MinionIdentity,
    labels: Vec<Label>,
    rng: Rng,
}

impl RandomMinion {
    /// Create a random minion choosing from `labels`.
    ///
    /// Fails with [`MinionError::EmptyLabelSet`] if `labels` is empty.
    pub fn new(
        id: MinionId,
        name: impl Into<String>,
        labels: Vec<Label>,
        rng: Rng,
    ) -> Result<Self> {
        if labels.is_empty() {
            return Err(MinionError::EmptyLabelSet);
        }

        Ok(Self {
            identity: MinionIdentity::new(id, name),
            labels,
            rng,
        })
    }

    pub fn labels(&self) -> &[Label] {
        &self.labels
    }

    pub fn classify(&mut self, subject_id: SubjectId) -> Classification {
        let idx = self.rng.usize(..self.labels.len());
        Classification::new(subject_id, self.labels[idx])
    }
}

impl Classifier for RandomMinion {
    fn identity(&self) -> &MinionIdentity {
        &self.identity
    }

    fn policy(&self) -> &'static str {
        "random"
    }

    fn classify(
        &mut self,
        subject_id: SubjectId,
        _gold_label: Option<Label>,
    ) -> Result<Classification> {
        Ok(RandomMinion::classify(self, subject_id))
    }
}
