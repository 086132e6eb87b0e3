//! Expert minion: always reproduces the gold label.

use crate::error::Result;
use crate::label::{Classification, Label, SubjectId};

use super::{Classifier, MinionId, MinionIdentity, require_gold};

/// A minion that classifies every subject with its gold label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpertMinion {
    identity: MinionIdentity,
}

impl ExpertMinion {
    pub fn new(id: MinionId, name: impl Into<String>) -> Self {
        Self {
            identity: MinionIdentity::new(id, name),
        }
    }

    /// Classify the subject with the supplied gold label.
    ///
    /// The gold label must be valid for the classification task; it is
    /// returned as given.
    pub fn classify(&self, subject_id: SubjectId, gold_label: Label) -> Classification {
        Classification::new(subject_id, gold_label)
    }
}

impl Classifier for ExpertMinion {
    fn identity(&self) -> &MinionIdentity {
        &self.identity
    }

    fn policy(&self) -> &'static str {
        "expert"
    }

    fn classify(
        &mut self,
        subject_id: SubjectId,
        gold_label: Option<Label>,
    ) -> Result<Classification> {
        let gold = require_gold(&self.identity, subject_id, gold_label)?;
        Ok(ExpertMinion::classify(self, subject_id, gold))
    }
}
