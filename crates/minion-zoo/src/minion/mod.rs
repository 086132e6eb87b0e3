//! Synthetic labelers ("minions") and their labeling policies.
//!
//! Every minion carries a [`MinionIdentity`] and implements [`Classifier`].
//! The concrete policies differ only in how they pick a label:
//!
//! - [`ExpertMinion`]: always returns the gold label
//! - [`AllTheSingleLabelsMinion`]: always returns one fixed label
//! - [`RandomMinion`]: draws a label uniformly from a label set
//! - [`NoisyMinion`]: returns the gold label with a per-class probability,
//!   otherwise the other binary label
//!
//! Each concrete type also has a typed inherent `classify` whose arguments
//! match exactly what its policy needs. The [`Classifier`] trait provides the
//! uniform entry point used when driving a mixed roster.

mod expert;
mod noisy;
mod random;
mod single_label;

pub use expert::ExpertMinion;
pub use noisy::{ConfusionMatrix, NoisyMinion};
pub use random::RandomMinion;
pub use single_label::AllTheSingleLabelsMinion;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{MinionError, Result};
use crate::label::{Classification, Label, SubjectId};

/// Numeric identity of a minion, unique within a run.
pub type MinionId = u32;

/// The identity fields shared by every minion.
///
/// On its own an identity is the abstract minion: it implements
/// [`Classifier`] without a labeling policy, so classifying with it fails
/// with [`MinionError::Unimplemented`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MinionIdentity {
    pub id: MinionId,
    pub name: String,
}

impl MinionIdentity {
    pub fn new(id: MinionId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

impl fmt::Display for MinionIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{} {}", self.id, self.name)
    }
}

/// Capability shared by all minions: classify a subject.
pub trait Classifier: fmt::Debug + Send {
    /// Identity of this minion.
    fn identity(&self) -> &MinionIdentity;

    fn id(&self) -> MinionId {
        self.identity().id
    }

    fn name(&self) -> &str {
        &self.identity().name
    }

    /// Short name of the labeling policy, used in reports.
    fn policy(&self) -> &'static str {
        "abstract"
    }

    /// Classify `subject_id`, given its gold label when the caller knows it.
    ///
    /// Policies that need the gold label fail with
    /// [`MinionError::MissingGoldLabel`] when it is `None`; policies that
    /// ignore it accept either. The default has no policy and always fails
    /// with [`MinionError::Unimplemented`].
    fn classify(
        &mut self,
        subject_id: SubjectId,
        gold_label: Option<Label>,
    ) -> Result<Classification> {
        let _ = (subject_id, gold_label);
        Err(MinionError::Unimplemented {
            name: self.name().to_string(),
        })
    }
}

impl Classifier for MinionIdentity {
    fn identity(&self) -> &MinionIdentity {
        self
    }
}

/// Unwrap the gold label for a policy that requires one.
fn require_gold(
    identity: &MinionIdentity,
    subject_id: SubjectId,
    gold_label: Option<Label>,
) -> Result<Label> {
    gold_label.ok_or_else(|| MinionError::MissingGoldLabel {
        name: identity.name.clone(),
        subject_id,
    })
}
