//! Noisy minion: a binary channel that flips the gold label with a
//! class-dependent probability.

use fastrand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{MinionError, Result};
use crate::label::{BinaryLabel, Classification, Label, SubjectId};

use super::{Classifier, MinionId, MinionIdentity, require_gold};

/// Per-class probability of reproducing the gold label.
///
/// Element 0 applies to subjects whose gold label is 0, element 1 to
/// subjects whose gold label is 1. Every element lies in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "[f64; 2]", into = "[f64; 2]")]
pub struct ConfusionMatrix([f64; 2]);

impl ConfusionMatrix {
    /// Build a matrix from the class-0 and class-1 accuracies.
    ///
    /// Fails with [`MinionError::InvalidConfusionMatrix`] on the first
    /// element outside `[0, 1]` (NaN included).
    pub fn new(p0: f64, p1: f64) -> Result<Self> {
        let elements = [p0, p1];
        if let Some((index, &value)) = elements
            .iter()
            .enumerate()
            .find(|(_, p)| !(0.0..=1.0).contains(*p))
        {
            tracing::debug!(index, value, "rejected confusion matrix");
            return Err(MinionError::InvalidConfusionMatrix { index, value });
        }
        Ok(Self(elements))
    }

    /// Always reproduces the gold label.
    pub fn astute() -> Self {
        Self([1.0, 1.0])
    }

    /// Never reproduces the gold label.
    pub fn obtuse() -> Self {
        Self([0.0, 0.0])
    }

    /// Probability of reproducing a gold label of class `label`.
    pub fn accuracy(&self, label: BinaryLabel) -> f64 {
        self.0[label.index()]
    }

    pub fn as_array(&self) -> [f64; 2] {
        self.0
    }
}

impl TryFrom<[f64; 2]> for ConfusionMatrix {
    type Error = MinionError;

    fn try_from([p0, p1]: [f64; 2]) -> Result<Self> {
        Self::new(p0, p1)
    }
}

impl From<ConfusionMatrix> for [f64; 2] {
    fn from(matrix: ConfusionMatrix) -> Self {
        matrix.0
    }
}

/// A minion that returns the gold label with the probability given by its
/// confusion matrix, and the other binary label otherwise.
///
/// Only defined for binary classification. `[1, 1]` behaves like an
/// [`ExpertMinion`](super::ExpertMinion), `[0, 0]` is always wrong, and
/// unequal elements model a minion biased towards one class.
#[derive(Debug)]
pub struct NoisyMinion {
    identity: MinionIdentity,
    confusion_matrix: ConfusionMatrix,
    rng: Rng,
}

impl NoisyMinion {
    /// Create a noisy minion from raw confusion matrix elements.
    ///
    /// Fails with [`MinionError::InvalidConfusionMatrix`] if any element is
    /// outside `[0, 1]`.
    pub fn new(
        id: MinionId,
        name: impl Into<String>,
        confusion_matrix: [f64; 2],
        rng: Rng,
    ) -> Result<Self> {
        let confusion_matrix = ConfusionMatrix::try_from(confusion_matrix)?;
        Ok(Self::with_matrix(id, name, confusion_matrix, rng))
    }

    /// Create a noisy minion from an already validated matrix.
    pub fn with_matrix(
        id: MinionId,
        name: impl Into<String>,
        confusion_matrix: ConfusionMatrix,
        rng: Rng,
    ) -> Self {
        Self {
            identity: MinionIdentity::new(id, name),
            confusion_matrix,
            rng,
        }
    }

    pub fn confusion_matrix(&self) -> ConfusionMatrix {
        self.confusion_matrix
    }

    /// Classify the subject, keeping `gold_label` with probability
    /// `confusion_matrix[gold_label]` and flipping it otherwise.
    pub fn classify(
        &mut self,
        subject_id: SubjectId,
        gold_label: BinaryLabel,
    ) -> Classification {
        let label = if self.rng.f64() < self.confusion_matrix.accuracy(gold_label) {
            gold_label
        } else {
            gold_label.flipped()
        };
        Classification::new(subject_id, label)
    }
}

impl Classifier for NoisyMinion {
    fn identity(&self) -> &MinionIdentity {
        &self.identity
    }

    fn policy(&self) -> &'static str {
        "noisy"
    }

    fn classify(
        &mut self,
        subject_id: SubjectId,
        gold_label: Option<Label>,
    ) -> Result<Classification> {
        let gold = require_gold(&self.identity, subject_id, gold_label)?;
        let gold = BinaryLabel::try_from(gold)?;
        Ok(NoisyMinion::classify(self, subject_id, gold))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::minion::ExpertMinion;

    const GOLD: [BinaryLabel; 2] = [BinaryLabel::Zero, BinaryLabel::One];

    #[test]
    fn test_confusion_matrix_bounds() {
        assert!(ConfusionMatrix::new(0.0, 1.0).is_ok());
        assert!(ConfusionMatrix::new(0.25, 0.75).is_ok());

        let err = ConfusionMatrix::new(1.5, 0.2).unwrap_err();
        assert!(matches!(
            err,
            MinionError::InvalidConfusionMatrix { index: 0, value } if value == 1.5
        ));

        let err = ConfusionMatrix::new(0.5, -0.1).unwrap_err();
        assert!(matches!(err, MinionError::InvalidConfusionMatrix { index: 1, .. }));

        assert!(ConfusionMatrix::new(f64::NAN, 0.5).is_err());
    }

    #[test]
    fn test_one_bad_element_is_enough() {
        // Only one side of the range is violated; still rejected.
        assert!(ConfusionMatrix::new(0.5, 1.01).is_err());
        assert!(ConfusionMatrix::new(-0.01, 0.5).is_err());
    }

    #[test]
    fn test_confusion_matrix_serde() {
        let matrix: ConfusionMatrix = serde_json::from_str("[0.9, 0.6]").unwrap();
        assert_eq!(matrix.accuracy(BinaryLabel::Zero), 0.9);
        assert_eq!(matrix.accuracy(BinaryLabel::One), 0.6);
        assert_eq!(serde_json::to_string(&matrix).unwrap(), "[0.9,0.6]");

        assert!(serde_json::from_str::<ConfusionMatrix>("[1.5, 0.2]").is_err());
    }

    #[test]
    fn test_noisy_rejects_invalid_matrix() {
        let err = NoisyMinion::new(5, "n", [1.5, 0.2], Rng::with_seed(0)).unwrap_err();
        assert!(matches!(err, MinionError::InvalidConfusionMatrix { .. }));
    }

    #[test]
    fn test_astute_noisy_matches_expert() {
        let expert = ExpertMinion::new(1, "e");
        let mut noisy = NoisyMinion::with_matrix(
            2,
            "n",
            ConfusionMatrix::astute(),
            Rng::with_seed(3),
        );

        for subject in 0..200 {
            for gold in GOLD {
                assert_eq!(
                    noisy.classify(subject, gold),
                    expert.classify(subject, gold.into())
                );
            }
        }
    }

    #[test]
    fn test_obtuse_noisy_always_flips() {
        let mut noisy = NoisyMinion::with_matrix(
            2,
            "n",
            ConfusionMatrix::obtuse(),
            Rng::with_seed(3),
        );
        for subject in 0..200 {
            for gold in GOLD {
                let c = noisy.classify(subject, gold);
                assert_eq!(c.label, Label::from(gold.flipped()));
            }
        }
    }

    #[test]
    fn test_biased_noisy_is_class_dependent() {
        // Always right on class 1, always wrong on class 0.
        let mut noisy = NoisyMinion::new(2, "n", [0.0, 1.0], Rng::with_seed(8)).unwrap();
        for subject in 0..100 {
            assert_eq!(noisy.classify(subject, BinaryLabel::Zero).label, 1);
            assert_eq!(noisy.classify(subject, BinaryLabel::One).label, 1);
        }
    }

    #[test]
    fn test_noisy_accuracy_matches_matrix() {
        let mut noisy = NoisyMinion::new(2, "n", [0.8, 0.3], Rng::with_seed(21)).unwrap();
        let trials = 20_000;

        let kept_zero = (0..trials)
            .filter(|&s| noisy.classify(s, BinaryLabel::Zero).label == 0)
            .count() as f64
            / trials as f64;
        let kept_one = (0..trials)
            .filter(|&s| noisy.classify(s, BinaryLabel::One).label == 1)
            .count() as f64
            / trials as f64;

        assert!((kept_zero - 0.8).abs() < 0.02, "class 0 accuracy {kept_zero}");
        assert!((kept_one - 0.3).abs() < 0.02, "class 1 accuracy {kept_one}");
    }

    #[test]
    fn test_noisy_uniform_entry_point() {
        let mut noisy = NoisyMinion::with_matrix(
            2,
            "n",
            ConfusionMatrix::astute(),
            Rng::with_seed(0),
        );

        assert_eq!(
            Classifier::classify(&mut noisy, 4, Some(1)).unwrap(),
            Classification::new(4, 1u32)
        );
        assert!(matches!(
            Classifier::classify(&mut noisy, 4, Some(2)).unwrap_err(),
            MinionError::NonBinaryLabel(2)
        ));
        assert!(matches!(
            Classifier::classify(&mut noisy, 4, None).unwrap_err(),
            MinionError::MissingGoldLabel { .. }
        ));
    }
}
