//! Drive a roster over gold-labelled subjects and collect the labels.

use std::io::Write;

use fastrand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{MinionError, Result};
use crate::label::{Label, SubjectId};
use crate::minion::MinionId;
use crate::roster::Roster;

/// A subject together with its ground-truth label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subject {
    pub id: SubjectId,
    pub gold_label: Label,
}

impl Subject {
    pub fn new(id: SubjectId, gold_label: Label) -> Self {
        Self { id, gold_label }
    }
}

/// Generate `count` subjects with ids `0..count` and gold labels drawn
/// uniformly from `labels`.
pub fn random_subjects(count: usize, labels: &[Label], rng: &mut Rng) -> Result<Vec<Subject>> {
    if labels.is_empty() {
        return Err(MinionError::EmptyLabelSet);
    }

    Ok((0..count as SubjectId)
        .map(|id| Subject::new(id, labels[rng.usize(..labels.len())]))
        .collect())
}

/// One label assigned by one minion to one subject.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelRecord {
    pub minion_id: MinionId,
    pub minion_name: String,
    pub policy: String,
    pub subject_id: SubjectId,
    pub label: Label,
    pub gold_label: Label,
}

impl LabelRecord {
    pub fn is_correct(&self) -> bool {
        self.label == self.gold_label
    }
}

/// Per-minion accuracy over a simulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MinionSummary {
    pub minion_id: MinionId,
    pub minion_name: String,
    pub policy: String,
    pub classified: usize,
    pub correct: usize,
}

impl MinionSummary {
    /// Fraction of subjects labelled with their gold label (0.0 when none).
    pub fn accuracy(&self) -> f64 {
        if self.classified == 0 {
            0.0
        } else {
            self.correct as f64 / self.classified as f64
        }
    }
}

/// The labels produced by a roster over a set of subjects.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Simulation {
    pub records: Vec<LabelRecord>,
    /// One entry per roster position, filled in as each minion finishes.
    #[serde(default)]
    pub summaries: Vec<MinionSummary>,
}

impl Simulation {
    /// Ask every minion in the roster to classify every subject.
    ///
    /// Records are ordered by minion, then by subject.
    pub fn run(roster: &mut Roster, subjects: &[Subject]) -> Result<Self> {
        let mut records = Vec::with_capacity(roster.len() * subjects.len());
        let mut summaries = Vec::with_capacity(roster.len());

        for minion in roster.iter_mut() {
            let mut summary = MinionSummary {
                minion_id: minion.id(),
                minion_name: minion.name().to_string(),
                policy: minion.policy().to_string(),
                classified: 0,
                correct: 0,
            };

            for subject in subjects {
                let classification = minion.classify(subject.id, Some(subject.gold_label))?;
                let record = LabelRecord {
                    minion_id: summary.minion_id,
                    minion_name: summary.minion_name.clone(),
                    policy: summary.policy.clone(),
                    subject_id: classification.subject_id,
                    label: classification.label,
                    gold_label: subject.gold_label,
                };

                summary.classified += 1;
                if record.is_correct() {
                    summary.correct += 1;
                }
                records.push(record);
            }

            tracing::debug!(
                minion = %summary.minion_name,
                subjects = subjects.len(),
                "minion finished"
            );
            summaries.push(summary);
        }

        Ok(Self { records, summaries })
    }

    /// Accuracy summary per minion, in roster order.
    pub fn summarize(&self) -> &[MinionSummary] {
        &self.summaries
    }

    /// Write the records as CSV with a header row.
    pub fn write_csv<W: Write>(&self, writer: W) -> Result<()> {
        let mut csv_writer = csv::Writer::from_writer(writer);
        for record in &self.records {
            csv_writer.serialize(record)?;
        }
        csv_writer.flush().map_err(csv::Error::from)?;
        Ok(())
    }

    /// Write the records as a pretty-printed JSON array.
    pub fn write_json<W: Write>(&self, writer: W) -> Result<()> {
        serde_json::to_writer_pretty(writer, &self.records)?;
        Ok(())
    }
}
