//! minion-zoo: synthetic labelers for simulating crowd-sourced classification.
//!
//! A *minion* assigns a label to a subject according to a fixed policy. A
//! roster of minions run over gold-labelled subjects produces simulated
//! labeling data for evaluating label-aggregation algorithms.
//!
//! # Policies
//!
//! - **Expert**: returns the gold label
//! - **Single label**: returns the same label for every subject
//! - **Random**: draws a label uniformly from the label set
//! - **Noisy** (binary only): keeps the gold label with a per-class
//!   probability given by a confusion matrix, flips it otherwise
//!
//! # Example
//!
//! ```
//! use fastrand::Rng;
//! use minion_zoo::{AllTheSingleLabelsMinion, BinaryLabel, Classification, ExpertMinion, NoisyMinion};
//!
//! let expert = ExpertMinion::new(1, "e");
//! assert_eq!(expert.classify(7, 1), Classification::new(7, 1u32));
//!
//! let zeros = AllTheSingleLabelsMinion::new(2, "a", 0);
//! assert_eq!(zeros.classify(9).label, 0);
//!
//! let mut noisy = NoisyMinion::new(3, "n", [0.9, 0.8], Rng::with_seed(42)).unwrap();
//! let c = noisy.classify(5, BinaryLabel::One);
//! assert_eq!(c.subject_id, 5);
//! ```

pub mod config;
pub mod error;
pub mod label;
pub mod minion;
pub mod roster;
pub mod simulation;

pub use config::{MinionConfig, Policy, ZooConfig};
pub use error::{MinionError, Result};
pub use label::{BinaryLabel, Classification, Label, SubjectId};
pub use minion::{
    AllTheSingleLabelsMinion, Classifier, ConfusionMatrix, ExpertMinion, MinionId,
    MinionIdentity, NoisyMinion, RandomMinion,
};
pub use roster::Roster;
pub use simulation::{LabelRecord, MinionSummary, Simulation, Subject, random_subjects};
