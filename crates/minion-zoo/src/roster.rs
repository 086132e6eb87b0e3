//! An ordered population of minions driven together.

use crate::minion::Classifier;

/// The minions taking part in one run, in id order.
#[derive(Debug, Default)]
pub struct Roster {
    minions: Vec<Box<dyn Classifier>>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a minion to the end of the roster.
    pub fn push(&mut self, minion: impl Classifier + 'static) {
        self.minions.push(Box::new(minion));
    }

    pub fn len(&self) -> usize {
        self.minions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.minions.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &dyn Classifier> {
        self.minions.iter().map(|m| m.as_ref())
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Box<dyn Classifier>> {
        self.minions.iter_mut()
    }

    /// Look a minion up by name.
    pub fn get(&self, name: &str) -> Option<&dyn Classifier> {
        self.iter().find(|m| m.name() == name)
    }
}

impl FromIterator<Box<dyn Classifier>> for Roster {
    fn from_iter<I: IntoIterator<Item = Box<dyn Classifier>>>(iter: I) -> Self {
        Self {
            minions: iter.into_iter().collect(),
        }
    }
}
