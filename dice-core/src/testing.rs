//! Testing utilities.
//!
//! [`ScriptedFaces`] replaces the random generator with a fixed sequence so
//! rolls and messages can be asserted exactly.

use crate::dice::FaceSource;

/// A face source that returns scripted values in order, cycling at the end.
///
/// Values are returned as given; [`Die::roll_with`](crate::dice::Die::roll_with)
/// clamps anything outside `1..=faces`.
#[derive(Debug, Clone)]
pub struct ScriptedFaces {
    values: Vec<u32>,
    index: usize,
}

impl ScriptedFaces {
    pub fn new(values: Vec<u32>) -> Self {
        Self { values, index: 0 }
    }

    /// Always return the same face.
    pub fn constant(value: u32) -> Self {
        Self::new(vec![value])
    }

    /// Number of faces handed out so far.
    pub fn calls(&self) -> usize {
        self.index
    }
}

impl FaceSource for ScriptedFaces {
    fn face(&mut self, _faces: u32) -> u32 {
        if self.values.is_empty() {
            return 1;
        }
        let value = self.values[self.index % self.values.len()];
        self.index += 1;
        value
    }
}
