//! Polyhedral dice and the fixed Dungeon Dice catalog.
//!
//! The catalog holds the seven standard dice (d4 through d100) in display
//! order. Rolling draws from an injectable [`FaceSource`], so any `rand::Rng`
//! works and tests can script exact faces.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Face counts of the catalog dice, in display order.
pub const CATALOG_FACES: [u32; 7] = [4, 6, 8, 10, 12, 20, 100];

static CATALOG: [Die; 7] = [
    Die { faces: 4 },
    Die { faces: 6 },
    Die { faces: 8 },
    Die { faces: 10 },
    Die { faces: 12 },
    Die { faces: 20 },
    Die { faces: 100 },
];

/// Error type for die construction and lookup.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DiceError {
    #[error("Invalid face count: {0} (a die needs at least one face)")]
    InvalidFaceCount(u32),
    #[error("No {0}-sided die in the catalog")]
    UnknownDie(u32),
    #[error("Invalid die notation: {0}")]
    InvalidNotation(String),
    #[error("Rolled value {value} is outside 1..={faces}")]
    ValueOutOfRange { value: u32, faces: u32 },
}

/// A polyhedral die, identified by its number of faces.
///
/// A `Die` always has at least one face; the constructor enforces it so
/// rolling never has to check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Die {
    faces: u32,
}

impl Die {
    pub fn new(faces: u32) -> Result<Self, DiceError> {
        if faces == 0 {
            return Err(DiceError::InvalidFaceCount(faces));
        }
        Ok(Die { faces })
    }

    pub fn faces(&self) -> u32 {
        self.faces
    }

    /// Button label, e.g. `"20-sided"`.
    pub fn label(&self) -> String {
        format!("{}-sided", self.faces)
    }

    /// Roll using the thread-local generator.
    pub fn roll(&self) -> RollResult {
        self.roll_with(&mut rand::thread_rng())
    }

    /// Roll with a specific face source (useful for testing).
    pub fn roll_with<S: FaceSource + ?Sized>(&self, source: &mut S) -> RollResult {
        // RollResult values always lie in 1..=faces.
        let value = source.face(self.faces).clamp(1, self.faces);
        tracing::debug!(faces = self.faces, value, "rolled die");
        RollResult { die: *self, value }
    }
}

impl TryFrom<u32> for Die {
    type Error = DiceError;

    fn try_from(faces: u32) -> Result<Self, Self::Error> {
        Die::new(faces)
    }
}

impl From<Die> for u32 {
    fn from(die: Die) -> u32 {
        die.faces
    }
}

impl fmt::Display for Die {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-sided", self.faces)
    }
}

/// Parses `"20"`, `"d20"`, `"D20"` or `"20-sided"`.
impl FromStr for Die {
    type Err = DiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim().to_lowercase();
        let digits = trimmed
            .strip_prefix('d')
            .or_else(|| trimmed.strip_suffix("-sided"))
            .unwrap_or(trimmed.as_str());

        let faces: u32 = digits
            .parse()
            .map_err(|_| DiceError::InvalidNotation(s.to_string()))?;
        Die::new(faces)
    }
}

/// Source of face values for rolls.
///
/// Implementations must return a value in `1..=faces`. Every `rand::Rng`
/// is a uniform face source.
pub trait FaceSource {
    fn face(&mut self, faces: u32) -> u32;
}

impl<R: Rng + ?Sized> FaceSource for R {
    fn face(&mut self, faces: u32) -> u32 {
        self.gen_range(1..=faces)
    }
}

/// The seven catalog dice in display order.
pub fn all_dice() -> &'static [Die] {
    &CATALOG
}

/// Look up a catalog die by face count.
pub fn find(faces: u32) -> Result<Die, DiceError> {
    CATALOG
        .iter()
        .find(|d| d.faces == faces)
        .copied()
        .ok_or(DiceError::UnknownDie(faces))
}

/// Outcome of a single roll. The value always lies in `1..=die.faces()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawRollResult")]
pub struct RollResult {
    die: Die,
    value: u32,
}

/// Unchecked serialized form of a roll.
#[derive(Deserialize)]
struct RawRollResult {
    die: Die,
    value: u32,
}

impl TryFrom<RawRollResult> for RollResult {
    type Error = DiceError;

    fn try_from(raw: RawRollResult) -> Result<Self, Self::Error> {
        RollResult::new(raw.die, raw.value)
    }
}

impl RollResult {
    pub fn new(die: Die, value: u32) -> Result<Self, DiceError> {
        if value == 0 || value > die.faces {
            return Err(DiceError::ValueOutOfRange {
                value,
                faces: die.faces,
            });
        }
        Ok(RollResult { die, value })
    }

    pub fn die(&self) -> Die {
        self.die
    }

    pub fn value(&self) -> u32 {
        self.value
    }

    /// Result message shown after a roll.
    pub fn message(&self) -> String {
        format_result(self)
    }
}

impl fmt::Display for RollResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "You rolled a {} on a {}-sided dice",
            self.value,
            self.die.faces()
        )
    }
}

/// Format a roll as `"You rolled a {value} on a {faces}-sided dice"`.
pub fn format_result(result: &RollResult) -> String {
    result.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::ScriptedFaces;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_catalog_order() {
        let faces: Vec<u32> = all_dice().iter().map(Die::faces).collect();
        assert_eq!(faces, CATALOG_FACES);
        assert_eq!(all_dice(), all_dice());
    }

    #[test]
    fn test_labels() {
        assert_eq!(find(4).unwrap().label(), "4-sided");
        assert_eq!(find(100).unwrap().to_string(), "100-sided");
    }

    #[test]
    fn test_zero_faces_rejected() {
        assert_eq!(Die::new(0), Err(DiceError::InvalidFaceCount(0)));
        assert!(Die::new(1).is_ok());
    }

    #[test]
    fn test_find_unknown() {
        assert_eq!(find(7), Err(DiceError::UnknownDie(7)));
    }

    #[test]
    fn test_parse_notation() {
        assert_eq!("d20".parse::<Die>().unwrap().faces(), 20);
        assert_eq!("D6".parse::<Die>().unwrap().faces(), 6);
        assert_eq!(" 12 ".parse::<Die>().unwrap().faces(), 12);
        assert_eq!("100-sided".parse::<Die>().unwrap().faces(), 100);
        assert!(matches!(
            "twenty".parse::<Die>(),
            Err(DiceError::InvalidNotation(_))
        ));
        assert_eq!("d0".parse::<Die>(), Err(DiceError::InvalidFaceCount(0)));
    }

    #[test]
    fn test_format_result() {
        let result = RollResult::new(find(20).unwrap(), 7).unwrap();
        assert_eq!(format_result(&result), "You rolled a 7 on a 20-sided dice");
    }

    #[test]
    fn test_roll_result_range_checked() {
        let d4 = find(4).unwrap();
        assert!(RollResult::new(d4, 1).is_ok());
        assert!(RollResult::new(d4, 4).is_ok());
        assert_eq!(
            RollResult::new(d4, 99),
            Err(DiceError::ValueOutOfRange { value: 99, faces: 4 })
        );
        assert_eq!(
            RollResult::new(d4, 0),
            Err(DiceError::ValueOutOfRange { value: 0, faces: 4 })
        );
    }

    #[test]
    fn test_roll_result_serde_validates_value() {
        let result = RollResult::new(find(4).unwrap(), 3).unwrap();
        let json = serde_json::to_string(&result).unwrap();
        assert_eq!(json, r#"{"die":4,"value":3}"#);
        assert_eq!(serde_json::from_str::<RollResult>(&json).unwrap(), result);

        assert!(serde_json::from_str::<RollResult>(r#"{"die":4,"value":99}"#).is_err());
        assert!(serde_json::from_str::<RollResult>(r#"{"die":4,"value":0}"#).is_err());
        assert!(serde_json::from_str::<RollResult>(r#"{"die":0,"value":1}"#).is_err());
    }

    #[test]
    fn test_roll_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for die in all_dice() {
            for _ in 0..1000 {
                let result = die.roll_with(&mut rng);
                assert!(result.value() >= 1 && result.value() <= die.faces());
                assert_eq!(result.die(), *die);
            }
        }
    }

    #[test]
    fn test_scripted_roll() {
        let mut faces = ScriptedFaces::new(vec![3, 17]);
        let d20 = find(20).unwrap();
        assert_eq!(d20.roll_with(&mut faces).value(), 3);
        assert_eq!(d20.roll_with(&mut faces).value(), 17);
        assert_eq!(d20.roll_with(&mut faces).value(), 3);
    }

    #[test]
    fn test_out_of_range_source_is_clamped() {
        let mut faces = ScriptedFaces::new(vec![0, 9]);
        let d4 = find(4).unwrap();
        assert_eq!(d4.roll_with(&mut faces).value(), 1);
        assert_eq!(d4.roll_with(&mut faces).value(), 4);
    }

    #[test]
    fn test_serde_validates_faces() {
        let die = find(8).unwrap();
        assert_eq!(serde_json::to_string(&die).unwrap(), "8");
        assert_eq!(serde_json::from_str::<Die>("8").unwrap(), die);
        assert!(serde_json::from_str::<Die>("0").is_err());
    }
}
