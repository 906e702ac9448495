use serde::{Deserialize, Serialize};

use crate::EngineError;

/// Menu section a dish belongs to.
///
/// The set is closed: text coming from the user is matched exactly
/// (case-sensitive) against [`Course::name`], anything else is rejected at the
/// parsing boundary. Surrounding whitespace is ignored, so `" Main "` parses
/// as [`Course::Main`] while `"main"` and `"Mains"` are rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Course {
    Starter,
    Main,
    Dessert,
}

impl Course {
    /// Every course, in menu order.
    pub const ALL: [Course; 3] = [Course::Starter, Course::Main, Course::Dessert];

    /// Canonical course name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Course::Starter => "Starter",
            Course::Main => "Main",
            Course::Dessert => "Dessert",
        }
    }

    /// Exact lookup by canonical name.
    pub(crate) fn lookup(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|course| course.name() == value)
    }
}

impl core::fmt::Display for Course {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<&str> for Course {
    type Error = EngineError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let trimmed = value.trim();
        Self::lookup(trimmed).ok_or_else(|| EngineError::InvalidCourse(trimmed.to_string()))
    }
}

impl core::str::FromStr for Course {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_canonical_names_only() {
        assert_eq!(Course::try_from("Starter"), Ok(Course::Starter));
        assert_eq!(Course::try_from(" Main "), Ok(Course::Main));
        assert_eq!("Dessert".parse::<Course>(), Ok(Course::Dessert));
        assert_eq!(
            Course::try_from("starter"),
            Err(EngineError::InvalidCourse("starter".to_string()))
        );
        assert_eq!(
            Course::try_from("Mains"),
            Err(EngineError::InvalidCourse("Mains".to_string()))
        );
    }
}
