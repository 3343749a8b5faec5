//! The two parties whose mutual presence is measured.

use std::fmt;

/// Which side of the lesson an interval or event belongs to.
///
/// The derived `Ord` (`Pupil < Tutor`) is the last component of the sweep's
/// event ordering, so variant order is significant.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Participant {
    Pupil,
    Tutor,
}

impl fmt::Display for Participant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Participant::Pupil => "pupil",
            Participant::Tutor => "tutor",
        };
        f.write_str(s)
    }
}
