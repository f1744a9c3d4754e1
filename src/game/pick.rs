/// A single binary choice, made by the human or predicted by the machine.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum Pick {
    #[default]
    Zero = 0,
    One = 1,
}

impl Pick {
    pub const fn all() -> [Pick; 2] {
        [Pick::Zero, Pick::One]
    }
    /// The other binary value.
    pub fn flip(self) -> Pick {
        match self {
            Pick::Zero => Pick::One,
            Pick::One => Pick::Zero,
        }
    }
}

/// bool isomorphism
impl From<bool> for Pick {
    fn from(b: bool) -> Pick {
        match b {
            false => Pick::Zero,
            true => Pick::One,
        }
    }
}
impl From<Pick> for bool {
    fn from(p: Pick) -> bool {
        p == Pick::One
    }
}

/// u8 isomorphism
impl TryFrom<u8> for Pick {
    type Error = String;
    fn try_from(n: u8) -> Result<Self, Self::Error> {
        match n {
            0 => Ok(Pick::Zero),
            1 => Ok(Pick::One),
            _ => Err(format!("invalid pick u8: {}", n)),
        }
    }
}
impl From<Pick> for u8 {
    fn from(p: Pick) -> u8 {
        p as u8
    }
}

/// str isomorphism
impl TryFrom<&str> for Pick {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim() {
            "0" => Ok(Pick::Zero),
            "1" => Ok(Pick::One),
            _ => Err(format!("invalid pick str: {}", s)),
        }
    }
}

impl std::fmt::Display for Pick {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", u8::from(*self))
    }
}

use serde::Deserialize;
use serde::Serialize;
