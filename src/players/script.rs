/// Fixed sequence of picks. The session ends when it runs out.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Script(VecDeque<Pick>);

impl Script {
    pub fn remaining(&self) -> usize {
        self.0.len()
    }
}

impl Source for Script {
    fn pick(&mut self) -> Option<Pick> {
        self.0.pop_front()
    }
}

impl From<Vec<Pick>> for Script {
    fn from(picks: Vec<Pick>) -> Self {
        Self(picks.into())
    }
}

impl FromIterator<Pick> for Script {
    fn from_iter<I: IntoIterator<Item = Pick>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// str isomorphism, one character per pick, e.g. "00110"
impl TryFrom<&str> for Script {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        s.trim()
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(|c| match c {
                '0' => Ok(Pick::Zero),
                '1' => Ok(Pick::One),
                _ => Err(format!("invalid script char: {}", c)),
            })
            .collect()
    }
}

use super::Source;
use crate::game::Pick;
use std::collections::VecDeque;
