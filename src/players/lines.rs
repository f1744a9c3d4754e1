/// Reads one pick per line. A line other than `0` or `1`, end of input,
/// or a read error ends the session.
#[derive(Debug)]
pub struct Lines<R>(R);

impl<R: BufRead> Lines<R> {
    pub fn new(reader: R) -> Self {
        Self(reader)
    }
}

impl Lines<StdinLock<'static>> {
    pub fn stdin() -> Self {
        Self(std::io::stdin().lock())
    }
}

impl<R: BufRead> Source for Lines<R> {
    fn pick(&mut self) -> Option<Pick> {
        let ref mut line = String::new();
        match self.0.read_line(line) {
            Ok(0) => {
                log::debug!("[lines] end of input");
                None
            }
            Ok(_) => match Pick::try_from(line.as_str()) {
                Ok(pick) => Some(pick),
                Err(e) => {
                    log::debug!("[lines] ending session: {}", e);
                    None
                }
            },
            Err(e) => {
                log::warn!("[lines] read failed: {}", e);
                None
            }
        }
    }
}

use super::Source;
use crate::game::Pick;
use std::io::BufRead;
use std::io::StdinLock;
