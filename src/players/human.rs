/// Interactive player typing picks at a terminal prompt.
/// Re-prompts on anything but `0`, `1`, or `q`; `q` ends the session.
#[derive(Debug, Default)]
pub struct Human;

impl Source for Human {
    fn pick(&mut self) -> Option<Pick> {
        match Self::prompt() {
            Ok(input) if Self::quits(&input) => None,
            Ok(input) => Pick::try_from(input.as_str()).ok(),
            Err(e) => {
                log::warn!("[human] prompt closed: {}", e);
                None
            }
        }
    }
}

impl Human {
    fn quits(input: &str) -> bool {
        input.trim().eq_ignore_ascii_case("q")
    }
    fn prompt() -> dialoguer::Result<String> {
        Input::<String>::new()
            .with_prompt("Your pick [0/1, q to quit]")
            .validate_with(|i: &String| -> Result<(), String> {
                match Self::quits(i) || Pick::try_from(i.as_str()).is_ok() {
                    true => Ok(()),
                    false => Err(String::from("Enter 0 or 1")),
                }
            })
            .report(false)
            .interact_text()
    }
}

use super::Source;
use crate::game::Pick;
use dialoguer::Input;
