//! Blocking yes/no confirmation.

use anyhow::Result;
use dialoguer::Confirm;

/// Ask the user to confirm an action, blocking until they answer.
///
/// Returns exactly the choice the user made; bare Enter means "no".
pub fn confirm_action(message: &str) -> Result<bool> {
    let confirmed = Confirm::new()
        .with_prompt(message)
        .default(false)
        .interact()?;
    Ok(confirmed)
}
