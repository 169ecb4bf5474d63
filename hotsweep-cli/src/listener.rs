use anyhow::{Context, Result, anyhow};
use global_hotkey::hotkey::HotKey;
use global_hotkey::{GlobalHotKeyEvent, GlobalHotKeyManager, HotKeyState};
use tracing::{debug, info};

use hotsweep_core::{CleanupTask, FolderCleaner};

use crate::config::CleanerConfig;

/// Register the configured hotkey and dispatch presses to the cleanup
/// task. Blocks until the process is stopped.
///
/// The dispatch loop itself never does cleanup work: each press is
/// handed to the single-flight [`CleanupTask`], which runs it on a
/// background thread and swallows (logs) every failure, so the listener
/// stays alive to accept future presses.
pub fn start_hotkey_listener(config: CleanerConfig) -> Result<()> {
    let hotkey = parse_hotkey(&config.hotkey)?;
    let hotkey_label = config.hotkey.clone();
    let policy = config.into_policy();

    info!(
        "Hotkey '{}' armed. Target folder: {}",
        hotkey_label,
        policy.target_folder.display()
    );
    info!("Press Ctrl+C in this terminal to stop the listener.");

    let cleaner = FolderCleaner::new(policy);
    let task = CleanupTask::new(move || {
        info!("Hotkey pressed; starting cleanup.");
        cleaner.run()
    });

    let manager = GlobalHotKeyManager::new()
        .map_err(|err| anyhow!("failed to initialize the global hotkey manager: {err}"))?;
    manager
        .register(hotkey)
        .map_err(|err| anyhow!("failed to register hotkey '{hotkey_label}': {err}"))?;

    let receiver = GlobalHotKeyEvent::receiver();
    loop {
        let event = receiver.recv().context("hotkey event channel closed")?;
        debug!("Hotkey event: {event:?}");
        if event.id == hotkey.id() && event.state == HotKeyState::Pressed {
            task.trigger();
        }
    }
}

/// Parse a "modifier+modifier+key" combination such as "ctrl+alt+delete".
fn parse_hotkey(raw: &str) -> Result<HotKey> {
    raw.parse::<HotKey>()
        .map_err(|err| anyhow!("invalid hotkey '{raw}': {err}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_original_default_hotkey() {
        assert!(parse_hotkey("ctrl+alt+delete").is_ok());
    }

    #[test]
    fn test_parse_letter_and_digit_keys() {
        assert!(parse_hotkey("ctrl+shift+f").is_ok());
        assert!(parse_hotkey("alt+5").is_ok());
    }

    #[test]
    fn test_parse_rejects_unknown_keys() {
        let err = parse_hotkey("ctrl+alt+notakey").unwrap_err();
        assert!(err.to_string().contains("ctrl+alt+notakey"));
    }

    #[test]
    fn test_same_combination_parses_to_the_same_id() {
        let first = parse_hotkey("ctrl+alt+delete").unwrap();
        let second = parse_hotkey("CTRL+ALT+DELETE").unwrap();
        assert_eq!(first.id(), second.id());
    }
}
