/// "Copied to clipboard" indicator for the contact widget
use std::time::Duration;

/// How long the confirmation stays visible
pub const COPIED_TTL: Duration = Duration::from_millis(1800);

/// Tracks whether the confirmation is visible.
///
/// Every successful copy bumps the generation; a dismissal only applies to
/// the generation it was scheduled for, so the latest copy always gets its
/// full display time.
#[derive(Debug, Clone, Default)]
pub struct CopyIndicator {
    visible: bool,
    generation: u64,
}

impl CopyIndicator {
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Record a successful copy; returns the generation to dismiss later
    pub fn copied(&mut self) -> u64 {
        self.generation = self.generation.wrapping_add(1);
        self.visible = true;
        self.generation
    }

    /// Scheduled dismissal; stale generations are ignored
    pub fn expire(&mut self, generation: u64) {
        if generation == self.generation {
            self.visible = false;
        }
    }
}

/// Write text to the system clipboard
pub async fn copy_to_clipboard(text: String) -> Result<(), String> {
    tokio::task::spawn_blocking(move || {
        arboard::Clipboard::new()
            .and_then(|mut clipboard| clipboard.set_text(text))
            .map_err(|e| e.to_string())
    })
    .await
    .map_err(|e| format!("Task join error: {}", e))?
}

/// Resolve after the indicator lifetime with the generation to expire
pub async fn dismiss_after(generation: u64) -> u64 {
    tokio::time::sleep(COPIED_TTL).await;
    generation
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_copy_then_expire() {
        let mut indicator = CopyIndicator::default();
        assert!(!indicator.is_visible());

        let generation = indicator.copied();
        assert!(indicator.is_visible());

        indicator.expire(generation);
        assert!(!indicator.is_visible());

        // Expiring twice is harmless
        indicator.expire(generation);
        assert!(!indicator.is_visible());
    }

    #[test]
    fn test_later_copy_wins() {
        let mut indicator = CopyIndicator::default();
        let first = indicator.copied();
        let second = indicator.copied();

        indicator.expire(first);
        assert!(indicator.is_visible());

        indicator.expire(second);
        assert!(!indicator.is_visible());
    }
}
