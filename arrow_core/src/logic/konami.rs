use std::collections::VecDeque;

pub const KONAMI_CODE: [&str; 10] = [
    "ArrowUp",
    "ArrowUp",
    "ArrowDown",
    "ArrowDown",
    "ArrowLeft",
    "ArrowRight",
    "ArrowLeft",
    "ArrowRight",
    "b",
    "a",
];

/// Rolling window over the last ten raw key names.
#[derive(Debug, Clone, Default)]
pub struct KonamiTracker {
    window: VecDeque<String>,
}

impl KonamiTracker {
    #[must_use]
    pub fn new() -> Self {
        Self {
            window: VecDeque::with_capacity(KONAMI_CODE.len()),
        }
    }

    /// Records `key` and reports whether the window now spells the code.
    pub fn push(&mut self, key: &str) -> bool {
        if self.window.len() == KONAMI_CODE.len() {
            self.window.pop_front();
        }
        self.window.push_back(key.to_string());
        self.matches()
    }

    fn matches(&self) -> bool {
        self.window.len() == KONAMI_CODE.len()
            && self.window.iter().zip(KONAMI_CODE).all(|(k, c)| k == c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_code_unlocks_on_last_key() {
        let mut tracker = KonamiTracker::new();
        let (last, head) = KONAMI_CODE.split_last().unwrap();
        for key in head {
            assert!(!tracker.push(key));
        }
        assert!(tracker.push(last));
    }

    #[test]
    fn test_code_after_noise() {
        let mut tracker = KonamiTracker::new();
        for key in ["x", "ArrowUp", "Enter", "a"] {
            tracker.push(key);
        }
        let hits: Vec<bool> = KONAMI_CODE.iter().map(|k| tracker.push(k)).collect();
        assert_eq!(hits.iter().filter(|h| **h).count(), 1);
        assert_eq!(hits.last(), Some(&true));
    }

    #[test]
    fn test_case_sensitive() {
        let mut tracker = KonamiTracker::new();
        for key in &KONAMI_CODE[..8] {
            tracker.push(key);
        }
        tracker.push("B");
        assert!(!tracker.push("A"));
    }
}
