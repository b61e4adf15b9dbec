//! Presentation marker flags.
//!
//! A set of string flags on an entity that rendering and styling systems can
//! key off. The attraction observers toggle the configured "attracted" flag
//! here, keeping presentation decoupled from the state machine.

use bevy_ecs::prelude::Component;
use rustc_hash::FxHashSet;

/// Set of presentation flags attached to an entity.
#[derive(Debug, Clone, Component, Default)]
pub struct Markers {
    flags: FxHashSet<String>,
}

impl Markers {
    pub fn set(&mut self, flag: impl Into<String>) {
        self.flags.insert(flag.into());
    }

    pub fn clear(&mut self, flag: &str) {
        self.flags.remove(flag);
    }

    pub fn has(&self, flag: &str) -> bool {
        self.flags.contains(flag)
    }

    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_clear_has() {
        let mut markers = Markers::default();
        assert!(!markers.has("attracted"));
        markers.set("attracted");
        assert!(markers.has("attracted"));
        markers.clear("attracted");
        assert!(!markers.has("attracted"));
        assert!(markers.is_empty());
    }

    #[test]
    fn test_clear_missing_flag_is_noop() {
        let mut markers = Markers::default();
        markers.clear("attracted");
        assert!(markers.is_empty());
    }
}
