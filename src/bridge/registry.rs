//! Mount target registry.
//!
//! Widgets are constructed against a mount target (a screen region, a
//! window handle). Instead of stashing transient UI handles onto shared
//! session state, the layout layer registers each target here under a
//! stable logical name, and coordinators look targets up when deciding
//! whether a widget can be constructed.

use std::collections::HashMap;

/// Registry of mount targets keyed by stable logical names.
///
/// Re-registering a name updates the handle in place (layout frameworks
/// re-report targets every frame); the first registration of a name is what
/// typically triggers one-time widget construction.
#[derive(Debug, Default)]
pub struct MountRegistry<H> {
    targets: HashMap<String, H>,
}

impl<H> MountRegistry<H> {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self { targets: HashMap::new() }
    }

    /// Registers or refreshes a mount target.
    ///
    /// Returns true if the name was newly registered.
    pub fn register(&mut self, name: &str, handle: H) -> bool {
        self.targets.insert(name.to_string(), handle).is_none()
    }

    /// Returns the current handle for a name, if registered.
    pub fn get(&self, name: &str) -> Option<&H> {
        self.targets.get(name)
    }

    /// Returns true if a target is registered under the name.
    pub fn contains(&self, name: &str) -> bool {
        self.targets.contains_key(name)
    }

    /// Removes a target, e.g. when its screen region disappears.
    pub fn remove(&mut self, name: &str) -> Option<H> {
        self.targets.remove(name)
    }
}
