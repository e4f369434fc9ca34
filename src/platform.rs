//! Platform-specific key bindings

use crossterm::event::KeyModifiers;

/// Platform-appropriate modifier for the send shortcut
/// - macOS: SUPER (Cmd key)
/// - Linux/Windows: CONTROL (Ctrl key)
#[cfg(target_os = "macos")]
pub const SEND_MODIFIER: KeyModifiers = KeyModifiers::SUPER;

#[cfg(not(target_os = "macos"))]
pub const SEND_MODIFIER: KeyModifiers = KeyModifiers::CONTROL;

/// Send shortcut display for form help text
/// Ctrl+S works on all platforms
#[cfg(target_os = "macos")]
pub const SEND_SHORTCUT: &str = "Cmd+S";

#[cfg(not(target_os = "macos"))]
pub const SEND_SHORTCUT: &str = "Ctrl+S";

/// Shortcut that collapses or restores the tab headers
#[cfg(target_os = "macos")]
pub const TABS_SHORTCUT: &str = "Cmd+T";

#[cfg(not(target_os = "macos"))]
pub const TABS_SHORTCUT: &str = "Ctrl+T";
