//! Board-wide constants.
//!
//! Centralizes the default viewport and zoom values so settings, the board
//! and the tests agree on them.

use crate::types::WorldPoint;

// ============================================================================
// Viewport Defaults
// ============================================================================

/// Scale a freshly constructed board starts at
pub const DEFAULT_SCALE: f64 = 1.0;

/// World-space point shown at the screen's top-left on a fresh board
pub const DEFAULT_CORNER: WorldPoint = WorldPoint::new(1000, 1000);

// ============================================================================
// Zoom
// ============================================================================

/// Scale change applied by one modified wheel notch
pub const ZOOM_STEP: f64 = 0.2;

/// Scale floor. There is no ceiling.
pub const MIN_SCALE: f64 = 0.2;

/// Scales are kept at this many steps per unit (one decimal place)
pub const SCALE_QUANTUM: f64 = 10.0;

// ============================================================================
// Pointer Buttons
// ============================================================================

/// Button code of the primary (usually left) pointer button
pub const BUTTON_PRIMARY: i16 = 0;

/// Button code of the auxiliary (usually middle) pointer button
pub const BUTTON_AUXILIARY: i16 = 1;

/// Button code of the secondary (usually right) pointer button
pub const BUTTON_SECONDARY: i16 = 2;

// ============================================================================
// Settings
// ============================================================================

/// Directory name under the platform config dir
pub const SETTINGS_DIR_NAME: &str = "omegaboard";

/// Settings file name
pub const SETTINGS_FILE_NAME: &str = "settings.json";
