// Shared interaction/scene tuning constants used by the core and the web frontend.

// Ring layout (inner is the most privileged band)
pub const RING_RADIUS_INNER: f32 = 4.0;
pub const RING_RADIUS_MIDDLE: f32 = 5.5;
pub const RING_RADIUS_OUTER: f32 = 7.0;
pub const RING_PADDING: f32 = 1.0; // how far a dragged token may overshoot the outer rings

// Animation
pub const LERP: f32 = 0.1;
pub const FLOAT_SPEED: f32 = 0.0004; // radians per millisecond
pub const FLOAT_AMPLITUDE: f32 = 0.05;

// Token scales
pub const DEFAULT_SCALE: f32 = 1.0;
pub const SELECTED_SCALE: f32 = 1.3;
pub const DRAG_SCALE: f32 = 1.3;
pub const HOVER_SCALE: f32 = 1.2;
pub const DESELECTED_SCALE: f32 = 0.5;

// Token opacity
pub const SELECTED_OPACITY: f32 = 1.0;
pub const ACTIVE_OPACITY: f32 = 0.9;
pub const DESELECTED_OPACITY: f32 = 0.3;

// Glow halo opacity
pub const GLOW_OPACITY: f32 = 0.2;
pub const GLOW_HIGHLIGHT_OPACITY: f32 = 0.4;

// Token geometry
pub const BUBBLE_RADIUS: f32 = 0.45;
pub const GLOW_RADIUS: f32 = 0.5;

// Camera
pub const CAMERA_FOV_DEGREES: f32 = 60.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 1000.0;
pub const CAMERA_Z_SMALL: f32 = 28.0; // viewport width <= 480
pub const CAMERA_Z_MEDIUM: f32 = 24.0; // viewport width <= 768
pub const CAMERA_Z_LARGE: f32 = 18.0;
pub const CAMERA_Z_MIN: f32 = 8.0;
pub const CAMERA_Z_MAX: f32 = 30.0;
pub const SMALL_VIEWPORT_MAX_WIDTH: f32 = 480.0;
pub const MEDIUM_VIEWPORT_MAX_WIDTH: f32 = 768.0;

// NDC depth used when unprojecting the pointer onto the wheel plane
pub const PROJECTION_Z: f32 = 0.5;

// Scene rotation
pub const INIT_ROT_X: f32 = std::f32::consts::PI - std::f32::consts::PI / 8.0;
pub const ROTATION_DAMPING: f32 = 0.95;
pub const ROTATION_SENSITIVITY: f32 = 0.005;
pub const TOUCH_ROTATION_SENSITIVITY: f32 = 0.008;
pub const AUTO_ROTATE_THRESHOLD: f32 = 0.001;
pub const AUTO_ROTATE_AMOUNT: f32 = 0.0005;

// Zoom (positive delta moves the camera away)
pub const ZOOM_SENSITIVITY: f32 = 0.01;
pub const TOUCH_ZOOM_SENSITIVITY: f32 = 0.03;

// Touch gesture thresholds (CSS pixels)
pub const TAP_MAX_DISTANCE: f32 = 10.0;
pub const SWIPE_MIN_DISTANCE: f32 = 50.0;
pub const SWIPE_ASPECT_RATIO: f32 = 1.5;

// Mobile layout
pub const MOBILE_PANEL_OFFSET_Y: f32 = 5.0; // wheel shift while the detail panel is open
pub const MIN_PANEL_HEIGHT_FRACTION: f32 = 0.5; // of viewport height
pub const MIN_HEIGHT_TOLERANCE: f32 = 10.0;
pub const SCROLL_BOTTOM_TOLERANCE: f32 = 5.0;
pub const CATEGORY_BAR_HEIGHT: f32 = 68.0;
