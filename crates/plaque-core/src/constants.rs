// Tuning constants shared by the core and the web front-end.

// Camera
pub const CAMERA_DISTANCE: f32 = 200.0; // eye Z; plaques live on z = 0
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 1000.0;

// Hover animation
pub const HOVER_DURATION_SEC: f32 = 0.5;
pub const HOVER_ON: f32 = 1.0;
pub const HOVER_OFF: f32 = 0.0;
pub const DEFAULT_FOCUS: [f32; 2] = [0.5, 0.5]; // plaque centre in uv space

// Render surface
pub const MAX_PIXEL_RATIO: f64 = 2.0;
pub const MSAA_SAMPLES: u32 = 4; // 1 disables multisampling

// DOM lookup
pub const DEFAULT_IMAGE_SELECTOR: &str = "img";
pub const DEFAULT_CANVAS_ID: &str = "canvas";

// Smooth scroll
pub const SCROLL_LERP_RATE: f32 = 10.0; // per second, exponential approach
pub const SCROLL_SNAP_PX: f32 = 0.5;
