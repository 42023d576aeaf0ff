pub const DEFAULT_WIDTH: i32 = 405;           // Default window width (portrait phone)
pub const DEFAULT_HEIGHT: i32 = 720;          // Default window height
pub const FPS: u32 = 60;                      // Frames per second

pub const SWAY_ANGLE: f32 = 45.0;             // Parachute swings between -SWAY_ANGLE and +SWAY_ANGLE (degrees)
pub const SWAY_DURATION: f32 = 2.0;           // Duration of one sway leg (seconds)

pub const RISE_DURATION: f32 = 15.0;          // Duration of one cloud rise (seconds)
pub const MAX_CLOUD_DELAY: f32 = 10.0;        // Upper bound (exclusive) of the delay before each rise (seconds)
pub const CLOUD_SIZES: [f32; 4] = [50.0, 100.0, 150.0, 200.0];
pub const FRONT_CLOUD_SIZE: f32 = 200.0;      // Clouds of this size are drawn over the parachute

pub const PARACHUTE_SIZE: f32 = 100.0;
pub const PARACHUTE_BOTTOM: f32 = 0.6;        // Parachute bottom edge, as a fraction of screen height

pub const SKY_TOP: (u8, u8, u8) = (0x9b, 0xe2, 0xfe);
pub const SKY_BOTTOM: (u8, u8, u8) = (0x67, 0xd1, 0xfb);

pub const PARACHUTE_FILE: &str = "parachute.png";
pub const CLOUD_FILE: &str = "cloud.png";
