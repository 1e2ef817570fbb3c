// Play field dimensions (field units, y grows downward)
pub const FIELD_WIDTH: f64 = 288.0;
pub const FIELD_HEIGHT: f64 = 512.0;

// Bird physics
pub const BIRD_X: f64 = 50.0;
pub const GRAVITY: f64 = 0.5;
pub const FLAP_VELOCITY: f64 = -8.0;

// Default bird sprite size, used as the collision box
pub const BIRD_SPRITE_WIDTH: f64 = 34.0;
pub const BIRD_SPRITE_HEIGHT: f64 = 24.0;

// Pipes
pub const PIPE_WIDTH: f64 = 52.0;
pub const PIPE_SPEED: f64 = 2.0;
pub const PIPE_GAP: f64 = 100.0;
pub const PIPE_TOP_MIN: f64 = 50.0;
pub const PIPE_TOP_RANGE: f64 = 200.0;
pub const PIPE_SPAWN_INTERVAL: u64 = 100;

// Frame clock
pub const FRAME_INTERVAL_MS: u64 = 16;
