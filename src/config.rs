//! Cross-cutting constants for the studio flow.

/// localStorage key holding the user's tunnel URL.
pub const ENDPOINT_STORAGE_KEY: &str = "ngrok_url";

/// Sub-path appended to the saved tunnel URL for generation requests.
pub const GENERATE_PATH: &str = "/generate";

// Fixed generation parameters sent with every request. These are tuned for
// the Colab backend and are not user-configurable from the studio.
pub const NUM_INFERENCE_STEPS: u32 = 12;
pub const NUM_FRAMES: u32 = 8;
pub const USE_INTERPOLATION: bool = true;
