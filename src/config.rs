//! Application-level configuration constants.

// Dataset
pub const DEFAULT_DATA_PATH: &str = "spacex_launch_dash.csv";
pub const COL_LAUNCH_SITE: &str = "Launch Site";
pub const COL_PAYLOAD_MASS: &str = "Payload Mass (kg)";
pub const COL_CLASS: &str = "class";

// Inputs
pub const ALL_SITES: &str = "All Sites";
pub const PAYLOAD_STEP_KG: f64 = 1000.0;

// Chart labels
pub const PIE_TITLE_ALL: &str = "Total successful launches";
pub const SCATTER_TITLE: &str = "Payload Success Rate by Payload Mass";
pub const SCATTER_X_LABEL: &str = "Payload Mass (kg)";
pub const SCATTER_Y_LABEL: &str = "Success / Failure";
pub const FAIL_LABEL: &str = "Fail";
pub const SUCCESS_LABEL: &str = "Success";

// Window
pub const WINDOW_TITLE: &str = "SpaceX Launch Records Dashboard";
pub const WINDOW_SIZE: [f32; 2] = [1200.0, 900.0];
pub const WINDOW_MIN_SIZE: [f32; 2] = [700.0, 500.0];
