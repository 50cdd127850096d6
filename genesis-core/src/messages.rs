//! Fixed console copy.

pub const FETCH_ERROR: &str = "Failed to contact the Genesis Archives.";
pub const TRIGGER_ERROR: &str = "The simulation encountered a temporal rift (Error).";

pub const APP_TITLE: &str = "Genesis Economy Regulator";
pub const SYSTEM_STATUS: &str = "SYSTEM STATUS: ONLINE";
pub const FOOTER_COPY: &str = "Genesis Core v1.0 // Authored by AI Engineer";

pub const TRIGGER_IDLE: &str = "ADVANCE SIMULATION (1 MONTH)";
pub const TRIGGER_BUSY: &str = "CALCULATING ECONOMIC SHIFTS...";

pub const LOADING: &str = "Scanning Economy State...";
pub const ERROR_HEADING: &str = "⚠️ SYSTEM ERROR";
pub const RETRY: &str = "Retry Connection";

pub const ACTIVE_DIRECTIVE: &str = "Active Directive";
pub const OBJECTIVE: &str = "Objective";
pub const REWARD: &str = "Reward";
