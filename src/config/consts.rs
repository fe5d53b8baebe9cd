// src/config/consts.rs

// Resources (paths as served from the site root)
pub const JOB_DATA_PATH: &str = "/data/job_data.csv";
pub const AUGMENTED_JOB_DATA_PATH: &str = "/data/augmented_final_data.csv";
pub const SECTOR_DATA_PATH: &str = "/data/sector_data.csv";
pub const SKILLS_DATA_PATH: &str = "/data/skills_data.csv";
pub const TIMELINE_EVENTS_PATH: &str = "/data/timeline_events.csv";

/// Prefix stripped when a resource path is resolved against a local directory.
pub const DATA_PREFIX: &str = "/data/";
pub const DEFAULT_DATA_DIR: &str = "data";
pub const SOURCE_ENV: &str = "JOB_OUTLOOK_SOURCE";

// Risk tiers: low < 30 <= medium < 70 <= high
pub const MEDIUM_RISK_FROM: f64 = 30.0;
pub const HIGH_RISK_FROM: f64 = 70.0;

pub const LOW_RISK_COLOR: &str = "#4CAF50";
pub const MEDIUM_RISK_COLOR: &str = "#FFC107";
pub const HIGH_RISK_COLOR: &str = "#E76F6F";

// Palettes
pub const ACCENT_COLOR: &str = "#9b87f5";
pub const GAUGE_TRACK_COLOR: &str = "#e9ecef";
pub const BUBBLE_PALETTE: [&str; 7] = [
    "#9381FF", "#0EA5E9", "#F87171", "#10B981", "#FB923C", "#6366F1", "#EC4899",
];
pub const HEATMAP_LOW_COLOR: &str = "#f7fbff";
pub const HEATMAP_HIGH_COLOR: &str = "#9381FF";
pub const HEATMAP_LIGHT_TEXT: &str = "#fff";
pub const HEATMAP_DARK_TEXT: &str = "#333";
pub const RADAR_COLORS: [&str; 2] = ["#9381FF", "#10B981"];
pub const TREND_FALLBACK_COLOR: &str = "#9381FF";
pub const TREND_COLORS: [(&str, &str); 3] = [
    ("Jobs Lost", "#F87171"),
    ("Jobs Created", "#10B981"),
    ("Workers Needing Reskilling", "#9381FF"),
];

// Chart defaults
pub const GAUGE_SIZE: f64 = 220.0;
pub const GAUGE_RADIUS: f64 = 80.0;
pub const GAUGE_STROKE: f64 = 30.0;
pub const BAR_HEIGHT: f64 = 300.0;
pub const BAR_HEADROOM: f64 = 1.1;
pub const BAND_PADDING: f64 = 0.1;
pub const HEATMAP_WIDTH: f64 = 600.0;
pub const HEATMAP_HEIGHT: f64 = 500.0;
pub const BUBBLE_WIDTH: f64 = 600.0;
pub const BUBBLE_HEIGHT: f64 = 500.0;
pub const BUBBLE_PADDING: f64 = 2.0;
pub const RADAR_SIZE: f64 = 500.0;
pub const RADAR_MAX_VALUE: f64 = 100.0;
pub const RADAR_LABEL_OFFSET: f64 = 20.0;
pub const TREND_WIDTH: f64 = 700.0;
pub const TREND_HEIGHT: f64 = 400.0;
pub const ISOTYPE_ROWS: usize = 5;
pub const ISOTYPE_COLUMNS: usize = 10;
