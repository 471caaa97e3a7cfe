use eframe::egui::Color32;

pub const WINDOW_TITLE: &str = "YouTube Downloader";

/// Bar tint after a submission-level failure.
pub const SUBMIT_ERROR_COLOR: Color32 = Color32::from_rgb(0x75, 0x35, 0xdc);
/// Bar tint after a poll-reported failure.
pub const POLL_ERROR_COLOR: Color32 = Color32::from_rgb(0x94, 0x35, 0xdc);

pub const SUCCESS_TEXT_COLOR: Color32 = Color32::from_rgb(0x2e, 0xcc, 0x71);
pub const ERROR_TEXT_COLOR: Color32 = Color32::from_rgb(0xe7, 0x4c, 0x3c);
