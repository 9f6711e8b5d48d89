use shared::share::QrOptions;

pub struct Config {
    pub app_name: &'static str,
    pub qr: QrOptions,
    pub results_refresh_ms: u32,
    pub login_delay_ms: u32,
    pub toast_ms: u32,
    pub copied_reset_ms: u32,
    pub hero_reveal_ms: u32,
    pub navbar_scroll_threshold: f64,
}

impl Config {
    pub const fn new() -> Self {
        Self {
            app_name: "QrNotes",
            qr: QrOptions::new(),
            results_refresh_ms: 5_000,
            login_delay_ms: 1_000,
            toast_ms: 3_000,
            copied_reset_ms: 2_000,
            hero_reveal_ms: 100,
            navbar_scroll_threshold: 20.0,
        }
    }
}

pub const CONFIG: Config = Config::new();
