pub const CONTAINER: &str = "container mx-auto px-6 py-16 max-w-5xl";
pub const CONTAINER_SM: &str = "container mx-auto px-6 py-10 max-w-2xl";
pub const SECTION: &str = "py-20 scroll-mt-16";

pub const CARD: &str = "bg-neutral-900 border border-neutral-800 rounded-xl shadow-lg p-6";
pub const CARD_HOVER: &str = "bg-neutral-900 border border-neutral-800 rounded-xl shadow-md p-6 transition-transform duration-200 hover:-translate-y-1";
pub const ALERT_CARD: &str = "p-4 rounded-lg shadow-md mb-6";
pub const QR_PLACEHOLDER: &str = "flex flex-col items-center justify-center h-full min-h-[280px] border-2 border-dashed border-neutral-700 rounded-xl text-neutral-500";

pub const INPUT_BASE: &str = "appearance-none border border-neutral-700 bg-neutral-950 text-white rounded-lg w-full py-3 px-4 focus:outline-none focus:border-emerald-400";

pub const BUTTON_BASE: &str = "px-5 py-2 rounded-lg font-medium transition-all duration-150 disabled:opacity-50 disabled:cursor-not-allowed";
pub const BUTTON_PRIMARY: &str = "bg-emerald-400 text-black hover:bg-emerald-300 focus:ring-2 focus:ring-emerald-300 focus:outline-none";
pub const BUTTON_SECONDARY: &str = "border border-neutral-700 text-white hover:border-emerald-400 hover:text-emerald-400";
pub const BUTTON_DANGER: &str = "text-neutral-400 hover:text-red-400";
pub const BUTTON_ICON: &str = "p-2 rounded-lg text-neutral-300 hover:text-emerald-400 hover:bg-neutral-800 transition-colors";
pub const BUTTON_FULL: &str = "w-full py-3 px-5 font-semibold rounded-lg transition-all duration-150 disabled:opacity-50 disabled:cursor-not-allowed";

pub const TEXT_LABEL: &str = "block text-sm font-semibold text-neutral-200 mb-2";
pub const TEXT_MUTED: &str = "text-sm text-neutral-400";
pub const TEXT_ACCENT: &str = "text-emerald-400";
pub const HEADING_XL: &str = "text-4xl md:text-6xl font-extrabold tracking-tight text-white";
pub const HEADING_LG: &str = "text-3xl md:text-4xl font-bold mb-4 text-white";
pub const HEADING_MD: &str = "text-2xl font-bold mb-4 text-white";
pub const HEADING_SM: &str = "text-lg font-semibold mb-2 text-white";
pub const BADGE: &str = "inline-block px-3 py-1 rounded-full text-xs font-medium bg-emerald-400/10 text-emerald-400 border border-emerald-400/20";

pub const FLEX_BETWEEN: &str = "flex justify-between items-center";
pub const GRID_SPLIT: &str = "grid gap-8 md:grid-cols-2 items-start";
pub const GRID_FEATURES: &str = "grid gap-6 sm:grid-cols-2 lg:grid-cols-3";
pub const SPACE_Y_BASE: &str = "space-y-3";
pub const SPACE_Y_LG: &str = "space-y-6";

pub const BAR_TRACK: &str = "w-full h-3 bg-neutral-800 rounded-full overflow-hidden";
pub const BAR_FILL: &str = "h-full rounded-full transition-all duration-500";

pub const BG_PAGE: &str = "bg-black min-h-screen text-white";
pub const SPINNER: &str = "animate-spin rounded-full h-12 w-12 border-4 border-emerald-400 border-t-transparent";

pub fn combine_classes(base: &str, additional: &str) -> String {
    format!("{} {}", base, additional)
}

pub fn button_primary(full_width: bool) -> String {
    if full_width {
        combine_classes(BUTTON_PRIMARY, BUTTON_FULL)
    } else {
        combine_classes(BUTTON_BASE, BUTTON_PRIMARY)
    }
}

pub fn button_secondary() -> String {
    combine_classes(BUTTON_BASE, BUTTON_SECONDARY)
}

pub fn alert_style(style: &str) -> String {
    match style {
        "error" => combine_classes(ALERT_CARD, "bg-red-500/10 border border-red-500/40 text-red-300"),
        "success" => combine_classes(ALERT_CARD, "bg-emerald-500/10 border border-emerald-500/40 text-emerald-300"),
        "warning" => combine_classes(ALERT_CARD, "bg-yellow-500/10 border border-yellow-500/40 text-yellow-200"),
        _ => combine_classes(ALERT_CARD, "bg-blue-500/10 border border-blue-500/40 text-blue-200"),
    }
}

pub fn toast_style(level: &str) -> String {
    let tone = match level {
        "error" => "border-red-500/60 text-red-200",
        "success" => "border-emerald-400/60 text-emerald-200",
        _ => "border-neutral-600 text-neutral-200",
    };
    combine_classes("pointer-events-auto px-4 py-3 rounded-lg shadow-lg bg-neutral-900 border text-sm", tone)
}
