pub const QR_ENDPOINT: &str = "https://chart.googleapis.com/chart";
pub const QR_DOWNLOAD_FILENAME: &str = "qrcode.png";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QrOptions {
    pub size: u32,
    pub color: &'static str,
    pub background: &'static str,
}

impl QrOptions {
    pub const fn new() -> Self {
        Self {
            size: 200,
            color: "00E676",
            background: "00000000",
        }
    }

    pub const fn with_size(self, size: u32) -> Self {
        Self { size, ..self }
    }
}

impl Default for QrOptions {
    fn default() -> Self {
        Self::new()
    }
}

pub fn qr_image_url(data: &str, options: &QrOptions) -> String {
    format!(
        "{QR_ENDPOINT}?cht=qr&chl={}&chs={size}x{size}&chco={}&chf=bg,s,{}",
        urlencoding::encode(data),
        options.color,
        options.background,
        size = options.size,
    )
}

fn page_url(origin: &str, path: &str, id: &str) -> String {
    format!("{}/{}/{}", origin.trim_end_matches('/'), path, urlencoding::encode(id))
}

pub fn note_url(origin: &str, id: &str) -> String {
    page_url(origin, "note", id)
}

pub fn poll_url(origin: &str, id: &str) -> String {
    page_url(origin, "poll", id)
}

pub fn results_url(origin: &str, id: &str) -> String {
    page_url(origin, "poll-results", id)
}
