use log::Level;

/// Path the bundle is served under (GitHub Pages project site).
/// Keep in sync with `public_url` in Trunk.toml.
pub const BASE_PATH: &str = "/vb";

pub const PAGE_TITLE: &str = "Beach Volleyball Tournament";

pub const HERO_SECTION_ID: &str = "hero";

/// Scroll offset (CSS pixels) past which the back-to-top button shows.
pub const TOP_ARROW_THRESHOLD_PX: f64 = 200.0;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

pub fn asset_url(path: &str) -> String {
    format!("{}/{}", BASE_PATH, path.trim_start_matches('/'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn asset_url_prefixes_base_path_once() {
        assert_eq!(asset_url("assets/media1.jpg"), "/vb/assets/media1.jpg");
        assert_eq!(asset_url("/assets/media1.jpg"), "/vb/assets/media1.jpg");
    }
}
