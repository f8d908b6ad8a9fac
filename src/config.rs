use log::Level;

/// Height of the fixed header, subtracted from every section scroll target.
pub const HEADER_OFFSET: f64 = 80.0;

/// Delay before the second scroll-to-top pass after switching pages.
pub const SCROLL_SETTLE_DELAY_MS: u32 = 50;

/// Delay before honouring a `#section` fragment on first load.
pub const FRAGMENT_SCROLL_DELAY_MS: u32 = 100;

/// Scroll depth after which the header switches to its compact style.
pub const HEADER_SCROLLED_THRESHOLD: i32 = 40;

pub const SHOWCASE_SIZE: usize = 3;

pub const BOOKING_URL: &str = "https://cal.com/northbeam/intro";
pub const CONTACT_EMAIL: &str = "hello@northbeam.studio";

pub const PLACEHOLDER_BASE_URL: &str = "https://placehold.co/600x400";

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

pub fn contact_mailto() -> String {
    format!("mailto:{}", CONTACT_EMAIL)
}

/// Placeholder image for a record whose own image failed to load.
pub fn placeholder_image(title: &str) -> String {
    format!("{}?text={}", PLACEHOLDER_BASE_URL, urlencoding::encode(title))
}
