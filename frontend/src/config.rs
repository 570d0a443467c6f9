use log::Level;

pub const BUSINESS_NAME: &str = "Dodgy Garage";
pub const PHONE_DISPLAY: &str = "07983 361554";
pub const PHONE_COUNTRY_CODE: &str = "44";
pub const CONTACT_EMAIL: &str = "contact@dodgygarage.co.uk";
pub const SITE_URL: &str = "https://dodgy-garage.manus.space";
pub const YOUTUBE_URL: &str = "https://www.youtube.com/@Dodgy-Garage";
pub const GOOGLE_PROFILE_URL: &str = "https://share.google/waKU4KXoa4tkv0Hwk";
pub const GOOGLE_REVIEW_URL: &str = "https://www.google.com/search?q=Dodgy+Garage+Bridgwater";
pub const LOGO_PATH: &str = "/images/dodgy-garage-logo.png";

/// localStorage key holding the JSON array of submitted leads.
pub const LEADS_STORAGE_KEY: &str = "dodgy_garage_leads";

/// How long the "Message Received" banner stays up after a submission.
pub const SUCCESS_BANNER_MS: u32 = 5_000;

pub const OPENING_HOURS: &str = "Monday-Friday, 8am-6pm";

#[cfg(debug_assertions)]
pub fn get_base_path() -> Option<&'static str> {
    None // served from the dev server root
}

#[cfg(not(debug_assertions))]
pub fn get_base_path() -> Option<&'static str> {
    option_env!("SITE_BASE_PATH").filter(|path| !path.is_empty())
}

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
