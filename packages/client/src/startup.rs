//! Opt-in welcome banner
//!
//! Nothing here runs on its own. Applications that want the banner call
//! [`log_welcome`] once at startup.

/// Banner text logged by [`log_welcome`].
pub const WELCOME_MESSAGE: &str = concat!(
    "hitq ",
    env!("CARGO_PKG_VERSION"),
    ": measurement protocol hits are validated locally and posted to the collect endpoint"
);

/// Log the welcome banner at info level.
pub fn log_welcome() {
    log::info!("{WELCOME_MESSAGE}");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn banner_names_the_crate_version() {
        assert!(WELCOME_MESSAGE.starts_with("hitq "));
        assert!(WELCOME_MESSAGE.contains(env!("CARGO_PKG_VERSION")));
        log_welcome();
    }
}
