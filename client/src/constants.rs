use once_cell::sync::Lazy;
use url::Url;

pub static BASE_URL_ENV: &str = "MAILROOM_BASE_URL";
pub static DEFAULT_BASE_URL: Lazy<Url> = Lazy::new(|| {
    // Default in build is staging, the production URL is only set if the
    // build explicitly sets MAILROOM_DEFAULT_BASE_URL at compile time.
    let url_str = std::option_env!("MAILROOM_DEFAULT_BASE_URL")
        .unwrap_or("https://api.staging.mailroom.dev");
    Url::parse(url_str).expect("DEFAULT_BASE_URL")
});
