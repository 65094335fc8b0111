use chrono::TimeZone;
use std::process::Command;

/// Short commit hash, or "dev" outside a git checkout
fn git_hash() -> String {
    Command::new("git")
        .args(["rev-parse", "--short", "HEAD"])
        .output()
        .ok()
        .filter(|o| o.status.success())
        .map(|o| String::from_utf8_lossy(&o.stdout).trim().to_string())
        .filter(|hash| !hash.is_empty())
        .unwrap_or_else(|| "dev".to_string())
}

fn main() {
    // Footer build info for the product explorer
    let hash = std::env::var("STOREFRONT_BUILD_HASH").unwrap_or_else(|_| git_hash());
    println!("cargo:rustc-env=BUILD_HASH={}", hash);

    // Local time with zone abbreviation (e.g., PST)
    let now = chrono::Local::now();
    let tz_abbrev = iana_time_zone::get_timezone()
        .ok()
        .and_then(|tz_name| tz_name.parse::<chrono_tz::Tz>().ok())
        .map(|tz| tz.from_utc_datetime(&now.naive_utc()).format("%Z").to_string())
        .unwrap_or_default();
    let timestamp = format!("{} {}", now.format("%Y-%m-%d %H:%M"), tz_abbrev);
    println!("cargo:rustc-env=BUILD_TIMESTAMP={}", timestamp.trim_end());

    println!("cargo:rerun-if-env-changed=STOREFRONT_BUILD_HASH");
    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-changed=.git/refs/heads");
}
