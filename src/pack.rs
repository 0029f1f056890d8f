//! The built-in list of pack scripts served by the krfoss mirror.

/// Ordered list of pack scripts fetched when no other list is configured.
pub const PACK_URLS: [&str; 8] = [
    "https://http.krfoss.org/pack/pve.sh",
    "https://http.krfoss.org/pack/pbs.sh",
    "https://http.krfoss.org/pack/cm.sh",
    "https://http.krfoss.org/pack/centos.sh",
    "https://http.krfoss.org/pack/rocky.sh",
    "https://http.krfoss.org/pack/almalinux.sh",
    "https://http.krfoss.org/pack/archlinux.sh",
    "https://http.krfoss.org/pack/archlinux-arm.sh",
];

pub fn default_urls() -> Vec<String> {
    PACK_URLS.iter().map(|url| url.to_string()).collect()
}
