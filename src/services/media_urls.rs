// src/services/media_urls.rs
// DOCUMENTATION: Best-effort helpers over media host identifiers and URLs
// PURPOSE: Recover public ids and resource types when callers don't supply them
//
// These are heuristics. Public ids are not required to keep a file extension,
// so a video stored as "dolly-hotel/lobby" is classified as an image unless
// its URL carries a `/video/` segment. Prefer an explicit resource type.

use crate::models::ResourceType;

const VIDEO_EXTENSIONS: [&str; 7] = [".mp4", ".mov", ".avi", ".wmv", ".flv", ".webm", ".mkv"];

/// Guess the resource type of a public id or delivery URL
/// DOCUMENTATION: Video when a video extension, a `/video/` segment or the
/// word "video" appears anywhere; image otherwise
pub fn determine_resource_type(public_id_or_url: &str) -> ResourceType {
    let lower = public_id_or_url.to_lowercase();

    let is_video = VIDEO_EXTENSIONS.iter().any(|ext| lower.contains(ext))
        || lower.contains("/video/")
        || lower.contains("video");

    if is_video {
        ResourceType::Video
    } else {
        ResourceType::Image
    }
}

/// Resource type of a delivery URL
/// DOCUMENTATION: Stricter than `determine_resource_type`: only the
/// `/video/` path segment or a trailing video extension count
pub fn resource_type_from_url(url: &str) -> ResourceType {
    let lower = url.to_lowercase();

    if lower.contains("/video/") || VIDEO_EXTENSIONS.iter().any(|ext| lower.ends_with(ext)) {
        ResourceType::Video
    } else {
        ResourceType::Image
    }
}

/// Extract the public id from a delivery URL
/// DOCUMENTATION: Accepts `.../(image|video)/upload/[v<digits>/]<id>[.<ext>]`
/// and returns `<id>` including any folders, without the final extension
///
/// # Examples
/// `https://res.cloudinary.com/demo/image/upload/v1712/dolly-hotel/lobby.jpg`
/// yields `dolly-hotel/lobby`
pub fn extract_public_id_from_url(url: &str) -> Option<String> {
    let start = ["/image/upload/", "/video/upload/"]
        .iter()
        .filter_map(|marker| url.find(marker).map(|idx| idx + marker.len()))
        .min()?;

    let mut rest = &url[start..];
    if rest.is_empty() {
        return None;
    }

    if let Some(stripped) = strip_version(rest) {
        rest = stripped;
    }

    // The extension is whatever follows the last dot, as long as both
    // sides of that dot are non-empty
    let id = match rest.rfind('.') {
        Some(dot) if dot > 0 && dot + 1 < rest.len() => &rest[..dot],
        _ => rest,
    };

    Some(id.to_string())
}

/// Strip a leading `v<digits>/` segment, keeping it when nothing follows
fn strip_version(path: &str) -> Option<&str> {
    let after_v = path.strip_prefix('v')?;
    let slash = after_v.find('/')?;
    let digits = &after_v[..slash];

    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let remainder = &after_v[slash + 1..];
    if remainder.is_empty() {
        None
    } else {
        Some(remainder)
    }
}
