//! Content-type lookup module
//!
//! Maps a file extension to a Content-Type through a fixed, case-sensitive
//! table. An extension outside the table means the resource is not servable;
//! there is no octet-stream fallback and no content sniffing.

/// Look up the Content-Type for a file extension.
///
/// Returns `None` for anything outside the served set. The table is
/// case-sensitive: `HTML` does not match.
pub fn content_type_for(extension: &str) -> Option<&'static str> {
    match extension {
        "html" | "htm" | "htmls" | "htt" | "acgi" => Some("text/html"),
        "jpe" | "jpeg" | "jpg" | "jfif" | "jfif-tbnl" => Some("image/jpeg"),
        "gif" => Some("image/gif"),
        "txt" => Some("text/plain"),
        _ => None,
    }
}

/// Extract the extension from a request target.
///
/// Looks at the final path segment and returns everything after its last
/// dot. A segment without a dot has no extension.
pub fn extension_of(target: &str) -> Option<&str> {
    let segment = target.rsplit('/').next().unwrap_or(target);
    segment.rsplit_once('.').map(|(_, ext)| ext)
}
