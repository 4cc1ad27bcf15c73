//! Filename heuristics for spotting panoramic (360 degree) imagery.

/// Keywords whose presence in a lowercased filename marks it as panoramic.
/// Fixed set, fixed order; matching is strict substring containment so
/// "panoramic-interior.jpg" fires on "pano".
pub const PANORAMIC_KEYWORDS: [&str; 6] =
    ["360", "pano", "panorama", "vr", "sphere", "equirectangular"];

/// True when the filename contains any panoramic keyword, case-insensitively.
pub fn is_panoramic(filename: &str) -> bool {
    if filename.is_empty() {
        return false;
    }
    let lowered = filename.to_lowercase();
    PANORAMIC_KEYWORDS
        .iter()
        .any(|keyword| lowered.contains(keyword))
}

/// True when any image in the list looks panoramic. Empty lists never match.
pub fn has_panoramic_media<S: AsRef<str>>(images: &[S]) -> bool {
    images.iter().any(|image| is_panoramic(image.as_ref()))
}
