/// Derive the platform from the comment of the first UA section.
///
/// `compatible` (old IE/bot style) says nothing about the platform, so it
/// yields an empty string just like a missing comment.
pub fn get_platform(comment: &[String]) -> &str {
    let Some(first) = comment.first() else {
        return "";
    };
    let first = first.as_str();

    if first == "compatible" {
        ""
    } else if first.starts_with("Windows") {
        "Windows"
    } else if first.starts_with("Symbian") {
        "Symbian"
    } else if first.starts_with("webOS") {
        "webOS"
    } else if first == "BB10" {
        "BlackBerry"
    } else {
        first
    }
}
