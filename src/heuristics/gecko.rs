use crate::normalize::NtVersionTable;
use crate::types::UserAgent;
use crate::update::OsUpdate;

/// Gecko (Firefox and friends).
///
/// The second comment token decides where the OS lives: `U` / `arm_64` push
/// it to the third slot, an Android platform means a Firefox for Android
/// build whose platform and OS are swapped, and `Mobile`/`Tablet` as the
/// first token is Firefox OS.
pub(crate) fn gecko(ua: &UserAgent, comment: &[String], nt: &NtVersionTable) -> OsUpdate {
    let update = OsUpdate::default();
    let [first, marker, rest @ ..] = comment else {
        return update;
    };

    let mut update = if is_security_marker(marker) {
        let os = rest.first().unwrap_or(marker);
        update.set_os(nt.normalize(os))
    } else if ua.platform().contains("Android") {
        update
            .mobile()
            .set_platform(nt.normalize(marker))
            .set_os(ua.platform())
    } else if first == "Mobile" || first == "Tablet" {
        update.mobile().set_os("FirefoxOS")
    } else {
        update.fill_os(nt.normalize(marker))
    };

    // Firefox on Ubuntu puts "rv:XX.X" in the fourth slot.
    if let Some(localization) = comment.get(3).filter(|c| !c.starts_with("rv:")) {
        update = update.localization(localization);
    }
    update
}

fn is_security_marker(token: &str) -> bool {
    token == "U" || token == "arm_64"
}
