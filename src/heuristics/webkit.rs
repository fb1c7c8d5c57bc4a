use crate::normalize::NtVersionTable;
use crate::platform::get_platform;
use crate::types::UserAgent;
use crate::update::OsUpdate;

/// WebKit/Blink browsers, including Android WebViews.
pub(crate) fn webkit(ua: &UserAgent, comment: &[String], nt: &NtVersionTable) -> OsUpdate {
    let mut update = OsUpdate::default().fill_platform(get_platform(comment));

    if let Some(os) = comment.get(1) {
        update = update.fill_os(nt.normalize(os));
    }

    if comment.iter().any(|token| is_webview_marker(token)) {
        let name = if ua.browser().name.contains("Chrome") {
            "Chrome WebView"
        } else {
            "Android WebView"
        };
        update = update.mobile().browser(name, None);
    }
    update
}

/// Android WebViews carry a `wv` token (`"wv"`, sometimes glued to others).
fn is_webview_marker(token: &str) -> bool {
    token.contains("wv")
}
