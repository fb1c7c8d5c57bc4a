use crate::update::OsUpdate;

/// Dalvik is the Android VM's HTTP user agent
/// (`Dalvik/1.6.0 (Linux; U; Android 4.4.2; ...)`). Only Linux kernels are
/// classified.
pub(crate) fn dalvik(comment: &[String]) -> OsUpdate {
    match comment {
        [kernel, rest @ ..] if kernel.starts_with("Linux") => {
            let update = OsUpdate::default().set_platform(kernel).mobile();
            match rest.get(1) {
                Some(os) => update.set_os(os),
                None => update,
            }
        }
        _ => OsUpdate::default(),
    }
}
