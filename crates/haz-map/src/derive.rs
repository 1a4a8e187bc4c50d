//! Output filename derivation.

/// Filename component of a slash-separated path or recorded filename.
fn basename(name: &str) -> &str {
    name.rsplit('/').next().unwrap_or(name)
}

/// Extension substring from the last `.` inclusive; empty when there is no
/// dot.
fn extension(name: &str) -> &str {
    match name.rfind('.') {
        Some(idx) => &name[idx..],
        None => "",
    }
}

/// Derive the in-archive name for one record.
///
/// Takes the filename component of `original_filename` and swaps its
/// extension for the extension of `access_copy_location`. The swap is a
/// literal replace of every occurrence of the original extension text, not a
/// suffix trim-and-append; the two diverge when the base name repeats the
/// extension text. An original with no extension gets the access copy
/// extension appended.
#[must_use]
pub fn derive_output_filename(original_filename: &str, access_copy_location: &str) -> String {
    let base = basename(original_filename);
    let original_ext = extension(base);
    let access_ext = extension(basename(access_copy_location));
    if original_ext.is_empty() {
        let mut name = base.to_string();
        name.push_str(access_ext);
        name
    } else {
        base.replace(original_ext, access_ext)
    }
}
