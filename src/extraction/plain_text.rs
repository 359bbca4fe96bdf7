const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];

/// Decodes as UTF-8, replacing invalid sequences and dropping a leading byte-order mark.
pub fn extract(data: &[u8]) -> String {
    let data = data.strip_prefix(UTF8_BOM).unwrap_or(data);
    String::from_utf8_lossy(data).into_owned()
}
