/// Человекочитаемый размер тела ответа для логов
///
/// # Примеры
/// ```text
/// format_size(512)      == "512 B"
/// format_size(1536)     == "1.5 KB"
/// format_size(5242880)  == "5.0 MB"
/// ```
pub fn format_size(bytes: usize) -> String {
    const KB: f64 = 1024.0;
    const MB: f64 = KB * 1024.0;

    let b = bytes as f64;
    if b < KB {
        format!("{} B", bytes)
    } else if b < MB {
        format!("{:.1} KB", b / KB)
    } else {
        format!("{:.1} MB", b / MB)
    }
}
