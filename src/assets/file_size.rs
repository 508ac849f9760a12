use crate::foundation::math::fixed1;

const KIB: u64 = 1024;
const MIB: u64 = 1024 * 1024;
const GIB: u64 = 1024 * 1024 * 1024;

/// Human-readable size of an uploaded file.
///
/// Plain bytes below 2 KiB, then one decimal of KB/MB/GB, each unit used up to twice its size.
pub fn format_file_size(bytes: u64) -> String {
    if bytes < 2 * KIB {
        return format!("{bytes} B");
    }
    let b = bytes as f64;
    if bytes < 2 * MIB {
        return format!("{} KB", fixed1(b / KIB as f64));
    }
    if bytes < 2 * GIB {
        return format!("{} MB", fixed1(b / MIB as f64));
    }
    format!("{} GB", fixed1(b / GIB as f64))
}

#[cfg(test)]
#[path = "../../tests/unit/assets/file_size.rs"]
mod tests;
