use std::io::ErrorKind;
use std::path::Path;
use tokio::fs::remove_file;

// 获取 url 地址的最后一层目录
pub fn get_last_segment_of_url(url: &str) -> &str {
    url.trim_end_matches('/').split('/').last().unwrap_or("")
}

/// `Homo_sapiens.GRCh38.110.gtf.gz` -> `Homo_sapiens.GRCh38.110.gtf`.
///
/// Only the final extension is removed; a name without one is returned as is.
pub fn strip_final_extension(file_name: &str) -> &str {
    match Path::new(file_name).extension() {
        Some(ext) if !ext.is_empty() => {
            &file_name[..file_name.len() - ext.len() - 1]
        }
        _ => file_name,
    }
}

/// Deletes a file left behind by a failed step. A file that is already gone
/// is fine; any other failure is logged, the original error matters more.
pub async fn remove_partial_file(path: &Path) {
    match remove_file(path).await {
        Ok(()) => log::debug!("removed partial file {:?}", path),
        Err(e) if e.kind() == ErrorKind::NotFound => {}
        Err(e) => log::warn!("could not remove partial file {:?}: {}", path, e),
    }
}
