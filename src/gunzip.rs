use crate::error::{GtfError, Result};
use crate::utils::remove_partial_file;
use async_compression::tokio::bufread::GzipDecoder;
use std::path::Path;
use tokio::fs::File;
use tokio::io::{self, AsyncWriteExt, BufReader, BufWriter};

/// Inflates a gzip file into a new file, leaving the source in place.
#[allow(async_fn_in_trait)]
pub trait Decompress {
    async fn decompress(&self, src: &Path, dest: &Path) -> Result<()>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct GzipInflater;

async fn inflate(src: &Path, dest: &Path) -> std::io::Result<u64> {
    let file = File::open(src).await?;
    let mut decoder = GzipDecoder::new(BufReader::new(file));
    // GTF 发布文件可能由多个 gzip member 拼接而成
    decoder.multiple_members(true);

    let mut writer = BufWriter::new(File::create(dest).await?);
    let written = io::copy(&mut decoder, &mut writer).await?;
    writer.flush().await?;
    Ok(written)
}

impl Decompress for GzipInflater {
    async fn decompress(&self, src: &Path, dest: &Path) -> Result<()> {
        match inflate(src, dest).await {
            Ok(written) => {
                log::debug!("{:?} -> {:?}, {} bytes", src, dest, written);
                Ok(())
            }
            Err(source) => {
                remove_partial_file(dest).await;
                Err(GtfError::Decompress {
                    path: src.to_path_buf(),
                    source,
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{gzip_bytes, scratch_dir};

    #[tokio::test]
    async fn test_inflate_keeps_source() {
        let dir = scratch_dir("gunzip_keep");
        let src = dir.join("genes.gtf.gz");
        let dest = dir.join("genes.gtf");
        let payload = b"1\thavana\tgene\t11869\t14409\t.\t+\t.\tgene_id \"ENSG00000223972\";\n";
        let compressed = gzip_bytes(payload).await;
        tokio::fs::write(&src, &compressed).await.unwrap();

        GzipInflater.decompress(&src, &dest).await.unwrap();

        assert_eq!(tokio::fs::read(&dest).await.unwrap(), payload.to_vec());
        assert_eq!(tokio::fs::read(&src).await.unwrap(), compressed);
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[tokio::test]
    async fn test_inflate_multiple_members() {
        let dir = scratch_dir("gunzip_members");
        let src = dir.join("multi.gtf.gz");
        let dest = dir.join("multi.gtf");
        let mut compressed = gzip_bytes(b"first\n").await;
        compressed.extend(gzip_bytes(b"second\n").await);
        tokio::fs::write(&src, &compressed).await.unwrap();

        GzipInflater.decompress(&src, &dest).await.unwrap();

        assert_eq!(tokio::fs::read(&dest).await.unwrap(), b"first\nsecond\n".to_vec());
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[tokio::test]
    async fn test_not_gzip_is_error() {
        let dir = scratch_dir("gunzip_bad");
        let src = dir.join("broken.gtf.gz");
        let dest = dir.join("broken.gtf");
        tokio::fs::write(&src, b"<html>not found</html>").await.unwrap();

        let err = GzipInflater.decompress(&src, &dest).await.unwrap_err();
        assert!(matches!(err, GtfError::Decompress { .. }));
        assert!(!dest.exists());
        assert!(src.exists());
        let _ = std::fs::remove_dir_all(&dir);
    }
}
