use crate::config::ReleaseConfig;
use crate::down::Fetch;
use crate::error::Result;
use crate::gunzip::Decompress;
use crate::organism;
use crate::utils::{get_last_segment_of_url, remove_partial_file, strip_final_extension};
use std::path::{Path, PathBuf};

#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The organism is not in the table; the usage text was printed.
    Unsupported,
    /// The compressed file was already present, nothing was fetched.
    AlreadyDownloaded(PathBuf),
    Downloaded { file: PathBuf, unzip_file: PathBuf },
}

/// A resolved annotation download.
#[derive(Debug, Clone)]
pub struct GtfTask {
    url: String,
    file_name: String,
    pub file: PathBuf,
    pub unzip_file: PathBuf,
}

impl GtfTask {
    pub fn new(url: String, work_dir: &Path) -> Self {
        let file_name = get_last_segment_of_url(&url).to_string();
        let file = work_dir.join(&file_name);
        let unzip_file = work_dir.join(strip_final_extension(&file_name));
        Self {
            url,
            file_name,
            file,
            unzip_file,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn file_exists(&self) -> bool {
        self.file.is_file()
    }

    pub async fn run<F, D>(&self, fetcher: &F, decompressor: &D) -> Result<Outcome>
    where
        F: Fetch,
        D: Decompress,
    {
        if self.file_exists() {
            println!("{}has already been downloaded.", self.file_name);
            return Ok(Outcome::AlreadyDownloaded(self.file.clone()));
        }

        println!("Downloading {}.", self.file_name);
        log::info!("{} -> {:?}", self.url, self.file);
        fetcher.fetch(&self.url, &self.file).await?;

        println!("Decompressing {}.", self.file_name);
        if let Err(e) = decompressor.decompress(&self.file, &self.unzip_file).await {
            // an undecodable download must not satisfy the exists check next time
            remove_partial_file(&self.file).await;
            return Err(e);
        }
        log::info!("{:?} written", self.unzip_file);

        Ok(Outcome::Downloaded {
            file: self.file.clone(),
            unzip_file: self.unzip_file.clone(),
        })
    }
}

/// Resolve `name` against the organism table and download its annotation
/// into `work_dir`.
///
/// Configuration is checked before anything touches the network, so a
/// missing value never leaves a file behind.
pub async fn run_organism<F, D>(
    name: &str,
    cfg: &ReleaseConfig,
    work_dir: &Path,
    fetcher: &F,
    decompressor: &D,
) -> Result<Outcome>
where
    F: Fetch,
    D: Decompress,
{
    let entry = match organism::lookup(name) {
        Some(entry) => entry,
        None => {
            println!("{}", organism::unsupported_message(name));
            return Ok(Outcome::Unsupported);
        }
    };

    cfg.require(entry.required_keys())?;
    println!("{}", entry.label(cfg)?);

    let task = GtfTask::new(entry.url(cfg)?, work_dir);
    task.run(fetcher, decompressor).await
}
