use crate::config::{
    ReleaseConfig, ENSEMBL_RELEASE, ENSEMBL_RELEASE_URL, FLYBASE_RELEASE_DATE,
    FLYBASE_RELEASE_URL, FLYBASE_RELEASE_VERSION,
};
use crate::error::Result;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provider {
    /// Ensembl release layout: `{url}/gtf/{dir}/{prefix}.{assembly}.{release}.gtf.gz`
    Ensembl {
        dir: &'static str,
        prefix: &'static str,
        assembly: &'static str,
    },
    /// FlyBase layout: `{url}/gtf/dmel-all-{version}.gtf.gz`
    FlyBase,
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Provider::Ensembl { .. } => "Ensembl",
                Provider::FlyBase => "FlyBase",
            }
        )
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct OrganismEntry {
    pub short_name: &'static str,
    pub scientific_name: &'static str,
    pub provider: Provider,
}

/// Supported organisms, sorted by short name.
pub const ORGANISMS: &[OrganismEntry] = &[
    OrganismEntry {
        short_name: "celegans",
        scientific_name: "Caenorhabditis elegans",
        provider: Provider::Ensembl {
            dir: "caenorhabditis_elegans",
            prefix: "Caenorhabditis_elegans",
            assembly: "WBcel235",
        },
    },
    // Ensembl annotations for D. melanogaster lag behind, FlyBase is used instead.
    OrganismEntry {
        short_name: "dmelanogaster",
        scientific_name: "Drosophila melanogaster",
        provider: Provider::FlyBase,
    },
    OrganismEntry {
        short_name: "hsapiens",
        scientific_name: "Homo sapiens",
        provider: Provider::Ensembl {
            dir: "homo_sapiens",
            prefix: "Homo_sapiens",
            assembly: "GRCh38",
        },
    },
    OrganismEntry {
        short_name: "mmusculus",
        scientific_name: "Mus musculus",
        provider: Provider::Ensembl {
            dir: "mus_musculus",
            prefix: "Mus_musculus",
            assembly: "GRCm38",
        },
    },
];

/// Case sensitive lookup by short name.
pub fn lookup(name: &str) -> Option<&'static OrganismEntry> {
    ORGANISMS.iter().find(|entry| entry.short_name == name)
}

pub fn supported_names() -> Vec<&'static str> {
    ORGANISMS.iter().map(|entry| entry.short_name).collect()
}

pub fn unsupported_message(name: &str) -> String {
    let mut msg = format!(
        "\n'{}' is not a supported organism.\n\nCurrently supported (case sensitive):\n",
        name
    );
    for short_name in supported_names() {
        msg.push_str(&format!("  - {}\n", short_name));
    }
    msg
}

impl OrganismEntry {
    /// Keys that must be set before this entry is downloaded. The Ensembl
    /// release pair is required for every entry, FlyBase ones included, even
    /// though only Ensembl URLs consume it.
    pub fn required_keys(&self) -> &'static [&'static str] {
        match self.provider {
            Provider::Ensembl { .. } => &[ENSEMBL_RELEASE, ENSEMBL_RELEASE_URL],
            Provider::FlyBase => &[
                ENSEMBL_RELEASE,
                ENSEMBL_RELEASE_URL,
                FLYBASE_RELEASE_DATE,
                FLYBASE_RELEASE_VERSION,
                FLYBASE_RELEASE_URL,
            ],
        }
    }

    pub fn label(&self, cfg: &ReleaseConfig) -> Result<String> {
        let release = match self.provider {
            Provider::Ensembl { assembly, .. } => assembly.to_string(),
            Provider::FlyBase => format!(
                "{} {}",
                cfg.get(FLYBASE_RELEASE_DATE)?,
                cfg.get(FLYBASE_RELEASE_VERSION)?
            ),
        };
        Ok(format!(
            "{} ({} {})",
            self.scientific_name, self.provider, release
        ))
    }

    pub fn url(&self, cfg: &ReleaseConfig) -> Result<String> {
        let url = match self.provider {
            Provider::Ensembl {
                dir,
                prefix,
                assembly,
            } => format!(
                "{}/gtf/{}/{}.{}.{}.gtf.gz",
                cfg.get(ENSEMBL_RELEASE_URL)?,
                dir,
                prefix,
                assembly,
                cfg.get(ENSEMBL_RELEASE)?
            ),
            Provider::FlyBase => format!(
                "{}/gtf/dmel-all-{}.gtf.gz",
                cfg.get(FLYBASE_RELEASE_URL)?,
                cfg.get(FLYBASE_RELEASE_VERSION)?
            ),
        };
        Ok(url)
    }
}
