use std::{
    fs::File,
    io::{BufReader, Read},
    path::Path,
};

use bzip2::read::BzDecoder;
use flate2::read::GzDecoder;
use log::debug;

use super::RunnerError;

/// The compression schemes the provers actually ship with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArchiveFormat {
    GzipTar,
    Bzip2Tar,
}

impl ArchiveFormat {
    /// Guess the format from the file name, `None` for anything that is not
    /// a compressed tar.
    pub fn detect(path: &Path) -> Option<Self> {
        let name = path.file_name()?.to_str()?;
        if name.ends_with(".tar.gz") || name.ends_with(".tgz") {
            Some(ArchiveFormat::GzipTar)
        } else if name.ends_with(".tar.bz2") || name.ends_with(".tbz2") {
            Some(ArchiveFormat::Bzip2Tar)
        } else {
            None
        }
    }
}

/// Unpack `archive` into `dest_dir`.
///
/// Re-extraction over an existing tree overwrites entry by entry; nothing
/// guards against two processes unpacking the same archive at once.
pub fn extract(archive: &Path, dest_dir: &Path) -> Result<(), RunnerError> {
    let format = ArchiveFormat::detect(archive)
        .ok_or_else(|| RunnerError::UnsupportedArchive(archive.to_path_buf()))?;
    debug!("unpacking {archive:?} ({format:?}) into {dest_dir:?}");

    let file = File::open(archive).map_err(|source| RunnerError::Extract {
        archive: archive.to_path_buf(),
        source,
    })?;
    let reader = BufReader::new(file);
    let result = match format {
        ArchiveFormat::GzipTar => unpack_tar(GzDecoder::new(reader), dest_dir),
        ArchiveFormat::Bzip2Tar => unpack_tar(BzDecoder::new(reader), dest_dir),
    };
    result.map_err(|source| RunnerError::Extract {
        archive: archive.to_path_buf(),
        source,
    })
}

fn unpack_tar<R: Read>(reader: R, dest_dir: &Path) -> std::io::Result<()> {
    tar::Archive::new(reader).unpack(dest_dir)
}
