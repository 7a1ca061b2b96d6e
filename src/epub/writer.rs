use std::fs;
use std::io::{self, Seek, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, info};
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

use super::FileDescriptor;
use crate::config::EpubConfig;
use crate::error::{Error, Result};

/// Package a file set into an EPUB archive written to `writer`.
///
/// Entries are written in list order. The first entry must be an
/// uncompressed `mimetype`, otherwise nothing is written and
/// [`Error::InvalidFileSet`] is returned.
pub fn write_epub_to_writer<W: Write + Seek>(
    files: &[FileDescriptor],
    writer: W,
    config: &EpubConfig,
) -> Result<W> {
    check_file_set(files)?;

    let mut zip = ZipWriter::new(writer);
    let stored = SimpleFileOptions::default().compression_method(zip::CompressionMethod::Stored);
    let deflated = SimpleFileOptions::default()
        .compression_method(zip::CompressionMethod::Deflated)
        .compression_level(Some(config.deflate_level()));

    for file in files {
        let options = if file.compress { deflated } else { stored };
        zip.start_file(file.path(), options)?;
        zip.write_all(file.content.as_bytes())?;
    }

    let mut writer = zip.finish()?;
    writer.flush()?;
    Ok(writer)
}

/// Package a file set into `folder/<filename>.epub`.
///
/// The archive is streamed into a `.partial` file that is renamed only once
/// the zip is finished and synced, so a failed build never leaves a file
/// with the final name behind. The partial file is removed on failure.
///
/// If the returned future is dropped while the archive is being written,
/// the blocking write still runs to completion and its `.partial` file is
/// left in `folder`; the `.epub` itself is never created in that case.
pub async fn write_epub(
    files: Vec<FileDescriptor>,
    folder: &Path,
    filename: &str,
    config: &EpubConfig,
) -> Result<PathBuf> {
    tokio::fs::create_dir_all(folder).await?;

    let target = folder.join(format!("{filename}.epub"));
    let partial = folder.join(format!("{filename}.epub.partial"));
    let config = config.clone();

    let result = {
        let partial = partial.clone();
        tokio::task::spawn_blocking(move || write_partial(&files, &partial, &config))
            .await
            .map_err(|e| Error::Io(io::Error::other(e)))
            .and_then(|r| r)
    };

    let result = match result {
        Ok(()) => tokio::fs::rename(&partial, &target).await.map_err(Error::from),
        Err(e) => Err(e),
    };
    if let Err(e) = result {
        let _ = tokio::fs::remove_file(&partial).await;
        return Err(e);
    }

    info!(path = %target.display(), "wrote epub");
    Ok(target)
}

fn write_partial(files: &[FileDescriptor], path: &Path, config: &EpubConfig) -> Result<()> {
    let file = fs::File::create(path)?;
    let file = write_epub_to_writer(files, file, config)?;
    file.sync_all()?;
    Ok(())
}

/// Mirror a file set onto a directory tree under `folder`.
///
/// Existing folders are reused; existing files are overwritten.
pub async fn write_files(files: &[FileDescriptor], folder: &Path) -> Result<()> {
    tokio::fs::create_dir_all(folder).await?;

    for file in files {
        let dir = if file.folder.is_empty() {
            folder.to_path_buf()
        } else {
            folder.join(&file.folder)
        };
        tokio::fs::create_dir_all(&dir).await?;
        tokio::fs::write(dir.join(&file.name), file.content.as_bytes()).await?;
        debug!(path = %file.path(), "wrote file");
    }

    info!(folder = %folder.display(), files = files.len(), "wrote loose files");
    Ok(())
}

fn check_file_set(files: &[FileDescriptor]) -> Result<()> {
    let first = files
        .first()
        .ok_or_else(|| Error::InvalidFileSet("no files".to_string()))?;

    if first.name != "mimetype" || !first.folder.is_empty() {
        return Err(Error::InvalidFileSet(format!(
            "first entry is {}, expected mimetype",
            first.path()
        )));
    }
    if first.compress {
        return Err(Error::InvalidFileSet(
            "mimetype must be stored uncompressed".to_string(),
        ));
    }
    if files[1..].iter().any(|f| f.path() == "mimetype") {
        return Err(Error::InvalidFileSet("duplicate mimetype entry".to_string()));
    }
    Ok(())
}
