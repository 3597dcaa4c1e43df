use crate::core::store::LogStore;
use crate::errors::{AppError, AppResult};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::info;
use zip::ZipWriter;
use zip::write::FileOptions;

pub struct BackupLogic;

impl BackupLogic {
    /// Zip every day file of the store into `dest`.
    ///
    /// Returns the number of files archived. An existing `dest` is only
    /// replaced when `force` is set.
    pub fn backup(store: &LogStore, dest: &Path, force: bool) -> AppResult<usize> {
        let days = store.list_days()?;
        if days.is_empty() {
            return Err(AppError::Backup(format!(
                "no log files found in {}",
                store.dir().display()
            )));
        }

        if dest.exists() && !force {
            return Err(AppError::Backup(format!(
                "'{}' already exists, use --force to overwrite",
                dest.display()
            )));
        }

        if let Some(parent) = dest.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let files: Vec<PathBuf> = days.iter().map(|d| store.path_for(*d)).collect();
        compress_files(&files, dest)?;

        info!(dest = %dest.display(), files = files.len(), "backup written");
        Ok(files.len())
    }
}

fn compress_files(files: &[PathBuf], dest: &Path) -> AppResult<()> {
    let file = fs::File::create(dest)?;
    let mut zip = ZipWriter::new(file);

    let options: FileOptions<'_, ()> =
        FileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    for path in files {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .ok_or_else(|| AppError::Backup(format!("invalid file name: {}", path.display())))?;

        zip.start_file(name, options).map_err(io::Error::other)?;
        let mut f = fs::File::open(path)?;
        io::copy(&mut f, &mut zip)?;
    }

    zip.finish().map_err(io::Error::other)?;
    Ok(())
}
