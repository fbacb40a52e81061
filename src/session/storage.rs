use super::options::SaveOptions;
use crate::error::{EditorError, Result};
use crate::image::{PixelBuffer, codec};
use log::{debug, info};
use std::fs::{self, File, OpenOptions};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Reads and decodes the bitmap stored at `path`.
pub fn read_image(path: &Path) -> Result<PixelBuffer> {
    let file = File::open(path).map_err(|err| EditorError::with_path(err, path))?;
    let mut reader = BufReader::new(file);
    let buffer = codec::read_from(&mut reader).map_err(|err| match err {
        EditorError::Io(io) => EditorError::with_path(io, path),
        other => other,
    })?;

    info!(
        "Loaded {} ({}x{})",
        path.display(),
        buffer.width(),
        buffer.height()
    );
    Ok(buffer)
}

/// Encodes `buffer` and writes it to `path`.
pub fn write_image(path: &Path, buffer: &PixelBuffer, options: &SaveOptions) -> Result<()> {
    let len = codec::encoded_len(buffer);

    if !options.atomic {
        if options.backup {
            rotate_backup(path)?;
        }
        write_file(path, buffer, false)?;
        info!("Saved {} ({} bytes)", path.display(), len);
        return Ok(());
    }

    let tmp_path = temp_path(path);
    let staged = write_file(&tmp_path, buffer, true).and_then(|()| {
        if options.backup {
            rotate_backup(path)?;
        }
        fs::rename(&tmp_path, path).map_err(|err| EditorError::with_path(err, path))
    });
    if let Err(err) = staged {
        fs::remove_file(&tmp_path).ok();
        return Err(err);
    }

    info!(
        "Saved {} ({} bytes, via {})",
        path.display(),
        len,
        tmp_path.display()
    );
    Ok(())
}

/// Path of the backup kept for `target`.
pub fn backup_path(target: &Path) -> PathBuf {
    let mut name = target.as_os_str().to_owned();
    name.push(".bak");
    PathBuf::from(name)
}

fn write_file(path: &Path, buffer: &PixelBuffer, create_new: bool) -> Result<()> {
    let file = if create_new {
        OpenOptions::new().write(true).create_new(true).open(path)
    } else {
        File::create(path)
    }
    .map_err(|err| EditorError::with_path(err, path))?;

    let mut writer = BufWriter::new(file);
    codec::write_to(buffer, &mut writer).map_err(|err| match err {
        EditorError::Io(io) => EditorError::with_path(io, path),
        other => other,
    })?;
    writer
        .flush()
        .map_err(|err| EditorError::with_path(err, path))?;
    if create_new {
        writer
            .get_ref()
            .sync_all()
            .map_err(|err| EditorError::with_path(err, path))?;
    }
    Ok(())
}

fn rotate_backup(target: &Path) -> Result<()> {
    if !target.exists() {
        return Ok(());
    }
    let backup = backup_path(target);
    if backup.exists() {
        fs::remove_file(&backup).ok();
    }
    fs::copy(target, &backup).map_err(|err| EditorError::with_path(err, &backup))?;
    debug!("Backed up {} -> {}", target.display(), backup.display());
    Ok(())
}

fn temp_path(target: &Path) -> PathBuf {
    let mut candidate = target.with_extension("bmp.tmp");
    let mut counter = 0u32;
    while candidate.exists() {
        counter += 1;
        candidate = target.with_extension(format!("bmp.tmp{}", counter));
    }
    candidate
}
