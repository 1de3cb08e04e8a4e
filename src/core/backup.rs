use crate::db::log::audit;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success, warning};
use crate::ui::prompt::confirm;
use rusqlite::Connection;
use std::fs;
use std::path::{Path, PathBuf};
use zip::ZipWriter;
use zip::write::FileOptions;

pub struct BackupLogic;

impl BackupLogic {
    /// Copy the sheet database to `dest_file`, optionally zipped.
    /// Returns the path of the final backup, or `None` if the operator
    /// declined to overwrite an existing file.
    pub fn backup(
        db_path: &str,
        dest_file: &str,
        compress: bool,
        force: bool,
    ) -> AppResult<Option<PathBuf>> {
        let src = Path::new(db_path);
        let dest = Path::new(dest_file);

        // 1️⃣ Check DB exists
        if !src.exists() {
            return Err(AppError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("Database not found: {}", src.display()),
            )));
        }

        // 2️⃣ Ensure destination folder exists
        if let Some(parent) = dest.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        // 3️⃣ Existing destination → ask
        let final_target = if compress {
            dest.with_extension("zip")
        } else {
            dest.to_path_buf()
        };
        if final_target.exists()
            && !force
            && !confirm(&format!(
                "The file '{}' already exists. Overwrite?",
                final_target.display()
            ))
        {
            info("Backup cancelled.");
            return Ok(None);
        }

        // 4️⃣ Copy database
        fs::copy(src, dest)?;

        // 5️⃣ Optional compression
        let final_path = if compress {
            let compressed = compress_backup(dest)?;
            if let Err(e) = fs::remove_file(dest) {
                warning(format!("Failed to remove uncompressed backup: {}", e));
            }
            compressed
        } else {
            dest.to_path_buf()
        };

        success(format!("Backup created: {}", final_path.display()));

        // 6️⃣ Audit
        if let Ok(conn) = Connection::open(src) {
            audit(
                &conn,
                "backup",
                &final_path.to_string_lossy(),
                if compress {
                    "Backup created and compressed"
                } else {
                    "Backup created"
                },
            );
        }

        Ok(Some(final_path))
    }
}

/// Compress a backup using .zip
fn compress_backup(path: &Path) -> AppResult<PathBuf> {
    let zip_path = path.with_extension("zip");
    let file = fs::File::create(&zip_path)?;
    let mut zip = ZipWriter::new(file);

    let options: FileOptions<'_, ()> =
        FileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| "rfuellogger.sqlite".to_string());

    let mut f = fs::File::open(path)?;
    zip.start_file(name, options).map_err(std::io::Error::other)?;

    std::io::copy(&mut f, &mut zip)?;
    zip.finish().map_err(std::io::Error::other)?;

    Ok(zip_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::migrate::run_pending_migrations;
    use std::env;

    fn tmp(name: &str) -> PathBuf {
        let mut p = env::temp_dir();
        p.push(format!("rfuellogger_backup_{name}"));
        fs::remove_file(&p).ok();
        p
    }

    #[test]
    fn plain_and_zipped_backups() {
        let db = tmp("src.sqlite");
        {
            let conn = Connection::open(&db).unwrap();
            run_pending_migrations(&conn).unwrap();
        }
        let db_str = db.to_string_lossy().to_string();

        let plain = tmp("copy.sqlite");
        let got = BackupLogic::backup(&db_str, &plain.to_string_lossy(), false, true)
            .unwrap()
            .unwrap();
        assert_eq!(got, plain);
        assert!(plain.exists());

        let zipped_src = tmp("zipped.sqlite");
        fs::remove_file(zipped_src.with_extension("zip")).ok();
        let got = BackupLogic::backup(&db_str, &zipped_src.to_string_lossy(), true, true)
            .unwrap()
            .unwrap();
        assert_eq!(got.extension().unwrap(), "zip");
        assert!(got.exists());
        assert!(!zipped_src.exists());
    }

    #[test]
    fn missing_database_is_an_error() {
        let missing = tmp("does_not_exist.sqlite");
        let dest = tmp("never.sqlite");
        assert!(
            BackupLogic::backup(&missing.to_string_lossy(), &dest.to_string_lossy(), false, true)
                .is_err()
        );
    }
}
