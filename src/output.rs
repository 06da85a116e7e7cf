use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::curve::model::ResampledCurve;
use crate::error::{KlamError, Result};

/// Write `curve` to `dir/file_name`, replacing any existing file.
///
/// Rows go to a hidden sibling first and are renamed into place only once
/// fully flushed, so a failure never leaves a truncated table behind.
pub fn write_curve(dir: &Path, file_name: &str, curve: &ResampledCurve) -> Result<PathBuf> {
    let target = dir.join(file_name);
    let staging = dir.join(format!(".{file_name}.tmp"));

    if let Err(e) = write_staging(&staging, curve) {
        let _ = fs::remove_file(&staging);
        return Err(e);
    }
    if let Err(e) = fs::rename(&staging, &target) {
        let _ = fs::remove_file(&staging);
        return Err(KlamError::io(&target, e));
    }
    Ok(target)
}

fn write_staging(path: &Path, curve: &ResampledCurve) -> Result<()> {
    let file = File::create(path).map_err(|e| KlamError::io(path, e))?;
    let mut out = BufWriter::new(file);
    curve
        .write_table(&mut out)
        .and_then(|()| out.flush())
        .map_err(|e| KlamError::io(path, e))?;
    out.get_ref().sync_all().map_err(|e| KlamError::io(path, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("klam-output-{}-{name}", std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    fn sample() -> ResampledCurve {
        ResampledCurve {
            wavelengths: vec![3200.0, 3200.5],
            coefficients: vec![1.0, 1.25],
        }
    }

    #[test]
    fn writes_table_and_leaves_no_staging_file() {
        let dir = scratch_dir("write");
        let path = write_curve(&dir, "TEST_KLAM.dat", &sample()).unwrap();
        assert_eq!(path, dir.join("TEST_KLAM.dat"));
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "3200.000 1.00000\n3200.500 1.25000\n"
        );
        let names: Vec<_> = fs::read_dir(&dir).unwrap().map(|e| e.unwrap().file_name()).collect();
        assert_eq!(names.len(), 1);
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn replaces_existing_file() {
        let dir = scratch_dir("replace");
        fs::write(dir.join("TEST_KLAM.dat"), "stale\n").unwrap();
        write_curve(&dir, "TEST_KLAM.dat", &sample()).unwrap();
        let text = fs::read_to_string(dir.join("TEST_KLAM.dat")).unwrap();
        assert!(text.starts_with("3200.000"));
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn missing_directory_is_io_error() {
        let dir = std::env::temp_dir().join("klam-output-does-not-exist/nested");
        let err = write_curve(&dir, "TEST_KLAM.dat", &sample()).unwrap_err();
        assert!(matches!(err, KlamError::Io { .. }));
    }
}
