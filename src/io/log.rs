use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

/// Name of the append-only event log in the data directory
pub const LOG_FILE: &str = ".tend.log";

/// Append a swallowed error to the event log.
///
/// Persistence failures are best-effort by policy: the user is not
/// interrupted, but the failure leaves a trace here. A failure to log is
/// itself ignored.
pub fn log_error(dir: &Path, context: &str, err: &dyn std::error::Error) {
    let Ok(mut file) = OpenOptions::new()
        .create(true)
        .append(true)
        .open(dir.join(LOG_FILE))
    else {
        return;
    };
    let _ = writeln!(
        file,
        "[{}] {}: {}",
        chrono::Utc::now().format("%Y-%m-%dT%H:%M:%S%.3fZ"),
        context,
        err
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn log_error_appends_timestamped_lines() {
        let dir = TempDir::new().unwrap();
        let err = std::io::Error::new(std::io::ErrorKind::Other, "disk full");
        log_error(dir.path(), "save todos", &err);
        log_error(dir.path(), "save habits", &err);

        let content = std::fs::read_to_string(dir.path().join(LOG_FILE)).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("save todos: disk full"));
        assert!(lines[1].contains("save habits"));
    }

    #[test]
    fn log_error_to_missing_dir_is_silent() {
        let err = std::io::Error::new(std::io::ErrorKind::Other, "nope");
        // Must not panic
        log_error(Path::new("/nonexistent/path/for/test"), "save todos", &err);
    }
}
