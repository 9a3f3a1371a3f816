mod ensure;
mod resolve;

pub use ensure::ensure_dirs;
pub use resolve::{config_dir, crash_report_dir, data_dir, log_dir};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_dir_ends_with_taskdock() {
        let path = config_dir().unwrap();
        assert!(
            path.ends_with("taskdock"),
            "config_dir should end with 'taskdock', got: {path:?}"
        );
    }

    #[test]
    fn log_dir_is_inside_data_dir() {
        let log = log_dir().unwrap();
        let data = data_dir().unwrap();
        assert!(log.starts_with(&data));
        assert_eq!(log.file_name().unwrap().to_str().unwrap(), "logs");
    }

    #[test]
    fn crash_report_dir_is_inside_log_dir() {
        let crash = crash_report_dir().unwrap();
        assert!(crash.starts_with(log_dir().unwrap()));
        assert!(crash.ends_with("crash-reports"));
    }
}
