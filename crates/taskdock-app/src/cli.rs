use clap::Parser;

/// TaskDock: pin groups of shortcuts to the taskbar as their own buttons.
#[derive(Parser, Debug)]
#[command(name = "taskdock", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<String>,

    /// Log level override (debug, info, warn, error).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Show this group's popup at the cursor and exit once it closes.
    #[arg(long, value_name = "ID")]
    pub group: Option<String>,
}

pub fn parse() -> Args {
    Args::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_service_mode() {
        let args = Args::try_parse_from(["taskdock"]).unwrap();
        assert!(args.group.is_none());
        assert!(args.config.is_none());
    }

    #[test]
    fn parses_launch_mode() {
        let args = Args::try_parse_from([
            "taskdock",
            "--group",
            "3f2a",
            "--log-level",
            "debug",
            "--config",
            "C:/taskdock.toml",
        ])
        .unwrap();
        assert_eq!(args.group.as_deref(), Some("3f2a"));
        assert_eq!(args.log_level.as_deref(), Some("debug"));
        assert_eq!(args.config.as_deref(), Some("C:/taskdock.toml"));
    }
}
