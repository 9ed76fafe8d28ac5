use anyhow::{Result, anyhow};
use std::ffi::OsString;
use std::path::PathBuf;

pub const CONFIG_FILE: &str = "config.toml";

/// `$SIKA_HOME` if set and non-empty, else `$HOME/.sika`.
pub fn sika_home() -> Result<PathBuf> {
    resolve_home(std::env::var_os("SIKA_HOME"), std::env::var_os("HOME"))
}

fn resolve_home(sika_home: Option<OsString>, home: Option<OsString>) -> Result<PathBuf> {
    match (sika_home, home) {
        (Some(dir), _) if !dir.is_empty() => Ok(PathBuf::from(dir)),
        (_, Some(home)) if !home.is_empty() => Ok(PathBuf::from(home).join(".sika")),
        _ => Err(anyhow!("neither SIKA_HOME nor HOME is set")),
    }
}

pub fn config_path() -> Result<PathBuf> {
    Ok(sika_home()?.join(CONFIG_FILE))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_override_wins_over_home() {
        let dir = resolve_home(Some("/srv/sika".into()), Some("/home/awa".into())).unwrap();
        assert_eq!(dir, PathBuf::from("/srv/sika"));
    }

    #[test]
    fn test_falls_back_to_dot_dir() {
        let dir = resolve_home(Some(OsString::new()), Some("/home/awa".into())).unwrap();
        assert_eq!(dir, PathBuf::from("/home/awa/.sika"));
        assert!(resolve_home(None, None).is_err());
    }
}
