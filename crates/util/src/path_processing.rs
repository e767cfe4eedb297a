use std::path::PathBuf;

use dirs_next::home_dir;

/// Expand a leading `~` to the user's home directory.
///
/// Surrounding whitespace is trimmed. When the home directory cannot be
/// resolved, `~` is kept literally.
pub fn expand_tilde(path: &str) -> PathBuf {
    let p = path.trim();
    if p == "~" {
        return home_dir().unwrap_or_else(|| PathBuf::from("~"));
    }
    if let Some(rest) = p.strip_prefix("~/").or_else(|| p.strip_prefix("~\\")) {
        return home_dir().unwrap_or_else(|| PathBuf::from("~")).join(rest);
    }
    PathBuf::from(p)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leaves_plain_paths_alone() {
        assert_eq!(expand_tilde(" /etc/swatch/config.json "), PathBuf::from("/etc/swatch/config.json"));
        assert_eq!(expand_tilde("relative/config.json"), PathBuf::from("relative/config.json"));
        assert_eq!(expand_tilde("~user/config.json"), PathBuf::from("~user/config.json"));
    }

    #[test]
    fn expands_home_prefix() {
        if let Some(home) = home_dir() {
            assert_eq!(expand_tilde("~"), home);
            assert_eq!(expand_tilde("~/swatch/config.json"), home.join("swatch/config.json"));
        }
    }
}
