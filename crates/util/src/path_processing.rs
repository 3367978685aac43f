use std::path::{Path, PathBuf};

use dirs_next::home_dir;

/// Replaces a leading `~` component with the user's home directory.
///
/// `~user` forms are left alone, as is everything when no home directory
/// can be determined.
pub fn expand_tilde(path: impl AsRef<Path>) -> PathBuf {
    let path = path.as_ref();
    let (Ok(rest), Some(home)) = (path.strip_prefix("~"), home_dir()) else {
        return path.to_path_buf();
    };
    if rest.as_os_str().is_empty() { home } else { home.join(rest) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_without_a_tilde_component_are_unchanged() {
        assert_eq!(expand_tilde("/tmp/carte.json"), PathBuf::from("/tmp/carte.json"));
        assert_eq!(expand_tilde("relative/~/file"), PathBuf::from("relative/~/file"));
        assert_eq!(expand_tilde("~chef/menu.json"), PathBuf::from("~chef/menu.json"));
    }

    #[test]
    fn tilde_prefix_joins_home() {
        if let Some(home) = home_dir() {
            assert_eq!(expand_tilde("~/menus/config.json"), home.join("menus/config.json"));
            assert_eq!(expand_tilde("~"), home);
        }
    }
}
