use std::path::{Path, PathBuf};

/// Default guidance document maintained in a project root.
pub const CLAUDE_MD: &str = "CLAUDE.md";

pub fn claude_md_path(root: &Path) -> PathBuf {
    root.join(CLAUDE_MD)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_target_sits_in_the_root() {
        assert_eq!(
            claude_md_path(Path::new("/tmp/proj")),
            PathBuf::from("/tmp/proj/CLAUDE.md")
        );
    }
}
