use std::fmt;

/// Standard directory roles of an installed application.
///
/// Each role resolves to `<root>/<name>` unless the settings override it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DirRole {
    Bin,
    Etc,
    Lib,
    Share,
    Var,
    Plugins,
}

impl DirRole {
    pub const ALL: [DirRole; 6] = [
        DirRole::Bin,
        DirRole::Etc,
        DirRole::Lib,
        DirRole::Share,
        DirRole::Var,
        DirRole::Plugins,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Bin => "bin",
            Self::Etc => "etc",
            Self::Lib => "lib",
            Self::Share => "share",
            Self::Var => "var",
            Self::Plugins => "plugins",
        }
    }
}

impl fmt::Display for DirRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_role_names_are_distinct() {
        let names: HashSet<_> = DirRole::ALL.iter().map(|r| r.as_str()).collect();
        assert_eq!(names.len(), DirRole::ALL.len());
        assert_eq!(DirRole::Etc.to_string(), "etc");
    }
}
