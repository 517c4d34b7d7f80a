use std::fmt;

/// The six typed stacks, in the order their state is reported.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StackKind {
    Exec,
    Code,
    Integer,
    Float,
    Boolean,
    Name,
}

impl StackKind {
    pub const ALL: [StackKind; 6] = [
        StackKind::Exec,
        StackKind::Code,
        StackKind::Integer,
        StackKind::Float,
        StackKind::Boolean,
        StackKind::Name,
    ];

    pub fn name(self) -> &'static str {
        match self {
            StackKind::Exec => "exec",
            StackKind::Code => "code",
            StackKind::Integer => "integer",
            StackKind::Float => "float",
            StackKind::Boolean => "boolean",
            StackKind::Name => "name",
        }
    }

    /// Case-insensitive lookup.
    pub fn from_name(name: &str) -> Option<StackKind> {
        StackKind::ALL
            .into_iter()
            .find(|k| k.name().eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for StackKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
