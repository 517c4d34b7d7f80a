//! Program trees.
//!
//! A Push program is either an atom (a single non-empty token) or a list of
//! programs. Programs are plain values: they are cloned when they move onto
//! a stack or into a binding, never shared mutably.

use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Code {
    Atom(String),
    List(Vec<Code>),
}

impl Code {
    pub fn atom(text: impl Into<String>) -> Self {
        let text = text.into();
        debug_assert!(!text.is_empty(), "atoms are never empty");
        Code::Atom(text)
    }

    pub fn list(items: Vec<Code>) -> Self {
        Code::List(items)
    }

    pub fn empty() -> Self {
        Code::List(Vec::new())
    }

    pub fn is_atom(&self) -> bool {
        matches!(self, Code::Atom(_))
    }

    pub fn as_atom(&self) -> Option<&str> {
        match self {
            Code::Atom(s) => Some(s),
            Code::List(_) => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Code]> {
        match self {
            Code::Atom(_) => None,
            Code::List(items) => Some(items),
        }
    }

    /// Number of points: every atom and every list (including the empty
    /// list) counts as one.
    pub fn points(&self) -> usize {
        let mut total = 0;
        let mut pending = vec![self];
        while let Some(code) = pending.pop() {
            total += 1;
            if let Code::List(items) = code {
                pending.extend(items.iter());
            }
        }
        total
    }

    /// The subtree at `index` in depth-first pre-order, where index 0 is the
    /// tree itself. The index wraps modulo `points()`.
    pub fn nth_point(&self, index: usize) -> &Code {
        let mut remaining = index % self.points();
        let mut pending = vec![self];
        while let Some(code) = pending.pop() {
            if remaining == 0 {
                return code;
            }
            remaining -= 1;
            if let Code::List(items) = code {
                pending.extend(items.iter().rev());
            }
        }
        self
    }

    /// True when `needle` equals this tree or any of its subtrees.
    pub fn contains(&self, needle: &Code) -> bool {
        let mut pending = vec![self];
        while let Some(code) = pending.pop() {
            if code == needle {
                return true;
            }
            if let Code::List(items) = code {
                pending.extend(items.iter());
            }
        }
        false
    }

    /// Wrap an atom in a single-element list; lists are returned unchanged.
    pub fn into_list(self) -> Vec<Code> {
        match self {
            Code::List(items) => items,
            atom => vec![atom],
        }
    }
}

impl FromIterator<Code> for Code {
    fn from_iter<I: IntoIterator<Item = Code>>(iter: I) -> Self {
        Code::List(iter.into_iter().collect())
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Code::Atom(s) => f.write_str(s),
            Code::List(items) => {
                f.write_str("(")?;
                for item in items {
                    write!(f, " {item}")?;
                }
                f.write_str(" )")
            }
        }
    }
}
