//! Operations on repeatable form rows: breadcrumbs and the various
//! card groups share the same add/remove/reorder behavior.

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum CardOp {
    Add,
    Remove,
    MoveUp,
    MoveDown,
}

impl CardOp {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Remove => "remove",
            Self::MoveUp => "move-up",
            Self::MoveDown => "move-down",
        }
    }
}

impl std::fmt::Display for CardOp {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for CardOp {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "add" => Ok(Self::Add),
            "remove" => Ok(Self::Remove),
            "move-up" => Ok(Self::MoveUp),
            "move-down" => Ok(Self::MoveDown),
            _ => Err(format!("invalid card operation: {}", s)),
        }
    }
}

/// Apply an operation to a row list. `min_len` keeps groups that must
/// never empty out (breadcrumbs) at their floor; out-of-range indexes
/// and no-op moves leave the list unchanged.
pub fn apply_card_op<T: Default>(
    rows: &mut Vec<T>,
    op: CardOp,
    index: usize,
    min_len: usize,
) {
    match op {
        CardOp::Add => rows.push(T::default()),
        CardOp::Remove => {
            if rows.len() > min_len && index < rows.len() {
                rows.remove(index);
            }
        }
        CardOp::MoveUp => {
            if index > 0 && index < rows.len() {
                rows.swap(index - 1, index);
            }
        }
        CardOp::MoveDown => {
            if index + 1 < rows.len() {
                rows.swap(index, index + 1);
            }
        }
    }
}
