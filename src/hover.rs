/// Tracks which hover a repository fetch belongs to.
///
/// Every pointer-enter takes a new token. A response may only be applied
/// while its token is still the active one, so results arriving after
/// pointer-leave or after a newer hover are dropped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HoverGate {
    issued: u64,
    active: Option<u64>,
}

impl HoverGate {
    /// Start a new hover and return its token
    pub fn enter(&mut self) -> u64 {
        self.issued += 1;
        self.active = Some(self.issued);
        self.issued
    }

    pub fn leave(&mut self) {
        self.active = None;
    }

    #[must_use]
    pub fn accepts(&self, token: u64) -> bool {
        self.active == Some(token)
    }
}

/// Number of repositories listed before collapsing into "+N more"
pub const PREVIEW_LIMIT: usize = 6;

/// Split fetched repositories into the visible head and the overflow count
#[must_use]
pub fn preview<T>(items: &[T]) -> (&[T], usize) {
    let shown = items.len().min(PREVIEW_LIMIT);
    (&items[..shown], items.len() - shown)
}
