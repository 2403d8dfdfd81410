use bitflags::bitflags;

bitflags! {
    /// Eligibility flags for a menu selection.
    ///
    /// A mask is computed fresh on every menu-open event from the selection
    /// kind and the repository state; a menu entry is shown when the mask
    /// contains every flag the entry asks for. The empty mask is the
    /// "unavailable" classification (git itself could not be launched) and
    /// matches nothing, not even `ALWAYS` entries.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct MenuFlags: u32 {
        /// Set on every usable mask; entries gated on it alone always show.
        const ALWAYS    = 0b000001;
        /// The selection is a file.
        const FILE      = 0b000010;
        /// The selection is a directory.
        const DIR       = 0b000100;
        /// The selection is inside a git repository.
        const REPO      = 0b001000;
        /// The selection is not inside a git repository.
        const NOREPO    = 0b010000;
        /// The selection is tracked by git (HEAD knows the path).
        const TRACKED   = 0b100000;
        /// The selection is inside a repository but not tracked.
        const UNTRACKED = 0b1000000;
    }
}

impl MenuFlags {
    /// Terminal classification for a selection whose state could not be
    /// queried at all. Matches no entry.
    pub const UNAVAILABLE: MenuFlags = MenuFlags::empty();

    pub fn is_unavailable(&self) -> bool {
        self.is_empty()
    }

    /// Whether an entry gated on `wanted` is eligible under this mask.
    pub fn eligible(&self, wanted: MenuFlags) -> bool {
        !self.is_unavailable() && self.contains(wanted)
    }
}
