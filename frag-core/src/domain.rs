// frag_core/src/domain.rs

/// Contiguous half-open range `[start, end)` over the frame sequences.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Fragment {
    pub id: usize,
    pub start: usize,
    pub end: usize,
}

impl Fragment {
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Index file name for one role, e.g. `fragment_007_colors.txt`.
    pub fn file_name(&self, role: Role) -> String {
        role.file_name(self.id)
    }
}

/// Which of the two parallel index files a list belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Role {
    Colors,
    Depths,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Colors => "colors",
            Role::Depths => "depths",
        }
    }

    /// `_colors.txt` / `_depths.txt`
    pub fn suffix(self) -> String {
        format!("_{}.txt", self.as_str())
    }

    pub fn file_name(self, id: usize) -> String {
        format!("fragment_{:03}_{}.txt", id, self.as_str())
    }
}

/// Index-aligned depth and color frame paths, in capture order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FramePaths {
    pub depth: Vec<String>,
    pub color: Vec<String>,
}

impl FramePaths {
    pub fn len(&self) -> usize {
        self.depth.len()
    }

    pub fn is_empty(&self) -> bool {
        self.depth.is_empty()
    }
}
