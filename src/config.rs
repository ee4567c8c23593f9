//! Engine configuration

/// Search knobs for [`AIEngine`](crate::engine::AIEngine).
///
/// - `depth`: ply looked ahead from the position to move in
/// - `radius`: candidate cells must lie this close to an existing stone
/// - `parallel`: search root candidates on the rayon thread pool
/// - `verify_terminal`: cross-check the evaluator on finished games (debug builds only)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    pub depth: u32,
    pub radius: u8,
    pub parallel: bool,
    pub verify_terminal: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            depth: 3,
            radius: 1,
            parallel: false,
            verify_terminal: false,
        }
    }
}

impl EngineConfig {
    #[must_use]
    pub fn depth(mut self, depth: u32) -> Self {
        self.depth = depth;
        self
    }

    #[must_use]
    pub fn radius(mut self, radius: u8) -> Self {
        self.radius = radius;
        self
    }

    #[must_use]
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    #[must_use]
    pub fn verify_terminal(mut self, verify: bool) -> Self {
        self.verify_terminal = verify;
        self
    }
}
