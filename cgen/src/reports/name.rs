//! Name command report.

use super::output::{Output, Report};

/// One resolved name.
#[derive(Debug)]
pub struct NameReport {
    pub resolved: String,
    /// Corrective renames applied on the way, as `original -> renamed`.
    pub renames: Vec<String>,
}

impl Report for NameReport {
    fn render(&self, out: &mut dyn Output) {
        out.preformatted(&self.resolved);
        for rename in &self.renames {
            out.key_value_indented("renamed", rename);
        }
    }
}
