//! Display text and colours for classifier output.

use std::fmt::{self, Write as _};

use crate::{
    classifier::{Analysis, AnalysisSummary, ClassifiedLine, LineKind},
    render::Rgba,
};

pub const EMPTY_INPUT_MESSAGE: &str = "No logic entered.";
pub const SUMMARY_TITLE: &str = "Analysis Summary";
pub const NESTED_LOOP_WARNING: &str = "⚠ Nested loops detected — may impact performance.";

impl LineKind {
    /// Left-border accent for a row of this kind.
    pub fn accent(self) -> Rgba {
        match self {
            Self::Loop => Rgba::opaque(0xfa, 0xcc, 0x15),
            Self::Condition => Rgba::opaque(0x38, 0xbd, 0xf8),
            Self::BlockEnd => Rgba::opaque(0x64, 0x74, 0x8b),
            Self::Step => Rgba::opaque(0x22, 0xc5, 0x5e),
        }
    }
}

impl fmt::Display for ClassifiedLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            LineKind::Loop => write!(f, "🔁 Loop detected → {}", self.text),
            LineKind::Condition => write!(f, "🔀 Condition → {}", self.text),
            LineKind::BlockEnd => f.write_str("⏹ End"),
            LineKind::Step => write!(f, "➡ {}", self.text),
        }
    }
}

impl AnalysisSummary {
    /// Body rows of the summary block, without the title.
    pub fn rows(&self) -> Vec<String> {
        let mut rows = vec![
            format!("🔁 Loops detected: {}", self.loop_count),
            format!("🔀 Conditions detected: {}", self.condition_count),
            format!("📊 Max loop depth: {}", self.max_depth),
            format!("⏱ Estimated Time Complexity: {}", self.complexity),
        ];
        if self.nested_loop_warning() {
            rows.push(NESTED_LOOP_WARNING.to_owned());
        }
        rows
    }
}

impl Analysis {
    /// Plain-text rendering of the whole result, one row per line.
    pub fn render_text(&self) -> String {
        let (lines, summary) = match self {
            Self::Empty => return EMPTY_INPUT_MESSAGE.to_owned(),
            Self::Report { lines, summary } => (lines, summary),
        };

        let mut out = String::new();
        for line in lines {
            let _ = writeln!(out, "{line}");
        }
        let _ = writeln!(out);
        let _ = writeln!(out, "{SUMMARY_TITLE}");
        for row in summary.rows() {
            let _ = writeln!(out, "{row}");
        }
        out
    }
}
