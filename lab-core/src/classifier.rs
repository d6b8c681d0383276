//! Keyword heuristic that labels lines of pseudo-code and guesses a complexity class.
//!
//! There is no parser. Each trimmed, lowercased line is checked with plain
//! substring search, first match wins:
//!
//! 1. contains `for` or `while` → [`LineKind::Loop`], opens a nesting level
//! 2. contains `if` or `else` → [`LineKind::Condition`]
//! 3. is exactly `end` → [`LineKind::BlockEnd`], closes a level (never below zero)
//! 4. anything else → [`LineKind::Step`]
//!
//! Because the search is unanchored, `gift card` counts as a condition and
//! `information` as a loop. The complexity label comes from the deepest nesting
//! reached during the scan, not from where the scan ends.

use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LineKind {
    Loop,
    Condition,
    BlockEnd,
    Step,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClassifiedLine {
    /// The trimmed input line, original casing.
    pub text: String,
    pub kind: LineKind,
}

/// Coarse time-complexity tag derived only from maximum loop nesting.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Complexity {
    Constant,
    Linear,
    Quadratic,
    CubicOrWorse,
}

impl Complexity {
    pub fn from_depth(depth: usize) -> Self {
        match depth {
            0 => Self::Constant,
            1 => Self::Linear,
            2 => Self::Quadratic,
            _ => Self::CubicOrWorse,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Constant => "O(1)",
            Self::Linear => "O(n)",
            Self::Quadratic => "O(n²)",
            Self::CubicOrWorse => "O(n³+)",
        }
    }
}

impl fmt::Display for Complexity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AnalysisSummary {
    pub loop_count: usize,
    pub condition_count: usize,
    pub max_depth: usize,
    pub complexity: Complexity,
}

impl AnalysisSummary {
    /// `true` once two or more loops were nested.
    pub fn nested_loop_warning(&self) -> bool {
        self.max_depth >= 2
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Analysis {
    /// Input was empty or whitespace only.
    Empty,
    Report {
        lines: Vec<ClassifiedLine>,
        summary: AnalysisSummary,
    },
}

impl Analysis {
    pub fn summary(&self) -> Option<&AnalysisSummary> {
        match self {
            Self::Empty => None,
            Self::Report { summary, .. } => Some(summary),
        }
    }

    pub fn lines(&self) -> &[ClassifiedLine] {
        match self {
            Self::Empty => &[],
            Self::Report { lines, .. } => lines,
        }
    }
}

/// Whitespace as a browser's `String.prototype.trim` sees it: Unicode
/// `White_Space` plus the byte-order mark, minus NEL (U+0085).
fn is_trim_space(c: char) -> bool {
    c == '\u{FEFF}' || (c.is_whitespace() && c != '\u{0085}')
}

/// Classifies a single trimmed line. Does not touch any counters.
pub fn classify_line(line: &str) -> LineKind {
    let lower = line.to_lowercase();
    if lower.contains("for") || lower.contains("while") {
        LineKind::Loop
    } else if lower.contains("if") || lower.contains("else") {
        LineKind::Condition
    } else if lower == "end" {
        LineKind::BlockEnd
    } else {
        LineKind::Step
    }
}

/// Runs the heuristic over a block of text.
///
/// Blank lines are dropped before classification and never affect any
/// count. Input that is empty after trimming yields [`Analysis::Empty`].
pub fn analyze(text: &str) -> Analysis {
    let text = text.trim_matches(is_trim_space);
    if text.is_empty() {
        return Analysis::Empty;
    }

    let mut lines = Vec::new();
    let mut loop_count = 0;
    let mut condition_count = 0;
    let mut depth: usize = 0;
    let mut max_depth = 0;

    for line in text
        .lines()
        .map(|l| l.trim_matches(is_trim_space))
        .filter(|l| !l.is_empty())
    {
        let kind = classify_line(line);
        match kind {
            LineKind::Loop => {
                loop_count += 1;
                depth += 1;
                max_depth = max_depth.max(depth);
            }
            LineKind::Condition => condition_count += 1,
            LineKind::BlockEnd => depth = depth.saturating_sub(1),
            LineKind::Step => {}
        }
        lines.push(ClassifiedLine {
            text: line.to_owned(),
            kind,
        });
    }

    let summary = AnalysisSummary {
        loop_count,
        condition_count,
        max_depth,
        complexity: Complexity::from_depth(max_depth),
    };
    tracing::debug!(
        lines = lines.len(),
        loops = loop_count,
        conditions = condition_count,
        max_depth,
        complexity = %summary.complexity,
        "logic analyzed"
    );

    Analysis::Report { lines, summary }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(a: &Analysis) -> Vec<LineKind> {
        a.lines().iter().map(|l| l.kind).collect()
    }

    #[test]
    fn mixed_block_classifies_in_order() {
        let a = analyze("for i\nif x\nend\nprint");

        assert_eq!(
            kinds(&a),
            vec![
                LineKind::Loop,
                LineKind::Condition,
                LineKind::BlockEnd,
                LineKind::Step
            ]
        );
        let s = a.summary().unwrap();
        assert_eq!(s.loop_count, 1);
        assert_eq!(s.condition_count, 1);
        assert_eq!(s.max_depth, 1);
        assert_eq!(s.complexity.label(), "O(n)");
        assert!(!s.nested_loop_warning());
    }

    #[test]
    fn nested_loops_are_quadratic_with_warning() {
        let a = analyze("for a\nfor b\nend\nend");
        let s = a.summary().unwrap();
        assert_eq!(s.max_depth, 2);
        assert_eq!(s.complexity.label(), "O(n²)");
        assert!(s.nested_loop_warning());
    }

    #[test]
    fn empty_and_whitespace_input_is_empty() {
        assert_eq!(analyze(""), Analysis::Empty);
        assert_eq!(analyze("  \n\t\n   "), Analysis::Empty);
        assert!(analyze("").summary().is_none());
    }

    #[test]
    fn loop_keyword_wins_over_condition() {
        assert_eq!(classify_line("for x if y"), LineKind::Loop);
        assert_eq!(classify_line("if while"), LineKind::Loop);
    }

    #[test]
    fn substring_matches_are_kept() {
        assert_eq!(classify_line("buy a gift card"), LineKind::Condition);
        assert_eq!(classify_line("look elsewhere"), LineKind::Condition);
        assert_eq!(classify_line("print information"), LineKind::Loop);
        assert_eq!(classify_line("do this before that"), LineKind::Loop);
        assert_eq!(classify_line("Format output"), LineKind::Loop);
    }

    #[test]
    fn end_must_be_the_whole_line() {
        assert_eq!(classify_line("END"), LineKind::BlockEnd);
        assert_eq!(classify_line("end loop"), LineKind::Step);
        assert_eq!(classify_line("the end"), LineKind::Step);
    }

    #[test]
    fn excess_ends_do_not_go_negative() {
        let a = analyze("end\nend\nfor x\nend\nend\nfor y\nfor z");
        let s = a.summary().unwrap();
        // depth floors at zero, so the second pair of loops reaches 2, not 1.
        assert_eq!(s.max_depth, 2);
        assert_eq!(s.loop_count, 3);
    }

    #[test]
    fn complexity_uses_max_not_final_depth() {
        let a = analyze("for a\nfor b\nfor c\nend\nend\nend\nstep");
        let s = a.summary().unwrap();
        assert_eq!(s.max_depth, 3);
        assert_eq!(s.complexity, Complexity::CubicOrWorse);
    }

    #[test]
    fn blank_lines_are_dropped_and_lines_trimmed() {
        let a = analyze("\n   step one  \n\n\r\n  if done\r\n");
        assert_eq!(a.lines().len(), 2);
        assert_eq!(a.lines()[0].text, "step one");
        assert_eq!(a.lines()[1].text, "if done");
    }

    #[test]
    fn byte_order_mark_counts_as_blank() {
        assert_eq!(analyze("\u{FEFF}"), Analysis::Empty);
        assert_eq!(analyze(" \u{FEFF}\n\u{A0}\t"), Analysis::Empty);

        let a = analyze("\u{FEFF}for i\u{FEFF}\n\u{FEFF}\nend");
        assert_eq!(a.lines().len(), 2);
        assert_eq!(a.lines()[0].text, "for i");
    }

    #[test]
    fn next_line_char_is_not_trimmed() {
        let a = analyze("\u{0085}");
        assert_eq!(a.lines().len(), 1);
        assert_eq!(a.lines()[0].text, "\u{0085}");
        assert_eq!(a.lines()[0].kind, LineKind::Step);
    }

    #[test]
    fn depth_labels() {
        assert_eq!(Complexity::from_depth(0).label(), "O(1)");
        assert_eq!(Complexity::from_depth(1).label(), "O(n)");
        assert_eq!(Complexity::from_depth(2).label(), "O(n²)");
        assert_eq!(Complexity::from_depth(3).label(), "O(n³+)");
        assert_eq!(Complexity::from_depth(42).label(), "O(n³+)");
    }
}
