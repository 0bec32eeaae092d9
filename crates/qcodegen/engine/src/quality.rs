//! Source-quality scan for template bodies.
//!
//! A lint, not a validator: the pipeline never emits text containing
//! unfinished-work markers or calls into APIs Qiskit removed. Catalog
//! integrity tests hold the built-in bodies to a clean scan; callers
//! loading external templates can run the same scan themselves.

/// Why a marker is flagged.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IssueKind {
    /// Leftover work marker (`TODO`, `FIXME`, `XXX`).
    UnfinishedWork,
    /// Call into an API removed from Qiskit 1.0+.
    DeprecatedApi,
}

/// One flagged marker occurrence.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QualityIssue {
    /// Classification of the marker.
    pub kind: IssueKind,
    /// The marker text that matched.
    pub marker: &'static str,
    /// 1-based line number of the occurrence.
    pub line: usize,
}

const UNFINISHED_MARKERS: &[&str] = &["TODO", "FIXME", "XXX"];

// qiskit.aqua and qiskit.chemistry were removed in Qiskit 0.25; top-level
// execute and the Aer provider shim went away in 1.0.
const DEPRECATED_MARKERS: &[&str] = &[
    "qiskit.aqua",
    "qiskit.chemistry",
    "Aer.get_backend",
    "qiskit.execute",
];

/// Whether `marker` occurs in `line` as a standalone word. Plain
/// substring search would flag Pauli strings like `"XXXX"` as `XXX`.
fn contains_word(line: &str, marker: &str) -> bool {
    let mut start = 0;
    while let Some(pos) = line[start..].find(marker) {
        let at = start + pos;
        let before = line[..at].chars().next_back();
        let after = line[at + marker.len()..].chars().next();
        let bounded = |c: Option<char>| c.map_or(true, |c| !c.is_ascii_alphanumeric());
        if bounded(before) && bounded(after) {
            return true;
        }
        start = at + marker.len();
    }
    false
}

/// Scan text for quality issues, in line order.
pub fn scan(text: &str) -> Vec<QualityIssue> {
    let mut issues = Vec::new();
    for (idx, line) in text.lines().enumerate() {
        for &marker in UNFINISHED_MARKERS {
            if contains_word(line, marker) {
                issues.push(QualityIssue {
                    kind: IssueKind::UnfinishedWork,
                    marker,
                    line: idx + 1,
                });
            }
        }
        for &marker in DEPRECATED_MARKERS {
            if line.contains(marker) {
                issues.push(QualityIssue {
                    kind: IssueKind::DeprecatedApi,
                    marker,
                    line: idx + 1,
                });
            }
        }
    }
    issues
}
