use std::fmt::Write as _;

use anyhow::Result;
use serde::Serialize;

use crate::cli::OutputFormat;
use crate::tree::{NodeKind, RunState, TestNode};

#[derive(Debug, Serialize)]
pub struct DiscoveryReport<'a> {
    pub fixtures_built: usize,
    pub total_tests: usize,
    pub not_runnable: usize,
    pub tree: &'a TestNode,
}

pub struct OutputFormatter;

impl OutputFormatter {
    pub fn format(root: &TestNode, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&Self::build_report(root))?),
            OutputFormat::Text => Ok(Self::render_text(root)),
        }
    }

    pub fn build_report(root: &TestNode) -> DiscoveryReport<'_> {
        DiscoveryReport {
            fixtures_built: root.children().len(),
            total_tests: root.test_count(),
            not_runnable: count_not_runnable(root),
            tree: root,
        }
    }

    fn render_text(root: &TestNode) -> String {
        let mut out = String::new();
        Self::render_node(root, 0, &mut out);
        out
    }

    fn render_node(node: &TestNode, depth: usize, out: &mut String) {
        let indent = "  ".repeat(depth);
        let _ = write!(out, "{indent}{} [{}]", node.name(), kind_label(node.kind()));
        if let Some(label) = state_label(node.run_state()) {
            let _ = write!(out, " ({label})");
        }
        if let Some(reason) = node.skip_reason() {
            let first_line = reason.lines().next().unwrap_or(reason);
            let _ = write!(out, ": {first_line}");
        }
        out.push('\n');

        for child in node.children() {
            Self::render_node(child, depth + 1, out);
        }
    }
}

fn kind_label(kind: NodeKind) -> &'static str {
    match kind {
        NodeKind::Test => "test",
        NodeKind::Fixture => "fixture",
        NodeKind::ParameterizedFixture => "parameterized-fixture",
        NodeKind::ParameterizedMethod => "parameterized-method",
        NodeKind::Suite => "suite",
    }
}

fn state_label(state: RunState) -> Option<&'static str> {
    match state {
        RunState::Runnable => None,
        RunState::NotRunnable => Some("not runnable"),
        RunState::Ignored => Some("ignored"),
        RunState::Skipped => Some("skipped"),
    }
}

fn count_not_runnable(node: &TestNode) -> usize {
    let own = usize::from(node.run_state() == RunState::NotRunnable);
    own + node
        .children()
        .iter()
        .map(count_not_runnable)
        .sum::<usize>()
}
