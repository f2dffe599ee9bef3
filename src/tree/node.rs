use serde::Serialize;

use crate::tree::{keys, PropertyBag};

/// Executability status of a composed node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum RunState {
    Runnable,
    /// Construction failed; the skip-reason property carries the cause.
    NotRunnable,
    Ignored,
    Skipped,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum NodeKind {
    Test,
    Fixture,
    /// Wraps alternative fixture instantiations of one declaration.
    ParameterizedFixture,
    /// Wraps the expanded cases of one parameterized method.
    ParameterizedMethod,
    /// A plain grouping node, e.g. the root of a scan.
    Suite,
}

/// One node of the composed test tree.
///
/// Every kind other than `Test` is a suite and exclusively owns its
/// children, in the order they were composed.
#[derive(Debug, Clone, Serialize)]
pub struct TestNode {
    name: String,
    kind: NodeKind,
    run_state: RunState,
    #[serde(skip_serializing_if = "PropertyBag::is_empty")]
    properties: PropertyBag,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    children: Vec<TestNode>,
}

impl TestNode {
    fn new(name: impl Into<String>, kind: NodeKind) -> Self {
        Self {
            name: name.into(),
            kind,
            run_state: RunState::Runnable,
            properties: PropertyBag::new(),
            children: Vec::new(),
        }
    }

    pub fn test(name: impl Into<String>) -> Self {
        Self::new(name, NodeKind::Test)
    }

    pub fn fixture(name: impl Into<String>) -> Self {
        Self::new(name, NodeKind::Fixture)
    }

    pub fn parameterized_fixture(name: impl Into<String>) -> Self {
        Self::new(name, NodeKind::ParameterizedFixture)
    }

    pub fn parameterized_method(name: impl Into<String>) -> Self {
        Self::new(name, NodeKind::ParameterizedMethod)
    }

    pub fn suite(name: impl Into<String>) -> Self {
        Self::new(name, NodeKind::Suite)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    pub fn run_state(&self) -> RunState {
        self.run_state
    }

    pub fn set_run_state(&mut self, run_state: RunState) {
        self.run_state = run_state;
    }

    pub fn properties(&self) -> &PropertyBag {
        &self.properties
    }

    pub fn properties_mut(&mut self) -> &mut PropertyBag {
        &mut self.properties
    }

    pub fn children(&self) -> &[TestNode] {
        &self.children
    }

    pub fn add_child(&mut self, child: TestNode) {
        self.children.push(child);
    }

    pub fn is_suite(&self) -> bool {
        self.kind != NodeKind::Test
    }

    /// Number of `Test` leaves in this subtree.
    pub fn test_count(&self) -> usize {
        let own = usize::from(self.kind == NodeKind::Test);
        own + self
            .children
            .iter()
            .map(TestNode::test_count)
            .sum::<usize>()
    }

    pub fn skip_reason(&self) -> Option<&str> {
        self.properties.get_str(keys::SKIP_REASON)
    }

    pub fn mark_not_runnable(&mut self, reason: impl Into<String>) {
        self.run_state = RunState::NotRunnable;
        self.properties.insert(keys::SKIP_REASON, reason.into());
    }

    pub fn mark_ignored(&mut self, reason: impl Into<String>) {
        self.run_state = RunState::Ignored;
        self.properties.insert(keys::SKIP_REASON, reason.into());
    }

    pub fn mark_skipped(&mut self, reason: impl Into<String>) {
        self.run_state = RunState::Skipped;
        self.properties.insert(keys::SKIP_REASON, reason.into());
    }
}
