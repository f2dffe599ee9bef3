use crate::metadata::{FixtureMarker, MethodInfo, TypeInfo};

/// Finds the declaration level whose markers decide how a type is built.
#[derive(Debug, Default)]
pub struct MarkerResolver;

impl MarkerResolver {
    pub fn new() -> Self {
        Self
    }

    /// Walks the hierarchy nearest-first and returns the fixture markers
    /// of the first level that declares any.
    ///
    /// Markers on a nearer level shadow everything declared further up;
    /// sets from different levels are never merged. An exhausted chain
    /// yields the empty set.
    pub fn resolve<'a>(&self, ty: &'a TypeInfo) -> Vec<&'a FixtureMarker> {
        for level in ty.hierarchy() {
            let markers: Vec<&FixtureMarker> = level.fixture_markers().collect();
            if !markers.is_empty() {
                return markers;
            }
        }
        Vec::new()
    }

    /// Whether any method in the hierarchy carries a test-implying marker.
    ///
    /// Unlike marker resolution, method-driven discovery is not subject to
    /// the shadowing rule: every level contributes.
    pub fn implies_fixture(&self, ty: &TypeInfo) -> bool {
        ty.hierarchy()
            .any(|level| level.methods().iter().any(MethodInfo::implies_fixture))
    }
}
