//! Parameter data provision and its use during method expansion.

mod common;

use common::child_names;
use fixture_discovery_core::metadata::{
    DataSource, FixtureMarker, MethodInfo, MethodMarker, ParameterInfo, TypeInfo,
};
use fixture_discovery_core::{ArgValue, NodeKind, ParameterDataProvider, RunState, SuiteBuilder};
use pretty_assertions::assert_eq;

#[test]
fn data_from_two_sources_concatenates_in_order() {
    let fixture = TypeInfo::builder("Owner").build();
    let parameter = ParameterInfo::new("p")
        .with_source(DataSource::Values(vec![1.into(), 2.into()]))
        .with_source(DataSource::Values(vec![3.into()]));

    let provider = ParameterDataProvider::new();
    assert!(provider.has_data_for(&fixture, &parameter));

    let data = provider.get_data_for(&fixture, &parameter).unwrap();
    let expected: Vec<ArgValue> = [1, 2, 3].into_iter().map(ArgValue::from).collect();
    assert_eq!(data, expected);
}

#[test]
fn range_sources_materialize_inclusively() {
    let fixture = TypeInfo::builder("Owner").build();
    let parameter = ParameterInfo::new("p").with_source(DataSource::Range {
        from: 2,
        to: 8,
        step: 3,
    });

    let data = ParameterDataProvider::new()
        .get_data_for(&fixture, &parameter)
        .unwrap();
    let expected: Vec<ArgValue> = [2, 5, 8].into_iter().map(ArgValue::from).collect();
    assert_eq!(data, expected);
}

#[test]
fn combinatorial_expansion_varies_rightmost_parameter_fastest() {
    let ty = TypeInfo::builder("HashTests")
        .fixture_marker(FixtureMarker::new())
        .method(
            MethodInfo::new("digest")
                .with_marker(MethodMarker::Test)
                .with_parameter(
                    ParameterInfo::new("len")
                        .with_source(DataSource::Values(vec![16.into(), 32.into()])),
                )
                .with_parameter(
                    ParameterInfo::new("rounds").with_source(DataSource::Values(vec![10.into()])),
                ),
        )
        .build();

    let fixture = SuiteBuilder::new().build_from(&ty);
    let method = &fixture.children()[0];

    assert_eq!(method.kind(), NodeKind::ParameterizedMethod);
    assert_eq!(
        child_names(method),
        vec!["digest(16, 10)", "digest(32, 10)"]
    );
}

#[test]
fn explicit_cases_expand_in_declaration_order() {
    let ty = TypeInfo::builder("SaltTests")
        .fixture_marker(FixtureMarker::new())
        .method(
            MethodInfo::new("rejects")
                .with_marker(MethodMarker::Case(vec![ArgValue::from("")]))
                .with_marker(MethodMarker::Case(vec![ArgValue::Null]))
                .with_parameter(ParameterInfo::new("salt")),
        )
        .build();

    let fixture = SuiteBuilder::new().build_from(&ty);
    let method = &fixture.children()[0];

    assert_eq!(method.kind(), NodeKind::ParameterizedMethod);
    assert_eq!(child_names(method), vec!["rejects(\"\")", "rejects(null)"]);
    assert!(method
        .children()
        .iter()
        .all(|case| case.run_state() == RunState::Runnable));
}

#[test]
fn arity_mismatched_case_becomes_not_runnable() {
    let ty = TypeInfo::builder("SaltTests")
        .fixture_marker(FixtureMarker::new())
        .method(
            MethodInfo::new("rejects")
                .with_marker(MethodMarker::Case(vec![1.into(), 2.into()]))
                .with_parameter(ParameterInfo::new("salt")),
        )
        .build();

    let fixture = SuiteBuilder::new().build_from(&ty);
    let case = &fixture.children()[0].children()[0];

    assert_eq!(case.run_state(), RunState::NotRunnable);
    assert!(case.skip_reason().unwrap().contains("2 argument(s)"));
}

#[test]
fn parameter_without_any_source_makes_the_test_not_runnable() {
    let ty = TypeInfo::builder("HashTests")
        .fixture_marker(FixtureMarker::new())
        .method(
            MethodInfo::new("digest")
                .with_marker(MethodMarker::Test)
                .with_parameter(ParameterInfo::new("len")),
        )
        .build();

    let fixture = SuiteBuilder::new().build_from(&ty);
    let test = &fixture.children()[0];

    assert_eq!(test.kind(), NodeKind::Test);
    assert_eq!(test.run_state(), RunState::NotRunnable);
    assert!(test.skip_reason().unwrap().contains("`len`"));
    // The fixture itself stays runnable.
    assert_eq!(fixture.run_state(), RunState::Runnable);
}
