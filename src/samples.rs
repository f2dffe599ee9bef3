//! A bundled sample declaration set for the demonstration binary.
//!
//! The declarations cover the interesting discovery shapes: plain
//! method-discovered fixtures, marker-driven and parameterized fixtures,
//! generic binding, inherited tests, ignored fixtures, data-driven
//! methods, and one deliberately broken fixture that exercises the
//! failure boundary.

use crate::metadata::{
    ArgValue, DataSource, DeclarationRegistry, FixtureMarker, MethodInfo, MethodMarker,
    ParameterInfo, RegistryError, TypeInfo, TypeMarker,
};

pub fn sample_registry() -> Result<DeclarationRegistry, RegistryError> {
    let mut registry = DeclarationRegistry::new();

    // Ordinary fixture, discovered through its test methods alone.
    registry.register(
        TypeInfo::builder("CalculatorTests")
            .method(MethodInfo::new("adds_small_numbers").with_marker(MethodMarker::Test))
            .method(MethodInfo::new("carries_across_digits").with_marker(MethodMarker::Test))
            .method(MethodInfo::new("reset").with_marker(MethodMarker::Setup))
            .build(),
    )?;

    // Explicit fixture marker with a description.
    registry.register(
        TypeInfo::builder("ParserTests")
            .fixture_marker(FixtureMarker::new().with_description("round-trip parser checks"))
            .method(MethodInfo::new("parses_empty_input").with_marker(MethodMarker::Test))
            .method(
                MethodInfo::new("parses_unicode")
                    .with_marker(MethodMarker::Ignore {
                        reason: "grapheme handling is unfinished".to_string(),
                    })
                    .with_marker(MethodMarker::Test),
            )
            .build(),
    )?;

    // Two markers: alternative instantiations of one declaration.
    registry.register(
        TypeInfo::builder("ConnectionTests")
            .fixture_marker(FixtureMarker::new().with_arguments(["tcp"]))
            .fixture_marker(FixtureMarker::new().with_arguments(["udp"]))
            .method(MethodInfo::new("connects").with_marker(MethodMarker::Test))
            .method(MethodInfo::new("times_out").with_marker(MethodMarker::Test))
            .build(),
    )?;

    // Generic definition bound by its markers.
    registry.register(
        TypeInfo::builder("RingBufferTests")
            .type_param("T")
            .fixture_marker(FixtureMarker::new().with_type_args(["Int"]))
            .fixture_marker(FixtureMarker::new().with_type_args(["Str"]))
            .method(MethodInfo::new("push_then_pop").with_marker(MethodMarker::Test))
            .build(),
    )?;

    // Abstract contract base: excluded itself, but its marker and tests
    // are picked up by the derived type.
    let contract_base = TypeInfo::builder("ProtocolContractBase")
        .abstract_type()
        .fixture_marker(FixtureMarker::new())
        .method(MethodInfo::new("handshake").with_marker(MethodMarker::Test))
        .build();
    registry.register(contract_base.clone())?;
    registry.register(
        TypeInfo::builder("ProtocolV2Tests")
            .inherits(&contract_base)
            .method(MethodInfo::new("negotiates_extensions").with_marker(MethodMarker::Test))
            .build(),
    )?;

    // Data-driven methods: explicit cases and combinatorial expansion.
    registry.register(
        TypeInfo::builder("HashingTests")
            .method(
                MethodInfo::new("digest_is_stable")
                    .with_marker(MethodMarker::Test)
                    .with_parameter(
                        ParameterInfo::new("len")
                            .with_source(DataSource::Values(vec![16.into(), 32.into()])),
                    )
                    .with_parameter(ParameterInfo::new("rounds").with_source(DataSource::Range {
                        from: 1,
                        to: 3,
                        step: 1,
                    })),
            )
            .method(
                MethodInfo::new("rejects_bad_salt")
                    .with_marker(MethodMarker::Case(vec![ArgValue::from("")]))
                    .with_marker(MethodMarker::Case(vec![ArgValue::Null]))
                    .with_parameter(ParameterInfo::new("salt")),
            )
            .build(),
    )?;

    // Whole fixture excluded from execution but kept in the tree.
    registry.register(
        TypeInfo::builder("ReplicationTests")
            .marker(TypeMarker::Ignore {
                reason: "replication backend is offline".to_string(),
            })
            .method(MethodInfo::new("replicates_writes").with_marker(MethodMarker::Test))
            .build(),
    )?;

    // Broken on purpose: the zero-step range fails during expansion and
    // the facade converts the fixture into a NotRunnable node.
    registry.register(
        TypeInfo::builder("RetryPolicyTests")
            .fixture_marker(FixtureMarker::new())
            .method(
                MethodInfo::new("backs_off")
                    .with_marker(MethodMarker::Test)
                    .with_parameter(ParameterInfo::new("delay").with_source(DataSource::Range {
                        from: 10,
                        to: 50,
                        step: 0,
                    })),
            )
            .build(),
    )?;

    Ok(registry)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_names_are_unique() {
        let registry = sample_registry().unwrap();
        assert_eq!(registry.len(), 9);
    }
}
