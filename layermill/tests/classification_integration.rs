//! Integration tests for the classification pipeline.
//!
//! These tests verify the complete profile workflow including:
//! - Source routing and unsubscribed-source behavior
//! - Attribute derivation and omission of failed derivations
//! - Registry override (replace, remove, extend) observed end to end
//! - Handler chaining under one logical layer
//! - Parallel batch classification matching sequential output

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use layermill::collect::FeatureCollector;
use layermill::feature::{MemoryFeature, SourceFeature};
use layermill::handler::FnHandler;
use layermill::layers::{CONTOUR_MIN_ZOOM, CONTOUR_SORT_KEY};
use layermill::profile::ProfileBuilder;
use layermill::profiles;

// =============================================================================
// Test Helpers
// =============================================================================

/// Run one feature through a profile and return the emitted features.
fn classify_one(
    profile: &layermill::profile::Profile,
    feature: &MemoryFeature,
) -> Vec<layermill::collect::OutputFeature> {
    let mut out = FeatureCollector::new();
    profile.process(feature, &mut out);
    out.take()
}

// =============================================================================
// Source Routing
// =============================================================================

#[test]
fn test_unsubscribed_source_emits_nothing() {
    let profile = profiles::outdoor().build();

    let weather = MemoryFeature::point("weather")
        .with_tag("wind", "12")
        .with_tag("natural", "peak");

    assert!(
        classify_one(&profile, &weather).is_empty(),
        "no layer subscribes to the weather source"
    );
}

#[test]
fn test_feature_matching_no_rule_is_silently_excluded() {
    let profile = profiles::outdoor().build();

    // Subscribed source, but no rule matches a building footprint.
    let building = MemoryFeature::polygon("osm").with_tag("building", "yes");

    assert!(classify_one(&profile, &building).is_empty());
}

// =============================================================================
// End-to-End Scenarios
// =============================================================================

#[test]
fn test_contour_line_gains_elevation_in_feet() {
    let profile = profiles::contour().build();

    let contour = MemoryFeature::line("contours").with_tag("elev", "1219.2");
    let features = classify_one(&profile, &contour);

    assert_eq!(features.len(), 1, "one rule match emits exactly one feature");
    let feature = &features[0];
    assert_eq!(feature.layer, "contour");
    assert_eq!(feature.attr_text("ele"), Some("1219.2"));
    assert_eq!(
        feature.attr("ele_ft"),
        Some(&layermill::collect::AttrValue::Integer(4000)),
        "1219.2 m * 3.28084 = 4000.000128, truncated"
    );
    assert_eq!(feature.min_zoom, Some(CONTOUR_MIN_ZOOM));
    assert_eq!(feature.sort_key, Some(CONTOUR_SORT_KEY));
}

#[test]
fn test_unparseable_elevation_omits_only_the_derived_attribute() {
    let profile = profiles::contour().build();

    let contour = MemoryFeature::line("contours").with_tag("elev", "n/a");
    let features = classify_one(&profile, &contour);

    assert_eq!(features.len(), 1, "one failed derivation must not drop the feature");
    assert_eq!(features[0].attr_text("ele"), Some("n/a"));
    assert!(
        !features[0].attrs.contains_key("ele_ft"),
        "failed derivation must be absent, not null"
    );
}

#[test]
fn test_peak_becomes_outdoor_poi() {
    let profile = profiles::outdoor().build();

    let peak = MemoryFeature::point("osm")
        .with_tag("natural", "peak")
        .with_tag("name", "Mt. Example")
        .with_tag("ele", "1500");

    let features = classify_one(&profile, &peak);

    assert_eq!(features.len(), 1);
    let poi = &features[0];
    assert_eq!(poi.layer, "outdoor_poi");
    assert_eq!(poi.attr_text("class"), Some("peak"));
    assert_eq!(poi.attr_text("name"), Some("Mt. Example"));
    assert_eq!(poi.attr_text("ele"), Some("1500"));
}

#[test]
fn test_motorway_is_not_a_trail() {
    let profile = profiles::outdoor().build();

    let motorway = MemoryFeature::line("osm").with_tag("highway", "motorway");

    assert!(
        classify_one(&profile, &motorway).is_empty(),
        "the trail rule only accepts path-like highway values"
    );
}

#[test]
fn test_protected_area_classified_by_designation_text() {
    let profile = profiles::outdoor().build();

    let forest = MemoryFeature::polygon("protected_areas")
        .with_tag("name", "Green Mountain National Forest Unit");
    let features = classify_one(&profile, &forest);

    assert_eq!(features.len(), 1);
    assert_eq!(features[0].layer, "protected_area");
    assert_eq!(features[0].attr_text("class"), Some("national_forest"));

    let unknown = MemoryFeature::polygon("protected_areas").with_tag("name", "Unknown Preserve");
    let features = classify_one(&profile, &unknown);

    assert_eq!(features.len(), 1);
    assert_eq!(
        features[0].attr_text("name"),
        Some("Unknown Preserve"),
        "the name still passes through"
    );
    assert!(
        !features[0].attrs.contains_key("class"),
        "unmatched designation text yields no class attribute"
    );
}

// =============================================================================
// Registry Overrides Observed End to End
// =============================================================================

#[test]
fn test_replaced_handler_logic_never_runs() {
    let old_runs = Arc::new(AtomicUsize::new(0));
    let new_runs = Arc::new(AtomicUsize::new(0));

    let mut builder = ProfileBuilder::new("Derived");
    let old_counter = Arc::clone(&old_runs);
    builder.register(
        "poi",
        &["osm"],
        Arc::new(FnHandler::new(
            move |_feature: &dyn SourceFeature, out: &mut FeatureCollector| {
                old_counter.fetch_add(1, Ordering::SeqCst);
                out.point("poi").set_attr("origin", "base");
            },
        )),
    );

    let new_counter = Arc::clone(&new_runs);
    builder
        .replace(
            "poi",
            Arc::new(FnHandler::new(
                move |_feature: &dyn SourceFeature, out: &mut FeatureCollector| {
                    new_counter.fetch_add(1, Ordering::SeqCst);
                    out.point("poi").set_attr("origin", "replacement");
                },
            )),
        )
        .unwrap();

    let profile = builder.build();
    let features = classify_one(&profile, &MemoryFeature::point("osm"));

    assert_eq!(old_runs.load(Ordering::SeqCst), 0, "old handler must never run");
    assert_eq!(new_runs.load(Ordering::SeqCst), 1);
    assert_eq!(features.len(), 1);
    assert_eq!(features[0].attr_text("origin"), Some("replacement"));
}

#[test]
fn test_removed_layer_never_runs_despite_matching_rules() {
    let mut builder = profiles::outdoor();
    assert!(builder.remove("protected_area"), "layer exists before removal");
    let profile = builder.build();

    assert_eq!(
        profile.layer_names(),
        vec!["contour", "transportation", "outdoor_poi"]
    );

    let forest = MemoryFeature::polygon("protected_areas")
        .with_tag("name", "Green Mountain National Forest");

    assert!(
        classify_one(&profile, &forest).is_empty(),
        "a removed layer's rules must not fire"
    );
}

#[test]
fn test_extend_runs_base_then_extension_under_one_layer() {
    let mut builder = profiles::outdoor();
    builder
        .extend(
            "outdoor_poi",
            Arc::new(FnHandler::new(
                |feature: &dyn SourceFeature, out: &mut FeatureCollector| {
                    if feature.is_point() && feature.has_tag("natural", &["spring"]) {
                        out.point("outdoor_poi")
                            .set_attr("drinking_water", feature.tag("drinking_water"));
                    }
                },
            )),
        )
        .unwrap();
    let profile = builder.build();

    assert_eq!(
        profile.layer_count(),
        4,
        "extending must not add a second entry"
    );

    let spring = MemoryFeature::point("osm")
        .with_tag("natural", "spring")
        .with_tag("name", "Cold Spring")
        .with_tag("drinking_water", "yes");

    let features = classify_one(&profile, &spring);

    assert_eq!(features.len(), 2, "base and extension emissions union");
    assert_eq!(
        features[0].attr_text("class"),
        Some("spring"),
        "base handler runs first"
    );
    assert_eq!(
        features[1].attr_text("drinking_water"),
        Some("yes"),
        "extension runs second"
    );
}

// =============================================================================
// Batch Classification
// =============================================================================

#[test]
fn test_parallel_batch_matches_sequential_on_mixed_stream() {
    let profile = profiles::basemap().build();

    let mut features = Vec::new();
    for i in 0..120 {
        let feature = match i % 5 {
            0 => MemoryFeature::line("contours").with_tag("elev", (i * 10).to_string()),
            1 => MemoryFeature::line("osm").with_tag("highway", "path"),
            2 => MemoryFeature::line("osm").with_tag("highway", "motorway"),
            3 => MemoryFeature::polygon("protected_areas")
                .with_tag("name", format!("State Park {i}")),
            _ => MemoryFeature::point("telemetry").with_tag("seq", i.to_string()),
        };
        features.push(feature);
    }

    let mut sequential = FeatureCollector::new();
    for feature in &features {
        profile.process(feature, &mut sequential);
    }
    let sequential = sequential.take();

    let parallel = profile.process_batch(&features);

    assert_eq!(
        parallel.len(),
        96,
        "24 telemetry features route nowhere, the rest emit one each"
    );
    assert_eq!(parallel, sequential, "batch output must be order-identical");
}
