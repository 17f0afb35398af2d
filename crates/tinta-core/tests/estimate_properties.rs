//! Property checks for the estimator over a grid of realistic rooms.

use rstest::rstest;
use tinta_core::enums::{Quality, Surface, Tier};
use tinta_core::{
    CalculationInput, EstimateError, GALLON_LITERS, Recommendation, estimate, validate,
};

const WIDTHS: [f64; 5] = [0.4, 1.0, 2.35, 3.8, 7.25];
const HEIGHTS: [f64; 4] = [0.9, 2.4, 2.75, 4.1];
const COUNTS: [i64; 4] = [1, 2, 3, 6];

fn rooms() -> impl Iterator<Item = CalculationInput> {
    WIDTHS.iter().flat_map(|&width| {
        HEIGHTS.iter().flat_map(move |&height| {
            COUNTS.iter().flat_map(move |&walls| {
                COUNTS.iter().flat_map(move |&coats| {
                    Quality::ALL.iter().flat_map(move |&quality| {
                        Surface::ALL.iter().map(move |&surface| {
                            CalculationInput::new(width, height, walls, coats, quality, surface)
                        })
                    })
                })
            })
        })
    })
}

#[allow(clippy::cast_precision_loss)]
fn as_f64(count: i64) -> f64 {
    count as f64
}

#[test]
fn total_area_excludes_coats() {
    for input in rooms() {
        let result = estimate(&input).expect("grid inputs are valid");
        assert_eq!(
            result.total_area,
            input.width * input.height * as_f64(input.wall_count),
            "{input:?}"
        );
    }
}

#[test]
fn rounded_liters_are_half_liter_steps_that_cover_every_coat() {
    for input in rooms() {
        let result = estimate(&input).expect("grid inputs are valid");
        let doubled = result.liters_rounded * 2.0;
        assert_eq!(doubled, doubled.trunc(), "{input:?}");

        let required = result.total_area * as_f64(input.coat_count);
        assert!(
            result.liters_rounded * result.coverage_rate >= required - 1e-9,
            "{input:?} under-provisions: {result:?}"
        );
        assert!(result.liters_rounded - result.liters_needed < 0.5, "{input:?}");
    }
}

#[test]
fn more_paintable_surface_never_needs_less_paint() {
    for input in rooms() {
        let base = estimate(&input).expect("valid").liters_rounded;

        let wider = input.clone().with_dimensions(input.width + 0.5, input.height);
        let taller = input.clone().with_dimensions(input.width, input.height + 0.5);
        let more_walls = input
            .clone()
            .with_counts(input.wall_count + 1, input.coat_count);
        let more_coats = input
            .clone()
            .with_counts(input.wall_count, input.coat_count + 1);

        for bigger in [wider, taller, more_walls, more_coats] {
            let liters = estimate(&bigger).expect("valid").liters_rounded;
            assert!(liters >= base, "{bigger:?} needs {liters} < {base}");
        }
    }
}

#[test]
fn recommendation_tier_never_decreases_with_liters() {
    let mut previous = Tier::SingleLiter;
    let mut previous_units = 1;
    for halves in 1..=60 {
        let rec = Recommendation::for_liters(f64::from(halves) / 2.0).expect("small liters");
        assert!(rec.tier >= previous);
        assert!(rec.container_units >= previous_units);
        previous = rec.tier;
        previous_units = rec.container_units;
    }
}

#[test]
fn repeated_estimates_are_identical() {
    for input in rooms().step_by(7) {
        assert_eq!(estimate(&input), estimate(&input));
    }
}

#[rstest]
#[case(0.0, 2.5, 4, 1)]
#[case(2.0, 0.0, 4, 1)]
#[case(2.0, 2.5, 0, 1)]
#[case(2.0, 2.5, 4, 0)]
#[case(f64::NAN, 2.5, 4, 1)]
#[case(-2.0, 2.5, 4, 1)]
fn invalid_rooms_produce_no_result(
    #[case] width: f64,
    #[case] height: f64,
    #[case] walls: i64,
    #[case] coats: i64,
) {
    let input = CalculationInput::new(width, height, walls, coats, Quality::Basic, Surface::Smooth);
    assert!(!validate(&input));
    assert!(estimate(&input).is_err());
}

#[test]
fn premium_on_unknown_surface_uses_default_rate() {
    let input = CalculationInput {
        surface: "unknown_value".into(),
        ..CalculationInput::new(2.0, 2.5, 4, 1, Quality::Premium, Surface::Smooth)
    };
    let result = estimate(&input).expect("lenient lookup");
    assert_eq!(result.coverage_rate, 10.0);
}

#[test]
fn three_point_seven_eight_liters_is_one_gallon() {
    let tier = |liters| Recommendation::for_liters(liters).map(|rec| rec.tier);
    assert_eq!(tier(3.78), Some(Tier::OneGallon));
    assert_eq!(tier(1.0), Some(Tier::SingleLiter));
}

#[test]
fn huge_rooms_are_never_under_provisioned() {
    let input = CalculationInput::new(1.0e6, 1.0e6, 1, 1, Quality::Basic, Surface::Smooth);
    let result = estimate(&input).expect("finite area");

    assert_eq!(result.liters_rounded, 1.0e11);
    assert_eq!(result.recommendation.tier, Tier::Bulk);
    #[allow(clippy::cast_precision_loss)]
    let covered = result.recommendation.container_units as f64 * GALLON_LITERS;
    assert!(covered >= result.liters_rounded, "{result:?}");
}

#[rstest]
#[case(1.0e200, 1.0e200, 1, 1)]
#[case(f64::MAX, 2.0, 1, 1)]
#[case(1.0e154, 1.0e154, i64::MAX, i64::MAX)]
#[case(1.0e11, 1.0e11, 1, 1)]
fn oversized_rooms_are_rejected(
    #[case] width: f64,
    #[case] height: f64,
    #[case] walls: i64,
    #[case] coats: i64,
) {
    let input = CalculationInput::new(width, height, walls, coats, Quality::Basic, Surface::Smooth);
    assert!(validate(&input));

    let err = estimate(&input).expect_err("no finite recommendation");
    assert!(matches!(err, EstimateError::Validation(_)), "{err:?}");
}

#[test]
fn accepted_results_serialize_without_nulls() {
    let input = CalculationInput::new(1.0e6, 1.0e6, 4, 3, Quality::Premium, Surface::Rough);
    let result = estimate(&input).expect("finite area");
    let json = serde_json::to_string(&result).expect("serializes");
    assert!(!json.contains("null"), "{json}");
}
