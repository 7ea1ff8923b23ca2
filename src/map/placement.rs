//! Randomized badge placement for the mood map.
//!
//! Each tag gets a circle whose radius grows with its frequency. Circles
//! are placed at a random angle and distance from the canvas center so
//! that they clear a center-avoidance disk (reserved for the background
//! label) and every previously placed circle. Placement is rejection
//! sampling with a hard attempt cap; a tag that cannot be placed is kept
//! in the result at [`SENTINEL_POS`](super::SENTINEL_POS) instead of
//! being dropped.
//!
//! The routine is a pure function of its inputs plus the injected RNG, so
//! tests run it against a seeded generator.

use rand::Rng;

use super::style::{self, TagStyle};
use super::{Canvas, Circle, PlacedTag, SENTINEL_POS};
use crate::tags::MoodTag;

/// Tunables for one placement pass.
#[derive(Clone, Copy, Debug)]
pub struct PlacementParams {
    /// Radius of the disk around the canvas center kept clear of badges.
    pub center_avoid_radius: f32,
    /// Minimum gap between any two placed circles.
    pub padding: f32,
    /// Clearance kept between circles and the canvas edge.
    pub edge_margin: f32,
    pub base_radius: f32,
    pub frequency_scale: f32,
    /// Random tries allotted to a single tag before it is sentineled.
    pub max_attempts: u32,
}

impl Default for PlacementParams {
    fn default() -> Self {
        Self {
            center_avoid_radius: 80.0,
            padding: 10.0,
            edge_margin: 10.0,
            base_radius: 25.0,
            frequency_scale: 5.0,
            max_attempts: 150,
        }
    }
}

/// Radius of a tag's circle. Deterministic in the frequency alone, so
/// equal frequencies always get equal radii.
pub fn tag_radius(frequency: u32, params: &PlacementParams) -> f32 {
    params.base_radius + frequency as f32 * params.frequency_scale
}

/// Place every tag on `canvas`.
///
/// Returns one entry per input tag in descending frequency order (larger
/// circles claim space first; ties keep input order). An invalid canvas
/// yields an empty list. Unplaceable tags come back at the off-canvas
/// sentinel with their radius intact — "could not place" is a normal
/// outcome here, not an error.
pub fn place_tags<R: Rng + ?Sized>(
    tags: &[MoodTag],
    canvas: Canvas,
    params: &PlacementParams,
    rng: &mut R,
) -> Vec<PlacedTag> {
    if !canvas.is_valid() {
        return Vec::new();
    }

    let (cx, cy) = canvas.center();
    let center_zone = Circle {
        x: cx,
        y: cy,
        radius: params.center_avoid_radius,
    };

    let mut ordered: Vec<&MoodTag> = tags.iter().collect();
    ordered.sort_by(|a, b| b.frequency.cmp(&a.frequency));

    let mut placed: Vec<PlacedTag> = Vec::with_capacity(ordered.len());

    for tag in ordered {
        let radius = tag_radius(tag.frequency, params);
        let style = style::sample_style(rng);

        let min_distance = params.center_avoid_radius + radius + params.padding;
        let max_distance = canvas.width.min(canvas.height) / 2.0 - params.edge_margin - radius;

        let circle = if min_distance >= max_distance {
            // The circle cannot fit between the center zone and the edge;
            // skip the attempt loop entirely.
            log::warn!(
                "tag {:?} (radius {radius}) cannot fit inside a {}x{} canvas",
                tag.name,
                canvas.width,
                canvas.height
            );
            None
        } else {
            sample_position(
                &tag.name,
                radius,
                min_distance,
                max_distance,
                &center_zone,
                &placed,
                params,
                rng,
            )
        };

        placed.push(match circle {
            Some(circle) => PlacedTag {
                tag: tag.clone(),
                circle,
                style,
            },
            None => PlacedTag {
                tag: tag.clone(),
                circle: Circle {
                    x: SENTINEL_POS.0,
                    y: SENTINEL_POS.1,
                    radius,
                },
                style: TagStyle { delay: 0.0, ..style },
            },
        });
    }

    placed
}

/// Try up to `max_attempts` random polar positions for one circle.
#[allow(clippy::too_many_arguments)]
fn sample_position<R: Rng + ?Sized>(
    name: &str,
    radius: f32,
    min_distance: f32,
    max_distance: f32,
    center_zone: &Circle,
    placed: &[PlacedTag],
    params: &PlacementParams,
    rng: &mut R,
) -> Option<Circle> {
    for _ in 0..params.max_attempts {
        let angle = rng.random_range(0.0..std::f32::consts::TAU);
        let distance = rng.random_range(min_distance..max_distance);
        let candidate = Circle {
            x: center_zone.x + angle.cos() * distance,
            y: center_zone.y + angle.sin() * distance,
            radius,
        };

        // The center zone gets no extra padding; placed circles do.
        if candidate.overlaps(center_zone, 0.0) {
            continue;
        }
        if placed
            .iter()
            .filter(|p| p.is_visible())
            .any(|p| candidate.overlaps(&p.circle, params.padding))
        {
            continue;
        }

        return Some(candidate);
    }

    log::warn!(
        "no position found for tag {name:?} after {} attempts",
        params.max_attempts
    );
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const EPS: f32 = 1e-3;

    fn tag(name: &str, frequency: u32) -> MoodTag {
        MoodTag {
            name: name.to_string(),
            frequency,
        }
    }

    /// Check both distance invariants over every non-sentinel circle.
    fn assert_distance_invariants(placed: &[PlacedTag], canvas: Canvas, params: &PlacementParams) {
        let (cx, cy) = canvas.center();
        let visible: Vec<&PlacedTag> = placed.iter().filter(|p| p.is_visible()).collect();
        for p in &visible {
            let dx = p.circle.x - cx;
            let dy = p.circle.y - cy;
            let dist = (dx * dx + dy * dy).sqrt();
            assert!(
                dist >= params.center_avoid_radius + p.circle.radius - EPS,
                "{:?} intrudes into the center zone (dist {dist})",
                p.tag.name
            );
        }
        for (i, a) in visible.iter().enumerate() {
            for b in &visible[i + 1..] {
                let dist = a.circle.distance_to(&b.circle);
                assert!(
                    dist >= a.circle.radius + b.circle.radius + params.padding - EPS,
                    "{:?} and {:?} overlap (dist {dist})",
                    a.tag.name,
                    b.tag.name
                );
            }
        }
    }

    #[test]
    fn radius_is_monotonic_in_frequency() {
        let params = PlacementParams::default();
        let mut prev = 0.0;
        for freq in 0..10 {
            let r = tag_radius(freq, &params);
            assert!(r >= prev);
            prev = r;
        }
        // Equal frequencies, equal radii; defaults give 25 + 5f
        assert_eq!(tag_radius(5, &params), 50.0);
        assert_eq!(tag_radius(1, &params), 30.0);
        assert_eq!(tag_radius(3, &params), tag_radius(3, &params));
    }

    #[test]
    fn invalid_canvas_yields_empty_result() {
        let params = PlacementParams::default();
        let tags = vec![tag("데이트", 5)];
        let mut rng = StdRng::seed_from_u64(1);
        assert!(place_tags(&tags, Canvas::new(0.0, 450.0), &params, &mut rng).is_empty());
        assert!(place_tags(&tags, Canvas::new(400.0, -10.0), &params, &mut rng).is_empty());
    }

    #[test]
    fn empty_tag_list_yields_empty_result() {
        let params = PlacementParams::default();
        let mut rng = StdRng::seed_from_u64(2);
        let placed = place_tags(&[], Canvas::new(400.0, 450.0), &params, &mut rng);
        assert!(placed.is_empty());
    }

    #[test]
    fn narrow_canvas_returns_both_tags_with_expected_radii() {
        let params = PlacementParams::default();
        let canvas = Canvas::new(400.0, 450.0);
        let tags = vec![tag("데이트", 5), tag("혼밥", 1)];
        let mut rng = StdRng::seed_from_u64(3);

        let placed = place_tags(&tags, canvas, &params, &mut rng);
        assert_eq!(placed.len(), 2);
        // Descending frequency order, radii derived from frequency.
        // On this canvas the radius-50 circle has no room between the
        // center zone and the edge (140 >= 140), so it sits at the
        // sentinel; the smaller one must still place normally.
        assert_eq!(placed[0].tag.name, "데이트");
        assert_eq!(placed[0].circle.radius, 50.0);
        assert!(!placed[0].is_visible());
        assert_eq!(placed[1].tag.name, "혼밥");
        assert_eq!(placed[1].circle.radius, 30.0);
        assert!(placed[1].is_visible());
        assert_distance_invariants(&placed, canvas, &params);
    }

    #[test]
    fn oversized_tag_is_sentineled_not_dropped() {
        let params = PlacementParams::default();
        let canvas = Canvas::new(400.0, 450.0);
        // radius 25 + 100*5 = 525, far beyond what the canvas can hold
        let tags = vec![tag("huge", 100)];
        let mut rng = StdRng::seed_from_u64(4);

        let placed = place_tags(&tags, canvas, &params, &mut rng);
        assert_eq!(placed.len(), 1);
        assert!(!placed[0].is_visible());
        assert_eq!((placed[0].circle.x, placed[0].circle.y), SENTINEL_POS);
        assert_eq!(placed[0].circle.radius, 525.0);
        assert_eq!(placed[0].style.delay, 0.0);
    }

    #[test]
    fn seven_tag_scenario_returns_every_tag() {
        let params = PlacementParams::default();
        let canvas = Canvas::new(375.0, 450.0);
        let tags = vec![
            tag("데이트", 5),
            tag("혼밥", 4),
            tag("가성비", 4),
            tag("조용한", 3),
            tag("감성적", 3),
            tag("신선한", 2),
            tag("든든한", 2),
        ];
        let mut rng = StdRng::seed_from_u64(5);

        let placed = place_tags(&tags, canvas, &params, &mut rng);
        assert_eq!(placed.len(), 7);
        for t in &tags {
            assert!(placed.iter().any(|p| p.tag == *t), "missing {:?}", t.name);
        }
        assert_distance_invariants(&placed, canvas, &params);
    }

    #[test]
    fn output_is_ordered_by_descending_frequency_with_stable_ties() {
        let params = PlacementParams::default();
        let canvas = Canvas::new(800.0, 800.0);
        let tags = vec![tag("low", 1), tag("first", 3), tag("second", 3), tag("high", 4)];
        let mut rng = StdRng::seed_from_u64(6);

        let placed = place_tags(&tags, canvas, &params, &mut rng);
        let names: Vec<&str> = placed.iter().map(|p| p.tag.name.as_str()).collect();
        assert_eq!(names, ["high", "first", "second", "low"]);
        let freqs: Vec<u32> = placed.iter().map(|p| p.tag.frequency).collect();
        assert!(freqs.windows(2).all(|w| w[0] >= w[1]));
    }

    #[test]
    fn roomy_canvas_places_every_tag() {
        let params = PlacementParams::default();
        let canvas = Canvas::new(800.0, 800.0);
        let tags = vec![
            tag("데이트", 5),
            tag("혼밥", 4),
            tag("가성비", 4),
            tag("조용한", 3),
            tag("감성적", 3),
            tag("신선한", 2),
            tag("든든한", 2),
        ];
        let mut rng = StdRng::seed_from_u64(7);

        let placed = place_tags(&tags, canvas, &params, &mut rng);
        assert!(placed.iter().all(PlacedTag::is_visible));
        assert_distance_invariants(&placed, canvas, &params);
    }

    #[test]
    fn fixed_seed_reproduces_positions() {
        let params = PlacementParams::default();
        let canvas = Canvas::new(600.0, 600.0);
        let tags = vec![tag("a", 4), tag("b", 3), tag("c", 2)];

        let mut rng1 = StdRng::seed_from_u64(42);
        let mut rng2 = StdRng::seed_from_u64(42);
        let first = place_tags(&tags, canvas, &params, &mut rng1);
        let second = place_tags(&tags, canvas, &params, &mut rng2);

        assert_eq!(first.len(), second.len());
        for (a, b) in first.iter().zip(&second) {
            assert_eq!(a.circle, b.circle);
            assert_eq!(a.style, b.style);
        }
    }

    #[test]
    fn invariants_hold_across_seeds() {
        let params = PlacementParams::default();
        let canvas = Canvas::new(375.0, 450.0);
        let tags = vec![
            tag("든든한", 5),
            tag("가성비", 5),
            tag("혼밥", 4),
            tag("편안한", 3),
            tag("조용한", 2),
            tag("감성적", 2),
            tag("빠른 식사", 1),
        ];

        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let placed = place_tags(&tags, canvas, &params, &mut rng);
            assert_eq!(placed.len(), tags.len());
            assert_distance_invariants(&placed, canvas, &params);
        }
    }
}
