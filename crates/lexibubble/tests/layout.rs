use float_cmp::approx_eq;
use proptest::prelude::*;

use lexibubble::{
    config::{CoolingConfig, LayoutConfig, OrbitConfig},
    layout::{LayoutScheduler, NodeSet, PositionBoard, PositionFrame, compute_layout},
    word::AnalysisResponse,
};
use lexibubble_core::{
    geometry::{Point, Size},
    identifier::NodeId,
    node::Node,
};

const CANVAS: Size = Size::new(800.0, 600.0);

fn converge(nodes: &NodeSet, config: &LayoutConfig) -> PositionFrame {
    let scheduler = LayoutScheduler::new();
    let mut run = compute_layout(nodes, CANVAS, scheduler.begin(), config);
    run.finish().expect("live run converges")
}

fn distance_from_center(frame: &PositionFrame, id: &str) -> f32 {
    frame.position(NodeId::new(id)).unwrap().hypot()
}

fn happy() -> NodeSet {
    NodeSet::from_nodes(
        Node::center(NodeId::new("happy")),
        [
            Node::synonym(NodeId::new("joyful"), 0.9).with_seed(Point::new(30.0, 22.5)),
            Node::synonym(NodeId::new("content"), 0.6).with_seed(Point::new(-30.0, 45.0)),
            Node::antonym(NodeId::new("sad"), 0.0).with_seed(Point::new(-120.0, -90.0)),
        ],
    )
}

fn assert_no_overlap(nodes: &NodeSet, frame: &PositionFrame) {
    let placed: Vec<_> = nodes
        .nodes()
        .map(|node| (node, frame.position(node.id()).unwrap()))
        .collect();

    for (i, (a, pa)) in placed.iter().enumerate() {
        for (b, pb) in &placed[i + 1..] {
            let distance = pa.distance(*pb);
            assert!(
                distance >= a.radius() + b.radius() - 0.5,
                "{} and {} overlap: {distance}",
                a.id(),
                b.id()
            );
        }
    }
}

#[test]
fn test_happy_scenario() {
    let nodes = happy();
    let frame = converge(&nodes, &LayoutConfig::default().with_seed(42));

    let joyful = distance_from_center(&frame, "joyful");
    let content = distance_from_center(&frame, "content");
    let sad = distance_from_center(&frame, "sad");

    assert!(joyful < content, "joyful {joyful} content {content}");
    assert!(sad > content && sad > joyful, "sad {sad}");
    assert_eq!(
        frame.absolute_position(NodeId::new("happy")),
        Some(Point::new(400.0, 300.0))
    );
    assert_no_overlap(&nodes, &frame);
}

#[test]
fn test_similarity_monotonicity() {
    let similarities = [0.95, 0.8, 0.65, 0.5, 0.35, 0.2];
    let satellites = similarities.iter().enumerate().map(|(i, similarity)| {
        let angle = i as f32 * std::f32::consts::TAU / similarities.len() as f32;
        Node::synonym(NodeId::positional("mono", i), *similarity)
            .with_seed(Point::new(60.0 * angle.cos(), 60.0 * angle.sin()))
    });
    let nodes = NodeSet::from_nodes(Node::center(NodeId::new("mono-center")), satellites);

    let frame = converge(&nodes, &LayoutConfig::default().with_seed(9));
    let distances: Vec<_> = (0..similarities.len())
        .map(|i| frame.position(NodeId::positional("mono", i)).unwrap().hypot())
        .collect();

    for pair in distances.windows(2) {
        assert!(pair[0] < pair[1] + 10.0, "{distances:?}");
    }
    assert!(distances[0] < distances[similarities.len() - 1]);
    assert_no_overlap(&nodes, &frame);
}

#[test]
fn test_polarity_separation() {
    let nodes = NodeSet::from_nodes(
        Node::center(NodeId::new("hot")),
        [
            Node::synonym(NodeId::new("warm"), 0.7).with_seed(Point::new(40.0, 0.0)),
            Node::synonym(NodeId::new("scorching"), 0.2).with_seed(Point::new(0.0, 40.0)),
            Node::synonym(NodeId::new("boiling"), 0.1).with_seed(Point::new(-40.0, 10.0)),
            Node::antonym(NodeId::new("cold"), 0.0).with_seed(Point::new(10.0, -40.0)),
            Node::antonym(NodeId::new("freezing"), 0.0).with_seed(Point::new(-30.0, -30.0)),
        ],
    );
    let frame = converge(&nodes, &LayoutConfig::default().with_seed(4));

    let max_synonym = ["warm", "scorching", "boiling"]
        .iter()
        .map(|id| distance_from_center(&frame, id))
        .fold(0.0f32, f32::max);
    let min_antonym = ["cold", "freezing"]
        .iter()
        .map(|id| distance_from_center(&frame, id))
        .fold(f32::MAX, f32::min);

    assert!(min_antonym > max_synonym, "{min_antonym} <= {max_synonym}");
}

#[test]
fn test_antonym_orbit_follows_config() {
    let near = converge(&happy(), &LayoutConfig::default().with_seed(8));
    let wide = converge(
        &happy(),
        &LayoutConfig::default()
            .with_seed(8)
            .with_orbit(OrbitConfig::new(120.0, 200.0, 600.0, 0.4)),
    );

    let near_sad = distance_from_center(&near, "sad");
    let wide_sad = distance_from_center(&wide, "sad");
    assert!(wide_sad > near_sad + 100.0, "{near_sad} -> {wide_sad}");
}

#[test]
fn test_center_pinned_every_tick() {
    let scheduler = LayoutScheduler::new();
    let run = compute_layout(&happy(), CANVAS, scheduler.begin(), &LayoutConfig::default());

    let mut ticks = 0;
    for frame in run {
        ticks += 1;
        assert!(frame.position(NodeId::new("happy")).unwrap().hypot() < 1e-3);
    }
    assert!(ticks > 0);
}

#[test]
fn test_out_of_range_similarity_behaves_like_clamped() {
    fn analysis(synonym: f32, antonym: f32) -> AnalysisResponse {
        serde_json::from_value(serde_json::json!({
            "centerWord": {"id": "center", "word": "happy", "similarity": 1},
            "synonyms": [
                {"id": "syn1", "word": "ecstatic", "similarity": synonym, "position": {"x": 20, "y": 15}},
                {"id": "syn2", "word": "content", "similarity": 0.6}
            ],
            "antonyms": [
                {"id": "ant1", "word": "sad", "similarity": antonym, "isAntonym": true}
            ]
        }))
        .unwrap()
    }

    let config = LayoutConfig::default().with_seed(17);
    let raw = NodeSet::from_analysis(&analysis(1.7, -0.3), config.seeding());
    let clamped = NodeSet::from_analysis(&analysis(1.0, 0.0), config.seeding());
    assert_eq!(raw, clamped);

    assert_eq!(converge(&raw, &config), converge(&clamped, &config));
}

#[test]
fn test_fixed_seed_is_reproducible() {
    let config = LayoutConfig::default().with_seed(99);
    assert_eq!(converge(&happy(), &config), converge(&happy(), &config));
}

#[test]
fn test_cancellation() {
    let scheduler = LayoutScheduler::new();
    let mut board = PositionBoard::new(scheduler.clone());
    let config = LayoutConfig::default();

    let mut first = compute_layout(&happy(), CANVAS, scheduler.begin(), &config);
    let early = first.next().unwrap();
    assert!(board.publish(early.clone()));

    let mut second = compute_layout(&happy(), CANVAS, scheduler.begin(), &config);

    assert!(first.next().is_none());
    assert!(!board.publish(early));
    assert!(board.frame().is_none());

    let frame = second.next().unwrap();
    assert!(board.publish(frame));
    assert_eq!(
        board.frame().unwrap().generation(),
        second.token().generation()
    );
}

#[test]
fn test_resize_rebases_without_jump() {
    let scheduler = LayoutScheduler::new();
    let mut run = compute_layout(&happy(), CANVAS, scheduler.begin(), &LayoutConfig::default().with_seed(1));
    let before = run.nth(9).unwrap();

    run.resize(Size::new(1200.0, 600.0));
    let after = run.next().unwrap();

    let id = NodeId::new("joyful");
    let relative_step = after.position(id).unwrap().distance(before.position(id).unwrap());
    let absolute_step = after
        .absolute_position(id)
        .unwrap()
        .distance(before.absolute_position(id).unwrap());

    assert!(absolute_step <= relative_step + 200.0 + 1e-3);
    assert_eq!(after.canvas(), Size::new(1200.0, 600.0));
    assert_eq!(
        after.absolute_position(NodeId::new("happy")),
        Some(Point::new(600.0, 300.0))
    );
}

#[test]
fn test_converges_in_expected_ticks() {
    let frame = converge(&happy(), &LayoutConfig::default().with_seed(2));
    assert!(frame.alpha() < 0.001);
    assert!((450..=465).contains(&frame.tick()), "{}", frame.tick());
}

#[test]
fn test_tick_cap_bounds_slow_cooling() {
    let config = LayoutConfig::default().with_cooling(CoolingConfig::new(0.35, 0.0001, 0.001, 1000));
    let frame = converge(&happy(), &config);
    assert_eq!(frame.tick(), 1000);
    assert!(approx_eq!(f32, frame.alpha(), 0.9999f32.powi(1000), epsilon = 1e-3));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    #[test]
    fn prop_positions_stay_finite(
        similarities in proptest::collection::vec(proptest::num::f32::ANY, 1..8),
        seed in any::<u64>(),
    ) {
        let satellites = similarities.iter().enumerate().map(|(i, similarity)| {
            if i % 3 == 2 {
                Node::antonym(NodeId::positional("p", i), *similarity)
            } else {
                Node::synonym(NodeId::positional("p", i), *similarity)
            }
        });
        let nodes = NodeSet::from_nodes(Node::center(NodeId::new("p-center")), satellites);
        let frame = converge(&nodes, &LayoutConfig::default().with_seed(seed));

        prop_assert_eq!(frame.len(), nodes.len());
        for (_, position) in frame.iter() {
            prop_assert!(position.is_finite());
        }
        prop_assert!(frame.position(NodeId::new("p-center")).unwrap().is_zero());
    }
}
