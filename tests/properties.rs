//! Property tests for invariants that hold on every non-empty play.

use play_network_metrics::{compute_metrics, MetricsConfig, MetricsResult, Segment};
use proptest::prelude::*;

/// Plays of up to 12 segments over a small cast, so speakers recur often
fn play_strategy() -> impl Strategy<Value = Vec<Segment>> {
    let speaker = prop::sample::select(vec!["a", "b", "c", "d", "e", "f", "g", "h"]);
    let segment = prop::collection::vec(speaker, 0..5).prop_map(|speakers| Segment::new(speakers));
    prop::collection::vec(segment, 1..12)
}

fn has_speakers(play: &[Segment]) -> bool {
    play.iter().any(|segment| !segment.speakers.is_empty())
}

fn run(play: &[Segment], parallel: bool) -> MetricsResult {
    compute_metrics(play, &MetricsConfig::new(100, 1e-6, parallel)).expect("non-empty play")
}

proptest! {
    #[test]
    fn prop_density_matches_formula(play in play_strategy()) {
        prop_assume!(has_speakers(&play));
        let result = run(&play, false);

        prop_assert!((0.0..=1.0).contains(&result.density));
        if result.size >= 2 {
            let expected = 2.0 * result.num_edges as f64 / (result.size * (result.size - 1)) as f64;
            prop_assert!((result.density - expected).abs() < 1e-12);
        } else {
            prop_assert_eq!(result.density, 0.0);
        }
    }

    #[test]
    fn prop_degree_sum_is_twice_edges(play in play_strategy()) {
        prop_assume!(has_speakers(&play));
        let result = run(&play, false);

        let degree_sum: usize = result.nodes.values().map(|node| node.degree).sum();
        prop_assert_eq!(degree_sum, 2 * result.num_edges);
        prop_assert_eq!(result.nodes.len(), result.size);
    }

    #[test]
    fn prop_per_node_ranges(play in play_strategy()) {
        prop_assume!(has_speakers(&play));
        let result = run(&play, false);

        for (id, node) in &result.nodes {
            prop_assert!((0.0..=1.0 + 1e-12).contains(&node.closeness), "closeness {} for {}", node.closeness, id);
            prop_assert!(node.betweenness >= 0.0, "betweenness {} for {}", node.betweenness, id);
            prop_assert!(node.weighted_degree >= node.degree as u64);
            if let Some(ev) = node.eigenvector {
                prop_assert!(ev >= 0.0);
            }
        }
        prop_assert!((0.0..=1.0).contains(&result.average_clustering));
    }

    #[test]
    fn prop_max_degree_ids_sorted_and_exact(play in play_strategy()) {
        prop_assume!(has_speakers(&play));
        let result = run(&play, false);

        let mut expected: Vec<String> = result
            .nodes
            .iter()
            .filter(|(_, node)| node.degree == result.max_degree)
            .map(|(id, _)| id.clone())
            .collect();
        expected.sort();
        prop_assert_eq!(&result.max_degree_ids, &expected);
    }

    #[test]
    fn prop_parallel_is_byte_identical(play in play_strategy()) {
        prop_assume!(has_speakers(&play));
        let sequential = serde_json::to_string(&run(&play, false)).expect("json");
        let parallel = serde_json::to_string(&run(&play, true)).expect("json");
        prop_assert_eq!(sequential, parallel);
    }

    #[test]
    fn prop_segment_order_is_irrelevant(play in play_strategy()) {
        prop_assume!(has_speakers(&play));
        let mut reversed = play.clone();
        reversed.reverse();

        let forward = serde_json::to_string(&run(&play, false)).expect("json");
        let backward = serde_json::to_string(&run(&reversed, false)).expect("json");
        prop_assert_eq!(forward, backward);
    }
}
