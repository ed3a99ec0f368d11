use std::collections::HashSet;

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::solver::{Solution, Solver, SolverConfig};
use crate::tiles::{Draw, DrawConfig};

fn sequential() -> Solver {
    Solver::new(SolverConfig {
        parallel: false,
        stop_on_exact: true,
    })
}

/// Every value reachable from any non-empty sub-multiset, without pruning
fn reachable(values: &[u32], out: &mut HashSet<u32>) {
    let mut visited = HashSet::new();
    reachable_from(values.to_vec(), &mut visited, out);
}

fn reachable_from(
    mut values: Vec<u32>,
    visited: &mut HashSet<Vec<u32>>,
    out: &mut HashSet<u32>,
) {
    values.sort_unstable();
    if !visited.insert(values.clone()) {
        return;
    }
    out.extend(values.iter().copied());
    for i in 0..values.len() {
        for j in (i + 1)..values.len() {
            let (a, b) = (values[i], values[j]);
            let mut results = vec![a + b, a * b];
            if a != b {
                results.push(a.max(b) - a.min(b));
            }
            if a % b == 0 {
                results.push(a / b);
            }
            if b % a == 0 {
                results.push(b / a);
            }
            for r in results {
                let mut next: Vec<u32> = values
                    .iter()
                    .enumerate()
                    .filter(|&(k, _)| k != i && k != j)
                    .map(|(_, &v)| v)
                    .collect();
                next.push(r);
                reachable_from(next, visited, out);
            }
        }
    }
}

fn is_sub_multiset(part: &[u32], whole: &[u32]) -> bool {
    let mut pool = whole.to_vec();
    for v in part {
        match pool.iter().position(|w| w == v) {
            Some(pos) => {
                pool.swap_remove(pos);
            }
            None => return false,
        }
    }
    true
}

fn assert_consistent(solution: &Solution, plates: &[u32]) {
    let best = solution.best();
    assert!(best.value() > 0);
    assert_eq!(best.expression().evaluate(), Ok(best.value()));
    assert!(
        is_sub_multiset(&best.operands(), plates),
        "{} uses tiles outside {:?}",
        best,
        plates
    );
    let largest = plates.iter().copied().max().unwrap_or(0);
    assert!(solution.distance() <= largest.abs_diff(solution.target()));
}

#[test]
fn test_exact_small_tiles() {
    let plates = [1, 2, 3, 4, 5, 10];
    let solution = Solver::default().solve(&plates, 111);
    assert!(solution.is_exact(), "got {}", solution.best());
    assert_eq!(solution.best().value(), 111);
    assert_consistent(&solution, &plates);
}

#[test]
fn test_exact_with_all_large_tiles() {
    let plates = [25, 50, 75, 100, 3, 6];
    let solution = Solver::default().solve(&plates, 952);
    assert!(solution.is_exact(), "got {}", solution.best());
    assert_eq!(solution.best().value(), 952);
    assert_consistent(&solution, &plates);
}

#[test]
fn test_unreachable_target_returns_closest() {
    let plates = [1, 1, 1, 1, 1, 1];
    let solution = Solver::default().solve(&plates, 999);
    assert!(!solution.is_exact());
    assert_eq!(solution.best().value(), 9);
    assert_eq!(solution.distance(), 990);
    assert_consistent(&solution, &plates);
}

#[test]
fn test_matches_brute_force_distance() {
    let plates = [25, 50, 75, 7];
    let mut values = HashSet::new();
    reachable(&plates, &mut values);

    let solver = sequential();
    for target in 100..=999 {
        let expected = values
            .iter()
            .map(|v| v.abs_diff(target))
            .min()
            .unwrap_or(u32::MAX);
        let solution = solver.solve(&plates, target);
        assert_eq!(
            solution.distance(),
            expected,
            "target {}: got {}",
            target,
            solution.best()
        );
        assert_eq!(solution.is_exact(), values.contains(&target));
    }
}

#[test]
fn test_matches_brute_force_with_duplicates() {
    let plates = [2, 2, 9, 9, 100];
    let mut values = HashSet::new();
    reachable(&plates, &mut values);

    let solver = Solver::default();
    for target in (100..=999).step_by(37) {
        let expected = values.iter().map(|v| v.abs_diff(target)).min();
        let solution = solver.solve(&plates, target);
        assert_eq!(Some(solution.distance()), expected, "target {}", target);
        assert_consistent(&solution, &plates);
    }
}

#[test]
fn test_six_plates_match_brute_force() {
    let plates = [3, 6, 25, 50, 75, 100];
    let mut values = HashSet::new();
    reachable(&plates, &mut values);

    let solver = Solver::default();
    for target in [952, 101, 383, 617, 811, 999] {
        let expected = values.iter().map(|v| v.abs_diff(target)).min();
        let solution = solver.solve(&plates, target);
        assert_eq!(Some(solution.distance()), expected, "target {}", target);
        assert_eq!(solution.is_exact(), values.contains(&target));
        assert_consistent(&solution, &plates);
    }
}

#[test]
fn test_six_plates_without_exact_path() {
    // Small tiles only: nothing in 100..=999 is reachable
    let plates = [1, 1, 2, 2, 3, 3];
    let mut values = HashSet::new();
    reachable(&plates, &mut values);
    let max = values.iter().copied().max().unwrap_or(0);
    assert!(max < 100);

    let solver = Solver::default();
    for target in [100, 250, 999] {
        let solution = solver.solve(&plates, target);
        assert!(!solution.is_exact());
        assert_eq!(solution.best().value(), max, "target {}", target);
        assert_consistent(&solution, &plates);
    }
}

#[test]
fn test_solve_is_deterministic() {
    let plates = [3, 7, 8, 50, 75, 100];
    let solver = Solver::default();
    let first = solver.solve(&plates, 843);
    let second = solver.solve(&plates, 843);
    assert_eq!(first.best().value(), second.best().value());
    assert_eq!(first.best().text(), second.best().text());
}

#[test]
fn test_parallel_matches_sequential() {
    let draws: [(&[u32], u32); 3] = [
        (&[1, 4, 6, 9, 25], 517),
        (&[2, 3, 5, 10, 100], 999),
        (&[6, 6, 8, 50, 75], 263),
    ];
    for stop_on_exact in [true, false] {
        let parallel = Solver::new(SolverConfig {
            parallel: true,
            stop_on_exact,
        });
        let sequential = Solver::new(SolverConfig {
            parallel: false,
            stop_on_exact,
        });
        for (plates, target) in draws {
            let a = parallel.solve(plates, target);
            let b = sequential.solve(plates, target);
            assert_eq!(a.best(), b.best(), "plates {:?} target {}", plates, target);
        }
    }
}

#[test]
fn test_full_search_counts_every_node() {
    let plates = [1, 4, 6, 9, 25];
    let full = Solver::new(SolverConfig {
        parallel: false,
        stop_on_exact: false,
    });
    let first = full.solve(&plates, 517);
    let again = full.solve(&plates, 517);
    assert!(first.explored() > 0);
    assert_eq!(first.explored(), again.explored());

    let parallel_full = Solver::new(SolverConfig {
        parallel: true,
        stop_on_exact: false,
    });
    assert_eq!(parallel_full.solve(&plates, 517).explored(), first.explored());
}

#[test]
fn test_first_found_wins_ties() {
    // 4 + 2 = 6 and 4 x 2 = 8 are both one away from 7; addition comes first
    let solution = sequential().solve(&[2, 4], 7);
    assert_eq!(solution.best().value(), 6);
    assert_eq!(solution.best().text(), "4 + 2");

    let solution = Solver::default().solve(&[4, 2], 7);
    assert_eq!(solution.best().text(), "4 + 2");
}

#[test]
fn test_single_plate_exact_needs_no_search() {
    let solution = Solver::default().solve(&[3, 100], 100);
    assert!(solution.is_exact());
    assert!(solution.best().is_leaf());
    assert_eq!(solution.explored(), 0);
}

#[test]
fn test_fallback_is_largest_plate() {
    // Nothing beats 10 for a target of 10 except 10 itself
    let solution = sequential().solve(&[10, 1], 10);
    assert_eq!(solution.best().text(), "10");

    // Far below every plate, a difference beats both leaves
    let solution = sequential().solve(&[50, 75], 26);
    assert_eq!(solution.best().value(), 25);
    assert_eq!(solution.best().text(), "75 - 50");
}

#[test]
fn test_solution_records_initial_state() {
    let solution = Solver::default().solve(&[100, 3, 25], 400);
    assert_eq!(solution.target(), 400);
    assert_eq!(solution.depth(), 3);
    let values: Vec<u32> = solution.candidates().iter().map(|n| n.value()).collect();
    assert_eq!(values, vec![3, 25, 100]);
}

#[test]
fn test_empty_draw_does_not_panic() {
    let solution = Solver::default().solve(&[], 500);
    assert_eq!(solution.depth(), 0);
    assert!(!solution.is_exact());
}

#[test]
fn test_random_draws_are_consistent() {
    let mut rng = StdRng::seed_from_u64(2024);
    let config = DrawConfig::default();
    let solver = Solver::default();
    for _ in 0..3 {
        if let Ok(draw) = Draw::random(&config, &mut rng) {
            let solution = solver.solve(draw.plates(), draw.target());
            assert_eq!(solution.depth(), 6);
            assert_consistent(&solution, draw.plates());
        }
    }
}
