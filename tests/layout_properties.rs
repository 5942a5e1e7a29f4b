use pallomeri::layout::{bin_index, fits, min_slots, partition};
use pallomeri::{CanvasSpec, Layout, LayoutConfig, ValueRange, layout};
use std::collections::HashSet;

/// Deterministic pseudo-random values (LCG), some of them outside the range.
fn values(n: usize, seed: u64) -> Vec<f64> {
    let mut s = seed;
    (0..n)
        .map(|_| {
            s = s.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            ((s >> 11) as f64 / (1u64 << 53) as f64) * 1.4 - 0.2
        })
        .collect()
}

fn configs() -> Vec<LayoutConfig> {
    let mut out = Vec::new();
    for &bins in &[1usize, 3, 5, 12] {
        for &(w, h) in &[(600.0, 400.0), (300.0, 900.0), (1000.0, 120.0)] {
            out.push(LayoutConfig {
                canvas: CanvasSpec { width: w, height: h },
                bins,
                padding: 0.1,
                ..Default::default()
            });
        }
    }
    out
}

#[test]
fn every_item_is_placed_exactly_once() {
    for (k, cfg) in configs().iter().enumerate() {
        let data = values(50 + 37 * k, k as u64 + 1);
        let l = layout(&data, |v| *v, cfg).unwrap();
        assert_eq!(l.len(), data.len());
        let seen: HashSet<usize> = l.placements().map(|p| p.index).collect();
        assert_eq!(seen.len(), data.len());
        for p in l.placements() {
            assert_eq!(*p.item, data[p.index]);
        }
    }
}

#[test]
fn cells_are_distinct_and_balls_do_not_overlap() {
    for (k, cfg) in configs().iter().enumerate() {
        let data = values(200 + 13 * k, 99 + k as u64);
        let l = layout(&data, |v| *v, cfg).unwrap();
        for bin in &l.bins {
            let mut cells = HashSet::new();
            for p in &bin.placements {
                assert!(p.column < l.slots);
                assert!(cells.insert((p.column, p.row)), "duplicate cell in bin {}", bin.spec.index);
                // stays inside the bin and the canvas
                assert!(p.cx - p.r >= bin.spec.x0 - 1e-9);
                assert!(p.cx + p.r <= bin.spec.x0 + bin.spec.width + 1e-9);
                assert!(p.cy - p.r >= -1e-9);
                assert!(p.cy + p.r <= cfg.canvas.height + 1e-9);
            }
            for (i, a) in bin.placements.iter().enumerate() {
                for b in &bin.placements[i + 1..] {
                    let d = ((a.cx - b.cx).powi(2) + (a.cy - b.cy).powi(2)).sqrt();
                    assert!(d + 1e-9 >= a.r + b.r);
                }
            }
        }
    }
}

#[test]
fn slot_count_is_sufficient_and_minimal() {
    for (k, cfg) in configs().iter().enumerate() {
        let data = values(10 + 71 * k, 7 + k as u64);
        let l = layout(&data, |v| *v, cfg).unwrap();
        let max_items = l.bins.iter().map(|b| b.placements.len()).max().unwrap();
        let w = l.bins[0].spec.width;
        let h = cfg.canvas.height;
        assert!(fits(w, h, max_items, l.slots));
        assert!(max_items.div_ceil(l.slots) as f64 * (w / l.slots as f64) <= h);
        if l.slots > 1 {
            assert!(!fits(w, h, max_items, l.slots - 1));
        }
    }
}

#[test]
fn items_land_in_the_bin_of_their_value() {
    let range = ValueRange::new(-2.0, 3.0).unwrap();
    let n = 5;
    let vw = range.width() / n as f64;
    for i in 0..n {
        for frac in [0.0, 0.25, 0.5, 0.99] {
            let v = range.min + (i as f64 + frac) * vw;
            assert_eq!(bin_index(v, range, n), i, "value {v}");
        }
    }
    assert_eq!(bin_index(-100.0, range, n), 0);
    assert_eq!(bin_index(100.0, range, n), n - 1);
}

#[test]
fn bins_are_sorted_ascending() {
    let data = values(300, 42);
    let bins = partition(&data, |v| *v, ValueRange::default(), 6, 600.0).unwrap();
    for bin in &bins {
        for w in bin.items.windows(2) {
            assert!(w[0].value <= w[1].value);
        }
    }
}

fn bits(l: &Layout<'_, f64>) -> Vec<(usize, u64, u64, u64, u64)> {
    l.placements()
        .map(|p| (p.index, p.cx.to_bits(), p.cy.to_bits(), p.r.to_bits(), p.color_key.to_bits()))
        .collect()
}

#[test]
fn identical_input_gives_identical_output() {
    let cfg = LayoutConfig {
        color_bins: Some(4),
        ..Default::default()
    };
    let data = values(120, 5);
    let a = layout(&data, |v| *v, &cfg).unwrap();
    let b = layout(&data, |v| *v, &cfg).unwrap();
    assert_eq!(a.slots, b.slots);
    assert_eq!(bits(&a), bits(&b));
}

#[test]
fn scenario_two_bins() {
    let data = [0.1, 0.4, 0.9];
    let bins = partition(&data, |v| *v, ValueRange::default(), 2, 600.0).unwrap();
    let got: Vec<Vec<f64>> = bins
        .iter()
        .map(|b| b.items.iter().map(|i| i.value).collect())
        .collect();
    assert_eq!(got, vec![vec![0.1, 0.4], vec![0.9]]);
}

#[test]
fn scenario_three_items_one_slot() {
    let cfg = LayoutConfig::default();
    let data = [0.05, 0.1, 0.15];
    let l = layout(&data, |v| *v, &cfg).unwrap();
    assert_eq!(l.bins.len(), 5);
    assert_eq!(l.bins[0].spec.width, 120.0);
    assert_eq!(l.slots, 1);
    assert_eq!(min_slots(120.0, 400.0, 3).unwrap(), 1);
    // one column, stacked from the bottom
    let ys: Vec<f64> = l.bins[0].placements.iter().map(|p| p.cy).collect();
    assert_eq!(ys, vec![340.0, 220.0, 100.0]);
    assert!((l.bins[0].placements[0].r - 54.0).abs() < 1e-9);
}

#[test]
fn scenario_empty_data() {
    let data: Vec<f64> = Vec::new();
    let l = layout(&data, |v| *v, &LayoutConfig::default()).unwrap();
    assert_eq!(l.bins.len(), 5);
    assert!(l.bins.iter().all(|b| b.placements.is_empty()));
    assert_eq!(l.slots, 1);
}

#[test]
fn scenario_max_value_goes_to_last_bin() {
    let data = [1.0];
    let l = layout(&data, |v| *v, &LayoutConfig::default()).unwrap();
    assert_eq!(l.bins[4].placements.len(), 1);
}

#[test]
fn hit_test_finds_the_ball_under_a_point() {
    let data = [0.05, 0.1, 0.95];
    let l = layout(&data, |v| *v, &LayoutConfig::default()).unwrap();
    let target = &l.bins[4].placements[0];
    let hit = l.hit_test(target.cx, target.cy).unwrap();
    assert_eq!(hit.index, 2);
    assert!(l.hit_test(300.0, 1.0).is_none());
}
