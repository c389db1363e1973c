use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::Rng;
use rover_core::TransitionGraph;
use rover_recovery::recover_signal;

fn noisy_corridor(len: usize) -> (TransitionGraph, Vec<String>, String) {
    let mut rng = rand::thread_rng();
    let mut graph = TransitionGraph::new();
    let rooms: Vec<String> = (0..len).map(|i| format!("R{i}")).collect();
    graph.add_transition("START", rooms[0].as_str());
    for hop in rooms.windows(2) {
        graph.add_transition(hop[0].as_str(), hop[1].as_str());
    }
    let observed: Vec<String> = rooms
        .iter()
        .map(|room| {
            if rng.gen_bool(0.1) {
                "NOISE".to_string()
            } else {
                room.clone()
            }
        })
        .collect();
    let exit = rooms[len - 1].clone();
    (graph, observed, exit)
}

fn noisy_grid_walk(side: usize, hops: usize) -> (TransitionGraph, Vec<String>, String) {
    let mut rng = rand::thread_rng();
    let mut graph = TransitionGraph::new();
    let label = |x: usize, y: usize| format!("r{x}x{y}");
    for y in 0..side {
        for x in 0..side {
            if x + 1 < side {
                graph.add_transition(label(x, y), label(x + 1, y));
                graph.add_transition(label(x + 1, y), label(x, y));
            }
            if y + 1 < side {
                graph.add_transition(label(x, y), label(x, y + 1));
                graph.add_transition(label(x, y + 1), label(x, y));
            }
        }
    }
    let (mut x, mut y) = (0, 0);
    let mut observed = Vec::with_capacity(hops);
    for _ in 0..hops {
        match rng.gen_range(0..4) {
            0 if x + 1 < side => x += 1,
            1 if x > 0 => x -= 1,
            2 if y + 1 < side => y += 1,
            3 if y > 0 => y -= 1,
            _ if x + 1 < side => x += 1,
            _ => x -= 1,
        }
        if rng.gen_bool(0.1) {
            observed.push("NOISE".to_string());
        } else {
            observed.push(label(x, y));
        }
    }
    let exit = label(x, y);
    (graph, observed, exit)
}

fn bench_recover(c: &mut Criterion) {
    let (graph, observed, exit) = noisy_corridor(100);
    c.bench_function("recover_corridor_100", |b| {
        b.iter(|| black_box(recover_signal(black_box(&observed), &graph, &exit).unwrap()))
    });

    let (graph, observed, exit) = noisy_grid_walk(12, 60);
    c.bench_function("recover_grid_12x12_trace_60", |b| {
        b.iter(|| black_box(recover_signal(black_box(&observed), &graph, &exit).unwrap()))
    });
}

criterion_group!(benches, bench_recover);
criterion_main!(benches);
