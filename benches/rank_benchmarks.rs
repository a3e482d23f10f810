use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use linkrank::{rank_graph, LinkGraph, PageRankConfig};

/// Ring of pages, each also linking to a shared hub page
fn ring_with_hub(size: usize) -> LinkGraph {
    let mut graph = LinkGraph::new();
    for i in 0..size {
        let page = format!("page{}.md", i);
        graph.add_edge(page.clone(), format!("page{}.md", (i + 1) % size));
        graph.add_edge(page.clone(), "hub.md");
        graph.add_edge("hub.md", page);
    }
    graph
}

/// Benchmark a full 40-round ranking run
fn bench_rank_graph(c: &mut Criterion) {
    let mut group = c.benchmark_group("rank_graph");

    for size in [100, 1000, 10_000].iter() {
        let graph = ring_with_hub(*size);
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| {
                let report = rank_graph(&graph, PageRankConfig::default()).unwrap();
                criterion::black_box(report.top);
            });
        });
    }
    group.finish();
}

/// Benchmark grouping edges by source page
fn bench_grouping(c: &mut Criterion) {
    let mut group = c.benchmark_group("grouping");

    for size in [1000, 10_000].iter() {
        let graph = ring_with_hub(*size);
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| criterion::black_box(graph.grouped().len()));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_rank_graph, bench_grouping);
criterion_main!(benches);
