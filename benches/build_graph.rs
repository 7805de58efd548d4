use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use include_graph_explorer::graph::GraphBuilder;
use std::fs;
use std::path::Path;

fn write(path: &Path, content: &str) {
    fs::write(path, content).expect("write fixture");
}

// Synthetic tree: a header chain of length n where every link also pulls in
// one shared header, so the visited-map is exercised on every file.
fn synth_tree(root: &Path, n: usize) {
    write(&root.join("common.h"), "struct Common {};\n");
    for i in 0..n {
        let next =
            if i + 1 < n { format!("#include \"h{}.h\"\n", i + 1) } else { String::new() };
        write(&root.join(format!("h{i}.h")), &format!("{next}#include \"common.h\"\n"));
    }
    write(&root.join("main.cpp"), "#include \"h0.h\"\nint main() {}\n");
}

fn bench_build_graph(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_graph");

    for n in [50usize, 200] {
        let dir = tempfile::tempdir().expect("tempdir");
        synth_tree(dir.path(), n);
        let entry = dir.path().join("main.cpp");
        group.bench_function(BenchmarkId::new("chain_with_shared_header", n), |b| {
            b.iter(|| {
                let mut builder = GraphBuilder::new();
                let graph = builder.build(black_box(&entry));
                // prevent optimizer from discarding
                black_box(graph.nodes.len())
            })
        });
    }

    group.finish();
}

criterion_group!(name = benches; config = Criterion::default(); targets = bench_build_graph);
criterion_main!(benches);
