use criterion::{Criterion, black_box, criterion_group, criterion_main};
use pugdoc_blocks::{Runner, SourceFile, process_file};

fn template(blocks: usize) -> String {
    let mut content = String::new();
    for i in 0..blocks {
        content.push_str("//- @pugdoc\n");
        content.push_str(&format!("  name: mixin{i}\n"));
        content.push_str("  description: Renders something useful.\n");
        content.push_str("  arguments:\n    - {string} label\n");
        content.push_str("//- @endpugdoc\n");
        content.push_str(&format!("mixin mixin{i}(label)\n  div.item= label\n    span extra\n\n"));
    }
    content
}

fn process_file_benchmark(c: &mut Criterion) {
    let file = SourceFile::in_memory("views/mixins.pug", template(200));

    c.bench_function("file::process_file (200 blocks)", |b| {
        b.iter(|| process_file(black_box(&file)).unwrap())
    });
}

fn run_benchmark(c: &mut Criterion) {
    let files: Vec<SourceFile> = (0..50)
        .map(|i| SourceFile::in_memory(&format!("views/file{i}.pug"), template(20)))
        .collect();
    let runner = Runner::default();

    c.bench_function("run::Runner::run_files (50 files)", |b| {
        b.iter(|| runner.run_files(black_box(files.clone())).unwrap())
    });
}

criterion_group!(benches, process_file_benchmark, run_benchmark);
criterion_main!(benches);
