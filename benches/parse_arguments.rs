//! Benchmark: parse + decode of typical tracer argument lists, and the two
//! phases (grammar to tree, tree to values) separately.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use strace_args::{parse_arguments, parse_tree, transform};

const MMAP: &str = "NULL, 16384, PROT_READ|PROT_WRITE, MAP_PRIVATE|MAP_ANONYMOUS, -1, 0";
const WRITE: &str = r#"1, "i'm a string with \"different\" kinds of quotes", 68"#;
const FSTAT: &str = "3, {st_dev=makedev(0, 0), st_ino=0x1f, st_mode=S_IFREG, st_nlink=1, st_size=2350}";
const POLL: &str = "[{fd=3, events=POLLIN|POLLPRI}, {fd=4, events=POLLOUT}, {fd=5, events=POLLIN}], 3, -1";

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_arguments");
    for (name, input) in [("mmap", MMAP), ("write", WRITE), ("poll", POLL)] {
        group.bench_function(name, |b| b.iter(|| parse_arguments(black_box(input))));
    }
    group.finish();

    // Rejected input still runs the full ordered choice before failing.
    c.bench_function("parse_arguments/rejected", |b| {
        b.iter(|| parse_arguments(black_box(FSTAT)).is_err())
    });

    c.bench_function("parse_tree/poll", |b| b.iter(|| parse_tree(black_box(POLL))));
    c.bench_function("transform/poll", |b| {
        b.iter_batched(
            || parse_tree(POLL).expect("parse"),
            |nodes| transform(nodes),
            criterion::BatchSize::SmallInput,
        )
    });
}

criterion_group!(benches, bench_parse);
criterion_main!(benches);
