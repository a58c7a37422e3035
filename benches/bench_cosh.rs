use criterion::Criterion;

mod bench_util;
use bench_util::{bench_inputs, configure_criterion, gen_range};

fn bench_cosh(c: &mut Criterion) {
    let inputs = [0.0, 1e-10, 0.25, -0.25, 0.5, 1.0, 5.0, 21.9, 100.0, 710.0];
    let small = gen_range(1024, -0.3465, 0.3465, 0x7788);
    let mid = gen_range(1024, -22.0, 22.0, 0x99aa);
    let large = gen_range(1024, -710.0, 710.0, 0xbbcc);

    let mut group = c.benchmark_group("cosh/smoke");
    bench_inputs(&mut group, &inputs, exactrig::cosh, f64::cosh);
    group.finish();

    let mut group = c.benchmark_group("cosh/small");
    bench_inputs(&mut group, &small, exactrig::cosh, f64::cosh);
    group.finish();

    let mut group = c.benchmark_group("cosh/mid");
    bench_inputs(&mut group, &mid, exactrig::cosh, f64::cosh);
    group.finish();

    let mut group = c.benchmark_group("cosh/large");
    bench_inputs(&mut group, &large, exactrig::cosh, f64::cosh);
    group.finish();
}

fn main() {
    let mut c = configure_criterion();
    bench_cosh(&mut c);
    c.final_summary();
}
