use criterion::Criterion;

mod bench_util;
use bench_util::{bench_inputs, configure_criterion, gen_range};

fn bench_sinh(c: &mut Criterion) {
    let inputs = [0.0, 1e-10, -1e-10, 0.5, -0.5, 1.0, 5.0, 21.9, 100.0, 710.0];
    let small = gen_range(1024, -1.0, 1.0, 0x1122);
    let mid = gen_range(1024, -22.0, 22.0, 0x3344);
    let large = gen_range(1024, -710.0, 710.0, 0x5566);

    let mut group = c.benchmark_group("sinh/smoke");
    bench_inputs(&mut group, &inputs, exactrig::sinh, f64::sinh);
    group.finish();

    let mut group = c.benchmark_group("sinh/small");
    bench_inputs(&mut group, &small, exactrig::sinh, f64::sinh);
    group.finish();

    let mut group = c.benchmark_group("sinh/mid");
    bench_inputs(&mut group, &mid, exactrig::sinh, f64::sinh);
    group.finish();

    let mut group = c.benchmark_group("sinh/large");
    bench_inputs(&mut group, &large, exactrig::sinh, f64::sinh);
    group.finish();
}

fn main() {
    let mut c = configure_criterion();
    bench_sinh(&mut c);
    c.final_summary();
}
