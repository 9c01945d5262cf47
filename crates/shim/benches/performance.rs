//! Performance benchmarks for the WinClaw shim
//!
//! Everything before the spawn runs on every invocation, so it should stay
//! negligible next to process creation:
//! - Self-location from argument zero
//! - Launch plan assembly with growing argument vectors
//!
//! Run with: `cargo bench`

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::ffi::{OsStr, OsString};
use winclaw_shim::{InstallDir, LaunchPlan, Layout, ShimContext};

fn invocation() -> OsString {
    if cfg!(windows) {
        OsString::from(r"C:\Tools\Winclaw\winclaw.exe")
    } else {
        OsString::from("/opt/winclaw/winclaw")
    }
}

fn bench_self_location(c: &mut Criterion) {
    let mut group = c.benchmark_group("self_location");
    let argv0 = invocation();

    group.bench_function("absolute_argv0", |b| {
        b.iter(|| criterion::black_box(InstallDir::locate(Some(argv0.as_os_str()))))
    });
    group.bench_function("relative_argv0", |b| {
        b.iter(|| criterion::black_box(InstallDir::locate(Some(OsStr::new("bin/winclaw")))))
    });

    group.finish();
}

fn bench_plan_assembly(c: &mut Criterion) {
    let mut group = c.benchmark_group("plan_assembly");

    for count in [0usize, 8, 64] {
        let argv: Vec<OsString> = std::iter::once(invocation())
            .chain((0..count).map(|i| OsString::from(format!("--arg-{i}"))))
            .collect();

        group.bench_with_input(BenchmarkId::new("from_args", count), &argv, |b, argv| {
            b.iter(|| {
                let ctx = ShimContext::from_args(argv.clone()).ok();
                criterion::black_box(
                    ctx.map(|ctx| LaunchPlan::assemble(&ctx.install_dir, &Layout::WINCLAW, ctx.args)),
                )
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_self_location, bench_plan_assembly);
criterion_main!(benches);
