// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Nereid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::str::FromStr;
use std::time::Duration;

use criterion::Criterion;

use pprof::criterion::{Output, PProfProfiler};

fn env_or<T: FromStr>(name: &str, default: T) -> T {
    std::env::var(name).ok().and_then(|raw| raw.trim().parse::<T>().ok()).unwrap_or(default)
}

/// Criterion tuned for the layout/render benches, with a pprof flamegraph per case.
///
/// `DEPGRAPH_PROFILE_FREQ`, `DEPGRAPH_BENCH_SAMPLE_SIZE`, `DEPGRAPH_BENCH_WARMUP_SECS` and
/// `DEPGRAPH_BENCH_MEASUREMENT_SECS` override the defaults.
pub fn criterion() -> Criterion {
    let frequency = env_or::<i32>("DEPGRAPH_PROFILE_FREQ", 100).clamp(1, 1000);
    let sample_size = env_or::<usize>("DEPGRAPH_BENCH_SAMPLE_SIZE", 50).clamp(10, 200);
    let warmup = env_or::<u64>("DEPGRAPH_BENCH_WARMUP_SECS", 2).clamp(1, 60);
    let measurement = env_or::<u64>("DEPGRAPH_BENCH_MEASUREMENT_SECS", 4).clamp(1, 120);

    Criterion::default()
        .sample_size(sample_size)
        .warm_up_time(Duration::from_secs(warmup))
        .measurement_time(Duration::from_secs(measurement))
        .with_profiler(PProfProfiler::new(frequency, Output::Flamegraph(None)))
}
