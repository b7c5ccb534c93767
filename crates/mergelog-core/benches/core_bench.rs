// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use mergelog_core::{extract_merge_request_url, extract_tickets, is_squash_merge};

/// A representative squash-merge show text
fn sample_show_text() -> String {
    let mut text = String::from(
        "commit 1945ab9c752534e733c38ba0109dc3b741f0a6eb\n\
         Author: Sample Author <sample@example.com>\n\
         Date:   Sat Jan 17 02:33:06 2026 +0000\n\n",
    );
    for i in 0..50 {
        text.push_str(&format!("    Touch subsystem {i} for tickets #{i} and #{}\n", i + 1000));
    }
    text.push_str("    Merged-on: https://app.assembla.com/spaces/demo/git-5/merge_requests/871\n");
    text
}

fn core_benchmark(c: &mut Criterion) {
    let show_text = sample_show_text();

    c.bench_function("extract_tickets", |b| {
        b.iter(|| extract_tickets(black_box(&show_text)))
    });

    c.bench_function("extract_merge_request_url", |b| {
        b.iter(|| extract_merge_request_url(black_box(&show_text)))
    });

    c.bench_function("is_squash_merge", |b| {
        b.iter(|| is_squash_merge(black_box(&show_text)))
    });
}

criterion_group!(benches, core_benchmark);
criterion_main!(benches);
