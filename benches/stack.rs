// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use criterion::{
    black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion, Throughput,
};

use arraystack::ArrayStack;

const SIZES: &[usize] = &[1024, 2048, 4096, 8192, 16384, 32768, 65536, 131_072];

#[allow(dead_code)]
struct BigLumpOfUsize([usize; 64]);

impl Default for BigLumpOfUsize {
    fn default() -> Self {
        Self([0; 64])
    }
}

pub fn push<A: Default>(name: &str, c: &mut Criterion) {
    let mut group = c.benchmark_group(name);
    for size in SIZES {
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::new("vec", size), size, |b, &size| {
            b.iter_batched_ref(
                || Vec::with_capacity(size),
                |vec| {
                    for _ in 0..size {
                        vec.push(A::default());
                    }
                },
                BatchSize::SmallInput,
            )
        });
        group.bench_with_input(BenchmarkId::new("arraystack", size), size, |b, &size| {
            b.iter_batched_ref(
                || ArrayStack::<A>::with_capacity(size).unwrap(),
                |stack| {
                    for _ in 0..size {
                        black_box(stack.push(A::default())).unwrap();
                    }
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

pub fn push_pop<A: Default>(name: &str, c: &mut Criterion) {
    let mut group = c.benchmark_group(name);
    for size in SIZES {
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::new("vec", size), size, |b, &size| {
            b.iter_batched_ref(
                || Vec::with_capacity(size),
                |vec| {
                    for _ in 0..size {
                        vec.push(A::default());
                    }
                    while let Some(value) = vec.pop() {
                        black_box(value);
                    }
                },
                BatchSize::SmallInput,
            )
        });
        group.bench_with_input(BenchmarkId::new("arraystack", size), size, |b, &size| {
            b.iter_batched_ref(
                || ArrayStack::<A>::with_capacity(size).unwrap(),
                |stack| {
                    for _ in 0..size {
                        stack.push(A::default()).unwrap();
                    }
                    while let Ok(value) = stack.pop() {
                        black_box(value);
                    }
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn push_usize(c: &mut Criterion) {
    push::<usize>("push/usize", c)
}

fn push_pop_usize(c: &mut Criterion) {
    push_pop::<usize>("push_pop/usize", c)
}

fn push_64x_usize(c: &mut Criterion) {
    push::<BigLumpOfUsize>("push/64xusize", c)
}

fn push_pop_64x_usize(c: &mut Criterion) {
    push_pop::<BigLumpOfUsize>("push_pop/64xusize", c)
}

criterion_group!(
    arraystack,
    push_usize,
    push_pop_usize,
    push_64x_usize,
    push_pop_64x_usize
);
criterion_main!(arraystack);
