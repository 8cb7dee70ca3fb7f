// Dweve IDF - Input Data File toolkit
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Decoder, validator and encoder benchmarks.
//!
//! Measures throughput over synthetic inputs of increasing size built from
//! the standard fixture schema.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use idf_core::{decode, encode, validate};
use idf_test::fixtures::standard_schema;
use std::fmt::Write;

const SIZES: &[usize] = &[10, 100, 1_000];

/// `count` zones plus a building and one long schedule.
fn generate_input(count: usize) -> String {
    let mut text = String::from("Building, Bench Building, 0, City, 0.04;\n\n");
    for i in 0..count {
        let _ = writeln!(
            text,
            "Zone,\n  Zone {i},   !- Name\n  {x},  !- X Origin\n  1,  !- Multiplier\n  Autocalculate;  !- Volume\n",
            i = i,
            x = i as f64 * 2.5,
        );
    }
    text.push_str("Schedule:Compact, Sched, Fraction");
    for hour in 1..=count.min(24) {
        let _ = write!(text, ", Until: {}:00, 0.5", hour);
    }
    text.push_str(";\n");
    text
}

fn bench_decode(c: &mut Criterion) {
    let schema = standard_schema();
    let mut group = c.benchmark_group("decode");

    for &size in SIZES {
        let input = generate_input(size);
        group.throughput(Throughput::Bytes(input.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &input, |b, input| {
            b.iter(|| decode(black_box(input), &schema))
        });
    }

    group.finish();
}

fn bench_validate(c: &mut Criterion) {
    let schema = standard_schema();
    let mut group = c.benchmark_group("validate");

    for &size in SIZES {
        let document = decode(&generate_input(size), &schema).document;
        group.throughput(Throughput::Elements(document.total_instances() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &document, |b, doc| {
            b.iter(|| validate(black_box(doc), &schema))
        });
    }

    group.finish();
}

fn bench_encode(c: &mut Criterion) {
    let schema = standard_schema();
    let mut group = c.benchmark_group("encode");

    for &size in SIZES {
        let document = decode(&generate_input(size), &schema).document;
        group.throughput(Throughput::Elements(document.total_instances() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &document, |b, doc| {
            b.iter(|| encode(black_box(doc), &schema))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_decode, bench_validate, bench_encode);
criterion_main!(benches);
