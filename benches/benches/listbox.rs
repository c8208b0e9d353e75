// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{
    BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};
use understory_listbox::{
    Listbox, ListboxConfig, ListboxError, ListboxKey, ListboxOption, Typeahead,
};

fn values(len: usize) -> Vec<String> {
    (0..len).map(|i| format!("option {i:05}")).collect()
}

fn register_all(listbox: &mut Listbox, options: &mut [ListboxOption], values: &[String]) {
    listbox
        .register_options(|pass| -> Result<(), ListboxError> {
            for (option, value) in options.iter_mut().zip(values) {
                option.register(Some(&mut *pass), value)?;
            }
            Ok(())
        })
        .0
        .expect("options register inside a pass");
}

fn bench_registration(c: &mut Criterion) {
    let mut group = c.benchmark_group("listbox/register_options");

    for len in [16usize, 256, 4_096] {
        let values = values(len);
        group.throughput(Throughput::Elements(len as u64));

        // Steady state: the same options re-register every render.
        group.bench_with_input(BenchmarkId::new("unchanged", len), &values, |b, values| {
            let mut listbox = Listbox::new(ListboxConfig::new());
            let mut options: Vec<ListboxOption> = (0..len).map(|_| ListboxOption::new()).collect();
            register_all(&mut listbox, &mut options, values);
            b.iter(|| {
                register_all(&mut listbox, &mut options, values);
                black_box(listbox.registry().revision());
            });
        });

        // Worst case: the first option unmounts, every later index shifts.
        group.bench_with_input(BenchmarkId::new("shift_all", len), &values, |b, values| {
            b.iter_batched(
                || {
                    let mut listbox = Listbox::new(ListboxConfig::new());
                    let mut options: Vec<ListboxOption> =
                        (0..len).map(|_| ListboxOption::new()).collect();
                    register_all(&mut listbox, &mut options, values);
                    listbox.focus();
                    listbox.key_down(ListboxKey::End, 0);
                    options.remove(0);
                    (listbox, options)
                },
                |(mut listbox, mut options)| {
                    register_all(&mut listbox, &mut options, &values[1..]);
                    black_box(listbox.focused_index());
                },
                BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}

fn bench_typeahead(c: &mut Criterion) {
    let mut group = c.benchmark_group("listbox/typeahead");

    for len in [16usize, 256, 4_096] {
        let values = values(len);
        let last = format!("option {:05}", len - 1);
        group.throughput(Throughput::Elements(len as u64));

        // The scan is linear from index 0, so the last option is the slow path.
        group.bench_with_input(BenchmarkId::new("find_last", len), &values, |b, values| {
            b.iter(|| {
                black_box(Typeahead::find(
                    values.iter().map(String::as_str),
                    black_box(&last),
                ))
            });
        });

        group.bench_with_input(BenchmarkId::new("type_word", len), &values, |b, values| {
            b.iter_batched(
                || {
                    let mut listbox = Listbox::new(ListboxConfig::new());
                    let mut options: Vec<ListboxOption> =
                        (0..len).map(|_| ListboxOption::new()).collect();
                    register_all(&mut listbox, &mut options, values);
                    listbox
                },
                |mut listbox| {
                    for (now, ch) in (0..).zip(last.chars()) {
                        listbox.key_down(ListboxKey::Character(ch), now);
                    }
                    black_box(listbox.selected_index());
                },
                BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}

criterion_group!(benches, bench_registration, bench_typeahead);
criterion_main!(benches);
