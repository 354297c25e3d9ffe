//! Compares `ArrayList` against `Vec` and `SmallVec` for the list operations.

use arraylist::ArrayList;
use core::hint;
use criterion::{Bencher, Criterion, criterion_group, criterion_main};
use smallvec::SmallVec;
use std::sync::OnceLock;

use rand::Rng;

const SMALL_SIZE: usize = 10;

/// A function used to generate a random amount of data.
///
/// Random bounds keep the compiler from specializing the loops on a known length.
#[inline(never)]
fn gen_one(start: usize, end: usize) -> usize {
    let mut rng = rand::rng();
    rng.random_range(start..end)
}

/// Number of elements used by the small benchmarks, just past the initial capacity.
static SMALL_BOUND: OnceLock<usize> = OnceLock::new();

/// Number of elements used by the large benchmarks.
static LARGE_BOUND: OnceLock<usize> = OnceLock::new();

/// The list operations measured here, expressed for every container.
trait ListLike: Sized {
    fn new_empty() -> Self;
    fn push_back(&mut self, value: u64);
    fn push_front(&mut self, value: u64);
    fn insert_at(&mut self, index: usize, value: u64);
    fn pop_back(&mut self) -> Option<u64>;
    fn pop_front(&mut self) -> Option<u64>;
    fn remove_at(&mut self, index: usize) -> u64;
    fn value_at(&self, index: usize) -> u64;
    fn has(&self, value: u64) -> bool;

    fn filled(len: usize) -> Self {
        let mut list = Self::new_empty();
        for i in 0..len {
            list.push_back(i as u64);
        }
        list
    }
}

impl ListLike for ArrayList<u64> {
    #[inline(always)]
    fn new_empty() -> Self {
        ArrayList::new()
    }
    #[inline(always)]
    fn push_back(&mut self, value: u64) {
        self.add_back(value)
    }
    #[inline(always)]
    fn push_front(&mut self, value: u64) {
        self.add_front(value)
    }
    #[inline(always)]
    fn insert_at(&mut self, index: usize, value: u64) {
        self.add(index, value).unwrap()
    }
    #[inline(always)]
    fn pop_back(&mut self) -> Option<u64> {
        self.remove_back().ok()
    }
    #[inline(always)]
    fn pop_front(&mut self) -> Option<u64> {
        self.remove_front().ok()
    }
    #[inline(always)]
    fn remove_at(&mut self, index: usize) -> u64 {
        self.remove(index).unwrap()
    }
    #[inline(always)]
    fn value_at(&self, index: usize) -> u64 {
        *self.get(index).unwrap()
    }
    #[inline(always)]
    fn has(&self, value: u64) -> bool {
        self.contains(&value)
    }
}

macro_rules! impl_list_like {
    ($name:ty) => {
        impl ListLike for $name {
            #[inline(always)]
            fn new_empty() -> Self {
                <$name>::new()
            }
            #[inline(always)]
            fn push_back(&mut self, value: u64) {
                self.push(value)
            }
            #[inline(always)]
            fn push_front(&mut self, value: u64) {
                self.insert(0, value)
            }
            #[inline(always)]
            fn insert_at(&mut self, index: usize, value: u64) {
                self.insert(index, value)
            }
            #[inline(always)]
            fn pop_back(&mut self) -> Option<u64> {
                self.pop()
            }
            #[inline(always)]
            fn pop_front(&mut self) -> Option<u64> {
                if self.is_empty() { None } else { Some(self.remove(0)) }
            }
            #[inline(always)]
            fn remove_at(&mut self, index: usize) -> u64 {
                self.remove(index)
            }
            #[inline(always)]
            fn value_at(&self, index: usize) -> u64 {
                self[index]
            }
            #[inline(always)]
            fn has(&self, value: u64) -> bool {
                self.contains(&value)
            }
        }
    };
}

impl_list_like!(Vec<u64>);
impl_list_like!(SmallVec<[u64; SMALL_SIZE]>);

macro_rules! gen_bench_group {
    ($c:ident => $fn_name:ident) => {{
        let mut group = $c.benchmark_group(stringify!($fn_name));
        group.bench_function("ArrayList", |b| $fn_name::<ArrayList<u64>>(b));
        group.bench_function("Vec", |b| $fn_name::<Vec<u64>>(b));
        group.bench_function("SmallVec", |b| $fn_name::<SmallVec<[u64; SMALL_SIZE]>>(b));
    }};
}

fn bench_list(c: &mut Criterion) {
    SMALL_BOUND.get_or_init(|| gen_one(11, 13));
    LARGE_BOUND.get_or_init(|| gen_one(36000, 36003));
    gen_bench_group!(c => add_back_small);
    gen_bench_group!(c => add_back_large);
    gen_bench_group!(c => add_front_small);
    gen_bench_group!(c => add_middle_large);
    gen_bench_group!(c => remove_front_large);
    gen_bench_group!(c => remove_back_large);
    gen_bench_group!(c => remove_middle_large);
    gen_bench_group!(c => get_large);
    gen_bench_group!(c => contains_large);
}

/// Appends past the initial capacity, so one doubling is included.
#[inline(never)]
fn add_back_small<T: ListLike>(b: &mut Bencher) {
    let num = *SMALL_BOUND.get().unwrap();
    b.iter(|| {
        let mut list = T::new_empty();
        for i in 0..num {
            list.push_back(i as u64);
        }
        hint::black_box(list)
    });
}

/// Appends from empty to 36000+ elements, every doubling is included.
#[inline(never)]
fn add_back_large<T: ListLike>(b: &mut Bencher) {
    let num = *LARGE_BOUND.get().unwrap();
    b.iter(|| {
        let mut list = T::new_empty();
        for i in 0..num {
            list.push_back(i as u64);
        }
        hint::black_box(list)
    });
}

/// Prepends to a small list, each call shifts every element.
#[inline(never)]
fn add_front_small<T: ListLike>(b: &mut Bencher) {
    let num = *SMALL_BOUND.get().unwrap();
    b.iter(|| {
        let mut list = T::new_empty();
        for i in 0..num {
            list.push_front(i as u64);
        }
        hint::black_box(list)
    });
}

/// Inserts into the middle of a large list and removes the value again.
#[inline(never)]
fn add_middle_large<T: ListLike>(b: &mut Bencher) {
    let num = *LARGE_BOUND.get().unwrap();
    let mut list = T::filled(num);
    let index = gen_one(1, num);
    b.iter(|| {
        list.insert_at(index, 7);
        hint::black_box(list.remove_at(index))
    });
}

#[inline(never)]
fn remove_front_large<T: ListLike>(b: &mut Bencher) {
    let num = *LARGE_BOUND.get().unwrap();
    let mut list = T::filled(num);
    b.iter(|| {
        let value = list.pop_front().unwrap();
        list.push_back(value);
        hint::black_box(value)
    });
}

#[inline(never)]
fn remove_back_large<T: ListLike>(b: &mut Bencher) {
    let num = *LARGE_BOUND.get().unwrap();
    let mut list = T::filled(num);
    b.iter(|| {
        let value = list.pop_back().unwrap();
        list.push_back(value);
        hint::black_box(value)
    });
}

#[inline(never)]
fn remove_middle_large<T: ListLike>(b: &mut Bencher) {
    let num = *LARGE_BOUND.get().unwrap();
    let mut list = T::filled(num);
    let index = gen_one(1, num - 1);
    b.iter(|| {
        let value = list.remove_at(index);
        list.insert_at(index, value);
        hint::black_box(value)
    });
}

/// Random access over 2000 random positions.
#[inline(never)]
fn get_large<T: ListLike>(b: &mut Bencher) {
    let num = *LARGE_BOUND.get().unwrap();
    let list = T::filled(num);
    let positions: Vec<usize> = (0..2000).map(|_| gen_one(0, num)).collect();
    b.iter(|| {
        let mut counter = 0u64;
        for &index in &positions {
            counter = counter.wrapping_add(list.value_at(index));
        }
        hint::black_box(counter)
    });
}

/// Worst case membership test, the value is absent.
#[inline(never)]
fn contains_large<T: ListLike>(b: &mut Bencher) {
    let num = *LARGE_BOUND.get().unwrap();
    let list = T::filled(num);
    b.iter(|| hint::black_box(list.has(u64::MAX)));
}

criterion_group! {
    name = benches;
    config = Criterion::default()
        .sample_size(200)
        .warm_up_time(core::time::Duration::from_secs(3))
        .measurement_time(core::time::Duration::from_secs(8))
        .confidence_level(0.96)
        .noise_threshold(0.04);
    targets = bench_list,
}
criterion_main!(benches);
