//! Benchmarks for the trim and removal operations.
//!
//! Run with: `cargo bench -p strbuf --bench trim`

use divan::{
  Bencher,
  black_box,
};
use strbuf::StrBufExt;

fn main() {
  divan::main();
}

fn padded() -> Vec<char> {
  format!("{0}middle text{0}", " \t ".repeat(32))
    .chars()
    .collect()
}

#[divan::bench]
fn trim_both(bencher: Bencher) {
  bencher
    .with_inputs(padded)
    .bench_values(|mut buf: Vec<char>| {
      buf.trim();
      buf
    });
}

#[divan::bench]
fn trim_untouched(bencher: Bencher) {
  let buf: Vec<char> = "no padding here".chars().collect();
  bencher.bench(|| {
    let mut b = black_box(&buf).clone();
    b.trim();
    b
  });
}

#[divan::bench]
fn remove_white_space(bencher: Bencher) {
  bencher
    .with_inputs(padded)
    .bench_values(|mut buf: Vec<char>| {
      buf.remove_white_space();
      buf
    });
}
