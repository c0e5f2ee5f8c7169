#[macro_use]
extern crate timeit;
extern crate env_logger;
extern crate reduce_blas;

use reduce_blas::{sum_all, BlasDot};

#[inline(never)]
fn bench_profile<F: FnMut() -> f32>(name: &str, len: usize, times: usize, mut bench_func: F) {
    let mut last = 0f32;
    let sec = timeit_loops!(times, {
        last = bench_func();
    });
    let gbps = (len * 4) as f64 / sec / 1e9;
    println!("{:<24} {:>10} elements  {:>12.3} us/iter  {:>8.2} GB/s  (sum = {})",
             name, len, sec * 1e6, gbps, last);
}

fn main() {
    let _ = env_logger::try_init();

    for &len in &[1usize << 10, 1 << 16, 1 << 20, 1 << 24] {
        let data: Vec<f32> = (0..len).map(|i| (i % 17) as f32 * 0.25).collect();
        let times = ((1 << 26) / len).max(4);

        let summer = BlasDot::new(&data).unwrap();
        bench_profile("blas_dot", len, times, || summer.sum());
        bench_profile("sum_all", len, times, || sum_all(&data));
        bench_profile("iter_sum", len, times, || data.iter().sum());
    }
}
