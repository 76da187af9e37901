//! Serial vs. rayon step throughput on square boards

use std::time::Instant;
use rand::{SeedableRng, rngs::StdRng};
use toroidal_life::{Config, Grid};

fn random_grid(size: usize) -> Grid {
    let mut grid = Grid::new(size, size);
    grid.randomize(&mut StdRng::seed_from_u64(size as u64), Config::RANDOM_DENSITY);
    grid
}

fn benchmark_serial(size: usize, iterations: u32) -> f64 {
    let mut grid = random_grid(size);
    
    let start = Instant::now();
    for _ in 0..iterations {
        grid = grid.step();
    }
    start.elapsed().as_secs_f64() * 1000.0 / iterations as f64
}

fn benchmark_parallel(size: usize, iterations: u32) -> f64 {
    let mut grid = random_grid(size);
    
    let start = Instant::now();
    for _ in 0..iterations {
        grid = grid.step_parallel();
    }
    start.elapsed().as_secs_f64() * 1000.0 / iterations as f64
}

fn main() {
    println!("=== Game of Life Step Benchmark ===\n");
    
    let sizes = [20, 30, 100, 500, 1000, 2000];
    let iterations = 20;
    
    println!("{:>10} {:>12} {:>12} {:>10}", "Size", "Serial", "Parallel", "Speedup");
    println!("{:-<48}", "");
    
    for size in sizes {
        let serial_ms = benchmark_serial(size, iterations);
        let parallel_ms = benchmark_parallel(size, iterations);
        
        println!(
            "{:>10} {:>12.3} {:>12.3} {:>9.1}x",
            format!("{}x{}", size, size),
            serial_ms,
            parallel_ms,
            serial_ms / parallel_ms
        );
    }
    
    println!(
        "\nBoards above {} cells step in parallel.",
        Config::PARALLEL_THRESHOLD
    );
}
