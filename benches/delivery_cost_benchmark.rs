use criterion::{black_box, criterion_group, criterion_main, Criterion};
use delivery_quote::{Catalog, DeliveryCostSolver, Order, PairedRouteSolver};
use std::sync::Arc;

fn benchmark_delivery_cost(c: &mut Criterion) {
    let solver = PairedRouteSolver::new(Arc::new(Catalog::standard()));
    let orders = create_benchmark_orders();

    // Benchmark a three-warehouse order
    let order = &orders[0];
    c.bench_function("compute_delivery_cost", |b| {
        b.iter(|| solver.compute_delivery_cost(black_box(order)))
    });

    // Benchmark batch quoting across rayon workers
    c.bench_function("quote_batch_1000", |b| {
        b.iter(|| solver.quote_batch(black_box(&orders)))
    });
}

// Create orders touching every combination of warehouses
fn create_benchmark_orders() -> Vec<Order> {
    let codes = ["A", "B", "C", "D", "E", "F", "G", "H", "I"];

    (0..1000u32)
        .map(|i| {
            let mut order = Order::new();
            order.add_item("A", 1 + i % 3);
            order.add_item("D", i % 2);
            order.add_item("G", 1 + i % 5);
            order.add_item(codes[(i % 9) as usize], i % 4);
            order
        })
        .collect()
}

criterion_group!(benches, benchmark_delivery_cost);
criterion_main!(benches);
