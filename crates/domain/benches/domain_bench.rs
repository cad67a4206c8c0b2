use chrono::{TimeZone, Utc};
use criterion::{Criterion, criterion_group, criterion_main};
use domain::{
    Cart, CartLine, CompleteSale, PlaceOrder, SaleLine, complete_sale, place_order,
    seed::demo_data,
};

fn bench_complete_sale(c: &mut Criterion) {
    let data = demo_data();
    let cmd = CompleteSale::cash("cust-1", vec![SaleLine::new("i1", 1)]);
    let now = Utc::now();

    c.bench_function("domain/complete_sale", |b| {
        b.iter(|| complete_sale(&data, &cmd, now).unwrap());
    });
}

fn bench_place_order_mixed_cart(c: &mut Criterion) {
    let data = demo_data();
    let mut cart = Cart::new();
    cart.add(CartLine::buy(data.items[0].clone(), 1));
    cart.add(CartLine::rent(
        data.items[1].clone(),
        1,
        Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap(),
        Utc.with_ymd_and_hms(2024, 6, 4, 0, 0, 0).unwrap(),
    ));
    let cmd = PlaceOrder::card("cust-2", cart);
    let now = Utc::now();

    c.bench_function("domain/place_order_mixed_cart", |b| {
        b.iter(|| place_order(&data, &cmd, now).unwrap());
    });
}

fn bench_snapshot_serialization(c: &mut Criterion) {
    let data = demo_data();

    c.bench_function("domain/snapshot_to_json", |b| {
        b.iter(|| serde_json::to_string(&data).unwrap());
    });
}

criterion_group!(
    benches,
    bench_complete_sale,
    bench_place_order_mixed_cart,
    bench_snapshot_serialization
);
criterion_main!(benches);
