//! Performance benchmarks for gfxres
//!
//! Run with: cargo bench --package gfxres-core

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use gfxres_core::swizzle::{swizzle, YTileLayout};
use gfxres_core::{
    CreateParams, DeviceContext, Format, GraphicsResource, LockParams, PlatformConfig, ResourceKind, SoftContext,
    TileType,
};

fn bench_swizzle(c: &mut Criterion) {
    let mut group = c.benchmark_group("swizzle");

    for (width, height) in [(256usize, 64usize), (1024, 256), (4096, 1024)] {
        let linear: Vec<u8> = (0..width * height).map(|i| i as u8).collect();
        let mut tiled = vec![0u8; width * height];
        group.throughput(Throughput::Bytes((width * height) as u64));

        for layout in [YTileLayout::Legacy, YTileLayout::Tile4] {
            let id = BenchmarkId::new(format!("{:?}", layout), format!("{}x{}", width, height));
            group.bench_with_input(id, &layout, |b, &layout| {
                b.iter(|| {
                    swizzle(&linear, &mut tiled, TileType::Linear, TileType::Y, height, width, layout).unwrap();
                    black_box(&tiled);
                });
            });
        }
    }
    group.finish();
}

fn bench_allocate_free(c: &mut Criterion) {
    let ctx = SoftContext::default();
    let dev = Some(&ctx as &dyn DeviceContext);
    let mut group = c.benchmark_group("allocate_free");
    group.sample_size(50);

    for tile in [TileType::Linear, TileType::Y] {
        let params = CreateParams::new(ResourceKind::Surface2D, Format::Nv12, 1920, 1080)
            .with_tile_type(tile)
            .with_name("bench");
        group.bench_with_input(BenchmarkId::from_parameter(format!("{:?}", tile)), &params, |b, params| {
            b.iter(|| {
                let mut resource = GraphicsResource::new();
                resource.allocate(dev, params).unwrap();
                black_box(resource.size());
                resource.free(dev, 0);
            });
        });
    }
    group.finish();
}

fn bench_lock_unlock(c: &mut Criterion) {
    let mut group = c.benchmark_group("lock_unlock");

    for sw_swizzling in [false, true] {
        let ctx = SoftContext::new(PlatformConfig::default().with_sw_swizzling(sw_swizzling));
        let dev = Some(&ctx as &dyn DeviceContext);
        let mut resource = GraphicsResource::new();
        let params = CreateParams::new(ResourceKind::Surface2D, Format::L8, 1024, 256)
            .with_tile_type(TileType::Y)
            .with_name("lock");
        resource.allocate(dev, &params).unwrap();
        group.throughput(Throughput::Bytes(resource.size()));

        let name = if sw_swizzling { "sw_swizzle" } else { "gtt" };
        group.bench_function(name, |b| {
            b.iter(|| {
                let ptr = resource.lock(dev, &LockParams::default()).unwrap();
                black_box(ptr);
                resource.unlock(dev).unwrap();
            });
        });

        resource.free(dev, 0);
    }
    group.finish();
}

criterion_group!(benches, bench_swizzle, bench_allocate_free, bench_lock_unlock);
criterion_main!(benches);
