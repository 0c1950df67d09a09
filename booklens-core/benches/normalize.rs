//! Normalization benchmarks

use booklens_core::types::{ImageLinks, IndustryIdentifier, RawCatalogRecord, VolumeInfo};
use booklens_core::{normalize, normalize_page, PageWindow, SearchPage};
use criterion::{criterion_group, criterion_main, Criterion};

fn sample_record(n: usize) -> RawCatalogRecord {
    RawCatalogRecord::with_id(format!("vol-{}", n)).with_volume_info(VolumeInfo {
        title: Some(format!("Volume {}", n)),
        authors: Some(vec!["First Author".to_string(), "Second Author".to_string()]),
        description: Some("<p>A long description with <b>markup</b>.</p>".repeat(8)),
        image_links: Some(ImageLinks {
            thumbnail: None,
            small_thumbnail: Some("http://books.test/small".to_string()),
        }),
        industry_identifiers: Some(vec![
            IndustryIdentifier::new("ISBN_10", "0000000000"),
            IndustryIdentifier::new("ISBN_13", "9780000000000"),
        ]),
        ..Default::default()
    })
}

fn normalize_benchmark(c: &mut Criterion) {
    let record = sample_record(0);
    c.bench_function("normalize_record", |b| {
        b.iter(|| normalize(std::hint::black_box(&record)))
    });

    let page = SearchPage {
        total_items: 1000,
        items: (0..40).map(sample_record).collect(),
    };
    let window = PageWindow::new(0, 40).unwrap();
    c.bench_function("normalize_page_40", |b| {
        b.iter(|| normalize_page(std::hint::black_box(&page), window))
    });
}

criterion_group!(benches, normalize_benchmark);
criterion_main!(benches);
