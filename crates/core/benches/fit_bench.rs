use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};

use boxfit_core::api::{FitOptions, fit_document};
use boxfit_core::model::{DocumentInput, Page, Region, SemanticType};

/// Deterministic PRNG so every run benches identical documents.
struct XorShift64 {
    state: u64,
}

impl XorShift64 {
    fn new(seed: u64) -> Self {
        Self {
            state: seed.max(1),
        }
    }

    fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        x
    }

    fn gen_f64(&mut self, lo: f64, hi: f64) -> f64 {
        let unit = (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64;
        lo + unit * (hi - lo)
    }
}

const WORDS: &[&str] = &[
    "receptor", "cortex", "stimulus", "pathway", "neuron", "skin", "pressure",
    "temperature", "體感", "系統", "觸覺", "訊號",
];

fn synthetic_document(pages: usize, regions_per_page: usize) -> DocumentInput {
    let mut rng = XorShift64::new(0x5EED);
    let mut doc = DocumentInput {
        filename: "bench.pdf".into(),
        total_pages: pages,
        pages: Vec::with_capacity(pages),
    };
    for page_index in 0..pages {
        let mut page = Page {
            page_index,
            width: 612.0,
            height: 792.0,
            regions: Vec::with_capacity(regions_per_page),
        };
        for i in 0..regions_per_page {
            let x0 = rng.gen_f64(40.0, 300.0);
            let y0 = rng.gen_f64(40.0, 600.0);
            let width = rng.gen_f64(30.0, 260.0);
            let height = rng.gen_f64(10.0, 120.0);
            let word_count = 4 + (rng.next_u64() % 40) as usize;
            let mut text = String::new();
            for w in 0..word_count {
                if w > 0 {
                    text.push(' ');
                }
                text.push_str(WORDS[(rng.next_u64() % WORDS.len() as u64) as usize]);
            }
            page.regions.push(Region {
                id: format!("p{page_index}_r{i:03}"),
                semantic_type: if i % 11 == 0 {
                    SemanticType::Heading
                } else {
                    SemanticType::Body
                },
                bbox: (x0, y0, x0 + width, y0 + height),
                original_lines: vec![],
                translated_text: text,
                style_hint: None,
            });
        }
        doc.pages.push(page);
    }
    doc
}

fn bench_fit_document(c: &mut Criterion) {
    let doc = synthetic_document(8, 40);

    let mut group = c.benchmark_group("fit_document");
    group.bench_function("parallel_320_regions", |b| {
        let options = FitOptions::default();
        b.iter(|| black_box(fit_document(black_box(&doc), &options).unwrap()));
    });
    group.bench_function("sequential_320_regions", |b| {
        let options = FitOptions {
            parallel: false,
            ..Default::default()
        };
        b.iter(|| black_box(fit_document(black_box(&doc), &options).unwrap()));
    });
    group.finish();
}

criterion_group!(benches, bench_fit_document);
criterion_main!(benches);
