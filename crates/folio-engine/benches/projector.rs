use criterion::{Criterion, black_box, criterion_group, criterion_main};
use folio_engine::model::{Block, BlockContent, BlockDocument, CodeData, TableData};
use folio_engine::render::{html, project};

fn generate_document(sections: usize) -> BlockDocument {
    let mut blocks = Vec::with_capacity(sections * 5);
    for i in 0..sections {
        blocks.push(Block::heading(format!("Section {i}"), 2));
        blocks.push(Block::paragraph(format!(
            "Paragraph {i} with <b>bold</b> and <a href=\"#s{i}\">a link</a>."
        )));
        blocks.push(Block::new(BlockContent::Code(CodeData {
            code: format!("fn section_{i}() -> usize {{ {i} }}"),
        })));
        blocks.push(Block::new(BlockContent::Table(TableData {
            rows: vec![
                vec!["Key".to_string(), "Value".to_string()],
                vec![format!("k{i}"), format!("v{i}")],
            ],
            first_row_is_header: true,
        })));
        blocks.push(Block::new(BlockContent::Delimiter));
    }
    BlockDocument::new(blocks)
}

fn bench_projection(c: &mut Criterion) {
    let mut group = c.benchmark_group("projection");
    group.sample_size(20);

    let doc = generate_document(100);
    group.bench_function("project", |b| {
        b.iter(|| {
            let nodes = project(black_box(&doc));
            black_box(nodes);
        });
    });

    let nodes = project(&doc);
    group.bench_function("to_html", |b| {
        b.iter(|| {
            let markup = html::to_html(black_box(&nodes));
            black_box(markup);
        });
    });

    group.finish();
}

fn bench_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("parsing");
    group.sample_size(20);

    let json = generate_document(100).to_json().unwrap();
    group.bench_function("from_json", |b| {
        b.iter(|| {
            let doc = BlockDocument::from_json(black_box(&json)).unwrap();
            black_box(doc);
        });
    });

    group.finish();
}

criterion_group!(benches, bench_projection, bench_parsing);
criterion_main!(benches);
