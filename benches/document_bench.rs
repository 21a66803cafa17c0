use criterion::{Criterion, black_box, criterion_group, criterion_main};

use cpfcnpj::*;

fn bench_validation(c: &mut Criterion) {
    let mut group = c.benchmark_group("validation");

    group.bench_function("cpf_plain", |b| {
        b.iter(|| Cpf::new_valid(black_box("11144477735")).unwrap())
    });

    group.bench_function("cpf_punctuated", |b| {
        b.iter(|| Cpf::new_valid(black_box("111.444.777-35")).unwrap())
    });

    group.bench_function("cnpj_plain", |b| {
        b.iter(|| Cnpj::new_valid(black_box("00000000000191")).unwrap())
    });

    group.bench_function("cnpj_punctuated", |b| {
        b.iter(|| Cnpj::new_valid(black_box("00.000.000/0001-91")).unwrap())
    });

    group.bench_function("document_detect", |b| {
        b.iter(|| Document::parse(black_box("11.444.777/0001-61")).unwrap())
    });

    group.finish();
}

fn bench_formatting(c: &mut Criterion) {
    let mut group = c.benchmark_group("formatting");

    let cpf = Cpf::new("11144477735");
    group.bench_function("cpf_format", |b| {
        b.iter(|| black_box(&cpf).formatted().unwrap())
    });

    let cnpj = Cnpj::new("00.000.000/0001-91");
    group.bench_function("cnpj_unformat", |b| {
        b.iter(|| black_box(&cnpj).unformatted().unwrap())
    });

    group.bench_function("cnpj_complete", |b| {
        b.iter(|| DocumentKind::Cnpj.complete(black_box("114447770001")).unwrap())
    });

    group.finish();
}

criterion_group!(benches, bench_validation, bench_formatting);
criterion_main!(benches);
