use criterion::{Criterion, black_box, criterion_group, criterion_main};

use ibancheck::core::*;

const GB: &str = "GB29NWBK60161331926819";
const FR: &str = "FR1420041010050500013M02606";

fn bench_parse(c: &mut Criterion) {
    c.bench_function("parse_gb", |b| {
        b.iter(|| black_box(parse(black_box(GB))));
    });
}

fn bench_validate(c: &mut Criterion) {
    let iban = parse(GB).unwrap();
    c.bench_function("validate_gb", |b| {
        b.iter(|| black_box(validate(black_box(&iban))));
    });
}

fn bench_check_alphanumeric(c: &mut Criterion) {
    c.bench_function("check_fr", |b| {
        b.iter(|| black_box(check(black_box(FR))));
    });
}

fn bench_mod97_long(c: &mut Criterion) {
    // far beyond u128, as produced by a long letter-heavy BBAN
    let digits = "3214282912345698765432161182".repeat(8);
    c.bench_function("mod97_224_digits", |b| {
        b.iter(|| black_box(mod97(black_box(&digits))));
    });
}

fn bench_check_batch(c: &mut Criterion) {
    let inputs = [
        "AL47212110090000000235698741",
        "AT611904300234573201",
        "BA391290079401028494",
        "BE68539007547034",
        "BR1800360305000010009795493C1",
        "CH9300762011623852957",
        "DE89370400440532013000",
        FR,
        GB,
        "NL91ABNA0417164300",
    ];
    c.bench_function("check_all_builtin_countries", |b| {
        b.iter(|| {
            for raw in &inputs {
                black_box(check(black_box(raw)).is_ok());
            }
        });
    });
}

criterion_group!(
    benches,
    bench_parse,
    bench_validate,
    bench_check_alphanumeric,
    bench_mod97_long,
    bench_check_batch,
);
criterion_main!(benches);
