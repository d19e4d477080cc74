#![allow(clippy::unwrap_used, clippy::expect_used)]

/// Transform benchmarks: query_links vs a url crate rebuild
use criterion::{Criterion, criterion_group, criterion_main};
use query_links::{Overrides, QueryParams, query_transform};
use std::hint::black_box;

const SIMPLE: &str = "title=test1&page=1";
const FILTERED: &str =
    "title=Model+S&manufacturer=%C5%A0koda&driver=1&driver=2&driver=3&country=Czech+Republic&page=4";

/// Same transform (set `page`, drop `title`) done with `url::form_urlencoded`
fn url_crate_transform(query: &str, page: &str) -> String {
    let mut found = false;
    let pairs: Vec<(String, String)> = url::form_urlencoded::parse(query.as_bytes())
        .filter_map(|(k, v)| {
            if k == "title" {
                return None;
            }
            if k == "page" {
                if found {
                    return None;
                }
                found = true;
                return Some((k.into_owned(), page.to_string()));
            }
            Some((k.into_owned(), v.into_owned()))
        })
        .collect();

    let mut serializer = url::form_urlencoded::Serializer::new(String::new());
    serializer.extend_pairs(pairs);
    if !found {
        serializer.append_pair("page", page);
    }
    serializer.finish()
}

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");

    group.bench_function("simple", |b| {
        b.iter(|| QueryParams::parse(black_box(SIMPLE)));
    });

    group.bench_function("filtered", |b| {
        b.iter(|| QueryParams::parse(black_box(FILTERED)));
    });

    group.finish();
}

fn bench_transform(c: &mut Criterion) {
    let mut group = c.benchmark_group("transform");
    let simple = QueryParams::parse(SIMPLE);
    let filtered = QueryParams::parse(FILTERED);
    let overrides = Overrides::new().set("page", 5).remove("title");

    group.bench_function("query_links_simple", |b| {
        b.iter(|| query_transform(black_box(&simple), [("page", 2)]));
    });

    group.bench_function("query_links_filtered", |b| {
        b.iter(|| query_transform(black_box(&filtered), &overrides));
    });

    group.bench_function("url_crate_filtered", |b| {
        b.iter(|| url_crate_transform(black_box(FILTERED), "5"));
    });

    group.finish();
}

criterion_group!(benches, bench_parse, bench_transform);
criterion_main!(benches);
