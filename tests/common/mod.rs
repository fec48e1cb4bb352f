#![allow(dead_code)]

use hellowshop::catalog::{CatalogData, CategoryRecord, ProductRecord};
use hellowshop::domain::Product;
use hellowshop::{AppState, Catalog, Config, Theme};
use std::io::Write;
use std::path::PathBuf;

pub fn builtin() -> Catalog {
    Catalog::builtin().expect("embedded catalog is valid")
}

pub fn state() -> AppState {
    AppState::new(builtin(), Theme::default(), &Config::default())
}

pub fn ids<'a>(products: &[&'a Product]) -> Vec<&'a str> {
    products.iter().map(|p| p.id.as_str()).collect()
}

/// A two-category catalog where every product ties on price.
pub fn tied_catalog() -> Catalog {
    let mut data = CatalogData {
        categories: vec![
            CategoryRecord {
                id: "costume".into(),
                name: "코스튬".into(),
                icon: String::new(),
            },
            CategoryRecord {
                id: "wig".into(),
                name: "위그".into(),
                icon: String::new(),
            },
        ],
        ..CatalogData::default()
    };
    for (id, category) in [("a", "costume"), ("b", "wig"), ("c", "costume"), ("d", "wig")] {
        data.products.push(ProductRecord::new(id, format!("item {id}"), category, 10_000));
    }
    Catalog::from_data(data).expect("valid catalog")
}

pub fn write_file(dir: &tempfile::TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    let mut file = std::fs::File::create(&path).expect("create file");
    file.write_all(contents.as_bytes()).expect("write file");
    path
}
