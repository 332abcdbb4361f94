//! Randomized operation sequences checked against the list and filter
//! invariants. Seeds are fixed so failures reproduce.

use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use sepet_common::catalog::{CategoryId, ShopId};
use sepet_common::filter::{FilterCriteria, StatusFilter};
use sepet_common::product::{Product, ProductId};
use sepet_common::search::{FuzzyNameSearch, NameSearch};

use sepet_list_integration::harness::ListHarness;

const SEEDS: u64 = 20;
const STEPS: usize = 200;
const NAMES: [&str; 8] = [
    "Ekmek", "Simit", "Sucuk", "Kulaklık", "Oyuncak Araba", "Peynir", "Şarj Aleti", "Poğaça",
];

fn random_id(rng: &mut StdRng, h: &ListHarness) -> ProductId {
    match h.list.products().choose(rng) {
        Some(p) if rng.gen_bool(0.9) => p.id.clone(),
        _ => ProductId("unknown".into()),
    }
}

fn random_shop(rng: &mut StdRng) -> Option<ShopId> {
    // 0 = unset, 5 = not in the catalog
    match rng.gen_range(0..=5) {
        0 => None,
        n => Some(ShopId(n)),
    }
}

fn random_category(rng: &mut StdRng) -> Option<CategoryId> {
    match rng.gen_range(0..=5) {
        0 => None,
        n => Some(CategoryId(n)),
    }
}

fn random_steps(seed: u64, mut check: impl FnMut(&ListHarness)) {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut h = ListHarness::with_seed(seed);

    for _ in 0..STEPS {
        match rng.gen_range(0..10) {
            0..=3 => {
                let name = NAMES.choose(&mut rng).copied().unwrap_or("Ekmek");
                let name = if rng.gen_bool(0.1) { "  " } else { name };
                let shop = random_shop(&mut rng);
                let category = random_category(&mut rng);
                h.add(name, shop, category);
            }
            4..=6 => {
                let id = random_id(&mut rng, &h);
                h.toggle(&id);
            }
            7 => {
                let id = random_id(&mut rng, &h);
                h.delete(&id);
            }
            _ => {
                h.set_shop_filter(random_shop(&mut rng));
                h.set_category_filter(random_category(&mut rng));
                let status = *StatusFilter::all().choose(&mut rng).unwrap();
                h.set_status_filter(status);
            }
        }
        check(&h);
    }
}

/// Recompute visibility one product at a time from the four predicates.
fn expected_visible(h: &ListHarness, criteria: &FilterCriteria) -> Vec<ProductId> {
    let products = h.list.products();
    let named = FuzzyNameSearch::new().search_by_name(products, &criteria.name_query);
    let shop_name = criteria.shop.map(|id| h.catalog.shop_name(id));
    let category_name = criteria.category.map(|id| h.catalog.category_name(id));

    products
        .iter()
        .filter(|p: &&Product| {
            let shop_ok = match shop_name {
                None => true,
                Some(name) => name == Some(p.shop.as_str()),
            };
            let category_ok = match category_name {
                None => true,
                Some(name) => name == Some(p.category.as_str()),
            };
            let status_ok = match criteria.status {
                StatusFilter::All => true,
                StatusFilter::Bought => p.is_bought,
                StatusFilter::NotBought => !p.is_bought,
            };
            let name_ok = criteria.name_query.is_empty() || named.contains(&p.id);
            shop_ok && category_ok && status_ok && name_ok
        })
        .map(|p| p.id.clone())
        .collect()
}

#[test]
fn ids_stay_unique() {
    for seed in 0..SEEDS {
        random_steps(seed, |h| {
            let ids: HashSet<_> = h.list.products().iter().map(|p| &p.id).collect();
            assert_eq!(ids.len(), h.list.len(), "seed {seed}: duplicate id");
        });
    }
}

#[test]
fn surviving_products_keep_insertion_order() {
    for seed in 0..SEEDS {
        let mut seen: Vec<ProductId> = Vec::new();
        random_steps(seed, |h| {
            for p in h.list.products() {
                if !seen.contains(&p.id) {
                    seen.push(p.id.clone());
                }
            }
            let positions: Vec<usize> = h
                .list
                .products()
                .iter()
                .map(|p| seen.iter().position(|id| *id == p.id).unwrap())
                .collect();
            assert!(
                positions.windows(2).all(|w| w[0] < w[1]),
                "seed {seed}: list reordered"
            );
        });
    }
}

#[test]
fn visible_list_is_the_conjunction_of_predicates() {
    for seed in 0..SEEDS {
        random_steps(seed, |h| {
            let criteria = h.view.criteria();
            let visible: Vec<ProductId> = h.visible().into_iter().map(|p| p.id.clone()).collect();
            assert_eq!(visible, expected_visible(h, &criteria), "seed {seed}");
        });
    }
}

#[test]
fn visible_list_with_name_query_is_the_conjunction_of_predicates() {
    for seed in 0..SEEDS {
        let mut rng = StdRng::seed_from_u64(seed + 1_000);
        let mut h = ListHarness::with_seed(seed);
        for name in NAMES {
            h.add(name, Some(ShopId(rng.gen_range(1..=4))), Some(CategoryId(rng.gen_range(1..=4))));
        }
        for query in ["ekm", "simt", "araba", "şarj", "xyz"] {
            h.type_query(query);
            h.advance(500);
            h.set_shop_filter(random_shop(&mut rng));
            h.set_status_filter(StatusFilter::All);
            let criteria = h.view.criteria();
            assert_eq!(criteria.name_query, query);
            let visible: Vec<ProductId> = h.visible().into_iter().map(|p| p.id.clone()).collect();
            assert_eq!(visible, expected_visible(&h, &criteria), "seed {seed} query {query}");
        }
    }
}

#[test]
fn delete_twice_equals_delete_once() {
    for seed in 0..SEEDS {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut h = ListHarness::with_seed(seed);
        for name in NAMES {
            h.add(name, Some(ShopId(1)), Some(CategoryId(1)));
        }
        let victim = h.list.products().choose(&mut rng).unwrap().id.clone();
        let once = h.list.delete(&victim);
        assert_eq!(once.delete(&victim), once);
        assert_eq!(once.len(), NAMES.len() - 1);
    }
}

#[test]
fn toggle_is_an_involution() {
    for seed in 0..SEEDS {
        random_steps(seed, |h| {
            for p in h.list.products() {
                let back = h.list.toggle_bought(&p.id).list.toggle_bought(&p.id).list;
                assert_eq!(back, h.list, "seed {seed}");
            }
        });
    }
}
