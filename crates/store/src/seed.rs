//! Demo catalog of flower lamps.

use domain::{Category, Money};

use crate::{ProductLedger, Store};

struct SeedEntry {
    id: &'static str,
    name: &'static str,
    description: &'static str,
    price_cents: i64,
    stock: u32,
    category: Category,
    image_url: &'static str,
}

const CATALOG: &[SeedEntry] = &[
    SeedEntry {
        id: "lamp-001",
        name: "Lámpara Rosa Romántica",
        description: "Elegante lámpara de mesa con pétalos de rosa en porcelana fría, luz cálida LED.",
        price_cents: 4999,
        stock: 15,
        category: Category::Rose,
        image_url: "https://es.bestdealplus.com/product/2280182/Lamparas-de-Mesa-de-flores-rosas-romanticas-para-dormitorio-lampara-de-escritorio-de-vidrio-rosa-soporte-de-camas-Led-moderno-accesorios-de-iluminacion-decoracion-de-boda",
    },
    SeedEntry {
        id: "lamp-002",
        name: "Lámpara Girasol Primaveral",
        description: "Lámpara de pie inspirada en el girasol, con pétalos de resina dorada.",
        price_cents: 8999,
        stock: 8,
        category: Category::Sunflower,
        image_url: "https://m.media-amazon.com/images/I/71seWZWMIvL._AC_SL1500_.jpg",
    },
    SeedEntry {
        id: "lamp-003",
        name: "Lámpara Loto Zen",
        description: "Lámpara de ambiente inspirada en la flor de loto. Emite luz suave y relajante.",
        price_cents: 6500,
        stock: 12,
        category: Category::Lotus,
        image_url: "https://mx.pinterest.com/pin/lmpara-de-flor-de-loto--563020390936762429/",
    },
    SeedEntry {
        id: "lamp-004",
        name: "Lámpara Margarita Alegre",
        description: "Lámpara infantil con forma de margarita multicolor. Segura para niños.",
        price_cents: 3550,
        stock: 20,
        category: Category::Daisy,
        image_url: "https://www.ubuy.ec/es/product/4L3YESXLG-led-waterproof-floating-lotus-light-pond-light-battery-operated-lily-flower-white-light-flower-night-lamp-pack-of-5-2-lily-pad-8?srsltid=AfmBOoo04ldut2JrPMlh9li6tg1nV7bQ0ve5NVCBYLFhSbHvN-olFZNw",
    },
    SeedEntry {
        id: "lamp-005",
        name: "Lámpara Rosa Vintage",
        description: "Lámpara colgante estilo vintage con motivos de rosas antiguas.",
        price_cents: 7500,
        stock: 6,
        category: Category::Rose,
        image_url: "https://m.media-amazon.com/images/I/61AV5CcHo3L._AC_UF894,1000_QL80_.jpg",
    },
    SeedEntry {
        id: "lamp-006",
        name: "Lámpara Girasol Mini",
        description: "Mini lámpara de escritorio con diseño de girasol. Perfecta para tu espacio de trabajo.",
        price_cents: 2899,
        stock: 25,
        category: Category::Sunflower,
        image_url: "https://encrypted-tbn0.gstatic.com/images?q=tbn:ANd9GcTUYSsDLC4OWo4BxenE4-JotSri9Sn48EwcSw&s",
    },
];

/// Loads the demo catalog into `store`, returning how many products were added.
///
/// Existing products with the same ids are replaced.
pub fn seed_catalog(store: &Store) -> usize {
    let loaded = seed_ledger(&mut store.lock().ledger);
    tracing::info!(products = loaded, "catalog seeded");
    loaded
}

/// Registers every demo lamp in `ledger`. Entries that fail validation are skipped.
pub fn seed_ledger(ledger: &mut ProductLedger) -> usize {
    let mut loaded = 0;
    for entry in CATALOG {
        let created = ledger.create(
            entry.id,
            entry.name,
            entry.description,
            Money::from_cents(entry.price_cents),
            entry.stock,
            entry.category,
            entry.image_url,
        );
        match created {
            Ok(_) => loaded += 1,
            Err(err) => {
                tracing::warn!(product_id = entry.id, error = %err, "skipping invalid seed product");
            }
        }
    }
    loaded
}
