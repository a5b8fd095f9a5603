//! # Seed Data
//!
//! The mock catalog the storefront starts with.
//!
//! ## Contents
//! - 6 products across four category labels
//! - 6 categories (three roots, three children)
//! - 1 header menu with 4 items (one nested)
//! - 2 past orders
//! - Site settings with 3 shipping and 2 payment methods
//!
//! Every restart of the process starts from this data again.

use toolshop_core::{
    AppSettings, Category, FooterSettings, GeneralSettings, Menu, MenuItem, MenuItemKind,
    MenuLocation, Money, Order, OrderLine, OrderStatus, PageLink, PaymentMethod, PriceTiers,
    Product, ShippingMethod, User, View,
};

/// Everything a [`crate::Store`] is initialised from.
#[derive(Debug, Clone, Default)]
pub struct SeedData {
    pub products: Vec<Product>,
    pub categories: Vec<Category>,
    pub menus: Vec<Menu>,
    pub menu_items: Vec<MenuItem>,
    pub orders: Vec<Order>,
    pub settings: AppSettings,
}

impl SeedData {
    /// Largest numeric id in use, so new ids never collide with seeded ones.
    pub fn max_id(&self) -> i64 {
        let product_ids = self.products.iter().map(|p| p.id);
        let category_ids = self.categories.iter().map(|c| c.id);
        let menu_ids = self.menus.iter().map(|m| m.id);
        let item_ids = self.menu_items.iter().map(|i| i.id);
        let shipping_ids = self.settings.shipping_methods.iter().map(|m| m.id);
        let payment_ids = self.settings.payment_methods.iter().map(|m| m.id);

        product_ids
            .chain(category_ids)
            .chain(menu_ids)
            .chain(item_ids)
            .chain(shipping_ids)
            .chain(payment_ids)
            .max()
            .unwrap_or(0)
    }
}

/// The customer every successful login signs in as.
pub fn demo_user() -> User {
    User {
        id: 1,
        mobile: "09123456789".to_string(),
        name: "Ali Mohammadi".to_string(),
    }
}

/// Pages that menu items of kind `page` may link to.
pub fn available_pages() -> Vec<PageLink> {
    [
        (View::Home, "Home"),
        (View::Products, "Shop"),
        (View::ProductList, "Quick Price List"),
        (View::Cart, "Cart"),
        (View::Dashboard, "Dashboard"),
    ]
    .into_iter()
    .map(|(view, title)| PageLink {
        view,
        title: title.to_string(),
    })
    .collect()
}

#[allow(clippy::too_many_arguments)]
fn product(
    id: i64,
    name: &str,
    sku: &str,
    slug: &str,
    stock: u32,
    retail: i64,
    wholesale: i64,
    category: &str,
    description: &str,
) -> Product {
    let image = format!("https://placehold.co/400x400/f59e0b/white?text={slug}");
    Product {
        id,
        sku: sku.to_string(),
        name: name.to_string(),
        gallery: vec![image.clone()],
        image,
        stock,
        prices: PriceTiers {
            retail: Money::from_toman(retail),
            wholesale: Money::from_toman(wholesale),
        },
        category: category.to_string(),
        description: description.to_string(),
    }
}

pub fn products() -> Vec<Product> {
    let mut drill = product(
        1,
        "Ronix Cordless Hammer Drill",
        "RNX-8612",
        "Drill",
        50,
        2_500_000,
        2_200_000,
        "Cordless Tools",
        "12V cordless drill with hammer mode for home and light trade work.",
    );
    drill
        .gallery
        .push("https://placehold.co/400x400/f59e0b/white?text=Drill+View+2".to_string());

    vec![
        drill,
        product(
            2,
            "Tosan Mini Angle Grinder",
            "TSN-3382A",
            "Grinder",
            35,
            1_800_000,
            1_650_000,
            "Electric Tools",
            "850W mini grinder running at 11,000 rpm.",
        ),
        product(
            3,
            "Nova 24-Piece Socket Set",
            "NVA-1234",
            "Socket+Set",
            80,
            1_200_000,
            1_050_000,
            "Hand Tools",
            "Complete 1/2 inch drive socket set in chrome vanadium steel.",
        ),
        product(
            4,
            "50m Laser Distance Meter",
            "LSR-50M",
            "Laser+Meter",
            15,
            950_000,
            880_000,
            "Measuring Tools",
            "Accurate laser meter with 50m range and area/volume modes.",
        ),
        product(
            5,
            "Iran Potk Locking Pliers",
            "IP-10",
            "Pliers",
            120,
            350_000,
            310_000,
            "Hand Tools",
            "10 inch locking pliers with hardened jaws.",
        ),
        product(
            6,
            "Xiaomi Cordless Screwdriver",
            "XI-SCD-24",
            "Screwdriver",
            60,
            1_500_000,
            1_350_000,
            "Cordless Tools",
            "Cordless screwdriver kit with 24 bits and an ergonomic grip.",
        ),
    ]
}

pub fn categories() -> Vec<Category> {
    [
        (1, "Electric Tools", "electric-tools", None),
        (2, "Cordless Tools", "cordless-tools", None),
        (3, "Hand Tools", "hand-tools", None),
        (4, "Drills", "drills", Some(1)),
        (5, "Grinders", "grinders", Some(1)),
        (6, "Pliers", "pliers", Some(3)),
    ]
    .into_iter()
    .map(|(id, name, slug, parent_id)| Category {
        id,
        name: name.to_string(),
        slug: slug.to_string(),
        parent_id,
    })
    .collect()
}

pub fn menus() -> Vec<Menu> {
    vec![Menu {
        id: 1,
        name: "Main Menu".to_string(),
        location: MenuLocation::Header,
    }]
}

pub fn menu_items() -> Vec<MenuItem> {
    [
        (1, "Home", MenuItemKind::Page, "home", None, 1),
        (2, "Products", MenuItemKind::Page, "products", None, 2),
        (3, "Electric Tools", MenuItemKind::Category, "electric-tools", Some(2), 1),
        (4, "Price List", MenuItemKind::Page, "productList", None, 3),
    ]
    .into_iter()
    .map(|(id, title, kind, value, parent_id, order)| MenuItem {
        id,
        menu_id: 1,
        title: title.to_string(),
        kind,
        value: value.to_string(),
        parent_id,
        order,
    })
    .collect()
}

/// Past orders, newest first.
pub fn orders() -> Vec<Order> {
    let line = |name: &str, quantity, price| OrderLine {
        product_name: name.to_string(),
        quantity,
        price: Money::from_toman(price),
    };

    vec![
        Order {
            id: "DEF-456".to_string(),
            date: "2024-07-23".to_string(),
            items: vec![line("Tosan Mini Angle Grinder", 1, 1_650_000)],
            total: Money::from_toman(1_650_000),
            status: OrderStatus::Shipped,
        },
        Order {
            id: "ABC-123".to_string(),
            date: "2024-06-30".to_string(),
            items: vec![
                line("Ronix Cordless Hammer Drill", 1, 2_200_000),
                line("Iran Potk Locking Pliers", 2, 310_000),
            ],
            total: Money::from_toman(2_820_000),
            status: OrderStatus::Delivered,
        },
    ]
}

pub fn settings() -> AppSettings {
    AppSettings {
        general: GeneralSettings {
            title: "Online Tool Shop".to_string(),
            description: "A modern, fast online shop for power and hand tools.".to_string(),
            icon: String::new(),
            favicon: String::new(),
        },
        footer: FooterSettings {
            about_us: "Genuine industrial and household tools at fair prices, shipped nationwide."
                .to_string(),
            enamad_link: "#".to_string(),
            samandehi_link: "#".to_string(),
            copyright_text: "© 2024 Online Tool Shop. All rights reserved.".to_string(),
        },
        shipping_methods: vec![
            ShippingMethod {
                id: 1,
                name: "Express Post".to_string(),
                cost: Money::from_toman(35_000),
            },
            ShippingMethod {
                id: 2,
                name: "Tipax".to_string(),
                cost: Money::from_toman(55_000),
            },
            ShippingMethod {
                id: 3,
                name: "Motor Courier (Tehran)".to_string(),
                cost: Money::from_toman(40_000),
            },
        ],
        payment_methods: vec![
            PaymentMethod {
                id: 1,
                name: "Online Payment".to_string(),
                description: "Secure payment through the bank gateway".to_string(),
            },
            PaymentMethod {
                id: 2,
                name: "Card Transfer".to_string(),
                description: "Transfer to the card number shown at checkout".to_string(),
            },
        ],
    }
}

/// The full mock data set.
pub fn mock_data() -> SeedData {
    SeedData {
        products: products(),
        categories: categories(),
        menus: menus(),
        menu_items: menu_items(),
        orders: orders(),
        settings: settings(),
    }
}
