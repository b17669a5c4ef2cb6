//! Built-in seed catalog
//!
//! Used when the `catalog` key has never been written. Seed products keep
//! short numeric ids; admin-created products get uuid ids.

use shared::Product;

struct SeedProduct {
    id: &'static str,
    name: &'static str,
    code: &'static str,
    price: f64,
    category: &'static str,
    image: &'static str,
    combo_items: &'static [&'static str],
}

const SEED: &[SeedProduct] = &[
    SeedProduct {
        id: "1",
        name: "Zinger Burger",
        code: "1066708",
        price: 149.0,
        category: "Burgers",
        image: "https://images.unsplash.com/photo-1568901346375-23c9450c58cd?auto=format&fit=crop&w=300&q=80",
        combo_items: &[],
    },
    SeedProduct {
        id: "2",
        name: "Hot & Crispy Chicken (2pc)",
        code: "2044511",
        price: 219.0,
        category: "Chicken",
        image: "https://images.unsplash.com/photo-1626082927389-6cd097cdc6ec?auto=format&fit=crop&w=300&q=80",
        combo_items: &[],
    },
    SeedProduct {
        id: "3",
        name: "French Fries (Large)",
        code: "3399002",
        price: 99.0,
        category: "Sides",
        image: "https://images.unsplash.com/photo-1573080496219-bb080dd4f877?auto=format&fit=crop&w=300&q=80",
        combo_items: &[],
    },
    SeedProduct {
        id: "4",
        name: "Pepsi (Medium)",
        code: "4455009",
        price: 60.0,
        category: "Drinks",
        image: "https://images.unsplash.com/photo-1629203851022-39c642378c42?auto=format&fit=crop&w=300&q=80",
        combo_items: &[],
    },
    SeedProduct {
        id: "5",
        name: "Veggie Delite Burger",
        code: "1066709",
        price: 129.0,
        category: "Burgers",
        image: "https://images.unsplash.com/photo-1512152272829-e3139592d56f?auto=format&fit=crop&w=300&q=80",
        combo_items: &[],
    },
    SeedProduct {
        id: "6",
        name: "Super Saver Combo",
        code: "CB-5001",
        price: 249.0,
        category: "Combos",
        image: "https://images.unsplash.com/photo-1594212699903-ec8a3eca50f5?auto=format&fit=crop&w=300&q=80",
        combo_items: &["1", "3", "4"],
    },
    SeedProduct {
        id: "7",
        name: "Popcorn Chicken (L)",
        code: "2044512",
        price: 189.0,
        category: "Chicken",
        image: "https://images.unsplash.com/photo-1626645738196-c2a7c87a8f58?auto=format&fit=crop&w=300&q=80",
        combo_items: &[],
    },
    SeedProduct {
        id: "8",
        name: "Cheese Garlic Bread",
        code: "3399003",
        price: 119.0,
        category: "Sides",
        image: "https://images.unsplash.com/photo-1573140401552-39d7448f71bb?auto=format&fit=crop&w=300&q=80",
        combo_items: &[],
    },
    SeedProduct {
        id: "9",
        name: "Lemon Ice Tea",
        code: "4455010",
        price: 75.0,
        category: "Drinks",
        image: "https://images.unsplash.com/photo-1556679343-c7306c1976bc?auto=format&fit=crop&w=300&q=80",
        combo_items: &[],
    },
    SeedProduct {
        id: "10",
        name: "BBQ Wings (6pc)",
        code: "2044513",
        price: 249.0,
        category: "Chicken",
        image: "https://images.unsplash.com/photo-1527477396000-e27163b481c2?auto=format&fit=crop&w=300&q=80",
        combo_items: &[],
    },
    SeedProduct {
        id: "11",
        name: "Double Cheese Burger",
        code: "1066710",
        price: 179.0,
        category: "Burgers",
        image: "https://images.unsplash.com/photo-1550547660-d9450f859349?auto=format&fit=crop&w=300&q=80",
        combo_items: &[],
    },
    SeedProduct {
        id: "12",
        name: "Onion Rings",
        code: "3399004",
        price: 89.0,
        category: "Sides",
        image: "https://images.unsplash.com/photo-1639024471283-03518883512d?auto=format&fit=crop&w=300&q=80",
        combo_items: &[],
    },
    SeedProduct {
        id: "13",
        name: "Cold Coffee",
        code: "4455011",
        price: 95.0,
        category: "Drinks",
        image: "https://images.unsplash.com/photo-1517701604599-bb29b565090c?auto=format&fit=crop&w=300&q=80",
        combo_items: &[],
    },
    SeedProduct {
        id: "14",
        name: "Chicken Strips (4pc)",
        code: "2044514",
        price: 159.0,
        category: "Chicken",
        image: "https://images.unsplash.com/photo-1562967914-6c82cbad3c11?auto=format&fit=crop&w=300&q=80",
        combo_items: &[],
    },
    SeedProduct {
        id: "15",
        name: "Spicy Paneer Burger",
        code: "1066711",
        price: 159.0,
        category: "Burgers",
        image: "https://images.unsplash.com/photo-1619096279114-426004bb8464?auto=format&fit=crop&w=300&q=80",
        combo_items: &[],
    },
    SeedProduct {
        id: "16",
        name: "Family Bucket Combo",
        code: "CB-5002",
        price: 599.0,
        category: "Combos",
        image: "https://images.unsplash.com/photo-1513639776629-7b61b0ac49cb?auto=format&fit=crop&w=300&q=80",
        combo_items: &["2", "7", "14", "4", "4"],
    },
    SeedProduct {
        id: "17",
        name: "Potato Wedges",
        code: "3399005",
        price: 109.0,
        category: "Sides",
        image: "https://images.unsplash.com/photo-1592119747782-d8c12c2ea267?auto=format&fit=crop&w=300&q=80",
        combo_items: &[],
    },
    SeedProduct {
        id: "18",
        name: "Orange Juice",
        code: "4455012",
        price: 80.0,
        category: "Drinks",
        image: "https://images.unsplash.com/photo-1613478223719-2ab802602423?auto=format&fit=crop&w=300&q=80",
        combo_items: &[],
    },
    SeedProduct {
        id: "19",
        name: "Fish Fillet Burger",
        code: "1066712",
        price: 189.0,
        category: "Burgers",
        image: "https://images.unsplash.com/photo-1521305916504-4a1121188589?auto=format&fit=crop&w=300&q=80",
        combo_items: &[],
    },
    SeedProduct {
        id: "20",
        name: "Nuggets (9pc)",
        code: "3399006",
        price: 169.0,
        category: "Sides",
        image: "https://images.unsplash.com/photo-1567620832903-9fc6debc209f?auto=format&fit=crop&w=300&q=80",
        combo_items: &[],
    },
    SeedProduct {
        id: "21",
        name: "Chocolate Shake",
        code: "4455013",
        price: 120.0,
        category: "Drinks",
        image: "https://images.unsplash.com/photo-1572490122747-3968b75cc699?auto=format&fit=crop&w=300&q=80",
        combo_items: &[],
    },
    SeedProduct {
        id: "22",
        name: "Grilled Chicken Burger",
        code: "1066713",
        price: 169.0,
        category: "Burgers",
        image: "https://images.unsplash.com/photo-1513185158878-8d8c2a2a3da3?auto=format&fit=crop&w=300&q=80",
        combo_items: &[],
    },
    SeedProduct {
        id: "23",
        name: "Coleslaw",
        code: "3399007",
        price: 59.0,
        category: "Sides",
        image: "https://images.unsplash.com/photo-1512852939750-1305098529bf?auto=format&fit=crop&w=300&q=80",
        combo_items: &[],
    },
    SeedProduct {
        id: "24",
        name: "Mineral Water",
        code: "4455014",
        price: 30.0,
        category: "Drinks",
        image: "https://images.unsplash.com/photo-1564419320461-6870880221ad?auto=format&fit=crop&w=300&q=80",
        combo_items: &[],
    },
    SeedProduct {
        id: "25",
        name: "Chicken Rice Bowl",
        code: "2044515",
        price: 229.0,
        category: "Meals",
        image: "https://images.unsplash.com/photo-1546069901-ba9599a7e63c?auto=format&fit=crop&w=300&q=80",
        combo_items: &[],
    },
    SeedProduct {
        id: "26",
        name: "Paneer Rice Bowl",
        code: "2044516",
        price: 199.0,
        category: "Meals",
        image: "https://images.unsplash.com/photo-1512621776951-a57141f2eefd?auto=format&fit=crop&w=300&q=80",
        combo_items: &[],
    },
    SeedProduct {
        id: "27",
        name: "Veggie Saver Meal",
        code: "CB-5003",
        price: 199.0,
        category: "Combos",
        image: "https://images.unsplash.com/photo-1610614819513-e8e35263d000?auto=format&fit=crop&w=300&q=80",
        combo_items: &["5", "3", "4"],
    },
    SeedProduct {
        id: "28",
        name: "Hot Wings (10pc)",
        code: "2044517",
        price: 389.0,
        category: "Chicken",
        image: "https://images.unsplash.com/photo-1626082927389-6cd097cdc6ec?auto=format&fit=crop&w=300&q=80",
        combo_items: &[],
    },
    SeedProduct {
        id: "29",
        name: "Periperi Fries",
        code: "3399008",
        price: 119.0,
        category: "Sides",
        image: "https://images.unsplash.com/photo-1573080496219-bb080dd4f877?auto=format&fit=crop&w=300&q=80",
        combo_items: &[],
    },
    SeedProduct {
        id: "30",
        name: "Strawberry Shake",
        code: "4455015",
        price: 120.0,
        category: "Drinks",
        image: "https://images.unsplash.com/photo-1553177595-4de2bb0842b9?auto=format&fit=crop&w=300&q=80",
        combo_items: &[],
    },
];

/// Materialize the seed catalog
pub fn seed_products() -> Vec<Product> {
    SEED.iter()
        .map(|seed| Product {
            id: seed.id.to_string(),
            name: seed.name.to_string(),
            code: seed.code.to_string(),
            price: seed.price,
            category: seed.category.to_string(),
            image: seed.image.to_string(),
            available: true,
            is_combo: !seed.combo_items.is_empty(),
            combo_items: seed.combo_items.iter().map(|id| id.to_string()).collect(),
        })
        .collect()
}
