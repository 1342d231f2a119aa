//! Demo content set
//!
//! The full dataset the `seed` binary writes through the mutation API:
//! the three page singletons, four categories, the menu, the team, both
//! locations and the event calendar. Documents use stable ids so the
//! seed is idempotent (create-or-replace semantics).

use serde_json::{Value, json};

/// Every seed document, in write order (referenced documents first)
pub fn documents() -> Vec<Value> {
    let mut docs = vec![site_settings(), home_page(), about_page()];
    docs.extend(categories());
    docs.extend(menu_items());
    docs.extend(staff());
    docs.extend(locations());
    docs.extend(events());
    docs
}

fn site_settings() -> Value {
    json!({
        "_id": "siteSettings",
        "_type": "siteSettings",
        "shopName": "Ember & Oak Coffee",
        "tagline": "Good coffee takes time.",
        "footerText": "Neighborhood coffee, roasted in-house. Portland, Oregon since 2018.",
        "socialLinks": {
            "instagram": "https://instagram.com/emberandoak",
            "facebook": "https://facebook.com/emberandoak"
        },
        "seo": {
            "metaTitle": "Ember & Oak Coffee | Portland, Oregon",
            "metaDescription": "Neighborhood coffee shop in Portland, Oregon. House-roasted beans, local ingredients, and a space to slow down."
        }
    })
}

fn home_page() -> Value {
    json!({
        "_id": "homePage",
        "_type": "homePage",
        "hero": {
            "headline": "Good Coffee Takes Time",
            "subheadline": "House-roasted beans, local ingredients, and a space to slow down.",
            "ctaText": "View Menu",
            "ctaLink": "/menu"
        },
        "featuredSection": {
            "title": "What We're Pouring",
            "subtitle": "A few favorites from our menu. Everything's made to order, nothing sits on a warmer."
        },
        "storyPreview": {
            "heading": "Started in a Garage",
            "excerpt": "In 2018, Maya Chen left her job as a food scientist at a major coffee company. She found a former auto repair shop on Division Street with good bones and terrible plumbing. Eight months later, Ember & Oak opened its doors."
        },
        "announcement": {
            "enabled": false,
            "text": "",
            "link": ""
        }
    })
}

fn story_block(key: &str, text: &str) -> Value {
    json!({
        "_type": "block",
        "_key": key,
        "style": "normal",
        "children": [{ "_type": "span", "_key": format!("{key}-span"), "text": text }]
    })
}

fn about_page() -> Value {
    json!({
        "_id": "aboutPage",
        "_type": "aboutPage",
        "headline": "Good Coffee Takes Time. So Do Good Things.",
        "story": [
            story_block("block1", "In 2018, Maya Chen left her job as a food scientist at a major coffee company. Not because she didn't love coffee—she loved it too much. She was tired of watching beans get roasted to anonymity and milk alternatives treated as afterthoughts."),
            story_block("block2", "She found a former auto repair shop on Division Street with good bones and terrible plumbing. Her brother Daniel, a contractor with more optimism than sense, said he could have it ready in three months. It took eight."),
            story_block("block3", "The first year was brutal. Maya burned through savings, learned to fix an espresso machine at 5 AM, and discovered that \"regulars\" are made, not found. But slowly, Ember & Oak became what she'd imagined: a place where coffee is a craft, not a commodity."),
            story_block("block4", "Today, we roast our own beans in small batches, source oat milk from a farm in Willamette Valley, and make pastries that Maya's grandmother would recognize—if not entirely approve of. (She still thinks American coffee is too weak.)"),
            story_block("block5", "We're not trying to change the world. We're just trying to make your morning a little better.")
        ],
        "values": [
            {
                "_key": "value1",
                "title": "Quality Over Quantity",
                "description": "We roast in small batches, brew fresh every 30 minutes, and would rather run out than serve something that's been sitting."
            },
            {
                "_key": "value2",
                "title": "Know Your Farmer",
                "description": "Direct relationships with growers in Guatemala, Ethiopia, and Colombia. We visit when we can, video call when we can't."
            },
            {
                "_key": "value3",
                "title": "Local First",
                "description": "Oat milk from Willamette Valley. Pastries from Pine Street Bakery. Chocolate from Woodblock. If someone nearby makes it better, we buy from them."
            },
            {
                "_key": "value4",
                "title": "No Shortcuts",
                "description": "House-made syrups. 18-hour cold brew. Chai spiced fresh. The extra effort shows up in the cup."
            }
        ],
        "timeline": [
            { "_key": "tl1", "year": "2018", "title": "Division Street Opens", "description": "After eight months of renovation (three months over schedule), we opened our doors in a former auto repair shop." },
            { "_key": "tl2", "year": "2019", "title": "Started Roasting", "description": "Installed our first roaster—a 12kg Probat—and started roasting all our espresso in-house." },
            { "_key": "tl3", "year": "2021", "title": "Survived the Pandemic", "description": "Switched to takeout-only, launched delivery, and somehow made it through. Our regulars kept us alive." },
            { "_key": "tl4", "year": "2023", "title": "Alberta Opens", "description": "Our second location in the Alberta Arts District. Smaller, cozier, surrounded by galleries." },
            { "_key": "tl5", "year": "2024", "title": "Still Here", "description": "Six years in. Same espresso machine. Same mission. A few more gray hairs on Maya's head." }
        ]
    })
}

fn categories() -> Vec<Value> {
    [
        ("category-espresso", "Espresso", "espresso", "coffee", 1),
        ("category-drip", "Drip & Cold", "drip-cold", "coffee", 2),
        ("category-notcoffee", "Not Coffee", "not-coffee", "leaf", 3),
        ("category-food", "Pastries & Food", "food", "pastry", 4),
    ]
    .into_iter()
    .map(|(id, name, slug, icon, order)| {
        json!({
            "_id": id,
            "_type": "category",
            "name": name,
            "slug": { "current": slug },
            "icon": icon,
            "order": order
        })
    })
    .collect()
}

struct MenuSeed {
    id: &'static str,
    name: &'static str,
    slug: &'static str,
    category: &'static str,
    description: &'static str,
    price: f64,
    /// (size, price); empty for single-price items
    variants: &'static [(&'static str, f64)],
    tags: &'static [&'static str],
    featured: bool,
}

fn menu_items() -> Vec<Value> {
    let items = [
        MenuSeed {
            id: "menu-division",
            name: "The Division",
            slug: "the-division",
            category: "category-espresso",
            description: "Our signature blend—Guatemala and Ethiopia, roasted in-house. Notes of dark chocolate, cherry, and just enough brightness to wake you up without shouting.",
            price: 3.50,
            variants: &[("small", 3.50), ("medium", 4.25), ("large", 5.00)],
            tags: &["staff-pick"],
            featured: true,
        },
        MenuSeed {
            id: "menu-cortado",
            name: "Cortado",
            slug: "cortado",
            category: "category-espresso",
            description: "Equal parts espresso and steamed milk. Simple. Perfect. No customizations because it doesn't need them.",
            price: 4.50,
            variants: &[],
            tags: &[],
            featured: false,
        },
        MenuSeed {
            id: "menu-oat-latte",
            name: "Oat Milk Latte",
            slug: "oat-milk-latte",
            category: "category-espresso",
            description: "Made with Misty Morning oat milk from the Willamette Valley. Creamy without being cloying.",
            price: 5.00,
            variants: &[("small", 5.00), ("medium", 5.75), ("large", 6.50)],
            tags: &["vegan", "dairy-free"],
            featured: true,
        },
        MenuSeed {
            id: "menu-lavender-latte",
            name: "Lavender Honey Latte",
            slug: "lavender-honey-latte",
            category: "category-espresso",
            description: "Local wildflower honey and house-made lavender syrup. Sweet, floral, a little unexpected. Maya's answer to 'can you make it less bitter?'",
            price: 5.50,
            variants: &[("small", 5.50), ("medium", 6.25), ("large", 7.00)],
            tags: &["seasonal"],
            featured: true,
        },
        MenuSeed {
            id: "menu-redeye",
            name: "Red Eye",
            slug: "red-eye",
            category: "category-espresso",
            description: "Drip coffee with a shot of espresso. For days when one caffeine delivery system isn't enough.",
            price: 4.75,
            variants: &[],
            tags: &[],
            featured: false,
        },
        MenuSeed {
            id: "menu-drip",
            name: "House Drip",
            slug: "house-drip",
            category: "category-drip",
            description: "Rotating single-origin, brewed fresh every 30 minutes. Ask your barista what's on—they're excited to tell you.",
            price: 2.75,
            variants: &[("small", 2.75), ("medium", 3.25), ("large", 3.75)],
            tags: &["vegan"],
            featured: false,
        },
        MenuSeed {
            id: "menu-coldbrew",
            name: "Cold Brew",
            slug: "cold-brew",
            category: "category-drip",
            description: "Steeped 18 hours, served over ice. Strong enough to be dangerous, smooth enough to forget that.",
            price: 4.50,
            variants: &[],
            tags: &["vegan"],
            featured: true,
        },
        MenuSeed {
            id: "menu-nitro",
            name: "Nitro Cold Brew",
            slug: "nitro-cold-brew",
            category: "category-drip",
            description: "Cold brew on tap, infused with nitrogen. Creamy, cascading, caffeinated.",
            price: 5.50,
            variants: &[],
            tags: &["vegan", "staff-pick"],
            featured: false,
        },
        MenuSeed {
            id: "menu-iced-americano",
            name: "Iced Americano",
            slug: "iced-americano",
            category: "category-drip",
            description: "Espresso, water, ice. The 'I want coffee but it's 90 degrees' drink.",
            price: 3.75,
            variants: &[("small", 3.75), ("medium", 4.50)],
            tags: &["vegan"],
            featured: false,
        },
        MenuSeed {
            id: "menu-matcha",
            name: "Matcha Latte",
            slug: "matcha-latte",
            category: "category-notcoffee",
            description: "Ceremonial-grade matcha from Uji, Japan. Earthy, grassy, nothing like the stuff from a powder.",
            price: 5.25,
            variants: &[("small", 5.25), ("medium", 6.00)],
            tags: &["vegan"],
            featured: false,
        },
        MenuSeed {
            id: "menu-london-fog",
            name: "London Fog",
            slug: "london-fog",
            category: "category-notcoffee",
            description: "Earl Grey, vanilla, steamed milk. Named after a city with terrible weather and excellent tea.",
            price: 4.50,
            variants: &[("small", 4.50), ("medium", 5.25)],
            tags: &[],
            featured: false,
        },
        MenuSeed {
            id: "menu-hot-chocolate",
            name: "Hot Chocolate",
            slug: "hot-chocolate",
            category: "category-notcoffee",
            description: "Made with Woodblock chocolate and whole milk. Rich enough to count as dessert.",
            price: 4.25,
            variants: &[("small", 4.25), ("medium", 5.00)],
            tags: &[],
            featured: false,
        },
        MenuSeed {
            id: "menu-chai",
            name: "Chai Latte",
            slug: "chai-latte",
            category: "category-notcoffee",
            description: "House-spiced chai—cardamom, ginger, black pepper, cinnamon. Made fresh, not from a box.",
            price: 4.75,
            variants: &[("small", 4.75), ("medium", 5.50)],
            tags: &[],
            featured: false,
        },
        MenuSeed {
            id: "menu-muffin",
            name: "Morning Glory Muffin",
            slug: "morning-glory-muffin",
            category: "category-food",
            description: "Carrots, apple, coconut, walnuts. Somehow both virtuous and delicious.",
            price: 4.25,
            variants: &[],
            tags: &["vegan"],
            featured: false,
        },
        MenuSeed {
            id: "menu-croissant",
            name: "Almond Croissant",
            slug: "almond-croissant",
            category: "category-food",
            description: "From Pine Street Bakery. Flaky, frangipane-filled, probably too good for a Monday.",
            price: 5.50,
            variants: &[],
            tags: &[],
            featured: false,
        },
        MenuSeed {
            id: "menu-bagel",
            name: "Everything Bagel",
            slug: "everything-bagel",
            category: "category-food",
            description: "Housemade cream cheese, capers, pickled onion, cucumber. A proper bagel situation.",
            price: 7.50,
            variants: &[],
            tags: &[],
            featured: false,
        },
        MenuSeed {
            id: "menu-avo-toast",
            name: "Avocado Toast",
            slug: "avocado-toast",
            category: "category-food",
            description: "Sourdough, smashed avo, chili flake, flaky salt, pepitas. Yes, that avocado toast.",
            price: 9.00,
            variants: &[],
            tags: &["vegan"],
            featured: false,
        },
        MenuSeed {
            id: "menu-granola",
            name: "Granola Bowl",
            slug: "granola-bowl",
            category: "category-food",
            description: "House granola, Greek yogurt, seasonal fruit, honey. Changes with whatever's good at the market.",
            price: 8.50,
            variants: &[],
            tags: &["gluten-free"],
            featured: false,
        },
        MenuSeed {
            id: "menu-sandwich",
            name: "Breakfast Sandwich",
            slug: "breakfast-sandwich",
            category: "category-food",
            description: "Scrambled eggs, aged cheddar, bacon or tempeh, greens, sriracha aioli on a brioche bun.",
            price: 10.50,
            variants: &[],
            tags: &["staff-pick"],
            featured: true,
        },
    ];

    items.into_iter().map(menu_item_doc).collect()
}

fn menu_item_doc(item: MenuSeed) -> Value {
    let mut doc = json!({
        "_id": item.id,
        "_type": "menuItem",
        "name": item.name,
        "slug": { "current": item.slug },
        "category": { "_type": "reference", "_ref": item.category },
        "description": item.description,
        "price": item.price,
        "tags": item.tags,
        "available": true,
        "featured": item.featured
    });
    if !item.variants.is_empty() {
        let variants: Vec<Value> = item
            .variants
            .iter()
            .map(|(size, price)| {
                json!({ "_key": *size, "size": size, "price": price })
            })
            .collect();
        doc["variants"] = Value::Array(variants);
    }
    doc
}

fn staff() -> Vec<Value> {
    [
        (
            "staff-maya",
            "Maya Chen",
            "Founder & Head Roaster",
            "Former food scientist turned reluctant business owner. Still gets excited about bean density.",
            "Cortado, no variations",
            "Once blind-tested 47 oat milks to find the right one",
            1,
        ),
        (
            "staff-daniel",
            "Daniel Chen",
            "Operations Manager",
            "Maya's brother. Fixed up the original space and never left. Handles everything that isn't coffee.",
            "Red Eye with oat milk",
            "Built all the furniture from reclaimed oak beams",
            2,
        ),
        (
            "staff-jess",
            "Jess Okonkwo",
            "Lead Barista",
            "6 years in specialty coffee, latte art champion (regional, 2022). Strong opinions about tamping pressure.",
            "Iced oat milk latte, light ice",
            "Has a tattoo of a portafilter",
            3,
        ),
        (
            "staff-sam",
            "Sam Reeves",
            "Barista",
            "Former music teacher, current caffeine artist. Knows everyone's regular order within two visits.",
            "Chai latte, extra spicy",
            "Plays in a folk band called 'The Pour Overs'",
            4,
        ),
    ]
    .into_iter()
    .map(|(id, name, role, bio, order, fact, sort)| {
        json!({
            "_id": id,
            "_type": "staffMember",
            "name": name,
            "role": role,
            "bio": bio,
            "favoriteOrder": order,
            "funFact": fact,
            "order": sort
        })
    })
    .collect()
}

fn locations() -> Vec<Value> {
    vec![
        json!({
            "_id": "location-division",
            "_type": "location",
            "name": "Division Street",
            "slug": { "current": "division" },
            "address": {
                "street": "3847 SE Division Street",
                "city": "Portland",
                "state": "OR",
                "zip": "97202"
            },
            "coordinates": { "lat": 45.5045, "lng": -122.6187 },
            "phone": "(503) 555-0147",
            "email": "hello@emberandoak.coffee",
            "description": "Our original location in a converted auto shop. High ceilings, lots of light, and the espresso machine that started it all.",
            "hours": [
                { "_key": "h1", "days": "Monday - Friday", "hours": "6:30 AM - 6:00 PM" },
                { "_key": "h2", "days": "Saturday", "hours": "7:00 AM - 6:00 PM" },
                { "_key": "h3", "days": "Sunday", "hours": "7:30 AM - 4:00 PM" }
            ],
            "features": ["wifi", "outdoor", "accessible", "dog-friendly"],
            "isPrimary": true
        }),
        json!({
            "_id": "location-alberta",
            "_type": "location",
            "name": "Alberta Arts",
            "slug": { "current": "alberta" },
            "address": {
                "street": "2215 NE Alberta Street",
                "city": "Portland",
                "state": "OR",
                "zip": "97211"
            },
            "coordinates": { "lat": 45.5589, "lng": -122.6456 },
            "phone": "(503) 555-0283",
            "email": "alberta@emberandoak.coffee",
            "description": "Our Alberta outpost. Smaller, cozier, surrounded by galleries. Perfect for a quiet morning with a book.",
            "hours": [
                { "_key": "h1", "days": "Monday - Friday", "hours": "7:00 AM - 5:00 PM" },
                { "_key": "h2", "days": "Saturday - Sunday", "hours": "8:00 AM - 5:00 PM" }
            ],
            "features": ["wifi", "outdoor", "accessible"],
            "isPrimary": false
        }),
    ]
}

fn events() -> Vec<Value> {
    [
        (
            "event-cupping",
            "Cupping Session: Ethiopia Yirgacheffe",
            "cupping-ethiopia",
            "2026-01-15T10:00:00.000Z",
            "Join Maya for a guided tasting of our new single-origin Ethiopian. Learn about processing methods, flavor profiles, and why we're so excited about this coffee. Limited to 12 people.",
            "location-division",
            "none",
            true,
        ),
        (
            "event-music",
            "Live Music: The Pour Overs",
            "live-music-pour-overs",
            "2026-01-18T19:00:00.000Z",
            "Our own Sam Reeves and his folk band play their monthly set. Original songs about coffee, rain, and questionable life choices. No cover, just good music and late-night espresso.",
            "location-division",
            "monthly",
            true,
        ),
        (
            "event-throwdown",
            "Latte Art Throwdown",
            "latte-art-throwdown",
            "2026-01-25T16:00:00.000Z",
            "Local baristas compete for glory (and a $100 bar tab). Come watch, vote, and drink the evidence. Open to all skill levels—sign up at the bar.",
            "location-division",
            "none",
            false,
        ),
        (
            "event-poetry",
            "Poetry Open Mic",
            "poetry-open-mic",
            "2026-01-21T19:00:00.000Z",
            "Hosted by Portland Poets Collective. Sign-up starts at 6:30. Five-minute sets. Be brave.",
            "location-alberta",
            "weekly",
            false,
        ),
        (
            "event-workshop",
            "Brewing 101: Pour Over Workshop",
            "pour-over-workshop",
            "2026-02-01T11:00:00.000Z",
            "Learn to make coffee shop quality pour-overs at home. We'll cover grind size, water temperature, timing, and technique. You'll leave with a bag of beans and newfound confidence.",
            "location-division",
            "none",
            false,
        ),
        (
            "event-vinyl",
            "Coffee & Vinyl Night",
            "coffee-vinyl-night",
            "2026-02-08T18:00:00.000Z",
            "Bring your favorite records, we'll spin them on our vintage setup. Themed drink specials based on what's playing. Last month someone brought a Fleetwood Mac album and we all cried a little.",
            "location-alberta",
            "monthly",
            false,
        ),
    ]
    .into_iter()
    .map(|(id, title, slug, date, description, location, recurring, featured)| {
        json!({
            "_id": id,
            "_type": "event",
            "title": title,
            "slug": { "current": slug },
            "date": date,
            "shortDescription": description,
            "location": { "_type": "reference", "_ref": location },
            "recurring": recurring,
            "featured": featured
        })
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::registry;
    use std::collections::HashSet;

    #[test]
    fn document_ids_are_unique() {
        let docs = documents();
        let ids: HashSet<&str> = docs.iter().filter_map(|d| d["_id"].as_str()).collect();
        assert_eq!(ids.len(), docs.len());
    }

    #[test]
    fn every_document_type_is_registered() {
        let types: HashSet<&'static str> = registry().iter().map(|t| t.name).collect::<HashSet<_>>();
        for doc in documents() {
            let ty = doc["_type"].as_str().expect("_type");
            assert!(types.contains(ty), "unregistered type {ty}");
        }
    }

    #[test]
    fn references_resolve_within_the_seed_set() {
        let docs = documents();
        let ids: HashSet<&str> = docs.iter().filter_map(|d| d["_id"].as_str()).collect();
        for doc in &docs {
            for field in ["category", "location"] {
                if let Some(reference) = doc[field]["_ref"].as_str() {
                    assert!(ids.contains(reference), "dangling reference {reference}");
                }
            }
        }
    }

    #[test]
    fn event_dates_are_rfc3339() {
        for doc in documents().iter().filter(|d| d["_type"] == "event") {
            let date = doc["date"].as_str().expect("date");
            assert!(
                chrono::DateTime::parse_from_rfc3339(date).is_ok(),
                "bad date {date}"
            );
        }
    }

    #[test]
    fn singleton_documents_use_their_type_as_id() {
        let singletons = crate::schema::singleton_ids();
        for doc in documents() {
            let ty = doc["_type"].as_str().unwrap();
            if singletons.iter().any(|s| *s == ty) {
                assert_eq!(doc["_id"].as_str(), Some(ty));
            }
        }
    }

    #[test]
    fn seed_set_matches_expected_counts() {
        let docs = documents();
        let count = |ty: &str| docs.iter().filter(|d| d["_type"] == ty).count();
        assert_eq!(count("category"), 4);
        assert_eq!(count("menuItem"), 18);
        assert_eq!(count("staffMember"), 4);
        assert_eq!(count("location"), 2);
        assert_eq!(count("event"), 6);
    }
}
