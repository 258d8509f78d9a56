//! Hard-coded site content: identity, contact details, the full menu,
//! and guest reviews. This is display data, not logic - keep it boring.

pub const APP_NAME: &str = "Colton's Social House";
pub const TAGLINE: &str = "A SOCIALLY THERAPEUTIC EXPERIENCE";
pub const SUB_TAGLINE: &str = "eat fresh * drink craft * be social";

pub const ADDRESS: &str = "1150 Shaw Avenue * Clovis, CA, 93612";
pub const PHONE_PRIMARY: &str = "(559) 721-6655";
pub const PHONE_SECONDARY: &str = "(559) 472-3427";
pub const EMAIL: &str = "CSH@ColtonsSocialHouse.com";
pub const HOURS: &str = "7 Days / Week - 11:00 AM - Midnight";

pub const GIFT_CARD_URL: &str = "https://www.toasttab.com/coltons-social-house/giftcards";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tag {
    Spicy,
    Vegetarian,
}

#[derive(Debug, Clone, Copy)]
pub struct MenuItem {
    pub name: &'static str,
    pub price: &'static str,
    pub description: &'static str,
    pub tags: &'static [Tag],
}

#[derive(Debug, Clone, Copy)]
pub struct MenuCategory {
    pub title: &'static str,
    pub note: Option<&'static str>,
    pub items: &'static [MenuItem],
}

const fn item(name: &'static str, price: &'static str, description: &'static str) -> MenuItem {
    MenuItem { name, price, description, tags: &[] }
}

const fn tagged(
    name: &'static str,
    price: &'static str,
    description: &'static str,
    tags: &'static [Tag],
) -> MenuItem {
    MenuItem { name, price, description, tags }
}

pub const MENU: &[MenuCategory] = &[
    MenuCategory {
        title: "SOCIABLES",
        note: Some("Appetizers & Shareables"),
        items: &[
            tagged("CHIPS & SALSA", "$10", "House seasoned corn tortilla chips & roasted salsa. Add classic queso w/ pico (+$3.50) or fresh guac (+$6).", &[Tag::Vegetarian]),
            item("DEVILED EGGS", "$12", "Panko crusted & fried w/ hickory bacon, scallion & paprika. Available traditional or half & half."),
            item("SOCIAL WINGS", "$16 | $23", "Bone-in chicken wings. Choice of Thai Chili, Creamy Buffalo, or Aji Verde. (8 for $16 | 12 for $23)"),
            tagged("ZUCCHINI CHIPS", "$13", "Thick-cut & tempura panko battered, parmesan, w/ chipotle ranch.", &[Tag::Vegetarian]),
            tagged("ATOMIC POPPERS", "$15", "Roasted jalapeno, creamy ghost pepper & colby jack cheese, hickory bacon-wrapped, w/ serrano aioli.", &[Tag::Spicy]),
            tagged("PHO-NOMENAL DUMPLINGS", "$15", "Pan-seared pho dumplings w/ portobello mushroom, tofu & vegetable dumpling, sesame ginger sauce, sesame seed, scallion.", &[Tag::Vegetarian]),
            tagged("DATE NIGHT BRUSSELS", "$15", "Crispy honey butter glazed brussels sprouts, Medjool dates, blue cheese crumble, balsamic glaze, crispy shallots, parsley. Add hickory bacon (+$2).", &[Tag::Vegetarian]),
            tagged("MOZZARELLA VESUVIO", "$16.50", "Creamy mozzarella-ricotta, San Marzano arrabbiata sauce, roasted red pepper & artichoke tapenade, fresno chili, chili thread, basil, garlic butter toasted focaccia.", &[Tag::Vegetarian, Tag::Spicy]),
            tagged("QUESABIRRIA EGG ROLLS", "$18.50", "Adobo shredded barbacoa beef, mozzarella, onion, cilantro, w/ spicy chile de arbol salsa, adobo consome & lime.", &[Tag::Spicy]),
            item("CHILI VERDE NACHOS", "$20", "House chili verde w/ pork, white cheddar & pasilla queso, colby jack, pickled jalapeno, pico de gallo, avocado aioli, cilantro lime cream, fresh seasoned corn tortilla chips."),
        ],
    },
    MenuCategory {
        title: "SOUPS & GREENS",
        note: None,
        items: &[
            item("CLAM CHOWDER", "$6 | $12", "Loaded w/ clams, red potatoes, bacon, onion, celery, carrots, cream, & herbs. Sourdough bread bowl (+$3)."),
            item("FRENCH ONION SOUP", "$6 | $12", "Caramelized onion, shallot, thyme, beef broth, garlic butter focaccia w/ Gruyere. Sourdough bread bowl (+$3)."),
            tagged("HOUSE SALAD", "$10", "Spring mixed greens, cherry tomato, cucumber, shredded carrot, focaccia crouton, cracked pepper, tossed w/ lemon vinaigrette.", &[Tag::Vegetarian]),
            tagged("CAESAR SALAD", "$10 | $14", "Chopped romaine heart, focaccia croutons, fresh parmesan, cracked pepper, tossed w/ creamy garlic caesar dressing.", &[Tag::Vegetarian]),
            tagged("STRAWBERRY FIELDS", "$16", "Spinach, spring mixed greens, house champagne vinaigrette, fresh strawberry, candied pecan, dried cranberry, feta.", &[Tag::Vegetarian]),
            item("BREAKING THE ICE WEDGE", "$17", "Iceberg lettuce, blue cheese dressing, hickory bacon, blue cheese crumble, cherry tomato, pickled red onion, scallion, cracked black pepper, balsamic glaze."),
            item("AVO THE TOP COBB", "$20", "Chopped romaine heart, avocado ranch, chilled grilled chicken, hickory bacon, cherry tomato, hard-boiled egg, blue cheese crumble, cucumber, avocado, cracked pepper. Add-ons: Grilled chicken ($8), Jumbo shrimp ($11), Salmon ($15), Flank steak ($15)."),
        ],
    },
    MenuCategory {
        title: "HANDHOLDERS",
        note: None,
        items: &[
            item("THE MUSTARD BIRD", "$22", "Grilled chicken, provolone, hickory bacon, avocado, green leaf, tomato, crispy onion straw, dijon garlic aioli, garlic butter grilled pretzel bun, w/ beer battered fries."),
            tagged("PERI PERI CRUNCH", "$21", "Spicy crispy fried chicken, pepper jack, creamy peri peri sauce, lemon herb slaw, garlic butter grilled brioche bun.", &[Tag::Spicy]),
            item("DRUNKEN HOG", "$20", "Smoked pulled pork, honey-chipotle BBQ sauce, house cheddar & gruyere beer cheese, pickled jalapeno, garlic butter toasted pretzel bun, w/ grilled kielbasa."),
            item("BRISKET FRENCH DIP", "$24", "Smoked & shredded brisket, caramelized french onion, provolone, garlic butter toasted sourdough baguette, w/ au jus, dijon garlic aioli & beer battered fries."),
            item("SANTORINI STEAK", "$26", "Grilled flank steak, gruyere, roasted red pepper & artichoke tapenade, citrus arugula, cracked black pepper, garlic butter grilled sourdough baguette."),
            tagged("MARGHERITA FLATBREAD", "$15", "Garlic herb oil, hand-crushed San Marzano tomato sauce, mozzarella, parmesan, basil.", &[Tag::Vegetarian]),
            tagged("TACOS DE GUAJILLO (3)", "$22", "Barbacoa de guajillo, pickled red onion, feta, cilantro, corn tortilla, spicy chile de arbol salsa, lime wedges.", &[Tag::Spicy]),
            item("TACOS DE CAMARON BAJA (3)", "$28", "Tequila-citrus sauteed shrimp, lemon herb slaw, pico de gallo, cilantro, corn tortilla, chipotle ranch, lime wedges."),
        ],
    },
    MenuCategory {
        title: "CRAFT BURGERS",
        note: Some("Served on a Garlic Butter Grilled Brioche Bun with Beer Battered Fries and Colton's Sauce."),
        items: &[
            item("THE QUARTER HOUSE", "$15.50", "1/4 lb, American cheese, caramelized french onion, green leaf, tomato, pickle, Colton's sauce."),
            item("COLTON'S CLASSIC", "$18.50", "1/2 lb, American cheese, green leaf, tomato, red onion, pickle, Colton's sauce."),
            item("THE SMASH", "$22.50", "1/2 lb, Provolone, Avocado Smash, hickory bacon, crispy onion straw, avocado ranch, green leaf, tomato, red onion."),
            item("CLOVIS RODEO BURGER", "$21.50", "1/2 lb, cheddar cheese, applewood bacon, smoked pulled pork, honey chipotle BBQ sauce, chipotle aioli, beer battered onion-ring, green leaf, tomato."),
            tagged("FOUR-ALARM", "$21.50", "1/2 lb, firestarter cheese blend, fried jalapeno coins, serrano aioli, green leaf, tomato, pickled red onion, w/ Atomic Popper jalapeno.", &[Tag::Spicy]),
            item("DR. BBQ", "$23.50", "1/2 lb, Gruyere, hickory bacon, smoked & shredded brisket, Carolina Gold BBQ sauce, roasted poblano, cheddar mac 'n' cheese, dijon garlic aioli."),
        ],
    },
    MenuCategory {
        title: "HOUSE PLATES",
        note: None,
        items: &[
            tagged("BLACK GARLIC FETTUCCINE", "$22", "Fettuccine, black garlic cream sauce, parmesan, lemon zest, cracked black pepper, parsley.", &[Tag::Vegetarian]),
            tagged("RIGATONI ARRABBIATA", "$25", "Rigatoni, San Marzano arrabbiata sauce, Italian sausage, parmesan, parsley, chili thread.", &[Tag::Spicy]),
            tagged("KUNG PAO SHRIMP", "$28", "Sauteed shrimp, rice noodles, kung pao cashew sauce, red bell pepper, garlic, scallion, roasted cashew, sesame seed.", &[Tag::Spicy]),
            item("BANGKOK QUARTER", "$28", "Roasted chicken leg quarter, Thai chili sauce, scallion, sesame seed, bacon fried rice, blistered green beans."),
            tagged("TANDOORI-SPICED CHICKEN", "$30", "Tandoori-spiced chicken, aji verde, roasted cashew, cilantro, savory yellow rice, cucumber salad, garlic butter flatbread.", &[Tag::Spicy]),
            item("OFF THE HOOK FISH & CHIPS", "$23", "(3) Colton's house beer battered haddock tender, w/ grilled lemon, tartar & beer battered fries."),
            item("SALMON FLORENTINE", "$34", "Herb grilled salmon, mushroom & spinach risotto, lemon florentine sauce, parsley."),
            item("PORCINI-CRUSTED RIBEYE", "$58", "16oz bone-in & porcini-crusted choice cowboy ribeye, sea salt, black garlic butter, parsley, sauteed mushrooms, beer-battered fries or loaded baked potato."),
        ],
    },
    MenuCategory {
        title: "ENHANCERS (Sides)",
        note: None,
        items: &[
            item("BEER BATTERED FRIES", "$7.50", ""),
            item("PARMESAN FRIES", "$9.50", "w/ Truffle Ranch"),
            item("SWEET POTATO FRIES", "$8.50", ""),
            item("BEER BATTERED ONION RINGS", "$8.50", ""),
            item("SHOE-STRING FRIES", "$8.50", ""),
            item("BLISTERED GREEN BEANS", "$8", ""),
            item("MUSHROOM & SPINACH RISOTTO", "$12", ""),
            item("LOADED BAKED POTATO", "$10", ""),
        ],
    },
    MenuCategory {
        title: "SWEET INDULGENCES",
        note: None,
        items: &[
            item("OG CHEESECAKE", "$12", "Classic cheesecake, graham cracker crust, whipped cream."),
            item("PUMPKIN BUTTER CAKE", "$15", "Gooey pumpkin butter cake, bruleed powdered sugar, pumpkin spice caramel."),
            item("S'MORES TART", "$13", "Graham cracker crust, bruleed marshmallow, dark chocolate ganache, sea salt, caramel."),
            item("BLACK & BLUE CRISP", "$13", "Baked blackberry & blueberry, sugar & oats crisp topping."),
            item("WHITE LOTUS PANOOKIE", "$16", "White chocolate chip & cookie butter panookie, sea salt, vanilla ice cream, cookie butter caramel, whipped cream."),
            item("ICE CREAM SCOOP", "$5.50 - $6.50", "Vanilla or Cookies & Cream."),
        ],
    },
    MenuCategory {
        title: "LIL' SESSIONS (Kids)",
        note: None,
        items: &[
            item("MELT DOWN", "$10", "Grilled cheese sandwich w/ fries."),
            item("CRUNCH TIME", "$12", "(2) Chicken tenders w/ fries."),
            item("MAC ATTACK", "$11", "Elbow pasta w/ creamy cheddar sauce w/ fries."),
            item("ONE STICK WONDER", "$10", "Corn dog w/ fries."),
            item("CHEESY DOES IT", "$10", "Wood-fired flatbread cheese pizza."),
            item("THE BIG MOO-D", "$13", "1/4 lb Angus burger w/ fries."),
        ],
    },
    MenuCategory {
        title: "CRAFT COCKTAILS: Spirited Favorites",
        note: None,
        items: &[
            item("FARMERS DAUGHTER", "$16", "Vodka, Strawberry, Cranberry, Sweet & Sour, Basil, Sugar Rim."),
            item("PEACH TART", "$15", "Peach Vodka, Triple Sec, Peach, Sweet & Sour, Sugar Rim."),
            item("PERKY PINEAPPLE", "$15", "Tequila Blanco, Pineapple, Cilantro, Sweet & Sour, Salt Rim."),
            item("MOTHER OF DRAGONS", "$15", "Tequila Reposado, Grapefruit Liqueur, Grapefruit, Lime, Dragon Fruit, Orange Bitters, Torched Rosemary."),
        ],
    },
    MenuCategory {
        title: "CRAFT COCKTAILS: Drinking Outside The Box",
        note: None,
        items: &[
            item("THERAPY MULE", "$15", "Vodka, Apple Juice, Lime Juice, Spiced Butter Syrup, Cinnamon Bitters, Ginger Beer."),
            item("SAGE ADVICE", "$16", "Bourbon, Spiced Pear Liqueur, Lemon, Sage, Black Walnut Bitters."),
            item("THE FLYING MONKEY", "$15", "Silver Rum, Blue Curacao, Banana Liqueur, Pineapple, Sweet & Sour, Orgeat, Tiki Bitters, Dark Rum."),
            item("DANCING THROUGH LIFE", "$16", "Silver Rum, Passion Fruit Liqueur, Grapefruit, Lime, Raspberry Coulis, Velvet Falernum, Cardamom Bitters, Orange Cotton Candy."),
        ],
    },
    MenuCategory {
        title: "CRAFT COCKTAILS: Feeling Adventurous",
        note: None,
        items: &[
            item("GIN A NUTSHELL", "$16", "Gin, Benedictine, Pistachio Orgeat, Lemon, Egg White, Cardamom Bitters."),
            item("ABUELITA OAXAQUENA", "$16", "Tequila Reposado, Mezcal, Espresso Liqueur, Amaro Nonino, Abuelita Chocolate, Egg White, Mole Bitters."),
            item("DEAD MEN TELL NO TALES", "$15", "House Coconut Washed Rum, Lime, Vanilla, Honey, Tiki Bitters."),
            item("THE FLOOR IS GUAVA", "$16", "Mezcal, Aperol, Grapefruit, Orange, Lime, Guava, Agave, Egg White, Salt Rim, Flaming Lime."),
        ],
    },
    MenuCategory {
        title: "CRAFT COCKTAILS: Keeping It Classic",
        note: None,
        items: &[
            item("SOCI-OLD FASHIONED", "$14+", "Whiskey, Orange, Aromatic Bitters, Sugar Syrup."),
            item("PAPER PLANE", "$14+", "Whiskey, Aperol, Amaro Nonino, Lemon."),
            item("VIEUX CARRE", "$15+", "Rye Whiskey, Cognac, Sweet Vermouth, Benedictine, Aromatic Bitters."),
            item("OAXACAN OLD FASHIONED", "$14+", "Mezcal, Tequila Reposado, Agave, Xocolatl Mole Bitters."),
            item("PALOMA", "$14+", "Tequila, Grapefruit, Lime, Soda Water, Agave."),
            item("WAKE ME UP BUTTERCUP", "$15+", "Vodka, Espresso Liqueur, Creme de Cacao, Coffee, Cookie Butter, Black Walnut Bitters."),
            item("MAI TAI", "$14+", "Silver Rum, Dark Rum, Orange Curacao, Lime, Orgeat, Tiki Bitters."),
            item("PISCO SOUR", "$15", "Pisco, Lime, Sugar Syrup, Aromatic Bitters, Egg White."),
            item("STOCKHOLM ROYALE", "$14+", "Vodka, Triple Sec, Raspberry Liqueur, Sweet & Sour, Sugar Syrup, Champagne, Sugar Rim."),
        ],
    },
    MenuCategory {
        title: "H.T.A. (Mocktails)",
        note: Some("Hold The Alcohol - $12 Each"),
        items: &[
            item("HEY THERE, HOT STUFF", "$12", "NA Grapefruit Liqueur, Pineapple, Lime, Habanero, Agave, Jalapeno, Tajin Rim."),
            item("A LITTLE BIT ALEXIS", "$12", "NA Ginger Liqueur, Cranberry, Lemon, Strawberry, Egg White, Soda Water."),
            item("SMASHING PINEAPPLES", "$12", "NA Pineapple Liqueur, Pineapple, Lime, Orgeat, Ginger Beer, Mint."),
            item("I'M JUST KEN", "$12", "NA Pineapple Liqueur, Pineapple, NA Blue Curacao, Falernum, Coconut."),
            item("HERE COMES THE SUN", "$12", "NA Pineapple Liqueur, Peach, Lemon, Pomegranate."),
            item("SO FRESH & SO CLEAN", "$12", "NA Grapefruit Liqueur, Lime, Cucumber, Basil, Soda Water."),
        ],
    },
    MenuCategory {
        title: "WINE",
        note: None,
        items: &[
            item("OPERA PRIMA CHAMPAGNE", "$8 | $32", ""),
            item("TOSCHI CHARDONNAY", "$8 | $32", ""),
            item("CRU CHARDONNAY", "$11 | $44", ""),
            item("TOSCHI PINOT GRIGIO", "$8 | $32", ""),
            item("POMELO'S SAUVIGNON BLANC", "$9 | $36", ""),
            item("TINTO REY ROSE", "$10 | $40", ""),
            item("TOSCHI WHITE MOSCATO", "$8 | $32", ""),
            item("TOSCHI CABERNET", "$8 | $32", ""),
            item("DAOU CABERNET", "$16 | $52", ""),
            item("DAOU 'PESSIMIST' RED BLEND", "$15 | $48", ""),
            item("MEIOMI PINOT NOIR", "$11 | $44", ""),
            item("TOSCHI MERLOT", "$8 | $32", ""),
        ],
    },
    MenuCategory {
        title: "BEER",
        note: None,
        items: &[
            item("BOTTLED & CANNED", "$6 - $6.75", "Bud Light, Coors Light, Stella Artois, Michelob Ultra, Corona, Modelo, Modelo Negra, Firestone Walker 805 (NA)."),
            item("DRAFT BEER FLIGHT", "$12", "4 Craft Drafts (5 oz samples)."),
        ],
    },
];

#[derive(Debug, Clone, Copy)]
pub struct Review {
    pub author: &'static str,
    pub rating: u8,
    pub text: &'static str,
    pub relative_time: &'static str,
    pub source: &'static str,
}

pub const REVIEWS: &[Review] = &[
    Review {
        author: "Cole Evans",
        rating: 5,
        text: "I don't know who Colton is, but the dude has it figured out. Great low key atmosphere with friendly staff. The food didn't disappoint either. I had the Thai Chili wings that were some of the best wings I've ever had.",
        relative_time: "5 months ago",
        source: "Local Guide",
    },
    Review {
        author: "Oofrish V Contractor",
        rating: 5,
        text: "Good location on Shaw Avenue with great ambiance - both indoor and outdoors. The place has a great vibe about it and their service is excellent.",
        relative_time: "7 months ago",
        source: "Local Guide",
    },
    Review {
        author: "Tony Tiengtum",
        rating: 5,
        text: "Good food in a great vibe! Got seated in about 10 minutes on a Saturday night. Awesome Local Alternative to the nearby chain restaurants.",
        relative_time: "5 months ago",
        source: "Local Guide",
    },
    Review {
        author: "Dylan Smith",
        rating: 5,
        text: "Great food. Love the concept. I great experience with my social therapist. The brisket tacos are a must have.",
        relative_time: "2 months ago",
        source: "Local Guide",
    },
    Review {
        author: "Rachel Sinit",
        rating: 5,
        text: "The best thing about this place is the enthusiasm that Nick brings to his work making customers feel welcome and ensuring they are having an enjoyable time. P.S. parmesan fries and panko-crusted deviled eggs are awesome",
        relative_time: "4 months ago",
        source: "Local Guide",
    },
    Review {
        author: "Michelle L",
        rating: 5,
        text: "Love going to Coltons, servers are super friendly and attentive. Food is always yummy!",
        relative_time: "3 months ago",
        source: "Local Guide",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_has_all_categories() {
        assert_eq!(MENU.len(), 15);
        assert!(MENU.iter().any(|c| c.title == "SOCIABLES"));
        assert!(MENU.iter().any(|c| c.title.starts_with("CRAFT COCKTAILS")));
    }

    #[test]
    fn test_menu_items_have_names_and_prices() {
        for category in MENU {
            assert!(!category.items.is_empty(), "{} is empty", category.title);
            for item in category.items {
                assert!(!item.name.is_empty());
                assert!(item.price.starts_with('$'));
            }
        }
    }

    #[test]
    fn test_anchor_items_present() {
        // The therapist persona name-drops these two, so they must exist.
        let all_items: Vec<&str> = MENU
            .iter()
            .flat_map(|c| c.items.iter().map(|i| i.name))
            .collect();
        assert!(all_items.contains(&"FARMERS DAUGHTER"));
        assert!(all_items.contains(&"ATOMIC POPPERS"));
    }

    #[test]
    fn test_reviews_rated_out_of_five() {
        assert!(!REVIEWS.is_empty());
        for review in REVIEWS {
            assert!(review.rating >= 1 && review.rating <= 5);
        }
    }
}
