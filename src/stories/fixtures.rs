//! Built-in demo data for the gallery stories.

use crate::model::{
    CatalogError, FilterDefinition, Item, ItemId, NodeId, SortDescriptor, SortOption,
};
use crate::source::Catalog;
use crate::view_state::TreeNode;
use chrono::{DateTime, Duration, Utc};

/// Items in the simulated infinite feed.
pub const FEED_TOTAL: usize = 40;

const CATEGORIES: [&str; 3] = ["Tech", "Art", "Food"];
const ADJECTIVES: [&str; 8] = [
    "Compact", "Vintage", "Bold", "Minimal", "Rustic", "Vivid", "Quiet", "Modular",
];
const NOUNS: [&str; 6] = ["Lamp", "Poster", "Kettle", "Keyboard", "Notebook", "Teapot"];

/// Ids 1..=24 with categories cycling Tech, Art, Food.
pub fn demo_catalog() -> Result<Catalog, CatalogError> {
    // 2024-01-01T00:00:00Z
    let epoch = DateTime::<Utc>::from_timestamp(1_704_067_200, 0);
    let items = (1..=24)
        .map(|i: usize| {
            let category = CATEGORIES[(i - 1) % CATEGORIES.len()];
            let title = format!(
                "{} {}",
                ADJECTIVES[(i * 5) % ADJECTIVES.len()],
                NOUNS[(i * 7) % NOUNS.len()]
            );
            let mut item = Item::new(ItemId::new(format!("card-{i:02}"))?, title)
                .with_description(format!("{category} pick number {i}"))
                .with_media(format!("images/card-{i:02}.jpg"))
                .with_tag(category.to_lowercase())
                .with_attr("category", category)
                .with_attr("price", ((i * 37) % 90 + 10) as i64)
                .with_attr("rating", ((i * 3) % 5 + 1) as i64)
                .with_attr("in_stock", i % 4 != 0)
                .with_attr("height", ((i * 11) % 5 + 3) as i64);
            if i % 3 == 0 {
                item = item.with_tag("featured");
            }
            if let Some(epoch) = epoch {
                item = item.with_attr("added", epoch + Duration::days(i as i64 * 9));
            }
            Ok(item)
        })
        .collect::<Result<Vec<_>, CatalogError>>()?;
    Catalog::new(items)
}

/// Filter keys offered by the collection story.
pub fn demo_filters() -> Vec<FilterDefinition> {
    vec![
        FilterDefinition::new("category", "Category"),
        FilterDefinition::new("tag", "Tag"),
        FilterDefinition::new("in_stock", "In stock"),
    ]
}

/// Sort choices offered by the collection story.
pub fn demo_sort_options() -> Vec<SortOption> {
    vec![
        SortOption::new("title-asc", "Title A-Z", SortDescriptor::asc("title")),
        SortOption::new(
            "price-asc",
            "Price: low to high",
            SortDescriptor::asc("price"),
        ),
        SortOption::new(
            "price-desc",
            "Price: high to low",
            SortDescriptor::desc("price"),
        ),
        SortOption::new("rating-desc", "Top rated", SortDescriptor::desc("rating")),
        SortOption::new("added-desc", "Newest", SortDescriptor::desc("added")),
    ]
}

/// A small project tree: `src/`, `public/`, `README.md`.
pub fn demo_tree() -> Result<Vec<TreeNode>, CatalogError> {
    let node = |id: &str| NodeId::new(id);
    Ok(vec![
        TreeNode::branch(
            node("src")?,
            "src",
            vec![
                TreeNode::branch(
                    node("src/components")?,
                    "components",
                    vec![
                        TreeNode::leaf(node("src/components/card.rs")?, "card.rs"),
                        TreeNode::leaf(node("src/components/grid.rs")?, "grid.rs"),
                    ],
                ),
                TreeNode::leaf(node("src/lib.rs")?, "lib.rs"),
                TreeNode::leaf(node("src/main.rs")?, "main.rs"),
            ],
        ),
        TreeNode::branch(
            node("public")?,
            "public",
            vec![
                TreeNode::leaf(node("public/index.html")?, "index.html"),
                TreeNode::leaf(node("public/favicon.ico")?, "favicon.ico"),
            ],
        ),
        TreeNode::leaf(node("README.md")?, "README.md"),
    ])
}

/// One accordion panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Panel {
    /// Expansion id.
    pub id: NodeId,
    /// Header text.
    pub title: &'static str,
    /// Body text.
    pub body: &'static str,
}

/// FAQ-style accordion panels.
pub fn demo_panels() -> Result<Vec<Panel>, CatalogError> {
    let panel = |id: &str, title, body| -> Result<Panel, CatalogError> {
        Ok(Panel {
            id: NodeId::new(id)?,
            title,
            body,
        })
    };
    Ok(vec![
        panel(
            "shipping",
            "Shipping",
            "Orders ship within two business days.",
        )?,
        panel(
            "returns",
            "Returns",
            "Unused items can be returned within 30 days.",
        )?,
        panel(
            "warranty",
            "Warranty",
            "Hardware carries a one-year limited warranty.",
        )?,
    ])
}

/// Tab labels.
pub const TABS: [&str; 4] = ["Overview", "Specs", "Reviews", "Shipping"];

/// Stepper step labels.
pub const STEPS: [&str; 4] = ["Account", "Profile", "Preferences", "Review"];

/// Steps that may be skipped.
pub const OPTIONAL_STEPS: [usize; 1] = [2];

/// Speed dial action labels.
pub const SPEED_DIAL_ACTIONS: [&str; 4] = ["Copy", "Save", "Print", "Share"];

/// Items with media, used by the lightbox story.
pub fn demo_images(catalog: &Catalog) -> Vec<Item> {
    catalog
        .items()
        .iter()
        .filter(|item| item.media.is_some())
        .take(6)
        .cloned()
        .collect()
}

/// Masonry tile heights (rows) taken from the `height` attribute.
pub fn masonry_heights(items: &[Item]) -> Vec<u32> {
    items
        .iter()
        .map(|item| match item.attributes.get("height") {
            Some(crate::model::AttrValue::Number(n)) if *n >= 1.0 => *n as u32,
            _ => 3,
        })
        .collect()
}

/// One batch of the simulated feed.
#[derive(Debug, Clone, PartialEq)]
pub struct FeedBatch {
    /// Items in this batch.
    pub items: Vec<Item>,
    /// Whether more items follow.
    pub has_more: bool,
}

/// Batch `[offset, offset + limit)` of a feed of [`FEED_TOTAL`] posts.
pub fn feed_batch(offset: usize, limit: usize) -> Result<FeedBatch, CatalogError> {
    let end = offset.saturating_add(limit).min(FEED_TOTAL);
    let items = (offset..end)
        .map(|i| {
            let id = ItemId::new(format!("post-{:03}", i + 1))?;
            Ok(Item::new(id, format!("Post #{}", i + 1))
                .with_description(format!("Feed entry {} of {FEED_TOTAL}", i + 1)))
        })
        .collect::<Result<Vec<_>, CatalogError>>()?;
    Ok(FeedBatch {
        items,
        has_more: end < FEED_TOTAL,
    })
}
