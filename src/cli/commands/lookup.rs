//! Lookup command handlers
//!
//! Implements `resolve`, `title`, `list`, and `images`.

use serde_json::json;

use super::print_json;
use crate::cli::args::{ImagesArgs, ListArgs, OutputFormat, ResolveArgs, TitleArgs};
use crate::error::DocsError;
use crate::registry::{Category, Registry};

/// Placeholder shown for a listed topic without a title.
const NO_TITLE: &str = "<no title>";

/// Resolve a slug to its topic identifier and title.
///
/// # Errors
///
/// Returns a lookup error if the category or slug is unknown.
pub fn resolve(registry: &Registry, args: &ResolveArgs) -> Result<(), DocsError> {
    let topic = registry.resolve_slug(&args.category, &args.slug)?;

    // A slug may point at a topic without a title; that is a data issue, not
    // a failed resolve.
    let title = registry.title_of(&args.category, topic.as_str()).ok();
    if title.is_none() {
        tracing::warn!(
            category = %args.category,
            slug = %args.slug,
            %topic,
            "slug resolves to a topic without a title"
        );
    }

    match args.format {
        OutputFormat::Json => print_json(&json!({
            "category": args.category,
            "slug": args.slug,
            "topic": topic,
            "title": title,
        }))?,
        OutputFormat::Human => match title {
            Some(title) => println!("{topic}\t{title}"),
            None => println!("{topic}"),
        },
    }

    Ok(())
}

/// Show the display title of a topic.
///
/// # Errors
///
/// Returns a lookup error if the category or topic is unknown.
pub fn title(registry: &Registry, args: &TitleArgs) -> Result<(), DocsError> {
    let title = registry.title_of(&args.category, &args.topic)?;
    let text = args
        .max_width
        .map_or_else(|| title.as_str().into(), |width| title.truncated(width));

    match args.format {
        OutputFormat::Json => print_json(&json!({
            "category": args.category,
            "topic": args.topic,
            "title": text,
        }))?,
        OutputFormat::Human => println!("{text}"),
    }

    Ok(())
}

/// List all categories, or the topics of one category in menu order.
///
/// # Errors
///
/// Returns a lookup error if the named category is unknown.
pub fn list(registry: &Registry, args: &ListArgs) -> Result<(), DocsError> {
    let Some(ref name) = args.category else {
        return list_categories(registry, args.format);
    };

    let category = registry.category(name)?;

    match args.format {
        OutputFormat::Json => {
            let entries: Vec<serde_json::Value> = category
                .identifiers()
                .iter()
                .map(|id| {
                    json!({
                        "topic": id,
                        "title": category.title(id.as_str()),
                        "slugs": category.slugs_for(id.as_str()).collect::<Vec<_>>(),
                    })
                })
                .collect();
            print_json(&entries)?;
        }
        OutputFormat::Human => {
            if category.identifiers().is_empty() {
                println!("Category '{name}' has no topics.");
                return Ok(());
            }
            print_category(category);
        }
    }

    Ok(())
}

/// List known image assets.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn images(registry: &Registry, args: &ImagesArgs) -> Result<(), DocsError> {
    let images = registry.list_images();

    match args.format {
        OutputFormat::Json => print_json(images)?,
        OutputFormat::Human => {
            for image in images {
                println!("{image}");
            }
        }
    }

    Ok(())
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn list_categories(registry: &Registry, format: OutputFormat) -> Result<(), DocsError> {
    match format {
        OutputFormat::Json => {
            let entries: Vec<serde_json::Value> = registry
                .categories()
                .filter_map(|name| registry.category(name).ok())
                .map(|category| {
                    json!({
                        "name": category.name(),
                        "topics": category.identifiers(),
                    })
                })
                .collect();
            print_json(&entries)?;
        }
        OutputFormat::Human => {
            let names: Vec<&str> = registry.categories().collect();
            if names.is_empty() {
                println!("No categories registered.");
                return Ok(());
            }

            println!("Documentation Registry ({} categories)\n", names.len());
            for name in names {
                if let Ok(category) = registry.category(name) {
                    print_category(category);
                    println!();
                }
            }
        }
    }

    Ok(())
}

fn print_category(category: &Category) {
    println!("  {}", category.name());
    for id in category.identifiers() {
        let title = category.title(id.as_str()).map_or(NO_TITLE, |t| t.as_str());
        println!("    {:<28}{title}", id.as_str());
    }
}
