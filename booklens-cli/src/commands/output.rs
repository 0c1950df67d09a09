//! Human-readable and JSON rendering of display records

use anyhow::Result;
use booklens_core::{DisplayPage, DisplayRecord};

/// Print full details for one record
pub fn print_record(record: &DisplayRecord, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(record)?);
        return Ok(());
    }

    println!("Title:       {}", record.title);
    if !record.subtitle.is_empty() {
        println!("Subtitle:    {}", record.subtitle);
    }
    if !record.authors.is_empty() {
        println!("Authors:     {}", record.author_line());
    }
    println!("Publisher:   {}", record.publisher);
    println!("Published:   {}", record.published_date);
    if record.page_count > 0 {
        println!("Pages:       {}", record.page_count);
    }
    if !record.categories.is_empty() {
        println!("Categories:  {}", record.categories.join(", "));
    }
    if record.average_rating > 0.0 {
        println!(
            "Rating:      {} ({} ratings)",
            record.average_rating, record.ratings_count
        );
    }
    println!("Language:    {}", record.language);
    if !record.isbn13.is_empty() {
        println!("ISBN-13:     {}", record.isbn13);
    }
    if !record.isbn10.is_empty() {
        println!("ISBN-10:     {}", record.isbn10);
    }
    if let Some(price) = &record.price {
        println!("Price:       {}", price);
    }
    println!("Cover:       {}", record.thumbnail);
    if !record.preview_link.is_empty() {
        println!("Preview:     {}", record.preview_link);
    }
    println!("Description: {}", record.description);

    Ok(())
}

/// Print a page of results with its position
pub fn print_page(page: &DisplayPage, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(page)?);
        return Ok(());
    }

    if page.items.is_empty() {
        println!("No books found.");
        return Ok(());
    }

    let first = u64::from(page.start_index) + 1;
    for (offset, record) in page.items.iter().enumerate() {
        println!(
            "{:>4}. {} by {} [{}]",
            first + offset as u64,
            record.title,
            record.author_line(),
            record.id
        );
    }

    let last = first + page.items.len() as u64 - 1;
    println!(
        "\nPage {} (results {}-{} of {})",
        page.page_number() + 1,
        first,
        last,
        page.total_items
    );

    Ok(())
}
