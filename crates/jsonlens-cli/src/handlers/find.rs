use super::{parse_document, read_input};
use anyhow::Result;
use jsonlens_render::find_paths;
use std::path::Path;

pub fn run(query: &str, file: Option<&Path>) -> Result<()> {
    let input = read_input(file)?;
    let document = parse_document(&input)?;

    let hits = find_paths(&document, query);
    if hits.is_empty() {
        eprintln!("No results found");
        return Ok(());
    }
    for path in hits {
        println!("{}", path);
    }
    Ok(())
}
