use data_loader::Dataset;
use std::collections::BTreeMap;
use std::path::PathBuf;
use std::time::Instant;

fn main() -> anyhow::Result<()> {
    let path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("data/movie-data.json"));

    println!("Loading movie dataset from {}...\n", path.display());

    let start = Instant::now();
    let dataset = Dataset::load_from_file(&path)?;
    let elapsed = start.elapsed();

    let mut by_country: BTreeMap<&str, usize> = BTreeMap::new();
    for movie in dataset.movies() {
        *by_country.entry(movie.country.as_str()).or_default() += 1;
    }

    println!("=== Load Complete ===");
    println!("Time taken: {:?}", elapsed);
    println!("Movies: {}", dataset.len());
    println!("\nMovies per country:");
    for (country, count) in by_country {
        println!("  {:<30} {}", country, count);
    }

    Ok(())
}
