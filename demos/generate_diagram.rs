//! Example: Generate a blue-noise Voronoi diagram
//!
//! Run with `RUST_LOG=debug` to see pipeline timings.

use blue_voronoi::*;

fn main() -> Result<()> {
    env_logger::init();

    println!("Blue-Noise Voronoi Generation Example");
    println!("=====================================\n");

    let config = DiagramConfigBuilder::new()
        .seed(42)
        .dimensions(800.0, 600.0)?
        .min_distance(40.0)?
        .build()?;

    println!("Configuration:");
    println!("  Seed: {}", config.seed);
    println!("  Rectangle: {} x {}", config.width, config.height);
    println!("  Min Distance: {}", config.min_distance);
    println!("  Expected Sites: ~{}", config.approximate_site_count());
    println!();

    println!("Generating diagram...");
    let diagram = VoronoiDiagram::generate(config)?;
    println!("Generated {} cells\n", diagram.cell_count());

    let total_vertices: usize = diagram.cells().iter().map(Cell::vertex_count).sum();
    let avg_vertices = total_vertices as f64 / diagram.cell_count() as f64;
    let bounding_area = diagram.bounding().area();

    println!("Statistics:");
    println!("  Average vertices per cell: {:.2}", avg_vertices);
    println!(
        "  Covered area: {:.3} of {:.3}",
        diagram.total_area(),
        bounding_area
    );
    println!();

    println!("Sample cells:");
    for cell in diagram.cells().iter().take(5) {
        println!(
            "  Site ({:.2}, {:.2}): vertices={}, area={:.2}",
            cell.site.x,
            cell.site.y,
            cell.vertex_count(),
            cell.area()
        );
    }

    #[cfg(feature = "spatial-index")]
    {
        let position = Point::new(400.0, 300.0);
        let index = diagram.find_cell_at(position);
        let cell = diagram.cell(index)?;
        println!(
            "\nPosition ({}, {}) -> cell {} (site {:.2}, {:.2})",
            position.x, position.y, index, cell.site.x, cell.site.y
        );
    }

    println!("\nGeneration complete!");
    Ok(())
}
