//! Example: Compare raw blue-noise sites with Lloyd-relaxed sites

use blue_voronoi::*;

fn area_spread(cells: &[Cell]) -> (f64, f64) {
    let areas: Vec<f64> = cells.iter().map(Cell::area).collect();
    let min = areas.iter().copied().fold(f64::INFINITY, f64::min);
    let max = areas.iter().copied().fold(0.0, f64::max);
    (min, max)
}

fn main() -> Result<()> {
    env_logger::init();

    let bounding = Polygon::rectangle(300.0, 200.0);
    let sites = generation::sample_seeded(300.0, 200.0, 20.0, 30, 7)?;

    let raw = compute_voronoi(&sites, &bounding)?;
    let (min, max) = area_spread(&raw);
    println!("Raw:     {} cells, area range {:.1}..{:.1}", raw.len(), min, max);

    for iterations in [1, 3, 5] {
        let options = LloydOptions {
            max_iterations: iterations,
            convergence_threshold: 0.0,
        };
        let relaxed = lloyd_relaxation(sites.clone(), &bounding, options)?;
        let cells = compute_voronoi(&relaxed, &bounding)?;
        let (min, max) = area_spread(&cells);
        println!(
            "Lloyd {}: {} cells, area range {:.1}..{:.1}",
            iterations,
            cells.len(),
            min,
            max
        );
    }

    Ok(())
}
