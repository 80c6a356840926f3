use std::path::Path;

use anyhow::{Context, Result, ensure};

use crate::color::{self, ConditionColors};
use crate::data::group::extract_group;
use crate::data::loader;
use crate::data::model::ObservationTable;
use crate::net::graph::GeneNetwork;
use crate::net::layout::Layout;
use crate::net::metrics::NetworkMetrics;
use crate::plot;

// ---------------------------------------------------------------------------
// Pipeline orchestration
// ---------------------------------------------------------------------------

const EXTRA_FILE: &str = "Pit_Fresh_Extra.csv";
const INTRA_FILE: &str = "Pit_Fresh_Intra.csv";

/// Which source table a condition reads from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Fraction {
    Extracellular,
    Intracellular,
}

impl Fraction {
    fn input_file(self) -> &'static str {
        match self {
            Fraction::Extracellular => EXTRA_FILE,
            Fraction::Intracellular => INTRA_FILE,
        }
    }

    fn label_column(self) -> &'static str {
        match self {
            Fraction::Extracellular => "exDNA type",
            Fraction::Intracellular => "iDNA type",
        }
    }
}

/// One experimental condition: where its rows come from and how its figure
/// is named and styled.
struct Condition {
    name: &'static str,
    fraction: Fraction,
    label: &'static str,
    figure: &'static str,
    colors: ConditionColors,
}

/// Report and rendering order is fixed: exDNA before iDNA, Pit before Fresh.
fn conditions() -> [Condition; 4] {
    [
        Condition {
            name: "Pit exDNA",
            fraction: Fraction::Extracellular,
            label: "Pit",
            figure: "Pit_exDNA_clean.png",
            colors: color::pit_exdna(),
        },
        Condition {
            name: "Fresh exDNA",
            fraction: Fraction::Extracellular,
            label: "Fresh",
            figure: "Fresh_exDNA_clean.png",
            colors: color::fresh_exdna(),
        },
        Condition {
            name: "Pit iDNA",
            fraction: Fraction::Intracellular,
            label: "Pit",
            figure: "Pit_iDNA_clean.png",
            colors: color::pit_idna(),
        },
        Condition {
            name: "Fresh iDNA",
            fraction: Fraction::Intracellular,
            label: "Fresh",
            figure: "Fresh_iDNA_clean.png",
            colors: color::fresh_idna(),
        },
    ]
}

/// Run the whole pipeline: load both tables, build the four networks,
/// print the metric blocks, then render the four figures over one shared
/// layout.
pub fn run() -> Result<()> {
    let extra = loader::load_file(Path::new(EXTRA_FILE))
        .with_context(|| format!("loading {EXTRA_FILE}"))?;
    let intra = loader::load_file(Path::new(INTRA_FILE))
        .with_context(|| format!("loading {INTRA_FILE}"))?;
    ensure!(!extra.is_empty(), "{EXTRA_FILE} has no sample rows");
    ensure!(!intra.is_empty(), "{INTRA_FILE} has no sample rows");
    log::info!(
        "Loaded {} extracellular and {} intracellular samples",
        extra.len(),
        intra.len()
    );

    let conditions = conditions();
    let mut networks = Vec::with_capacity(conditions.len());
    for cond in &conditions {
        let table: &ObservationTable = match cond.fraction {
            Fraction::Extracellular => &extra,
            Fraction::Intracellular => &intra,
        };
        let matrix = extract_group(table, cond.fraction.label_column(), cond.label)
            .with_context(|| format!("extracting {} from {}", cond.name, cond.fraction.input_file()))?;
        log::debug!("{}: {} samples", cond.name, matrix.n_samples());

        let net = GeneNetwork::from_matrix(&matrix)
            .with_context(|| format!("scoring the {} network", cond.name))?;
        networks.push(net);
    }

    // One layout across all four networks keeps node placement comparable
    // between figures.
    let layout = Layout::shared(&networks);

    println!("=== NETWORK METRICS (tau >= 0.5 only) ===\n");
    for (cond, net) in conditions.iter().zip(&networks) {
        print_metrics(cond.name, NetworkMetrics::from_network(net));
    }

    for (cond, net) in conditions.iter().zip(&networks) {
        let title = format!("{} (tau >= 0.5 strong | tau < 0.5 weak)", cond.name);
        plot::draw_network(net, &layout, &title, Path::new(cond.figure), cond.colors)
            .with_context(|| format!("rendering {}", cond.figure))?;
        println!("Saved: {}\n", cond.figure);
    }

    Ok(())
}

fn print_metrics(name: &str, m: NetworkMetrics) {
    println!("{name} (tau >= 0.5 only)");
    println!("  Strong edges:           {}", m.strong_edges);
    println!("  Density:                {:.3}", m.density);
    println!("  Avg degree:             {:.2}", m.avg_degree);
    println!("  Avg clustering:         {:.3}\n", m.avg_clustering);
}
