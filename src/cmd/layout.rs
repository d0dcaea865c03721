use airtype::config::Config;
use airtype::geometry::KeyGrid;
use airtype::layout::LayoutKind;
use clap::Args;
use comfy_table::Table;
use std::process;
use std::str::FromStr;
use strum::IntoEnumIterator;

#[derive(Args, Debug, Clone)]
pub struct LayoutArgs {
    #[command(flatten)]
    pub config: Config,

    /// Which grid to print (qwerty | numpad).
    #[arg(short, long, default_value = "qwerty")]
    pub grid: String,
}

pub fn run(args: LayoutArgs) {
    if let Err(e) = args.config.geometry.validate() {
        eprintln!("❌ {}", e);
        process::exit(1);
    }

    let kind = LayoutKind::from_str(&args.grid).unwrap_or_else(|_| {
        let known: Vec<String> = LayoutKind::iter().map(|k| k.to_string()).collect();
        eprintln!("❌ Unknown grid '{}'. Known: {}", args.grid, known.join(", "));
        process::exit(1);
    });

    let layout = kind.build();
    let bounds = match kind {
        LayoutKind::Qwerty => args.config.geometry.main_bounds(),
        LayoutKind::Numpad => args.config.geometry.pad_bounds(),
    };
    let grid = KeyGrid::compute(&layout, bounds);

    println!("\n⌨️  === {} GRID ===", kind.to_string().to_uppercase());

    let mut table = Table::new();
    table.set_header(["Key", "Row", "Col", "X", "Y", "W", "H"]);

    for (row_idx, row) in layout.rows().iter().enumerate() {
        for (col_idx, key) in row.iter().enumerate() {
            // rect_at cannot miss here: the grid was computed from the
            // same layout we are iterating.
            if let Some(rect) = grid.rect_at(row_idx, col_idx) {
                table.add_row([
                    key.legend(),
                    row_idx.to_string(),
                    col_idx.to_string(),
                    format!("{:.1}", rect.x),
                    format!("{:.1}", rect.y),
                    format!("{:.1}", rect.w),
                    format!("{:.1}", rect.h),
                ]);
            }
        }
    }

    println!("{table}");
}
