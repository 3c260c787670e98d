use std::path::PathBuf;

use tracing::info;

use crate::bubble;
use crate::config;
use crate::display::{divider, Palette, Part, BANNER, CAT_ART};
use crate::error::Result;
use crate::facts::FactProvider;

/// Print the banner followed by `count` cat facts, one after another
pub async fn facts(count: u32, config_path: Option<PathBuf>) -> Result<()> {
    let config = config::load_or_default(config_path.as_deref())?;
    let provider = FactProvider::new(&config)?;
    let palette = Palette::detect();

    info!(count, endpoint = %config.endpoint, "Showing cat facts");

    println!("{}", palette.paint(Part::Banner, BANNER));
    println!();

    for i in 0..count {
        let fact = provider.get_fact().await;
        println!("{}", render_fact(&fact, config.max_width, &palette)?);

        if i + 1 < count {
            println!("{}", palette.paint(Part::Divider, &divider()));
        }
    }

    Ok(())
}

/// Bubble plus cat for one fact
fn render_fact(fact: &str, max_width: usize, palette: &Palette) -> Result<String> {
    let bubble = bubble::format(fact, max_width)?;
    Ok(format!(
        "{}\n{}",
        palette.paint(Part::Bubble, &bubble.to_string()),
        palette.paint(Part::Cat, CAT_ART)
    ))
}
